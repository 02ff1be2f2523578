/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Return the empirical entropy of `symbols`, in bits per symbol.
///
/// This is the lower bound on the average code length of any code that
/// assigns a fixed codeword to each symbol, and thus a yardstick for the
/// adaptive coders of this crate. The entropy of an empty sequence is zero.
pub fn entropy(symbols: &[u32]) -> f64 {
    if symbols.is_empty() {
        return 0.0;
    }
    let mut sorted = symbols.to_vec();
    sorted.sort_unstable();
    let n = symbols.len() as f64;
    sorted
        .chunk_by(|a, b| a == b)
        .map(|run| {
            let p = run.len() as f64 / n;
            -p * p.log2()
        })
        .sum()
}
