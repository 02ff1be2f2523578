/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Differential pulse-code modulation of bytes.
//!
//! The first byte is kept, and every following byte is replaced by its
//! difference from the previous one modulo 256. On slowly varying data, such
//! as image rows, differences concentrate around zero and compress better.

use alloc::vec::Vec;

/// Replace each byte after the first with its difference from the previous
/// byte, modulo 256.
///
/// ```
/// use adaptive_huffman::utils::{decode_dpcm, encode_dpcm};
///
/// assert_eq!(encode_dpcm(&[10, 12, 11]), [10, 2, 255]);
/// assert_eq!(decode_dpcm(&[10, 2, 255]), [10, 12, 11]);
/// ```
pub fn encode_dpcm(data: &[u8]) -> Vec<u8> {
    let mut prev = 0_u8;
    data.iter()
        .map(|&byte| {
            let delta = byte.wrapping_sub(prev);
            prev = byte;
            delta
        })
        .collect()
}

/// Invert [`encode_dpcm`] by taking running sums modulo 256.
pub fn decode_dpcm(deltas: &[u8]) -> Vec<u8> {
    let mut acc = 0_u8;
    deltas
        .iter()
        .map(|&delta| {
            acc = acc.wrapping_add(delta);
            acc
        })
        .collect()
}
