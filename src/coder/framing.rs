/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The framed format: `[3 bits: N][code][N zero bits]`, big endian.
//!
//! `N` is the number of padding bits needed to make the total length a
//! multiple of eight, and is thus at most seven.

/// The length of the header holding the number of padding bits.
pub const HEADER_BITS: usize = 3;

/// Return the number of padding bits following a code of `code_len` bits.
#[inline]
pub fn padding_bits(code_len: u64) -> u64 {
    let framed = code_len + HEADER_BITS as u64;
    framed.div_ceil(8) * 8 - framed
}
