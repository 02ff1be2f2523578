/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Symbol alphabets and fixed-width escape codes.

An adaptive Huffman coder works on an [`Alphabet`], an inclusive range of
`u32` symbols fixed at construction. The first occurrence of each symbol is
announced by the code of the NYT node followed by the
[phased-in binary code](phased) of the position of the symbol in the
alphabet.

Phased-in codes are implemented as a pair of traits for reading and writing,
[`PhasedRead`] and [`PhasedWrite`], with blanket implementations for every
[`BitRead`](crate::traits::BitRead) and
[`BitWrite`](crate::traits::BitWrite), respectively. [`PhasedCode`] wraps
them with the symbol-to-position mapping of an alphabet.

*/

pub mod alphabet;
pub use alphabet::Alphabet;

pub mod phased;
pub use phased::{len_phased, PhasedCode, PhasedRead, PhasedWrite};
