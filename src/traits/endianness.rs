/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Inner private trait used to make implementing [`Endianness`]
/// impossible for other structs.
mod private {
    /// This is a [SealedTrait](https://predr.ag/blog/definitive-guide-to-sealed-traits-in-rust/).
    pub trait Endianness {}
}

impl<T: private::Endianness> Endianness for T {}

/// Marker trait for bit-order selector types.
///
/// Its only implementations are [`LittleEndian`] and [`BigEndian`]. A
/// big-endian stream stores the first bit of the stream in the most
/// significant bit of the first word, a little-endian stream in the least
/// significant one.
///
/// The framed adaptive-Huffman format is always [`BigEndian`] over bytes;
/// the per-symbol coding methods accept either order.
pub trait Endianness: private::Endianness {}

/// Selector type for little-endian streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LittleEndian;

/// Selector type for big-endian streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BigEndian;

/// Alias for [`BigEndian`]
pub type BE = BigEndian;

/// Alias for [`LittleEndian`]
pub type LE = LittleEndian;

impl private::Endianness for LittleEndian {}
impl private::Endianness for BigEndian {}
