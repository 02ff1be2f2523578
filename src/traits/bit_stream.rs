/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::error::Error;

use crate::traits::*;

/// Sequential, streaming bit-by-bit reads.
///
/// This trait specifies the basic operations over which codes are
/// implemented by traits such as [`PhasedRead`](crate::codes::PhasedRead),
/// and over which the [`Decoder`](crate::coder::Decoder) walks the
/// adaptive tree.
pub trait BitRead<E: Endianness> {
    type Error: Error + Send + Sync + 'static;

    /// Read `n` bits and return them in the lowest bits.
    ///
    /// `n` must be at most 64. A failed read does not advance the stream.
    fn read_bits(&mut self, n: usize) -> Result<u64, Self::Error>;

    /// Read a single bit.
    #[inline(always)]
    fn read_bit(&mut self) -> Result<bool, Self::Error> {
        Ok(self.read_bits(1)? != 0)
    }

    /// Skip `n` bits from the stream.
    fn skip_bits(&mut self, n: usize) -> Result<(), Self::Error>;
}

/// Sequential, streaming bit-by-bit writes.
///
/// Note that the endianness parameter `E` is used only to specify the
/// endianness of the bit stream, and not that of the method arguments.
pub trait BitWrite<E: Endianness> {
    type Error: Error + Send + Sync + 'static;

    /// Write the lowest `n` bits of `value` to the stream and return the number
    /// of bits written, that is, `n`.
    ///
    /// `n` must be at most 64. The bits of `value` above the lowest `n` are
    /// ignored.
    fn write_bits(&mut self, value: u64, n: usize) -> Result<usize, Self::Error>;

    /// Flush the buffer, padding the last word with zeros.
    ///
    /// Returns the number of padding bits that were added.
    fn flush(&mut self) -> Result<usize, Self::Error>;
}

/// Seekability for [`BitRead`] and [`BitWrite`] streams.
pub trait BitSeek {
    type Error: Error + Send + Sync + 'static;
    /// Get the current position in bits from the start of the stream.
    fn bit_pos(&mut self) -> Result<u64, Self::Error>;

    /// Set the current position in bits from the start of the stream to `bit_pos`.
    fn set_bit_pos(&mut self, bit_pos: u64) -> Result<(), Self::Error>;
}

impl<E: Endianness, B: BitRead<E> + ?Sized> BitRead<E> for &mut B {
    type Error = B::Error;

    #[inline(always)]
    fn read_bits(&mut self, n: usize) -> Result<u64, Self::Error> {
        (**self).read_bits(n)
    }

    #[inline(always)]
    fn skip_bits(&mut self, n: usize) -> Result<(), Self::Error> {
        (**self).skip_bits(n)
    }
}

impl<E: Endianness, B: BitWrite<E> + ?Sized> BitWrite<E> for &mut B {
    type Error = B::Error;

    #[inline(always)]
    fn write_bits(&mut self, value: u64, n: usize) -> Result<usize, Self::Error> {
        (**self).write_bits(value, n)
    }

    #[inline(always)]
    fn flush(&mut self) -> Result<usize, Self::Error> {
        (**self).flush()
    }
}
