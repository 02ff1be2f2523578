/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;

/// An implementation of [`BitWrite`] for a [`WordWrite`].
///
/// Endianness can be selected using the parameter `E`.
///
/// This implementation uses a bit buffer to store bits that are not yet
/// written. The type of the bit buffer is `u128`, so any [`Word`] type can
/// be used by the backend.
///
/// Bits still in the buffer are *not* written when the writer is dropped:
/// call [`BitWrite::flush`] (or [`BufBitWriter::into_inner`]) to pad the last
/// word with zeros and write it out.
#[derive(Debug)]
pub struct BufBitWriter<E: Endianness, WW: WordWrite> {
    /// The [`WordWrite`] to which we will write words.
    backend: WW,
    /// The buffer where we store code writes until we have a word worth of bits.
    buffer: u128,
    /// Counter of how many bits in buffer are to consider valid and should be
    /// written to be backend.
    bits_in_buffer: usize,
    _marker: core::marker::PhantomData<E>,
}

impl<E: Endianness, WW: WordWrite> BufBitWriter<E, WW> {
    /// Create a new [`BufBitWriter`] from a backend word writer.
    pub fn new(backend: WW) -> Self {
        Self {
            backend,
            buffer: 0,
            bits_in_buffer: 0,
            _marker: core::marker::PhantomData,
        }
    }

    /// The number of bits that are buffered and not yet written to the
    /// backend.
    pub fn bits_in_buffer(&self) -> usize {
        self.bits_in_buffer
    }
}

impl<E: Endianness, WW: WordWrite> BufBitWriter<E, WW>
where
    Self: BitWrite<E, Error = WW::Error>,
{
    /// Flush the bit buffer and return the backend.
    pub fn into_inner(mut self) -> Result<WW, WW::Error> {
        BitWrite::<E>::flush(&mut self)?;
        Ok(self.backend)
    }
}

#[inline(always)]
fn low_bits(value: u64, n: usize) -> u128 {
    if n >= 64 {
        value as u128
    } else {
        (value & ((1 << n) - 1)) as u128
    }
}

impl<WW: WordWrite> BufBitWriter<BE, WW> {
    /// Write out all full words at the top of the buffer.
    #[inline]
    fn partial_flush(&mut self) -> Result<(), WW::Error> {
        let bits = <WW::Word as Word>::BITS;
        while self.bits_in_buffer >= bits {
            self.bits_in_buffer -= bits;
            let word = WW::Word::truncate(self.buffer >> self.bits_in_buffer);
            self.backend.write_word(word)?;
        }
        // forget the bits already written
        self.buffer &= (1_u128 << self.bits_in_buffer) - 1;
        Ok(())
    }
}

impl<WW: WordWrite> BitWrite<BE> for BufBitWriter<BE, WW> {
    type Error = WW::Error;

    #[inline]
    fn write_bits(&mut self, value: u64, n_bits: usize) -> Result<usize, Self::Error> {
        debug_assert!(n_bits <= 64);
        if n_bits == 0 {
            return Ok(0);
        }
        // bits_in_buffer < Word::BITS <= 64, so the shift fits in the buffer
        self.buffer = (self.buffer << n_bits) | low_bits(value, n_bits);
        self.bits_in_buffer += n_bits;
        self.partial_flush()?;
        Ok(n_bits)
    }

    fn flush(&mut self) -> Result<usize, Self::Error> {
        let mut padding = 0;
        if self.bits_in_buffer > 0 {
            let bits = <WW::Word as Word>::BITS;
            padding = bits - self.bits_in_buffer;
            let word = WW::Word::truncate(self.buffer << padding);
            self.backend.write_word(word)?;
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
        self.backend.flush()?;
        Ok(padding)
    }
}

impl<WW: WordWrite> BufBitWriter<LE, WW> {
    /// Write out all full words at the bottom of the buffer.
    #[inline]
    fn partial_flush(&mut self) -> Result<(), WW::Error> {
        let bits = <WW::Word as Word>::BITS;
        while self.bits_in_buffer >= bits {
            let word = WW::Word::truncate(self.buffer);
            self.backend.write_word(word)?;
            self.buffer >>= bits;
            self.bits_in_buffer -= bits;
        }
        Ok(())
    }
}

impl<WW: WordWrite> BitWrite<LE> for BufBitWriter<LE, WW> {
    type Error = WW::Error;

    #[inline]
    fn write_bits(&mut self, value: u64, n_bits: usize) -> Result<usize, Self::Error> {
        debug_assert!(n_bits <= 64);
        if n_bits == 0 {
            return Ok(0);
        }
        self.buffer |= low_bits(value, n_bits) << self.bits_in_buffer;
        self.bits_in_buffer += n_bits;
        self.partial_flush()?;
        Ok(n_bits)
    }

    fn flush(&mut self) -> Result<usize, Self::Error> {
        let mut padding = 0;
        if self.bits_in_buffer > 0 {
            padding = <WW::Word as Word>::BITS - self.bits_in_buffer;
            // the bits above bits_in_buffer are already zero
            self.backend.write_word(WW::Word::truncate(self.buffer))?;
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
        self.backend.flush()?;
        Ok(padding)
    }
}
