/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::convert::Infallible;
use core::error::Error;

use num_traits::AsPrimitive;

use crate::traits::*;

/// An implementation of [`BitRead`] for a [`WordRead`] that is also a
/// [`WordSeek`], and of [`BitSeek`].
///
/// This implementation accesses randomly the underlying [`WordRead`] without
/// any buffering: every read seeks to the word containing the current bit.
/// Any [`Word`] type can be used; reads spanning several words are
/// assembled one word at a time.
///
/// A failed read leaves the bit position unchanged.
#[derive(Debug, Clone)]
pub struct BitReader<E: Endianness, WR> {
    /// The stream which we will read words from.
    data: WR,
    /// The index of the current bit.
    bit_index: u64,
    _marker: core::marker::PhantomData<E>,
}

impl<E: Endianness, WR> BitReader<E, WR> {
    pub fn new(data: WR) -> Self {
        Self {
            data,
            bit_index: 0,
            _marker: core::marker::PhantomData,
        }
    }

    pub fn into_inner(self) -> WR {
        self.data
    }
}

#[inline(always)]
fn mask(n: usize) -> u64 {
    if n >= 64 { u64::MAX } else { (1 << n) - 1 }
}

impl<E: Endianness, WR> BitReader<E, WR>
where
    WR: WordRead + WordSeek<Error = <WR as WordRead>::Error>,
{
    /// Return the word containing bit `bit_index` as a `u64`, together with
    /// the offset of the bit inside the word.
    #[inline]
    fn word_at(&mut self, bit_index: u64) -> Result<(u64, usize), <WR as WordRead>::Error> {
        let bits = <WR::Word as Word>::BITS as u64;
        self.data.set_word_pos(bit_index / bits)?;
        let word: u64 = self.data.read_word()?.as_();
        Ok((word, (bit_index % bits) as usize))
    }
}

impl<WR, ER> BitRead<BE> for BitReader<BE, WR>
where
    ER: Error + Send + Sync + 'static,
    WR: WordRead<Error = ER> + WordSeek<Error = ER>,
{
    type Error = ER;

    #[inline]
    fn read_bits(&mut self, n_bits: usize) -> Result<u64, Self::Error> {
        debug_assert!(n_bits <= 64);
        let bits = <WR::Word as Word>::BITS;
        let mut result = 0_u64;
        let mut pos = self.bit_index;
        let mut remaining = n_bits;

        while remaining > 0 {
            let (word, offset) = self.word_at(pos)?;
            let available = bits - offset;
            let to_read = remaining.min(available);
            // the first bit of the stream is the most significant one
            let chunk = (word >> (available - to_read)) & mask(to_read);
            result = if to_read == 64 { chunk } else { (result << to_read) | chunk };
            pos += to_read as u64;
            remaining -= to_read;
        }

        self.bit_index = pos;
        Ok(result)
    }

    #[inline(always)]
    fn skip_bits(&mut self, n_bits: usize) -> Result<(), Self::Error> {
        self.bit_index += n_bits as u64;
        Ok(())
    }
}

impl<WR, ER> BitRead<LE> for BitReader<LE, WR>
where
    ER: Error + Send + Sync + 'static,
    WR: WordRead<Error = ER> + WordSeek<Error = ER>,
{
    type Error = ER;

    #[inline]
    fn read_bits(&mut self, n_bits: usize) -> Result<u64, Self::Error> {
        debug_assert!(n_bits <= 64);
        let bits = <WR::Word as Word>::BITS;
        let mut result = 0_u64;
        let mut pos = self.bit_index;
        let mut done = 0;

        while done < n_bits {
            let (word, offset) = self.word_at(pos)?;
            let to_read = (n_bits - done).min(bits - offset);
            // the first bit of the stream is the least significant one
            let chunk = (word >> offset) & mask(to_read);
            result |= chunk << done;
            pos += to_read as u64;
            done += to_read;
        }

        self.bit_index = pos;
        Ok(result)
    }

    #[inline(always)]
    fn skip_bits(&mut self, n_bits: usize) -> Result<(), Self::Error> {
        self.bit_index += n_bits as u64;
        Ok(())
    }
}

impl<E: Endianness, WR> BitSeek for BitReader<E, WR> {
    type Error = Infallible;

    fn bit_pos(&mut self) -> Result<u64, Self::Error> {
        Ok(self.bit_index)
    }

    fn set_bit_pos(&mut self, bit_pos: u64) -> Result<(), Self::Error> {
        self.bit_index = bit_pos;
        Ok(())
    }
}
