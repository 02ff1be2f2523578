/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::error::Error;
use core::fmt::Debug;

use num_traits::{AsPrimitive, PrimInt, Unsigned};

/// This is a trait alias for all the properties that we need words of memory
/// read and written by either a [`WordRead`] or [`WordWrite`], respectively.
///
/// It is implemented for `u8`, `u16`, `u32` and `u64`. Bit streams move
/// at most 64 bits at a time, and the bit buffer of
/// [`BufBitWriter`](crate::impls::BufBitWriter) is a `u128`, so wider words
/// are not supported.
pub trait Word: PrimInt + Unsigned + AsPrimitive<u64> + Debug + Send + Sync + 'static {
    /// The number of bits in the word.
    const BITS: usize;

    /// Return the lowest [`Word::BITS`] bits of `value`.
    fn truncate(value: u128) -> Self;
}

macro_rules! impl_word {
    ($($ty:ty),*) => {$(
        impl Word for $ty {
            const BITS: usize = <$ty>::BITS as usize;

            #[inline(always)]
            fn truncate(value: u128) -> Self {
                value as $ty
            }
        }
    )*};
}

impl_word!(u8, u16, u32, u64);

/// Sequential, streaming word-by-word reads.
pub trait WordRead {
    type Error: Error + Send + Sync + 'static;

    /// The word type (the type of the result of [`WordRead::read_word`]).
    type Word: Word;

    /// Read a word and advance the current position.
    fn read_word(&mut self) -> Result<Self::Word, Self::Error>;
}

/// Sequential, streaming word-by-word writes.
pub trait WordWrite {
    type Error: Error + Send + Sync + 'static;

    /// The word type (the type of the argument of [`WordWrite::write_word`]).
    type Word: Word;

    /// Write a word and advance the current position.
    fn write_word(&mut self, word: Self::Word) -> Result<(), Self::Error>;

    /// Flush the stream.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Seekability for [`WordRead`] and [`WordWrite`] streams.
pub trait WordSeek {
    type Error: Error + Send + Sync + 'static;
    /// Get the current position in words from the start of the stream.
    fn word_pos(&mut self) -> Result<u64, Self::Error>;

    /// Set the current position in words from the start of the stream to `word_pos`.
    fn set_word_pos(&mut self, word_pos: u64) -> Result<(), Self::Error>;
}

/// Errors of the in-memory word backends.
///
/// This is a replacement of [`std::io::Error`] usable in `no_std`
/// environments.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordError {
    /// A read went past the end of the data.
    #[error("unexpected end of data at word position {word_pos}")]
    UnexpectedEof { word_pos: u64 },
    /// A seek went past the end of the data.
    #[error("word position {word_pos} is beyond the end of data ({len} words)")]
    SeekPastEnd { word_pos: u64, len: usize },
}
