/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use alloc::vec::Vec;
use core::convert::Infallible;

use crate::traits::*;

/// An implementation of [`WordWrite`] and [`WordSeek`] for a growable
/// [`Vec`].
///
/// Writes past the end extend the vector, so writing never fails. Seeking
/// past the end is an error.
///
/// # Example
/// ```
/// use adaptive_huffman::prelude::*;
///
/// let mut word_writer = MemWordWriterVec::<u8, _>::new(Vec::new());
///
/// assert!(word_writer.write_word(0xa5).is_ok());
/// assert!(word_writer.write_word(0x5a).is_ok());
/// assert_eq!(word_writer.word_pos().unwrap(), 2);
///
/// // overwrite the first word
/// assert!(word_writer.set_word_pos(0).is_ok());
/// assert!(word_writer.write_word(0xff).is_ok());
/// assert_eq!(word_writer.into_inner(), vec![0xff, 0x5a]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MemWordWriterVec<W: Word, B: AsMut<Vec<W>>> {
    data: B,
    word_index: usize,
    _marker: core::marker::PhantomData<W>,
}

impl<W: Word, B: AsMut<Vec<W>> + AsRef<Vec<W>>> MemWordWriterVec<W, B> {
    /// Create a new [`MemWordWriterVec`] writing from the start of `data`.
    #[must_use]
    pub fn new(data: B) -> Self {
        Self {
            data,
            word_index: 0,
            _marker: Default::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.as_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_inner(self) -> B {
        self.data
    }
}

impl<W: Word, B: AsMut<Vec<W>>> WordWrite for MemWordWriterVec<W, B> {
    type Error = Infallible;
    type Word = W;

    #[inline]
    fn write_word(&mut self, word: W) -> Result<(), Infallible> {
        let data = self.data.as_mut();
        if self.word_index >= data.len() {
            data.resize(self.word_index + 1, W::zero());
        }
        data[self.word_index] = word;
        self.word_index += 1;
        Ok(())
    }

    #[inline(always)]
    fn flush(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

impl<W: Word, B: AsMut<Vec<W>> + AsRef<Vec<W>>> WordSeek for MemWordWriterVec<W, B> {
    type Error = WordError;

    #[inline(always)]
    fn word_pos(&mut self) -> Result<u64, WordError> {
        Ok(self.word_index as u64)
    }

    #[inline]
    fn set_word_pos(&mut self, word_pos: u64) -> Result<(), WordError> {
        let len = self.data.as_ref().len();
        if word_pos > len as u64 {
            return Err(WordError::SeekPastEnd { word_pos, len });
        }
        self.word_index = word_pos as usize;
        Ok(())
    }
}
