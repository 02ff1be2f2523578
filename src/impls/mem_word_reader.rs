/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;

/// An implementation of [`WordRead`] and [`WordSeek`] for a slice.
///
/// # Example
/// ```
/// use adaptive_huffman::prelude::*;
///
/// let words: [u8; 2] = [0xa5, 0x5a];
///
/// let mut word_reader = MemWordReader::new(&words);
///
/// // the stream is read sequentially
/// assert_eq!(word_reader.word_pos().unwrap(), 0);
/// assert_eq!(word_reader.read_word().unwrap(), 0xa5);
/// assert_eq!(word_reader.read_word().unwrap(), 0x5a);
/// assert_eq!(word_reader.word_pos().unwrap(), 2);
/// assert!(word_reader.read_word().is_err());
///
/// // you can change position
/// assert!(word_reader.set_word_pos(1).is_ok());
/// assert_eq!(word_reader.read_word().unwrap(), 0x5a);
///
/// // errored set position doesn't change the current position
/// assert!(word_reader.set_word_pos(100).is_err());
/// assert_eq!(word_reader.word_pos().unwrap(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MemWordReader<W: Word, B: AsRef<[W]>> {
    data: B,
    word_index: usize,
    _marker: core::marker::PhantomData<W>,
}

impl<W: Word, B: AsRef<[W]>> MemWordReader<W, B> {
    /// Create a new [`MemWordReader`] from a slice of data
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

impl<W: Word, B: AsRef<[W]>> WordRead for MemWordReader<W, B> {
    type Error = WordError;
    type Word = W;

    #[inline(always)]
    fn read_word(&mut self) -> Result<W, WordError> {
        let word = self
            .data
            .as_ref()
            .get(self.word_index)
            .copied()
            .ok_or(WordError::UnexpectedEof {
                word_pos: self.word_index as u64,
            })?;
        self.word_index += 1;
        Ok(word)
    }
}

impl<W: Word, B: AsRef<[W]>> WordSeek for MemWordReader<W, B> {
    type Error = WordError;

    #[inline(always)]
    fn word_pos(&mut self) -> Result<u64, WordError> {
        Ok(self.word_index as u64)
    }

    #[inline(always)]
    fn set_word_pos(&mut self, word_pos: u64) -> Result<(), WordError> {
        let len = self.data.as_ref().len();
        if word_pos > len as u64 {
            return Err(WordError::SeekPastEnd { word_pos, len });
        }
        self.word_index = word_pos as usize;
        Ok(())
    }
}
