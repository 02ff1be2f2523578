/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Inclusive ranges of symbols.

use crate::error::ConfigError;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// An inclusive range `first..=last` of `u32` symbols.
///
/// The only way to build an [`Alphabet`] is through a validated
/// constructor, so `first <= last` always holds.
///
/// ```
/// use adaptive_huffman::codes::Alphabet;
///
/// let bytes = Alphabet::BYTES;
/// assert_eq!(bytes.size(), 256);
/// assert_eq!(bytes.index_of(65), Some(65));
///
/// let digits = Alphabet::new(b'0' as u32, b'9' as u32).unwrap();
/// assert_eq!(digits.size(), 10);
/// assert_eq!(digits.index_of(b'3' as u32), Some(3));
/// assert_eq!(digits.symbol_at(9), Some(b'9' as u32));
/// assert!(Alphabet::new(9, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(u32, u32)", into = "(u32, u32)")
)]
pub struct Alphabet {
    first: u32,
    last: u32,
}

impl Alphabet {
    /// All byte values, `0..=255`.
    pub const BYTES: Self = Self {
        first: 0,
        last: 255,
    };

    /// Create an alphabet with inclusive bounds.
    pub fn new(first: u32, last: u32) -> Result<Self, ConfigError> {
        if first > last {
            return Err(ConfigError::EmptyAlphabet { first, last });
        }
        Ok(Self { first, last })
    }

    #[inline(always)]
    pub fn first(&self) -> u32 {
        self.first
    }

    #[inline(always)]
    pub fn last(&self) -> u32 {
        self.last
    }

    /// The number of symbols, which is at least one.
    #[inline(always)]
    pub fn size(&self) -> u64 {
        (self.last - self.first) as u64 + 1
    }

    #[inline(always)]
    pub fn contains(&self, symbol: u32) -> bool {
        (self.first..=self.last).contains(&symbol)
    }

    /// Return the 0-based position of `symbol` in the alphabet.
    #[inline(always)]
    pub fn index_of(&self, symbol: u32) -> Option<u64> {
        self.contains(symbol).then(|| (symbol - self.first) as u64)
    }

    /// Return the symbol at 0-based position `index`.
    #[inline(always)]
    pub fn symbol_at(&self, index: u64) -> Option<u32> {
        (index < self.size()).then(|| self.first + index as u32)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::BYTES
    }
}

impl TryFrom<(u32, u32)> for Alphabet {
    type Error = ConfigError;

    fn try_from((first, last): (u32, u32)) -> Result<Self, Self::Error> {
        Self::new(first, last)
    }
}

impl From<Alphabet> for (u32, u32) {
    fn from(alphabet: Alphabet) -> Self {
        (alphabet.first, alphabet.last)
    }
}

impl core::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}..={}", self.first, self.last)
    }
}
