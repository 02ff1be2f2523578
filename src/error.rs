/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Error types.
//!
//! Per-symbol operations over a generic bit stream return a [`CodecError`],
//! which is parameterized by the error type of the stream. The framed and
//! byte-level functions operate on in-memory streams only and return the
//! non-generic [`Error`].
//!
//! A [`LookupError`] is never a property of the input: it means that the
//! adaptive tree has been corrupted, and the stream cannot be continued.

use core::convert::Infallible;

use thiserror::Error;

/// Invalid construction parameters.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The first symbol of the alphabet is larger than the last one.
    #[error("empty alphabet: first symbol {first} is larger than last symbol {last}")]
    EmptyAlphabet { first: u32, last: u32 },

    /// Adaptive coding needs at least two symbols: with a single symbol
    /// every codeword is empty and the stream cannot carry its length.
    #[error("an alphabet of {size} symbol(s) cannot be adaptively coded")]
    AlphabetTooSmall { size: u64 },

    /// The byte-level API needs every symbol to fit in a byte.
    #[error("last symbol {last} does not fit in a byte")]
    NotByteAlphabet { last: u32 },
}

/// Internal-consistency faults of the adaptive tree.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    /// The symbol has no leaf, and the tree has no NYT node to introduce it.
    #[error("symbol {symbol} has no leaf and the tree has no NYT node")]
    MissingNyt { symbol: u32 },

    /// The symbol was reported as already seen, but it has no leaf.
    #[error("symbol {symbol} was seen before but has no leaf")]
    MissingLeaf { symbol: u32 },

    /// An internal node lacks a child.
    #[error("internal node #{num} lacks a child")]
    MissingChild { num: u64 },
}

/// Violations of the structural invariants of the adaptive tree, as
/// reported by [`HuffmanTree::validate`](crate::tree::HuffmanTree::validate).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantError {
    #[error("expected {expected} NYT node(s), found {found}")]
    NytCount { expected: usize, found: usize },

    #[error("node at index {index} is not reachable from the root")]
    Unreachable { index: usize },

    #[error("node #{num} is a leaf with children, or an internal node without")]
    Shape { num: u64 },

    #[error("node #{num} has a child whose parent link does not point back to it")]
    ParentLink { num: u64 },

    #[error("the children of node #{num} do not have consecutive numbers")]
    SiblingNums { num: u64 },

    #[error("the weight of node #{num} is not the sum of the weights of its children")]
    WeightSum { num: u64 },

    #[error("node #{num} has weight {weight}, but a node with a lower number has weight {lower_weight}")]
    WeightOrder {
        num: u64,
        weight: u64,
        lower_weight: u64,
    },

    #[error("numbers are not consecutive from {max_num} downwards at node #{num}")]
    Nums { num: u64, max_num: u64 },

    #[error("symbol {symbol} is held by more than one leaf, or its leaf is not registered")]
    LeafRegistry { symbol: u32 },
}

/// Symbols that cannot be encoded.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The symbol is outside the configured alphabet.
    #[error("symbol {symbol} is outside the alphabet {first}..={last}")]
    SymbolOutOfRange { symbol: u32, first: u32, last: u32 },
}

/// Malformed or corrupt compressed input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A phased-in code decoded to a symbol outside the alphabet.
    #[error("decoded symbol index {index} is outside an alphabet of {size} symbols")]
    OutOfRange { index: u64, size: u64 },

    /// The stream ended in the middle of a codeword.
    #[error("stream truncated at bit {bit_pos}")]
    TruncatedStream { bit_pos: u64 },

    /// A phased-in code introduced a symbol that already has a leaf.
    #[error("symbol {symbol} was introduced twice")]
    DuplicateSymbol { symbol: u32 },
}

/// Errors of the per-symbol coding operations over a bit stream whose
/// error type is `S`.
#[derive(Error, Debug)]
pub enum CodecError<S> {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The underlying bit stream failed.
    #[error("bit stream error: {0}")]
    Stream(#[source] S),
}

/// Top-level error of the framed, byte-level and file functions.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// File I/O error.
    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for results of the framed, byte-level and file functions.
pub type Result<T, E = Error> = core::result::Result<T, E>;

impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Per-symbol errors over in-memory writers, which cannot fail.
impl From<CodecError<Infallible>> for Error {
    fn from(error: CodecError<Infallible>) -> Self {
        match error {
            CodecError::Lookup(error) => error.into(),
            CodecError::Encode(error) => error.into(),
            CodecError::Decode(error) => error.into(),
            CodecError::Stream(never) => match never {},
        }
    }
}
