/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use alloc::vec::Vec;

use super::config::validate_alphabet;
use super::framing::HEADER_BITS;
use crate::codes::{Alphabet, PhasedCode};
use crate::error::{CodecError, ConfigError, DecodeError, Error, LookupError, Result};
use crate::impls::{BitReader, MemWordReader};
use crate::traits::*;
use crate::tree::{HuffmanTree, NodeKind, TreeState};
use crate::utils::{NoProgress, Progress};
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// An adaptive Huffman decoder.
///
/// The decoder walks down its tree one bit at a time. At a leaf it has
/// found an already seen symbol; at the NYT node it reads the phased-in
/// escape code of a new symbol. In both cases it then performs the same
/// update as the [`Encoder`](super::Encoder) that wrote the symbol.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct Decoder {
    tree: HuffmanTree,
    escape: PhasedCode,
}

impl Decoder {
    /// Create a decoder for `alphabet`, which must have at least two
    /// symbols.
    pub fn new(alphabet: Alphabet) -> Result<Self, ConfigError> {
        validate_alphabet(alphabet)?;
        Ok(Self {
            tree: HuffmanTree::new(alphabet),
            escape: PhasedCode::new(alphabet),
        })
    }

    pub fn alphabet(&self) -> Alphabet {
        self.tree.alphabet()
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn state(&self) -> TreeState {
        self.tree.state()
    }

    /// Decode a symbol from `reader` and update the tree.
    pub fn read_symbol<E: Endianness, BR: BitRead<E> + ?Sized>(
        &mut self,
        reader: &mut BR,
    ) -> Result<u32, CodecError<BR::Error>> {
        let mut node = self.tree.root();
        let (symbol, first_appearance) = loop {
            match self.tree.kind(node) {
                NodeKind::Leaf(symbol) => break (symbol, false),
                NodeKind::Nyt => {
                    let symbol = self.escape.decode::<E, _>(reader)?;
                    if self.tree.leaf(symbol).is_some() {
                        return Err(DecodeError::DuplicateSymbol { symbol }.into());
                    }
                    break (symbol, true);
                }
                NodeKind::Internal => {
                    let bit = reader.read_bit().map_err(CodecError::Stream)?;
                    node = self
                        .tree
                        .child(node, bit)
                        .ok_or(LookupError::MissingChild {
                            num: self.tree.node(node).num(),
                        })?;
                }
            }
        };
        self.tree.update(symbol, first_appearance)?;
        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "symbol {} (new: {}) read; tree:\n{}",
                symbol,
                first_appearance,
                self.tree
            );
        }
        Ok(symbol)
    }

    /// Decode a sequence of symbols in the framed format.
    pub fn decode(&mut self, bytes: &[u8]) -> Result<Vec<u32>> {
        self.decode_with_progress(bytes, &mut NoProgress)
    }

    /// Decode a sequence of symbols in the framed format, reporting to
    /// `progress` the number of bits of the code read so far.
    pub fn decode_with_progress(
        &mut self,
        bytes: &[u8],
        progress: &mut impl Progress,
    ) -> Result<Vec<u32>> {
        let total_bits = bytes.len() as u64 * 8;
        let mut reader = BitReader::<BE, _>::new(MemWordReader::new(bytes));
        let padding = reader
            .read_bits(HEADER_BITS)
            .map_err(|_| DecodeError::TruncatedStream { bit_pos: 0 })?;
        // the padding cannot overlap the header
        let end = total_bits - padding;
        if end < HEADER_BITS as u64 {
            return Err(DecodeError::TruncatedStream { bit_pos: end }.into());
        }
        log::debug!(
            "decoding {} bits ({} padding bits)",
            end - HEADER_BITS as u64,
            padding
        );

        let mut symbols = Vec::new();
        progress.start(end - HEADER_BITS as u64);
        loop {
            if reader.bit_pos()? >= end {
                break;
            }
            let symbol = match self.read_symbol::<BE, _>(&mut reader) {
                Ok(symbol) => symbol,
                Err(error) => return Err(into_error(error, reader.bit_pos()?)),
            };
            let pos = reader.bit_pos()?;
            if pos > end {
                // the last codeword ran into the padding
                return Err(DecodeError::TruncatedStream { bit_pos: end }.into());
            }
            symbols.push(symbol);
            progress.update(pos - HEADER_BITS as u64);
        }
        progress.done();
        Ok(symbols)
    }
}

/// Map errors of a memory reader, whose only failure is running out of
/// data, to a truncated stream at `bit_pos`.
fn into_error(error: CodecError<WordError>, bit_pos: u64) -> Error {
    match error {
        CodecError::Lookup(error) => error.into(),
        CodecError::Encode(error) => error.into(),
        CodecError::Decode(error) => error.into(),
        CodecError::Stream(_) => DecodeError::TruncatedStream { bit_pos }.into(),
    }
}
