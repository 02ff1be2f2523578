/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use alloc::vec::Vec;

use super::config::validate_alphabet;
use super::framing::{padding_bits, HEADER_BITS};
use crate::codes::{Alphabet, PhasedCode};
use crate::error::{CodecError, ConfigError, EncodeError, Result};
use crate::impls::{BufBitWriter, MemWordWriterVec};
use crate::traits::*;
use crate::tree::{CodeWrite, HuffmanTree, TreeState};
use crate::utils::{CountBitWrite, NoProgress, Progress};
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// An adaptive Huffman encoder.
///
/// Each symbol is written as its current code, followed, if it is the first
/// occurrence of the symbol, by its phased-in escape code; then the tree is
/// updated. A [`Decoder`](super::Decoder) over the same alphabet mirrors the
/// same updates and stays in lock-step.
///
/// [`write_symbol`](Encoder::write_symbol) works on any bit stream, while
/// [`encode`](Encoder::encode) produces the framed format of the
/// [`framing`](super::framing) module.
///
/// ```
/// use adaptive_huffman::codes::Alphabet;
/// use adaptive_huffman::coder::{Decoder, Encoder};
///
/// let symbols = [65, 66, 65, 67];
/// let bytes = Encoder::new(Alphabet::BYTES)?.encode(&symbols)?;
/// assert_eq!(bytes, [0x28, 0x24, 0x28, 0x86]);
/// assert_eq!(Decoder::new(Alphabet::BYTES)?.decode(&bytes)?, symbols);
/// # Ok::<(), adaptive_huffman::error::Error>(())
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct Encoder {
    tree: HuffmanTree,
    escape: PhasedCode,
}

impl Encoder {
    /// Create an encoder for `alphabet`, which must have at least two
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

    /// Encode `symbol` on `writer`, update the tree, and return the number
    /// of bits written.
    ///
    /// A symbol outside the alphabet is rejected before anything is
    /// written, leaving the encoder usable.
    pub fn write_symbol<E: Endianness, BW: CodeWrite<E> + ?Sized>(
        &mut self,
        symbol: u32,
        writer: &mut BW,
    ) -> Result<usize, CodecError<BW::Error>> {
        let alphabet = self.tree.alphabet();
        if !alphabet.contains(symbol) {
            return Err(EncodeError::SymbolOutOfRange {
                symbol,
                first: alphabet.first(),
                last: alphabet.last(),
            }
            .into());
        }
        let search = self.tree.search(symbol)?;
        let mut written = writer
            .write_code(search.code)
            .map_err(CodecError::Stream)?;
        if search.first_appearance {
            written += self.escape.encode::<E, _>(symbol, writer)?;
        }
        self.tree.update(symbol, search.first_appearance)?;
        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "symbol {} (new: {}) written with {} bits; tree:\n{}",
                symbol,
                search.first_appearance,
                written,
                self.tree
            );
        }
        Ok(written)
    }

    /// Encode `symbols` in the framed format.
    pub fn encode(&mut self, symbols: &[u32]) -> Result<Vec<u8>> {
        self.encode_with_progress(symbols, &mut NoProgress)
    }

    /// Encode `symbols` in the framed format, reporting each symbol to
    /// `progress`.
    pub fn encode_with_progress(
        &mut self,
        symbols: &[u32],
        progress: &mut impl Progress,
    ) -> Result<Vec<u8>> {
        let mut writer = CountBitWrite::<BE, _>::new(BufBitWriter::<BE, _>::new(
            MemWordWriterVec::<u8, _>::new(Vec::new()),
        ));
        // placeholder for the number of padding bits
        writer.write_bits(0, HEADER_BITS)?;

        progress.start(symbols.len() as u64);
        for (i, &symbol) in symbols.iter().enumerate() {
            self.write_symbol::<BE, _>(symbol, &mut writer)?;
            progress.update(i as u64 + 1);
        }
        progress.done();

        let code_len = (writer.bits_written - HEADER_BITS) as u64;
        let padding = padding_bits(code_len);
        let mut bit_writer = writer.into_inner();
        let added = bit_writer.flush()?;
        debug_assert_eq!(added as u64, padding);
        let mut bytes = bit_writer.into_inner()?.into_inner();
        if let Some(first) = bytes.first_mut() {
            *first |= (padding as u8) << (8 - HEADER_BITS);
        }

        log::debug!(
            "encoded {} symbols in {} bits ({} padding bits)",
            symbols.len(),
            code_len,
            padding
        );
        Ok(bytes)
    }
}
