/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Phased-in binary codes.
//!
//! A phased-in binary code with size `s > 0` (AKA [truncated binary
//! encoding](https://en.wikipedia.org/wiki/Truncated_binary_encoding)) is an
//! optimal prefix-free code for the first `s` natural numbers with uniform
//! distribution.
//!
//! The variant implemented here is the one used by adaptive Huffman coding
//! to introduce new symbols: if `e = ⌊log₂s⌋` and `r = s - 2^e`, the first
//! `2r` codewords are the first binary numbers of length `e + 1`, and the
//! remaining `s - 2r` codewords are the last binary numbers of length `e`.
//! Note that this is *not* the assignment of
//! [minimal binary codes](https://docs.rs/dsi-bitstream/latest/dsi_bitstream/codes/minimal_binary/),
//! which give the short codewords to the first values.
//!
//! | Arg | s = 3 | s = 5 | s = 6 |
//! |-----|------:|------:|------:|
//! | 0   |    00 |   000 |   000 |
//! | 1   |    01 |   001 |   001 |
//! | 2   |     1 |    01 |   010 |
//! | 3   |       |    10 |   011 |
//! | 4   |       |    11 |    10 |
//! | 5   |       |       |    11 |

use crate::codes::Alphabet;
use crate::error::{CodecError, DecodeError, EncodeError};
use crate::traits::*;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

#[inline(always)]
fn ensure_size(size: u64) {
    assert!(size > 0, "size = {}", size);
}

/// Return `(e, r)` such that `size = 2^e + r` and `r < 2^e`.
#[inline(always)]
fn split(size: u64) -> (u32, u64) {
    let exp = size.ilog2();
    (exp, size - (1 << exp))
}

/// Return the length of the phased-in binary code for `n` with alphabet
/// size `size`.
#[must_use]
#[inline]
pub fn len_phased(n: u64, size: u64) -> usize {
    ensure_size(size);
    let (exp, rem) = split(size);
    if n < 2 * rem {
        exp as usize + 1
    } else {
        exp as usize
    }
}

/// Trait for reading phased-in binary codes.
pub trait PhasedRead<E: Endianness>: BitRead<E> {
    /// Read the phased-in binary code of a value in `0..size`.
    #[inline]
    fn read_phased(&mut self, size: u64) -> Result<u64, Self::Error> {
        ensure_size(size);
        let (exp, rem) = split(size);
        let prefix = self.read_bits(exp as usize)?;
        Ok(if prefix < rem {
            prefix << 1 | self.read_bits(1)?
        } else {
            prefix + rem
        })
    }
}

/// Trait for writing phased-in binary codes.
pub trait PhasedWrite<E: Endianness>: BitWrite<E> {
    /// Write the phased-in binary code of `n`, which must be in `0..size`,
    /// and return the number of bits written.
    #[inline]
    fn write_phased(&mut self, n: u64, size: u64) -> Result<usize, Self::Error> {
        ensure_size(size);
        debug_assert!(n < size, "n = {} >= size = {}", n, size);
        let (exp, rem) = split(size);
        if n < 2 * rem {
            // the prefix and the last bit are read separately
            self.write_bits(n >> 1, exp as usize)?;
            self.write_bits(n & 1, 1)?;
            Ok(exp as usize + 1)
        } else {
            self.write_bits(n - rem, exp as usize)
        }
    }
}

impl<E: Endianness, B: BitRead<E> + ?Sized> PhasedRead<E> for B {}
impl<E: Endianness, B: BitWrite<E> + ?Sized> PhasedWrite<E> for B {}

/// The escape code of an adaptive coder: a phased-in binary code over the
/// positions of an [`Alphabet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct PhasedCode {
    alphabet: Alphabet,
}

impl PhasedCode {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// The length in bits of the escape code of `symbol`.
    pub fn len(&self, symbol: u32) -> Result<usize, EncodeError> {
        let index = self.index_of(symbol)?;
        Ok(len_phased(index, self.alphabet.size()))
    }

    fn index_of(&self, symbol: u32) -> Result<u64, EncodeError> {
        self.alphabet
            .index_of(symbol)
            .ok_or(EncodeError::SymbolOutOfRange {
                symbol,
                first: self.alphabet.first(),
                last: self.alphabet.last(),
            })
    }

    /// Write the escape code of `symbol` and return the number of bits written.
    pub fn encode<E: Endianness, BW: BitWrite<E> + ?Sized>(
        &self,
        symbol: u32,
        writer: &mut BW,
    ) -> Result<usize, CodecError<BW::Error>> {
        let index = self.index_of(symbol)?;
        writer
            .write_phased(index, self.alphabet.size())
            .map_err(CodecError::Stream)
    }

    /// Read an escape code and return the symbol it denotes.
    pub fn decode<E: Endianness, BR: BitRead<E> + ?Sized>(
        &self,
        reader: &mut BR,
    ) -> Result<u32, CodecError<BR::Error>> {
        let size = self.alphabet.size();
        let index = reader.read_phased(size).map_err(CodecError::Stream)?;
        self.alphabet
            .symbol_at(index)
            .ok_or(CodecError::Decode(DecodeError::OutOfRange { index, size }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::{BitReader, BufBitWriter, MemWordReader, MemWordWriterVec};
    use alloc::vec::Vec;

    fn write_all(size: u64) -> (Vec<u8>, Vec<usize>) {
        let mut writer = BufBitWriter::<BE, _>::new(MemWordWriterVec::<u8, _>::new(Vec::new()));
        let lens = (0..size)
            .map(|n| writer.write_phased(n, size).unwrap())
            .collect();
        (writer.into_inner().unwrap().into_inner(), lens)
    }

    #[test]
    fn test_bijection() {
        for size in [1, 2, 3, 5, 6, 255, 256, 257] {
            let (exp, rem) = split(size);
            let (data, lens) = write_all(size);
            let mut reader = BitReader::<BE, _>::new(MemWordReader::new(data.as_slice()));
            for n in 0..size {
                let len = lens[n as usize];
                assert_eq!(len, len_phased(n, size));
                if n < 2 * rem {
                    assert_eq!(len, exp as usize + 1, "size {} n {}", size, n);
                } else {
                    assert_eq!(len, exp as usize, "size {} n {}", size, n);
                }
                assert_eq!(reader.read_phased(size).unwrap(), n, "size {}", size);
            }
        }
    }

    #[test]
    fn test_table() {
        // the codewords of the module documentation
        let (data, lens) = write_all(5);
        assert_eq!(lens, [3, 3, 2, 2, 2]);
        // 000 001 01 10 11
        assert_eq!(data, [0b0000_0101, 0b1011_0000]);
    }

    #[test]
    fn test_byte_alphabet_is_plain_binary() {
        let code = PhasedCode::new(Alphabet::BYTES);
        let mut writer = BufBitWriter::<BE, _>::new(MemWordWriterVec::<u8, _>::new(Vec::new()));
        assert_eq!(code.encode(65, &mut writer).unwrap(), 8);
        assert_eq!(writer.into_inner().unwrap().into_inner(), [65]);
    }

    #[test]
    fn test_single_symbol_is_empty() {
        let code = PhasedCode::new(Alphabet::new(7, 7).unwrap());
        assert_eq!(code.len(7).unwrap(), 0);
        let data: [u8; 0] = [];
        let mut reader = BitReader::<BE, _>::new(MemWordReader::new(&data));
        assert_eq!(code.decode(&mut reader).unwrap(), 7);
    }

    #[test]
    fn test_offset_alphabet() {
        let alphabet = Alphabet::new(1000, 1256).unwrap();
        let code = PhasedCode::new(alphabet);
        let mut writer = BufBitWriter::<LE, _>::new(MemWordWriterVec::<u8, _>::new(Vec::new()));
        for symbol in [1000, 1001, 1002, 1128, 1256] {
            code.encode(symbol, &mut writer).unwrap();
        }
        assert!(matches!(
            code.encode(999, &mut writer),
            Err(CodecError::Encode(EncodeError::SymbolOutOfRange { symbol: 999, .. }))
        ));
        let data = writer.into_inner().unwrap().into_inner();
        let mut reader = BitReader::<LE, _>::new(MemWordReader::new(data.as_slice()));
        for symbol in [1000, 1001, 1002, 1128, 1256] {
            assert_eq!(code.decode(&mut reader).unwrap(), symbol);
        }
    }

    #[test]
    fn test_little_endian() {
        for size in [2, 3, 5, 6, 7, 100, 257] {
            let mut writer =
                BufBitWriter::<LE, _>::new(MemWordWriterVec::<u8, _>::new(Vec::new()));
            for n in 0..size {
                writer.write_phased(n, size).unwrap();
            }
            let data = writer.into_inner().unwrap().into_inner();
            let mut reader = BitReader::<LE, _>::new(MemWordReader::new(data.as_slice()));
            for n in 0..size {
                assert_eq!(reader.read_phased(size).unwrap(), n, "size {}", size);
            }
        }
    }
}
