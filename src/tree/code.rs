/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Root-to-node paths.

use crate::traits::*;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// The path from the root to a node, `0` for left and `1` for right.
///
/// The first step from the root is the most significant of the `len`
/// lowest bits of `bits`. Since weights are `u64`, the depth of the tree is
/// bounded by the index of the first Fibonacci number exceeding
/// [`u64::MAX`], which is well below 128.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct Code {
    pub bits: u128,
    pub len: u32,
}

impl Code {
    /// Prepend a step to the path.
    #[inline(always)]
    pub(crate) fn push_front(&mut self, bit: bool) {
        debug_assert!(self.len < u128::BITS, "Code too long");
        self.bits |= (bit as u128) << self.len;
        self.len += 1;
    }

    /// Return the `i`-th step from the root.
    #[inline(always)]
    pub fn bit(&self, i: u32) -> bool {
        debug_assert!(i < self.len);
        (self.bits >> (self.len - 1 - i)) & 1 != 0
    }
}

impl core::fmt::Display for Code {
    #[inline(always)]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.len == 0 {
            return Ok(());
        }
        write!(f, "{:0width$b}", self.bits, width = self.len as usize)
    }
}

/// Trait for writing root-to-node paths.
///
/// The path is written step by step from the root, so that a decoder
/// reading one bit at a time meets the steps in the order it walks them.
pub trait CodeWrite<E: Endianness>: BitWrite<E> {
    /// Write `code` and return the number of bits written.
    fn write_code(&mut self, code: Code) -> Result<usize, Self::Error>;
}

impl<B: BitWrite<BE> + ?Sized> CodeWrite<BE> for B {
    #[inline]
    fn write_code(&mut self, code: Code) -> Result<usize, Self::Error> {
        let len = code.len as usize;
        if len > 64 {
            // the most significant bits are written first
            self.write_bits((code.bits >> 64) as u64, len - 64)?;
            self.write_bits(code.bits as u64, 64)?;
            Ok(len)
        } else {
            self.write_bits(code.bits as u64, len)
        }
    }
}

impl<B: BitWrite<LE> + ?Sized> CodeWrite<LE> for B {
    #[inline]
    fn write_code(&mut self, code: Code) -> Result<usize, Self::Error> {
        let len = code.len as usize;
        if len == 0 {
            return Ok(0);
        }
        // the least significant bits are written first
        let rev = code.bits.reverse_bits() >> (128 - len);
        if len > 64 {
            self.write_bits(rev as u64, 64)?;
            self.write_bits((rev >> 64) as u64, len - 64)?;
            Ok(len)
        } else {
            self.write_bits(rev as u64, len)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::{BitReader, BufBitWriter, MemWordReader, MemWordWriterVec};
    use alloc::format;
    use alloc::vec::Vec;
    use core::convert::Infallible;

    fn path(steps: &[bool]) -> Code {
        let mut code = Code::default();
        for &bit in steps.iter().rev() {
            code.push_front(bit);
        }
        code
    }

    #[test]
    fn test_push_front() {
        let code = path(&[true, false, true, true]);
        assert_eq!(code.len, 4);
        assert_eq!(code.bits, 0b1011);
        assert_eq!(format!("{}", code), "1011");
        assert_eq!(format!("{}", Code::default()), "");
        assert!(code.bit(0));
        assert!(!code.bit(1));
    }

    fn write_read<E: Endianness>()
    where
        BufBitWriter<E, MemWordWriterVec<u8, Vec<u8>>>: CodeWrite<E> + BitWrite<E, Error = Infallible>,
        for<'a> BitReader<E, MemWordReader<u8, &'a [u8]>>: BitRead<E>,
    {
        let steps: Vec<bool> = (0..100).map(|i| i % 3 == 0 || i % 7 == 0).collect();
        let codes = [path(&steps[..3]), path(&steps), path(&[]), path(&steps[..64])];
        let mut writer = BufBitWriter::<E, _>::new(MemWordWriterVec::<u8, _>::new(Vec::new()));
        for code in codes {
            assert_eq!(writer.write_code(code).unwrap(), code.len as usize);
        }
        let data = writer.into_inner().unwrap().into_inner();
        let mut reader = BitReader::<E, _>::new(MemWordReader::new(data.as_slice()));
        for code in codes {
            for i in 0..code.len {
                assert_eq!(reader.read_bit().unwrap(), code.bit(i));
            }
        }
    }

    #[test]
    fn test_step_order() {
        write_read::<BE>();
        write_read::<LE>();
    }
}
