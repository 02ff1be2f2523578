/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;

/// Wrapping struct that keep tracks of written bits. Optionally,
/// logs at trace level information about methods called.
#[derive(Debug)]
pub struct CountBitWrite<E: Endianness, BW: BitWrite<E>, const PRINT: bool = false> {
    bit_write: BW,
    /// The number of bits written so far on the underlying [`BitWrite`].
    pub bits_written: usize,
    _marker: core::marker::PhantomData<E>,
}

impl<E: Endianness, BW: BitWrite<E>, const PRINT: bool> CountBitWrite<E, BW, PRINT> {
    pub fn new(bit_write: BW) -> Self {
        Self {
            bit_write,
            bits_written: 0,
            _marker: core::marker::PhantomData,
        }
    }

    pub fn into_inner(self) -> BW {
        self.bit_write
    }
}

impl<E: Endianness, BW: BitWrite<E>, const PRINT: bool> BitWrite<E>
    for CountBitWrite<E, BW, PRINT>
{
    type Error = BW::Error;

    fn write_bits(&mut self, value: u64, n_bits: usize) -> Result<usize, Self::Error> {
        self.bit_write.write_bits(value, n_bits).map(|x| {
            self.bits_written += x;
            if PRINT {
                log::trace!(
                    "write_bits({:#016x}, {}) = {} (total = {})",
                    value,
                    n_bits,
                    x,
                    self.bits_written
                );
            }
            x
        })
    }

    /// Padding bits added by the underlying stream are not counted.
    fn flush(&mut self) -> Result<usize, Self::Error> {
        self.bit_write.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::PhasedWrite;
    use crate::impls::{BufBitWriter, MemWordWriterVec};
    use alloc::vec::Vec;

    #[test]
    fn test_count() {
        let bit_write = BufBitWriter::<LE, _>::new(MemWordWriterVec::<u64, _>::new(Vec::new()));
        let mut count_bit_write = CountBitWrite::<_, _, true>::new(bit_write);

        count_bit_write.write_bits(1, 20).unwrap();
        assert_eq!(count_bit_write.bits_written, 20);
        count_bit_write.write_bits(1, 33).unwrap();
        assert_eq!(count_bit_write.bits_written, 53);
        count_bit_write.write_phased(2, 3).unwrap();
        assert_eq!(count_bit_write.bits_written, 54);
        count_bit_write.write_phased(0, 3).unwrap();
        assert_eq!(count_bit_write.bits_written, 56);
        assert_eq!(count_bit_write.flush().unwrap(), 8);
        assert_eq!(count_bit_write.bits_written, 56);
        let data = count_bit_write.into_inner().into_inner().unwrap().into_inner();
        assert_eq!(data.len(), 1);
    }
}
