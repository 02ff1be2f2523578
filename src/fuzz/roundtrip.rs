/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
pub struct FuzzCase {
    first: u16,
    width: u8,
    symbols: Vec<u16>,
    little_endian: bool,
    garbage: Vec<u8>,
}

pub fn harness(data: FuzzCase) {
    let first = data.first as u32;
    let last = first + 1 + data.width as u32;
    let alphabet = Alphabet::new(first, last).unwrap();
    let symbols: Vec<u32> = data
        .symbols
        .iter()
        .map(|&s| first + s as u32 % (last - first + 1))
        .collect();

    // framed
    let mut encoder = Encoder::new(alphabet).unwrap();
    let bytes = encoder.encode(&symbols).unwrap();
    encoder.tree().validate().unwrap();
    let mut decoder = Decoder::new(alphabet).unwrap();
    assert_eq!(decoder.decode(&bytes).unwrap(), symbols);
    assert_eq!(decoder.tree().nodes(), encoder.tree().nodes());

    // per symbol, on both endiannesses
    if data.little_endian {
        roundtrip::<LE>(alphabet, &symbols);
    } else {
        roundtrip::<BE>(alphabet, &symbols);
    }

    // arbitrary input must never panic
    let _ = Decoder::new(alphabet).unwrap().decode(&data.garbage);
}

fn roundtrip<E: Endianness>(alphabet: Alphabet, symbols: &[u32])
where
    BufBitWriter<E, MemWordWriterVec<u32, Vec<u32>>>:
        CodeWrite<E> + BitWrite<E, Error = core::convert::Infallible>,
    for<'a> BitReader<E, MemWordReader<u32, &'a [u32]>>: BitRead<E>,
{
    let mut encoder = Encoder::new(alphabet).unwrap();
    let mut writer = BufBitWriter::<E, _>::new(MemWordWriterVec::<u32, _>::new(Vec::new()));
    let mut len = 0;
    for &symbol in symbols {
        len += encoder.write_symbol::<E, _>(symbol, &mut writer).unwrap();
    }
    let words = writer.into_inner().unwrap().into_inner();

    let mut decoder = Decoder::new(alphabet).unwrap();
    let mut reader = BitReader::<E, _>::new(MemWordReader::new(words.as_slice()));
    for &symbol in symbols {
        assert_eq!(decoder.read_symbol::<E, _>(&mut reader).unwrap(), symbol);
    }
    assert_eq!(reader.bit_pos().unwrap(), len as u64);
    decoder.tree().validate().unwrap();
}
