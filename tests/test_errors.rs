/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use adaptive_huffman::error::*;
use adaptive_huffman::prelude::*;

#[test]
fn test_config_errors() {
    assert_eq!(
        Alphabet::new(7, 3),
        Err(ConfigError::EmptyAlphabet { first: 7, last: 3 })
    );
    let single = Alphabet::new(3, 3).unwrap();
    assert_eq!(
        CoderConfig::new(single).validate(),
        Err(ConfigError::AlphabetTooSmall { size: 1 })
    );
    assert!(matches!(
        Decoder::new(single),
        Err(ConfigError::AlphabetTooSmall { size: 1 })
    ));

    let wide = CoderConfig::new(Alphabet::new(0, 256).unwrap());
    assert_eq!(wide.validate(), Ok(()));
    assert!(matches!(
        compress(b"abc", &wide),
        Err(Error::Config(ConfigError::NotByteAlphabet { last: 256 }))
    ));
    assert!(matches!(
        decompress(&[0xa0], &wide),
        Err(Error::Config(ConfigError::NotByteAlphabet { last: 256 }))
    ));
}

#[test]
fn test_symbol_out_of_range() {
    let config = CoderConfig::new(Alphabet::new(b'a' as u32, b'z' as u32).unwrap());
    assert!(matches!(
        compress(b"hello, world", &config),
        Err(Error::Encode(EncodeError::SymbolOutOfRange {
            symbol: 44,
            first: 97,
            last: 122
        }))
    ));

    // per-symbol coding goes on after a rejected symbol
    let mut encoder = Encoder::new(Alphabet::new(0, 9).unwrap()).unwrap();
    let mut writer = BufBitWriter::<BE, _>::new(MemWordWriterVec::<u8, _>::new(Vec::new()));
    assert!(encoder.write_symbol::<BE, _>(3, &mut writer).is_ok());
    assert!(matches!(
        encoder.write_symbol::<BE, _>(10, &mut writer),
        Err(CodecError::Encode(EncodeError::SymbolOutOfRange { symbol: 10, .. }))
    ));
    assert!(encoder.write_symbol::<BE, _>(3, &mut writer).is_ok());
    assert_eq!(encoder.tree().node(encoder.tree().root()).weight(), 2);
}

#[test]
fn test_truncated() {
    let config = CoderConfig::default();
    let compressed = compress(b"truncated streams", &config).unwrap();
    // dropping bytes leaves codewords running past the end
    for len in 0..compressed.len() {
        match decompress(&compressed[..len], &config) {
            Err(Error::Decode(DecodeError::TruncatedStream { bit_pos })) => {
                assert!(bit_pos <= len as u64 * 8)
            }
            // a cut can fall on a codeword boundary
            Ok(data) => assert!(b"truncated streams".starts_with(&data)),
            Err(error) => panic!("unexpected error {}", error),
        }
    }
    assert!(matches!(
        decompress(&[], &config),
        Err(Error::Decode(DecodeError::TruncatedStream { bit_pos: 0 }))
    ));
}

#[test]
fn test_corrupt() {
    let config = CoderConfig::default();
    let mut compressed = compress(b"corrupt streams never panic", &config).unwrap();
    for i in 0..compressed.len() * 8 {
        compressed[i / 8] ^= 1 << (i % 8);
        match decompress(&compressed, &config) {
            Ok(_)
            | Err(Error::Decode(DecodeError::TruncatedStream { .. }))
            | Err(Error::Decode(DecodeError::DuplicateSymbol { .. })) => {}
            Err(error) => panic!("unexpected error {}", error),
        }
        compressed[i / 8] ^= 1 << (i % 8);
    }
}

#[test]
fn test_error_messages() {
    let error = Error::from(DecodeError::TruncatedStream { bit_pos: 42 });
    assert_eq!(error.to_string(), "stream truncated at bit 42");
    let error = Error::from(ConfigError::NotByteAlphabet { last: 300 });
    assert_eq!(error.to_string(), "last symbol 300 does not fit in a byte");
}

#[cfg(feature = "serde")]
#[test]
fn test_config_serde() {
    let config = CoderConfig::new(Alphabet::new(32, 126).unwrap()).with_dpcm(true);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"alphabet":[32,126],"dpcm":true}"#);
    assert_eq!(serde_json::from_str::<CoderConfig>(&json).unwrap(), config);

    // missing fields take their default value
    assert_eq!(
        serde_json::from_str::<CoderConfig>("{}").unwrap(),
        CoderConfig::default()
    );
    // empty alphabets are rejected
    assert!(serde_json::from_str::<CoderConfig>(r#"{"alphabet":[9,0]}"#).is_err());
}
