/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Adaptive Huffman encoders and decoders.

An [`Encoder`] and a [`Decoder`] built on the same [`Alphabet`] start from
the same single-node tree and apply the same update after each symbol, so
the decoder can follow the encoder without any table being transmitted.

Symbols can be coded one at a time on any bit stream with
[`Encoder::write_symbol`] and [`Decoder::read_symbol`], or as a whole in the
[framed format](framing) with [`Encoder::encode`] and [`Decoder::decode`].
[`compress`] and [`decompress`] work on bytes, optionally applying the
[DPCM transform](crate::utils::encode_dpcm).

```
use adaptive_huffman::coder::{compress, decompress, CoderConfig};

let config = CoderConfig::default();
let data = b"abracadabra";
let compressed = compress(data, &config)?;
assert_eq!(decompress(&compressed, &config)?, data);
# Ok::<(), adaptive_huffman::error::Error>(())
```

*/

use alloc::vec::Vec;

#[cfg(doc)]
use crate::codes::Alphabet;
use crate::error::Result;
use crate::utils::{decode_dpcm, encode_dpcm};

pub mod config;
pub use config::CoderConfig;

pub mod framing;

mod encoder;
pub use encoder::Encoder;

mod decoder;
pub use decoder::Decoder;

/// Compress bytes in the framed format.
///
/// The alphabet of `config` must not go beyond 255.
pub fn compress(data: &[u8], config: &CoderConfig) -> Result<Vec<u8>> {
    config.validate_bytes()?;
    let data = if config.dpcm {
        encode_dpcm(data)
    } else {
        data.to_vec()
    };
    let symbols: Vec<u32> = data.iter().map(|&byte| byte as u32).collect();
    #[cfg(feature = "std")]
    log::info!(
        "entropy of the input: {:.4} bits per symbol",
        crate::utils::entropy(&symbols)
    );
    let compressed = Encoder::new(config.alphabet)?.encode(&symbols)?;
    log::info!(
        "compressed {} bytes into {} bytes",
        data.len(),
        compressed.len()
    );
    Ok(compressed)
}

/// Decompress bytes compressed by [`compress`] with the same configuration.
pub fn decompress(data: &[u8], config: &CoderConfig) -> Result<Vec<u8>> {
    config.validate_bytes()?;
    let symbols = Decoder::new(config.alphabet)?.decode(data)?;
    // all symbols are in the alphabet, and thus fit in a byte
    let bytes: Vec<u8> = symbols.iter().map(|&symbol| symbol as u8).collect();
    let bytes = if config.dpcm {
        decode_dpcm(&bytes)
    } else {
        bytes
    };
    log::info!(
        "decompressed {} bytes into {} bytes",
        data.len(),
        bytes.len()
    );
    Ok(bytes)
}
