/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::codes::Alphabet;
use crate::error::ConfigError;

/// Construction parameters of a coder.
///
/// ```
/// use adaptive_huffman::codes::Alphabet;
/// use adaptive_huffman::coder::CoderConfig;
///
/// let config = CoderConfig::new(Alphabet::BYTES).with_dpcm(true);
/// assert!(config.dpcm);
/// assert_eq!(config, CoderConfig::default().with_dpcm(true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoderConfig {
    /// The symbols that can be coded; all bytes by default.
    #[cfg_attr(feature = "serde", serde(default))]
    pub alphabet: Alphabet,
    /// Whether the byte-level API applies the DPCM transform before
    /// encoding and after decoding.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dpcm: bool,
}

impl CoderConfig {
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            dpcm: false,
        }
    }

    pub fn with_dpcm(mut self, dpcm: bool) -> Self {
        self.dpcm = dpcm;
        self
    }

    /// Check that the alphabet can be adaptively coded.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_alphabet(self.alphabet)
    }

    /// Check that the configuration can be used with the byte-level API.
    pub fn validate_bytes(&self) -> Result<(), ConfigError> {
        self.validate()?;
        if self.alphabet.last() > u8::MAX as u32 {
            return Err(ConfigError::NotByteAlphabet {
                last: self.alphabet.last(),
            });
        }
        Ok(())
    }
}

pub(crate) fn validate_alphabet(alphabet: Alphabet) -> Result<(), ConfigError> {
    if alphabet.size() < 2 {
        return Err(ConfigError::AlphabetTooSmall {
            size: alphabet.size(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(CoderConfig::default().validate_bytes().is_ok());
        let single = CoderConfig::new(Alphabet::new(3, 3).unwrap());
        assert_eq!(
            single.validate(),
            Err(ConfigError::AlphabetTooSmall { size: 1 })
        );
        let wide = CoderConfig::new(Alphabet::new(0, 256).unwrap());
        assert!(wide.validate().is_ok());
        assert_eq!(
            wide.validate_bytes(),
            Err(ConfigError::NotByteAlphabet { last: 256 })
        );
    }
}
