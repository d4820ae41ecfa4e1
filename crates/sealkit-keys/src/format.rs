//! Key-format descriptors.
//!
//! A format describes the shape of a key to generate: sizes and algorithm
//! choices, never secret material. Formats arrive from an external
//! registry/configuration loader; this crate only reads and validates them.
//!
//! The `Default` value of every descriptor is the all-zero format, which
//! fails validation (all sizes violate their minimums).

use sealkit_crypto::{AesCtr, HashAlg, TagMac};

use crate::error::KeyError;

/// Shape of the AES-CTR half of a composite key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AesCtrKeyFormat {
    /// AES key size in bytes (16 or 32)
    pub key_size: usize,
    /// IV size in bytes, fixed per key
    pub iv_size: usize,
}

impl AesCtrKeyFormat {
    /// Checks the cipher-key constraints.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::InvalidFormat`] unless the key size is 16 or 32
    /// bytes and the IV size is supported by CTR mode.
    pub fn validate(&self) -> Result<(), KeyError> {
        if !AesCtr::is_supported_key_size(self.key_size) {
            return Err(KeyError::InvalidFormat {
                reason: format!("AES key size must be 16 or 32 bytes, got {}", self.key_size),
            });
        }
        if !(AesCtr::MIN_IV_SIZE..=AesCtr::BLOCK_SIZE).contains(&self.iv_size) {
            return Err(KeyError::InvalidFormat {
                reason: format!(
                    "IV size must be {}..={} bytes, got {}",
                    AesCtr::MIN_IV_SIZE,
                    AesCtr::BLOCK_SIZE,
                    self.iv_size
                ),
            });
        }
        Ok(())
    }
}

/// Shape of the HMAC half of a composite key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HmacKeyFormat {
    /// HMAC key size in bytes (at least 16)
    pub key_size: usize,
    /// Hash function for the tag
    pub hash: HashAlg,
    /// Truncated tag size in bytes
    pub tag_size: usize,
}

impl HmacKeyFormat {
    /// Checks the MAC-key constraints.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::InvalidFormat`] unless the key size meets the
    /// minimum and the tag size fits the selected hash.
    pub fn validate(&self) -> Result<(), KeyError> {
        if self.key_size < TagMac::MIN_KEY_SIZE {
            return Err(KeyError::InvalidFormat {
                reason: format!(
                    "HMAC key size must be at least {} bytes, got {}",
                    TagMac::MIN_KEY_SIZE,
                    self.key_size
                ),
            });
        }
        if self.tag_size < TagMac::MIN_TAG_SIZE {
            return Err(KeyError::InvalidFormat {
                reason: format!(
                    "tag size must be at least {} bytes, got {}",
                    TagMac::MIN_TAG_SIZE,
                    self.tag_size
                ),
            });
        }
        if self.tag_size > self.hash.output_size() {
            return Err(KeyError::InvalidFormat {
                reason: format!(
                    "tag size {} exceeds {:?} output size {}",
                    self.tag_size,
                    self.hash,
                    self.hash.output_size()
                ),
            });
        }
        Ok(())
    }
}

/// Request descriptor for a composite AES-CTR + HMAC key.
///
/// Pairs the cipher-key format with the MAC-key format. Drives validation
/// and generation only; holds no secrets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AesCtrHmacKeyFormat {
    /// Cipher half of the request
    pub aes_ctr: AesCtrKeyFormat,
    /// MAC half of the request
    pub hmac: HmacKeyFormat,
}

impl AesCtrHmacKeyFormat {
    /// Checks both halves; a composite format is valid only if each half
    /// independently satisfies its constraints.
    ///
    /// # Errors
    ///
    /// Returns the first [`KeyError::InvalidFormat`] encountered.
    pub fn validate(&self) -> Result<(), KeyError> {
        self.aes_ctr.validate()?;
        self.hmac.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_format() -> AesCtrHmacKeyFormat {
        AesCtrHmacKeyFormat {
            aes_ctr: AesCtrKeyFormat { key_size: 16, iv_size: 16 },
            hmac: HmacKeyFormat { key_size: 32, hash: HashAlg::Sha256, tag_size: 32 },
        }
    }

    #[test]
    fn valid_format_passes() {
        valid_format().validate().unwrap();
    }

    #[test]
    fn default_format_fails() {
        assert!(AesCtrHmacKeyFormat::default().validate().is_err());
        assert!(AesCtrKeyFormat::default().validate().is_err());
        assert!(HmacKeyFormat::default().validate().is_err());
    }

    #[test]
    fn aes_key_size_boundaries() {
        for key_size in 0..42 {
            let mut format = valid_format();
            format.aes_ctr.key_size = key_size;
            if key_size == 16 || key_size == 32 {
                format.validate().unwrap();
            } else {
                assert!(format.validate().is_err(), "AES key size {key_size} must fail");
            }
        }
    }

    #[test]
    fn hmac_key_size_boundaries() {
        for key_size in 0..42 {
            let mut format = valid_format();
            format.hmac.key_size = key_size;
            if key_size >= 16 {
                format.validate().unwrap();
            } else {
                assert!(format.validate().is_err(), "HMAC key size {key_size} must fail");
            }
        }
    }

    #[test]
    fn iv_size_boundaries() {
        for iv_size in 0..24 {
            let mut format = valid_format();
            format.aes_ctr.iv_size = iv_size;
            if (12..=16).contains(&iv_size) {
                format.validate().unwrap();
            } else {
                assert!(format.validate().is_err(), "IV size {iv_size} must fail");
            }
        }
    }

    #[test]
    fn tag_size_bounded_per_hash() {
        for (hash, max) in [
            (HashAlg::Sha1, 20),
            (HashAlg::Sha224, 28),
            (HashAlg::Sha256, 32),
            (HashAlg::Sha384, 48),
            (HashAlg::Sha512, 64),
        ] {
            let mut format = valid_format();
            format.hmac.hash = hash;

            format.hmac.tag_size = max;
            format.validate().unwrap();

            format.hmac.tag_size = max + 1;
            assert!(format.validate().is_err(), "{hash:?} tag {} must fail", max + 1);

            format.hmac.tag_size = 9;
            assert!(format.validate().is_err(), "{hash:?} tag 9 must fail");

            format.hmac.tag_size = 10;
            format.validate().unwrap();
        }
    }
}
