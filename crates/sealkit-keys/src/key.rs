//! Materialized composite keys.
//!
//! A key is created once by generation, immutable thereafter, and zeroized
//! when dropped. An external keyset collaborator reads the accessors to
//! persist or encode the key; this crate never serializes material itself.

use sealkit_crypto::HashAlg;
use zeroize::Zeroize;

use crate::format::{AesCtrHmacKeyFormat, AesCtrKeyFormat, HmacKeyFormat};

/// Secret material for the AES-CTR half of a composite key.
#[derive(Clone)]
pub struct AesCtrKeyMaterial {
    value: Vec<u8>,
    iv_size: usize,
}

impl AesCtrKeyMaterial {
    /// Bundle raw cipher-key bytes with the key's fixed IV size.
    #[must_use]
    pub fn new(value: Vec<u8>, iv_size: usize) -> Self {
        Self { value, iv_size }
    }

    /// Raw key bytes.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// IV size in bytes, fixed for the lifetime of the key.
    pub fn iv_size(&self) -> usize {
        self.iv_size
    }
}

impl Drop for AesCtrKeyMaterial {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// Secret material for the HMAC half of a composite key.
#[derive(Clone)]
pub struct HmacKeyMaterial {
    value: Vec<u8>,
    hash: HashAlg,
    tag_size: usize,
}

impl HmacKeyMaterial {
    /// Bundle raw MAC-key bytes with the tag parameters.
    #[must_use]
    pub fn new(value: Vec<u8>, hash: HashAlg, tag_size: usize) -> Self {
        Self { value, hash, tag_size }
    }

    /// Raw key bytes.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Hash function for the tag.
    pub fn hash(&self) -> HashAlg {
        self.hash
    }

    /// Truncated tag size in bytes.
    pub fn tag_size(&self) -> usize {
        self.tag_size
    }
}

impl Drop for HmacKeyMaterial {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// A materialized AES-CTR + HMAC composite key.
///
/// Immutable after construction. Both halves of the secret material are
/// zeroized on drop; clones own independent copies that are zeroized
/// separately.
#[derive(Clone)]
pub struct AesCtrHmacKey {
    version: u32,
    aes_ctr: AesCtrKeyMaterial,
    hmac: HmacKeyMaterial,
}

impl AesCtrHmacKey {
    /// Assemble a key from its parts.
    #[must_use]
    pub fn new(version: u32, aes_ctr: AesCtrKeyMaterial, hmac: HmacKeyMaterial) -> Self {
        Self { version, aes_ctr, hmac }
    }

    /// Format version this key was generated at.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Cipher half of the key.
    pub fn aes_ctr(&self) -> &AesCtrKeyMaterial {
        &self.aes_ctr
    }

    /// MAC half of the key.
    pub fn hmac(&self) -> &HmacKeyMaterial {
        &self.hmac
    }

    /// The format this key's material actually has.
    ///
    /// Derived from the material itself (actual byte lengths, not recorded
    /// claims), so validating the returned format validates the key.
    pub fn format(&self) -> AesCtrHmacKeyFormat {
        AesCtrHmacKeyFormat {
            aes_ctr: AesCtrKeyFormat {
                key_size: self.aes_ctr.value.len(),
                iv_size: self.aes_ctr.iv_size,
            },
            hmac: HmacKeyFormat {
                key_size: self.hmac.value.len(),
                hash: self.hmac.hash,
                tag_size: self.hmac.tag_size,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> AesCtrHmacKey {
        AesCtrHmacKey::new(
            0,
            AesCtrKeyMaterial::new(vec![1u8; 16], 16),
            HmacKeyMaterial::new(vec![2u8; 32], HashAlg::Sha256, 32),
        )
    }

    #[test]
    fn format_reflects_actual_material() {
        let key = test_key();
        let format = key.format();

        assert_eq!(format.aes_ctr.key_size, 16);
        assert_eq!(format.aes_ctr.iv_size, 16);
        assert_eq!(format.hmac.key_size, 32);
        assert_eq!(format.hmac.hash, HashAlg::Sha256);
        assert_eq!(format.hmac.tag_size, 32);
        format.validate().unwrap();
    }

    #[test]
    fn format_of_truncated_material_fails_validation() {
        let key = AesCtrHmacKey::new(
            0,
            AesCtrKeyMaterial::new(vec![1u8; 7], 16),
            HmacKeyMaterial::new(vec![2u8; 32], HashAlg::Sha256, 32),
        );
        assert!(key.format().validate().is_err());
    }

    #[test]
    fn clones_are_independent() {
        let key = test_key();
        let copy = key.clone();
        drop(key);
        // The clone's material survives the original being dropped
        assert_eq!(copy.aes_ctr().value(), &[1u8; 16]);
    }
}
