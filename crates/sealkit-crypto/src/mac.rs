//! Truncated HMAC tags with constant-time verification.

use hmac::{
    Hmac, Mac,
    digest::KeyInit,
};
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::error::AeadError;

/// Hash function underlying an HMAC tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashAlg {
    /// SHA-1 (20-byte output); legacy, kept for existing keysets
    Sha1,
    /// SHA-224 (28-byte output)
    Sha224,
    /// SHA-256 (32-byte output)
    #[default]
    Sha256,
    /// SHA-384 (48-byte output)
    Sha384,
    /// SHA-512 (64-byte output)
    Sha512,
}

impl HashAlg {
    /// Natural output size of the hash in bytes, the largest valid tag size.
    #[must_use]
    pub const fn output_size(self) -> usize {
        match self {
            HashAlg::Sha1 => 20,
            HashAlg::Sha224 => 28,
            HashAlg::Sha256 => 32,
            HashAlg::Sha384 => 48,
            HashAlg::Sha512 => 64,
        }
    }
}

/// Keyed HMAC producing tags truncated to a configured size.
///
/// The key bytes are owned by this object and zeroized on drop.
///
/// # Security
///
/// - Tag size is bounded below by [`MIN_TAG_SIZE`](Self::MIN_TAG_SIZE): a
///   shorter tag makes forgery by guessing practical
/// - Verification is a fixed-time byte-wise comparison; never compare tags
///   with `==`, which short-circuits on the first difference
pub struct TagMac {
    key: Vec<u8>,
    hash: HashAlg,
    tag_size: usize,
}

impl TagMac {
    /// Smallest accepted HMAC key size in bytes.
    pub const MIN_KEY_SIZE: usize = 16;

    /// Smallest accepted tag size in bytes.
    pub const MIN_TAG_SIZE: usize = 10;

    /// Create a tag computer from a hash selector, raw key bytes, and the
    /// truncated tag size.
    ///
    /// # Errors
    ///
    /// - [`AeadError::InvalidMacKeySize`] if the key is shorter than
    ///   [`MIN_KEY_SIZE`](Self::MIN_KEY_SIZE)
    /// - [`AeadError::InvalidTagSize`] unless
    ///   [`MIN_TAG_SIZE`](Self::MIN_TAG_SIZE) <= `tag_size` <= the hash
    ///   output size
    pub fn new(hash: HashAlg, key: &[u8], tag_size: usize) -> Result<Self, AeadError> {
        if key.len() < Self::MIN_KEY_SIZE {
            return Err(AeadError::InvalidMacKeySize { size: key.len(), min: Self::MIN_KEY_SIZE });
        }
        if tag_size < Self::MIN_TAG_SIZE || tag_size > hash.output_size() {
            return Err(AeadError::InvalidTagSize {
                size: tag_size,
                hash,
                min: Self::MIN_TAG_SIZE,
                max: hash.output_size(),
            });
        }
        Ok(Self { key: key.to_vec(), hash, tag_size })
    }

    /// Configured tag size in bytes.
    pub fn tag_size(&self) -> usize {
        self.tag_size
    }

    /// Hash function this MAC is configured with.
    pub fn hash(&self) -> HashAlg {
        self.hash
    }

    /// Computes the truncated tag over the concatenation of `parts`.
    ///
    /// Parts are fed to the MAC in order; the concatenation is never
    /// materialized.
    #[must_use]
    pub fn compute(&self, parts: &[&[u8]]) -> Vec<u8> {
        let mut full = match self.hash {
            HashAlg::Sha1 => mac_parts::<Hmac<Sha1>>(&self.key, parts),
            HashAlg::Sha224 => mac_parts::<Hmac<Sha224>>(&self.key, parts),
            HashAlg::Sha256 => mac_parts::<Hmac<Sha256>>(&self.key, parts),
            HashAlg::Sha384 => mac_parts::<Hmac<Sha384>>(&self.key, parts),
            HashAlg::Sha512 => mac_parts::<Hmac<Sha512>>(&self.key, parts),
        };
        full.truncate(self.tag_size);
        full
    }

    /// Verifies `tag` against the tag recomputed over `parts`.
    ///
    /// The comparison runs in constant time: execution time does not depend
    /// on the position of the first differing byte. A tag of the wrong length
    /// fails without leaking anything beyond the length itself.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::AuthenticationFailed`] on any mismatch, with no
    /// indication of where or why.
    pub fn verify(&self, parts: &[&[u8]], tag: &[u8]) -> Result<(), AeadError> {
        let expected = self.compute(parts);
        if bool::from(expected.as_slice().ct_eq(tag)) {
            Ok(())
        } else {
            Err(AeadError::AuthenticationFailed)
        }
    }
}

impl Drop for TagMac {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

fn mac_parts<M: Mac + KeyInit>(key: &[u8], parts: &[&[u8]]) -> Vec<u8> {
    let Ok(mut mac) = <M as KeyInit>::new_from_slice(key) else {
        unreachable!("HMAC accepts keys of any length");
    };
    for part in parts {
        mac.update(part);
    }
    mac.finalize().into_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_keys() {
        for size in 0..TagMac::MIN_KEY_SIZE {
            let key = vec![0u8; size];
            assert!(matches!(
                TagMac::new(HashAlg::Sha256, &key, 16),
                Err(AeadError::InvalidMacKeySize { size: s, .. }) if s == size
            ));
        }
        assert!(TagMac::new(HashAlg::Sha256, &[0u8; 16], 16).is_ok());
    }

    #[test]
    fn tag_size_bounded_by_hash_output() {
        for hash in [HashAlg::Sha1, HashAlg::Sha224, HashAlg::Sha256, HashAlg::Sha384, HashAlg::Sha512] {
            let key = [0u8; 32];
            assert!(TagMac::new(hash, &key, hash.output_size()).is_ok());
            assert!(TagMac::new(hash, &key, TagMac::MIN_TAG_SIZE).is_ok());
            assert!(matches!(
                TagMac::new(hash, &key, hash.output_size() + 1),
                Err(AeadError::InvalidTagSize { .. })
            ));
            assert!(matches!(
                TagMac::new(hash, &key, TagMac::MIN_TAG_SIZE - 1),
                Err(AeadError::InvalidTagSize { .. })
            ));
        }
    }

    #[test]
    fn computes_truncated_tags() {
        let mac = TagMac::new(HashAlg::Sha512, &[1u8; 32], 24).unwrap();
        assert_eq!(mac.compute(&[b"data"]).len(), 24);
    }

    #[test]
    fn multi_part_equals_concatenation() {
        let mac = TagMac::new(HashAlg::Sha256, &[5u8; 32], 32).unwrap();
        let joined = mac.compute(&[b"hello world"]);
        let split = mac.compute(&[b"hello", b" ", b"world"]);
        assert_eq!(joined, split);
    }

    #[test]
    fn verify_accepts_computed_tag() {
        let mac = TagMac::new(HashAlg::Sha256, &[5u8; 32], 16).unwrap();
        let tag = mac.compute(&[b"payload"]);
        mac.verify(&[b"payload"], &tag).unwrap();
    }

    #[test]
    fn verify_rejects_flipped_bit() {
        let mac = TagMac::new(HashAlg::Sha256, &[5u8; 32], 16).unwrap();
        let mut tag = mac.compute(&[b"payload"]);
        tag[0] ^= 0x01;
        assert_eq!(mac.verify(&[b"payload"], &tag), Err(AeadError::AuthenticationFailed));
    }

    #[test]
    fn verify_rejects_wrong_length_tag() {
        let mac = TagMac::new(HashAlg::Sha256, &[5u8; 32], 16).unwrap();
        let tag = mac.compute(&[b"payload"]);
        assert_eq!(mac.verify(&[b"payload"], &tag[..15]), Err(AeadError::AuthenticationFailed));
    }

    // RFC 2202 test case 1
    #[test]
    fn rfc2202_hmac_sha1_vector() {
        let key = [0x0bu8; 20];
        let mac = TagMac::new(HashAlg::Sha1, &key, 20).unwrap();
        let expected = [
            0xb6, 0x17, 0x31, 0x86, 0x55, 0x05, 0x72, 0x64, 0xe2, 0x8b, 0xc0, 0xb6, 0xfb, 0x37,
            0x8c, 0x8e, 0xf1, 0x46, 0xbe, 0x00,
        ];
        assert_eq!(mac.compute(&[b"Hi There"]), expected);
    }

    // RFC 4231 test case 1
    #[test]
    fn rfc4231_hmac_sha256_vector() {
        let key = [0x0bu8; 20];
        let mac = TagMac::new(HashAlg::Sha256, &key, 32).unwrap();
        let expected = [
            0xb0, 0x34, 0x4c, 0x61, 0xd8, 0xdb, 0x38, 0x53, 0x5c, 0xa8, 0xaf, 0xce, 0xaf, 0x0b,
            0xf1, 0x2b, 0x88, 0x1d, 0xc2, 0x00, 0xc9, 0x83, 0x3d, 0xa7, 0x26, 0xe9, 0x37, 0x6c,
            0x2e, 0x32, 0xcf, 0xf7,
        ];
        assert_eq!(mac.compute(&[b"Hi There"]), expected);
    }
}
