//! Encrypt-then-MAC composition of AES-CTR and HMAC.
//!
//! # Security
//!
//! Composition order:
//! - Encrypt first, then MAC over the IV, the ciphertext, and the associated
//!   data. The tag is verified before any decryption is attempted, so
//!   attacker-controlled bytes never reach the cipher
//! - The associated-data length (in bits, big-endian u64) is the final MAC
//!   input block. Without it, moving bytes between the associated data and
//!   the ciphertext could leave the MAC input unchanged
//!
//! IV handling:
//! - Every encryption draws a fresh IV from the injected random source
//! - Freshness is probabilistic: collisions are bounded by the birthday
//!   bound on the IV space. Reuse is not detected; the random source MUST be
//!   a CSPRNG
//! - A failed random draw aborts the encryption with an error. There is no
//!   retry and no fallback source

use std::sync::Arc;

use crate::{
    aead::Aead,
    aes_ctr::AesCtr,
    error::AeadError,
    mac::{HashAlg, TagMac},
    random::{SecureRandom, SystemRandom},
};

/// AEAD built from AES-CTR and a truncated HMAC tag.
///
/// Ciphertext layout: `iv ‖ raw ciphertext ‖ tag`, no delimiters. Both
/// offsets are fixed by the key's parameters. This layout is stable;
/// changing it breaks decryption of previously produced ciphertexts.
///
/// Holds no mutable state: one instance may serve concurrent encrypt and
/// decrypt calls from many threads.
pub struct EncryptThenMac {
    cipher: AesCtr,
    mac: TagMac,
    random: Arc<dyn SecureRandom>,
}

impl EncryptThenMac {
    /// Create a primitive over raw key material, drawing IVs from the OS
    /// CSPRNG.
    ///
    /// # Errors
    ///
    /// Fails with the corresponding [`AeadError`] parameter variant if any
    /// of the sizes is invalid; a primitive is never constructed over
    /// invalid material.
    pub fn new(
        aes_key: &[u8],
        iv_size: usize,
        hash: HashAlg,
        mac_key: &[u8],
        tag_size: usize,
    ) -> Result<Self, AeadError> {
        Self::with_random(aes_key, iv_size, hash, mac_key, tag_size, Arc::new(SystemRandom::new()))
    }

    /// Create a primitive with an injected random source.
    ///
    /// Substituting the source is intended for deterministic tests; in
    /// production use [`EncryptThenMac::new`].
    ///
    /// # Errors
    ///
    /// Same as [`EncryptThenMac::new`].
    pub fn with_random(
        aes_key: &[u8],
        iv_size: usize,
        hash: HashAlg,
        mac_key: &[u8],
        tag_size: usize,
        random: Arc<dyn SecureRandom>,
    ) -> Result<Self, AeadError> {
        Ok(Self {
            cipher: AesCtr::new(aes_key, iv_size)?,
            mac: TagMac::new(hash, mac_key, tag_size)?,
            random,
        })
    }

    /// Smallest well-formed ciphertext for this key: an IV and a tag with an
    /// empty message body.
    pub fn min_ciphertext_len(&self) -> usize {
        self.cipher.iv_size() + self.mac.tag_size()
    }

    /// Associated-data length in bits as the final MAC input block.
    fn ad_length_block(associated_data: &[u8]) -> [u8; 8] {
        ((associated_data.len() as u64) * 8).to_be_bytes()
    }
}

impl Aead for EncryptThenMac {
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>, AeadError> {
        let mut iv = vec![0u8; self.cipher.iv_size()];
        self.random.fill(&mut iv)?;

        let raw = self.cipher.apply_keystream(&iv, plaintext)?;
        let length_block = Self::ad_length_block(associated_data);
        let tag = self.mac.compute(&[&iv, &raw, associated_data, &length_block]);

        let mut out = Vec::with_capacity(iv.len() + raw.len() + tag.len());
        out.extend_from_slice(&iv);
        out.extend_from_slice(&raw);
        out.extend_from_slice(&tag);
        Ok(out)
    }

    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>, AeadError> {
        let min = self.min_ciphertext_len();
        if ciphertext.len() < min {
            return Err(AeadError::CiphertextTooShort { len: ciphertext.len(), min });
        }

        let (iv, rest) = ciphertext.split_at(self.cipher.iv_size());
        let (raw, tag) = rest.split_at(rest.len() - self.mac.tag_size());

        let length_block = Self::ad_length_block(associated_data);
        self.mac.verify(&[iv, raw, associated_data, &length_block], tag)?;

        self.cipher.apply_keystream(iv, raw)
    }
}
