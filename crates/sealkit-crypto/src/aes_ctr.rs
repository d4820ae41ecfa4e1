//! AES-CTR keystream cipher.
//!
//! Turns AES-128 or AES-256 into a stream cipher: the IV forms the leading
//! bytes of a zeroed 16-byte counter block which is incremented big-endian
//! across the whole block. Encryption and decryption are the same XOR.

use aes::{
    Aes128, Aes256,
    cipher::{KeyIvInit, StreamCipher},
};
use zeroize::Zeroize;

use crate::error::AeadError;

type Aes128Ctr = ctr::Ctr128BE<Aes128>;
type Aes256Ctr = ctr::Ctr128BE<Aes256>;

/// AES key material, sized by variant.
enum AesKey {
    Aes128([u8; 16]),
    Aes256([u8; 32]),
}

impl Drop for AesKey {
    fn drop(&mut self) {
        match self {
            AesKey::Aes128(key) => key.zeroize(),
            AesKey::Aes256(key) => key.zeroize(),
        }
    }
}

/// AES in CTR mode with a fixed per-key IV size.
///
/// The key bytes are owned by this object and zeroized on drop.
pub struct AesCtr {
    key: AesKey,
    iv_size: usize,
}

impl AesCtr {
    /// Smallest supported IV size in bytes.
    pub const MIN_IV_SIZE: usize = 12;

    /// AES block size in bytes, the largest supported IV size.
    pub const BLOCK_SIZE: usize = 16;

    /// Create a cipher from raw key bytes and an IV size.
    ///
    /// # Errors
    ///
    /// - [`AeadError::InvalidAesKeySize`] unless the key is 16 or 32 bytes
    /// - [`AeadError::InvalidIvSize`] unless `iv_size` is in
    ///   [`MIN_IV_SIZE`](Self::MIN_IV_SIZE)..=[`BLOCK_SIZE`](Self::BLOCK_SIZE)
    pub fn new(key: &[u8], iv_size: usize) -> Result<Self, AeadError> {
        if !(Self::MIN_IV_SIZE..=Self::BLOCK_SIZE).contains(&iv_size) {
            return Err(AeadError::InvalidIvSize {
                size: iv_size,
                min: Self::MIN_IV_SIZE,
                max: Self::BLOCK_SIZE,
            });
        }

        let key = match key.len() {
            16 => {
                let mut bytes = [0u8; 16];
                bytes.copy_from_slice(key);
                AesKey::Aes128(bytes)
            },
            32 => {
                let mut bytes = [0u8; 32];
                bytes.copy_from_slice(key);
                AesKey::Aes256(bytes)
            },
            size => return Err(AeadError::InvalidAesKeySize { size }),
        };

        Ok(Self { key, iv_size })
    }

    /// Returns true if `size` is a supported AES key length in bytes.
    #[must_use]
    pub fn is_supported_key_size(size: usize) -> bool {
        matches!(size, 16 | 32)
    }

    /// IV size this cipher was configured with, in bytes.
    pub fn iv_size(&self) -> usize {
        self.iv_size
    }

    /// Applies the keystream for `iv` to `data` and returns the result.
    ///
    /// CTR mode is an XOR with the keystream, so this is both encryption and
    /// decryption.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::InvalidIvSize`] if `iv` is not exactly
    /// [`iv_size`](Self::iv_size) bytes.
    pub fn apply_keystream(&self, iv: &[u8], data: &[u8]) -> Result<Vec<u8>, AeadError> {
        if iv.len() != self.iv_size {
            return Err(AeadError::InvalidIvSize {
                size: iv.len(),
                min: self.iv_size,
                max: self.iv_size,
            });
        }

        // Counter block: IV in the leading bytes, zero-padded to the block
        let mut block = [0u8; Self::BLOCK_SIZE];
        block[..iv.len()].copy_from_slice(iv);

        let mut out = data.to_vec();
        match &self.key {
            AesKey::Aes128(key) => {
                let mut cipher = Aes128Ctr::new(key.into(), &block.into());
                cipher.apply_keystream(&mut out);
            },
            AesKey::Aes256(key) => {
                let mut cipher = Aes256Ctr::new(key.into(), &block.into());
                cipher.apply_keystream(&mut out);
            },
        }
        Ok(out)
    }
}
