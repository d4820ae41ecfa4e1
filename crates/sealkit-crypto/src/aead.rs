//! The AEAD interface exposed to generic callers.

use crate::error::AeadError;

/// Authenticated encryption with associated data.
///
/// Callers see only this interface and stay unaware of the underlying
/// composition. Implementations are stateless across calls: encrypt and
/// decrypt are independent transactions, and a single instance may be shared
/// read-only across arbitrarily many concurrent calls.
///
/// # Contract
///
/// - `decrypt(encrypt(p, ad), ad) == p` for every plaintext `p` and
///   associated data `ad`
/// - Decryption fails if the ciphertext, the tag, or the associated data was
///   modified in any way
/// - The associated data is authenticated but not encrypted and is not part
///   of the returned ciphertext; the caller must convey it separately
pub trait Aead: Send + Sync {
    /// Encrypts `plaintext`, binding `associated_data` into the tag.
    ///
    /// Returns the complete ciphertext, tag included.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::RandomSource`] if no fresh IV could be drawn.
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>, AeadError>;

    /// Authenticates and decrypts `ciphertext` produced by
    /// [`encrypt`](Self::encrypt) with the same associated data.
    ///
    /// # Errors
    ///
    /// - [`AeadError::CiphertextTooShort`] if the input cannot contain an IV
    ///   and a tag (malformed, not forged)
    /// - [`AeadError::AuthenticationFailed`] if the tag does not verify; no
    ///   plaintext, partial or otherwise, is ever returned in this case
    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>, AeadError>;
}
