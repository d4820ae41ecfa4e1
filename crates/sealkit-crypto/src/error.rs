//! Error types for the AEAD primitive layer.
//!
//! Four failure classes, kept as distinct typed variants: parameter
//! validation (rejected before any key material is used), malformed input
//! (ciphertext too short to contain an IV and a tag), authentication failure
//! (a single opaque variant that never says why), and randomness failure
//! (fatal, never substituted with a weaker source).

use thiserror::Error;

use crate::mac::HashAlg;

/// Errors from AEAD construction, encryption, and decryption.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AeadError {
    /// AES key length is not one of the supported sizes.
    #[error("unsupported AES key size: {size} bytes (expected 16 or 32)")]
    InvalidAesKeySize {
        /// Length of the rejected key in bytes
        size: usize,
    },

    /// IV size outside the supported range for CTR mode.
    #[error("invalid IV size: {size} bytes (supported range {min}..={max})")]
    InvalidIvSize {
        /// Rejected IV size in bytes
        size: usize,
        /// Smallest supported IV size
        min: usize,
        /// Largest supported IV size (the AES block size)
        max: usize,
    },

    /// HMAC key shorter than the minimum.
    #[error("HMAC key too short: {size} bytes (minimum {min})")]
    InvalidMacKeySize {
        /// Length of the rejected key in bytes
        size: usize,
        /// Minimum accepted key length
        min: usize,
    },

    /// Tag size outside the valid range for the selected hash.
    #[error("invalid tag size: {size} bytes for {hash:?} (valid range {min}..={max})")]
    InvalidTagSize {
        /// Rejected tag size in bytes
        size: usize,
        /// Hash the tag size was checked against
        hash: HashAlg,
        /// Smallest accepted tag size
        min: usize,
        /// Hash output size, the largest possible tag
        max: usize,
    },

    /// Ciphertext shorter than an IV plus a tag.
    ///
    /// Indicates transport corruption or truncation, not forgery; kept
    /// distinct from [`AeadError::AuthenticationFailed`] for diagnostics.
    #[error("ciphertext too short: {len} bytes (minimum {min})")]
    CiphertextTooShort {
        /// Length of the rejected input in bytes
        len: usize,
        /// Minimum valid ciphertext length for the key's parameters
        min: usize,
    },

    /// Tag verification failed.
    ///
    /// Deliberately carries no detail: the caller must not learn whether the
    /// tag, the ciphertext, or the associated data was wrong.
    #[error("ciphertext authentication failed")]
    AuthenticationFailed,

    /// The secure random source failed to produce bytes.
    #[error("secure random source failure: {0}")]
    RandomSource(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authentication_error_reveals_nothing() {
        let msg = AeadError::AuthenticationFailed.to_string();
        assert_eq!(msg, "ciphertext authentication failed");
    }

    #[test]
    fn too_short_error_names_lengths() {
        let err = AeadError::CiphertextTooShort { len: 5, min: 28 };
        assert_eq!(err.to_string(), "ciphertext too short: 5 bytes (minimum 28)");
    }
}
