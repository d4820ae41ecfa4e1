//! Error types for the key-management layer.

use sealkit_crypto::AeadError;
use thiserror::Error;

/// Errors from key-format validation, key generation, and primitive
/// construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// A key format or key violates a parameter constraint.
    ///
    /// Raised before any key material is touched; always recoverable by
    /// supplying a corrected format.
    #[error("invalid key format: {reason}")]
    InvalidFormat {
        /// Which constraint was violated
        reason: String,
    },

    /// The key's format version is newer than this manager understands.
    #[error("unsupported key version: {version} (manager supports <= {max})")]
    UnsupportedVersion {
        /// Version recorded in the key
        version: u32,
        /// Newest version the manager accepts
        max: u32,
    },

    /// A failure surfaced by the primitive layer (randomness, construction).
    #[error(transparent)]
    Aead(#[from] AeadError),
}
