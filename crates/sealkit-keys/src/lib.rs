//! Sealkit Key Management
//!
//! Validates key-format descriptors, generates fresh composite keys, and
//! instantiates the encrypt-then-MAC primitive from validated key material.
//!
//! # Flow
//!
//! ```text
//! AesCtrHmacKeyFormat (descriptor, no secrets)
//!        │  validate
//!        ▼
//! AesCtrHmacKeyManager::new_key → AesCtrHmacKey (secret material, zeroized)
//!        │  validate + bind
//!        ▼
//! AesCtrHmacKeyManager::primitive → EncryptThenMac (AEAD capability)
//! ```
//!
//! The manager also exposes fixed identity metadata (a versioned type URL,
//! a version number, and a key-material classification) consumed by an
//! external key-type registry for dispatch. Keyset storage, wire encoding
//! of key metadata, and the registry itself live outside this crate.
//!
//! # Security
//!
//! - A primitive is never constructed from material that fails validation
//! - Cipher-key and MAC-key bytes are drawn independently from an injected
//!   CSPRNG; generation never reuses or derives material
//! - All secret bytes are zeroized when a key is dropped
//! - Log events carry parameter sizes only, never key bytes

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod format;
pub mod key;
pub mod manager;
pub mod template;

pub use error::KeyError;
pub use format::{AesCtrHmacKeyFormat, AesCtrKeyFormat, HmacKeyFormat};
pub use key::{AesCtrHmacKey, AesCtrKeyMaterial, HmacKeyMaterial};
pub use manager::{AesCtrHmacKeyManager, KeyMaterialType};
