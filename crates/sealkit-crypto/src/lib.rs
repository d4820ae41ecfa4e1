//! Sealkit Cryptographic Primitives
//!
//! Authenticated encryption built by composing AES in CTR mode with an HMAC
//! tag (Encrypt-then-MAC). The primitive is stateless: every encrypt and
//! decrypt call is an independent transaction, so one instance may be shared
//! across threads without locking.
//!
//! # Ciphertext Layout
//!
//! ```text
//! Plaintext
//!     │
//!     ▼
//! AES-CTR (fresh random IV) → raw ciphertext
//!     │
//!     ▼
//! HMAC(iv ‖ raw ciphertext ‖ associated data ‖ ad bit length) → tag
//!     │
//!     ▼
//! iv ‖ raw ciphertext ‖ tag
//! ```
//!
//! No delimiters or length prefixes: the IV and tag sizes are fixed per key,
//! so both offsets are derivable by the receiver. Changing this layout breaks
//! decryption of previously produced ciphertexts.
//!
//! # Security
//!
//! Authenticity:
//! - The tag covers the IV, the ciphertext, and the associated data
//! - Tag comparison is constant-time; a mismatch aborts before any decryption
//! - The associated-data length is bound into the MAC input, so no split of
//!   bytes between ciphertext and associated data can collide
//!
//! IV freshness:
//! - IVs are drawn from an injected cryptographically secure source
//! - Collision risk is the birthday bound on the IV space; reuse is not
//!   actively detected
//!
//! Key hygiene:
//! - All secret key material is zeroized on drop
//! - Randomness failure is a surfaced error, never silently degraded

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod aead;
pub mod aes_ctr;
pub mod encrypt_then_mac;
pub mod error;
pub mod mac;
pub mod random;

pub use aead::Aead;
pub use aes_ctr::AesCtr;
pub use encrypt_then_mac::EncryptThenMac;
pub use error::AeadError;
pub use mac::{HashAlg, TagMac};
pub use random::{SecureRandom, SystemRandom};
