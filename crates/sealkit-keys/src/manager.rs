//! The AES-CTR + HMAC key manager.
//!
//! Validates format descriptors, generates fresh composite keys from an
//! injected CSPRNG, and constructs the encrypt-then-MAC primitive from
//! validated keys. An external registry dispatches to the manager by its
//! type URL and version; the manager itself is registry-agnostic.

use std::sync::Arc;

use sealkit_crypto::{EncryptThenMac, SecureRandom, SystemRandom};
use tracing::debug;

use crate::{
    error::KeyError,
    format::AesCtrHmacKeyFormat,
    key::{AesCtrHmacKey, AesCtrKeyMaterial, HmacKeyMaterial},
};

/// Classification of a manager's key material, used by the external
/// registry for dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMaterialType {
    /// Symmetric secret key material.
    Symmetric,
    /// Private half of an asymmetric key pair.
    AsymmetricPrivate,
    /// Public half of an asymmetric key pair.
    AsymmetricPublic,
    /// Key material held by a remote service.
    Remote,
}

/// Manager for AES-CTR + HMAC composite keys.
///
/// All operations are synchronous and stateless apart from the injected
/// random source; one manager may serve concurrent callers.
pub struct AesCtrHmacKeyManager {
    random: Arc<dyn SecureRandom>,
}

impl AesCtrHmacKeyManager {
    /// Versioned type identifier under which the external registry
    /// dispatches to this manager.
    pub const TYPE_URL: &'static str = "type.sealkit.dev/sealkit.AesCtrHmacAeadKey";

    /// Newest key-format version this manager understands; also the version
    /// stamped on generated keys.
    pub const VERSION: u32 = 0;

    /// Create a manager drawing key material from the OS CSPRNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_random(Arc::new(SystemRandom::new()))
    }

    /// Create a manager with an injected random source.
    ///
    /// Substituting the source is intended for deterministic tests; in
    /// production use [`AesCtrHmacKeyManager::new`].
    #[must_use]
    pub fn with_random(random: Arc<dyn SecureRandom>) -> Self {
        Self { random }
    }

    /// The manager's type URL.
    pub fn type_url(&self) -> &'static str {
        Self::TYPE_URL
    }

    /// The manager's current version.
    pub fn version(&self) -> u32 {
        Self::VERSION
    }

    /// Keys produced by this manager are symmetric secrets.
    pub fn key_material_type(&self) -> KeyMaterialType {
        KeyMaterialType::Symmetric
    }

    /// Checks a format descriptor without touching any key material.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::InvalidFormat`] naming the violated constraint.
    pub fn validate_format(&self, format: &AesCtrHmacKeyFormat) -> Result<(), KeyError> {
        format.validate()
    }

    /// Generates a fresh composite key for `format`.
    ///
    /// Cipher-key and MAC-key bytes are drawn as two independent reads from
    /// the random source, so repeated calls with the same format produce
    /// statistically independent material.
    ///
    /// # Errors
    ///
    /// - [`KeyError::InvalidFormat`] if the format fails validation; the
    ///   failure propagates unchanged and no randomness is consumed
    /// - [`KeyError::Aead`] if the random source fails
    pub fn new_key(&self, format: &AesCtrHmacKeyFormat) -> Result<AesCtrHmacKey, KeyError> {
        format.validate()?;

        let mut aes_key = vec![0u8; format.aes_ctr.key_size];
        self.random.fill(&mut aes_key)?;

        let mut mac_key = vec![0u8; format.hmac.key_size];
        self.random.fill(&mut mac_key)?;

        debug!(
            aes_key_size = format.aes_ctr.key_size,
            iv_size = format.aes_ctr.iv_size,
            mac_key_size = format.hmac.key_size,
            hash = ?format.hmac.hash,
            tag_size = format.hmac.tag_size,
            "generated AES-CTR-HMAC key"
        );

        Ok(AesCtrHmacKey::new(
            Self::VERSION,
            AesCtrKeyMaterial::new(aes_key, format.aes_ctr.iv_size),
            HmacKeyMaterial::new(mac_key, format.hmac.hash, format.hmac.tag_size),
        ))
    }

    /// Checks a materialized key: version, then the same parameter
    /// constraints as [`validate_format`](Self::validate_format) applied to
    /// the actual material.
    ///
    /// # Errors
    ///
    /// - [`KeyError::UnsupportedVersion`] if the key is from a newer format
    /// - [`KeyError::InvalidFormat`] if the material violates a constraint
    pub fn validate_key(&self, key: &AesCtrHmacKey) -> Result<(), KeyError> {
        if key.version() > Self::VERSION {
            return Err(KeyError::UnsupportedVersion {
                version: key.version(),
                max: Self::VERSION,
            });
        }
        key.format().validate()
    }

    /// Constructs the AEAD primitive bound to `key`'s material.
    ///
    /// The primitive shares this manager's random source for IV generation.
    ///
    /// # Errors
    ///
    /// Fails with the [`validate_key`](Self::validate_key) error if the key
    /// is invalid; a primitive is never constructed from invalid material.
    pub fn primitive(&self, key: &AesCtrHmacKey) -> Result<EncryptThenMac, KeyError> {
        self.validate_key(key)?;

        let aead = EncryptThenMac::with_random(
            key.aes_ctr().value(),
            key.aes_ctr().iv_size(),
            key.hmac().hash(),
            key.hmac().value(),
            key.hmac().tag_size(),
            Arc::clone(&self.random),
        )?;

        debug!(
            iv_size = key.aes_ctr().iv_size(),
            hash = ?key.hmac().hash(),
            tag_size = key.hmac().tag_size(),
            "constructed AEAD primitive"
        );

        Ok(aead)
    }
}

impl Default for AesCtrHmacKeyManager {
    fn default() -> Self {
        Self::new()
    }
}
