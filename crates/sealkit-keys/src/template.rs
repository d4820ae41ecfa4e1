//! Predefined key formats for common parameter choices.

use sealkit_crypto::HashAlg;

use crate::format::{AesCtrHmacKeyFormat, AesCtrKeyFormat, HmacKeyFormat};

/// AES-128-CTR with HMAC-SHA256 and a 16-byte tag.
///
/// 16-byte cipher key, 16-byte IV, 32-byte MAC key.
#[must_use]
pub fn aes128_ctr_hmac_sha256() -> AesCtrHmacKeyFormat {
    AesCtrHmacKeyFormat {
        aes_ctr: AesCtrKeyFormat { key_size: 16, iv_size: 16 },
        hmac: HmacKeyFormat { key_size: 32, hash: HashAlg::Sha256, tag_size: 16 },
    }
}

/// AES-256-CTR with HMAC-SHA256 and a full 32-byte tag.
///
/// 32-byte cipher key, 16-byte IV, 32-byte MAC key.
#[must_use]
pub fn aes256_ctr_hmac_sha256() -> AesCtrHmacKeyFormat {
    AesCtrHmacKeyFormat {
        aes_ctr: AesCtrKeyFormat { key_size: 32, iv_size: 16 },
        hmac: HmacKeyFormat { key_size: 32, hash: HashAlg::Sha256, tag_size: 32 },
    }
}
