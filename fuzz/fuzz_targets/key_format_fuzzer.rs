//! Fuzz target for key-format validation and generation
//!
//! Drives the key manager with arbitrary format descriptors.
//!
//! # Invariants
//!
//! - Validation never panics, whatever the sizes
//! - `new_key` succeeds exactly when validation succeeds
//! - Every generated key validates, yields a primitive, and round-trips

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sealkit_crypto::{Aead, HashAlg};
use sealkit_keys::{AesCtrHmacKeyFormat, AesCtrHmacKeyManager, AesCtrKeyFormat, HmacKeyFormat};

#[derive(Debug, Clone, Arbitrary)]
struct FormatScenario {
    aes_key_size: usize,
    iv_size: usize,
    mac_key_size: usize,
    hash: HashChoice,
    tag_size: usize,
    plaintext: Vec<u8>,
    associated_data: Vec<u8>,
}

#[derive(Debug, Clone, Arbitrary)]
enum HashChoice {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashChoice {
    fn alg(&self) -> HashAlg {
        match self {
            HashChoice::Sha1 => HashAlg::Sha1,
            HashChoice::Sha224 => HashAlg::Sha224,
            HashChoice::Sha256 => HashAlg::Sha256,
            HashChoice::Sha384 => HashAlg::Sha384,
            HashChoice::Sha512 => HashAlg::Sha512,
        }
    }
}

fuzz_target!(|scenario: FormatScenario| {
    let format = AesCtrHmacKeyFormat {
        aes_ctr: AesCtrKeyFormat {
            // Bound sizes so rejected-path allocation stays cheap; the
            // validation boundaries of interest are far below this cap
            key_size: scenario.aes_key_size % 1024,
            iv_size: scenario.iv_size % 1024,
        },
        hmac: HmacKeyFormat {
            key_size: scenario.mac_key_size % 1024,
            hash: scenario.hash.alg(),
            tag_size: scenario.tag_size % 1024,
        },
    };

    let manager = AesCtrHmacKeyManager::new();
    let valid = manager.validate_format(&format).is_ok();

    match manager.new_key(&format) {
        Ok(key) => {
            assert!(valid, "generation must not accept a rejected format");
            manager.validate_key(&key).expect("generated keys validate");

            let aead = manager.primitive(&key).expect("valid keys yield primitives");
            let ciphertext = aead
                .encrypt(&scenario.plaintext, &scenario.associated_data)
                .expect("encryption succeeds");
            assert_eq!(
                aead.decrypt(&ciphertext, &scenario.associated_data)
                    .expect("round-trip succeeds"),
                scenario.plaintext
            );
        },
        Err(_) => {
            assert!(!valid, "generation must not reject an accepted format");
        },
    }
});
