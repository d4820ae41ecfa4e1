//! Fuzz target for encrypt-then-MAC decryption
//!
//! Feeds adversarial ciphertexts to `decrypt` under a variety of key
//! parameters.
//!
//! # Strategy
//!
//! - Arbitrary ciphertext bytes (empty, shorter than IV+tag, huge)
//! - Both AES key sizes, all IV sizes, all hashes, all tag sizes
//! - Tampered copies of honestly produced ciphertexts
//!
//! # Invariants
//!
//! - Decryption never panics
//! - Failures are only `CiphertextTooShort` (for inputs under IV+tag) or
//!   `AuthenticationFailed`, never anything else
//! - An honest encrypt → decrypt round-trip always succeeds
//! - Any single-byte corruption of an honest ciphertext fails

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sealkit_crypto::{Aead, AeadError, EncryptThenMac, HashAlg};

#[derive(Debug, Clone, Arbitrary)]
struct DecryptScenario {
    /// Seed material for the AES key
    aes_seed: [u8; 32],
    /// Use AES-256 instead of AES-128
    aes256: bool,
    /// Seed material for the HMAC key
    mac_seed: [u8; 32],
    /// Hash selector
    hash: HashChoice,
    /// IV size, folded into 12..=16
    iv_size_raw: u8,
    /// Tag size, folded into 10..=output
    tag_size_raw: u8,
    /// Adversarial input for decrypt
    ciphertext: Vec<u8>,
    /// Associated data
    associated_data: Vec<u8>,
    /// Plaintext for the honest round-trip check
    plaintext: Vec<u8>,
    /// Corruption position for the tamper check
    corrupt_at: usize,
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

fuzz_target!(|scenario: DecryptScenario| {
    let hash = scenario.hash.alg();
    let iv_size = 12 + (scenario.iv_size_raw as usize % 5);
    let tag_size = 10 + (scenario.tag_size_raw as usize % (hash.output_size() - 9));
    let aes_key_len = if scenario.aes256 { 32 } else { 16 };

    let aead = EncryptThenMac::new(
        &scenario.aes_seed[..aes_key_len],
        iv_size,
        hash,
        &scenario.mac_seed,
        tag_size,
    )
    .expect("parameters are folded into valid ranges");

    // Adversarial input: must fail cleanly or decrypt to something, never panic
    match aead.decrypt(&scenario.ciphertext, &scenario.associated_data) {
        Ok(_) => {
            // A forged ciphertext passing authentication would be a break,
            // but the fuzzer cannot produce a valid tag except by luck;
            // nothing to assert beyond "no panic"
        },
        Err(AeadError::CiphertextTooShort { len, min }) => {
            assert_eq!(len, scenario.ciphertext.len());
            assert_eq!(min, iv_size + tag_size);
            assert!(scenario.ciphertext.len() < min);
        },
        Err(AeadError::AuthenticationFailed) => {
            assert!(scenario.ciphertext.len() >= iv_size + tag_size);
        },
        Err(other) => panic!("unexpected decrypt error: {other}"),
    }

    // Honest round-trip
    let honest = aead
        .encrypt(&scenario.plaintext, &scenario.associated_data)
        .expect("encryption with a valid key succeeds");
    let decrypted = aead
        .decrypt(&honest, &scenario.associated_data)
        .expect("honest ciphertext authenticates");
    assert_eq!(decrypted, scenario.plaintext);

    // Any single-byte corruption must be rejected
    let mut corrupted = honest.clone();
    let index = scenario.corrupt_at % corrupted.len();
    corrupted[index] ^= 0x01;
    assert_eq!(
        aead.decrypt(&corrupted, &scenario.associated_data),
        Err(AeadError::AuthenticationFailed)
    );
});
