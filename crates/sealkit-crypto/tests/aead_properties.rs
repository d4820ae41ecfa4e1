//! Property-based tests for the encrypt-then-MAC AEAD
//!
//! These tests verify the fundamental invariants of the primitive:
//!
//! 1. **Round-trip**: decrypt(encrypt(p, ad), ad) == p for all inputs
//! 2. **Tamper detection**: any single-bit flip anywhere in the ciphertext
//!    is rejected as an authentication failure
//! 3. **AD binding**: decrypting under different associated data fails
//! 4. **Length discipline**: inputs shorter than IV + tag are malformed,
//!    never reported as forgeries

use proptest::prelude::*;
use sealkit_crypto::{Aead, AeadError, EncryptThenMac, HashAlg};

fn key_bytes(seed: u8, size: usize) -> Vec<u8> {
    (0..size).map(|i| seed.wrapping_add(i as u8)).collect()
}

fn hash_strategy() -> impl Strategy<Value = HashAlg> {
    prop_oneof![
        Just(HashAlg::Sha1),
        Just(HashAlg::Sha224),
        Just(HashAlg::Sha256),
        Just(HashAlg::Sha384),
        Just(HashAlg::Sha512),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_roundtrip(
        plaintext in prop::collection::vec(any::<u8>(), 0..1000),
        associated_data in prop::collection::vec(any::<u8>(), 0..100),
        key_seed in any::<u8>(),
        use_aes256 in any::<bool>(),
        hash in hash_strategy(),
    ) {
        let key_size = if use_aes256 { 32 } else { 16 };
        let aead = EncryptThenMac::new(
            &key_bytes(key_seed, key_size),
            16,
            hash,
            &key_bytes(key_seed.wrapping_add(1), 32),
            hash.output_size(),
        ).unwrap();

        let ciphertext = aead.encrypt(&plaintext, &associated_data).unwrap();
        let decrypted = aead.decrypt(&ciphertext, &associated_data).unwrap();

        prop_assert_eq!(decrypted, plaintext);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_bit_flip_anywhere_fails(
        plaintext in prop::collection::vec(any::<u8>(), 0..200),
        associated_data in prop::collection::vec(any::<u8>(), 0..50),
        flip in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let aead = EncryptThenMac::new(
            &key_bytes(0x33, 16),
            16,
            HashAlg::Sha256,
            &key_bytes(0x44, 32),
            32,
        ).unwrap();

        let mut ciphertext = aead.encrypt(&plaintext, &associated_data).unwrap();
        let index = flip.index(ciphertext.len());
        ciphertext[index] ^= 1 << bit;

        prop_assert_eq!(
            aead.decrypt(&ciphertext, &associated_data),
            Err(AeadError::AuthenticationFailed)
        );
    }

    #[test]
    fn prop_different_ad_fails(
        plaintext in prop::collection::vec(any::<u8>(), 0..200),
        ad_a in prop::collection::vec(any::<u8>(), 0..50),
        ad_b in prop::collection::vec(any::<u8>(), 0..50),
    ) {
        prop_assume!(ad_a != ad_b);

        let aead = EncryptThenMac::new(
            &key_bytes(0x55, 32),
            16,
            HashAlg::Sha256,
            &key_bytes(0x66, 32),
            32,
        ).unwrap();

        let ciphertext = aead.encrypt(&plaintext, &ad_a).unwrap();

        prop_assert_eq!(
            aead.decrypt(&ciphertext, &ad_b),
            Err(AeadError::AuthenticationFailed)
        );
    }

    #[test]
    fn prop_short_inputs_are_malformed(
        input in prop::collection::vec(any::<u8>(), 0..48),
        associated_data in prop::collection::vec(any::<u8>(), 0..50),
    ) {
        // 16-byte IV + 32-byte tag: anything under 48 bytes is malformed
        let aead = EncryptThenMac::new(
            &key_bytes(0x77, 16),
            16,
            HashAlg::Sha256,
            &key_bytes(0x88, 32),
            32,
        ).unwrap();

        prop_assert_eq!(
            aead.decrypt(&input, &associated_data),
            Err(AeadError::CiphertextTooShort { len: input.len(), min: 48 })
        );
    }
}
