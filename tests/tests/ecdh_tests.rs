//! Integration tests for ECDH/P-384 through the facade

use eccel::prelude::*;
use eccel_tests::fixtures::context;

#[test]
fn test_agreement_commitments_match() {
    let mut ctx = context(11);
    let (a, a_pub) = ecdh::generate(&mut ctx, KeyConfig::p384_key_agreement()).unwrap();
    let (b, b_pub) = ecdh::generate(&mut ctx, KeyConfig::p384_key_agreement()).unwrap();

    let mut ab = BlindedKey::new(KeyConfig::p384_shared_secret()).unwrap();
    let mut ba = BlindedKey::new(KeyConfig::p384_shared_secret()).unwrap();
    ecdh::agree(&mut ctx, &a, &b_pub, &mut ab).unwrap();
    ecdh::agree(&mut ctx, &b, &a_pub, &mut ba).unwrap();

    let label = b"session 1";
    assert_eq!(
        ecdh::commitment(&ab, label).unwrap(),
        ecdh::commitment(&ba, label).unwrap()
    );
}

#[test]
fn test_agreement_with_separate_contexts() {
    let mut alice = context(12);
    let mut bob = context(13);
    let (a, a_pub) = ecdh::generate(&mut alice, KeyConfig::p384_key_agreement()).unwrap();
    let (b, b_pub) = ecdh::generate(&mut bob, KeyConfig::p384_key_agreement()).unwrap();

    let ab = ecdh::derive_shared(&mut alice, &a, &b_pub).unwrap();
    let ba = ecdh::derive_shared(&mut bob, &b, &a_pub).unwrap();
    assert_eq!(
        ecdh::commitment(&ab, b"").unwrap(),
        ecdh::commitment(&ba, b"").unwrap()
    );
}

#[test]
fn test_signing_public_key_is_rejected() {
    let mut ctx = context(14);
    let (a, _) = ecdh::generate(&mut ctx, KeyConfig::p384_key_agreement()).unwrap();
    let (_, signing_pub) = ecdsa::generate(&mut ctx, KeyConfig::p384_signing()).unwrap();
    assert_eq!(
        ecdh::derive_shared(&mut ctx, &a, &signing_pub)
            .unwrap_err()
            .status(),
        Status::BadArgument
    );
}

#[test]
fn test_tampered_shared_secret() {
    let mut ctx = context(15);
    let (a, _) = ecdh::generate(&mut ctx, KeyConfig::p384_key_agreement()).unwrap();
    let (_, b_pub) = ecdh::generate(&mut ctx, KeyConfig::p384_key_agreement()).unwrap();
    let mut shared = ecdh::derive_shared(&mut ctx, &a, &b_pub).unwrap();

    if let KeyMaterial::Blob(blob) = &mut shared.material {
        blob.as_mut_slice()[60] ^= 0x80;
    }
    assert_eq!(
        ecdh::commitment(&shared, b"x").unwrap_err().status(),
        Status::IntegrityError
    );
}

#[test]
fn test_hardware_backed_keys_on_both_sides() {
    let mut ctx = context(16);
    let config = KeyConfig::p384_key_agreement().hardware();
    let mut a = BlindedKey::hardware_backed(config, KeyHandle::new(1, [1; 7])).unwrap();
    let mut b = BlindedKey::hardware_backed(config, KeyHandle::new(1, [2; 7])).unwrap();
    let mut a_pub = UnblindedKey::new(KeyConfig::p384_key_agreement()).unwrap();
    let mut b_pub = UnblindedKey::new(KeyConfig::p384_key_agreement()).unwrap();
    ecdh::keygen(&mut ctx, &mut a, &mut a_pub).unwrap();
    ecdh::keygen(&mut ctx, &mut b, &mut b_pub).unwrap();
    assert_ne!(a_pub, b_pub);

    let ab = ecdh::derive_shared(&mut ctx, &a, &b_pub).unwrap();
    let ba = ecdh::derive_shared(&mut ctx, &b, &a_pub).unwrap();
    assert_eq!(
        ecdh::commitment(&ab, b"hw").unwrap(),
        ecdh::commitment(&ba, b"hw").unwrap()
    );
}
