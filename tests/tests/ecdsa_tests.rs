//! Integration tests for ECDSA/P-384 through the facade

use eccel::prelude::*;
use eccel_tests::fixtures::{context, digest, slow_context};
use eccel_tests::vectors::RFC6979_P384;

#[test]
fn test_rfc6979_vectors() {
    let mut ctx = context(1);
    for vector in RFC6979_P384.iter() {
        let sk = import_blinded(KeyConfig::p384_signing(), &vector.share0(), &[0u8; 56]).unwrap();
        let pk = UnblindedKey::from_bytes(KeyConfig::p384_signing(), &vector.public).unwrap();
        let d = digest(vector.message);

        let signature = ecdsa::sign(&mut ctx, &sk, &d).unwrap();
        assert_eq!(signature.r_bytes().to_vec(), vector.r);
        assert_eq!(signature.s_bytes().to_vec(), vector.s);
        assert_eq!(ecdsa::verify(&mut ctx, &pk, &d, &signature).unwrap(), HardenedBool::TRUE);
    }
}

#[test]
fn test_vector_signatures_cross_verify() {
    // a signature built from the published scalars verifies without signing
    let mut ctx = context(2);
    let vector = &RFC6979_P384[1];
    let mut r = [0u8; 48];
    let mut s = [0u8; 48];
    r.copy_from_slice(&vector.r);
    s.copy_from_slice(&vector.s);
    let signature = Signature::from_scalars(&r, &s);
    let pk = UnblindedKey::from_bytes(KeyConfig::p384_signing(), &vector.public).unwrap();

    assert!(ecdsa::verify(&mut ctx, &pk, &digest(b"test"), &signature).unwrap().is_true());
    assert!(ecdsa::verify(&mut ctx, &pk, &digest(b"sample"), &signature).unwrap().is_false());
}

#[test]
fn test_blinding_does_not_change_signatures() {
    // any split of the same d signs identically
    let mut ctx = context(3);
    let vector = &RFC6979_P384[0];
    let d = digest(vector.message);

    // (d - 5) + 5
    let mut share0 = vector.share0();
    share0[55] -= 5;
    let mut share1 = [0u8; 56];
    share1[55] = 5;
    let split = import_blinded(KeyConfig::p384_signing(), &share0, &share1).unwrap();

    // (d + n) + 0
    let wrapped = hex::decode(
        "00000000000000016b9d3dad2e1b8c1c05b19875b6659f4de23c3b667bf297ba\
         6207c4c26ca865b7eeef800095214fa0e55ee3552d981768",
    )
    .unwrap();
    let lifted = import_blinded(KeyConfig::p384_signing(), &wrapped, &[0u8; 56]).unwrap();

    for key in [&split, &lifted] {
        let signature = ecdsa::sign(&mut ctx, key, &d).unwrap();
        assert_eq!(signature.r_bytes().to_vec(), vector.r);
        assert_eq!(signature.s_bytes().to_vec(), vector.s);
    }
}

#[test]
fn test_keygen_produces_valid_keys() {
    let mut ctx = context(4);
    for _ in 0..4 {
        let (sk, pk) = ecdsa::generate(&mut ctx, KeyConfig::p384_signing()).unwrap();
        assert!(sk.verify_checksum().is_ok());
        assert_eq!(pk.key.len(), 96);
        let d = digest(b"fresh key");
        let signature = ecdsa::sign(&mut ctx, &sk, &d).unwrap();
        assert!(ecdsa::verify(&mut ctx, &pk, &d, &signature).unwrap().is_true());
    }
}

#[test]
fn test_verify_status_is_ok_for_invalid_signatures() {
    let mut ctx = context(5);
    let (sk, pk) = ecdsa::generate(&mut ctx, KeyConfig::p384_signing()).unwrap();
    let d = digest(b"status");
    let mut signature = ecdsa::sign(&mut ctx, &sk, &d).unwrap();
    signature.words_mut()[20] ^= 0x10;

    let result = ecdsa::verify(&mut ctx, &pk, &d, &signature);
    assert_eq!(Status::of(&result), Status::Ok);
    assert_eq!(result.unwrap().raw(), 0x1d4);
}

#[test]
fn test_out_of_range_scalars() {
    let mut ctx = context(6);
    let (_, pk) = ecdsa::generate(&mut ctx, KeyConfig::p384_signing()).unwrap();
    let d = digest(b"range");
    let zero = Signature::from_words([0u32; 24]);
    let max = Signature::from_words([u32::MAX; 24]);
    assert!(ecdsa::verify(&mut ctx, &pk, &d, &zero).unwrap().is_false());
    assert!(ecdsa::verify(&mut ctx, &pk, &d, &max).unwrap().is_false());
}

#[test]
fn test_public_key_off_curve_is_rejected() {
    let mut ctx = context(7);
    let (sk, mut pk) = ecdsa::generate(&mut ctx, KeyConfig::p384_signing()).unwrap();
    let d = digest(b"off curve");
    let signature = ecdsa::sign(&mut ctx, &sk, &d).unwrap();
    pk.key[95] ^= 0x01;
    assert!(ecdsa::verify(&mut ctx, &pk, &d, &signature).unwrap().is_false());
}

#[test]
fn test_slow_engine() {
    let mut ctx = slow_context(8, 64);
    let (sk, pk) = ecdsa::generate(&mut ctx, KeyConfig::p384_signing()).unwrap();
    let d = digest(b"slow");
    let signature = ecdsa::sign(&mut ctx, &sk, &d).unwrap();
    assert!(ecdsa::verify(&mut ctx, &pk, &d, &signature).unwrap().is_true());
}

#[test]
fn test_exported_shares_reimport() {
    let mut ctx = context(9);
    let config = KeyConfig::p384_signing().exportable();
    let (sk, pk) = ecdsa::generate(&mut ctx, config).unwrap();
    let (s0, s1) = export_blinded(&sk).unwrap();
    let reimported = import_blinded(config, &s0, &s1).unwrap();
    assert_eq!(reimported, sk);

    let d = digest(b"reimport");
    let signature = ecdsa::sign(&mut ctx, &reimported, &d).unwrap();
    assert!(ecdsa::verify(&mut ctx, &pk, &d, &signature).unwrap().is_true());

    let (locked, _) = ecdsa::generate(&mut ctx, KeyConfig::p384_signing()).unwrap();
    assert_eq!(
        export_blinded(&locked).unwrap_err().status(),
        Status::BadArgument
    );
}
