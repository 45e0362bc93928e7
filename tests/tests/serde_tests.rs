//! Serialization of the public-facing types

use eccel::engine::EngineConfig;
use eccel::prelude::*;
use eccel_tests::fixtures::{context, digest};

#[test]
fn test_public_key_and_signature_survive_json() {
    let mut ctx = context(31);
    let (sk, pk) = ecdsa::generate(&mut ctx, KeyConfig::p384_signing()).unwrap();
    let d = digest(b"serde");
    let signature = ecdsa::sign(&mut ctx, &sk, &d).unwrap();

    let pk: UnblindedKey = serde_json::from_str(&serde_json::to_string(&pk).unwrap()).unwrap();
    let signature: Signature =
        serde_json::from_str(&serde_json::to_string(&signature).unwrap()).unwrap();
    assert!(ecdsa::verify(&mut ctx, &pk, &d, &signature).unwrap().is_true());
}

#[test]
fn test_configs_in_json() {
    let config = KeyConfig::p384_key_agreement().hardware();
    let json = serde_json::to_value(config).unwrap();
    assert_eq!(json["hardware_backed"], true);
    assert_eq!(serde_json::from_value::<KeyConfig>(json).unwrap(), config);

    let engine: EngineConfig = serde_json::from_str(
        &serde_json::to_string(&EngineConfig::default().with_busy_polls(9)).unwrap(),
    )
    .unwrap();
    assert_eq!(engine.busy_polls, 9);

    let status: Status = serde_json::from_str(&serde_json::to_string(&Status::IntegrityError).unwrap()).unwrap();
    assert_eq!(status, Status::IntegrityError);
}
