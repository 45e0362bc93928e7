//! Start/finalize sequencing across operation families

use eccel::api::AccelFault;
use eccel::prelude::*;
use eccel_tests::fixtures::{context, digest, SHARED};
use std::thread;

#[test]
fn test_finalize_with_session_from_fresh_context() {
    let mut busy = context(21);
    let mut fresh = context(22);
    let (sk, _) = ecdsa::generate(&mut busy, KeyConfig::p384_signing()).unwrap();
    let session = ecdsa::sign_async_start(&mut busy, &sk, &digest(b"x")).unwrap();

    let err = ecdsa::sign_async_finalize(&mut fresh, session).unwrap_err();
    assert_eq!(err.status(), Status::SequenceError);
    assert!(fresh.is_idle());
    assert!(!busy.is_idle());

    let session = err.into_session().expect("refused session is returned");
    assert!(ecdsa::sign_async_finalize(&mut busy, session).is_ok());
    assert!(busy.is_idle());
}

#[test]
fn test_start_while_pending_across_families() {
    let mut ctx = context(23);
    let (sk, _) = ecdsa::generate(&mut ctx, KeyConfig::p384_signing()).unwrap();
    let (a, _) = ecdh::generate(&mut ctx, KeyConfig::p384_key_agreement()).unwrap();
    let (_, b_pub) = ecdh::generate(&mut ctx, KeyConfig::p384_key_agreement()).unwrap();

    let sign = ecdsa::sign_async_start(&mut ctx, &sk, &digest(b"first")).unwrap();
    assert_eq!(
        ecdh::agree_async_start(&mut ctx, &a, &b_pub).unwrap_err().status(),
        Status::SequenceError
    );
    let template = BlindedKey::new(KeyConfig::p384_signing()).unwrap();
    assert_eq!(
        ecdsa::keygen_async_start(&mut ctx, &template).unwrap_err().status(),
        Status::SequenceError
    );
    assert!(ecdsa::sign_async_finalize(&mut ctx, sign).is_ok());
}

#[test]
fn test_keygen_finalize_with_other_template() {
    let mut ctx = context(24);
    let started = BlindedKey::new(KeyConfig::p384_signing()).unwrap();
    let session = ecdsa::keygen_async_start(&mut ctx, &started).unwrap();

    let mut private = BlindedKey::new(KeyConfig::p384_key_agreement()).unwrap();
    let mut public = UnblindedKey::new(KeyConfig::p384_key_agreement()).unwrap();
    assert_eq!(
        ecdsa::keygen_async_finalize(&mut ctx, session, &mut private, &mut public)
            .unwrap_err()
            .status(),
        Status::ConfigMismatch
    );
    assert!(ctx.is_idle());
}

#[test]
fn test_every_fault_surfaces_as_hardware_error() {
    let faults = [
        AccelFault::Busy,
        AccelFault::NoOutput,
        AccelFault::InvalidPoint,
        AccelFault::InvalidScalar,
        AccelFault::Stalled,
        AccelFault::Injected(0xdead),
    ];
    let mut ctx = context(25);
    let (sk, pk) = ecdsa::generate(&mut ctx, KeyConfig::p384_signing()).unwrap();
    let d = digest(b"faults");
    let signature = ecdsa::sign(&mut ctx, &sk, &d).unwrap();

    for fault in faults {
        let session = ecdsa::verify_async_start(&mut ctx, &pk, &d, &signature).unwrap();
        ctx.accelerator_mut().inject_fault(fault);
        let err = ecdsa::verify_async_finalize(&mut ctx, session, &signature).unwrap_err();
        assert_eq!(err.status(), Status::HardwareError, "{:?}", fault);
        assert!(ctx.is_idle());
    }
    // the context is usable afterwards
    assert!(ecdsa::verify(&mut ctx, &pk, &d, &signature).unwrap().is_true());
}

#[test]
fn test_release_returns_accelerator() {
    let mut ctx = context(26);
    let (sk, _) = ecdsa::generate(&mut ctx, KeyConfig::p384_signing()).unwrap();
    let session = ecdsa::sign_async_start(&mut ctx, &sk, &digest(b"r")).unwrap();
    let mut ctx = ctx.try_release().err().unwrap();
    ecdsa::sign_async_finalize(&mut ctx, session).unwrap();

    let engine = ctx.try_release().ok().unwrap();
    assert_eq!(engine.jobs_completed(), 2);
}

#[test]
fn test_shared_context_serializes_operations() {
    let workers: Vec<_> = (0..4u8)
        .map(|i| {
            thread::spawn(move || {
                SHARED.with(|ctx| {
                    let (sk, pk) = ecdsa::generate(ctx, KeyConfig::p384_signing())?;
                    let d = digest(&[i; 8]);
                    let signature = ecdsa::sign(ctx, &sk, &d)?;
                    ecdsa::verify(ctx, &pk, &d, &signature)
                })
            })
        })
        .collect();
    for worker in workers {
        assert!(worker.join().unwrap().unwrap().is_true());
    }
    assert!(SHARED.lock().is_idle());
}

#[test]
fn test_status_codes_are_stable() {
    assert_eq!(Status::Ok.code(), 0x739);
    for status in Status::ALL {
        assert_eq!(Status::from_code(status.code()), Some(status));
    }
    assert_eq!(Status::from_code(0), None);
}
