//! Property-based tests for ECDSA/P-384 and ECDH/P-384

use eccel::prelude::*;
use eccel_tests::fixtures::context;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn sign_verify_roundtrip(seed in any::<u64>(), digest in any::<[u8; 48]>()) {
        let mut ctx = context(seed);
        let (sk, pk) = ecdsa::generate(&mut ctx, KeyConfig::p384_signing()).unwrap();
        let signature = ecdsa::sign(&mut ctx, &sk, &digest).unwrap();
        prop_assert_eq!(
            ecdsa::verify(&mut ctx, &pk, &digest, &signature).unwrap(),
            HardenedBool::TRUE
        );
    }

    #[test]
    fn any_bit_flip_is_rejected(
        seed in any::<u64>(),
        digest in any::<[u8; 48]>(),
        word in 0usize..24,
        bit in 0u32..32,
    ) {
        let mut ctx = context(seed);
        let (sk, pk) = ecdsa::generate(&mut ctx, KeyConfig::p384_signing()).unwrap();
        let mut signature = ecdsa::sign(&mut ctx, &sk, &digest).unwrap();
        signature.words_mut()[word] ^= 1 << bit;

        let result = ecdsa::verify(&mut ctx, &pk, &digest, &signature);
        prop_assert_eq!(Status::of(&result), Status::Ok);
        prop_assert!(result.unwrap().is_false());
    }

    #[test]
    fn async_sign_matches_sync(seed in any::<u64>(), digest in any::<[u8; 48]>()) {
        let mut ctx = context(seed);
        let (sk, _) = ecdsa::generate(&mut ctx, KeyConfig::p384_signing()).unwrap();
        let session = ecdsa::sign_async_start(&mut ctx, &sk, &digest).unwrap();
        let asynchronous = ecdsa::sign_async_finalize(&mut ctx, session).unwrap();
        prop_assert_eq!(asynchronous, ecdsa::sign(&mut ctx, &sk, &digest).unwrap());
    }

    #[test]
    fn bad_digest_lengths(len in 0usize..128) {
        prop_assume!(len != 48);
        let mut ctx = context(len as u64);
        let (sk, _) = ecdsa::generate(&mut ctx, KeyConfig::p384_signing()).unwrap();
        let digest = vec![0x5a; len];
        prop_assert_eq!(
            ecdsa::sign(&mut ctx, &sk, &digest).unwrap_err().status(),
            Status::BadArgument
        );
        prop_assert!(ctx.is_idle());
    }

    #[test]
    fn checksum_catches_keyblob_corruption(
        seed in any::<u64>(),
        index in 0usize..112,
        mask in 1u8..=255,
    ) {
        let mut ctx = context(seed);
        let (mut sk, _) = ecdsa::generate(&mut ctx, KeyConfig::p384_signing()).unwrap();
        if let KeyMaterial::Blob(blob) = &mut sk.material {
            blob.as_mut_slice()[index] ^= mask;
        }
        prop_assert_eq!(
            ecdsa::sign(&mut ctx, &sk, &[0u8; 48]).unwrap_err().status(),
            Status::IntegrityError
        );
    }

    #[test]
    fn agreement_is_symmetric(seed in any::<u64>(), label in prop::collection::vec(any::<u8>(), 0..32)) {
        let mut ctx = context(seed);
        let (a, a_pub) = ecdh::generate(&mut ctx, KeyConfig::p384_key_agreement()).unwrap();
        let (b, b_pub) = ecdh::generate(&mut ctx, KeyConfig::p384_key_agreement()).unwrap();
        let ab = ecdh::derive_shared(&mut ctx, &a, &b_pub).unwrap();
        let ba = ecdh::derive_shared(&mut ctx, &b, &a_pub).unwrap();
        prop_assert_eq!(
            ecdh::commitment(&ab, &label).unwrap(),
            ecdh::commitment(&ba, &label).unwrap()
        );
    }

    #[test]
    fn hardened_bool_only_accepts_true(raw in any::<u32>()) {
        let value = HardenedBool::from_raw(raw);
        prop_assert_eq!(value.is_true(), raw == 0x739);
    }
}
