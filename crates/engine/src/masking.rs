//! Share arithmetic for blinded keys
//!
//! A private scalar d is carried as two 448-bit shares with
//! `d = share0 + share1 mod n`. share0 is uniformly random; share1 is the
//! remainder lifted by a random multiple of n so that neither share is
//! reduced. Shared secrets use plain XOR shares.

use eccel_api::traits::accelerator::{PrivateShare, SecretShare};
use eccel_params::p384::{
    P384_ORDER_BE, P384_PRIVATE_SHARE_SIZE, P384_SCALAR_SIZE, P384_SHARED_SHARE_SIZE,
};
use p384::elliptic_curve::ops::Reduce;
use p384::elliptic_curve::PrimeField;
use p384::{FieldBytes, Scalar, U384};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

const HIGH_BYTES: usize = P384_PRIVATE_SHARE_SIZE - P384_SCALAR_SIZE;

/// 2^384 mod n
fn radix() -> Scalar {
    <Scalar as Reduce<U384>>::reduce(U384::MAX) + Scalar::ONE
}

/// Reduce a big-endian 384-bit integer modulo n
pub fn reduce_scalar(bytes: &[u8; P384_SCALAR_SIZE]) -> Scalar {
    let mut repr = FieldBytes::default();
    repr.copy_from_slice(bytes);
    <Scalar as Reduce<U384>>::reduce_bytes(&repr)
}

/// Reduce a big-endian 448-bit share modulo n
pub fn reduce_wide(bytes: &[u8; P384_PRIVATE_SHARE_SIZE]) -> Scalar {
    let mut high = [0u8; 8];
    high.copy_from_slice(&bytes[..HIGH_BYTES]);
    let mut low = Zeroizing::new([0u8; P384_SCALAR_SIZE]);
    low.copy_from_slice(&bytes[HIGH_BYTES..]);

    Scalar::from(u64::from_be_bytes(high)) * radix() + reduce_scalar(&low)
}

/// Recombine two arithmetic shares
pub fn unmask(share0: &[u8; P384_PRIVATE_SHARE_SIZE], share1: &[u8; P384_PRIVATE_SHARE_SIZE]) -> Scalar {
    reduce_wide(share0) + reduce_wide(share1)
}

/// Big-endian encoding of a scalar
pub fn scalar_bytes(scalar: &Scalar) -> [u8; P384_SCALAR_SIZE] {
    let mut out = [0u8; P384_SCALAR_SIZE];
    out.copy_from_slice(&scalar.to_repr());
    out
}

/// `k * n + t` as a 448-bit big-endian integer
fn lift(k: u64, t: &[u8; P384_SCALAR_SIZE]) -> [u8; P384_PRIVATE_SHARE_SIZE] {
    let mut out = [0u8; P384_PRIVATE_SHARE_SIZE];
    let mut carry: u128 = 0;
    for i in 0..P384_PRIVATE_SHARE_SIZE {
        let (n_byte, t_byte) = if i < P384_SCALAR_SIZE {
            (
                P384_ORDER_BE[P384_SCALAR_SIZE - 1 - i],
                t[P384_SCALAR_SIZE - 1 - i],
            )
        } else {
            (0, 0)
        };
        let acc = carry + u128::from(k) * u128::from(n_byte) + u128::from(t_byte);
        out[P384_PRIVATE_SHARE_SIZE - 1 - i] = acc as u8;
        carry = acc >> 8;
    }
    // k < 2^64 and t < n, so the result fits in 448 bits
    debug_assert_eq!(carry, 0);
    out
}

/// Split a scalar into two fresh arithmetic shares
pub fn blind<R: RngCore + CryptoRng>(d: &Scalar, rng: &mut R) -> (PrivateShare, PrivateShare) {
    let mut share0 = Zeroizing::new([0u8; P384_PRIVATE_SHARE_SIZE]);
    rng.fill_bytes(&mut share0[..]);

    let remainder = Zeroizing::new(scalar_bytes(&(*d - reduce_wide(&share0))));
    let share1 = Zeroizing::new(lift(rng.next_u64(), &remainder));
    (share0, share1)
}

/// Split a secret into two XOR shares
pub fn split_secret<R: RngCore + CryptoRng>(
    secret: &[u8; P384_SHARED_SHARE_SIZE],
    rng: &mut R,
) -> (SecretShare, SecretShare) {
    let mut share0 = Zeroizing::new([0u8; P384_SHARED_SHARE_SIZE]);
    rng.fill_bytes(&mut share0[..]);
    let mut share1 = Zeroizing::new([0u8; P384_SHARED_SHARE_SIZE]);
    for ((out, a), b) in share1.iter_mut().zip(share0.iter()).zip(secret.iter()) {
        *out = a ^ b;
    }
    (share0, share1)
}
