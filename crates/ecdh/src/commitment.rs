//! Key confirmation over a blinded shared secret

use eccel_api::{Error, KeyMode, Result};
use eccel_common::SharedKey;
use eccel_params::p384::{P384_DIGEST_SIZE, P384_SHARED_SHARE_SIZE};
use hkdf::Hkdf;
use sha2::Sha384;
use zeroize::Zeroizing;

const COMMITMENT: &str = "ECDH-P384 commitment";
const SALT: &[u8] = b"eccel/p384/ecdh-commitment";

/// Derive a 48-byte commitment to the secret behind `shared`
///
/// HKDF-SHA384 keyed with the recombined secret, `label` as info. Both
/// parties of an agreement get the same value for the same label even
/// though their shares differ.
pub fn commitment(shared: &SharedKey, label: &[u8]) -> Result<[u8; P384_DIGEST_SIZE]> {
    shared.validate_for(KeyMode::SharedSecret, COMMITMENT)?;
    let (share0, share1) = shared
        .keyblob()
        .and_then(|blob| blob.shares())
        .ok_or(Error::bad_argument(COMMITMENT))?;

    let mut secret = Zeroizing::new([0u8; P384_SHARED_SHARE_SIZE]);
    for ((out, a), b) in secret.iter_mut().zip(share0).zip(share1) {
        *out = a ^ b;
    }

    let hk = Hkdf::<Sha384>::new(Some(SALT), &secret[..]);
    let mut out = [0u8; P384_DIGEST_SIZE];
    hk.expand(label, &mut out)
        .map_err(|_| Error::bad_argument(COMMITMENT))?;
    Ok(out)
}
