//! Common key material and shared functionality for the eccel crates
//!
//! This crate holds everything that describes keys and signatures without
//! doing any cryptography: blinded key containers, their checksums, the
//! signature word layout, and blinded import/export.

pub mod checksum;
pub mod keys;
pub mod security;
pub mod signature;

pub use keys::transport::{export_blinded, import_blinded};
pub use keys::{BlindedKey, KeyMaterial, SharedKey, UnblindedKey};
pub use security::Keyblob;
pub use signature::Signature;

/// Validate a caller-supplied digest and copy it into a fixed array
pub fn digest_from_slice(
    digest: &[u8],
    context: &'static str,
) -> eccel_api::Result<eccel_api::traits::accelerator::DigestBytes> {
    let mut out = [0u8; eccel_params::p384::P384_DIGEST_SIZE];
    if digest.len() != out.len() {
        return Err(eccel_api::Error::bad_argument(context));
    }
    out.copy_from_slice(digest);
    Ok(out)
}
