//! Blinded key import and export
//!
//! Keys move in and out of the core only as their two shares. The unblinded
//! value is never produced here.

use super::{BlindedKey, KeyMaterial};
use crate::security::Keyblob;
use eccel_api::{Error, KeyConfig, Result};
use zeroize::Zeroizing;

/// Build a software-held blinded key from caller-held shares
///
/// Both shares must be exactly half the keyblob length of `config`. The
/// resulting key has its checksum stamped.
pub fn import_blinded(config: KeyConfig, share0: &[u8], share1: &[u8]) -> Result<BlindedKey> {
    config.validate()?;
    if config.hardware_backed {
        return Err(Error::bad_argument(
            "import_blinded: hardware-backed keys cannot be imported",
        ));
    }
    let half = config.keyblob_len()? / 2;
    if share0.len() != half || share1.len() != half {
        return Err(Error::bad_argument("import_blinded: share length"));
    }

    let mut key = BlindedKey {
        config,
        material: KeyMaterial::Blob(Keyblob::from_shares(share0, share1)),
        checksum: 0,
    };
    key.stamp_checksum();
    tracing::debug!(mode = ?config.mode, "imported blinded key");
    Ok(key)
}

/// Return the two shares of an exportable software-held key
pub fn export_blinded(key: &BlindedKey) -> Result<(Zeroizing<Vec<u8>>, Zeroizing<Vec<u8>>)> {
    key.check_shape()
        .map_err(|e| e.with_context("export_blinded"))?;
    if !key.config.exportable {
        return Err(Error::bad_argument("export_blinded: key is not exportable"));
    }
    let blob = key
        .keyblob()
        .ok_or(Error::bad_argument("export_blinded: no keyblob"))?;
    key.verify_checksum()
        .map_err(|e| e.with_context("export_blinded"))?;

    let (s0, s1) = blob
        .shares()
        .ok_or(Error::bad_argument("export_blinded: keyblob length"))?;
    Ok((Zeroizing::new(s0.to_vec()), Zeroizing::new(s1.to_vec())))
}
