//! Blinded and unblinded key containers
//!
//! A [`BlindedKey`] never holds a private value in the clear. Software-held
//! private scalars are stored as two arithmetic shares modulo the group order;
//! shared secrets are stored as two XOR shares. Hardware-backed keys carry only
//! a [`KeyHandle`] and the accelerator derives the key itself.
//!
//! Every producer stamps the checksum and every consumer revalidates it.

pub mod transport;

use crate::checksum::{self, TAG_BLOB, TAG_HANDLE};
use crate::security::Keyblob;
use eccel_api::traits::accelerator::{PrivateKeyInput, PrivateShare, PublicPoint};
use eccel_api::{Error, KeyConfig, KeyHandle, KeyMode, Result};
use eccel_params::p384::{P384_PRIVATE_SHARE_SIZE, P384_PUBLIC_KEY_SIZE};
use zeroize::{Zeroize, Zeroizing};

/// Storage behind a blinded key
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub enum KeyMaterial {
    /// Two concatenated shares held in software
    Blob(Keyblob),
    /// Reference to a key held inside the accelerator
    Handle(KeyHandle),
}

impl KeyMaterial {
    fn tag(&self) -> u8 {
        match self {
            KeyMaterial::Blob(_) => TAG_BLOB,
            KeyMaterial::Handle(_) => TAG_HANDLE,
        }
    }
}

/// Private key or shared secret in blinded form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlindedKey {
    pub config: KeyConfig,
    pub material: KeyMaterial,
    pub checksum: u32,
}

/// A blinded key whose mode is [`KeyMode::SharedSecret`]
pub type SharedKey = BlindedKey;

impl BlindedKey {
    /// Allocate a zeroed template for a software-held key
    ///
    /// The checksum stays unset until an operation populates the key.
    pub fn new(config: KeyConfig) -> Result<Self> {
        config.validate()?;
        if config.hardware_backed {
            return Err(Error::bad_argument(
                "BlindedKey::new: hardware-backed keys need a handle",
            ));
        }
        let len = config.keyblob_len()?;
        Ok(Self {
            config,
            material: KeyMaterial::Blob(Keyblob::zeroed(len)),
            checksum: 0,
        })
    }

    /// Build a hardware-backed key from a handle and stamp its checksum
    pub fn hardware_backed(config: KeyConfig, handle: KeyHandle) -> Result<Self> {
        config.validate()?;
        if !config.hardware_backed {
            return Err(Error::bad_argument(
                "BlindedKey::hardware_backed: config is not hardware-backed",
            ));
        }
        let mut key = Self {
            config,
            material: KeyMaterial::Handle(handle),
            checksum: 0,
        };
        key.stamp_checksum();
        Ok(key)
    }

    /// Handle of a hardware-backed key
    pub fn handle(&self) -> Option<&KeyHandle> {
        match &self.material {
            KeyMaterial::Handle(h) => Some(h),
            KeyMaterial::Blob(_) => None,
        }
    }

    /// Keyblob of a software-held key
    pub fn keyblob(&self) -> Option<&Keyblob> {
        match &self.material {
            KeyMaterial::Blob(b) => Some(b),
            KeyMaterial::Handle(_) => None,
        }
    }

    /// Validate config, material tag, and keyblob length
    pub fn check_shape(&self) -> Result<()> {
        self.config.validate()?;
        match (&self.material, self.config.hardware_backed) {
            (KeyMaterial::Blob(blob), false) => {
                if blob.len() != self.config.keyblob_len()? {
                    return Err(Error::bad_argument("BlindedKey: keyblob length"));
                }
                Ok(())
            }
            (KeyMaterial::Handle(_), true) => Ok(()),
            _ => Err(Error::bad_argument(
                "BlindedKey: material does not match hardware_backed flag",
            )),
        }
    }

    /// Checksum over the current config and material
    pub fn compute_checksum(&self) -> u32 {
        let config = self.config.to_bytes();
        let tag = [self.material.tag()];
        match &self.material {
            KeyMaterial::Blob(blob) => checksum::compute([&config[..], &tag[..], blob.as_slice()]),
            KeyMaterial::Handle(handle) => {
                let encoded = handle.to_bytes();
                checksum::compute([&config[..], &tag[..], &encoded[..]])
            }
        }
    }

    /// Record the checksum of the current contents
    pub fn stamp_checksum(&mut self) {
        self.checksum = self.compute_checksum();
    }

    /// Fail with `IntegrityError` if the stored checksum does not match
    pub fn verify_checksum(&self) -> Result<()> {
        if checksum::matches(self.checksum, self.compute_checksum()) {
            Ok(())
        } else {
            tracing::warn!(mode = ?self.config.mode, "blinded key checksum mismatch");
            Err(Error::integrity("BlindedKey::verify_checksum"))
        }
    }

    /// Full admission check for a key about to be consumed
    ///
    /// Shape first, then mode, then checksum.
    pub fn validate_for(&self, mode: KeyMode, context: &'static str) -> Result<()> {
        self.check_shape().map_err(|e| e.with_context(context))?;
        if self.config.mode != mode {
            return Err(Error::bad_argument(context));
        }
        self.verify_checksum().map_err(|e| e.with_context(context))
    }

    /// Private operand for the accelerator
    ///
    /// The key must already have passed [`validate_for`](Self::validate_for).
    pub fn private_input(&self) -> Result<PrivateKeyInput> {
        match &self.material {
            KeyMaterial::Handle(handle) => Ok(PrivateKeyInput::Sideload(*handle)),
            KeyMaterial::Blob(blob) => {
                let (s0, s1) = blob
                    .shares()
                    .ok_or(Error::bad_argument("BlindedKey::private_input"))?;
                Ok(PrivateKeyInput::Shares {
                    share0: share_array(s0)?,
                    share1: share_array(s1)?,
                })
            }
        }
    }

    /// Write two shares into the keyblob and stamp the checksum
    pub fn populate_shares(&mut self, share0: &[u8], share1: &[u8]) -> Result<()> {
        let written = match &mut self.material {
            KeyMaterial::Blob(blob) => blob.write_shares(share0, share1),
            KeyMaterial::Handle(_) => false,
        };
        if !written {
            return Err(Error::bad_argument("BlindedKey::populate_shares"));
        }
        self.stamp_checksum();
        Ok(())
    }
}

fn share_array(bytes: &[u8]) -> Result<PrivateShare> {
    let mut share = Zeroizing::new([0u8; P384_PRIVATE_SHARE_SIZE]);
    if bytes.len() != share.len() {
        return Err(Error::bad_argument("BlindedKey: share length"));
    }
    share.copy_from_slice(bytes);
    Ok(share)
}

/// Public key in the clear
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnblindedKey {
    pub config: KeyConfig,
    /// x then y, big-endian
    pub key: Vec<u8>,
}

impl UnblindedKey {
    /// Allocate a zeroed public key template
    pub fn new(config: KeyConfig) -> Result<Self> {
        config.validate()?;
        let len = config.public_key_len()?;
        Ok(Self {
            config,
            key: vec![0u8; len],
        })
    }

    /// Wrap encoded public point bytes
    pub fn from_bytes(config: KeyConfig, bytes: &[u8]) -> Result<Self> {
        let mut key = Self::new(config)?;
        if bytes.len() != key.key.len() {
            return Err(Error::bad_argument("UnblindedKey::from_bytes"));
        }
        key.key.copy_from_slice(bytes);
        Ok(key)
    }

    /// Check shape and mode, returning the fixed-size point
    pub fn point_for(&self, mode: KeyMode, context: &'static str) -> Result<PublicPoint> {
        self.config.validate().map_err(|e| e.with_context(context))?;
        if self.config.mode != mode {
            return Err(Error::bad_argument(context));
        }
        let mut point = [0u8; P384_PUBLIC_KEY_SIZE];
        if self.key.len() != point.len() {
            return Err(Error::bad_argument(context));
        }
        point.copy_from_slice(&self.key);
        Ok(point)
    }

    /// Check that this template can receive a key of `mode`
    pub fn check_template(&self, mode: KeyMode, context: &'static str) -> Result<()> {
        self.point_for(mode, context).map(|_| ())
    }
}
