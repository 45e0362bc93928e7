//! Key configuration model and hardware key handles
//!
//! These types carry no key material. They describe what shape a key must
//! have and which operations it may take part in.

use crate::error::{Error, Result};
use eccel_params::p384::{
    KEY_HANDLE_SALT_WORDS, P384_PRIVATE_KEYBLOB_SIZE, P384_PUBLIC_KEY_SIZE,
    P384_SHARED_KEYBLOB_SIZE,
};
use zeroize::Zeroize;

/// Elliptic curves known to the configuration model
///
/// Only `P384` is served by this core; `P256` is kept so that a request for
/// it can be told apart from a malformed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Curve {
    P256,
    P384,
}

/// Purpose a key is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyMode {
    /// ECDSA private/public keys
    Signing,
    /// ECDH private/public keys
    KeyAgreement,
    /// Output of an ECDH agreement
    SharedSecret,
}

impl Curve {
    fn tag(self) -> u8 {
        match self {
            Curve::P256 => 0x01,
            Curve::P384 => 0x02,
        }
    }
}

impl KeyMode {
    fn tag(self) -> u8 {
        match self {
            KeyMode::Signing => 0x10,
            KeyMode::KeyAgreement => 0x20,
            KeyMode::SharedSecret => 0x30,
        }
    }
}

/// Configuration of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyConfig {
    pub curve: Curve,
    pub mode: KeyMode,
    /// The key lives inside the accelerator and is referenced by a handle
    pub hardware_backed: bool,
    /// The blinded shares may leave the core through export
    pub exportable: bool,
}

impl KeyConfig {
    /// Length of the canonical encoding produced by [`to_bytes`](Self::to_bytes)
    pub const ENCODED_LEN: usize = 4;

    /// Software-held P-384 signing key
    pub const fn p384_signing() -> Self {
        Self {
            curve: Curve::P384,
            mode: KeyMode::Signing,
            hardware_backed: false,
            exportable: false,
        }
    }

    /// Software-held P-384 key-agreement key
    pub const fn p384_key_agreement() -> Self {
        Self {
            curve: Curve::P384,
            mode: KeyMode::KeyAgreement,
            hardware_backed: false,
            exportable: false,
        }
    }

    /// Blinded P-384 shared secret
    pub const fn p384_shared_secret() -> Self {
        Self {
            curve: Curve::P384,
            mode: KeyMode::SharedSecret,
            hardware_backed: false,
            exportable: false,
        }
    }

    /// Return a copy marked as hardware-backed
    pub const fn hardware(mut self) -> Self {
        self.hardware_backed = true;
        self
    }

    /// Return a copy marked as exportable
    pub const fn exportable(mut self) -> Self {
        self.exportable = true;
        self
    }

    /// Check the configuration against the compatibility table and flag rules
    pub fn validate(&self) -> Result<()> {
        if self.curve != Curve::P384 {
            return Err(Error::unsupported("KeyConfig::validate: curve"));
        }
        if self.hardware_backed && self.exportable {
            return Err(Error::bad_argument(
                "KeyConfig::validate: hardware-backed key marked exportable",
            ));
        }
        if self.hardware_backed && self.mode == KeyMode::SharedSecret {
            return Err(Error::bad_argument(
                "KeyConfig::validate: hardware-backed shared secret",
            ));
        }
        Ok(())
    }

    /// Number of keyblob bytes a software-held key of this config occupies
    pub fn keyblob_len(&self) -> Result<usize> {
        match (self.curve, self.mode) {
            (Curve::P384, KeyMode::Signing) | (Curve::P384, KeyMode::KeyAgreement) => {
                Ok(P384_PRIVATE_KEYBLOB_SIZE)
            }
            (Curve::P384, KeyMode::SharedSecret) => Ok(P384_SHARED_KEYBLOB_SIZE),
            _ => Err(Error::unsupported("KeyConfig::keyblob_len")),
        }
    }

    /// Number of bytes of the matching unblinded (public) key
    pub fn public_key_len(&self) -> Result<usize> {
        match (self.curve, self.mode) {
            (Curve::P384, KeyMode::Signing) | (Curve::P384, KeyMode::KeyAgreement) => {
                Ok(P384_PUBLIC_KEY_SIZE)
            }
            (Curve::P384, KeyMode::SharedSecret) => Err(Error::bad_argument(
                "KeyConfig::public_key_len: shared secrets have no public part",
            )),
            _ => Err(Error::unsupported("KeyConfig::public_key_len")),
        }
    }

    /// Curve and mode agree; flags are ignored
    pub fn same_key_type(&self, other: &KeyConfig) -> bool {
        self.curve == other.curve && self.mode == other.mode
    }

    /// Canonical encoding covered by the key checksum
    pub fn to_bytes(&self) -> [u8; Self::ENCODED_LEN] {
        [
            self.curve.tag(),
            self.mode.tag(),
            self.hardware_backed as u8,
            self.exportable as u8,
        ]
    }
}

/// Reference to a key that exists only inside the accelerator
///
/// The accelerator derives the actual key from its device secret diversified
/// by `version` and `salt`. No key bits travel through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Zeroize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyHandle {
    pub version: u32,
    pub salt: [u32; KEY_HANDLE_SALT_WORDS],
}

impl KeyHandle {
    /// Length of the canonical encoding produced by [`to_bytes`](Self::to_bytes)
    pub const ENCODED_LEN: usize = 4 * (1 + KEY_HANDLE_SALT_WORDS);

    pub const fn new(version: u32, salt: [u32; KEY_HANDLE_SALT_WORDS]) -> Self {
        Self { version, salt }
    }

    /// Little-endian encoding: version followed by the salt words
    pub fn to_bytes(&self) -> [u8; Self::ENCODED_LEN] {
        let mut out = [0u8; Self::ENCODED_LEN];
        out[..4].copy_from_slice(&self.version.to_le_bytes());
        for (chunk, word) in out[4..].chunks_exact_mut(4).zip(self.salt.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        out
    }
}
