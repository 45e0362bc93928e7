//! # eccel
//!
//! A P-384 asymmetric-cryptography service core for hardware security
//! engines: blinded key generation, ECDSA signing and verification, and ECDH
//! key agreement driven through an explicit start/finalize accelerator
//! contract.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! eccel = "0.3"
//! ```
//!
//! ```ignore
//! use eccel::prelude::*;
//! use eccel::engine::SoftEngine;
//!
//! let mut ctx = Context::new(SoftEngine::with_os_rng(Default::default()));
//! let (sk, pk) = ecdsa::generate(&mut ctx, KeyConfig::p384_signing())?;
//! let sig = ecdsa::sign(&mut ctx, &sk, &digest)?;
//! assert!(ecdsa::verify(&mut ctx, &pk, &digest, &sig)?.is_true());
//! ```
//!
//! ## Features
//!
//! - `ecdsa` (default): ECDSA/P-384 keygen, sign and verify
//! - `ecdh` (default): ECDH/P-384 keygen and key agreement
//! - `engine` (default): software model of the accelerator
//! - `serde`: serialization of configs, public keys and signatures
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`eccel-api`]: errors, status codes, key configs and the accelerator trait
//! - [`eccel-common`]: blinded and unblinded keys, checksums, signatures
//! - [`eccel-context`]: contexts, sessions and the start/finalize controller
//! - [`eccel-sign`]: ECDSA/P-384
//! - [`eccel-ecdh`]: ECDH/P-384
//! - [`eccel-engine`]: the software accelerator

// Core re-exports (always available)
pub use eccel_api as api;
pub use eccel_common as common;
pub use eccel_context as context;
pub use eccel_internal as internal;
pub use eccel_params as params;

// Feature-gated re-exports
#[cfg(feature = "ecdsa")]
pub use eccel_sign::ecdsa::p384 as ecdsa;

#[cfg(feature = "ecdh")]
pub use eccel_ecdh as ecdh;

#[cfg(feature = "engine")]
pub use eccel_engine as engine;

pub use subtle;
pub use zeroize;

/// Common imports for eccel users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, Status};

    // Re-export the accelerator contract
    pub use crate::api::Accelerator;

    // Re-export key and result types
    pub use crate::api::{Curve, HardenedBool, KeyConfig, KeyHandle, KeyMode};
    pub use crate::common::{
        export_blinded, import_blinded, BlindedKey, KeyMaterial, SharedKey, Signature,
        UnblindedKey,
    };

    // Re-export the controller
    pub use crate::context::{Context, ContextConfig, FinalizeError, PollMode, SharedContext};

    #[cfg(feature = "ecdsa")]
    pub use crate::ecdsa;

    #[cfg(feature = "ecdh")]
    pub use crate::ecdh;
}
