//! Public API types for the eccel core
//!
//! This crate provides the surface every other eccel crate builds on: the
//! closed status taxonomy, the key configuration model, hardware key handles,
//! and the contract an accelerator has to satisfy.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{AccelFault, Error, Result, Status};
pub use types::*;

pub use traits::accelerator::{
    AccelStatus, Accelerator, Job, JobKind, JobOutput, KeySource, PrivateKeyInput,
    VerifyOutcome,
};

pub use eccel_internal::HardenedBool;
