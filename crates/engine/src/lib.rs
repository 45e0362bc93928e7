//! Software model of a P-384 accelerator
//!
//! [`SoftEngine`] implements the [`Accelerator`](eccel_api::Accelerator)
//! contract on a host. All curve arithmetic is delegated to the `p384` crate.
//! The engine unmasks blinded shares internally, derives sideloaded keys from
//! its device secret, and re-blinds every private output with its RNG.
//!
//! Jobs are computed when dispatched. Completion is then reported only after a
//! configurable number of busy polls, and faults can be armed to exercise the
//! error paths of callers.

pub mod config;
pub mod masking;
mod soft;

pub use config::EngineConfig;
pub use soft::SoftEngine;
