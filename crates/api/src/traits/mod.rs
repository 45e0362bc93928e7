//! Traits at the seams of the eccel core

pub mod accelerator;

pub use accelerator::Accelerator;
