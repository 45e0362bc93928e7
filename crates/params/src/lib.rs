//! Constant values for the eccel core
//!
//! Every fixed size the core enforces lives here so that the shape checks in
//! the key model, the accelerator jobs and the software engine agree.

#![no_std]

pub mod p384;
