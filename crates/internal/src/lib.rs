//! Internal utilities for the eccel core
//!
//! Constant-time comparison, hardened boolean encoding and the word/byte
//! conversions used at the accelerator boundary. Nothing in here knows about
//! keys or curves.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
pub mod endian;
pub mod hardened;

pub use constant_time::{ct_eq, ct_eq_choice};
pub use hardened::{hardened_eq, HardenedBool};
