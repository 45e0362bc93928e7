//! Hardened boolean
//!
//! A boolean carried as one of two 32-bit patterns that differ in many bit
//! positions, so that a single flipped bit cannot turn one into the other.
//! Any value other than the exact `TRUE` pattern reads as not-true.

use crate::constant_time::{ct_eq, ct_eq_u32, diff_accumulate};
use core::fmt;

/// Tri-state hardened boolean: `TRUE`, `FALSE`, or unset
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HardenedBool(u32);

impl HardenedBool {
    /// Encoded true value
    pub const TRUE: Self = Self(0x739);

    /// Encoded false value
    pub const FALSE: Self = Self(0x1d4);

    /// Value of an output that has not been written
    pub const UNSET: Self = Self(0);

    /// Wrap a raw encoded value
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw encoded value
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// True only for the exact `TRUE` encoding
    pub fn is_true(self) -> bool {
        ct_eq_u32(self.0, Self::TRUE.0)
    }

    /// True only for the exact `FALSE` encoding
    pub fn is_false(self) -> bool {
        ct_eq_u32(self.0, Self::FALSE.0)
    }

    /// Neither `TRUE` nor `FALSE`
    pub fn is_unset(self) -> bool {
        !self.is_true() && !self.is_false()
    }
}

impl Default for HardenedBool {
    fn default() -> Self {
        Self::UNSET
    }
}

impl fmt::Debug for HardenedBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_true() {
            write!(f, "HardenedBool::TRUE")
        } else if self.is_false() {
            write!(f, "HardenedBool::FALSE")
        } else {
            write!(f, "HardenedBool({:#x})", self.0)
        }
    }
}

/// Compare two byte strings and report the outcome as a hardened boolean
///
/// Equality is decided on two independent paths, a `subtle` comparison and an
/// OR-accumulated difference, and `TRUE` is produced only when both agree. The
/// result starts as `FALSE` and is overwritten at most once.
pub fn hardened_eq(a: &[u8], b: &[u8]) -> HardenedBool {
    let mut result = HardenedBool::FALSE;

    let first = ct_eq(a, b);
    let second = diff_accumulate(a, b) == 0;

    if first && second && a.len() == b.len() {
        result = HardenedBool::TRUE;
    }
    result
}
