//! Keyblob storage with guaranteed zeroization
//!
//! A keyblob holds the two shares of a blinded key back to back. The buffer
//! is wiped on drop and never printed.

use core::fmt;
use eccel_internal::ct_eq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Variable-size secret buffer holding two concatenated key shares
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Keyblob {
    data: Vec<u8>,
}

impl Keyblob {
    /// Allocate a zeroed keyblob of `len` bytes
    pub fn zeroed(len: usize) -> Self {
        Self { data: vec![0u8; len] }
    }

    /// Build a keyblob by concatenating two shares
    pub fn from_shares(share0: &[u8], share1: &[u8]) -> Self {
        let mut data = Vec::with_capacity(share0.len() + share1.len());
        data.extend_from_slice(share0);
        data.extend_from_slice(share1);
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Split into the two halves; `None` for an odd length
    pub fn shares(&self) -> Option<(&[u8], &[u8])> {
        if self.data.len() % 2 != 0 {
            return None;
        }
        Some(self.data.split_at(self.data.len() / 2))
    }

    /// Overwrite the blob with two shares of exactly half its length each
    ///
    /// Returns false and leaves the blob untouched if the lengths disagree.
    pub fn write_shares(&mut self, share0: &[u8], share1: &[u8]) -> bool {
        let half = self.data.len() / 2;
        if self.data.len() % 2 != 0 || share0.len() != half || share1.len() != half {
            return false;
        }
        self.data[..half].copy_from_slice(share0);
        self.data[half..].copy_from_slice(share1);
        true
    }
}

impl AsRef<[u8]> for Keyblob {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl PartialEq for Keyblob {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.data, &other.data)
    }
}

impl Eq for Keyblob {}

impl fmt::Debug for Keyblob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keyblob<{}>([REDACTED])", self.data.len())
    }
}
