//! Integrity checksums for blinded keys
//!
//! The checksum is a CRC-32 (ISO-HDLC polynomial) over the canonical key
//! configuration, a material tag, and the material bytes. It detects
//! corruption of a stored key, not forgery.

use crc32fast::Hasher;
use subtle::ConstantTimeEq;

/// Tag preceding keyblob bytes in the checksummed encoding
pub const TAG_BLOB: u8 = 0xB1;

/// Tag preceding handle bytes in the checksummed encoding
pub const TAG_HANDLE: u8 = 0x4D;

/// Compute a checksum over a sequence of byte segments
pub fn compute<'a, I>(segments: I) -> u32
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut hasher = Hasher::new();
    for segment in segments {
        hasher.update(segment);
    }
    hasher.finalize()
}

/// Constant-time comparison of a stored and a recomputed checksum
pub fn matches(stored: u32, computed: u32) -> bool {
    stored.ct_eq(&computed).into()
}
