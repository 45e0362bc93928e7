//! Wire-level status codes
//!
//! Every operation maps its outcome to one of these codes. `Ok` shares its
//! encoding with [`HardenedBool::TRUE`](crate::HardenedBool::TRUE) so that a
//! glitched success check cannot be satisfied by zero. Error codes carry a
//! common high half so a single bit flip never lands on `Ok`.

use super::types::{Error, Result};
use core::fmt;

/// Closed status taxonomy reported at the operation boundary
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum Status {
    Ok = 0x0000_0739,
    BadArgument = 0x80EC_0001,
    UnsupportedConfig = 0x80EC_0002,
    ConfigMismatch = 0x80EC_0003,
    SequenceError = 0x80EC_0004,
    IntegrityError = 0x80EC_0005,
    HardwareError = 0x80EC_0006,
}

impl Status {
    /// Every status, in code order
    pub const ALL: [Status; 7] = [
        Status::Ok,
        Status::BadArgument,
        Status::UnsupportedConfig,
        Status::ConfigMismatch,
        Status::SequenceError,
        Status::IntegrityError,
        Status::HardwareError,
    ];

    /// Numeric code of this status
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Decode a numeric code; unknown codes yield `None`
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.code() == code)
    }

    /// Status of an operation result
    pub fn of<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(e) => e.status(),
        }
    }

    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}

impl Error {
    /// Status code this error is reported as
    pub fn status(&self) -> Status {
        match self {
            Error::BadArgument { .. } => Status::BadArgument,
            Error::UnsupportedConfig { .. } => Status::UnsupportedConfig,
            Error::ConfigMismatch { .. } => Status::ConfigMismatch,
            Error::Sequence { .. } => Status::SequenceError,
            Error::Integrity { .. } => Status::IntegrityError,
            Error::Hardware { .. } => Status::HardwareError,
        }
    }
}

impl From<&Error> for Status {
    fn from(e: &Error) -> Self {
        e.status()
    }
}

impl fmt::Debug for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Ok => "Ok",
            Status::BadArgument => "BadArgument",
            Status::UnsupportedConfig => "UnsupportedConfig",
            Status::ConfigMismatch => "ConfigMismatch",
            Status::SequenceError => "SequenceError",
            Status::IntegrityError => "IntegrityError",
            Status::HardwareError => "HardwareError",
        };
        write!(f, "{}({:#010x})", name, self.code())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
