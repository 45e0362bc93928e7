//! Error type definitions for eccel operations

/// Primary error type for eccel operations
///
/// The variants form a closed set. A signature that fails verification is not
/// an error; it is reported through [`HardenedBool`](crate::HardenedBool).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Malformed input: wrong length, wrong key mode, missing material
    #[error("{context}: bad argument")]
    BadArgument { context: &'static str },

    /// The key configuration is not in the curve/mode compatibility table
    #[error("{context}: unsupported key configuration")]
    UnsupportedConfig { context: &'static str },

    /// Arguments given to finalize disagree with those given to start
    #[error("{context}: finalize arguments do not match the started operation")]
    ConfigMismatch { context: &'static str },

    /// Start while pending, or finalize without a matching start
    #[error("{context}: operation sequence violated")]
    Sequence { context: &'static str },

    /// A blinded key failed its checksum
    #[error("{context}: key integrity check failed")]
    Integrity { context: &'static str },

    /// Fault reported by the accelerator
    #[error("{context}: accelerator fault: {fault}")]
    Hardware {
        context: &'static str,
        fault: AccelFault,
    },
}

/// Result type for eccel operations
pub type Result<T> = core::result::Result<T, Error>;

/// Faults an accelerator may report
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccelFault {
    /// A job was dispatched while another one was still running
    #[error("engine busy")]
    Busy,

    /// Output was requested but no job has completed
    #[error("no output available")]
    NoOutput,

    /// An input point is not on the curve or is the identity
    #[error("invalid curve point")]
    InvalidPoint,

    /// A private scalar reduced to zero
    #[error("invalid scalar")]
    InvalidScalar,

    /// The engine stopped making progress
    #[error("engine stalled")]
    Stalled,

    /// Fault raised on purpose through a test hook, with its code
    #[error("injected fault {0:#x}")]
    Injected(u32),
}

impl Error {
    /// Shorthand for [`Error::BadArgument`]
    pub const fn bad_argument(context: &'static str) -> Self {
        Self::BadArgument { context }
    }

    /// Shorthand for [`Error::UnsupportedConfig`]
    pub const fn unsupported(context: &'static str) -> Self {
        Self::UnsupportedConfig { context }
    }

    /// Shorthand for [`Error::ConfigMismatch`]
    pub const fn mismatch(context: &'static str) -> Self {
        Self::ConfigMismatch { context }
    }

    /// Shorthand for [`Error::Sequence`]
    pub const fn sequence(context: &'static str) -> Self {
        Self::Sequence { context }
    }

    /// Shorthand for [`Error::Integrity`]
    pub const fn integrity(context: &'static str) -> Self {
        Self::Integrity { context }
    }

    /// Shorthand for [`Error::Hardware`]
    pub const fn hardware(context: &'static str, fault: AccelFault) -> Self {
        Self::Hardware { context, fault }
    }

    /// Replace the context of an existing error, keeping its class
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::BadArgument { .. } => Self::BadArgument { context },
            Self::UnsupportedConfig { .. } => Self::UnsupportedConfig { context },
            Self::ConfigMismatch { .. } => Self::ConfigMismatch { context },
            Self::Sequence { .. } => Self::Sequence { context },
            Self::Integrity { .. } => Self::Integrity { context },
            Self::Hardware { fault, .. } => Self::Hardware { context, fault },
        }
    }

    /// Context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::BadArgument { context }
            | Self::UnsupportedConfig { context }
            | Self::ConfigMismatch { context }
            | Self::Sequence { context }
            | Self::Integrity { context }
            | Self::Hardware { context, .. } => context,
        }
    }
}
