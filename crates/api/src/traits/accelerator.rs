//! Accelerator contract
//!
//! An accelerator runs one job at a time. The core dispatches a [`Job`],
//! polls until the engine reports [`AccelStatus::Done`], then reads the
//! [`JobOutput`] back exactly once. Faults are reported as
//! [`Error::Hardware`](crate::Error::Hardware) from any of the three calls.
//!
//! Private inputs cross this boundary only as blinded shares or as a
//! [`KeyHandle`]; the unmasked scalar never does.

use crate::error::Result;
use crate::types::KeyHandle;
use core::fmt;
use eccel_params::p384::{
    P384_DIGEST_SIZE, P384_PRIVATE_SHARE_SIZE, P384_PUBLIC_KEY_SIZE, P384_SCALAR_SIZE,
    P384_SHARED_SHARE_SIZE, P384_SIGNATURE_WORDS,
};
use zeroize::{Zeroize, Zeroizing};

/// One share of a blinded private scalar
pub type PrivateShare = Zeroizing<[u8; P384_PRIVATE_SHARE_SIZE]>;

/// One XOR share of a blinded shared secret
pub type SecretShare = Zeroizing<[u8; P384_SHARED_SHARE_SIZE]>;

/// Uncompressed public point, x then y, big-endian
pub type PublicPoint = [u8; P384_PUBLIC_KEY_SIZE];

/// Message digest as handed in by the caller
pub type DigestBytes = [u8; P384_DIGEST_SIZE];

/// Signature words, r then s, least-significant word first
pub type SignatureWords = [u32; P384_SIGNATURE_WORDS];

/// Where a freshly generated private key comes from
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// Draw a new random scalar and return it blinded
    Random,
    /// Derive the scalar internally from a handle; nothing is returned
    Sideload(KeyHandle),
}

/// Private key operand of a sign or agree job
#[derive(Clone)]
pub enum PrivateKeyInput {
    /// Arithmetic shares with `d = share0 + share1 mod n`
    Shares {
        share0: PrivateShare,
        share1: PrivateShare,
    },
    /// Key derived inside the accelerator from a handle
    Sideload(KeyHandle),
}

/// Work item handed to [`Accelerator::dispatch`]
#[derive(Clone)]
pub enum Job {
    Keygen {
        key: KeySource,
    },
    Sign {
        key: PrivateKeyInput,
        digest: DigestBytes,
    },
    Verify {
        public: PublicPoint,
        digest: DigestBytes,
        signature: SignatureWords,
    },
    Agree {
        key: PrivateKeyInput,
        public: PublicPoint,
    },
}

/// Operation class of a job or output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobKind {
    Keygen,
    Sign,
    Verify,
    Agree,
}

/// What the engine concluded about a signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The x-coordinate recovered from the signature, reduced mod n and
    /// encoded big-endian; the caller compares it against r
    Recovered([u8; P384_SCALAR_SIZE]),
    /// The signature or public key was rejected before recovery
    Rejected,
}

/// Result read back from the accelerator
pub enum JobOutput {
    Keypair {
        /// Blinded private scalar; `None` for sideloaded keys
        shares: Option<(PrivateShare, PrivateShare)>,
        public: PublicPoint,
    },
    Signature(SignatureWords),
    Verify(VerifyOutcome),
    SharedSecret {
        share0: SecretShare,
        share1: SecretShare,
    },
}

/// Progress reported by [`Accelerator::poll`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccelStatus {
    Busy,
    Done,
}

impl Job {
    pub fn kind(&self) -> JobKind {
        match self {
            Job::Keygen { .. } => JobKind::Keygen,
            Job::Sign { .. } => JobKind::Sign,
            Job::Verify { .. } => JobKind::Verify,
            Job::Agree { .. } => JobKind::Agree,
        }
    }
}

impl JobOutput {
    pub fn kind(&self) -> JobKind {
        match self {
            JobOutput::Keypair { .. } => JobKind::Keygen,
            JobOutput::Signature(_) => JobKind::Sign,
            JobOutput::Verify(_) => JobKind::Verify,
            JobOutput::SharedSecret { .. } => JobKind::Agree,
        }
    }
}

impl Zeroize for JobOutput {
    fn zeroize(&mut self) {
        match self {
            JobOutput::Keypair { shares, public } => {
                if let Some((s0, s1)) = shares.as_mut() {
                    s0.zeroize();
                    s1.zeroize();
                }
                public.zeroize();
            }
            JobOutput::Signature(words) => words.zeroize(),
            JobOutput::Verify(outcome) => *outcome = VerifyOutcome::Rejected,
            JobOutput::SharedSecret { share0, share1 } => {
                share0.zeroize();
                share1.zeroize();
            }
        }
    }
}

impl fmt::Debug for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySource::Random => write!(f, "Random"),
            KeySource::Sideload(h) => write!(f, "Sideload(v{})", h.version),
        }
    }
}

impl fmt::Debug for PrivateKeyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrivateKeyInput::Shares { .. } => write!(f, "Shares([REDACTED])"),
            PrivateKeyInput::Sideload(h) => write!(f, "Sideload(v{})", h.version),
        }
    }
}

impl fmt::Debug for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Job::Keygen { key } => f.debug_struct("Keygen").field("key", key).finish(),
            Job::Sign { key, .. } => f
                .debug_struct("Sign")
                .field("key", key)
                .finish_non_exhaustive(),
            Job::Verify { .. } => f.debug_struct("Verify").finish_non_exhaustive(),
            Job::Agree { key, .. } => f
                .debug_struct("Agree")
                .field("key", key)
                .finish_non_exhaustive(),
        }
    }
}

impl fmt::Debug for JobOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobOutput::Keypair { shares, .. } => f
                .debug_struct("Keypair")
                .field("blinded", &shares.is_some())
                .finish_non_exhaustive(),
            JobOutput::Signature(_) => write!(f, "Signature(..)"),
            JobOutput::Verify(outcome) => match outcome {
                VerifyOutcome::Recovered(_) => write!(f, "Verify(Recovered(..))"),
                VerifyOutcome::Rejected => write!(f, "Verify(Rejected)"),
            },
            JobOutput::SharedSecret { .. } => write!(f, "SharedSecret([REDACTED])"),
        }
    }
}

/// A device able to run P-384 jobs
pub trait Accelerator {
    /// Start a job; fails if one is already running
    fn dispatch(&mut self, job: Job) -> Result<()>;

    /// Report progress of the running job
    fn poll(&mut self) -> Result<AccelStatus>;

    /// Take the output of the completed job
    fn read_output(&mut self) -> Result<JobOutput>;
}

impl<A: Accelerator + ?Sized> Accelerator for &mut A {
    fn dispatch(&mut self, job: Job) -> Result<()> {
        (**self).dispatch(job)
    }

    fn poll(&mut self) -> Result<AccelStatus> {
        (**self).poll()
    }

    fn read_output(&mut self) -> Result<JobOutput> {
        (**self).read_output()
    }
}

impl<A: Accelerator + ?Sized> Accelerator for Box<A> {
    fn dispatch(&mut self, job: Job) -> Result<()> {
        (**self).dispatch(job)
    }

    fn poll(&mut self) -> Result<AccelStatus> {
        (**self).poll()
    }

    fn read_output(&mut self) -> Result<JobOutput> {
        (**self).read_output()
    }
}
