use crate::config::EngineConfig;
use crate::masking::{blind, reduce_scalar, reduce_wide, scalar_bytes, split_secret, unmask};
use eccel_api::traits::accelerator::{DigestBytes, PublicPoint, SignatureWords};
use eccel_api::{
    AccelFault, AccelStatus, Accelerator, Error, Job, JobOutput, KeyHandle, KeySource,
    PrivateKeyInput, Result, VerifyOutcome,
};
use eccel_common::Signature;
use eccel_params::p384::{P384_PRIVATE_SHARE_SIZE, P384_PUBLIC_KEY_SIZE, P384_SCALAR_SIZE};
use hkdf::Hkdf;
use p384::ecdsa::signature::hazmat::PrehashSigner;
use p384::ecdsa::SigningKey;
use p384::elliptic_curve::group::Group;
use p384::elliptic_curve::point::AffineCoordinates;
use p384::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use p384::elliptic_curve::PrimeField;
use p384::{AffinePoint, EncodedPoint, FieldBytes, NonZeroScalar, ProjectivePoint, Scalar};
use rand::{CryptoRng, RngCore};
use sha2::Sha384;
use zeroize::{Zeroize, Zeroizing};

/// HKDF salt separating sideloaded-key derivation from any other use of the
/// device secret
const SIDELOAD_SALT: &[u8] = b"eccel/p384/sideload";

type JobResult = core::result::Result<JobOutput, AccelFault>;

enum EngineState {
    Idle,
    Running { result: JobResult, remaining: u32 },
    Complete(JobOutput),
}

/// Software accelerator backed by the `p384` crate
pub struct SoftEngine<R> {
    config: EngineConfig,
    rng: R,
    state: EngineState,
    armed_fault: Option<AccelFault>,
    jobs_completed: u64,
}

impl<R: RngCore + CryptoRng> SoftEngine<R> {
    /// Engine with the default configuration
    pub fn new(rng: R) -> Self {
        Self::with_config(EngineConfig::default(), rng)
    }

    pub fn with_config(config: EngineConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            state: EngineState::Idle,
            armed_fault: None,
            jobs_completed: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Arm a fault to be reported at the next poll
    pub fn inject_fault(&mut self, fault: AccelFault) {
        tracing::debug!(%fault, "fault armed");
        self.armed_fault = Some(fault);
    }

    /// A job has been dispatched and its output not yet read
    pub fn is_busy(&self) -> bool {
        !matches!(self.state, EngineState::Idle)
    }

    /// Number of jobs whose output has been read back
    pub fn jobs_completed(&self) -> u64 {
        self.jobs_completed
    }

    fn execute(&mut self, job: Job) -> JobResult {
        match job {
            Job::Keygen { key } => self.keygen(key),
            Job::Sign { key, digest } => {
                let d = self.private_scalar(&key)?;
                sign(&d, &digest).map(JobOutput::Signature)
            }
            Job::Verify {
                public,
                digest,
                signature,
            } => Ok(JobOutput::Verify(verify(&public, &digest, &signature))),
            Job::Agree { key, public } => {
                let d = self.private_scalar(&key)?;
                let mut x = agree(&d, &public)?;
                let (share0, share1) = split_secret(&x, &mut self.rng);
                x.zeroize();
                Ok(JobOutput::SharedSecret { share0, share1 })
            }
        }
    }

    fn keygen(&mut self, source: KeySource) -> JobResult {
        match source {
            KeySource::Random => {
                let d = NonZeroScalar::random(&mut self.rng);
                let public = encode_public(&d);
                let shares = blind(&d, &mut self.rng);
                Ok(JobOutput::Keypair {
                    shares: Some(shares),
                    public,
                })
            }
            KeySource::Sideload(handle) => {
                let d = self.sideload(&handle)?;
                Ok(JobOutput::Keypair {
                    shares: None,
                    public: encode_public(&d),
                })
            }
        }
    }

    fn private_scalar(&self, key: &PrivateKeyInput) -> core::result::Result<NonZeroScalar, AccelFault> {
        match key {
            PrivateKeyInput::Shares { share0, share1 } => non_zero(unmask(share0, share1)),
            PrivateKeyInput::Sideload(handle) => self.sideload(handle),
        }
    }

    /// Derive the key a handle refers to
    fn sideload(&self, handle: &KeyHandle) -> core::result::Result<NonZeroScalar, AccelFault> {
        let hk = Hkdf::<Sha384>::new(Some(SIDELOAD_SALT), &self.config.device_secret);
        let mut okm = Zeroizing::new([0u8; P384_PRIVATE_SHARE_SIZE]);
        hk.expand(&handle.to_bytes(), &mut okm[..])
            .map_err(|_| AccelFault::Stalled)?;
        non_zero(reduce_wide(&okm))
    }
}

impl SoftEngine<rand::rngs::OsRng> {
    /// Engine drawing its randomness from the operating system
    pub fn with_os_rng(config: EngineConfig) -> Self {
        Self::with_config(config, rand::rngs::OsRng)
    }
}

impl<R: RngCore + CryptoRng> Accelerator for SoftEngine<R> {
    fn dispatch(&mut self, job: Job) -> Result<()> {
        if let EngineState::Running { .. } = self.state {
            return Err(Error::hardware("SoftEngine::dispatch", AccelFault::Busy));
        }
        if let EngineState::Complete(output) = &mut self.state {
            tracing::debug!("discarding unread output");
            output.zeroize();
        }

        let kind = job.kind();
        let result = self.execute(job);
        tracing::debug!(?kind, busy_polls = self.config.busy_polls, "job accepted");
        self.state = EngineState::Running {
            result,
            remaining: self.config.busy_polls,
        };
        Ok(())
    }

    fn poll(&mut self) -> Result<AccelStatus> {
        if let Some(fault) = self.armed_fault.take() {
            tracing::warn!(%fault, "engine fault");
            self.state = EngineState::Idle;
            return Err(Error::hardware("SoftEngine::poll", fault));
        }

        match core::mem::replace(&mut self.state, EngineState::Idle) {
            EngineState::Idle => Err(Error::hardware("SoftEngine::poll", AccelFault::NoOutput)),
            EngineState::Running {
                result,
                remaining: 0,
            } => match result {
                Ok(output) => {
                    self.state = EngineState::Complete(output);
                    Ok(AccelStatus::Done)
                }
                Err(fault) => {
                    tracing::warn!(%fault, "job failed");
                    Err(Error::hardware("SoftEngine::poll", fault))
                }
            },
            EngineState::Running { result, remaining } => {
                tracing::trace!(remaining, "engine busy");
                self.state = EngineState::Running {
                    result,
                    remaining: remaining - 1,
                };
                Ok(AccelStatus::Busy)
            }
            done @ EngineState::Complete(_) => {
                self.state = done;
                Ok(AccelStatus::Done)
            }
        }
    }

    fn read_output(&mut self) -> Result<JobOutput> {
        match core::mem::replace(&mut self.state, EngineState::Idle) {
            EngineState::Complete(output) => {
                self.jobs_completed += 1;
                Ok(output)
            }
            other => {
                self.state = other;
                Err(Error::hardware(
                    "SoftEngine::read_output",
                    AccelFault::NoOutput,
                ))
            }
        }
    }
}

fn non_zero(scalar: Scalar) -> core::result::Result<NonZeroScalar, AccelFault> {
    let scalar: Option<NonZeroScalar> = NonZeroScalar::new(scalar).into();
    scalar.ok_or(AccelFault::InvalidScalar)
}

fn encode_public(d: &NonZeroScalar) -> PublicPoint {
    let point = (ProjectivePoint::GENERATOR * **d).to_affine();
    let encoded = point.to_encoded_point(false);
    let mut public = [0u8; P384_PUBLIC_KEY_SIZE];
    // skip the SEC1 0x04 tag
    public.copy_from_slice(&encoded.as_bytes()[1..]);
    public
}

fn decode_public(public: &PublicPoint) -> Option<AffinePoint> {
    let mut sec1 = [0u8; P384_PUBLIC_KEY_SIZE + 1];
    sec1[0] = 0x04;
    sec1[1..].copy_from_slice(public);
    let encoded = EncodedPoint::from_bytes(sec1).ok()?;
    Option::from(AffinePoint::from_encoded_point(&encoded))
}

/// Parse a signature half, rejecting zero and values not below n
fn signature_scalar(bytes: &[u8; P384_SCALAR_SIZE]) -> Option<Scalar> {
    let mut repr = FieldBytes::default();
    repr.copy_from_slice(bytes);
    let scalar: Option<Scalar> = Scalar::from_repr(repr).into();
    scalar.filter(|s| !bool::from(s.is_zero()))
}

fn sign(d: &NonZeroScalar, digest: &DigestBytes) -> core::result::Result<SignatureWords, AccelFault> {
    let signing_key = SigningKey::from(*d);
    let signature: p384::ecdsa::Signature = signing_key
        .sign_prehash(digest)
        .map_err(|_| AccelFault::InvalidScalar)?;
    let (r, s) = signature.split_bytes();

    let mut r_bytes = [0u8; P384_SCALAR_SIZE];
    let mut s_bytes = [0u8; P384_SCALAR_SIZE];
    r_bytes.copy_from_slice(&r);
    s_bytes.copy_from_slice(&s);
    Ok(*Signature::from_scalars(&r_bytes, &s_bytes).words())
}

/// Recover the x-coordinate an honest signer's nonce point would have
fn verify(public: &PublicPoint, digest: &DigestBytes, signature: &SignatureWords) -> VerifyOutcome {
    let signature = Signature::from_words(*signature);

    // Step 1: parse Q, r and s
    let q = match decode_public(public) {
        Some(q) => q,
        None => return VerifyOutcome::Rejected,
    };
    let (r, s) = match (
        signature_scalar(&signature.r_bytes()),
        signature_scalar(&signature.s_bytes()),
    ) {
        (Some(r), Some(s)) => (r, s),
        _ => return VerifyOutcome::Rejected,
    };

    // Step 2: z from the digest, w = s^-1
    let z = reduce_scalar(digest);
    let w: Option<Scalar> = s.invert().into();
    let w = match w {
        Some(w) => w,
        None => return VerifyOutcome::Rejected,
    };

    // Step 3: X = u1*G + u2*Q
    let u1 = z * w;
    let u2 = r * w;
    let x_point = ProjectivePoint::GENERATOR * u1 + ProjectivePoint::from(q) * u2;
    if bool::from(x_point.is_identity()) {
        return VerifyOutcome::Rejected;
    }

    // Step 4: r' = x mod n
    let mut x = [0u8; P384_SCALAR_SIZE];
    x.copy_from_slice(&x_point.to_affine().x());
    VerifyOutcome::Recovered(scalar_bytes(&reduce_scalar(&x)))
}

fn agree(d: &NonZeroScalar, public: &PublicPoint) -> core::result::Result<[u8; P384_SCALAR_SIZE], AccelFault> {
    let peer = decode_public(public).ok_or(AccelFault::InvalidPoint)?;
    let shared = (ProjectivePoint::from(peer) * **d).to_affine();
    let mut x = [0u8; P384_SCALAR_SIZE];
    x.copy_from_slice(&shared.x());
    Ok(x)
}
