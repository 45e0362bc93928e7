//! ECDSA implementation for NIST P-384 curve
//!
//! The caller supplies the message digest (48 bytes); nothing in here hashes.
//! Private keys are blinded and only ever reach the accelerator as shares or
//! as a handle. Verification reports validity through a [`HardenedBool`],
//! never through the status: an `Ok` result only means the accelerator
//! finished without a fault.

use eccel_api::{
    Accelerator, Error, HardenedBool, Job, JobOutput, KeyConfig, KeyMode, Result, VerifyOutcome,
};
use eccel_common::{digest_from_slice, BlindedKey, Signature, UnblindedKey};
use eccel_context::{
    keygen as shared_keygen, Binding, Context, FinalizeResult, KeygenSession, SignSession,
    VerifySession,
};
use eccel_internal::hardened_eq;

const KEYGEN: &str = "ECDSA-P384 keygen";
const SIGN: &str = "ECDSA-P384 sign";
const VERIFY: &str = "ECDSA-P384 verify";

/// Start generating a signing key pair
///
/// `private_key` is the template to be populated at finalize: a zeroed
/// software template from [`BlindedKey::new`], or a hardware-backed key from
/// [`BlindedKey::hardware_backed`].
pub fn keygen_async_start<A: Accelerator>(
    ctx: &mut Context<A>,
    private_key: &BlindedKey,
) -> Result<KeygenSession> {
    shared_keygen::start(ctx, KeyMode::Signing, private_key, KEYGEN)
}

/// Finish key generation into the caller's templates
///
/// The private template must have the same config as at start, otherwise
/// `ConfigMismatch`.
pub fn keygen_async_finalize<A: Accelerator>(
    ctx: &mut Context<A>,
    session: KeygenSession,
    private_key: &mut BlindedKey,
    public_key: &mut UnblindedKey,
) -> FinalizeResult<(), KeygenSession> {
    shared_keygen::finalize(ctx, session, private_key, public_key, KEYGEN)
}

/// Start signing a digest
pub fn sign_async_start<A: Accelerator>(
    ctx: &mut Context<A>,
    private_key: &BlindedKey,
    digest: &[u8],
) -> Result<SignSession> {
    private_key.validate_for(KeyMode::Signing, SIGN)?;
    let digest = digest_from_slice(digest, SIGN)?;
    let key = private_key.private_input()?;

    ctx.dispatch(Job::Sign { key, digest }, Binding::None)
        .map(SignSession::from_ticket)
}

/// Collect the signature
///
/// A session started on another context is refused and handed back in the
/// error.
pub fn sign_async_finalize<A: Accelerator>(
    ctx: &mut Context<A>,
    session: SignSession,
) -> FinalizeResult<Signature, SignSession> {
    let completion = ctx
        .collect(session.into_ticket())
        .map_err(|e| e.map_session(SignSession::from_ticket))?;
    match completion.output {
        JobOutput::Signature(words) => Ok(Signature::from_words(words)),
        _ => Err(Error::sequence(SIGN).into()),
    }
}

/// Start verifying a signature over a digest
pub fn verify_async_start<A: Accelerator>(
    ctx: &mut Context<A>,
    public_key: &UnblindedKey,
    digest: &[u8],
    signature: &Signature,
) -> Result<VerifySession> {
    let public = public_key.point_for(KeyMode::Signing, VERIFY)?;
    let digest = digest_from_slice(digest, VERIFY)?;

    let job = Job::Verify {
        public,
        digest,
        signature: *signature.words(),
    };
    ctx.dispatch(
        job,
        Binding::Verify {
            signature: *signature,
        },
    )
    .map(VerifySession::from_ticket)
}

/// Finish verification
///
/// `signature` must be the one passed to start. The returned value is
/// `TRUE` only if the x-coordinate recovered by the accelerator matches r.
pub fn verify_async_finalize<A: Accelerator>(
    ctx: &mut Context<A>,
    session: VerifySession,
    signature: &Signature,
) -> FinalizeResult<HardenedBool, VerifySession> {
    let completion = ctx
        .collect(session.into_ticket())
        .map_err(|e| e.map_session(VerifySession::from_ticket))?;

    let started = match completion.binding {
        Binding::Verify { signature: started } => started,
        _ => {
            completion.discard();
            return Err(Error::sequence(VERIFY).into());
        }
    };
    if started != *signature {
        tracing::warn!("verify finalize signature differs from start");
        completion.discard();
        return Err(Error::mismatch(VERIFY).into());
    }

    let result = match completion.output {
        JobOutput::Verify(VerifyOutcome::Recovered(recovered)) => {
            hardened_eq(&recovered, &signature.r_bytes())
        }
        JobOutput::Verify(VerifyOutcome::Rejected) => HardenedBool::FALSE,
        _ => return Err(Error::sequence(VERIFY).into()),
    };
    tracing::debug!(valid = result.is_true(), "signature checked");
    Ok(result)
}

/// Generate a key pair into caller-allocated templates
pub fn keygen<A: Accelerator>(
    ctx: &mut Context<A>,
    private_key: &mut BlindedKey,
    public_key: &mut UnblindedKey,
) -> Result<()> {
    let session = keygen_async_start(ctx, private_key)?;
    Ok(keygen_async_finalize(ctx, session, private_key, public_key)?)
}

/// Allocate templates for a software-held `config` and generate into them
pub fn generate<A: Accelerator>(
    ctx: &mut Context<A>,
    config: KeyConfig,
) -> Result<(BlindedKey, UnblindedKey)> {
    let mut private_key = BlindedKey::new(config)?;
    let mut public_key = UnblindedKey::new(config)?;
    keygen(ctx, &mut private_key, &mut public_key)?;
    Ok((private_key, public_key))
}

/// Sign a 48-byte digest
pub fn sign<A: Accelerator>(
    ctx: &mut Context<A>,
    private_key: &BlindedKey,
    digest: &[u8],
) -> Result<Signature> {
    let session = sign_async_start(ctx, private_key, digest)?;
    Ok(sign_async_finalize(ctx, session)?)
}

/// Verify a signature over a 48-byte digest
pub fn verify<A: Accelerator>(
    ctx: &mut Context<A>,
    public_key: &UnblindedKey,
    digest: &[u8],
    signature: &Signature,
) -> Result<HardenedBool> {
    let session = verify_async_start(ctx, public_key, digest, signature)?;
    Ok(verify_async_finalize(ctx, session, signature)?)
}
