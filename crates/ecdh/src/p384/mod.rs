//! ECDH implementation for NIST P-384 curve
//!
//! Private keys use [`KeyMode::KeyAgreement`]; the agreement result is a
//! [`SharedKey`] of mode [`KeyMode::SharedSecret`], held as XOR shares. The
//! peer's public key is checked by the accelerator, which reports an
//! off-curve point as a hardware fault.

use eccel_api::{Accelerator, Error, Job, JobOutput, KeyConfig, KeyMode, Result};
use eccel_common::{BlindedKey, SharedKey, UnblindedKey};
use eccel_context::{
    keygen as shared_keygen, AgreeSession, Binding, Context, FinalizeResult, KeygenSession,
};

const KEYGEN: &str = "ECDH-P384 keygen";
const AGREE: &str = "ECDH-P384 agree";

/// Start generating a key-agreement key pair
pub fn keygen_async_start<A: Accelerator>(
    ctx: &mut Context<A>,
    private_key: &BlindedKey,
) -> Result<KeygenSession> {
    shared_keygen::start(ctx, KeyMode::KeyAgreement, private_key, KEYGEN)
}

/// Finish key generation into the caller's templates
pub fn keygen_async_finalize<A: Accelerator>(
    ctx: &mut Context<A>,
    session: KeygenSession,
    private_key: &mut BlindedKey,
    public_key: &mut UnblindedKey,
) -> FinalizeResult<(), KeygenSession> {
    shared_keygen::finalize(ctx, session, private_key, public_key, KEYGEN)
}

/// Start agreeing on a secret with `peer_public`
pub fn agree_async_start<A: Accelerator>(
    ctx: &mut Context<A>,
    private_key: &BlindedKey,
    peer_public: &UnblindedKey,
) -> Result<AgreeSession> {
    private_key.validate_for(KeyMode::KeyAgreement, AGREE)?;
    let public = peer_public.point_for(KeyMode::KeyAgreement, AGREE)?;
    let key = private_key.private_input()?;

    ctx.dispatch(Job::Agree { key, public }, Binding::None)
        .map(AgreeSession::from_ticket)
}

/// Collect the shared secret into `shared`
///
/// `shared` must be a software-held P-384 shared-secret template; it is
/// populated with fresh XOR shares and its checksum stamped. A session
/// started on another context is handed back in the error.
pub fn agree_async_finalize<A: Accelerator>(
    ctx: &mut Context<A>,
    session: AgreeSession,
    shared: &mut SharedKey,
) -> FinalizeResult<(), AgreeSession> {
    let completion = ctx
        .collect(session.into_ticket())
        .map_err(|e| e.map_session(AgreeSession::from_ticket))?;

    let template = shared
        .check_shape()
        .and_then(|_| match shared.config.mode {
            KeyMode::SharedSecret => Ok(()),
            _ => Err(Error::bad_argument(AGREE)),
        });
    if let Err(e) = template {
        completion.discard();
        return Err(e.with_context(AGREE).into());
    }

    match completion.output {
        JobOutput::SharedSecret { share0, share1 } => {
            shared.populate_shares(&share0[..], &share1[..])?;
        }
        _ => return Err(Error::sequence(AGREE).into()),
    }
    tracing::debug!("shared secret established");
    Ok(())
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

/// Agree on a secret into a caller-allocated template
pub fn agree<A: Accelerator>(
    ctx: &mut Context<A>,
    private_key: &BlindedKey,
    peer_public: &UnblindedKey,
    shared: &mut SharedKey,
) -> Result<()> {
    let session = agree_async_start(ctx, private_key, peer_public)?;
    Ok(agree_async_finalize(ctx, session, shared)?)
}

/// Agree on a secret and return it as a fresh blinded key
pub fn derive_shared<A: Accelerator>(
    ctx: &mut Context<A>,
    private_key: &BlindedKey,
    peer_public: &UnblindedKey,
) -> Result<SharedKey> {
    let mut shared = BlindedKey::new(KeyConfig::p384_shared_secret())?;
    agree(ctx, private_key, peer_public, &mut shared)?;
    Ok(shared)
}
