//! Key generation shared by ECDSA and ECDH
//!
//! Both families produce the same blinded private key and x||y public key;
//! they differ only in the key mode they accept.

use crate::context::{Binding, Context};
use crate::finalize::FinalizeResult;
use crate::session::KeygenSession;
use eccel_api::{AccelFault, Accelerator, Error, Job, JobOutput, KeyMode, KeySource, Result};
use eccel_common::{BlindedKey, UnblindedKey};

/// Validate the private template and dispatch key generation
///
/// Hardware-backed templates sideload their handle, which must still carry
/// its checksum; software templates ask for a fresh random key.
pub fn start<A: Accelerator>(
    ctx: &mut Context<A>,
    mode: KeyMode,
    private_key: &BlindedKey,
    context: &'static str,
) -> Result<KeygenSession> {
    private_key
        .check_shape()
        .map_err(|e| e.with_context(context))?;
    if private_key.config.mode != mode {
        return Err(Error::bad_argument(context));
    }
    if private_key.handle().is_some() {
        private_key
            .verify_checksum()
            .map_err(|e| e.with_context(context))?;
    }

    let handle = private_key.handle().copied();
    let key = match handle {
        Some(handle) => KeySource::Sideload(handle),
        None => KeySource::Random,
    };
    let binding = Binding::Keygen {
        config: private_key.config,
        handle,
    };
    ctx.dispatch(Job::Keygen { key }, binding)
        .map(KeygenSession::from_ticket)
}

/// Collect generated key material into the caller's templates
///
/// The private template must carry the config (and handle) passed to
/// [`start`]; the public template must have the same curve and mode. A
/// session from another context is handed back in the error.
pub fn finalize<A: Accelerator>(
    ctx: &mut Context<A>,
    session: KeygenSession,
    private_key: &mut BlindedKey,
    public_key: &mut UnblindedKey,
    context: &'static str,
) -> FinalizeResult<(), KeygenSession> {
    let completion = ctx
        .collect(session.into_ticket())
        .map_err(|e| e.map_session(KeygenSession::from_ticket))?;

    let (config, handle) = match completion.binding {
        Binding::Keygen { config, handle } => (config, handle),
        _ => {
            completion.discard();
            return Err(Error::sequence(context).into());
        }
    };

    let matches = private_key.config == config
        && private_key.handle().copied() == handle
        && public_key.config.same_key_type(&config);
    if !matches {
        tracing::warn!(context, mode = ?config.mode, "keygen finalize arguments differ from start");
        completion.discard();
        return Err(Error::mismatch(context).into());
    }
    if let Err(e) = private_key
        .check_shape()
        .and_then(|_| public_key.check_template(config.mode, context))
    {
        completion.discard();
        return Err(e.with_context(context).into());
    }

    match completion.output {
        JobOutput::Keypair {
            shares: Some((share0, share1)),
            public,
        } if !config.hardware_backed => {
            private_key.populate_shares(&share0[..], &share1[..])?;
            public_key.key.copy_from_slice(&public);
        }
        JobOutput::Keypair {
            shares: None,
            public,
        } if config.hardware_backed => {
            private_key
                .verify_checksum()
                .map_err(|e| e.with_context(context))?;
            public_key.key.copy_from_slice(&public);
        }
        _ => {
            return Err(Error::hardware(context, AccelFault::NoOutput).into());
        }
    }

    tracing::debug!(context, mode = ?config.mode, hardware_backed = config.hardware_backed, "key generated");
    Ok(())
}
