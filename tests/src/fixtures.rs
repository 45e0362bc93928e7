//! Deterministic contexts and digests

use eccel_context::{Context, SharedContext};
use eccel_engine::{EngineConfig, SoftEngine};
use once_cell::sync::Lazy;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha384};

pub type Engine = SoftEngine<ChaCha20Rng>;

/// One context shared by every test in a binary
pub static SHARED: Lazy<SharedContext<Engine>> =
    Lazy::new(|| SharedContext::new(context(0x5eed)));

/// Fresh context over a seeded engine
pub fn context(seed: u64) -> Context<Engine> {
    Context::new(SoftEngine::new(ChaCha20Rng::seed_from_u64(seed)))
}

/// Context whose engine reports Busy `polls` times per job
pub fn slow_context(seed: u64, polls: u32) -> Context<Engine> {
    let config = EngineConfig::default().with_busy_polls(polls);
    Context::new(SoftEngine::with_config(
        config,
        ChaCha20Rng::seed_from_u64(seed),
    ))
}

/// SHA-384 of `message`
pub fn digest(message: &[u8]) -> [u8; 48] {
    let mut out = [0u8; 48];
    out.copy_from_slice(&Sha384::digest(message));
    out
}
