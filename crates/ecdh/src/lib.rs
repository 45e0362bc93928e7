//! ECDH over NIST P-384
//!
//! Key agreement never returns the shared secret in the clear. The
//! accelerator hands back two XOR shares which land in a caller-allocated
//! [`SharedKey`](eccel_common::SharedKey); two parties can compare
//! [`commitment`]s to confirm they agree without revealing the secret.

pub mod commitment;
pub mod p384;

pub use commitment::commitment;
pub use p384::{
    agree, agree_async_finalize, agree_async_start, derive_shared, generate, keygen,
    keygen_async_finalize, keygen_async_start,
};
