//! ECDSA over NIST P-384
//!
//! Every operation comes as an asynchronous `*_async_start` /
//! `*_async_finalize` pair over an [`eccel_context::Context`], plus a
//! synchronous wrapper that runs both halves back to back.

pub mod ecdsa;

pub use ecdsa::p384::{
    generate, keygen, keygen_async_finalize, keygen_async_start, sign, sign_async_finalize,
    sign_async_start, verify, verify_async_finalize, verify_async_start,
};
