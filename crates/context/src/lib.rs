//! Accelerator context and the asynchronous operation controller
//!
//! Every operation is split into a `start` that validates its arguments and
//! dispatches a job, and a `finalize` that waits for the accelerator and
//! turns its output into a result. A [`Context`] owns one accelerator and
//! allows at most one operation in flight:
//!
//! ```text
//! Idle --start--> Pending --finalize--> Idle
//! ```
//!
//! `start` hands out a session token that `finalize` consumes, so a result
//! can only be collected by the caller that started the operation. A context
//! refuses a token it did not issue and returns it inside the
//! [`FinalizeError`], so it can still be finalized where it belongs.

pub mod config;
mod context;
pub mod finalize;
pub mod keygen;
pub mod session;
pub mod shared;

pub use config::{ContextConfig, PollMode};
pub use context::{Binding, Completion, Context, Ticket};
pub use finalize::{FinalizeError, FinalizeResult};
pub use session::{AgreeSession, KeygenSession, SignSession, VerifySession};
pub use shared::SharedContext;
