//! Error handling for the eccel core

pub mod status;
pub mod types;

// Re-export the primary error type and result
pub use status::Status;
pub use types::{AccelFault, Error, Result};
