//! Secret containers with guaranteed zeroization

pub mod secret;

pub use secret::Keyblob;
