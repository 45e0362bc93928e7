//! ECDSA signature schemes

pub mod p384;
