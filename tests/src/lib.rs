//! Shared fixtures for the eccel integration suites
pub mod fixtures;
pub mod vectors;
