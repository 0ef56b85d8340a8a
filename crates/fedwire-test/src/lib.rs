//! fedwire Test Harness - Chaos links and codec validation
//!
//! This crate provides:
//! - Seeded lossy link simulation
//! - Loopback federation over that link
//! - Test log capture
//! - Property tests across both conventions

pub mod chaos;
pub mod logging;
pub mod loopback;

#[cfg(test)]
mod properties;

pub use chaos::*;
pub use logging::*;
pub use loopback::*;
