//! extgen version information.
//!
//! This module exposes the generator version as a single constant so all subsystems
//! (CLI, logging, future artifact metadata) agree on the same value.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.
//! - The generated artifact deliberately does not embed it: output must stay
//!   byte-identical across generator releases for identical inputs.

/// The extgen version string (for example, `0.1.0`).
pub const EXTGEN_VERSION: &str = env!("CARGO_PKG_VERSION");
