#![forbid(unsafe_code)]
//! extgen - build-time source generation for extension-host applications
//!
//! extgen reads manifests describing candidate "extension startup" types,
//! validates each candidate against the startup shape contract, reports
//! structured diagnostics for the misshapen ones, and emits one deterministic
//! Rust source file that invokes every valid startup with per-candidate
//! failure isolation.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Generated code**: The executor template emits `catch_unwind` blocks as *string literals* in
//!   generated source. Those are output strings, not panic handling in the generator itself.

pub mod backend;
pub mod cli;
pub mod scanner;
pub mod version;

pub use backend::{GeneratedArtifact, generate_executor, write_artifact};
pub use scanner::{
    CandidateDescriptor, Manifest, ManifestError, ScanOutcome, StartupType, Violation,
    ViolationKind, collect_candidates, load_manifest, scan,
};
