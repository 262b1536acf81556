//! Candidate scanning
//!
//! This module contains everything between the manifest input and the emitter:
//! - `descriptor`: candidate descriptors and the JSON manifest provider
//! - `scan`: shape-contract classification of candidates
//! - `diagnostics`: violation records and terminal rendering

pub mod descriptor;
pub mod diagnostics;
pub mod scan;

pub use descriptor::{CandidateDescriptor, Manifest, ManifestError, collect_candidates, load_manifest};
pub use diagnostics::{Violation, ViolationKind};
pub use scan::{ScanOutcome, StartupType, scan};
