//! Shape-contract classification of candidate descriptors.

use crate::scanner::descriptor::CandidateDescriptor;
use crate::scanner::diagnostics::{Violation, violations};

/// A candidate that passed every shape check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupType {
    /// Fully qualified type path, as it will appear in the generated source.
    pub type_path: String,
}

/// Result of one scan pass: valid startups and violations, both in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    pub startups: Vec<StartupType>,
    pub violations: Vec<Violation>,
}

impl ScanOutcome {
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}

/// Classify every candidate descriptor against the startup shape contract.
///
/// A candidate failing several checks yields one violation per failed check.
/// Violations never abort the pass: every remaining candidate is still
/// classified, and valid candidates are still handed to the emitter.
#[tracing::instrument(skip_all, fields(candidate_count = descriptors.len()))]
pub fn scan(descriptors: &[CandidateDescriptor]) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();

    for descriptor in descriptors {
        let mut valid = true;

        if !descriptor.implements_startup {
            outcome.violations.push(violations::incorrect_base_type(&descriptor.type_path));
            valid = false;
        }
        if !descriptor.has_default_constructor {
            outcome.violations.push(violations::constructor_missing(&descriptor.type_path));
            valid = false;
        }

        if valid {
            outcome.startups.push(StartupType {
                type_path: descriptor.type_path.clone(),
            });
        }
    }

    tracing::debug!(
        startup_count = outcome.startups.len(),
        violation_count = outcome.violations.len(),
        "scan complete"
    );
    outcome
}
