//! Violation records and terminal rendering.
//!
//! A violation is data, not an error: the scanner reports every shape-contract
//! failure it finds and keeps going, so one misshapen candidate never hides
//! another or blocks emission for the valid ones.

use extgen_core::STARTUP_TRAIT_NAME;

/// A shape-contract violation for one candidate type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub kind: ViolationKind,
    /// Fully qualified path of the offending candidate.
    pub type_path: String,
    /// The trait the candidate was expected to implement (base-type violations only).
    pub expected_trait: Option<String>,
    pub message: String,
    pub hints: Vec<String>,
}

impl Violation {
    fn new(kind: ViolationKind, type_path: &str, message: String) -> Self {
        Self {
            kind,
            type_path: type_path.to_string(),
            expected_trait: None,
            message,
            hints: Vec::new(),
        }
    }

    fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// Candidate does not implement the required startup trait.
    IncorrectBaseType,
    /// Candidate lacks a parameterless constructor.
    ConstructorMissing,
}

impl ViolationKind {
    /// Stable diagnostic code, e.g. `EXT001`.
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::IncorrectBaseType => "EXT001",
            ViolationKind::ConstructorMissing => "EXT002",
        }
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViolationKind::IncorrectBaseType => write!(f, "incorrect base type"),
            ViolationKind::ConstructorMissing => write!(f, "constructor missing"),
        }
    }
}

// ============================================================================
// Violation catalog
// ============================================================================

/// Create the violation records the scanner reports.
pub mod violations {
    use super::*;

    pub fn incorrect_base_type(type_path: &str) -> Violation {
        let mut violation = Violation::new(
            ViolationKind::IncorrectBaseType,
            type_path,
            format!("'{type_path}' must implement the '{STARTUP_TRAIT_NAME}' trait"),
        )
        .with_hint(format!("implement '{STARTUP_TRAIT_NAME}' for the type, or remove it from the manifest"));
        violation.expected_trait = Some(STARTUP_TRAIT_NAME.to_string());
        violation
    }

    pub fn constructor_missing(type_path: &str) -> Violation {
        Violation::new(
            ViolationKind::ConstructorMissing,
            type_path,
            format!("'{type_path}' has no parameterless constructor"),
        )
        .with_hint("derive or implement 'Default' for the type")
    }
}

// ============================================================================
// Terminal rendering
// ============================================================================

/// Format a violation for terminal output.
pub fn format_violation(violation: &Violation) -> String {
    let red = "\x1b[31m";
    let cyan = "\x1b[36m";
    let bold = "\x1b[1m";
    let reset = "\x1b[0m";

    let mut out = format!(
        "{bold}{red}error[{code}]{reset}{bold}: {message}{reset}\n",
        code = violation.kind.code(),
        message = violation.message,
    );
    for hint in &violation.hints {
        out.push_str(&format!("  {cyan}= hint:{reset} {hint}\n"));
    }
    out
}

/// Print a violation to stderr.
pub fn print_violation(violation: &Violation) {
    eprint!("{}", format_violation(violation));
}
