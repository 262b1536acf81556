//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::{Path, PathBuf};

use crate::backend::{generate_executor, write_artifact};
use crate::scanner::{ScanOutcome, collect_candidates, diagnostics, scan};

use super::{CliError, CliResult, ExitCode};

/// Load every manifest and run the scan pass.
fn load_and_scan(paths: &[PathBuf]) -> CliResult<ScanOutcome> {
    let candidates = collect_candidates(paths).map_err(|e| CliError::failure(e.to_string()))?;
    Ok(scan(&candidates))
}

/// Print every violation to stderr.
fn report_violations(outcome: &ScanOutcome) {
    for violation in &outcome.violations {
        diagnostics::print_violation(violation);
    }
}

/// Exit 1 when any violation was reported, 0 otherwise.
fn exit_code_for(outcome: &ScanOutcome) -> ExitCode {
    if outcome.has_violations() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// `check`: scan and report only.
pub fn check_manifests(paths: &[PathBuf]) -> CliResult<ExitCode> {
    let outcome = load_and_scan(paths)?;
    report_violations(&outcome);
    println!(
        "{} startup type(s), {} violation(s)",
        outcome.startups.len(),
        outcome.violations.len()
    );
    Ok(exit_code_for(&outcome))
}

/// `generate`: scan, report, and write the registration file.
///
/// Violations do not block generation: valid startups still emit, and the
/// exit code reflects whether anything was reported.
pub fn generate(paths: &[PathBuf], out_dir: &Path) -> CliResult<ExitCode> {
    validate_output_dir(out_dir)?;
    let outcome = load_and_scan(paths)?;
    report_violations(&outcome);

    match generate_executor(&outcome.startups) {
        Some(artifact) => {
            let path = write_artifact(&artifact, out_dir).map_err(|e| {
                CliError::failure(format!("error writing into '{}': {e}", out_dir.display()))
            })?;
            println!("Wrote {}", path.display());
        }
        None => {
            tracing::info!("no extension startups found; nothing to generate");
        }
    }

    Ok(exit_code_for(&outcome))
}

/// `--emit`: print the generated source to stdout.
pub fn emit_stdout(paths: &[PathBuf]) -> CliResult<ExitCode> {
    let outcome = load_and_scan(paths)?;
    report_violations(&outcome);
    if let Some(artifact) = generate_executor(&outcome.startups) {
        print!("{}", artifact.source);
    }
    Ok(exit_code_for(&outcome))
}

/// Validate the output directory to prevent path traversal.
fn validate_output_dir(out_dir: &Path) -> CliResult<()> {
    for component in out_dir.components() {
        if let std::path::Component::ParentDir = component {
            return Err(CliError::failure(format!(
                "output directory '{}' contains path traversal (..)",
                out_dir.display()
            )));
        }
    }

    if out_dir.is_absolute() {
        tracing::warn!(
            "using absolute output path: {}. Consider using a relative path.",
            out_dir.display()
        );
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn output_dir_with_traversal_is_rejected() {
        let err = validate_output_dir(Path::new("out/../secrets")).unwrap_err();
        assert!(err.message.contains("path traversal"));
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn plain_output_dir_is_accepted() {
        assert!(validate_output_dir(Path::new("target/extgen")).is_ok());
    }

    #[test]
    fn exit_code_tracks_violations() {
        let clean = ScanOutcome::default();
        assert_eq!(exit_code_for(&clean), ExitCode::SUCCESS);

        let dirty = scan(&[crate::scanner::CandidateDescriptor {
            type_path: "x::Y".to_string(),
            implements_startup: false,
            has_default_constructor: true,
        }]);
        assert_eq!(exit_code_for(&dirty), ExitCode::FAILURE);
    }
}
