//! CLI module for the extgen generator
//!
//! ## Commands
//!
//! - `generate <MANIFEST>... --out-dir <DIR>` - Scan manifests and write the
//!   generated registration file
//! - `check <MANIFEST>...` - Scan manifests and report violations only
//! - `--emit <MANIFEST>...` - Print the generated source to stdout (debug)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::version::EXTGEN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Build-time source generator for extension-host applications
#[derive(Parser, Debug)]
#[command(name = "extgen")]
#[command(version = EXTGEN_VERSION)]
#[command(about = "Build-time source generator for extension-host applications", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Manifests to check (default action when no subcommand given)
    #[arg(value_name = "MANIFEST")]
    pub manifests: Vec<PathBuf>,

    /// Print the generated executor source to stdout (debug)
    #[arg(long = "emit", value_name = "MANIFEST", num_args = 1.., conflicts_with = "manifests")]
    pub emit_manifests: Vec<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan manifests and write the generated registration file
    Generate {
        /// Manifest files describing candidate startup types
        #[arg(value_name = "MANIFEST", required = true)]
        manifests: Vec<PathBuf>,
        /// Output directory for the generated file
        #[arg(long = "out-dir", value_name = "DIR", default_value = "target/extgen")]
        out_dir: PathBuf,
    },

    /// Scan manifests and report violations without generating
    Check {
        /// Manifest files describing candidate startup types
        #[arg(value_name = "MANIFEST", required = true)]
        manifests: Vec<PathBuf>,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    // Handle debug flags first
    if !cli.emit_manifests.is_empty() {
        return commands::emit_stdout(&cli.emit_manifests);
    }

    match cli.command {
        Some(Command::Generate { manifests, out_dir }) => commands::generate(&manifests, &out_dir),
        Some(Command::Check { manifests }) => commands::check_manifests(&manifests),
        None => {
            // Default: check the manifests if provided
            if cli.manifests.is_empty() {
                Err(CliError::failure("error: no manifest given (try --help)"))
            } else {
                commands::check_manifests(&cli.manifests)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
