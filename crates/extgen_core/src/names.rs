//! Canonical names shared across the generator and runtime.
//!
//! This module exposes each name as a single constant so all subsystems (emitter,
//! diagnostics, host runtime) agree on the same value.

/// Type name of the generated executor.
pub const EXECUTOR_TYPE_NAME: &str = "ExtensionStartupExecutor";

/// File name of the generated registration file.
pub const GENERATED_FILE_NAME: &str = "extension_startup_executor.g.rs";

/// The trait every extension startup must implement, as shown in diagnostics.
pub const STARTUP_TRAIT_NAME: &str = "extgen_core::ExtensionStartup";

/// Absolute path of the startup trait, as written into generated code.
pub const STARTUP_TRAIT_PATH: &str = "::extgen_core::ExtensionStartup";

/// Absolute path of the host builder, as written into generated code.
pub const HOST_BUILDER_PATH: &str = "::extgen_core::HostBuilder";

/// Absolute path of the executor registration record, as written into generated code.
pub const EXECUTOR_REGISTRATION_PATH: &str = "::extgen_core::ExecutorRegistration";

/// Prefix of the error line the generated executor prints when a startup fails.
///
/// The emitter completes the line with the startup's fully qualified type path and
/// the rendered panic payload.
pub const CONFIGURE_FAILURE_PREFIX: &str = "error calling configure on";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emitted_paths_match_display_names() {
        assert_eq!(STARTUP_TRAIT_PATH, format!("::{STARTUP_TRAIT_NAME}"));
        assert!(HOST_BUILDER_PATH.starts_with("::extgen_core::"));
        assert!(EXECUTOR_REGISTRATION_PATH.starts_with("::extgen_core::"));
    }

    #[test]
    fn generated_file_name_carries_generated_marker() {
        assert!(GENERATED_FILE_NAME.ends_with(".g.rs"));
    }
}
