//! Provide the shared host vocabulary for the extgen generator and the code it emits.
//!
//! This crate is intentionally small and dependency-light. It contains the pieces that both:
//! - the generator can use when rendering the executor source and its diagnostics, and
//! - an extension host can link against at runtime to run the generated executor.
//!
//! ## Notes
//!
//! - This is a vocabulary crate: **no IO**, no global state beyond the `inventory`
//!   registry the generated executor submits itself into.
//! - Current scope: the startup contract ([`ExtensionStartup`] / [`HostBuilder`]),
//!   the executor registration record, panic payload rendering, and the canonical
//!   names shared between the emitter, diagnostics, and runtime.

pub mod host;
pub mod names;
pub mod panics;

pub use host::{ExecutorRegistration, ExtensionStartup, HostBuilder, configure_registered};
pub use names::{
    CONFIGURE_FAILURE_PREFIX, EXECUTOR_REGISTRATION_PATH, EXECUTOR_TYPE_NAME, GENERATED_FILE_NAME,
    HOST_BUILDER_PATH, STARTUP_TRAIT_NAME, STARTUP_TRAIT_PATH,
};
pub use panics::panic_message;

// Generated code invokes `::extgen_core::inventory::submit!` so hosts only need a
// direct dependency on this crate.
pub use inventory;
