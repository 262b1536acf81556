//! The executor template.
//!
//! Renders the generated registration file: a fixed scaffold declaring the
//! executor type, one failure-isolated invocation block per valid startup (in
//! discovery order), and the registration record announcing the executor to
//! the host.

use crate::backend::emitter::SourceEmitter;
use crate::scanner::StartupType;
use extgen_core::{
    CONFIGURE_FAILURE_PREFIX, EXECUTOR_REGISTRATION_PATH, EXECUTOR_TYPE_NAME, GENERATED_FILE_NAME,
    HOST_BUILDER_PATH, STARTUP_TRAIT_PATH,
};

/// A rendered source artifact, ready to be written into the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub file_name: String,
    pub source: String,
}

/// Render the executor registration file for the given startups.
///
/// Returns `None` when the startup list is empty: no artifact is produced at
/// all. Otherwise the output is a pure function of the ordered input list -
/// repeated calls render byte-identical text.
#[tracing::instrument(skip_all, fields(startup_count = startups.len()))]
pub fn generate_executor(startups: &[StartupType]) -> Option<GeneratedArtifact> {
    if startups.is_empty() {
        tracing::debug!("no valid startups; skipping emission");
        return None;
    }

    let mut e = SourceEmitter::new();
    e.comment("@generated by extgen. Do not edit by hand.");
    e.comment("");
    e.comment("Invokes the configure hook of every extension startup discovered in the");
    e.comment("build's dependency graph. Each invocation is isolated: a panicking startup");
    e.comment("is reported on stderr and the remaining startups still run.");
    e.blank_line();
    e.doc_comment("Generated executor that chains every discovered extension startup.");
    e.line(&format!("pub struct {EXECUTOR_TYPE_NAME};"));
    e.blank_line();
    e.block(
        &format!("impl {STARTUP_TRAIT_PATH} for {EXECUTOR_TYPE_NAME}"),
        |e| {
            e.block(
                &format!("fn configure(&self, builder: &mut {HOST_BUILDER_PATH})"),
                |e| {
                    for startup in startups {
                        emit_isolated_invocation(e, &startup.type_path);
                    }
                },
            );
        },
    );
    e.blank_line();
    emit_registration(&mut e);

    Some(GeneratedArtifact {
        file_name: GENERATED_FILE_NAME.to_string(),
        source: e.finish(),
    })
}

/// One failure-isolated invocation block: construct the startup, run its
/// configure hook, and on panic report the startup's path and keep going.
fn emit_isolated_invocation(e: &mut SourceEmitter, type_path: &str) {
    e.line("if let Err(panic) = ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| {");
    e.indent();
    e.line(&format!(
        "let startup = <{type_path} as ::core::default::Default>::default();"
    ));
    e.line(&format!("{STARTUP_TRAIT_PATH}::configure(&startup, builder);"));
    e.dedent();
    e.line("})) {");
    e.indent();
    e.line("::std::eprintln!(");
    e.indent();
    e.line(&format!(
        "\"{CONFIGURE_FAILURE_PREFIX} {type_path} instance: {{}}\","
    ));
    e.line("::extgen_core::panic_message(&panic)");
    e.dedent();
    e.line(");");
    e.dedent();
    e.line("}");
}

fn emit_registration(e: &mut SourceEmitter) {
    e.line("::extgen_core::inventory::submit! {");
    e.indent();
    e.line(&format!(
        "{EXECUTOR_REGISTRATION_PATH}::new(\"{EXECUTOR_TYPE_NAME}\", |builder| {{"
    ));
    e.indent();
    e.line(&format!(
        "{STARTUP_TRAIT_PATH}::configure(&{EXECUTOR_TYPE_NAME}, builder)"
    ));
    e.dedent();
    e.line("})");
    e.dedent();
    e.line("}");
}
