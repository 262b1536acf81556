//! Startup contract and host-side registration surface.
//!
//! An extension startup is a type the host constructs once at startup and hands a
//! [`HostBuilder`] to. The generated executor chains every discovered startup and
//! announces itself through an [`ExecutorRegistration`] record so the host can find
//! it without naming it.

/// Mutable registration surface handed to every startup's `configure` hook.
///
/// Startups use it to contribute services and middleware to the host being built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostBuilder {
    services: Vec<String>,
    middleware: Vec<String>,
}

impl HostBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named service with the host.
    pub fn register_service(&mut self, name: impl Into<String>) {
        self.services.push(name.into());
    }

    /// Register a named middleware with the host.
    pub fn register_middleware(&mut self, name: impl Into<String>) {
        self.middleware.push(name.into());
    }

    /// Services registered so far, in registration order.
    pub fn services(&self) -> &[String] {
        &self.services
    }

    /// Middleware registered so far, in registration order.
    pub fn middleware(&self) -> &[String] {
        &self.middleware
    }
}

/// Contract an extension startup must satisfy.
///
/// Implementors must also provide a parameterless constructor (`Default`); the
/// generated executor constructs each startup with `Default::default()` before
/// invoking [`configure`](ExtensionStartup::configure).
pub trait ExtensionStartup {
    /// Configure hook invoked once while the host is being built.
    fn configure(&self, builder: &mut HostBuilder);
}

/// Registration record announcing a generated executor to the host.
///
/// Generated code submits one of these into the `inventory` registry; the host
/// discovers it via [`configure_registered`] instead of naming the executor type.
pub struct ExecutorRegistration {
    type_name: &'static str,
    run: fn(&mut HostBuilder),
}

impl ExecutorRegistration {
    pub const fn new(type_name: &'static str, run: fn(&mut HostBuilder)) -> Self {
        Self { type_name, run }
    }

    /// Type name of the registered executor.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Invoke the registered executor against `builder`.
    pub fn run(&self, builder: &mut HostBuilder) {
        (self.run)(builder)
    }
}

inventory::collect!(ExecutorRegistration);

/// Run every registered executor against `builder`.
pub fn configure_registered(builder: &mut HostBuilder) {
    for registration in inventory::iter::<ExecutorRegistration> {
        registration.run(builder);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::CONFIGURE_FAILURE_PREFIX;
    use crate::panics::panic_message;

    #[derive(Default)]
    struct RecordingStartup;

    impl ExtensionStartup for RecordingStartup {
        fn configure(&self, builder: &mut HostBuilder) {
            builder.register_service("recording");
        }
    }

    #[derive(Default)]
    struct ExplodingStartup;

    impl ExtensionStartup for ExplodingStartup {
        fn configure(&self, _builder: &mut HostBuilder) {
            panic!("exploding startup refused to configure");
        }
    }

    #[test]
    fn builder_preserves_registration_order() {
        let mut builder = HostBuilder::new();
        builder.register_service("a");
        builder.register_service("b");
        builder.register_middleware("m");
        assert_eq!(builder.services(), ["a", "b"]);
        assert_eq!(builder.middleware(), ["m"]);
    }

    // The same isolation pattern the generated executor renders: construct,
    // configure inside catch_unwind, report, continue.
    #[test]
    fn panicking_startup_does_not_block_later_startups() {
        let mut builder = HostBuilder::new();
        let mut failures = Vec::new();

        let blocks: [(&str, fn(&mut HostBuilder)); 2] = [
            ("test::ExplodingStartup", |b| {
                let startup = <ExplodingStartup as Default>::default();
                ExtensionStartup::configure(&startup, b);
            }),
            ("test::RecordingStartup", |b| {
                let startup = <RecordingStartup as Default>::default();
                ExtensionStartup::configure(&startup, b);
            }),
        ];

        for (type_path, block) in blocks {
            if let Err(panic) =
                std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| block(&mut builder)))
            {
                failures.push(format!(
                    "{CONFIGURE_FAILURE_PREFIX} {type_path} instance: {}",
                    panic_message(&panic)
                ));
            }
        }

        assert_eq!(builder.services(), ["recording"]);
        assert_eq!(
            failures,
            ["error calling configure on test::ExplodingStartup instance: \
             exploding startup refused to configure"]
        );
    }

    fn run_test_executor(builder: &mut HostBuilder) {
        builder.register_service("from-test-executor");
    }

    inventory::submit! {
        ExecutorRegistration::new("TestExecutor", run_test_executor)
    }

    #[test]
    fn registered_executors_are_discoverable() {
        let mut builder = HostBuilder::new();
        configure_registered(&mut builder);
        assert!(builder.services().iter().any(|s| s == "from-test-executor"));

        let names: Vec<_> = inventory::iter::<ExecutorRegistration>
            .into_iter()
            .map(ExecutorRegistration::type_name)
            .collect();
        assert!(names.contains(&"TestExecutor"));
    }
}
