//! Registry trait for self-registering implementations.
//!
//! This module provides the base trait that all pluggable implementations
//! must implement to register themselves with their configuration name and
//! factory function.

/// Base trait for implementation registries.
///
/// Each implementation module (storage backends, executors, accounts) must
/// provide a Registry struct that implements this trait, so that every
/// implementation declares its configuration name and factory function.
pub trait ImplementationRegistry {
	/// The name used in configuration files to reference this implementation.
	///
	/// This should match the key used in the TOML configuration, for example:
	/// - "memory" for storage.implementations.memory
	/// - "noop" for executor.implementation = "noop"
	/// - "local" for the local signing account
	const NAME: &'static str;

	/// The factory function type this implementation provides.
	///
	/// Each module defines its own factory type, for example StorageFactory
	/// for storage backends or ExecutorFactory for swap executors.
	type Factory;

	/// Get the factory function for this implementation.
	fn factory() -> Self::Factory;
}
