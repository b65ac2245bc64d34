//! Swap executor module for the gasless relay.
//!
//! The executor is the external collaborator that actually moves tokens.
//! The relay is polymorphic over it: anything that implements the capability
//! interface below can be plugged in, and the relay never implements
//! token-transfer semantics itself. A failure here aborts the whole
//! submission and must not consume the user's authorization.

use async_trait::async_trait;
use relay_types::{Address, ConfigSchema, ImplementationRegistry, U256};
use thiserror::Error;

/// Re-export implementations
pub mod implementations {
	pub mod noop;
}

/// Errors that can occur during swap execution.
#[derive(Debug, Error)]
pub enum ExecutorError {
	/// The executor rejected or failed the delegated swap.
	#[error("Execution failed: {0}")]
	ExecutionFailed(String),
	/// Error that occurs when the executor configuration is invalid.
	#[error("Configuration error: {0}")]
	Configuration(String),
}

/// Capability interface for executing swaps.
///
/// Implementations receive the already-authorized parameters; all
/// authorization (signature, deadline, replay) has happened before this
/// point and none of it is the executor's concern.
#[async_trait]
pub trait SwapExecutor: Send + Sync {
	/// Returns the configuration schema for this executor implementation.
	fn config_schema(&self) -> Box<dyn ConfigSchema>;

	/// Executes a swap of `amount_in` of `token_in` into `token_out` on
	/// behalf of `user`.
	async fn execute(
		&self,
		token_in: &Address,
		token_out: &Address,
		amount_in: U256,
		user: &Address,
	) -> Result<(), ExecutorError>;
}

/// Type alias for executor factory functions.
pub type ExecutorFactory = fn(&toml::Value) -> Result<Box<dyn SwapExecutor>, ExecutorError>;

/// Registry trait for executor implementations.
pub trait ExecutorRegistry: ImplementationRegistry<Factory = ExecutorFactory> {}

/// Get all registered executor implementations.
pub fn get_all_implementations() -> Vec<(&'static str, ExecutorFactory)> {
	use implementations::noop;

	vec![(noop::Registry::NAME, noop::Registry::factory())]
}

/// Service that manages swap execution.
///
/// Wraps the configured executor implementation behind a stable interface
/// for the relay orchestrator.
pub struct ExecutorService {
	/// The underlying executor implementation.
	implementation: Box<dyn SwapExecutor>,
}

impl ExecutorService {
	/// Creates a new ExecutorService with the specified implementation.
	pub fn new(implementation: Box<dyn SwapExecutor>) -> Self {
		Self { implementation }
	}

	/// Delegates a swap to the underlying executor.
	pub async fn execute(
		&self,
		token_in: &Address,
		token_out: &Address,
		amount_in: U256,
		user: &Address,
	) -> Result<(), ExecutorError> {
		self.implementation
			.execute(token_in, token_out, amount_in, user)
			.await
	}
}
