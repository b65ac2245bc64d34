//! No-op executor implementation.
//!
//! Accepts every swap and only logs it. Used in development and in
//! environments where the execution leg is handled out of band; the
//! authorization pipeline in front of it is exercised for real.

use crate::{ExecutorError, ExecutorFactory, ExecutorRegistry, SwapExecutor};
use async_trait::async_trait;
use relay_types::{Address, ConfigSchema, ImplementationRegistry, Schema, ValidationError, U256};

/// Executor that accepts every swap without moving tokens.
pub struct NoopExecutor;

#[async_trait]
impl SwapExecutor for NoopExecutor {
	fn config_schema(&self) -> Box<dyn ConfigSchema> {
		Box::new(NoopExecutorSchema)
	}

	async fn execute(
		&self,
		token_in: &Address,
		token_out: &Address,
		amount_in: U256,
		user: &Address,
	) -> Result<(), ExecutorError> {
		tracing::info!(
			user = %user,
			token_in = %token_in,
			token_out = %token_out,
			amount_in = %amount_in,
			"Noop executor accepted swap"
		);
		Ok(())
	}
}

/// Configuration schema for NoopExecutor.
pub struct NoopExecutorSchema;

impl ConfigSchema for NoopExecutorSchema {
	fn validate(&self, config: &toml::Value) -> Result<(), ValidationError> {
		// Noop executor has no required configuration
		let schema = Schema::new(vec![], vec![]);
		schema.validate(config)
	}
}

/// Registry entry for the noop executor.
pub struct Registry;

impl ImplementationRegistry for Registry {
	const NAME: &'static str = "noop";
	type Factory = ExecutorFactory;

	fn factory() -> Self::Factory {
		create_executor
	}
}

impl ExecutorRegistry for Registry {}

/// Factory function to create a noop executor from configuration.
///
/// Configuration parameters: none required.
pub fn create_executor(_config: &toml::Value) -> Result<Box<dyn SwapExecutor>, ExecutorError> {
	Ok(Box::new(NoopExecutor))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_noop_accepts_any_swap() {
		let executor = NoopExecutor;
		let result = executor
			.execute(
				&Address::ZERO,
				&Address::ZERO,
				U256::from(1u64),
				&Address::ZERO,
			)
			.await;
		assert!(result.is_ok());
	}
}
