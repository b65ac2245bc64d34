//! Builder for assembling a relay from configuration.
//!
//! The builder resolves the configured storage and executor implementations
//! against factory maps supplied by the caller, validates each
//! implementation's configuration against its schema, and wires the relay
//! together. Keeping the factories caller-supplied keeps this crate free of
//! direct dependencies on concrete implementations.

use crate::{EventBus, Relay, RelayError};
use relay_config::Config;
use relay_executor::{ExecutorFactory, ExecutorService};
use relay_storage::{StorageFactory, StorageService};
use std::collections::HashMap;
use std::sync::Arc;

/// Default event bus capacity.
const EVENT_BUS_CAPACITY: usize = 1000;

/// Factory maps for the pluggable components.
pub struct RelayFactories {
	/// Storage implementation factories keyed by name.
	pub storage: HashMap<String, StorageFactory>,
	/// Executor implementation factories keyed by name.
	pub executors: HashMap<String, ExecutorFactory>,
}

/// Builder that assembles a [`Relay`] from a validated configuration.
pub struct RelayBuilder {
	config: Config,
}

impl RelayBuilder {
	/// Creates a builder for the given configuration.
	pub fn new(config: Config) -> Self {
		Self { config }
	}

	/// Builds the relay, constructing each configured component.
	pub fn build(self, factories: RelayFactories) -> Result<Relay, RelayError> {
		let domain = self
			.config
			.domain
			.descriptor()
			.map_err(|e| RelayError::Config(e.to_string()))?;

		let storage_name = &self.config.storage.primary;
		let storage_config = self
			.config
			.storage
			.implementations
			.get(storage_name)
			.ok_or_else(|| {
				RelayError::Config(format!("No configuration for storage '{}'", storage_name))
			})?;
		let storage_factory = factories.storage.get(storage_name).ok_or_else(|| {
			RelayError::Config(format!("Unknown storage implementation '{}'", storage_name))
		})?;
		let backend = storage_factory(storage_config)
			.map_err(|e| RelayError::Service(format!("Failed to create storage: {}", e)))?;
		backend
			.config_schema()
			.validate(storage_config)
			.map_err(|e| {
				RelayError::Config(format!("Invalid storage configuration: {}", e))
			})?;
		let storage = Arc::new(StorageService::new(backend));

		let executor_name = &self.config.executor.implementation;
		let executor_config = self
			.config
			.executor
			.implementations
			.get(executor_name)
			.cloned()
			.unwrap_or(toml::Value::Table(toml::Table::new()));
		let executor_factory = factories.executors.get(executor_name).ok_or_else(|| {
			RelayError::Config(format!(
				"Unknown executor implementation '{}'",
				executor_name
			))
		})?;
		let implementation = executor_factory(&executor_config)
			.map_err(|e| RelayError::Service(format!("Failed to create executor: {}", e)))?;
		implementation
			.config_schema()
			.validate(&executor_config)
			.map_err(|e| {
				RelayError::Config(format!("Invalid executor configuration: {}", e))
			})?;
		let executor = Arc::new(ExecutorService::new(implementation));

		tracing::info!(
			relay_id = %self.config.relay.id,
			domain = %domain.name(),
			chain_id = domain.chain_id(),
			storage = %storage_name,
			executor = %executor_name,
			"Relay assembled"
		);

		Ok(Relay::new(
			domain,
			storage,
			executor,
			EventBus::new(EVENT_BUS_CAPACITY),
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use relay_executor::get_all_implementations as executor_implementations;
	use relay_storage::get_all_implementations as storage_implementations;

	fn all_factories() -> RelayFactories {
		RelayFactories {
			storage: storage_implementations()
				.into_iter()
				.map(|(name, factory)| (name.to_string(), factory))
				.collect(),
			executors: executor_implementations()
				.into_iter()
				.map(|(name, factory)| (name.to_string(), factory))
				.collect(),
		}
	}

	const CONFIG: &str = r#"
		[relay]
		id = "builder-test"

		[domain]
		name = "GaslessSwap"
		version = "1"
		chain_id = 31337
		verifying_contract = "0x5FbDB2315678afecb367f032d93F642f64180aa3"

		[storage]
		primary = "memory"
		[storage.implementations.memory]

		[executor]
		implementation = "noop"
	"#;

	#[tokio::test]
	async fn test_build_from_valid_config() {
		let config: Config = CONFIG.parse().unwrap();
		let relay = RelayBuilder::new(config).build(all_factories()).unwrap();
		assert_eq!(relay.domain().name(), "GaslessSwap");
		assert_eq!(relay.domain().chain_id(), 31337);
	}

	#[tokio::test]
	async fn test_unknown_executor_fails() {
		let bad = CONFIG.replace("implementation = \"noop\"", "implementation = \"uniswap\"");
		let config: Config = bad.parse().unwrap();
		let result = RelayBuilder::new(config).build(all_factories());
		assert!(matches!(result, Err(RelayError::Config(_))));
	}

	#[tokio::test]
	async fn test_missing_storage_factory_fails() {
		let config: Config = CONFIG.parse().unwrap();
		let factories = RelayFactories {
			storage: HashMap::new(),
			executors: HashMap::new(),
		};
		let result = RelayBuilder::new(config).build(factories);
		assert!(matches!(result, Err(RelayError::Config(_))));
	}
}
