//! Configuration module for the gasless relay.
//!
//! This module provides structures and utilities for managing relay
//! configuration. It supports loading configuration from TOML files and
//! validates that all required configuration values are properly set before
//! any component is constructed.

pub mod deployment;

use alloy_primitives::Address;
use relay_types::Eip712Domain;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error that occurs during file I/O operations.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	/// Error that occurs when parsing TOML configuration.
	#[error("Configuration error: {0}")]
	Parse(String),
	/// Error that occurs when configuration validation fails.
	#[error("Validation error: {0}")]
	Validation(String),
}

impl From<toml::de::Error> for ConfigError {
	fn from(err: toml::de::Error) -> Self {
		// Extract just the message without the input dump
		let message = err.message().to_string();
		ConfigError::Parse(message)
	}
}

/// Main configuration structure for the relay.
///
/// Contains all configuration sections required for the relay to operate:
/// relay identity, the EIP-712 domain it verifies under, the storage backend
/// for the used-request record, the swap executor, and the HTTP API server.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
	/// Configuration specific to this relay instance.
	pub relay: RelayConfig,
	/// The EIP-712 domain the relay verifies signatures under.
	pub domain: DomainConfig,
	/// Configuration for the storage backend.
	pub storage: StorageConfig,
	/// Configuration for the swap executor.
	pub executor: ExecutorConfig,
	/// Configuration for the HTTP API server.
	pub api: Option<ApiConfig>,
}

/// Configuration specific to the relay instance.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RelayConfig {
	/// Unique identifier for this relay instance.
	pub id: String,
}

/// EIP-712 domain configuration.
///
/// These four values fix the identity of the verifying party. Off-line
/// signers must use the exact same values or every signature check fails.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DomainConfig {
	/// Human-readable name of the verifying application.
	pub name: String,
	/// Version string of the verifying application.
	pub version: String,
	/// Chain ID the domain is bound to.
	pub chain_id: u64,
	/// Verifying contract address as a hex string.
	pub verifying_contract: String,
}

impl DomainConfig {
	/// Builds the immutable domain descriptor from this configuration.
	pub fn descriptor(&self) -> Result<Eip712Domain, ConfigError> {
		let address = Address::from_str(&self.verifying_contract).map_err(|e| {
			ConfigError::Validation(format!(
				"domain.verifying_contract is not a valid address: {}",
				e
			))
		})?;
		Ok(Eip712Domain::new(
			self.name.clone(),
			self.version.clone(),
			self.chain_id,
			address,
		))
	}
}

/// Configuration for the storage backend.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
	/// Which implementation to use as primary.
	pub primary: String,
	/// Map of storage implementation names to their configurations.
	pub implementations: HashMap<String, toml::Value>,
}

/// Configuration for the swap executor.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExecutorConfig {
	/// Which executor implementation to use.
	pub implementation: String,
	/// Map of executor implementation names to their configurations.
	#[serde(default)]
	pub implementations: HashMap<String, toml::Value>,
}

/// Configuration for the HTTP API server.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
	/// Whether the API server is enabled.
	pub enabled: bool,
	/// Host address to bind to.
	pub host: String,
	/// Port to listen on.
	pub port: u16,
}

impl Config {
	/// Loads configuration from a TOML file.
	pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let content = tokio::fs::read_to_string(path).await?;
		content.parse()
	}

	/// Validates the configuration beyond what deserialization enforces.
	fn validate(&self) -> Result<(), ConfigError> {
		if self.relay.id.is_empty() {
			return Err(ConfigError::Validation("relay.id must not be empty".into()));
		}
		if self.domain.name.is_empty() {
			return Err(ConfigError::Validation(
				"domain.name must not be empty".into(),
			));
		}
		if self.domain.version.is_empty() {
			return Err(ConfigError::Validation(
				"domain.version must not be empty".into(),
			));
		}
		if self.domain.chain_id == 0 {
			return Err(ConfigError::Validation(
				"domain.chain_id must be non-zero".into(),
			));
		}
		// Fails early if the address is malformed.
		self.domain.descriptor()?;

		if !self
			.storage
			.implementations
			.contains_key(&self.storage.primary)
		{
			return Err(ConfigError::Validation(format!(
				"storage.primary '{}' has no matching entry in storage.implementations",
				self.storage.primary
			)));
		}
		Ok(())
	}
}

impl FromStr for Config {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let config: Config = toml::from_str(s)?;
		config.validate()?;
		Ok(config)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	const VALID_CONFIG: &str = r#"
		[relay]
		id = "gasless-relay-test"

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

		[api]
		enabled = true
		host = "127.0.0.1"
		port = 8080
	"#;

	#[test]
	fn test_parse_valid_config() {
		let config: Config = VALID_CONFIG.parse().unwrap();
		assert_eq!(config.relay.id, "gasless-relay-test");
		assert_eq!(config.domain.chain_id, 31337);
		assert_eq!(config.storage.primary, "memory");
		assert_eq!(config.executor.implementation, "noop");
		assert!(config.api.as_ref().unwrap().enabled);

		let domain = config.domain.descriptor().unwrap();
		assert_eq!(domain.name(), "GaslessSwap");
		assert_eq!(domain.chain_id(), 31337);
	}

	#[test]
	fn test_reject_bad_verifying_contract() {
		let bad = VALID_CONFIG.replace(
			"0x5FbDB2315678afecb367f032d93F642f64180aa3",
			"not-an-address",
		);
		let result = bad.parse::<Config>();
		assert!(matches!(result, Err(ConfigError::Validation(_))));
	}

	#[test]
	fn test_reject_unknown_primary_storage() {
		let bad = VALID_CONFIG.replace("primary = \"memory\"", "primary = \"redis\"");
		let result = bad.parse::<Config>();
		assert!(matches!(result, Err(ConfigError::Validation(_))));
	}

	#[test]
	fn test_reject_zero_chain_id() {
		let bad = VALID_CONFIG.replace("chain_id = 31337", "chain_id = 0");
		let result = bad.parse::<Config>();
		assert!(matches!(result, Err(ConfigError::Validation(_))));
	}

	#[tokio::test]
	async fn test_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(VALID_CONFIG.as_bytes()).unwrap();

		let config = Config::from_file(file.path()).await.unwrap();
		assert_eq!(config.relay.id, "gasless-relay-test");
	}
}
