//! Versioned deployment records for the verifying contract.
//!
//! The relay's domain descriptor needs the address of the verifying entity,
//! which changes when a deployment is upgraded. Upgrades are modeled as
//! explicit state plus an explicit migration: a deployment book keeps the
//! full record history per network, and migrating appends a new record with
//! a bumped version instead of mutating the old one.

use alloy_primitives::Address;
use relay_types::current_timestamp;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::ConfigError;

/// One deployment of the verifying contract on one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRecord {
	/// Monotonic version of this deployment, starting at 1.
	pub version: u32,
	/// Chain the contract is deployed on.
	pub chain_id: u64,
	/// The deployed contract address.
	pub address: Address,
	/// Unix timestamp of the deployment.
	pub deployed_at: u64,
}

/// Address book of deployments, keyed by network name.
///
/// History is append-only: migrating a network never removes the previous
/// record, so old domains stay auditable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeploymentBook {
	networks: HashMap<String, Vec<DeploymentRecord>>,
}

impl DeploymentBook {
	/// Creates an empty deployment book.
	pub fn new() -> Self {
		Self::default()
	}

	/// Loads a deployment book from a JSON file.
	pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let content = tokio::fs::read_to_string(path).await?;
		serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
	}

	/// Writes the deployment book to a JSON file.
	pub async fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
		let content =
			serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
		tokio::fs::write(path, content).await?;
		Ok(())
	}

	/// Records the first deployment for a network.
	///
	/// Fails if the network already has a deployment; upgrades go through
	/// [`DeploymentBook::migrate`].
	pub fn record(
		&mut self,
		network: impl Into<String>,
		chain_id: u64,
		address: Address,
	) -> Result<DeploymentRecord, ConfigError> {
		let network = network.into();
		if self.networks.contains_key(&network) {
			return Err(ConfigError::Validation(format!(
				"network '{}' already has a deployment; use migrate",
				network
			)));
		}
		let record = DeploymentRecord {
			version: 1,
			chain_id,
			address,
			deployed_at: current_timestamp(),
		};
		self.networks.entry(network).or_default().push(record.clone());
		Ok(record)
	}

	/// Returns the current (latest) deployment for a network, if any.
	pub fn current(&self, network: &str) -> Option<&DeploymentRecord> {
		self.networks.get(network).and_then(|records| records.last())
	}

	/// Migrates a network to a new implementation address.
	///
	/// Appends a new record with the version bumped by one and the same
	/// chain id; the previous record is kept in the history.
	pub fn migrate(
		&mut self,
		network: &str,
		new_address: Address,
	) -> Result<DeploymentRecord, ConfigError> {
		let records = self.networks.get_mut(network).ok_or_else(|| {
			ConfigError::Validation(format!("network '{}' has no deployment to migrate", network))
		})?;
		let previous = records
			.last()
			.cloned()
			.ok_or_else(|| ConfigError::Validation(format!("network '{}' is empty", network)))?;

		let record = DeploymentRecord {
			version: previous.version + 1,
			chain_id: previous.chain_id,
			address: new_address,
			deployed_at: current_timestamp(),
		};
		records.push(record.clone());
		Ok(record)
	}

	/// Returns the full record history for a network.
	pub fn history(&self, network: &str) -> &[DeploymentRecord] {
		self.networks
			.get(network)
			.map(|records| records.as_slice())
			.unwrap_or(&[])
	}
}
