//! Local private-key account implementation.
//!
//! Signs digests with an in-memory secp256k1 key. This is the account used
//! by tests and by tooling that prepares signed swap requests; production
//! users sign in their own wallets and the relay only ever verifies.

use crate::{AccountError, AccountFactory, AccountInterface, AccountRegistry};
use alloy_primitives::{Address, B256};
use alloy_signer::SignerSync;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use relay_types::{
	without_0x_prefix, ConfigSchema, Field, FieldType, ImplementationRegistry, Schema,
	SecretString, ValidationError,
};

use crate::verify::encode_signature;

/// Account backed by a local private key.
pub struct LocalAccount {
	/// The signing key.
	signer: PrivateKeySigner,
}

impl LocalAccount {
	/// Creates a local account from a hex-encoded private key.
	pub fn new(private_key: &SecretString) -> Result<Self, AccountError> {
		let signer = without_0x_prefix(private_key.expose_secret())
			.parse::<PrivateKeySigner>()
			.map_err(|e| AccountError::InvalidKey(e.to_string()))?;
		Ok(Self { signer })
	}

	/// Creates a local account with a freshly generated random key.
	pub fn random() -> Self {
		Self {
			signer: PrivateKeySigner::random(),
		}
	}
}

#[async_trait]
impl AccountInterface for LocalAccount {
	fn config_schema(&self) -> Box<dyn ConfigSchema> {
		Box::new(LocalAccountSchema)
	}

	async fn address(&self) -> Result<Address, AccountError> {
		Ok(self.signer.address())
	}

	async fn sign_digest(&self, digest: &B256) -> Result<Vec<u8>, AccountError> {
		let signature = self
			.signer
			.sign_hash_sync(digest)
			.map_err(|e| AccountError::SigningFailed(e.to_string()))?;
		Ok(encode_signature(&signature))
	}
}

/// Configuration schema for LocalAccount.
pub struct LocalAccountSchema;

impl ConfigSchema for LocalAccountSchema {
	fn validate(&self, config: &toml::Value) -> Result<(), ValidationError> {
		let schema = Schema::new(
			vec![Field::new("private_key", FieldType::String).with_validator(
				|value| {
					let key = value.as_str().unwrap_or_default();
					let stripped = key.strip_prefix("0x").unwrap_or(key);
					if stripped.len() == 64 && stripped.chars().all(|c| c.is_ascii_hexdigit()) {
						Ok(())
					} else {
						Err("must be a 32-byte hex string".to_string())
					}
				},
			)],
			vec![],
		);
		schema.validate(config)
	}
}

/// Registry entry for the local account implementation.
pub struct Registry;

impl ImplementationRegistry for Registry {
	const NAME: &'static str = "local";
	type Factory = AccountFactory;

	fn factory() -> Self::Factory {
		create_account
	}
}

impl AccountRegistry for Registry {}

/// Factory function to create a local account from configuration.
///
/// Configuration parameters:
/// - `private_key`: hex-encoded 32-byte private key, with or without 0x prefix
pub fn create_account(config: &toml::Value) -> Result<Box<dyn AccountInterface>, AccountError> {
	let private_key = config
		.get("private_key")
		.and_then(|v| v.as_str())
		.map(SecretString::from)
		.ok_or_else(|| AccountError::Implementation("private_key is required".to_string()))?;

	Ok(Box::new(LocalAccount::new(&private_key)?))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::verify::recover_signer;
	use crate::AccountService;
	use alloy_primitives::keccak256;

	// Well-known hardhat/anvil test key 0.
	const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
	const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

	#[tokio::test]
	async fn test_known_key_yields_known_address() {
		let account = LocalAccount::new(&SecretString::from(TEST_KEY)).unwrap();
		let address = account.address().await.unwrap();
		assert_eq!(address.to_string(), TEST_ADDRESS);
	}

	#[tokio::test]
	async fn test_signatures_recover_to_account_address() {
		let service = AccountService::new(Box::new(LocalAccount::random()));
		let digest = keccak256(b"local-account-signing");

		let blob = service.sign_digest(&digest).await.unwrap();
		assert_eq!(blob.len(), crate::verify::SIGNATURE_LENGTH);

		let recovered = recover_signer(&digest, &blob).unwrap();
		assert_eq!(recovered, service.get_address().await.unwrap());
	}

	#[test]
	fn test_invalid_key_is_rejected() {
		let result = LocalAccount::new(&SecretString::from("not-a-key"));
		assert!(matches!(result, Err(AccountError::InvalidKey(_))));
	}

	#[test]
	fn test_factory_requires_private_key() {
		let config: toml::Value = "other = 1".parse().unwrap();
		assert!(create_account(&config).is_err());

		let config: toml::Value = format!("private_key = \"{}\"", TEST_KEY).parse().unwrap();
		assert!(create_account(&config).is_ok());
	}

	#[test]
	fn test_schema_validates_key_shape() {
		let schema = LocalAccountSchema;
		let good: toml::Value = format!("private_key = \"{}\"", TEST_KEY).parse().unwrap();
		assert!(schema.validate(&good).is_ok());

		let bad: toml::Value = "private_key = \"abc\"".parse().unwrap();
		assert!(schema.validate(&bad).is_err());
	}
}
