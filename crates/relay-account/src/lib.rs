//! Account and signature module for the gasless relay.
//!
//! This module covers both sides of the authorization cryptography: the
//! verification path the relay drives on every submission (signature
//! decoding and signer recovery, in [`verify`]), and a signing interface
//! with a local private-key implementation used by tests and tooling to
//! produce request signatures.

use async_trait::async_trait;
use relay_types::{Address, ConfigSchema, ImplementationRegistry, B256};
use thiserror::Error;

pub mod verify;

/// Re-export implementations
pub mod implementations {
	pub mod local;
}

pub use verify::{decode_signature, recover_signer, verify_request_signer, VerifyError};

/// Errors that can occur during account operations.
#[derive(Debug, Error)]
pub enum AccountError {
	/// Error that occurs when signing operations fail.
	#[error("Signing failed: {0}")]
	SigningFailed(String),
	/// Error that occurs when a cryptographic key is invalid or malformed.
	#[error("Invalid key: {0}")]
	InvalidKey(String),
	/// Error that occurs when interacting with the account implementation.
	#[error("Implementation error: {0}")]
	Implementation(String),
}

/// Trait defining the interface for account implementations.
///
/// An account holds a signing key and produces the 65-byte signatures the
/// relay verifies. The relay itself never holds an account; this seam exists
/// for tests and for tooling that prepares signed requests.
#[async_trait]
pub trait AccountInterface: Send + Sync {
	/// Returns the configuration schema for this account implementation.
	fn config_schema(&self) -> Box<dyn ConfigSchema>;

	/// Retrieves the address associated with this account.
	async fn address(&self) -> Result<Address, AccountError>;

	/// Signs a 32-byte digest and returns the 65-byte r||s||v blob.
	async fn sign_digest(&self, digest: &B256) -> Result<Vec<u8>, AccountError>;
}

/// Type alias for account factory functions.
pub type AccountFactory = fn(&toml::Value) -> Result<Box<dyn AccountInterface>, AccountError>;

/// Registry trait for account implementations.
pub trait AccountRegistry: ImplementationRegistry<Factory = AccountFactory> {}

/// Get all registered account implementations.
pub fn get_all_implementations() -> Vec<(&'static str, AccountFactory)> {
	use implementations::local;

	vec![(local::Registry::NAME, local::Registry::factory())]
}

/// Service that manages account operations.
///
/// This struct provides a high-level interface for signing, wrapping an
/// underlying account implementation.
pub struct AccountService {
	/// The underlying account implementation.
	implementation: Box<dyn AccountInterface>,
}

impl AccountService {
	/// Creates a new AccountService with the specified implementation.
	pub fn new(implementation: Box<dyn AccountInterface>) -> Self {
		Self { implementation }
	}

	/// Retrieves the address associated with the managed account.
	pub async fn get_address(&self) -> Result<Address, AccountError> {
		self.implementation.address().await
	}

	/// Signs a 32-byte digest with the managed account.
	pub async fn sign_digest(&self, digest: &B256) -> Result<Vec<u8>, AccountError> {
		self.implementation.sign_digest(digest).await
	}
}
