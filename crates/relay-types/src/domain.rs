//! EIP-712 domain descriptor for the relay.
//!
//! The domain is the immutable identity of the verifying party. Its separator
//! binds every signature to one (name, version, chain, contract) context, so
//! a signature produced for one deployment can never be replayed on another.

use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};

use crate::utils::eip712::compute_domain_separator;

/// Immutable EIP-712 domain descriptor.
///
/// Fields are fixed at construction and the separator is computed once.
/// Any off-line signer that knows the same four values recomputes the
/// identical separator; any mismatch makes verification fail closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eip712Domain {
	name: String,
	version: String,
	chain_id: u64,
	verifying_contract: Address,
	separator: B256,
}

impl Eip712Domain {
	/// Creates a new domain descriptor, precomputing its separator.
	pub fn new(
		name: impl Into<String>,
		version: impl Into<String>,
		chain_id: u64,
		verifying_contract: Address,
	) -> Self {
		let name = name.into();
		let version = version.into();
		let separator = compute_domain_separator(&name, &version, chain_id, &verifying_contract);
		Self {
			name,
			version,
			chain_id,
			verifying_contract,
			separator,
		}
	}

	/// The human-readable name of the verifying application.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The version string of the verifying application.
	pub fn version(&self) -> &str {
		&self.version
	}

	/// The chain this domain is bound to.
	pub fn chain_id(&self) -> u64 {
		self.chain_id
	}

	/// The address of the verifying entity.
	pub fn verifying_contract(&self) -> Address {
		self.verifying_contract
	}

	/// The precomputed 32-byte domain separator.
	pub fn separator(&self) -> B256 {
		self.separator
	}
}
