//! Swap request and execution receipt types.
//!
//! A `SwapRequest` is the typed payload a user signs off-line. It is a value
//! object: constructed by the user, immutable once signed, and never stored
//! by the relay beyond the lifetime of one submission.

use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};

use crate::domain::Eip712Domain;
use crate::utils::eip712::{compute_signing_digest, swap_request_struct_hash};

/// A signed-swap authorization as the user constructs it off-line.
///
/// Field names, types and order match the EIP-712 schema exactly; they are
/// part of the wire contract shared with off-line signers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
	/// The user who signed the request and on whose behalf the swap runs.
	pub user: Address,
	/// The token being sold.
	pub token_in: Address,
	/// The token being bought.
	pub token_out: Address,
	/// The input amount, in the token's smallest unit.
	pub amount_in: U256,
	/// Unix timestamp after which the request is permanently unexecutable.
	pub deadline: U256,
}

impl SwapRequest {
	/// Computes the EIP-712 struct hash of this request.
	pub fn struct_hash(&self) -> B256 {
		swap_request_struct_hash(self)
	}

	/// Computes the full signing digest of this request under the given domain.
	///
	/// The digest is the unique identity of "this exact authorization": the
	/// replay guard keys on it and the signature is verified against it.
	pub fn signing_digest(&self, domain: &Eip712Domain) -> B256 {
		compute_signing_digest(&domain.separator(), &self.struct_hash())
	}
}

/// Record of a successfully executed submission, returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionReceipt {
	/// The request digest that was consumed by this execution.
	pub digest: B256,
	/// The user the swap was executed for.
	pub user: Address,
	/// The token that was sold.
	pub token_in: Address,
	/// The token that was bought.
	pub token_out: Address,
	/// The input amount.
	pub amount_in: U256,
	/// Unix timestamp at which the relay executed the swap.
	pub executed_at: u64,
}
