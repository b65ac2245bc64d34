//! API types for the relay HTTP endpoints.
//!
//! This module defines the request and response shapes for the submission
//! API. The signature travels as a hex string; the request struct itself is
//! the same camelCase schema the user signed.

use serde::{Deserialize, Serialize};

use crate::domain::Eip712Domain;
use crate::request::{ExecutionReceipt, SwapRequest};

/// Body of `POST /api/submit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRequest {
	/// The typed request the user signed.
	pub request: SwapRequest,
	/// The 65-byte signature as a hex string, with or without 0x prefix.
	pub signature: String,
}

/// Successful response of `POST /api/submit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
	/// The execution receipt for the consumed authorization.
	pub receipt: ExecutionReceipt,
}

/// Response of `GET /api/domain`: everything an off-line signer needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainResponse {
	pub name: String,
	pub version: String,
	pub chain_id: u64,
	pub verifying_contract: String,
	pub separator: String,
}

impl From<&Eip712Domain> for DomainResponse {
	fn from(domain: &Eip712Domain) -> Self {
		Self {
			name: domain.name().to_string(),
			version: domain.version().to_string(),
			chain_id: domain.chain_id(),
			verifying_contract: domain.verifying_contract().to_string(),
			separator: domain.separator().to_string(),
		}
	}
}
