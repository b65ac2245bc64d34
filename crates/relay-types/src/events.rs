//! Event types for inter-component communication.
//!
//! Events flow through an event bus so that observers (the service layer,
//! tests, monitoring) can react to submission outcomes without being wired
//! into the relay's control flow.

use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};

/// Main event type encompassing all relay events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RelayEvent {
	/// Events produced while processing a submission.
	Submission(SubmissionEvent),
}

/// Events related to meta-transaction submissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SubmissionEvent {
	/// A swap was executed on behalf of a user.
	SwapExecuted {
		user: Address,
		token_in: Address,
		token_out: Address,
		amount_in: U256,
	},
	/// A submission was rejected before or during execution.
	SubmissionRejected { digest: B256, reason: String },
}
