//! Core orchestration module for the gasless relay.
//!
//! This module ties the authorization pipeline together: deadline check,
//! digest computation, signer recovery, replay guard and finally delegation
//! to the configured swap executor. The pipeline is fail-closed: a
//! submission either passes every check and executes, or is rejected with a
//! precise reason and leaves no trace in the used-request record.

pub mod builder;
pub mod event_bus;
pub mod replay;

use relay_account::verify::verify_request_signer;
use relay_executor::ExecutorService;
use relay_storage::{StorageError, StorageService};
use relay_types::{
	current_timestamp, truncate_id, Eip712Domain, ExecutionReceipt, RelayEvent, SubmissionEvent,
	SwapRequest, B256,
};
use std::sync::Arc;
use thiserror::Error;

pub use builder::{RelayBuilder, RelayFactories};
pub use event_bus::EventBus;
pub use replay::ReplayGuard;

/// Errors produced while assembling a relay from configuration.
#[derive(Debug, Error)]
pub enum RelayError {
	/// Error that occurs when the configuration is invalid.
	#[error("Configuration error: {0}")]
	Config(String),
	/// Error that occurs when a component service fails to initialize.
	#[error("Service error: {0}")]
	Service(String),
}

/// Errors produced while processing a submission.
///
/// The messages are part of the API contract: HTTP clients receive them
/// verbatim as rejection reasons.
#[derive(Debug, Error)]
pub enum SubmitError {
	/// The request's deadline is in the past.
	#[error("Deadline expired")]
	ExpiredDeadline,
	/// The signature does not recover to the request's user.
	#[error("Invalid signature")]
	InvalidSignature,
	/// The request digest was already consumed by an earlier submission.
	#[error("Request already used")]
	ReplayedRequest,
	/// The executor failed or rejected the swap.
	#[error("Execution failed: {0}")]
	ExecutionFailed(String),
	/// The used-request record could not be read or written.
	#[error("Storage error: {0}")]
	Storage(#[from] StorageError),
}

/// The relay orchestrator.
///
/// Holds the immutable domain descriptor, the replay guard and the executor,
/// and drives the submission pipeline. One instance serves all submissions
/// concurrently; the guard's lock serializes the critical window.
pub struct Relay {
	/// Domain descriptor all signatures are verified under.
	domain: Eip712Domain,
	/// Guard over the used-request record.
	guard: ReplayGuard,
	/// The swap execution service.
	executor: Arc<ExecutorService>,
	/// Event bus for submission outcomes.
	event_bus: EventBus,
}

impl Relay {
	/// Creates a relay from its assembled components.
	pub fn new(
		domain: Eip712Domain,
		storage: Arc<StorageService>,
		executor: Arc<ExecutorService>,
		event_bus: EventBus,
	) -> Self {
		Self {
			domain,
			guard: ReplayGuard::new(storage),
			executor,
			event_bus,
		}
	}

	/// Returns the domain descriptor this relay verifies under.
	pub fn domain(&self) -> &Eip712Domain {
		&self.domain
	}

	/// Returns the relay's event bus.
	pub fn event_bus(&self) -> &EventBus {
		&self.event_bus
	}

	/// Processes one signed swap submission.
	///
	/// Checks run in a fixed order: deadline, signature, replay. The lock is
	/// held from the freshness check through execution, so racing duplicates
	/// of the same request resolve to exactly one execution. If the executor
	/// fails, the digest is released again and the authorization remains
	/// spendable.
	pub async fn submit(
		&self,
		request: &SwapRequest,
		signature: &[u8],
	) -> Result<ExecutionReceipt, SubmitError> {
		let digest = request.signing_digest(&self.domain);
		let now = current_timestamp();

		if !ReplayGuard::check_deadline(request.deadline, now) {
			return Err(self.reject(digest, SubmitError::ExpiredDeadline));
		}

		if let Err(e) = verify_request_signer(&digest, signature, &request.user) {
			tracing::debug!(digest = %truncate_id(&digest.to_string()), error = %e, "Signature verification failed");
			return Err(self.reject(digest, SubmitError::InvalidSignature));
		}

		// Critical window: freshness check, execution and consumption must
		// be atomic with respect to other submissions.
		let _permit = self.guard.lock().await;

		if !self.guard.check_fresh(&digest).await? {
			return Err(self.reject(digest, SubmitError::ReplayedRequest));
		}
		self.guard.mark_consumed(&digest, now).await?;

		if let Err(e) = self
			.executor
			.execute(
				&request.token_in,
				&request.token_out,
				request.amount_in,
				&request.user,
			)
			.await
		{
			// The swap did not happen, so the authorization must survive.
			self.guard.release(&digest).await?;
			return Err(self.reject(digest, SubmitError::ExecutionFailed(e.to_string())));
		}

		tracing::info!(
			digest = %truncate_id(&digest.to_string()),
			user = %request.user,
			amount_in = %request.amount_in,
			"Swap executed"
		);
		self.event_bus
			.publish(RelayEvent::Submission(SubmissionEvent::SwapExecuted {
				user: request.user,
				token_in: request.token_in,
				token_out: request.token_out,
				amount_in: request.amount_in,
			}));

		Ok(ExecutionReceipt {
			digest,
			user: request.user,
			token_in: request.token_in,
			token_out: request.token_out,
			amount_in: request.amount_in,
			executed_at: now,
		})
	}

	fn reject(&self, digest: B256, error: SubmitError) -> SubmitError {
		tracing::warn!(digest = %truncate_id(&digest.to_string()), reason = %error, "Submission rejected");
		self.event_bus.publish(RelayEvent::Submission(
			SubmissionEvent::SubmissionRejected {
				digest,
				reason: error.to_string(),
			},
		));
		error
	}
}
