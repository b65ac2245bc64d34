//! Replay guard over the used-request record.
//!
//! Each accepted submission consumes its signing digest exactly once. The
//! guard tracks consumption in the storage service's `used_requests`
//! namespace: a digest is either unseen or consumed, and consumed is
//! terminal. There is no expiry and no public removal path; the only way a
//! consumed digest is ever cleared is the orchestrator rolling back after a
//! failed execution, before the submission returned.

use relay_storage::{StorageError, StorageService};
use relay_types::{current_timestamp, StorageKey, B256, U256};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Marker stored per consumed digest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumedMarker {
	/// Unix timestamp at which the digest was consumed.
	pub consumed_at: u64,
}

/// Guard enforcing single use of signing digests.
pub struct ReplayGuard {
	/// Persistent used-request record.
	storage: Arc<StorageService>,
	/// Serializes the check-execute-mark window across submissions.
	submission_lock: Mutex<()>,
}

impl ReplayGuard {
	/// Creates a replay guard over the given storage service.
	pub fn new(storage: Arc<StorageService>) -> Self {
		Self {
			storage,
			submission_lock: Mutex::new(()),
		}
	}

	/// Acquires the submission lock.
	///
	/// The orchestrator holds this guard from the freshness check through
	/// mark_consumed, so two racing submissions of the same digest can never
	/// both pass the check.
	pub(crate) async fn lock(&self) -> MutexGuard<'_, ()> {
		self.submission_lock.lock().await
	}

	/// Returns true if the deadline has not yet passed.
	///
	/// A request submitted exactly at its deadline second is still valid.
	pub fn check_deadline(deadline: U256, now: u64) -> bool {
		U256::from(now) <= deadline
	}

	/// Returns true if the digest has never been consumed.
	pub async fn check_fresh(&self, digest: &B256) -> Result<bool, StorageError> {
		let exists = self
			.storage
			.exists(StorageKey::UsedRequests.as_str(), &digest.to_string())
			.await?;
		Ok(!exists)
	}

	/// Records the digest as consumed.
	pub async fn mark_consumed(&self, digest: &B256, now: u64) -> Result<(), StorageError> {
		let marker = ConsumedMarker { consumed_at: now };
		self.storage
			.store(StorageKey::UsedRequests.as_str(), &digest.to_string(), &marker)
			.await
	}

	/// Removes the digest from the used-request record.
	///
	/// Only called by the orchestrator when execution failed after the digest
	/// was marked, so the user's authorization survives the failure.
	pub(crate) async fn release(&self, digest: &B256) -> Result<(), StorageError> {
		self.storage
			.remove(StorageKey::UsedRequests.as_str(), &digest.to_string())
			.await
	}

	/// Records the digest as consumed right now.
	pub async fn consume(&self, digest: &B256) -> Result<(), StorageError> {
		self.mark_consumed(digest, current_timestamp()).await
	}
}
