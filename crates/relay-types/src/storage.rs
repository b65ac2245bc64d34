//! Storage-related types for the relay.

use std::str::FromStr;

/// Storage namespaces for the data the relay persists.
///
/// This enum provides type safety for storage operations by replacing
/// string literals with strongly typed variants. The relay persists exactly
/// one collection: the set of consumed request digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
	/// Namespace for the used-request record (consumed digests).
	UsedRequests,
}

impl StorageKey {
	/// Returns the string representation of the storage key.
	pub fn as_str(&self) -> &'static str {
		match self {
			StorageKey::UsedRequests => "used_requests",
		}
	}

	/// Returns an iterator over all StorageKey variants.
	pub fn all() -> impl Iterator<Item = Self> {
		[Self::UsedRequests].into_iter()
	}
}

impl FromStr for StorageKey {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"used_requests" => Ok(Self::UsedRequests),
			_ => Err(()),
		}
	}
}

impl From<StorageKey> for &'static str {
	fn from(key: StorageKey) -> Self {
		key.as_str()
	}
}
