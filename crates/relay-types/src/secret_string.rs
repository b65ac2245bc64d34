//! Secure string type for handling sensitive data like private keys.
//!
//! `SecretString` wraps sensitive string data so that it is zeroed on drop
//! and never accidentally exposed in logs or debug output.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::Zeroizing;

/// A secure string type that zeros its memory on drop and prevents
/// accidental exposure in logs.
///
/// Use this for any sensitive string data such as the local signer's
/// private key.
#[derive(Clone)]
pub struct SecretString(Zeroizing<String>);

impl SecretString {
	/// Creates a new SecretString from a regular string.
	pub fn new(s: String) -> Self {
		Self(Zeroizing::new(s))
	}

	/// Exposes the secret string as a string slice.
	///
	/// This method exposes the actual secret. Use it only at the point of
	/// consumption and ensure the exposed value is not logged.
	pub fn expose_secret(&self) -> &str {
		&self.0
	}

	/// Returns the length of the secret string.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if the secret string is empty.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Debug for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "SecretString(***REDACTED***)")
	}
}

impl fmt::Display for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "***REDACTED***")
	}
}

impl From<String> for SecretString {
	fn from(s: String) -> Self {
		Self::new(s)
	}
}

impl From<&str> for SecretString {
	fn from(s: &str) -> Self {
		Self::new(s.to_string())
	}
}

impl PartialEq for SecretString {
	fn eq(&self, other: &Self) -> bool {
		self.0.as_str() == other.0.as_str()
	}
}

impl Eq for SecretString {}

// Serialization always redacts the value.
impl Serialize for SecretString {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str("***REDACTED***")
	}
}

impl<'de> Deserialize<'de> for SecretString {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let s = String::deserialize(deserializer)?;
		Ok(SecretString::new(s))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_secret_string_debug_is_redacted() {
		let secret = SecretString::from("my-secret-key");
		let debug_str = format!("{:?}", secret);
		assert_eq!(debug_str, "SecretString(***REDACTED***)");
		assert!(!debug_str.contains("my-secret-key"));
	}

	#[test]
	fn test_secret_string_expose() {
		let secret = SecretString::from("my-secret-key");
		assert_eq!(secret.expose_secret(), "my-secret-key");
	}

	#[test]
	fn test_secret_string_eq() {
		assert_eq!(SecretString::from("key1"), SecretString::from("key1"));
		assert_ne!(SecretString::from("key1"), SecretString::from("key2"));
	}
}
