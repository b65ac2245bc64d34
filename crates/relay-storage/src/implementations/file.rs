//! File-based storage backend implementation.
//!
//! This module stores each key as one file on disk, providing simple
//! persistence without external dependencies. Writes go through a temp file
//! and an atomic rename so a crash mid-write never corrupts an entry; the
//! used-request record survives relay restarts.

use crate::{StorageError, StorageFactory, StorageInterface, StorageRegistry};
use async_trait::async_trait;
use relay_types::{ConfigSchema, Field, FieldType, ImplementationRegistry, Schema, ValidationError};
use std::path::PathBuf;
use tokio::fs;

/// File-based storage implementation.
pub struct FileStorage {
	/// Base directory path for storing files.
	base_path: PathBuf,
}

impl FileStorage {
	/// Creates a new FileStorage instance with the specified base path.
	pub fn new(base_path: PathBuf) -> Self {
		Self { base_path }
	}

	/// Converts a storage key to a filesystem-safe file path.
	///
	/// Sanitizes the key by replacing problematic characters and appending
	/// a .bin extension.
	fn get_file_path(&self, key: &str) -> PathBuf {
		let safe_key = key.replace(['/', ':'], "_");
		self.base_path.join(format!("{}.bin", safe_key))
	}
}

#[async_trait]
impl StorageInterface for FileStorage {
	async fn get_bytes(&self, key: &str) -> Result<Vec<u8>, StorageError> {
		let path = self.get_file_path(key);

		match fs::read(&path).await {
			Ok(data) => Ok(data),
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(StorageError::NotFound),
			Err(e) => Err(StorageError::Backend(e.to_string())),
		}
	}

	async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
		let path = self.get_file_path(key);

		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent)
				.await
				.map_err(|e| StorageError::Backend(e.to_string()))?;
		}

		// Write atomically by writing to temp file then renaming
		let temp_path = path.with_extension("tmp");
		fs::write(&temp_path, value)
			.await
			.map_err(|e| StorageError::Backend(e.to_string()))?;

		fs::rename(&temp_path, &path)
			.await
			.map_err(|e| StorageError::Backend(e.to_string()))?;

		Ok(())
	}

	async fn delete(&self, key: &str) -> Result<(), StorageError> {
		let path = self.get_file_path(key);

		match fs::remove_file(&path).await {
			Ok(_) => Ok(()),
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
			Err(e) => Err(StorageError::Backend(e.to_string())),
		}
	}

	async fn exists(&self, key: &str) -> Result<bool, StorageError> {
		let path = self.get_file_path(key);
		Ok(path.exists())
	}

	fn config_schema(&self) -> Box<dyn ConfigSchema> {
		Box::new(FileStorageSchema)
	}
}

/// Configuration schema for FileStorage.
pub struct FileStorageSchema;

impl ConfigSchema for FileStorageSchema {
	fn validate(&self, config: &toml::Value) -> Result<(), ValidationError> {
		let schema = Schema::new(
			vec![], // No required fields
			vec![Field::new("storage_path", FieldType::String)],
		);
		schema.validate(config)
	}
}

/// Registry entry for the file storage backend.
pub struct Registry;

impl ImplementationRegistry for Registry {
	const NAME: &'static str = "file";
	type Factory = StorageFactory;

	fn factory() -> Self::Factory {
		create_storage
	}
}

impl StorageRegistry for Registry {}

/// Factory function to create a file storage backend from configuration.
///
/// Configuration parameters:
/// - `storage_path`: Base directory for file storage (default: "./data/storage")
pub fn create_storage(config: &toml::Value) -> Result<Box<dyn StorageInterface>, StorageError> {
	let storage_path = config
		.get("storage_path")
		.and_then(|v| v.as_str())
		.unwrap_or("./data/storage")
		.to_string();

	Ok(Box::new(FileStorage::new(PathBuf::from(storage_path))))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_set_get_delete() {
		let dir = tempfile::tempdir().unwrap();
		let storage = FileStorage::new(dir.path().to_path_buf());

		let key = "used_requests:0xdeadbeef";
		storage.set_bytes(key, b"marker".to_vec()).await.unwrap();

		assert!(storage.exists(key).await.unwrap());
		assert_eq!(storage.get_bytes(key).await.unwrap(), b"marker".to_vec());

		storage.delete(key).await.unwrap();
		assert!(!storage.exists(key).await.unwrap());
		assert!(matches!(
			storage.get_bytes(key).await,
			Err(StorageError::NotFound)
		));
	}

	#[tokio::test]
	async fn test_values_survive_reopen() {
		let dir = tempfile::tempdir().unwrap();
		let key = "used_requests:0xabc";

		{
			let storage = FileStorage::new(dir.path().to_path_buf());
			storage.set_bytes(key, b"consumed".to_vec()).await.unwrap();
		}

		let reopened = FileStorage::new(dir.path().to_path_buf());
		assert!(reopened.exists(key).await.unwrap());
		assert_eq!(
			reopened.get_bytes(key).await.unwrap(),
			b"consumed".to_vec()
		);
	}

	#[tokio::test]
	async fn test_keys_are_sanitized() {
		let dir = tempfile::tempdir().unwrap();
		let storage = FileStorage::new(dir.path().to_path_buf());

		storage
			.set_bytes("ns:with/slash", b"x".to_vec())
			.await
			.unwrap();
		assert!(storage.exists("ns:with/slash").await.unwrap());
	}

	#[tokio::test]
	async fn test_delete_missing_is_ok() {
		let dir = tempfile::tempdir().unwrap();
		let storage = FileStorage::new(dir.path().to_path_buf());
		storage.delete("never_written").await.unwrap();
	}
}
