//! Common types module for the gasless relay system.
//!
//! This module defines the core data types and structures used throughout
//! the relay. It provides a centralized location for shared types to ensure
//! consistency across all relay components.

/// API types for the HTTP submission endpoints.
pub mod api;
/// EIP-712 domain descriptor types.
pub mod domain;
/// Event types for inter-component communication.
pub mod events;
/// Swap request and execution receipt types.
pub mod request;
/// Registry trait for self-registering implementations.
pub mod registry;
/// Secure string type for private key material.
pub mod secret_string;
/// Storage namespace types.
pub mod storage;
/// Utility functions for hashing, formatting and timestamps.
pub mod utils;
/// Configuration validation types for ensuring type-safe configurations.
pub mod validation;

// Re-export all types for convenient access
pub use api::*;
pub use domain::Eip712Domain;
pub use events::*;
pub use registry::ImplementationRegistry;
pub use request::*;
pub use secret_string::SecretString;
pub use storage::StorageKey;
pub use utils::{
	current_timestamp, truncate_id, with_0x_prefix, without_0x_prefix, Eip712AbiEncoder,
};
pub use validation::*;

// Re-export the primitive types the whole workspace speaks in.
pub use alloy_primitives::{Address, B256, U256};
