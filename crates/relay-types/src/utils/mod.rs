//! Utility functions for common conversions and transformations.
//!
//! This module provides the EIP-712 hashing helpers along with string
//! formatting and timestamp utilities used throughout the relay.

pub mod eip712;
pub mod formatting;
pub mod helpers;

pub use eip712::{
	compute_domain_separator, compute_signing_digest, swap_request_struct_hash,
	swap_request_type_hash, Eip712AbiEncoder, DOMAIN_TYPE, SWAP_REQUEST_TYPE,
};
pub use formatting::{truncate_id, with_0x_prefix, without_0x_prefix};
pub use helpers::current_timestamp;
