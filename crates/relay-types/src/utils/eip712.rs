//! EIP-712 structured-data hashing for swap requests.
//!
//! These helpers provide:
//! - Domain separator computation
//! - Struct hash computation for the SwapRequest schema
//! - Final digest computation (0x1901 || domainSeparator || structHash)
//! - A minimal ABI encoder for the static EIP-712 field types used here

use alloy_primitives::{keccak256, Address, B256, U256};

use crate::request::SwapRequest;

/// EIP-712 domain type string. Field order is fixed by the standard.
pub const DOMAIN_TYPE: &str =
	"EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

/// SwapRequest type string. Field names, types and order are part of the
/// wire contract; reordering changes every digest.
pub const SWAP_REQUEST_TYPE: &str =
	"SwapRequest(address user,address tokenIn,address tokenOut,uint256 amountIn,uint256 deadline)";

/// Compute the EIP-712 domain separator:
/// keccak256(abi.encode(typeHash, nameHash, versionHash, chainId, verifyingContract)).
///
/// Any off-line signer must be able to recompute this identically; a mismatch
/// in any field makes all subsequent signature checks fail closed.
pub fn compute_domain_separator(
	name: &str,
	version: &str,
	chain_id: u64,
	verifying_contract: &Address,
) -> B256 {
	let domain_type_hash = keccak256(DOMAIN_TYPE.as_bytes());
	let name_hash = keccak256(name.as_bytes());
	let version_hash = keccak256(version.as_bytes());
	let mut enc = Eip712AbiEncoder::new();
	enc.push_b256(&domain_type_hash);
	enc.push_b256(&name_hash);
	enc.push_b256(&version_hash);
	enc.push_u256(U256::from(chain_id));
	enc.push_address(verifying_contract);
	keccak256(enc.finish())
}

/// Returns the constant type hash of the SwapRequest schema.
pub fn swap_request_type_hash() -> B256 {
	keccak256(SWAP_REQUEST_TYPE.as_bytes())
}

/// Compute the struct hash of a swap request:
/// keccak256(typeHash || enc(user) || enc(tokenIn) || enc(tokenOut) || enc(amountIn) || enc(deadline)).
///
/// Every field is encoded to a fixed 32-byte word, so the map from request to
/// struct hash is injective over the schema.
pub fn swap_request_struct_hash(request: &SwapRequest) -> B256 {
	let mut enc = Eip712AbiEncoder::new();
	enc.push_b256(&swap_request_type_hash());
	enc.push_address(&request.user);
	enc.push_address(&request.token_in);
	enc.push_address(&request.token_out);
	enc.push_u256(request.amount_in);
	enc.push_u256(request.deadline);
	keccak256(enc.finish())
}

/// Compute the final signing digest: keccak256(0x1901 || domainSeparator || structHash).
pub fn compute_signing_digest(domain_separator: &B256, struct_hash: &B256) -> B256 {
	let mut out = Vec::with_capacity(2 + 32 + 32);
	out.push(0x19);
	out.push(0x01);
	out.extend_from_slice(domain_separator.as_slice());
	out.extend_from_slice(struct_hash.as_slice());
	keccak256(out)
}

/// Minimal ABI encoder for static types used in EIP-712 struct hashing.
pub struct Eip712AbiEncoder {
	buf: Vec<u8>,
}

impl Default for Eip712AbiEncoder {
	fn default() -> Self {
		Self::new()
	}
}

impl Eip712AbiEncoder {
	pub fn new() -> Self {
		Self { buf: Vec::new() }
	}

	pub fn push_b256(&mut self, v: &B256) {
		self.buf.extend_from_slice(v.as_slice());
	}

	pub fn push_address(&mut self, addr: &Address) {
		let mut word = [0u8; 32];
		word[12..].copy_from_slice(addr.as_slice());
		self.buf.extend_from_slice(&word);
	}

	pub fn push_u256(&mut self, v: U256) {
		let word: [u8; 32] = v.to_be_bytes::<32>();
		self.buf.extend_from_slice(&word);
	}

	pub fn finish(self) -> Vec<u8> {
		self.buf
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::address;

	fn sample_request() -> SwapRequest {
		SwapRequest {
			user: address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
			token_in: Address::ZERO,
			token_out: Address::ZERO,
			amount_in: U256::from(1_000_000_000_000_000_000u128),
			deadline: U256::from(1_700_000_000u64),
		}
	}

	#[test]
	fn test_struct_hash_is_deterministic() {
		let request = sample_request();
		assert_eq!(
			swap_request_struct_hash(&request),
			swap_request_struct_hash(&request)
		);
	}

	#[test]
	fn test_struct_hash_matches_manual_encoding() {
		let request = sample_request();

		let mut encoded = Vec::new();
		encoded.extend_from_slice(keccak256(SWAP_REQUEST_TYPE.as_bytes()).as_slice());
		let mut user_word = [0u8; 32];
		user_word[12..].copy_from_slice(request.user.as_slice());
		encoded.extend_from_slice(&user_word);
		encoded.extend_from_slice(&[0u8; 32]); // tokenIn = zero address
		encoded.extend_from_slice(&[0u8; 32]); // tokenOut = zero address
		encoded.extend_from_slice(&request.amount_in.to_be_bytes::<32>());
		encoded.extend_from_slice(&request.deadline.to_be_bytes::<32>());

		assert_eq!(swap_request_struct_hash(&request), keccak256(encoded));
	}

	#[test]
	fn test_struct_hash_sensitive_to_every_field() {
		let base = sample_request();
		let base_hash = swap_request_struct_hash(&base);

		let mut changed = base.clone();
		changed.user = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");
		assert_ne!(swap_request_struct_hash(&changed), base_hash);

		let mut changed = base.clone();
		changed.token_in = address!("5FbDB2315678afecb367f032d93F642f64180aa3");
		assert_ne!(swap_request_struct_hash(&changed), base_hash);

		let mut changed = base.clone();
		changed.token_out = address!("5FbDB2315678afecb367f032d93F642f64180aa3");
		assert_ne!(swap_request_struct_hash(&changed), base_hash);

		let mut changed = base.clone();
		changed.amount_in = base.amount_in + U256::from(1);
		assert_ne!(swap_request_struct_hash(&changed), base_hash);

		// Deadline alone must change the digest, otherwise a relayer could
		// extend the validity window of a captured signature.
		let mut changed = base.clone();
		changed.deadline = base.deadline + U256::from(1);
		assert_ne!(swap_request_struct_hash(&changed), base_hash);
	}

	#[test]
	fn test_domain_separator_isolates_contexts() {
		let contract = address!("5FbDB2315678afecb367f032d93F642f64180aa3");
		let base = compute_domain_separator("GaslessSwap", "1", 31337, &contract);

		assert_eq!(
			base,
			compute_domain_separator("GaslessSwap", "1", 31337, &contract)
		);
		assert_ne!(
			base,
			compute_domain_separator("GaslessSwap", "1", 1, &contract)
		);
		assert_ne!(
			base,
			compute_domain_separator("GaslessSwap", "2", 31337, &contract)
		);
		assert_ne!(
			base,
			compute_domain_separator("OtherApp", "1", 31337, &contract)
		);
		assert_ne!(
			base,
			compute_domain_separator(
				"GaslessSwap",
				"1",
				31337,
				&address!("70997970C51812dc3A010C7d01b50e0d17dc79C8")
			)
		);
	}

	#[test]
	fn test_signing_digest_binds_domain_and_struct() {
		let contract = address!("5FbDB2315678afecb367f032d93F642f64180aa3");
		let request = sample_request();
		let struct_hash = swap_request_struct_hash(&request);

		let sep_a = compute_domain_separator("GaslessSwap", "1", 31337, &contract);
		let sep_b = compute_domain_separator("GaslessSwap", "1", 1, &contract);

		let digest_a = compute_signing_digest(&sep_a, &struct_hash);
		let digest_b = compute_signing_digest(&sep_b, &struct_hash);

		assert_eq!(digest_a, compute_signing_digest(&sep_a, &struct_hash));
		assert_ne!(digest_a, digest_b);
		assert_ne!(digest_a, struct_hash);
	}
}
