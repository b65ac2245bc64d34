//! Signature decoding and signer recovery.
//!
//! The relay authorizes actions purely from signatures: it recovers the
//! signing identity from (digest, signature) and equality-checks it against
//! the user named in the request. Malformed signatures of any kind surface
//! as errors here and become rejections upstream, never panics.

use alloy_primitives::{Address, PrimitiveSignature, B256, U256};
use thiserror::Error;

/// Errors that can occur while decoding or verifying a signature.
#[derive(Debug, Error)]
pub enum VerifyError {
	/// The signature blob is not a well-formed 65-byte r||s||v encoding.
	#[error("Malformed signature: {0}")]
	MalformedSignature(String),
	/// Public-key recovery failed for this (digest, signature) pair.
	#[error("Signature recovery failed: {0}")]
	RecoveryFailed(String),
	/// The recovered signer does not match the expected address.
	#[error("Signer mismatch: expected {expected}, recovered {recovered}")]
	SignerMismatch {
		expected: Address,
		recovered: Address,
	},
}

/// Length of an encoded ECDSA signature: 32-byte r, 32-byte s, 1-byte v.
pub const SIGNATURE_LENGTH: usize = 65;

/// Decodes a 65-byte r||s||v signature blob.
///
/// The recovery byte is accepted in both the raw form (0/1) and the
/// Ethereum convention (27/28); anything else is malformed.
pub fn decode_signature(bytes: &[u8]) -> Result<PrimitiveSignature, VerifyError> {
	if bytes.len() != SIGNATURE_LENGTH {
		return Err(VerifyError::MalformedSignature(format!(
			"expected {} bytes, got {}",
			SIGNATURE_LENGTH,
			bytes.len()
		)));
	}

	let r = U256::from_be_slice(&bytes[..32]);
	let s = U256::from_be_slice(&bytes[32..64]);
	let y_parity = match bytes[64] {
		0 | 27 => false,
		1 | 28 => true,
		v => {
			return Err(VerifyError::MalformedSignature(format!(
				"invalid recovery id: {}",
				v
			)))
		},
	};

	Ok(PrimitiveSignature::new(r, s, y_parity))
}

/// Encodes a signature into the 65-byte r||s||v form with v in {27, 28}.
pub fn encode_signature(signature: &PrimitiveSignature) -> Vec<u8> {
	let mut out = vec![0u8; SIGNATURE_LENGTH];
	out[..32].copy_from_slice(&signature.r().to_be_bytes::<32>());
	out[32..64].copy_from_slice(&signature.s().to_be_bytes::<32>());
	out[64] = 27 + signature.v() as u8;
	out
}

/// Recovers the signing address from a digest and a 65-byte signature blob.
pub fn recover_signer(digest: &B256, signature_bytes: &[u8]) -> Result<Address, VerifyError> {
	let signature = decode_signature(signature_bytes)?;
	signature
		.recover_address_from_prehash(digest)
		.map_err(|e| VerifyError::RecoveryFailed(e.to_string()))
}

/// Verifies that the signature over the digest was produced by `expected`.
///
/// The expected address comes from the request itself; no other identity is
/// ever implicitly trusted and no allow-list is consulted.
pub fn verify_request_signer(
	digest: &B256,
	signature_bytes: &[u8],
	expected: &Address,
) -> Result<(), VerifyError> {
	let recovered = recover_signer(digest, signature_bytes)?;
	if recovered != *expected {
		return Err(VerifyError::SignerMismatch {
			expected: *expected,
			recovered,
		});
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::keccak256;
	use alloy_signer::SignerSync;
	use alloy_signer_local::PrivateKeySigner;

	fn sign(signer: &PrivateKeySigner, digest: &B256) -> Vec<u8> {
		let signature = signer.sign_hash_sync(digest).unwrap();
		encode_signature(&signature)
	}

	#[test]
	fn test_recover_matches_signer_address() {
		let signer = PrivateKeySigner::random();
		let digest = keccak256(b"signer-recovery-test");
		let blob = sign(&signer, &digest);

		let recovered = recover_signer(&digest, &blob).unwrap();
		assert_eq!(recovered, signer.address());
		assert!(verify_request_signer(&digest, &blob, &signer.address()).is_ok());
	}

	#[test]
	fn test_other_key_is_rejected() {
		let signer = PrivateKeySigner::random();
		let other = PrivateKeySigner::random();
		let digest = keccak256(b"wrong-key");
		let blob = sign(&other, &digest);

		let result = verify_request_signer(&digest, &blob, &signer.address());
		assert!(matches!(result, Err(VerifyError::SignerMismatch { .. })));
	}

	#[test]
	fn test_raw_and_ethereum_recovery_ids_are_equivalent() {
		let signer = PrivateKeySigner::random();
		let digest = keccak256(b"parity-encoding");
		let mut blob = sign(&signer, &digest);

		let eth = recover_signer(&digest, &blob).unwrap();
		blob[64] -= 27; // 27/28 -> 0/1
		let raw = recover_signer(&digest, &blob).unwrap();
		assert_eq!(eth, raw);
	}

	#[test]
	fn test_flipped_parity_recovers_different_address() {
		let signer = PrivateKeySigner::random();
		let digest = keccak256(b"forged-recovery-id");
		let mut blob = sign(&signer, &digest);
		blob[64] = if blob[64] == 27 { 28 } else { 27 };

		let recovered = recover_signer(&digest, &blob).unwrap();
		assert_ne!(recovered, signer.address());
	}

	#[test]
	fn test_wrong_length_is_malformed() {
		let digest = keccak256(b"short");
		let result = recover_signer(&digest, &[0u8; 64]);
		assert!(matches!(result, Err(VerifyError::MalformedSignature(_))));

		let result = recover_signer(&digest, &[0u8; 66]);
		assert!(matches!(result, Err(VerifyError::MalformedSignature(_))));
	}

	#[test]
	fn test_invalid_recovery_id_is_malformed() {
		let signer = PrivateKeySigner::random();
		let digest = keccak256(b"bad-v");
		let mut blob = sign(&signer, &digest);
		blob[64] = 99;

		let result = recover_signer(&digest, &blob);
		assert!(matches!(result, Err(VerifyError::MalformedSignature(_))));
	}

	#[test]
	fn test_garbage_components_fail_recovery_without_panicking() {
		let digest = keccak256(b"garbage");
		let mut blob = vec![0xffu8; SIGNATURE_LENGTH];
		blob[64] = 27;

		let result = recover_signer(&digest, &blob);
		assert!(matches!(result, Err(VerifyError::RecoveryFailed(_))));
	}
}
