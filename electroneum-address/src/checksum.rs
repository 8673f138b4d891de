//! Keccak-256 checksum for address payloads.

use sha3::{Digest, Keccak256};

use crate::types::CHECKSUM_LEN;

/// Hash bytes with Keccak-256.
///
/// This is the original Keccak padding used by CryptoNote, not NIST SHA3-256.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Compute the address checksum: the first four bytes of Keccak-256.
pub fn compute_checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = keccak256(payload);
    let mut checksum = [0u8; CHECKSUM_LEN];
    checksum.copy_from_slice(&hash[..CHECKSUM_LEN]);
    checksum
}
