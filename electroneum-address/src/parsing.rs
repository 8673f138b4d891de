//! Block-wise Base58 decoding of addresses.
//!
//! CryptoNote addresses are not Base58Check. The payload is cut into 8-byte
//! blocks and each block is encoded on its own into a fixed number of
//! characters, left-padded with `1` (the zero digit):
//!
//! ```text
//! 71 bytes = 8 x [8 bytes -> 11 chars] + [7 bytes -> 10 chars] = 98 chars
//! ```

use crate::types::PAYLOAD_LEN;
use crate::{AddressError, DecodedAddress};

/// Length of an encoded address in characters.
pub const ADDRESS_LEN: usize = FULL_BLOCK_COUNT * FULL_ENCODED_BLOCK_LEN + TAIL_ENCODED_BLOCK_LEN;

/// Raw bytes carried by a full block.
const FULL_BLOCK_LEN: usize = 8;

/// Characters in an encoded full block.
const FULL_ENCODED_BLOCK_LEN: usize = 11;

/// Number of full blocks in an address.
const FULL_BLOCK_COUNT: usize = 8;

/// Raw bytes carried by the final block.
const TAIL_BLOCK_LEN: usize = 7;

/// Characters in the encoded final block.
const TAIL_ENCODED_BLOCK_LEN: usize = 10;

const _: () = assert!(FULL_BLOCK_COUNT * FULL_BLOCK_LEN + TAIL_BLOCK_LEN == PAYLOAD_LEN);

/// Decode an address string into its byte fields.
///
/// Only the encoding is checked here: the network prefix and checksum are
/// returned as found. See [`crate::check_address`] for full validation.
///
/// # Arguments
/// * `address` - The 98 character encoded address
///
/// # Returns
/// * `Ok(DecodedAddress)` - Successfully decoded address
/// * `Err(AddressError)` - Wrong length, bad character or block overflow
pub fn decode_address(address: &str) -> Result<DecodedAddress, AddressError> {
    let payload = decode_payload(address.as_bytes())?;
    Ok(DecodedAddress::from_payload(&payload))
}

/// Decode the raw 71 byte payload of an address.
pub(crate) fn decode_payload(address: &[u8]) -> Result<[u8; PAYLOAD_LEN], AddressError> {
    if address.len() != ADDRESS_LEN {
        return Err(AddressError::InvalidLength {
            expected: ADDRESS_LEN,
            actual: address.len(),
        });
    }

    let (full, tail) = address.split_at(FULL_BLOCK_COUNT * FULL_ENCODED_BLOCK_LEN);
    let mut payload = [0u8; PAYLOAD_LEN];

    for (index, block) in full.chunks_exact(FULL_ENCODED_BLOCK_LEN).enumerate() {
        let bytes: [u8; FULL_BLOCK_LEN] = decode_block(block, index)?;
        let start = index * FULL_BLOCK_LEN;
        payload[start..start + FULL_BLOCK_LEN].copy_from_slice(&bytes);
    }

    let bytes: [u8; TAIL_BLOCK_LEN] = decode_block(tail, FULL_BLOCK_COUNT)?;
    payload[FULL_BLOCK_COUNT * FULL_BLOCK_LEN..].copy_from_slice(&bytes);

    Ok(payload)
}

/// Decode one Base58 block into exactly `N` bytes.
///
/// Padding `1`s decode to leading zero bytes; the last `N` bytes are kept.
/// Any non-zero byte beyond those `N` means the block does not fit.
pub(crate) fn decode_block<const N: usize>(
    block: &[u8],
    index: usize,
) -> Result<[u8; N], AddressError> {
    let decoded = bs58::decode(block)
        .into_vec()
        .map_err(|e| AddressError::InvalidBase58(format!("block {}: {}", index, e)))?;

    let mut out = [0u8; N];
    if decoded.len() > N {
        let (excess, value) = decoded.split_at(decoded.len() - N);
        if excess.iter().any(|&b| b != 0) {
            return Err(AddressError::BlockOverflow { block: index });
        }
        out.copy_from_slice(value);
    } else {
        // Unreachable for full-width blocks; keeps short input total.
        out[N - decoded.len()..].copy_from_slice(&decoded);
    }

    Ok(out)
}
