//! Electroneum Address Validation Module
//!
//! This crate decodes and validates Electroneum addresses.
//!
//! # Overview
//!
//! Electroneum inherits the CryptoNote address format from Monero. An
//! address carries two public keys:
//! - **Spend Key**: Used to authorize spending of funds
//! - **View Key**: Used to scan the blockchain for incoming transactions
//!
//! # Address Format
//!
//! The 71 byte payload is laid out as:
//! ```text
//! [network_prefix:3][spend_public_key:32][view_public_key:32][checksum:4]
//! ```
//!
//! The checksum is the first four bytes of Keccak-256 over everything before
//! it. The payload is encoded with block-wise Base58 into 98 characters.
//!
//! Electroneum uses the prefix `e28c01` on mainnet, testnet and stagenet
//! alike. Forks with distinct network bytes pass their own [`PrefixTable`].
//!
//! # Example
//!
//! ```rust
//! use electroneum_address::{check_address, validate_address, NetworkKind, PrefixTable};
//!
//! let address = "etnkMDRr7y9bMbU8WJPVkEa2w6WLMyWYc1oB9K6tX9DmabaBRkyejf1D77aMx8HSRJWvyCioVqtD47Hc7yjb3PUB9Y4rnwPoVy";
//!
//! assert!(validate_address(address, NetworkKind::Mainnet));
//!
//! let decoded = check_address(address, NetworkKind::Mainnet, &PrefixTable::default()).unwrap();
//! println!("Spend key: {}", decoded.spend_public_key.to_hex());
//! ```

mod checksum;
mod error;
mod parsing;
mod types;
mod validation;

pub use checksum::{compute_checksum, keccak256};
pub use error::AddressError;
pub use parsing::{decode_address, ADDRESS_LEN};
pub use types::{
    DecodedAddress, NetworkKind, NetworkPrefix, PrefixTable, PublicKey, ELECTRONEUM_PREFIX,
    PAYLOAD_LEN,
};
pub use validation::{
    check_address, validate_address, validate_address_bytes, validate_address_str,
    validate_address_with,
};
