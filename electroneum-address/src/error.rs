//! Error types for address operations.

use thiserror::Error;

/// Errors that can occur while decoding or validating an address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The raw address input is not valid UTF-8 text.
    #[error("Address is not valid UTF-8 text")]
    NotUtf8,

    /// The network kind is not one of mainnet, testnet or stagenet.
    #[error("Unknown network type: {0:?}")]
    UnknownNetwork(String),

    /// The address has an invalid length.
    #[error("Invalid address length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A block contains a character outside the base-58 alphabet.
    #[error("Invalid Base58 encoding: {0}")]
    InvalidBase58(String),

    /// A block decodes to a value wider than its byte size.
    #[error("Base58 block {block} overflows its byte width")]
    BlockOverflow { block: usize },

    /// The network prefix bytes do not match the expected network.
    #[error("Network prefix mismatch: expected {expected}, got {actual}")]
    PrefixMismatch { expected: String, actual: String },

    /// The embedded checksum does not match the Keccak-256 of the payload.
    #[error("Invalid checksum: expected {expected}, got {actual}")]
    InvalidChecksum { expected: String, actual: String },

    /// A network prefix could not be parsed from hex.
    #[error("Invalid network prefix: {0}")]
    InvalidPrefix(String),
}
