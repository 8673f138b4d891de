//! Core types for Electroneum addresses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AddressError;

/// Length of a network prefix in bytes.
pub const PREFIX_LEN: usize = 3;

/// Length of a public key in bytes.
pub const KEY_LEN: usize = 32;

/// Length of the embedded checksum in bytes.
pub const CHECKSUM_LEN: usize = 4;

/// Length of the checksummed region (prefix + spend key + view key).
pub const PREFIX_SPEND_VIEW_LEN: usize = PREFIX_LEN + 2 * KEY_LEN;

/// Total decoded payload length.
pub const PAYLOAD_LEN: usize = PREFIX_SPEND_VIEW_LEN + CHECKSUM_LEN;

/// Network bytes shared by every Electroneum network.
pub const ELECTRONEUM_PREFIX: NetworkPrefix = NetworkPrefix([0xe2, 0x8c, 0x01]);

/// Network type for Electroneum addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkKind {
    /// Electroneum mainnet.
    Mainnet,
    /// Electroneum testnet.
    Testnet,
    /// Electroneum stagenet.
    Stagenet,
}

impl NetworkKind {
    /// All known network kinds.
    pub const ALL: [NetworkKind; 3] = [
        NetworkKind::Mainnet,
        NetworkKind::Testnet,
        NetworkKind::Stagenet,
    ];

    /// Lowercase name of the network.
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkKind::Mainnet => "mainnet",
            NetworkKind::Testnet => "testnet",
            NetworkKind::Stagenet => "stagenet",
        }
    }
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkKind {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NetworkKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AddressError::UnknownNetwork(s.to_string()))
    }
}

/// Network byte sequence at the start of a decoded address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkPrefix(pub [u8; PREFIX_LEN]);

impl NetworkPrefix {
    /// Create from raw bytes.
    pub const fn new(bytes: [u8; PREFIX_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; PREFIX_LEN] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Create from hex string.
    pub fn from_hex(hex_str: &str) -> Result<Self, AddressError> {
        let bytes = hex::decode(hex_str).map_err(|e| AddressError::InvalidPrefix(e.to_string()))?;

        let arr: [u8; PREFIX_LEN] = bytes.as_slice().try_into().map_err(|_| {
            AddressError::InvalidPrefix(format!(
                "expected {} bytes, got {}",
                PREFIX_LEN,
                bytes.len()
            ))
        })?;

        Ok(Self(arr))
    }
}

impl fmt::Display for NetworkPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Expected network bytes for each network kind.
///
/// Electroneum uses the same bytes on all three networks. Forks that
/// differentiate their networks supply their own table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixTable {
    pub mainnet: NetworkPrefix,
    pub testnet: NetworkPrefix,
    pub stagenet: NetworkPrefix,
}

impl PrefixTable {
    /// Create a table from one prefix per network.
    pub const fn new(
        mainnet: NetworkPrefix,
        testnet: NetworkPrefix,
        stagenet: NetworkPrefix,
    ) -> Self {
        Self {
            mainnet,
            testnet,
            stagenet,
        }
    }

    /// Get the expected prefix for a network.
    pub fn prefix_for(&self, network: NetworkKind) -> NetworkPrefix {
        match network {
            NetworkKind::Mainnet => self.mainnet,
            NetworkKind::Testnet => self.testnet,
            NetworkKind::Stagenet => self.stagenet,
        }
    }
}

impl Default for PrefixTable {
    fn default() -> Self {
        Self::new(ELECTRONEUM_PREFIX, ELECTRONEUM_PREFIX, ELECTRONEUM_PREFIX)
    }
}

/// A 32-byte public key (spend or view).
///
/// The bytes are carried as decoded; they are not checked against the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey(pub [u8; KEY_LEN]);

impl PublicKey {
    /// Create from raw bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

/// The byte fields of a decoded address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAddress {
    /// Network bytes.
    pub prefix: NetworkPrefix,
    /// Public spend key.
    pub spend_public_key: PublicKey,
    /// Public view key.
    pub view_public_key: PublicKey,
    /// First four bytes of Keccak-256 over the prefix and both keys.
    pub checksum: [u8; CHECKSUM_LEN],
}

impl DecodedAddress {
    /// Split a full payload into its fields.
    pub fn from_payload(payload: &[u8; PAYLOAD_LEN]) -> Self {
        Self {
            prefix: NetworkPrefix(field(payload, 0)),
            spend_public_key: PublicKey(field(payload, PREFIX_LEN)),
            view_public_key: PublicKey(field(payload, PREFIX_LEN + KEY_LEN)),
            checksum: field(payload, PREFIX_SPEND_VIEW_LEN),
        }
    }

    /// The checksummed region: prefix, spend key, view key.
    pub fn prefix_spend_view(&self) -> [u8; PREFIX_SPEND_VIEW_LEN] {
        let mut out = [0u8; PREFIX_SPEND_VIEW_LEN];
        out[..PREFIX_LEN].copy_from_slice(self.prefix.as_bytes());
        out[PREFIX_LEN..PREFIX_LEN + KEY_LEN].copy_from_slice(self.spend_public_key.as_bytes());
        out[PREFIX_LEN + KEY_LEN..].copy_from_slice(self.view_public_key.as_bytes());
        out
    }

    /// The full payload including the checksum.
    pub fn to_payload(&self) -> [u8; PAYLOAD_LEN] {
        let mut out = [0u8; PAYLOAD_LEN];
        out[..PREFIX_SPEND_VIEW_LEN].copy_from_slice(&self.prefix_spend_view());
        out[PREFIX_SPEND_VIEW_LEN..].copy_from_slice(&self.checksum);
        out
    }
}

/// Read the `N` byte field starting at `start`.
fn field<const N: usize>(payload: &[u8; PAYLOAD_LEN], start: usize) -> [u8; N] {
    std::array::from_fn(|i| payload[start + i])
}
