//! Address validation functions.

use crate::checksum::compute_checksum;
use crate::parsing::decode_address;
use crate::{AddressError, DecodedAddress, NetworkKind, PrefixTable};

/// Check an address against a network and return its decoded fields.
///
/// Checks run in order and stop at the first failure: length, Base58
/// blocks, network prefix, then checksum.
///
/// # Arguments
/// * `address` - The encoded address
/// * `network` - The network the address must belong to
/// * `prefixes` - Expected network bytes per network
///
/// # Returns
/// * `Ok(DecodedAddress)` - The address is valid for `network`
/// * `Err(AddressError)` - The first check that failed
pub fn check_address(
    address: &str,
    network: NetworkKind,
    prefixes: &PrefixTable,
) -> Result<DecodedAddress, AddressError> {
    let decoded = decode_address(address)?;

    let expected_prefix = prefixes.prefix_for(network);
    if decoded.prefix != expected_prefix {
        return Err(AddressError::PrefixMismatch {
            expected: expected_prefix.to_hex(),
            actual: decoded.prefix.to_hex(),
        });
    }

    let expected_checksum = compute_checksum(&decoded.prefix_spend_view());
    if decoded.checksum != expected_checksum {
        return Err(AddressError::InvalidChecksum {
            expected: hex::encode(expected_checksum),
            actual: hex::encode(decoded.checksum),
        });
    }

    Ok(decoded)
}

/// Validate an address against a network using a custom prefix table.
pub fn validate_address_with(address: &str, network: NetworkKind, prefixes: &PrefixTable) -> bool {
    match check_address(address, network, prefixes) {
        Ok(_) => true,
        Err(e) => {
            log::debug!("Rejected {} address: {}", network, e);
            false
        }
    }
}

/// Validate an Electroneum address for a network.
///
/// # Example
/// ```rust
/// use electroneum_address::{validate_address, NetworkKind};
///
/// let address = "etnkMDRr7y9bMbU8WJPVkEa2w6WLMyWYc1oB9K6tX9DmabaBRkyejf1D77aMx8HSRJWvyCioVqtD47Hc7yjb3PUB9Y4rnwPoVy";
/// assert!(validate_address(address, NetworkKind::Mainnet));
/// assert!(!validate_address("", NetworkKind::Mainnet));
/// ```
pub fn validate_address(address: &str, network: NetworkKind) -> bool {
    validate_address_with(address, network, &PrefixTable::default())
}

/// Validate an address with the network given by name.
///
/// Unknown network names are rejected rather than defaulted.
pub fn validate_address_str(address: &str, network: &str) -> bool {
    match network.parse::<NetworkKind>() {
        Ok(network) => validate_address(address, network),
        Err(e) => {
            log::debug!("Rejected address: {}", e);
            false
        }
    }
}

/// Validate an address supplied as raw bytes.
///
/// Input that is not UTF-8 text is rejected.
pub fn validate_address_bytes(address: &[u8], network: NetworkKind) -> bool {
    match std::str::from_utf8(address) {
        Ok(address) => validate_address(address, network),
        Err(_) => {
            log::debug!("Rejected {} address: {}", network, AddressError::NotUtf8);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NetworkPrefix, ELECTRONEUM_PREFIX};

    const ADDRESS: &str = "etnkMDRr7y9bMbU8WJPVkEa2w6WLMyWYc1oB9K6tX9DmabaBRkyejf1D77aMx8HSRJWvyCioVqtD47Hc7yjb3PUB9Y4rnwPoVy";

    #[test]
    fn test_check_valid_address() {
        let decoded = check_address(ADDRESS, NetworkKind::Mainnet, &PrefixTable::default()).unwrap();
        assert_eq!(decoded.prefix, ELECTRONEUM_PREFIX);
    }

    #[test]
    fn test_validate_every_network() {
        for kind in NetworkKind::ALL {
            assert!(validate_address(ADDRESS, kind), "{} should accept", kind);
        }
    }

    #[test]
    fn test_validate_empty() {
        assert!(!validate_address("", NetworkKind::Mainnet));
    }

    #[test]
    fn test_checksum_mismatch() {
        let altered = format!("{}z", &ADDRESS[..97]);

        let result = check_address(&altered, NetworkKind::Mainnet, &PrefixTable::default());
        match result {
            Err(AddressError::InvalidChecksum { expected, actual }) => {
                assert_eq!(expected, "6ad571b8");
                assert_eq!(actual, "6ad571b9");
            }
            other => panic!("expected checksum error, got {:?}", other),
        }
        assert!(!validate_address(&altered, NetworkKind::Mainnet));
    }

    #[test]
    fn test_prefix_mismatch() {
        let table = PrefixTable::new(
            ELECTRONEUM_PREFIX,
            NetworkPrefix::new([0x35, 0x00, 0x00]),
            ELECTRONEUM_PREFIX,
        );

        assert!(validate_address_with(ADDRESS, NetworkKind::Mainnet, &table));

        let result = check_address(ADDRESS, NetworkKind::Testnet, &table);
        assert!(matches!(
            result,
            Err(AddressError::PrefixMismatch { ref expected, ref actual })
                if expected == "350000" && actual == "e28c01"
        ));
        assert!(!validate_address_with(ADDRESS, NetworkKind::Testnet, &table));
    }

    #[test]
    fn test_validate_network_name() {
        assert!(validate_address_str(ADDRESS, "mainnet"));
        assert!(validate_address_str(ADDRESS, "testnet"));
        assert!(validate_address_str(ADDRESS, "stagenet"));

        assert!(!validate_address_str(ADDRESS, "regtest"));
        assert!(!validate_address_str(ADDRESS, ""));
    }

    #[test]
    fn test_validate_bytes() {
        assert!(validate_address_bytes(ADDRESS.as_bytes(), NetworkKind::Mainnet));

        let mut bytes = ADDRESS.as_bytes().to_vec();
        bytes[10] = 0xff;
        assert!(!validate_address_bytes(&bytes, NetworkKind::Mainnet));
    }
}
