//! Checker configuration.

use std::env;

use electroneum_address::{NetworkKind, NetworkPrefix, PrefixTable};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Checker configuration loaded from arguments and environment.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Address to validate.
    pub address: String,
    /// Network the address must belong to.
    pub network: NetworkKind,
    /// Expected network bytes.
    pub prefixes: PrefixTable,
}

impl CheckConfig {
    /// Load configuration from command-line arguments and the process environment.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        Self::from_args_and_env(args, |key| env::var(key).ok())
    }

    /// Load configuration from arguments and an environment lookup.
    ///
    /// Usage: `<address> [network]`. The network falls back to `ETN_NETWORK`,
    /// then mainnet. `ETN_{MAINNET,TESTNET,STAGENET}_PREFIX` override the
    /// network bytes as hex.
    pub fn from_args_and_env<I, F>(args: I, env_var: F) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut args = args.into_iter();
        let address = args.next().ok_or(ConfigError::MissingArgument("address"))?;

        let network = args
            .next()
            .or_else(|| env_var("ETN_NETWORK"))
            .unwrap_or_else(|| "mainnet".to_string());
        let network = network
            .parse::<NetworkKind>()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        let defaults = PrefixTable::default();
        let prefixes = PrefixTable::new(
            prefix_from_env(&env_var, "ETN_MAINNET_PREFIX", defaults.mainnet)?,
            prefix_from_env(&env_var, "ETN_TESTNET_PREFIX", defaults.testnet)?,
            prefix_from_env(&env_var, "ETN_STAGENET_PREFIX", defaults.stagenet)?,
        );

        Ok(Self {
            address,
            network,
            prefixes,
        })
    }
}

fn prefix_from_env<F>(
    env_var: &F,
    key: &str,
    default: NetworkPrefix,
) -> Result<NetworkPrefix, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match env_var(key) {
        Some(value) => NetworkPrefix::from_hex(&value)
            .map_err(|e| ConfigError::Invalid(format!("{}: {}", key, e))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use electroneum_address::ELECTRONEUM_PREFIX;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_with(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_missing_address() {
        let result = CheckConfig::from_args_and_env(args(&[]), no_env);
        assert!(matches!(result, Err(ConfigError::MissingArgument("address"))));
    }

    #[test]
    fn test_explicit_network() {
        let config = CheckConfig::from_args_and_env(args(&["etnk", "stagenet"]), no_env).unwrap();
        assert_eq!(config.address, "etnk");
        assert_eq!(config.network, NetworkKind::Stagenet);
        assert_eq!(config.prefixes, PrefixTable::default());
    }

    #[test]
    fn test_explicit_network_overrides_env() {
        let env = env_with(&[("ETN_NETWORK", "testnet")]);
        let config = CheckConfig::from_args_and_env(args(&["etnk", "mainnet"]), env).unwrap();
        assert_eq!(config.network, NetworkKind::Mainnet);
    }

    #[test]
    fn test_network_from_env() {
        let env = env_with(&[("ETN_NETWORK", "testnet")]);
        let config = CheckConfig::from_args_and_env(args(&["etnk"]), env).unwrap();
        assert_eq!(config.network, NetworkKind::Testnet);
    }

    #[test]
    fn test_network_defaults_to_mainnet() {
        let config = CheckConfig::from_args_and_env(args(&["etnk"]), no_env).unwrap();
        assert_eq!(config.network, NetworkKind::Mainnet);
    }

    #[test]
    fn test_unknown_network() {
        let result = CheckConfig::from_args_and_env(args(&["etnk", "regtest"]), no_env);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let env = env_with(&[("ETN_NETWORK", "regtest")]);
        let result = CheckConfig::from_args_and_env(args(&["etnk"]), env);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_prefix_override() {
        let env = env_with(&[("ETN_TESTNET_PREFIX", "350000")]);
        let config = CheckConfig::from_args_and_env(args(&["etnk", "testnet"]), env).unwrap();

        assert_eq!(config.prefixes.testnet, NetworkPrefix::new([0x35, 0x00, 0x00]));
        assert_eq!(config.prefixes.mainnet, ELECTRONEUM_PREFIX);
        assert_eq!(config.prefixes.stagenet, ELECTRONEUM_PREFIX);
    }

    #[test]
    fn test_invalid_prefix_override() {
        let env = env_with(&[("ETN_MAINNET_PREFIX", "zz")]);
        let result = CheckConfig::from_args_and_env(args(&["etnk"]), env);

        match result {
            Err(ConfigError::Invalid(message)) => assert!(message.starts_with("ETN_MAINNET_PREFIX")),
            other => panic!("expected invalid prefix, got {:?}", other),
        }
    }
}
