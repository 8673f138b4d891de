//! Electroneum address checker
//!
//! Validates one address against a network and prints `true` or `false`.
//! Exits 0 for a valid address, 1 for an invalid one and 2 on bad usage.

use std::process::ExitCode;

use electroneum_address::check_address;

mod config;

use config::CheckConfig;

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let config = match CheckConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("usage: electroneum-address-check <address> [mainnet|testnet|stagenet]");
            return ExitCode::from(2);
        }
    };
    log::debug!(
        "Checking address on {} (prefix {})",
        config.network,
        config.prefixes.prefix_for(config.network)
    );

    match check_address(&config.address, config.network, &config.prefixes) {
        Ok(decoded) => {
            log::info!("Valid address, spend key {}", decoded.spend_public_key.to_hex());
            println!("true");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::info!("Invalid address: {}", e);
            println!("false");
            ExitCode::from(1)
        }
    }
}
