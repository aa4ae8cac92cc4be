use std::{
	path::PathBuf,
	time::Duration,
};

use tbtc_primitives::types::{
	Address,
	U256,
};

use crate::{
	config::{
		ConfigError,
		EthereumConfig,
	},
	contracts::ContractIdentifier,
};

#[test]
fn test_config_defaults() {
	let config = EthereumConfig::from_json(r#"{ "url": "ws://localhost:8546" }"#)
		.expect("Config should parse");

	assert_eq!(config.url, "ws://localhost:8546");
	assert_eq!(config.mining_check_interval, Duration::from_secs(60));
	assert_eq!(config.max_gas_fee_cap, U256::from(500_000_000_000u64));
	assert!(config.account.key_file.is_none());
	assert!(config.contract_addresses.is_empty());
}

#[test]
fn test_config_parsing() {
	let config = EthereumConfig::from_json(
		r#"{
			"url": "http://localhost:8545",
			"account": {
				"keyFile": "/keys/operator.json",
				"keyFilePassword": "password"
			},
			"miningCheckInterval": 30,
			"maxGasFeeCap": "100000000000",
			"contractAddresses": {
				"WalletCoordinator": "0x0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c",
				"redemptionwatchtower": "0x0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d"
			}
		}"#,
	)
	.expect("Config should parse");

	assert_eq!(config.account.key_file, Some(PathBuf::from("/keys/operator.json")));
	assert_eq!(config.account.key_file_password.as_deref(), Some("password"));
	assert_eq!(config.mining_check_interval, Duration::from_secs(30));
	assert_eq!(config.max_gas_fee_cap, U256::from(100_000_000_000u64));

	assert_eq!(
		config.address_of(ContractIdentifier::WalletCoordinator).expect("Address is set"),
		Address::repeat_byte(0x0c)
	);
	assert_eq!(
		config.contract_address("RedemptionWatchtower").expect("Lookup ignores case"),
		Address::repeat_byte(0x0d)
	);
	assert!(matches!(
		config.address_of(ContractIdentifier::MaintainerProxy),
		Err(ConfigError::MissingAddress(name)) if name == "MaintainerProxy"
	));
}

#[test]
fn test_config_invalid() {
	assert!(matches!(
		EthereumConfig::from_json(r#"{ "contractAddresses": { "WalletCoordinator": "0x01" } }"#),
		Err(ConfigError::Parse(_))
	));
	assert!(matches!(
		EthereumConfig::from_file("/does/not/exist.json"),
		Err(ConfigError::Open(..))
	));
}
