use std::{
	collections::HashMap,
	fs::File,
	path::{
		Path,
		PathBuf,
	},
	time::Duration,
};

use serde::Deserialize;
use tbtc_primitives::{
	constants::gwei,
	deserializers::{
		duration_from_secs,
		u256_from_str,
	},
	types::{
		Address,
		U256,
	},
};
use thiserror::Error;

use crate::{
	constants::{
		DEFAULT_MAX_GAS_PRICE_GWEI,
		DEFAULT_MINING_CHECK_INTERVAL,
	},
	contracts::ContractIdentifier,
};

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("Could not open config file `{0}`: {1}")]
	Open(String, std::io::Error),
	#[error("Could not parse config: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("Missing address for contract `{0}`")]
	MissingAddress(String),
	#[error("Missing `{0}` in config")]
	MissingField(&'static str),
}

/// Keystore of the operator account.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountConfig {
	pub key_file: Option<PathBuf>,
	pub key_file_password: Option<String>,
}

/// Connection and transaction settings for the Ethereum host chain.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthereumConfig {
	#[serde(default)]
	pub url: String,
	#[serde(default)]
	pub account: AccountConfig,
	/// How long the mining waiter waits for a receipt before bumping the gas price.
	#[serde(default = "default_mining_check_interval", deserialize_with = "duration_from_secs")]
	pub mining_check_interval: Duration,
	/// Upper bound for the gas price of resubmitted transactions, in wei.
	#[serde(default = "default_max_gas_fee_cap", deserialize_with = "u256_from_str")]
	pub max_gas_fee_cap: U256,
	#[serde(default)]
	pub contract_addresses: HashMap<String, Address>,
}

fn default_mining_check_interval() -> Duration {
	DEFAULT_MINING_CHECK_INTERVAL
}

fn default_max_gas_fee_cap() -> U256 {
	gwei(DEFAULT_MAX_GAS_PRICE_GWEI)
}

impl Default for EthereumConfig {
	fn default() -> Self {
		Self {
			url: String::new(),
			account: AccountConfig::default(),
			mining_check_interval: default_mining_check_interval(),
			max_gas_fee_cap: default_max_gas_fee_cap(),
			contract_addresses: HashMap::new(),
		}
	}
}

impl EthereumConfig {
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
		let filename = path.as_ref().display().to_string();
		let file = File::open(path.as_ref()).map_err(|e| ConfigError::Open(filename, e))?;
		Ok(serde_json::from_reader(file)?)
	}

	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Looks up the address of a contract by name, ignoring case.
	pub fn contract_address(&self, name: &str) -> Result<Address, ConfigError> {
		self.contract_addresses
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, address)| *address)
			.ok_or_else(|| ConfigError::MissingAddress(name.to_owned()))
	}

	pub fn address_of(&self, contract: ContractIdentifier) -> Result<Address, ConfigError> {
		self.contract_address(&contract.to_string())
	}
}
