use thiserror::Error;

use crate::{
	config::ConfigError,
	errors::ContractDefError,
	events::EventError,
	resolver::ResolvedError,
};

#[derive(Error, Debug)]
pub enum ProxyError {
	#[error(transparent)]
	Web3(#[from] web3::Error),
	#[error(transparent)]
	ChainError(#[from] web3::contract::Error),
	#[error("ABI error: `{0}`")]
	Abi(#[from] ethabi::Error),
	#[error(transparent)]
	Event(#[from] EventError),
	#[error(transparent)]
	Contract(#[from] ContractDefError),
	#[error(transparent)]
	Config(#[from] ConfigError),
	#[error(transparent)]
	Resolved(#[from] ResolvedError),
	#[error("Unrecoverable error: `{0}`")]
	Unrecoverable(String),
}
