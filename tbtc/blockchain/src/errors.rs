use thiserror::Error;

use crate::contracts::ContractIdentifier;

#[derive(Error, Debug)]
pub enum ContractDefError {
	#[error("Contract ABI JSON invalid: `{0}`")]
	InvalidJson(serde_json::Error),
	#[error("ABI parsing error: `{0}`")]
	ABI(ethabi::Error),
	#[error("Contract `{0}` not found")]
	AbiNotFound(ContractIdentifier),
}

impl From<serde_json::Error> for ContractDefError {
	fn from(e: serde_json::Error) -> Self {
		Self::InvalidJson(e)
	}
}

impl From<ethabi::Error> for ContractDefError {
	fn from(e: ethabi::Error) -> Self {
		Self::ABI(e)
	}
}
