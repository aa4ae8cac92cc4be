use std::collections::HashMap;

use ethabi::{
	RawLog,
	Token,
};
use tbtc_primitives::types::{
	Address,
	H256,
	U256,
	U64,
};
use thiserror::Error;
use web3::{
	contract::tokens::Tokenizable,
	types::Log,
};

mod filters;
pub mod maintainer_proxy;
pub mod redemption_watchtower;
mod resubscribe;
mod subscription;
pub mod wallet_coordinator;

pub use filters::*;
pub use resubscribe::*;
pub use subscription::*;

#[derive(Error, Debug)]
pub enum EventError {
	#[error("Event `{0}` is not part of the contract ABI")]
	UnknownEvent(String),
	#[error("Could not decode log of event `{0}`: {1}")]
	Decode(String, ethabi::Error),
	#[error("Log of event `{0}` is missing `{1}`")]
	MissingMetadata(String, &'static str),
	#[error("Event `{0}` has no parameter `{1}`")]
	MissingParam(String, String),
	#[error("Parameter `{1}` of event `{0}` has an unexpected type: {2}")]
	InvalidParam(String, String, web3::contract::Error),
}

/// Where and when a log was emitted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventMetadata {
	pub address: Address,
	pub block_number: U64,
	pub block_hash: H256,
	pub transaction_hash: H256,
	pub log_index: U256,
}

/// Contains information about the event triggered on the Ethereum chain.
#[derive(Clone, Debug)]
pub struct Event {
	pub name: String,
	pub address: Address,
	pub block_number: U64,
	pub block_hash: H256,
	pub transaction_hash: H256,
	pub log_index: U256,
	pub data: HashMap<String, Token>,
}

impl Event {
	/// Decodes a log emitted by the given ABI event.
	///
	/// Logs of pending blocks carry no block information and are rejected.
	pub fn decode(abi_event: &ethabi::Event, log: &Log) -> Result<Event, EventError> {
		let name = abi_event.name.clone();
		let parsed = abi_event
			.parse_log(RawLog { topics: log.topics.clone(), data: log.data.0.clone() })
			.map_err(|e| EventError::Decode(name.clone(), e))?;

		let block_number =
			log.block_number.ok_or_else(|| EventError::MissingMetadata(name.clone(), "blockNumber"))?;
		let block_hash =
			log.block_hash.ok_or_else(|| EventError::MissingMetadata(name.clone(), "blockHash"))?;
		let transaction_hash = log
			.transaction_hash
			.ok_or_else(|| EventError::MissingMetadata(name.clone(), "transactionHash"))?;

		let data = parsed.params.into_iter().map(|param| (param.name, param.value)).collect();

		Ok(Event {
			name,
			address: log.address,
			block_number,
			block_hash,
			transaction_hash,
			log_index: log.log_index.unwrap_or_default(),
			data,
		})
	}

	/// Removes a parameter from the event and converts it to `V`.
	pub fn take<V: Tokenizable>(&mut self, param: &str) -> Result<V, EventError> {
		let token = self
			.data
			.remove(param)
			.ok_or_else(|| EventError::MissingParam(self.name.clone(), param.to_owned()))?;
		V::from_token(token)
			.map_err(|e| EventError::InvalidParam(self.name.clone(), param.to_owned(), e))
	}

	pub fn metadata(&self) -> EventMetadata {
		EventMetadata {
			address: self.address,
			block_number: self.block_number,
			block_hash: self.block_hash,
			transaction_hash: self.transaction_hash,
			log_index: self.log_index,
		}
	}
}

/// An event with typed parameters.
///
/// Implemented through `#[derive(ContractEvent)]`.
pub trait ContractEvent: Sized + Send + 'static {
	/// Name of the event in the contract ABI.
	const NAME: &'static str;

	fn from_event(event: Event) -> Result<Self, EventError>;
}
