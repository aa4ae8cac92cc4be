use std::{
	fmt,
	sync::Arc,
};

use ethabi::{
	Contract,
	Token,
};
use tbtc_primitives::{
	constants::ERROR_STRING_SELECTOR,
	types::{
		Address,
		Bytes,
		U256,
	},
};
use thiserror::Error;
use tracing::debug;
use web3::types::CallRequest;

use crate::client::ChainClient;

/// Outcome of replaying a failed transaction as a call to recover its revert reason.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolvedError {
	#[error("got error [{reason}] while encoding call to resolve original error [{original}]")]
	EncodingFailed { original: String, reason: String },
	#[error("got error [{error}] while resolving original error [{original}]")]
	CallFailed { original: String, error: String },
	#[error(
		"got response [{response:?}] which was not long enough to hold an error while resolving original error [{original}]"
	)]
	ShortResponse { original: String, response: Bytes },
	#[error("no method with id [{selector}] for response [{response:?}]; original error [{original}]")]
	UnknownSelector { original: String, selector: String, response: Bytes },
	#[error("could not decode revert reason: {reason}; original error [{original}]")]
	MalformedReason { original: String, reason: String },
	#[error("original error [{original}], revert reason [{reason}]")]
	Reverted { original: String, reason: String },
}

/// Recovers revert reasons of failed contract interactions.
pub struct ErrorResolver<C: ChainClient> {
	client: Arc<C>,
	abi: Contract,
	contract_address: Address,
}

impl<C: ChainClient> ErrorResolver<C> {
	pub fn new(client: Arc<C>, abi: Contract, contract_address: Address) -> Self {
		Self { client, abi, contract_address }
	}

	/// Replays `method` with `params` as an `eth_call` at the latest block and decodes the
	/// `Error(string)` payload returned by the node.
	pub async fn resolve_error<E: fmt::Display>(
		&self,
		original: E,
		from: Address,
		value: Option<U256>,
		method: &str,
		params: &[Token],
	) -> ResolvedError {
		let original = original.to_string();

		let data = match self.abi.function(method).and_then(|f| f.encode_input(params)) {
			Ok(data) => data,
			Err(e) => return ResolvedError::EncodingFailed { original, reason: e.to_string() },
		};

		let request = CallRequest {
			from: Some(from),
			to: Some(self.contract_address),
			value,
			data: Some(data.into()),
			..Default::default()
		};

		debug!(message = "Resolving error", method, original = original.as_str());
		match self.client.call(request, None).await {
			Ok(response) => decode_revert(original, response),
			Err(e) => ResolvedError::CallFailed { original, error: e.to_string() },
		}
	}
}

fn decode_revert(original: String, response: Bytes) -> ResolvedError {
	if response.0.len() < 4 {
		return ResolvedError::ShortResponse { original, response }
	}

	let (selector, payload) = response.0.split_at(4);
	if selector != ERROR_STRING_SELECTOR {
		let selector = format!("0x{}", hex::encode(selector));
		return ResolvedError::UnknownSelector { original, selector, response }
	}

	match decode_reason(payload) {
		Ok(reason) => ResolvedError::Reverted { original, reason },
		Err(reason) => ResolvedError::MalformedReason { original, reason },
	}
}

/// Decodes the single `string` argument of `Error(string)`.
pub(crate) fn decode_reason(payload: &[u8]) -> Result<String, String> {
	let offset = read_word(payload, 0)?;
	if offset.checked_add(32).map_or(true, |end| end > payload.len()) {
		return Err(format!(
			"offset {} would go over slice boundary of length {}",
			offset,
			payload.len()
		))
	}

	let length = read_word(payload, offset)?;
	let start = offset + 32;
	match start.checked_add(length) {
		Some(end) if end <= payload.len() =>
			Ok(String::from_utf8_lossy(&payload[start..end]).into_owned()),
		_ => Err(format!(
			"length insufficient: string of {} bytes at {} in {} bytes",
			length,
			start,
			payload.len()
		)),
	}
}

fn read_word(payload: &[u8], at: usize) -> Result<usize, String> {
	let word = payload.get(at..at + 32).ok_or_else(|| {
		format!("length insufficient: {} bytes, need {}", payload.len(), at + 32)
	})?;
	let value = U256::from_big_endian(word);
	if value > U256::from(usize::MAX) {
		return Err(format!("value {} would go over slice boundary", value))
	}
	Ok(value.as_usize())
}
