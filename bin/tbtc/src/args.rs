use std::str::FromStr;

use serde::de::DeserializeOwned;
use tbtc_primitives::{
	deserializers::parse_u256,
	types::{
		Address,
		BitcoinTxInfo,
		BitcoinTxProof,
		BitcoinTxUtxo,
		Bytes,
		DepositSweepProposal,
		FixedBytes,
		U256,
	},
};

/// A value that can be given as a positional command line argument.
pub trait CliArg: Sized {
	fn parse_arg(value: &str) -> Result<Self, String>;
}

/// Parser handed to structopt for every contract argument.
pub fn parse_arg<T: CliArg>(value: &str) -> Result<T, String> {
	T::parse_arg(value)
}

impl CliArg for Address {
	fn parse_arg(value: &str) -> Result<Self, String> {
		Address::from_str(value.trim_start_matches("0x"))
			.map_err(|e| format!("Invalid address {}: {}", value, e))
	}
}

impl CliArg for U256 {
	fn parse_arg(value: &str) -> Result<Self, String> {
		parse_u256(value)
	}
}

macro_rules! bounded_ints {
	($($int:ty),*) => {
		$(
			impl CliArg for $int {
				fn parse_arg(value: &str) -> Result<Self, String> {
					let parsed = parse_u256(value)?;
					if parsed > U256::from(<$int>::MAX) {
						return Err(format!("{} does not fit into {}", value, stringify!($int)))
					}
					Ok(parsed.low_u64() as $int)
				}
			}
		)*
	};
}

bounded_ints!(u16, u32, u64);

impl CliArg for bool {
	fn parse_arg(value: &str) -> Result<Self, String> {
		value.parse().map_err(|_| format!("Expected `true` or `false`, got {}", value))
	}
}

impl CliArg for Bytes {
	fn parse_arg(value: &str) -> Result<Self, String> {
		hex::decode(value.trim_start_matches("0x"))
			.map(Bytes)
			.map_err(|e| format!("Invalid hex bytes {}: {}", value, e))
	}
}

impl<const N: usize> CliArg for FixedBytes<N> {
	fn parse_arg(value: &str) -> Result<Self, String> {
		FixedBytes::from_str(value).map_err(|e| e.to_string())
	}
}

/// Comma separated list of addresses, given as a single argument.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AddressList(pub Vec<Address>);

impl CliArg for AddressList {
	fn parse_arg(value: &str) -> Result<Self, String> {
		value
			.split(',')
			.map(str::trim)
			.filter(|item| !item.is_empty())
			.map(Address::parse_arg)
			.collect::<Result<Vec<_>, _>>()
			.map(AddressList)
	}
}

impl From<AddressList> for Vec<Address> {
	fn from(list: AddressList) -> Self {
		list.0
	}
}

/// JSON array of structs, given as a single argument.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JsonList<T>(pub Vec<T>);

impl<T: DeserializeOwned> CliArg for JsonList<T> {
	fn parse_arg(value: &str) -> Result<Self, String> {
		parse_json(value).map(JsonList)
	}
}

impl<T> From<JsonList<T>> for Vec<T> {
	fn from(list: JsonList<T>) -> Self {
		list.0
	}
}

fn parse_json<T: DeserializeOwned>(value: &str) -> Result<T, String> {
	serde_json::from_str(value).map_err(|e| format!("Invalid JSON argument: {}", e))
}

macro_rules! json_args {
	($($ty:ty),*) => {
		$(
			impl CliArg for $ty {
				fn parse_arg(value: &str) -> Result<Self, String> {
					parse_json(value)
				}
			}
		)*
	};
}

json_args!(
	BitcoinTxInfo,
	BitcoinTxProof,
	BitcoinTxUtxo,
	DepositSweepProposal
);
