use std::{
	fmt,
	time::Duration,
};

use serde::{
	de::{
		Error,
		Visitor,
	},
	Deserialize,
	Deserializer,
};
use web3::types::U256;

use crate::types::ChainID;

/// Parses an unsigned integer given either in decimal or as a `0x`-prefixed hex string.
pub fn parse_u256(value: &str) -> Result<U256, String> {
	let value = value.trim();
	if let Some(hex) = value.strip_prefix("0x") {
		return U256::from_str_radix(hex, 16).map_err(|e| format!("Invalid hex number {}: {:?}", value, e))
	}
	U256::from_dec_str(value).map_err(|e| format!("Invalid number {}: {:?}", value, e))
}

pub fn u256_from_str<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
	D: Deserializer<'de>,
{
	struct U256Visitor;

	impl<'de> Visitor<'de> for U256Visitor {
		type Value = U256;

		fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
			f.write_str("an unsigned integer or a decimal/hex string")
		}

		fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
		where
			E: Error,
		{
			Ok(U256::from(value))
		}

		fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
		where
			E: Error,
		{
			parse_u256(value).map_err(E::custom)
		}
	}

	deserializer.deserialize_any(U256Visitor)
}

pub fn duration_from_secs<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
	D: Deserializer<'de>,
{
	let secs = u64::deserialize(deserializer)?;
	Ok(Duration::from_secs(secs))
}

impl<'de> Deserialize<'de> for ChainID {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct IdVisitor;

		impl<'de> Visitor<'de> for IdVisitor {
			type Value = ChainID;

			fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
				f.write_str("Chain ID as a number or string")
			}

			fn visit_u64<E>(self, id: u64) -> Result<Self::Value, E>
			where
				E: Error,
			{
				Ok(id.into())
			}

			fn visit_str<E>(self, id: &str) -> Result<Self::Value, E>
			where
				E: Error,
			{
				id.parse().map_err(|_| E::custom(format!("Invalid chain id {}", id)))
			}
		}

		deserializer.deserialize_any(IdVisitor)
	}
}
