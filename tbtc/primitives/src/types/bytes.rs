use std::{
	fmt,
	str::FromStr,
};

use serde::{
	de::Error,
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
};
use thiserror::Error;
use web3::{
	contract::{
		tokens::{
			Tokenizable,
			TokenizableItem,
		},
		Error as ContractError,
	},
	ethabi::Token,
};

/// A fixed-size byte string, encoded as the ABI `bytesN` type.
///
/// Unlike an `address`, which is left-padded, `bytesN` values are right-padded to 32 bytes when
/// encoded.
#[derive(Copy, Clone, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct FixedBytes<const N: usize>(pub [u8; N]);

pub type Bytes4 = FixedBytes<4>;

pub type Bytes8 = FixedBytes<8>;

pub type Bytes20 = FixedBytes<20>;

/// Errors raised while parsing a fixed-size byte string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixedBytesError {
	#[error("invalid hex string: {0}")]
	InvalidHex(String),
	#[error("expected {expected} bytes, got {actual}")]
	InvalidLength { expected: usize, actual: usize },
}

impl<const N: usize> FixedBytes<N> {
	/// Creates a value from a slice of exactly `N` bytes.
	pub fn from_slice(bytes: &[u8]) -> Result<Self, FixedBytesError> {
		if bytes.len() != N {
			return Err(FixedBytesError::InvalidLength { expected: N, actual: bytes.len() })
		}
		let mut inner = [0u8; N];
		inner.copy_from_slice(bytes);
		Ok(Self(inner))
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	pub fn zero() -> Self {
		Self([0u8; N])
	}
}

impl<const N: usize> Default for FixedBytes<N> {
	fn default() -> Self {
		Self::zero()
	}
}

impl<const N: usize> From<[u8; N]> for FixedBytes<N> {
	fn from(bytes: [u8; N]) -> Self {
		Self(bytes)
	}
}

impl<const N: usize> FromStr for FixedBytes<N> {
	type Err = FixedBytesError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim_start_matches("0x");
		let bytes = hex::decode(s).map_err(|e| FixedBytesError::InvalidHex(e.to_string()))?;
		Self::from_slice(&bytes)
	}
}

impl<const N: usize> fmt::Display for FixedBytes<N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "0x{}", hex::encode(self.0))
	}
}

impl<const N: usize> fmt::Debug for FixedBytes<N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(self, f)
	}
}

impl<const N: usize> Serialize for FixedBytes<N> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&self.to_string())
	}
}

impl<'de, const N: usize> Deserialize<'de> for FixedBytes<N> {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let s = String::deserialize(deserializer)?;
		s.parse().map_err(D::Error::custom)
	}
}

impl<const N: usize> Tokenizable for FixedBytes<N> {
	fn from_token(token: Token) -> Result<Self, ContractError> {
		match token {
			Token::FixedBytes(bytes) => Self::from_slice(&bytes)
				.map_err(|e| ContractError::InvalidOutputType(format!("bytes{}: {}", N, e))),
			other => Err(ContractError::InvalidOutputType(format!(
				"Expected `bytes{}`, got {:?}",
				N, other
			))),
		}
	}

	fn into_token(self) -> Token {
		Token::FixedBytes(self.0.to_vec())
	}
}

impl<const N: usize> TokenizableItem for FixedBytes<N> {}
