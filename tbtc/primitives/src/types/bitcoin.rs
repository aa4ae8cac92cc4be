use serde::{
	Deserialize,
	Serialize,
};
use web3::{
	contract::{
		tokens::{
			Tokenizable,
			TokenizableItem,
		},
		Error,
	},
	ethabi::Token,
	types::{
		Bytes,
		H256,
		U256,
	},
};

use super::Bytes4;
use crate::tokens::TupleFields;

/// An unspent Bitcoin transaction output (`BitcoinTx.UTXO`).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BitcoinTxUtxo {
	pub tx_hash: H256,
	pub tx_output_index: u32,
	pub tx_output_value: u64,
}

impl Tokenizable for BitcoinTxUtxo {
	fn from_token(token: Token) -> Result<Self, Error> {
		let mut fields = TupleFields::new(token, "BitcoinTx.UTXO", 3)?;
		Ok(Self {
			tx_hash: fields.next()?,
			tx_output_index: fields.next()?,
			tx_output_value: fields.next()?,
		})
	}

	fn into_token(self) -> Token {
		Token::Tuple(vec![
			self.tx_hash.into_token(),
			self.tx_output_index.into_token(),
			self.tx_output_value.into_token(),
		])
	}
}

impl TokenizableItem for BitcoinTxUtxo {}

/// The parts of a Bitcoin transaction needed to compute its hash (`BitcoinTx.Info`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BitcoinTxInfo {
	pub version: Bytes4,
	pub input_vector: Bytes,
	pub output_vector: Bytes,
	pub locktime: Bytes4,
}

impl Tokenizable for BitcoinTxInfo {
	fn from_token(token: Token) -> Result<Self, Error> {
		let mut fields = TupleFields::new(token, "BitcoinTx.Info", 4)?;
		Ok(Self {
			version: fields.next()?,
			input_vector: fields.next()?,
			output_vector: fields.next()?,
			locktime: fields.next()?,
		})
	}

	fn into_token(self) -> Token {
		Token::Tuple(vec![
			self.version.into_token(),
			self.input_vector.into_token(),
			self.output_vector.into_token(),
			self.locktime.into_token(),
		])
	}
}

impl TokenizableItem for BitcoinTxInfo {}

/// SPV inclusion proof of a Bitcoin transaction (`BitcoinTx.Proof`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BitcoinTxProof {
	pub merkle_proof: Bytes,
	pub tx_index_in_block: U256,
	pub bitcoin_headers: Bytes,
	pub coinbase_preimage: H256,
	pub coinbase_proof: Bytes,
}

impl Tokenizable for BitcoinTxProof {
	fn from_token(token: Token) -> Result<Self, Error> {
		let mut fields = TupleFields::new(token, "BitcoinTx.Proof", 5)?;
		Ok(Self {
			merkle_proof: fields.next()?,
			tx_index_in_block: fields.next()?,
			bitcoin_headers: fields.next()?,
			coinbase_preimage: fields.next()?,
			coinbase_proof: fields.next()?,
		})
	}

	fn into_token(self) -> Token {
		Token::Tuple(vec![
			self.merkle_proof.into_token(),
			self.tx_index_in_block.into_token(),
			self.bitcoin_headers.into_token(),
			self.coinbase_preimage.into_token(),
			self.coinbase_proof.into_token(),
		])
	}
}

impl TokenizableItem for BitcoinTxProof {}
