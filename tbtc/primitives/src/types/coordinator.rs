use derive_more::Display;
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
		H256,
		U256,
	},
};

use super::{
	BitcoinTxInfo,
	Bytes20,
	Bytes4,
	Bytes8,
};
use crate::tokens::TupleFields;

/// Identifies a revealed deposit by its funding output (`WalletCoordinator.DepositKey`).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositKey {
	pub funding_tx_hash: H256,
	pub funding_output_index: u32,
}

impl Tokenizable for DepositKey {
	fn from_token(token: Token) -> Result<Self, Error> {
		let mut fields = TupleFields::new(token, "WalletCoordinator.DepositKey", 2)?;
		Ok(Self { funding_tx_hash: fields.next()?, funding_output_index: fields.next()? })
	}

	fn into_token(self) -> Token {
		Token::Tuple(vec![self.funding_tx_hash.into_token(), self.funding_output_index.into_token()])
	}
}

impl TokenizableItem for DepositKey {}

/// A proposal to sweep a set of deposits into the wallet's main UTXO.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositSweepProposal {
	pub wallet_pub_key_hash: Bytes20,
	pub deposits_keys: Vec<DepositKey>,
	pub sweep_tx_fee: U256,
}

impl Tokenizable for DepositSweepProposal {
	fn from_token(token: Token) -> Result<Self, Error> {
		let mut fields = TupleFields::new(token, "WalletCoordinator.DepositSweepProposal", 3)?;
		Ok(Self {
			wallet_pub_key_hash: fields.next()?,
			deposits_keys: fields.next()?,
			sweep_tx_fee: fields.next()?,
		})
	}

	fn into_token(self) -> Token {
		Token::Tuple(vec![
			self.wallet_pub_key_hash.into_token(),
			self.deposits_keys.into_token(),
			self.sweep_tx_fee.into_token(),
		])
	}
}

impl TokenizableItem for DepositSweepProposal {}

/// Deposit data that cannot be read from the chain but is needed to validate a sweep proposal.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositExtraInfo {
	pub funding_tx: BitcoinTxInfo,
	pub blinding_factor: Bytes8,
	pub wallet_pub_key_hash: Bytes20,
	pub refund_pub_key_hash: Bytes20,
	pub refund_locktime: Bytes4,
}

impl Tokenizable for DepositExtraInfo {
	fn from_token(token: Token) -> Result<Self, Error> {
		let mut fields = TupleFields::new(token, "WalletCoordinator.DepositExtraInfo", 5)?;
		Ok(Self {
			funding_tx: fields.next()?,
			blinding_factor: fields.next()?,
			wallet_pub_key_hash: fields.next()?,
			refund_pub_key_hash: fields.next()?,
			refund_locktime: fields.next()?,
		})
	}

	fn into_token(self) -> Token {
		Token::Tuple(vec![
			self.funding_tx.into_token(),
			self.blinding_factor.into_token(),
			self.wallet_pub_key_hash.into_token(),
			self.refund_pub_key_hash.into_token(),
			self.refund_locktime.into_token(),
		])
	}
}

impl TokenizableItem for DepositExtraInfo {}

/// The action a wallet is locked for.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq, Serialize, Deserialize)]
pub enum WalletActionCause {
	Idle,
	Heartbeat,
	DepositSweep,
	Redemption,
	MovingFunds,
	#[display(fmt = "Unknown({})", _0)]
	Unknown(u8),
}

impl From<u8> for WalletActionCause {
	fn from(value: u8) -> Self {
		match value {
			0 => Self::Idle,
			1 => Self::Heartbeat,
			2 => Self::DepositSweep,
			3 => Self::Redemption,
			4 => Self::MovingFunds,
			other => Self::Unknown(other),
		}
	}
}

impl From<WalletActionCause> for u8 {
	fn from(cause: WalletActionCause) -> Self {
		match cause {
			WalletActionCause::Idle => 0,
			WalletActionCause::Heartbeat => 1,
			WalletActionCause::DepositSweep => 2,
			WalletActionCause::Redemption => 3,
			WalletActionCause::MovingFunds => 4,
			WalletActionCause::Unknown(other) => other,
		}
	}
}

/// Time lock placed on a wallet by the coordinator.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletLock {
	pub expires_at: u32,
	pub cause: WalletActionCause,
}

impl WalletLock {
	/// Whether the lock is still in force at the given unix timestamp.
	pub fn is_active(&self, now: u64) -> bool {
		u64::from(self.expires_at) > now
	}
}

impl Tokenizable for WalletLock {
	fn from_token(token: Token) -> Result<Self, Error> {
		let mut fields = TupleFields::new(token, "WalletCoordinator.WalletLock", 2)?;
		let expires_at = fields.next()?;
		let cause: u8 = fields.next()?;
		Ok(Self { expires_at, cause: cause.into() })
	}

	fn into_token(self) -> Token {
		Token::Tuple(vec![self.expires_at.into_token(), u8::from(self.cause).into_token()])
	}
}
