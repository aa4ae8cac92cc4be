pub use web3::types::{
	Address,
	BlockId,
	Bytes,
	H160,
	H256,
	U256,
	U64,
};

mod bitcoin;
pub use bitcoin::*;

mod bytes;
pub use bytes::*;

mod chain_id;
pub use chain_id::*;

mod coordinator;
pub use coordinator::*;

mod watchtower;
pub use watchtower::*;

pub type BlockHash = H256;

pub type BlockNumber = U64;

pub type GasLimit = U256;

pub type GasPrice = U256;

pub type Nonce = U256;

pub type RedemptionKey = U256;

pub type TokenAmount = U256;

pub type TransactionHash = H256;

pub type WalletPubKeyHash = Bytes20;
