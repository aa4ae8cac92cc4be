use async_trait::async_trait;
use futures::{
	stream::BoxStream,
	StreamExt,
};
use tbtc_primitives::types::{
	Address,
	BlockId,
	Bytes,
	H256,
	U256,
	U64,
};
use web3::{
	transports::WebSocket,
	types::{
		CallRequest,
		Filter,
		Log,
		TransactionParameters,
		TransactionReceipt,
	},
	Transport,
	Web3,
};

use crate::keys::PrivateKey;

/// The JSON-RPC surface used by the contract proxies.
#[async_trait]
pub trait ChainClient: Send + Sync + 'static {
	/// Executes a read-only call, at the given block or at the latest one.
	async fn call(&self, request: CallRequest, block: Option<BlockId>) -> web3::Result<Bytes>;

	async fn estimate_gas(&self, request: CallRequest) -> web3::Result<U256>;

	async fn gas_price(&self) -> web3::Result<U256>;

	/// Transaction count of the account including the transactions still in the pool.
	async fn pending_nonce(&self, address: Address) -> web3::Result<U256>;

	async fn block_number(&self) -> web3::Result<U64>;

	async fn logs(&self, filter: Filter) -> web3::Result<Vec<Log>>;

	async fn transaction_receipt(&self, hash: H256) -> web3::Result<Option<TransactionReceipt>>;

	async fn chain_id(&self) -> web3::Result<U256>;

	/// Signs the transaction locally and broadcasts the raw bytes.
	///
	/// Nonce, gas price and chain id must be set on the parameters.
	async fn send_transaction(
		&self,
		transaction: TransactionParameters,
		key: &PrivateKey,
	) -> web3::Result<H256>;
}

#[async_trait]
impl<T> ChainClient for Web3<T>
where
	T: Transport + Send + Sync + 'static,
	T::Out: Send,
{
	async fn call(&self, request: CallRequest, block: Option<BlockId>) -> web3::Result<Bytes> {
		self.eth().call(request, block).await
	}

	async fn estimate_gas(&self, request: CallRequest) -> web3::Result<U256> {
		self.eth().estimate_gas(request, None).await
	}

	async fn gas_price(&self) -> web3::Result<U256> {
		self.eth().gas_price().await
	}

	async fn pending_nonce(&self, address: Address) -> web3::Result<U256> {
		self.eth()
			.transaction_count(address, Some(web3::types::BlockNumber::Pending))
			.await
	}

	async fn block_number(&self) -> web3::Result<U64> {
		self.eth().block_number().await
	}

	async fn logs(&self, filter: Filter) -> web3::Result<Vec<Log>> {
		self.eth().logs(filter).await
	}

	async fn transaction_receipt(&self, hash: H256) -> web3::Result<Option<TransactionReceipt>> {
		self.eth().transaction_receipt(hash).await
	}

	async fn chain_id(&self) -> web3::Result<U256> {
		self.eth().chain_id().await
	}

	async fn send_transaction(
		&self,
		transaction: TransactionParameters,
		key: &PrivateKey,
	) -> web3::Result<H256> {
		let signed = self.accounts().sign_transaction(transaction, key.clone()).await?;
		self.eth().send_raw_transaction(signed.raw_transaction).await
	}
}

/// Push notifications from the chain.
#[async_trait]
pub trait Subscriber: Send + Sync + 'static {
	async fn subscribe_logs(
		&self,
		filter: Filter,
	) -> web3::Result<BoxStream<'static, web3::Result<Log>>>;

	/// Stream of the heights of new chain heads.
	async fn subscribe_new_heads(&self) -> web3::Result<BoxStream<'static, web3::Result<U64>>>;
}

#[async_trait]
impl Subscriber for Web3<WebSocket> {
	async fn subscribe_logs(
		&self,
		filter: Filter,
	) -> web3::Result<BoxStream<'static, web3::Result<Log>>> {
		let stream = self.eth_subscribe().subscribe_logs(filter).await?;
		Ok(stream.boxed())
	}

	async fn subscribe_new_heads(&self) -> web3::Result<BoxStream<'static, web3::Result<U64>>> {
		let stream = self.eth_subscribe().subscribe_new_heads().await?;
		Ok(stream
			.filter_map(|header| async move {
				match header {
					Ok(header) => header.number.map(Ok),
					Err(e) => Some(Err(e)),
				}
			})
			.boxed())
	}
}
