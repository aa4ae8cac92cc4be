use std::{
	future::Future,
	sync::Arc,
	time::Duration,
};

use tbtc_primitives::types::{
	GasPrice,
	Nonce,
	TransactionHash,
	U256,
};
use tokio::{
	task::JoinHandle,
	time::{
		sleep,
		Instant,
	},
};
use tracing::{
	debug,
	info,
	warn,
};
use web3::types::TransactionReceipt;

use crate::{
	client::ChainClient,
	config::EthereumConfig,
	constants::{
		GAS_PRICE_BUMP_PERCENT,
		RECEIPT_POLL_INTERVAL,
	},
	proxies::{
		ProxyError,
		SubmittedTransaction,
	},
};

/// Parameters of a transaction resubmitted with a higher gas price.
#[derive(Clone, Debug, PartialEq)]
pub struct Resubmission {
	pub nonce: Nonce,
	pub gas_price: GasPrice,
}

/// Resubmits transactions that are not mined in time with a higher gas price.
pub struct MiningWaiter<C: ChainClient> {
	client: Arc<C>,
	check_interval: Duration,
	max_gas_price: GasPrice,
}

impl<C: ChainClient> Clone for MiningWaiter<C> {
	fn clone(&self) -> Self {
		Self {
			client: self.client.clone(),
			check_interval: self.check_interval,
			max_gas_price: self.max_gas_price,
		}
	}
}

impl<C: ChainClient> MiningWaiter<C> {
	pub fn new(client: Arc<C>, check_interval: Duration, max_gas_price: GasPrice) -> Self {
		Self { client, check_interval, max_gas_price }
	}

	pub fn from_config(client: Arc<C>, config: &EthereumConfig) -> Self {
		Self::new(client, config.mining_check_interval, config.max_gas_fee_cap)
	}

	/// Watches `transaction` in the background until it is mined.
	///
	/// Every time no receipt shows up within the check interval, `resubmit` is called with the
	/// same nonce and a gas price raised by a fixed percentage, up to the maximum.
	pub fn force_mining<F, Fut>(
		&self,
		transaction: SubmittedTransaction,
		resubmit: F,
	) -> JoinHandle<()>
	where
		F: Fn(Resubmission) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = Result<SubmittedTransaction, ProxyError>> + Send,
	{
		let waiter = self.clone();
		tokio::spawn(async move {
			let mut transaction = transaction;
			loop {
				if let Some(receipt) = waiter.wait_for_receipt(transaction.hash).await {
					info!(
						message = "Transaction mined",
						hash = ?receipt.transaction_hash,
						status = ?receipt.status,
						block = ?receipt.block_number,
					);
					return
				}

				if transaction.gas_price >= waiter.max_gas_price {
					info!(
						"transaction [{:?}] not yet mined and the gas price reached the maximum [{}]; no further resubmissions",
						transaction.hash,
						waiter.max_gas_price
					);
					return
				}

				let gas_price = waiter.bumped_gas_price(transaction.gas_price);
				info!(
					"resubmitting previous transaction [{:?}] with a higher gas price [{}]",
					transaction.hash, gas_price
				);

				match resubmit(Resubmission { nonce: transaction.nonce, gas_price }).await {
					Ok(resubmitted) => transaction = resubmitted,
					Err(e) => {
						warn!("could not resubmit transaction with a higher gas price: [{}]", e);
						return
					},
				}
			}
		})
	}

	/// Gas price for the next resubmission, capped at the maximum.
	pub fn bumped_gas_price(&self, gas_price: GasPrice) -> GasPrice {
		let bumped = gas_price * U256::from(100 + GAS_PRICE_BUMP_PERCENT) / U256::from(100);
		bumped.max(gas_price + 1).min(self.max_gas_price)
	}

	async fn wait_for_receipt(&self, hash: TransactionHash) -> Option<TransactionReceipt> {
		let deadline = Instant::now() + self.check_interval;
		while Instant::now() < deadline {
			sleep(RECEIPT_POLL_INTERVAL).await;
			match self.client.transaction_receipt(hash).await {
				Ok(Some(receipt)) => return Some(receipt),
				Ok(None) => {},
				Err(e) => debug!(message = "Could not fetch receipt", hash = ?hash, error = %e),
			}
		}
		None
	}
}
