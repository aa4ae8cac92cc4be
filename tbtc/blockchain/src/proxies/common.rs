use std::sync::Arc;

use parking_lot::Mutex;
use tbtc_primitives::types::{
	Address,
	Bytes,
	ChainID,
	GasLimit,
	GasPrice,
	Nonce,
	TransactionHash,
};
use tokio::{
	sync::{
		Mutex as AsyncMutex,
		MutexGuard,
	},
	time::Instant,
};
use tracing::{
	debug,
	info,
};
use web3::{
	signing::Key,
	types::{
		CallRequest,
		TransactionParameters,
	},
};

use super::{
	ProxyError,
	TransactionOptions,
};
use crate::{
	client::ChainClient,
	constants::LOCAL_NONCE_TRUST_DURATION,
	keys::PrivateKey,
};

pub type Result<T> = std::result::Result<T, ProxyError>;

/// A transaction accepted by the node.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmittedTransaction {
	pub hash: TransactionHash,
	pub nonce: Nonce,
	pub gas_limit: GasLimit,
	pub gas_price: GasPrice,
}

#[derive(Debug)]
struct LocalNonce {
	value: Nonce,
	/// Until when `value` wins over a lower pending nonce.
	trusted_until: Option<Instant>,
}

/// Tracks the next nonce of an account.
///
/// The node may not yet account for transactions that were just submitted, so a local value
/// higher than the pending nonce is kept for a short while after every increment.
pub struct NonceManager<C: ChainClient> {
	client: Arc<C>,
	address: Address,
	local: Mutex<LocalNonce>,
}

impl<C: ChainClient> NonceManager<C> {
	pub fn new(client: Arc<C>, address: Address) -> Self {
		Self {
			client,
			address,
			local: Mutex::new(LocalNonce { value: Nonce::zero(), trusted_until: None }),
		}
	}

	/// Returns the nonce the next transaction should use.
	pub async fn current_nonce(&self) -> Result<Nonce> {
		let pending = self.client.pending_nonce(self.address).await?;

		let mut local = self.local.lock();
		let now = Instant::now();
		if pending > local.value {
			debug!(
				message = "Local nonce is lower than pending nonce, using pending",
				local = %local.value,
				pending = %pending,
			);
			local.value = pending;
			local.trusted_until = Some(now + LOCAL_NONCE_TRUST_DURATION);
		} else if local.value > pending {
			match local.trusted_until {
				Some(until) if now < until => {
					debug!(
						message = "Local nonce is higher than pending nonce, using local",
						local = %local.value,
						pending = %pending,
					);
				},
				_ => {
					info!(
						message = "Local nonce expired, using pending nonce",
						local = %local.value,
						pending = %pending,
					);
					local.value = pending;
				},
			}
		}

		Ok(local.value)
	}

	/// Marks `nonce` as used.
	pub fn increment_nonce(&self, nonce: Nonce) -> Nonce {
		let mut local = self.local.lock();
		local.value = nonce + 1;
		local.trusted_until = Some(Instant::now() + LOCAL_NONCE_TRUST_DURATION);
		debug!(message = "Incremented local nonce", nonce = %local.value);
		local.value
	}
}

/// The operator account transactions are signed with.
///
/// Clones share one nonce manager and one transaction lock, so submissions from every
/// contract proxy using the account are serialized.
pub struct Account<C: ChainClient> {
	client: Arc<C>,
	private_key: PrivateKey,
	chain_id: u64,
	nonce_manager: Arc<NonceManager<C>>,
	lock: Arc<AsyncMutex<()>>,
}

impl<C: ChainClient> Clone for Account<C> {
	fn clone(&self) -> Self {
		Self {
			client: self.client.clone(),
			private_key: self.private_key.clone(),
			chain_id: self.chain_id,
			nonce_manager: self.nonce_manager.clone(),
			lock: self.lock.clone(),
		}
	}
}

impl<C: ChainClient> Account<C> {
	pub fn new(client: Arc<C>, private_key: PrivateKey, chain_id: u64) -> Self {
		let nonce_manager = Arc::new(NonceManager::new(client.clone(), private_key.address()));
		Self { client, private_key, chain_id, nonce_manager, lock: Arc::new(AsyncMutex::new(())) }
	}

	/// Creates the account reading the chain id from the node.
	pub async fn connect(client: Arc<C>, private_key: PrivateKey) -> Result<Self> {
		let chain_id = ChainID::from(client.chain_id().await?);
		info!(
			message = "Connected account",
			address = ?private_key.address(),
			chain = %chain_id,
		);
		Ok(Self::new(client, private_key, chain_id.into()))
	}

	pub fn address(&self) -> Address {
		self.private_key.address()
	}

	pub fn private_key(&self) -> PrivateKey {
		self.private_key.clone()
	}

	pub fn chain_id(&self) -> u64 {
		self.chain_id
	}

	pub fn nonce_manager(&self) -> Arc<NonceManager<C>> {
		self.nonce_manager.clone()
	}

	/// Waits until no other submission of this account is in progress.
	pub async fn lock(&self) -> MutexGuard<'_, ()> {
		self.lock.lock().await
	}

	/// Signs and sends a transaction with the given nonce.
	///
	/// Gas limit and gas price missing from `options` are taken from the node.
	pub async fn send_transaction(
		&self,
		to: Address,
		data: Bytes,
		nonce: Nonce,
		options: &TransactionOptions,
	) -> Result<SubmittedTransaction> {
		let value = options.value.unwrap_or_default();

		let gas_limit = match options.gas_limit {
			Some(gas_limit) => gas_limit,
			None =>
				self.client
					.estimate_gas(CallRequest {
						from: Some(self.address()),
						to: Some(to),
						value: Some(value),
						data: Some(data.clone()),
						..Default::default()
					})
					.await?,
		};
		let gas_price = match options.gas_price {
			Some(gas_price) => gas_price,
			None => self.client.gas_price().await?,
		};

		let transaction = TransactionParameters {
			nonce: Some(nonce),
			to: Some(to),
			gas: gas_limit,
			gas_price: Some(gas_price),
			value,
			data,
			chain_id: Some(self.chain_id),
			..Default::default()
		};
		let hash = self.client.send_transaction(transaction, &self.private_key).await?;

		Ok(SubmittedTransaction { hash, nonce, gas_limit, gas_price })
	}
}

