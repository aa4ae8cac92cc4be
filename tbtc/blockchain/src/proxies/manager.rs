use std::sync::Arc;

use parking_lot::RwLock;

use super::{
	common::{
		Account,
		Result,
	},
	MaintainerProxy,
	RedemptionWatchtower,
	WalletCoordinator,
};
use crate::{
	blocks::BlockCounter,
	client::{
		ChainClient,
		Subscriber,
	},
	config::EthereumConfig,
	contracts::{
		ContractIdentifier,
		ContractsManager,
	},
	keys::PrivateKey,
	mining::MiningWaiter,
};

/// Chain access shared by every contract proxy.
pub struct ChainContext<C: ChainClient> {
	pub client: Arc<C>,
	pub account: Account<C>,
	pub mining_waiter: MiningWaiter<C>,
	pub block_counter: BlockCounter<C>,
	pub subscriber: Option<Arc<dyn Subscriber>>,
}

impl<C: ChainClient> Clone for ChainContext<C> {
	fn clone(&self) -> Self {
		Self {
			client: self.client.clone(),
			account: self.account.clone(),
			mining_waiter: self.mining_waiter.clone(),
			block_counter: self.block_counter.clone(),
			subscriber: self.subscriber.clone(),
		}
	}
}

impl<C: ChainClient> ChainContext<C> {
	pub fn new(
		client: Arc<C>,
		account: Account<C>,
		config: &EthereumConfig,
		subscriber: Option<Arc<dyn Subscriber>>,
	) -> Self {
		let block_counter = BlockCounter::new(client.clone());
		if let Some(subscriber) = &subscriber {
			block_counter.watch_blocks(subscriber.clone());
		}
		Self {
			mining_waiter: MiningWaiter::from_config(client.clone(), config),
			client,
			account,
			block_counter,
			subscriber,
		}
	}

	/// Connects the account to the chain and builds the context around it.
	pub async fn connect(
		client: Arc<C>,
		private_key: PrivateKey,
		config: &EthereumConfig,
		subscriber: Option<Arc<dyn Subscriber>>,
	) -> Result<Self> {
		let account = Account::connect(client.clone(), private_key).await?;
		Ok(Self::new(client, account, config, subscriber))
	}
}

/// Builds and caches the contract proxies.
pub struct ProxyManager<C: ChainClient> {
	context: ChainContext<C>,
	config: EthereumConfig,
	contracts_manager: Arc<ContractsManager>,
	maintainer_proxy: RwLock<Option<MaintainerProxy<C>>>,
	redemption_watchtower: RwLock<Option<RedemptionWatchtower<C>>>,
	wallet_coordinator: RwLock<Option<WalletCoordinator<C>>>,
}

impl<C: ChainClient> ProxyManager<C> {
	pub fn new(
		context: ChainContext<C>,
		config: EthereumConfig,
		contracts_manager: Arc<ContractsManager>,
	) -> Self {
		Self {
			context,
			config,
			contracts_manager,
			maintainer_proxy: RwLock::new(None),
			redemption_watchtower: RwLock::new(None),
			wallet_coordinator: RwLock::new(None),
		}
	}

	pub fn context(&self) -> &ChainContext<C> {
		&self.context
	}

	pub fn maintainer_proxy(&self) -> Result<MaintainerProxy<C>> {
		if let Some(proxy) = self.maintainer_proxy.read().as_ref() {
			return Ok(proxy.clone())
		}
		let id = ContractIdentifier::MaintainerProxy;
		let proxy = MaintainerProxy::new(
			self.config.address_of(id)?,
			self.contracts_manager.get(id)?,
			&self.context,
		);
		*self.maintainer_proxy.write() = Some(proxy.clone());
		Ok(proxy)
	}

	pub fn redemption_watchtower(&self) -> Result<RedemptionWatchtower<C>> {
		if let Some(proxy) = self.redemption_watchtower.read().as_ref() {
			return Ok(proxy.clone())
		}
		let id = ContractIdentifier::RedemptionWatchtower;
		let proxy = RedemptionWatchtower::new(
			self.config.address_of(id)?,
			self.contracts_manager.get(id)?,
			&self.context,
		);
		*self.redemption_watchtower.write() = Some(proxy.clone());
		Ok(proxy)
	}

	pub fn wallet_coordinator(&self) -> Result<WalletCoordinator<C>> {
		if let Some(proxy) = self.wallet_coordinator.read().as_ref() {
			return Ok(proxy.clone())
		}
		let id = ContractIdentifier::WalletCoordinator;
		let proxy = WalletCoordinator::new(
			self.config.address_of(id)?,
			self.contracts_manager.get(id)?,
			&self.context,
		);
		*self.wallet_coordinator.write() = Some(proxy.clone());
		Ok(proxy)
	}
}
