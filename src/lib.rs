//! Bindings for the tBTC `MaintainerProxy`, `RedemptionWatchtower` and `WalletCoordinator`
//! contracts.
//!
//! Start from a [`prelude::ProxyManager`] built around a [`prelude::ChainContext`].
pub use tbtc_blockchain as blockchain;
pub use tbtc_macros as macros;
pub use tbtc_primitives as primitives;

pub mod prelude {
	pub use tbtc_blockchain::{
		client::{
			ChainClient,
			Subscriber,
		},
		config::EthereumConfig,
		contracts::{
			ContractIdentifier,
			ContractsManager,
		},
		events::{
			ContractEvent,
			EventMetadata,
			EventSubscription,
			SubscribeOptions,
			SubscriptionHandle,
		},
		keys::PrivateKey,
		proxies::{
			ChainContext,
			MaintainerProxy,
			ProxyError,
			ProxyManager,
			RedemptionWatchtower,
			SubmittedTransaction,
			TransactionOptions,
			WalletCoordinator,
		},
	};
	pub use tbtc_primitives::types::*;
}
