use std::sync::Arc;

use futures::StreamExt;
use tbtc_primitives::types::BlockNumber;
use tokio::{
	sync::watch,
	task::JoinHandle,
	time::sleep,
};
use tracing::debug;

use crate::{
	client::{
		ChainClient,
		Subscriber,
	},
	constants::{
		BLOCK_POLL_INTERVAL,
		SUBSCRIPTION_ALERT_THRESHOLD,
		SUBSCRIPTION_BACKOFF_MAX,
	},
	events::{
		with_resubscription,
		SubscriptionOutcome,
	},
	proxies::ProxyError,
};

/// Tracks the height of the chain.
///
/// The height only ever grows: it is the highest block seen either through `eth_blockNumber`
/// or through new head notifications.
pub struct BlockCounter<C: ChainClient> {
	client: Arc<C>,
	latest: Arc<watch::Sender<BlockNumber>>,
	receiver: watch::Receiver<BlockNumber>,
}

impl<C: ChainClient> Clone for BlockCounter<C> {
	fn clone(&self) -> Self {
		Self {
			client: self.client.clone(),
			latest: self.latest.clone(),
			receiver: self.receiver.clone(),
		}
	}
}

impl<C: ChainClient> BlockCounter<C> {
	pub fn new(client: Arc<C>) -> Self {
		let (latest, receiver) = watch::channel(BlockNumber::zero());
		Self { client, latest: Arc::new(latest), receiver }
	}

	/// Returns the current chain height.
	pub async fn current_block(&self) -> Result<BlockNumber, ProxyError> {
		let height = self.client.block_number().await?;
		observe(&self.latest, height);
		Ok(*self.receiver.borrow())
	}

	/// Resolves once the chain reaches `height`.
	pub async fn wait_for_block_height(&self, height: BlockNumber) -> Result<(), ProxyError> {
		let mut receiver = self.receiver.clone();
		loop {
			if self.current_block().await? >= height {
				return Ok(())
			}
			tokio::select! {
				_ = receiver.changed() => {},
				_ = sleep(BLOCK_POLL_INTERVAL) => {},
			}
		}
	}

	/// Receiver notified whenever the height grows.
	pub fn heights(&self) -> watch::Receiver<BlockNumber> {
		self.receiver.clone()
	}

	/// Feeds the height from new head notifications.
	pub fn watch_blocks(&self, subscriber: Arc<dyn Subscriber>) -> JoinHandle<()> {
		let latest = self.latest.clone();
		tokio::spawn(async move {
			with_resubscription("NewHeads", SUBSCRIPTION_BACKOFF_MAX, SUBSCRIPTION_ALERT_THRESHOLD, || {
				let subscriber = subscriber.clone();
				let latest = latest.clone();
				async move {
					let mut heads = match subscriber.subscribe_new_heads().await {
						Ok(heads) => heads,
						Err(e) => return SubscriptionOutcome::Failed(e.to_string()),
					};
					while let Some(head) = heads.next().await {
						match head {
							Ok(height) => {
								debug!(message = "New head", height = %height);
								observe(&latest, height);
							},
							Err(e) => return SubscriptionOutcome::Failed(e.to_string()),
						}
					}
					SubscriptionOutcome::Failed("new heads stream ended".to_owned())
				}
			})
			.await
		})
	}
}

fn observe(latest: &watch::Sender<BlockNumber>, height: BlockNumber) {
	latest.send_if_modified(|current| {
		if height > *current {
			*current = height;
			return true
		}
		false
	});
}
