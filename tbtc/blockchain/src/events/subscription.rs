use std::{
	sync::Arc,
	time::Duration,
};

use async_trait::async_trait;
use futures::{
	stream::BoxStream,
	StreamExt,
};
use tbtc_primitives::types::U64;
use tokio::{
	sync::mpsc::{
		self,
		UnboundedSender,
	},
	task::JoinHandle,
	time::{
		interval_at,
		Instant,
		MissedTickBehavior,
	},
};
use tokio_stream::wrappers::UnboundedReceiverStream;
use tracing::{
	error,
	info,
};

use super::{
	with_resubscription,
	ContractEvent,
	SubscriptionOutcome,
};
use crate::{
	constants::{
		DEFAULT_SUBSCRIBE_OPTS_PAST_BLOCKS,
		DEFAULT_SUBSCRIBE_OPTS_TICK,
		SUBSCRIPTION_ALERT_THRESHOLD,
		SUBSCRIPTION_BACKOFF_MAX,
	},
	proxies::ProxyError,
};

/// Tuning of the past-events monitoring that backs every subscription.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SubscribeOptions {
	/// How often past events are pulled.
	pub tick: Duration,
	/// How many blocks back from the current one each pull starts at.
	pub past_blocks: u64,
}

impl Default for SubscribeOptions {
	fn default() -> Self {
		Self { tick: DEFAULT_SUBSCRIBE_OPTS_TICK, past_blocks: DEFAULT_SUBSCRIBE_OPTS_PAST_BLOCKS }
	}
}

impl SubscribeOptions {
	/// Replaces zero values with the defaults.
	pub fn normalized(self) -> Self {
		let defaults = Self::default();
		Self {
			tick: if self.tick.is_zero() { defaults.tick } else { self.tick },
			past_blocks: if self.past_blocks == 0 { defaults.past_blocks } else { self.past_blocks },
		}
	}
}

/// Where a subscription gets its events from.
#[async_trait]
pub trait EventSource<E>: Send + Sync + 'static {
	async fn current_block(&self) -> Result<U64, ProxyError>;

	/// Events emitted from `from_block` up to the latest block.
	async fn past_events(&self, from_block: U64) -> Result<Vec<E>, ProxyError>;

	/// Whether push notifications are available.
	fn can_watch(&self) -> bool;

	/// Opens a push subscription.
	async fn watch(&self) -> Result<BoxStream<'static, Result<E, ProxyError>>, ProxyError>;
}

/// A not yet started subscription to a contract event.
pub struct EventSubscription<E> {
	source: Arc<dyn EventSource<E>>,
	opts: SubscribeOptions,
}

impl<E: ContractEvent> EventSubscription<E> {
	pub fn new(source: Arc<dyn EventSource<E>>, opts: Option<SubscribeOptions>) -> Self {
		Self { source, opts: opts.unwrap_or_default().normalized() }
	}

	pub fn options(&self) -> SubscribeOptions {
		self.opts
	}

	/// Starts delivering events into `sink`.
	pub fn pipe(self, sink: UnboundedSender<E>) -> SubscriptionHandle {
		let mut tasks = vec![tokio::spawn(monitor_past_events(
			self.source.clone(),
			self.opts,
			sink.clone(),
		))];

		if self.source.can_watch() {
			tasks.push(tokio::spawn(watch_events(self.source, sink)));
		} else {
			info!(
				message = "No push subscription available, relying on past events monitoring",
				event = E::NAME,
			);
		}

		SubscriptionHandle { tasks }
	}

	/// Calls `handler` for every delivered event.
	pub fn on_event<F>(self, mut handler: F) -> SubscriptionHandle
	where
		F: FnMut(E) + Send + 'static,
	{
		let (sender, mut receiver) = mpsc::unbounded_channel();
		let mut handle = self.pipe(sender);
		handle.tasks.push(tokio::spawn(async move {
			while let Some(event) = receiver.recv().await {
				handler(event);
			}
		}));
		handle
	}

	pub fn into_stream(self) -> (UnboundedReceiverStream<E>, SubscriptionHandle) {
		let (sender, receiver) = mpsc::unbounded_channel();
		let handle = self.pipe(sender);
		(UnboundedReceiverStream::new(receiver), handle)
	}
}

/// Controls a running subscription.
#[derive(Debug)]
pub struct SubscriptionHandle {
	tasks: Vec<JoinHandle<()>>,
}

impl SubscriptionHandle {
	/// Stops all tasks feeding the subscription.
	pub fn unsubscribe(self) {
		for task in self.tasks {
			task.abort();
		}
	}
}

async fn monitor_past_events<E: ContractEvent>(
	source: Arc<dyn EventSource<E>>,
	opts: SubscribeOptions,
	sink: UnboundedSender<E>,
) {
	let mut ticker = interval_at(Instant::now() + opts.tick, opts.tick);
	ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

	loop {
		ticker.tick().await;
		if sink.is_closed() {
			return
		}

		let current_block = match source.current_block().await {
			Ok(block) => block,
			Err(e) => {
				error!("subscription failed to pull events: [{}]", e);
				continue
			},
		};
		let from_block = current_block.saturating_sub(opts.past_blocks.into());

		info!(
			"subscription monitoring fetching past {} events starting from block [{}]",
			E::NAME,
			from_block
		);
		let events = match source.past_events(from_block).await {
			Ok(events) => events,
			Err(e) => {
				error!("subscription failed to pull events: [{}]", e);
				continue
			},
		};
		info!("subscription monitoring fetched [{}] past {} events", events.len(), E::NAME);

		for event in events {
			if sink.send(event).is_err() {
				return
			}
		}
	}
}

async fn watch_events<E: ContractEvent>(source: Arc<dyn EventSource<E>>, sink: UnboundedSender<E>) {
	with_resubscription(E::NAME, SUBSCRIPTION_BACKOFF_MAX, SUBSCRIPTION_ALERT_THRESHOLD, || {
		let source = source.clone();
		let sink = sink.clone();
		async move {
			let mut stream = match source.watch().await {
				Ok(stream) => stream,
				Err(e) => return SubscriptionOutcome::Failed(e.to_string()),
			};
			while let Some(item) = stream.next().await {
				match item {
					Ok(event) =>
						if sink.send(event).is_err() {
							return SubscriptionOutcome::Closed
						},
					Err(e) => return SubscriptionOutcome::Failed(e.to_string()),
				}
			}
			SubscriptionOutcome::Failed("subscription stream ended".to_owned())
		}
	})
	.await
}
