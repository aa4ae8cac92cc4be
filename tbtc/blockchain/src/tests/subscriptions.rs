use std::{
	io,
	sync::Arc,
	time::Duration,
};

use backoff::backoff::Backoff;
use futures::StreamExt;
use parking_lot::Mutex;
use serde_json::json;
use tbtc_primitives::types::{
	Address,
	H256,
	U64,
};
use tokio::{
	sync::mpsc,
	time::Instant,
};

use super::factories::{
	abi,
	context,
	contract_address,
	log,
	FakeClient,
	FakeSubscriber,
};
use crate::{
	contracts::ContractIdentifier,
	events::{
		wallet_coordinator::CoordinatorAdded,
		with_resubscription,
		ContractEvent,
		ResubscribeBackoff,
		SubscribeOptions,
		SubscriptionOutcome,
	},
	proxies::WalletCoordinator,
};

fn coordinator_added_log(coordinator: Address, block: u64) -> web3::types::Log {
	let abi = abi(ContractIdentifier::WalletCoordinator);
	let signature = abi.event(CoordinatorAdded::NAME).expect("Event exists").signature();
	log(vec![signature, H256::from(coordinator)], vec![], block)
}

fn watched_coordinator(
	client: Arc<FakeClient>,
	subscriber: Arc<FakeSubscriber>,
) -> WalletCoordinator<FakeClient> {
	subscriber.head_batches.lock().push_back(vec![]);
	WalletCoordinator::new(
		contract_address(),
		abi(ContractIdentifier::WalletCoordinator),
		&context(client, Some(subscriber)),
	)
}

#[test]
fn test_subscribe_options_normalized() {
	let defaults = SubscribeOptions::default();
	assert_eq!(defaults.tick, Duration::from_secs(15 * 60));
	assert_eq!(defaults.past_blocks, 100);

	let opts = SubscribeOptions { tick: Duration::ZERO, past_blocks: 0 }.normalized();
	assert_eq!(opts, defaults);

	let opts = SubscribeOptions { tick: Duration::from_secs(5), past_blocks: 0 }.normalized();
	assert_eq!(opts, SubscribeOptions { tick: Duration::from_secs(5), past_blocks: 100 });
}

#[tokio::test(start_paused = true)]
async fn test_resubscribe_backoff() {
	let mut backoff = ResubscribeBackoff::new(Duration::from_secs(120));

	let delays: Vec<u64> =
		(0..6).filter_map(|_| backoff.next_backoff()).map(|delay| delay.as_secs()).collect();
	assert_eq!(delays, vec![12, 24, 48, 96, 120, 120]);

	// A long healthy subscription starts the backoff over.
	tokio::time::advance(Duration::from_secs(120 + 121)).await;
	assert_eq!(backoff.next_backoff(), Some(Duration::from_secs(12)));
	assert_eq!(backoff.next_backoff(), Some(Duration::from_secs(24)));

	backoff.reset();
	assert_eq!(backoff.next_backoff(), Some(Duration::from_secs(12)));
}

#[tokio::test(start_paused = true)]
async fn test_with_resubscription_retries_failures() {
	let attempts = Arc::new(Mutex::new(0usize));
	let start = Instant::now();

	let counter = attempts.clone();
	with_resubscription("CoordinatorAdded", Duration::from_secs(120), Duration::from_secs(900), || {
		let counter = counter.clone();
		async move {
			let mut attempts = counter.lock();
			*attempts += 1;
			if *attempts < 3 {
				SubscriptionOutcome::Failed("connection lost".to_owned())
			} else {
				SubscriptionOutcome::Closed
			}
		}
	})
	.await;

	assert_eq!(*attempts.lock(), 3);
	assert_eq!(start.elapsed(), Duration::from_secs(12 + 24));
}

#[tokio::test(start_paused = true)]
async fn test_subscription_polls_past_events() {
	let client = FakeClient::new();
	let coordinator = Address::repeat_byte(0x42);
	client.with(|state| {
		state.block_number = U64::from(50u64);
		state.logs = vec![coordinator_added_log(coordinator, 45)];
	});

	let proxy = super::factories::wallet_coordinator(client.clone());
	let subscription = proxy.coordinator_added_event(
		Some(SubscribeOptions { tick: Duration::from_secs(30), past_blocks: 100 }),
		vec![coordinator],
	);
	let start = Instant::now();
	let (mut events, handle) = subscription.into_stream();

	let event = events.next().await.expect("Event should be delivered");
	assert_eq!(event.coordinator, coordinator);
	assert_eq!(event.meta.block_number, U64::from(45u64));
	assert_eq!(start.elapsed(), Duration::from_secs(30));

	client.with(|state| {
		let filter = serde_json::to_value(&state.filters[0]).expect("Filter serializes");
		// The chain is shorter than the lookback.
		assert_eq!(filter["fromBlock"], json!("0x0"));
		assert_eq!(filter["topics"][1], json!(format!("{:?}", H256::from(coordinator))));
		assert!(filter.get("toBlock").is_none());
	});

	handle.unsubscribe();
}

#[tokio::test(start_paused = true)]
async fn test_subscription_polls_from_lookback() {
	let client = FakeClient::new();
	client.with(|state| state.block_number = U64::from(1_000u64));

	let proxy = super::factories::wallet_coordinator(client.clone());
	let (sender, _receiver) = tokio::sync::mpsc::unbounded_channel();
	let handle = proxy
		.coordinator_added_event(
			Some(SubscribeOptions { tick: Duration::from_secs(30), past_blocks: 100 }),
			vec![],
		)
		.pipe(sender);

	tokio::time::sleep(Duration::from_secs(61)).await;
	handle.unsubscribe();

	client.with(|state| {
		assert_eq!(state.filters.len(), 2);
		let filter = serde_json::to_value(&state.filters[1]).expect("Filter serializes");
		assert_eq!(filter["fromBlock"], json!("0x384"));
		assert_eq!(filter["topics"].as_array().map(Vec::len), Some(1));
	});
}

#[tokio::test(start_paused = true)]
async fn test_subscription_delivers_pushed_events() {
	let client = FakeClient::new();
	let subscriber = Arc::new(FakeSubscriber::default());
	let coordinator = Address::repeat_byte(0x42);
	subscriber.log_batches.lock().push_back(vec![coordinator_added_log(coordinator, 3)]);

	let proxy = watched_coordinator(client, subscriber.clone());
	let received = Arc::new(Mutex::new(vec![]));
	let sink = received.clone();
	let handle = proxy
		.coordinator_added_event(None, vec![])
		.on_event(move |event: CoordinatorAdded| sink.lock().push(event.coordinator));

	tokio::time::sleep(Duration::from_secs(1)).await;
	assert_eq!(*received.lock(), vec![coordinator]);
	assert_eq!(*subscriber.log_attempts.lock(), 1);

	handle.unsubscribe();
}

#[tokio::test(start_paused = true)]
async fn test_subscription_resubscribes_after_failure() {
	let client = FakeClient::new();
	let subscriber = Arc::new(FakeSubscriber::default());
	let coordinator = Address::repeat_byte(0x42);
	*subscriber.log_failures.lock() = 1;
	subscriber.log_batches.lock().push_back(vec![coordinator_added_log(coordinator, 3)]);

	let proxy = watched_coordinator(client, subscriber.clone());
	let start = Instant::now();
	let (mut events, handle) = proxy.coordinator_added_event(None, vec![]).into_stream();

	let event = events.next().await.expect("Event should be delivered");
	assert_eq!(event.coordinator, coordinator);
	assert_eq!(start.elapsed(), Duration::from_secs(12));
	assert_eq!(*subscriber.log_attempts.lock(), 2);

	handle.unsubscribe();
}

#[tokio::test(start_paused = true)]
async fn test_subscription_skips_undecodable_logs() {
	let client = FakeClient::new();
	let subscriber = Arc::new(FakeSubscriber::default());
	let coordinator = Address::repeat_byte(0x42);
	let mut removed = coordinator_added_log(Address::repeat_byte(0x01), 2);
	removed.removed = Some(true);
	let mut pending = coordinator_added_log(Address::repeat_byte(0x02), 2);
	pending.block_hash = None;
	subscriber.log_batches.lock().push_back(vec![
		removed,
		pending,
		coordinator_added_log(coordinator, 3),
	]);

	let proxy = watched_coordinator(client, subscriber);
	let (mut events, handle) = proxy.coordinator_added_event(None, vec![]).into_stream();

	let event = events.next().await.expect("Event should be delivered");
	assert_eq!(event.coordinator, coordinator);

	handle.unsubscribe();
}

/// Collects formatted log lines.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
	fn count(&self, needle: &str) -> usize {
		String::from_utf8_lossy(&self.0.lock()).matches(needle).count()
	}
}

impl io::Write for CapturedLogs {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.0.lock().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

async fn resubscribe_twice(alert_threshold: Duration) -> CapturedLogs {
	let logs = CapturedLogs::default();
	let writer = logs.clone();
	let subscriber = tracing_subscriber::fmt().with_writer(move || writer.clone()).finish();
	let _guard = tracing::subscriber::set_default(subscriber);

	let attempts = Arc::new(Mutex::new(0usize));
	with_resubscription("CoordinatorAdded", Duration::from_secs(120), alert_threshold, || {
		let attempts = attempts.clone();
		async move {
			let mut attempts = attempts.lock();
			*attempts += 1;
			if *attempts < 3 {
				SubscriptionOutcome::Failed("connection lost".to_owned())
			} else {
				SubscriptionOutcome::Closed
			}
		}
	})
	.await;

	logs
}

#[tokio::test(start_paused = true)]
async fn test_with_resubscription_alerts_on_frequent_retries() {
	let logs = resubscribe_twice(Duration::from_secs(900)).await;

	assert_eq!(logs.count("failed with error: [connection lost]"), 2);
	assert_eq!(logs.count("had to be retried"), 2);
	assert_eq!(logs.count("had to be retried [12s]"), 1);
	assert_eq!(logs.count("had to be retried [24s]"), 1);
}

#[tokio::test(start_paused = true)]
async fn test_with_resubscription_no_alert_on_rare_retries() {
	let logs = resubscribe_twice(Duration::from_secs(10)).await;

	assert_eq!(logs.count("failed with error: [connection lost]"), 2);
	assert_eq!(logs.count("had to be retried"), 0);
}

#[tokio::test(start_paused = true)]
async fn test_unsubscribe_stops_delivery() {
	let client = FakeClient::new();
	let subscriber = Arc::new(FakeSubscriber::default());
	let (logs, live) = mpsc::unbounded_channel();
	*subscriber.live_logs.lock() = Some(live);

	let proxy = watched_coordinator(client, subscriber.clone());
	let (mut events, handle) = proxy.coordinator_added_event(None, vec![]).into_stream();

	let first = Address::repeat_byte(0x01);
	logs.send(coordinator_added_log(first, 3)).expect("Subscription is open");
	let event = events.next().await.expect("Event should be delivered");
	assert_eq!(event.coordinator, first);

	handle.unsubscribe();

	// Every task feeding the stream is gone.
	assert!(events.next().await.is_none());
	assert!(logs.send(coordinator_added_log(Address::repeat_byte(0x02), 4)).is_err());
	assert_eq!(*subscriber.log_attempts.lock(), 1);
}
