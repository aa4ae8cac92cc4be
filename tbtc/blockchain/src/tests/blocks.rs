use std::{
	sync::Arc,
	time::Duration,
};

use tbtc_primitives::types::U64;

use super::factories::{
	FakeClient,
	FakeSubscriber,
};
use crate::blocks::BlockCounter;

#[tokio::test]
async fn test_current_block_never_decreases() {
	let client = FakeClient::new();
	client.with(|state| state.block_number = U64::from(100u64));
	let counter = BlockCounter::new(client.clone());

	assert_eq!(counter.current_block().await.expect("Should return height"), U64::from(100u64));

	// A lagging node behind a load balancer.
	client.with(|state| state.block_number = U64::from(98u64));
	assert_eq!(counter.current_block().await.expect("Should return height"), U64::from(100u64));

	client.with(|state| state.block_number = U64::from(101u64));
	assert_eq!(counter.current_block().await.expect("Should return height"), U64::from(101u64));
	assert_eq!(*counter.heights().borrow(), U64::from(101u64));
}

#[tokio::test(start_paused = true)]
async fn test_wait_for_block_height() {
	let client = FakeClient::new();
	client.with(|state| state.block_number = U64::from(10u64));
	let counter = BlockCounter::new(client.clone());

	let waiting = counter.clone();
	let wait = tokio::spawn(async move { waiting.wait_for_block_height(U64::from(12u64)).await });

	tokio::time::sleep(Duration::from_secs(3)).await;
	assert!(!wait.is_finished());

	client.with(|state| state.block_number = U64::from(12u64));
	wait.await.expect("Task should finish").expect("Height should be reached");
}

#[tokio::test(start_paused = true)]
async fn test_new_heads_update_height() {
	let client = FakeClient::new();
	let counter = BlockCounter::new(client);

	let subscriber = Arc::new(FakeSubscriber::default());
	subscriber
		.head_batches
		.lock()
		.push_back(vec![U64::from(7u64), U64::from(9u64), U64::from(8u64)]);

	let mut heights = counter.heights();
	let task = counter.watch_blocks(subscriber);

	while *heights.borrow() < U64::from(9u64) {
		heights.changed().await.expect("Sender is alive");
	}
	tokio::time::sleep(Duration::from_millis(10)).await;
	assert_eq!(*heights.borrow(), U64::from(9u64));

	task.abort();
}
