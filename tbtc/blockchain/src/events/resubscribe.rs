use std::{
	future::Future,
	time::Duration,
};

use backoff::backoff::Backoff;
use parking_lot::Mutex;
use tokio::time::Instant;
use tracing::{
	error,
	warn,
};

/// Delays between resubscription attempts.
///
/// Starts at a tenth of `max` and doubles up to `max`. Once the last attempt is older than
/// `max` the delay starts over.
#[derive(Debug)]
pub struct ResubscribeBackoff {
	max: Duration,
	current: Option<Duration>,
	/// When the attempt that follows the last returned delay starts.
	next_attempt: Option<Instant>,
}

impl ResubscribeBackoff {
	pub fn new(max: Duration) -> Self {
		Self { max, current: None, next_attempt: None }
	}
}

impl Backoff for ResubscribeBackoff {
	fn next_backoff(&mut self) -> Option<Duration> {
		let now = Instant::now();
		let delay = match (self.current, self.next_attempt) {
			(Some(current), Some(attempt)) if now.saturating_duration_since(attempt) <= self.max =>
				(current * 2).min(self.max),
			_ => self.max / 10,
		};
		self.current = Some(delay);
		self.next_attempt = Some(now + delay);
		Some(delay)
	}

	fn reset(&mut self) {
		self.current = None;
		self.next_attempt = None;
	}
}

/// Result of one subscription attempt.
#[derive(Debug)]
pub enum SubscriptionOutcome {
	/// The consumer went away, no further attempts are needed.
	Closed,
	/// The subscription could not be established or broke.
	Failed(String),
}

/// Keeps a push subscription alive.
///
/// `subscribe` runs one subscription until it ends. Failed attempts are retried after a
/// backoff, and retries that come within `alert_threshold` of the previous attempt are
/// reported as a connectivity problem.
pub async fn with_resubscription<F, Fut>(
	event: &str,
	backoff_max: Duration,
	alert_threshold: Duration,
	mut subscribe: F,
) where
	F: FnMut() -> Fut,
	Fut: Future<Output = SubscriptionOutcome>,
{
	let last_attempt = Mutex::new(Instant::now());

	let attempt = || {
		*last_attempt.lock() = Instant::now();
		let subscription = subscribe();
		async move {
			match subscription.await {
				SubscriptionOutcome::Closed => Ok(()),
				SubscriptionOutcome::Failed(e) => Err(backoff::Error::transient(e)),
			}
		}
	};

	let notify = |e: String, delay: Duration| {
		error!(
			"subscription to event {} failed with error: [{}]; resubscription attempt will be performed",
			event, e
		);
		let since_last = (Instant::now() + delay).saturating_duration_since(*last_attempt.lock());
		if since_last < alert_threshold {
			warn!(
				"subscription to event {} had to be retried [{:?}] since the last attempt; please inspect host chain connectivity",
				event, since_last
			);
		}
	};

	let result =
		backoff::future::retry_notify(ResubscribeBackoff::new(backoff_max), attempt, notify).await;
	if let Err(e) = result {
		error!("subscription to event {} gave up: [{}]", event, e);
	}
}
