use std::time::Duration;

/// How often a subscription pulls past events when no tick is configured.
pub const DEFAULT_SUBSCRIBE_OPTS_TICK: Duration = Duration::from_secs(15 * 60);

/// How many blocks back a subscription looks for past events when not configured.
pub const DEFAULT_SUBSCRIBE_OPTS_PAST_BLOCKS: u64 = 100;

/// Upper bound of the wait between two resubscription attempts.
pub const SUBSCRIPTION_BACKOFF_MAX: Duration = Duration::from_secs(2 * 60);

/// Resubscribing more often than this is reported as a connectivity problem.
pub const SUBSCRIPTION_ALERT_THRESHOLD: Duration = Duration::from_secs(15 * 60);

pub const DEFAULT_MINING_CHECK_INTERVAL: Duration = Duration::from_secs(60);

/// Maximum gas price, in gwei, a transaction is resubmitted with.
pub const DEFAULT_MAX_GAS_PRICE_GWEI: u64 = 500;

/// Percentage by which the gas price grows on every resubmission.
pub const GAS_PRICE_BUMP_PERCENT: u64 = 20;

pub const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(1);

pub const BLOCK_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// How long the local nonce wins over a lower pending nonce reported by the node.
pub const LOCAL_NONCE_TRUST_DURATION: Duration = Duration::from_secs(5);
