use std::time::Duration;

use tbtc_primitives::types::U256;
use web3::signing::Key;

use super::factories::{
	private_key,
	FakeClient,
	CHAIN_ID,
};
use crate::proxies::{
	Account,
	NonceManager,
};

#[tokio::test(start_paused = true)]
async fn test_nonce_follows_pending_nonce() {
	let client = FakeClient::new();
	client.with(|state| state.pending_nonce = U256::from(5u64));
	let manager = NonceManager::new(client.clone(), private_key().address());

	assert_eq!(manager.current_nonce().await.expect("Should return nonce"), U256::from(5u64));

	client.with(|state| state.pending_nonce = U256::from(9u64));
	assert_eq!(manager.current_nonce().await.expect("Should return nonce"), U256::from(9u64));
}

#[tokio::test(start_paused = true)]
async fn test_local_nonce_trusted_after_increment() {
	let client = FakeClient::new();
	client.with(|state| state.pending_nonce = U256::from(5u64));
	let manager = NonceManager::new(client.clone(), private_key().address());

	let nonce = manager.current_nonce().await.expect("Should return nonce");
	assert_eq!(manager.increment_nonce(nonce), U256::from(6u64));

	// The node has not seen the transaction yet.
	assert_eq!(manager.current_nonce().await.expect("Should return nonce"), U256::from(6u64));
	assert_eq!(manager.increment_nonce(U256::from(6u64)), U256::from(7u64));
	assert_eq!(manager.current_nonce().await.expect("Should return nonce"), U256::from(7u64));
}

#[tokio::test(start_paused = true)]
async fn test_local_nonce_expires() {
	let client = FakeClient::new();
	client.with(|state| state.pending_nonce = U256::from(5u64));
	let manager = NonceManager::new(client.clone(), private_key().address());

	manager.increment_nonce(U256::from(5u64));
	tokio::time::advance(Duration::from_secs(4)).await;
	assert_eq!(manager.current_nonce().await.expect("Should return nonce"), U256::from(6u64));

	tokio::time::advance(Duration::from_secs(2)).await;
	assert_eq!(manager.current_nonce().await.expect("Should return nonce"), U256::from(5u64));
}

#[tokio::test]
async fn test_account_shares_nonce_manager() {
	let client = FakeClient::new();
	client.with(|state| state.pending_nonce = U256::from(5u64));

	let account = Account::connect(client, private_key()).await.expect("Should connect");
	assert_eq!(account.chain_id(), CHAIN_ID);
	assert_eq!(account.address(), private_key().address());

	let clone = account.clone();
	account.nonce_manager().increment_nonce(U256::from(5u64));
	assert_eq!(
		clone.nonce_manager().current_nonce().await.expect("Should return nonce"),
		U256::from(6u64)
	);
}
