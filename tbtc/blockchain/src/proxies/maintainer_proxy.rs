use tbtc_primitives::types::{
	Address,
	BitcoinTxInfo,
	BitcoinTxProof,
	BitcoinTxUtxo,
	BlockNumber,
	Bytes,
	WalletPubKeyHash,
	U256,
};
use web3::contract::tokens::Tokenizable;

use super::{
	ChainContext,
	ContractHandle,
	Result,
	SubmittedTransaction,
	TransactionOptions,
};
use crate::{
	client::ChainClient,
	contracts::ContractIdentifier,
	events::{
		maintainer_proxy::*,
		topics,
		EventSubscription,
		SubscribeOptions,
	},
};

/// Proxy of the `MaintainerProxy` contract, which reimburses authorized maintainers for the
/// Bridge operations they perform.
pub struct MaintainerProxy<C: ChainClient> {
	contract: ContractHandle<C>,
}

impl<C: ChainClient> Clone for MaintainerProxy<C> {
	fn clone(&self) -> Self {
		Self { contract: self.contract.clone() }
	}
}

impl<C: ChainClient> MaintainerProxy<C> {
	pub fn new(address: Address, abi: ethabi::Contract, context: &ChainContext<C>) -> Self {
		Self {
			contract: ContractHandle::new(ContractIdentifier::MaintainerProxy, address, abi, context),
		}
	}

	pub fn address(&self) -> Address {
		self.contract.address()
	}

	pub fn contract(&self) -> &ContractHandle<C> {
		&self.contract
	}

	transactions! {
		/// Allows `maintainer` to submit SPV proofs.
		"authorizeSpvMaintainer" => authorize_spv_maintainer, call_authorize_spv_maintainer, authorize_spv_maintainer_gas_estimate(maintainer: Address);
		/// Allows `maintainer` to send wallet notifications.
		"authorizeWalletMaintainer" => authorize_wallet_maintainer, call_authorize_wallet_maintainer, authorize_wallet_maintainer_gas_estimate(maintainer: Address);
		"defeatFraudChallenge" => defeat_fraud_challenge, call_defeat_fraud_challenge, defeat_fraud_challenge_gas_estimate(
			wallet_public_key: Bytes,
			preimage: Bytes,
			witness: bool,
		);
		"defeatFraudChallengeWithHeartbeat" => defeat_fraud_challenge_with_heartbeat, call_defeat_fraud_challenge_with_heartbeat, defeat_fraud_challenge_with_heartbeat_gas_estimate(
			wallet_public_key: Bytes,
			heartbeat_message: Bytes,
		);
		"notifyMovingFundsBelowDust" => notify_moving_funds_below_dust, call_notify_moving_funds_below_dust, notify_moving_funds_below_dust_gas_estimate(
			wallet_pub_key_hash: WalletPubKeyHash,
			main_utxo: BitcoinTxUtxo,
		);
		"notifyWalletCloseable" => notify_wallet_closeable, call_notify_wallet_closeable, notify_wallet_closeable_gas_estimate(
			wallet_pub_key_hash: WalletPubKeyHash,
			wallet_main_utxo: BitcoinTxUtxo,
		);
		"notifyWalletClosingPeriodElapsed" => notify_wallet_closing_period_elapsed, call_notify_wallet_closing_period_elapsed, notify_wallet_closing_period_elapsed_gas_estimate(
			wallet_pub_key_hash: WalletPubKeyHash,
		);
		"renounceOwnership" => renounce_ownership, call_renounce_ownership, renounce_ownership_gas_estimate();
		"requestNewWallet" => request_new_wallet, call_request_new_wallet, request_new_wallet_gas_estimate(
			active_wallet_main_utxo: BitcoinTxUtxo,
		);
		"resetMovingFundsTimeout" => reset_moving_funds_timeout, call_reset_moving_funds_timeout, reset_moving_funds_timeout_gas_estimate(
			wallet_pub_key_hash: WalletPubKeyHash,
		);
		/// Proves a deposit sweep transaction to the Bridge.
		"submitDepositSweepProof" => submit_deposit_sweep_proof, call_submit_deposit_sweep_proof, submit_deposit_sweep_proof_gas_estimate(
			sweep_tx: BitcoinTxInfo,
			sweep_proof: BitcoinTxProof,
			main_utxo: BitcoinTxUtxo,
			vault: Address,
		);
		"submitMovedFundsSweepProof" => submit_moved_funds_sweep_proof, call_submit_moved_funds_sweep_proof, submit_moved_funds_sweep_proof_gas_estimate(
			sweep_tx: BitcoinTxInfo,
			sweep_proof: BitcoinTxProof,
			main_utxo: BitcoinTxUtxo,
		);
		"submitMovingFundsProof" => submit_moving_funds_proof, call_submit_moving_funds_proof, submit_moving_funds_proof_gas_estimate(
			moving_funds_tx: BitcoinTxInfo,
			moving_funds_proof: BitcoinTxProof,
			main_utxo: BitcoinTxUtxo,
			wallet_pub_key_hash: WalletPubKeyHash,
		);
		/// Proves a redemption transaction to the Bridge.
		"submitRedemptionProof" => submit_redemption_proof, call_submit_redemption_proof, submit_redemption_proof_gas_estimate(
			redemption_tx: BitcoinTxInfo,
			redemption_proof: BitcoinTxProof,
			main_utxo: BitcoinTxUtxo,
			wallet_pub_key_hash: WalletPubKeyHash,
		);
		"transferOwnership" => transfer_ownership, call_transfer_ownership, transfer_ownership_gas_estimate(new_owner: Address);
		"unauthorizeSpvMaintainer" => unauthorize_spv_maintainer, call_unauthorize_spv_maintainer, unauthorize_spv_maintainer_gas_estimate(
			maintainer_to_unauthorize: Address,
		);
		"unauthorizeWalletMaintainer" => unauthorize_wallet_maintainer, call_unauthorize_wallet_maintainer, unauthorize_wallet_maintainer_gas_estimate(
			maintainer_to_unauthorize: Address,
		);
		"updateBridge" => update_bridge, call_update_bridge, update_bridge_gas_estimate(bridge: Address);
		/// Sets the gas offsets added on top of the measured cost of every reimbursed operation.
		"updateGasOffsetParameters" => update_gas_offset_parameters, call_update_gas_offset_parameters, update_gas_offset_parameters_gas_estimate(
			new_submit_deposit_sweep_proof_gas_offset: U256,
			new_submit_redemption_proof_gas_offset: U256,
			new_reset_moving_funds_timeout_gas_offset: U256,
			new_submit_moving_funds_proof_gas_offset: U256,
			new_notify_moving_funds_below_dust_gas_offset: U256,
			new_submit_moved_funds_sweep_proof_gas_offset: U256,
			new_request_new_wallet_gas_offset: U256,
			new_notify_wallet_closeable_gas_offset: U256,
			new_notify_wallet_closing_period_elapsed_gas_offset: U256,
			new_defeat_fraud_challenge_gas_offset: U256,
			new_defeat_fraud_challenge_with_heartbeat_gas_offset: U256,
		);
		"updateReimbursementPool" => update_reimbursement_pool, call_update_reimbursement_pool, update_reimbursement_pool_gas_estimate(
			reimbursement_pool: Address,
		);
	}

	views! {
		"allSpvMaintainers" => all_spv_maintainers() -> Vec<Address>;
		"allWalletMaintainers" => all_wallet_maintainers() -> Vec<Address>;
		"bridge" => bridge() -> Address;
		"defeatFraudChallengeGasOffset" => defeat_fraud_challenge_gas_offset() -> U256;
		"defeatFraudChallengeWithHeartbeatGasOffset" => defeat_fraud_challenge_with_heartbeat_gas_offset() -> U256;
		/// One-based position of `maintainer` in the SPV maintainers list, zero if not authorized.
		"isSpvMaintainer" => is_spv_maintainer(maintainer: Address) -> U256;
		/// One-based position of `maintainer` in the wallet maintainers list, zero if not
		/// authorized.
		"isWalletMaintainer" => is_wallet_maintainer(maintainer: Address) -> U256;
		"notifyMovingFundsBelowDustGasOffset" => notify_moving_funds_below_dust_gas_offset() -> U256;
		"notifyWalletCloseableGasOffset" => notify_wallet_closeable_gas_offset() -> U256;
		"notifyWalletClosingPeriodElapsedGasOffset" => notify_wallet_closing_period_elapsed_gas_offset() -> U256;
		"owner" => owner() -> Address;
		"reimbursementPool" => reimbursement_pool() -> Address;
		"requestNewWalletGasOffset" => request_new_wallet_gas_offset() -> U256;
		"resetMovingFundsTimeoutGasOffset" => reset_moving_funds_timeout_gas_offset() -> U256;
		"spvMaintainers" => spv_maintainers(index: U256) -> Address;
		"submitDepositSweepProofGasOffset" => submit_deposit_sweep_proof_gas_offset() -> U256;
		"submitMovedFundsSweepProofGasOffset" => submit_moved_funds_sweep_proof_gas_offset() -> U256;
		"submitMovingFundsProofGasOffset" => submit_moving_funds_proof_gas_offset() -> U256;
		"submitRedemptionProofGasOffset" => submit_redemption_proof_gas_offset() -> U256;
		"walletMaintainers" => wallet_maintainers(index: U256) -> Address;
	}

	events! {
		BridgeUpdated => past_bridge_updated_events, bridge_updated_event();
		GasOffsetParametersUpdated => past_gas_offset_parameters_updated_events, gas_offset_parameters_updated_event();
		OwnershipTransferred => past_ownership_transferred_events, ownership_transferred_event(
			previous_owner: Address,
			new_owner: Address,
		);
		ReimbursementPoolUpdated => past_reimbursement_pool_updated_events, reimbursement_pool_updated_event();
		SpvMaintainerAuthorized => past_spv_maintainer_authorized_events, spv_maintainer_authorized_event(maintainer: Address);
		SpvMaintainerUnauthorized => past_spv_maintainer_unauthorized_events, spv_maintainer_unauthorized_event(maintainer: Address);
		WalletMaintainerAuthorized => past_wallet_maintainer_authorized_events, wallet_maintainer_authorized_event(maintainer: Address);
		WalletMaintainerUnauthorized => past_wallet_maintainer_unauthorized_events, wallet_maintainer_unauthorized_event(maintainer: Address);
	}
}
