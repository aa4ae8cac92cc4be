use tbtc_primitives::types::{
	Address,
	BlockNumber,
	Bytes,
	DepositExtraInfo,
	DepositSweepProposal,
	WalletLock,
	WalletPubKeyHash,
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
		topics,
		wallet_coordinator::*,
		EventSubscription,
		SubscribeOptions,
	},
};

/// Proxy of the `WalletCoordinator` contract, through which coordinators propose wallet
/// actions such as heartbeats and deposit sweeps.
pub struct WalletCoordinator<C: ChainClient> {
	contract: ContractHandle<C>,
}

impl<C: ChainClient> Clone for WalletCoordinator<C> {
	fn clone(&self) -> Self {
		Self { contract: self.contract.clone() }
	}
}

impl<C: ChainClient> WalletCoordinator<C> {
	pub fn new(address: Address, abi: ethabi::Contract, context: &ChainContext<C>) -> Self {
		Self {
			contract: ContractHandle::new(
				ContractIdentifier::WalletCoordinator,
				address,
				abi,
				context,
			),
		}
	}

	pub fn address(&self) -> Address {
		self.contract.address()
	}

	pub fn contract(&self) -> &ContractHandle<C> {
		&self.contract
	}

	transactions! {
		"addCoordinator" => add_coordinator, call_add_coordinator, add_coordinator_gas_estimate(coordinator: Address);
		"initialize" => initialize, call_initialize, initialize_gas_estimate(bridge: Address);
		"removeCoordinator" => remove_coordinator, call_remove_coordinator, remove_coordinator_gas_estimate(coordinator: Address);
		"renounceOwnership" => renounce_ownership, call_renounce_ownership, renounce_ownership_gas_estimate();
		/// Asks the wallet to sign `message` as a heartbeat.
		"requestHeartbeat" => request_heartbeat, call_request_heartbeat, request_heartbeat_gas_estimate(
			wallet_pub_key_hash: WalletPubKeyHash,
			message: Bytes,
		);
		"requestHeartbeatWithReimbursement" => request_heartbeat_with_reimbursement, call_request_heartbeat_with_reimbursement, request_heartbeat_with_reimbursement_gas_estimate(
			wallet_pub_key_hash: WalletPubKeyHash,
			message: Bytes,
		);
		/// Proposes a sweep of deposits and locks the wallet for the proposal validity.
		"submitDepositSweepProposal" => submit_deposit_sweep_proposal, call_submit_deposit_sweep_proposal, submit_deposit_sweep_proposal_gas_estimate(
			proposal: DepositSweepProposal,
		);
		"submitDepositSweepProposalWithReimbursement" => submit_deposit_sweep_proposal_with_reimbursement, call_submit_deposit_sweep_proposal_with_reimbursement, submit_deposit_sweep_proposal_with_reimbursement_gas_estimate(
			proposal: DepositSweepProposal,
		);
		"transferOwnership" => transfer_ownership, call_transfer_ownership, transfer_ownership_gas_estimate(new_owner: Address);
		"unlockWallet" => unlock_wallet, call_unlock_wallet, unlock_wallet_gas_estimate(wallet_pub_key_hash: WalletPubKeyHash);
		"updateDepositSweepProposalParameters" => update_deposit_sweep_proposal_parameters, call_update_deposit_sweep_proposal_parameters, update_deposit_sweep_proposal_parameters_gas_estimate(
			deposit_sweep_proposal_validity: u32,
			deposit_min_age: u32,
			deposit_refund_safety_margin: u32,
			deposit_sweep_max_size: u16,
			deposit_sweep_proposal_submission_gas_offset: u32,
		);
		"updateHeartbeatRequestParameters" => update_heartbeat_request_parameters, call_update_heartbeat_request_parameters, update_heartbeat_request_parameters_gas_estimate(
			heartbeat_request_validity: u32,
			heartbeat_request_gas_offset: u32,
		);
		"updateReimbursementPool" => update_reimbursement_pool, call_update_reimbursement_pool, update_reimbursement_pool_gas_estimate(
			reimbursement_pool: Address,
		);
	}

	views! {
		"bridge" => bridge() -> Address;
		"depositMinAge" => deposit_min_age() -> u32;
		"depositRefundSafetyMargin" => deposit_refund_safety_margin() -> u32;
		"depositSweepMaxSize" => deposit_sweep_max_size() -> u16;
		"depositSweepProposalSubmissionGasOffset" => deposit_sweep_proposal_submission_gas_offset() -> u32;
		"depositSweepProposalValidity" => deposit_sweep_proposal_validity() -> u32;
		"heartbeatRequestGasOffset" => heartbeat_request_gas_offset() -> u32;
		"heartbeatRequestValidity" => heartbeat_request_validity() -> u32;
		"isCoordinator" => is_coordinator(coordinator: Address) -> bool;
		"owner" => owner() -> Address;
		"reimbursementPool" => reimbursement_pool() -> Address;
		/// Checks the proposal against the Bridge state. An invalid proposal reverts with the
		/// reason, surfaced through the resolved error.
		"validateDepositSweepProposal" => validate_deposit_sweep_proposal(
			proposal: DepositSweepProposal,
			deposits_extra_info: Vec<DepositExtraInfo>,
		) -> bool;
		"walletLock" => wallet_lock(wallet_pub_key_hash: WalletPubKeyHash) -> WalletLock;
	}

	events! {
		CoordinatorAdded => past_coordinator_added_events, coordinator_added_event(coordinator: Address);
		CoordinatorRemoved => past_coordinator_removed_events, coordinator_removed_event(coordinator: Address);
		DepositSweepProposalParametersUpdated => past_deposit_sweep_proposal_parameters_updated_events, deposit_sweep_proposal_parameters_updated_event();
		DepositSweepProposalSubmitted => past_deposit_sweep_proposal_submitted_events, deposit_sweep_proposal_submitted_event(
			coordinator: Address,
		);
		HeartbeatRequestParametersUpdated => past_heartbeat_request_parameters_updated_events, heartbeat_request_parameters_updated_event();
		HeartbeatRequestSubmitted => past_heartbeat_request_submitted_events, heartbeat_request_submitted_event(
			coordinator: Address,
		);
		Initialized => past_initialized_events, initialized_event();
		OwnershipTransferred => past_ownership_transferred_events, ownership_transferred_event(
			previous_owner: Address,
			new_owner: Address,
		);
		ReimbursementPoolUpdated => past_reimbursement_pool_updated_events, reimbursement_pool_updated_event();
		WalletManuallyUnlocked => past_wallet_manually_unlocked_events, wallet_manually_unlocked_event(
			wallet_pub_key_hash: WalletPubKeyHash,
		);
	}
}
