use tbtc_primitives::types::{
	Address,
	BlockNumber,
	Bytes,
	RedemptionKey,
	VetoProposal,
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
		redemption_watchtower::*,
		topics,
		EventSubscription,
		SubscribeOptions,
	},
};

/// Proxy of the `RedemptionWatchtower` contract.
///
/// Guardians raise objections against redemption requests they consider unsafe. Enough
/// objections veto the redemption and ban the redeemer.
pub struct RedemptionWatchtower<C: ChainClient> {
	contract: ContractHandle<C>,
}

impl<C: ChainClient> Clone for RedemptionWatchtower<C> {
	fn clone(&self) -> Self {
		Self { contract: self.contract.clone() }
	}
}

impl<C: ChainClient> RedemptionWatchtower<C> {
	pub fn new(address: Address, abi: ethabi::Contract, context: &ChainContext<C>) -> Self {
		Self {
			contract: ContractHandle::new(
				ContractIdentifier::RedemptionWatchtower,
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
		"addGuardian" => add_guardian, call_add_guardian, add_guardian_gas_estimate(guardian: Address);
		"disableWatchtower" => disable_watchtower, call_disable_watchtower, disable_watchtower_gas_estimate();
		/// Enables the watchtower, naming its manager and first guardians.
		"enableWatchtower" => enable_watchtower, call_enable_watchtower, enable_watchtower_gas_estimate(
			manager: Address,
			guardians: Vec<Address>,
		);
		"initialize" => initialize, call_initialize, initialize_gas_estimate(bridge: Address);
		/// Objects to the pending redemption of `redeemer_output_script` from the given wallet.
		"raiseObjection" => raise_objection, call_raise_objection, raise_objection_gas_estimate(
			wallet_pub_key_hash: WalletPubKeyHash,
			redeemer_output_script: Bytes,
		);
		"removeGuardian" => remove_guardian, call_remove_guardian, remove_guardian_gas_estimate(guardian: Address);
		"renounceOwnership" => renounce_ownership, call_renounce_ownership, renounce_ownership_gas_estimate();
		"transferOwnership" => transfer_ownership, call_transfer_ownership, transfer_ownership_gas_estimate(new_owner: Address);
		"unban" => unban, call_unban, unban_gas_estimate(redeemer: Address);
		"updateWatchtowerParameters" => update_watchtower_parameters, call_update_watchtower_parameters, update_watchtower_parameters_gas_estimate(
			watchtower_lifetime: u32,
			veto_penalty_fee_divisor: u64,
			veto_freeze_period: u32,
			default_delay: u32,
			level_one_delay: u32,
			level_two_delay: u32,
			waived_amount_limit: u64,
		);
		/// Withdraws the funds of a finalized veto to the redeemer.
		"withdrawVetoedFunds" => withdraw_vetoed_funds, call_withdraw_vetoed_funds, withdraw_vetoed_funds_gas_estimate(
			redemption_key: RedemptionKey,
		);
	}

	views! {
		"bank" => bank() -> Address;
		"bridge" => bridge() -> Address;
		"defaultDelay" => default_delay() -> u32;
		/// Seconds the redemption has to wait, depending on the objections raised so far.
		"getRedemptionDelay" => get_redemption_delay(redemption_key: RedemptionKey) -> u32;
		"isBanned" => is_banned(redeemer: Address) -> bool;
		"isGuardian" => is_guardian(guardian: Address) -> bool;
		"isSafeRedemption" => is_safe_redemption(
			wallet_pub_key_hash: WalletPubKeyHash,
			redeemer_output_script: Bytes,
			balance_owner: Address,
			redeemer: Address,
		) -> bool;
		"levelOneDelay" => level_one_delay() -> u32;
		"levelTwoDelay" => level_two_delay() -> u32;
		"manager" => manager() -> Address;
		/// Whether the objection identified by `objection_key` was raised.
		"objections" => objections(objection_key: U256) -> bool;
		"owner" => owner() -> Address;
		"vetoFreezePeriod" => veto_freeze_period() -> u32;
		"vetoPenaltyFeeDivisor" => veto_penalty_fee_divisor() -> u64;
		"vetoProposals" => veto_proposals(redemption_key: RedemptionKey) -> VetoProposal;
		"waivedAmountLimit" => waived_amount_limit() -> u64;
		"watchtowerDisabledAt" => watchtower_disabled_at() -> u32;
		"watchtowerEnabledAt" => watchtower_enabled_at() -> u32;
		"watchtowerLifetime" => watchtower_lifetime() -> u32;
	}

	events! {
		Banned => past_banned_events, banned_event(redeemer: Address);
		GuardianAdded => past_guardian_added_events, guardian_added_event(guardian: Address);
		GuardianRemoved => past_guardian_removed_events, guardian_removed_event(guardian: Address);
		Initialized => past_initialized_events, initialized_event();
		ObjectionRaised => past_objection_raised_events, objection_raised_event(
			redemption_key: RedemptionKey,
			guardian: Address,
		);
		OwnershipTransferred => past_ownership_transferred_events, ownership_transferred_event(
			previous_owner: Address,
			new_owner: Address,
		);
		Unbanned => past_unbanned_events, unbanned_event(redeemer: Address);
		VetoFinalized => past_veto_finalized_events, veto_finalized_event(redemption_key: RedemptionKey);
		VetoPeriodCheckOmitted => past_veto_period_check_omitted_events, veto_period_check_omitted_event(
			redemption_key: RedemptionKey,
		);
		VetoedFundsWithdrawn => past_vetoed_funds_withdrawn_events, vetoed_funds_withdrawn_event(
			redemption_key: RedemptionKey,
			redeemer: Address,
		);
		WatchtowerDisabled => past_watchtower_disabled_events, watchtower_disabled_event();
		WatchtowerEnabled => past_watchtower_enabled_events, watchtower_enabled_event();
		WatchtowerParametersUpdated => past_watchtower_parameters_updated_events, watchtower_parameters_updated_event();
	}
}
