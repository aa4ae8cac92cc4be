use std::fmt::Debug;

use structopt::StructOpt;
use tbtc_blockchain::{
	client::ChainClient,
	proxies::{
		MaintainerProxy,
		ProxyError,
		RedemptionWatchtower,
		SubmittedTransaction,
		WalletCoordinator,
	},
};
use tbtc_primitives::types::{
	Address,
	BitcoinTxInfo,
	BitcoinTxProof,
	BitcoinTxUtxo,
	Bytes,
	DepositExtraInfo,
	DepositSweepProposal,
	RedemptionKey,
	WalletPubKeyHash,
	U256,
};

use crate::{
	args::{
		parse_arg,
		AddressList,
		JsonList,
	},
	cli::Flags,
};

fn print_submitted(transaction: &SubmittedTransaction) {
	println!("{:?}", transaction.hash);
}

fn print_not_submitted() {
	println!("success");
	println!("the transaction was not submitted to the chain; please add the `--submit` flag");
}

fn print_result<T: Debug>(result: T) {
	println!("{:#?}", result);
}

/// Generates the subcommands of one contract and their dispatch.
///
/// Mutating methods are checked with a call unless `--submit` is given, views print their
/// result.
macro_rules! contract_commands {
	(
		$(#[$meta:meta])*
		$command:ident => $proxy:ident {
			transactions {
				$( $(#[$tmeta:meta])* $tx:ident => $submit:ident, $call:ident ($($targ:ident: $tty:ty),* $(,)?); )*
			}
			views {
				$( $(#[$vmeta:meta])* $view:ident => $getter:ident ($($varg:ident: $vty:ty),* $(,)?); )*
			}
		}
	) => {
		$(#[$meta])*
		#[derive(StructOpt, Debug)]
		pub enum $command {
			$(
				$(#[$tmeta])*
				$tx {
					$( #[structopt(parse(try_from_str = parse_arg))] $targ: $tty, )*
				},
			)*
			$(
				$(#[$vmeta])*
				$view {
					$( #[structopt(parse(try_from_str = parse_arg))] $varg: $vty, )*
				},
			)*
		}

		impl $command {
			pub async fn run<C: ChainClient>(
				self,
				proxy: &$proxy<C>,
				flags: Flags,
			) -> Result<(), ProxyError> {
				match self {
					$(
						Self::$tx { $($targ),* } => {
							if flags.submit {
								let transaction = proxy.$submit($($targ.into(),)* None).await?;
								print_submitted(&transaction);
							} else {
								proxy.$call($($targ.into(),)* flags.block).await?;
								print_not_submitted();
							}
						},
					)*
					$(
						Self::$view { $($varg),* } => {
							print_result(proxy.$getter($($varg.into(),)* flags.block).await?);
						},
					)*
				}
				Ok(())
			}
		}
	};
}

contract_commands! {
	/// Commands of the MaintainerProxy contract.
	MaintainerProxyCommand => MaintainerProxy {
		transactions {
			AuthorizeSpvMaintainer => authorize_spv_maintainer, call_authorize_spv_maintainer(maintainer: Address);
			AuthorizeWalletMaintainer => authorize_wallet_maintainer, call_authorize_wallet_maintainer(maintainer: Address);
			DefeatFraudChallenge => defeat_fraud_challenge, call_defeat_fraud_challenge(
				wallet_public_key: Bytes,
				preimage: Bytes,
				witness: bool,
			);
			DefeatFraudChallengeWithHeartbeat => defeat_fraud_challenge_with_heartbeat, call_defeat_fraud_challenge_with_heartbeat(
				wallet_public_key: Bytes,
				heartbeat_message: Bytes,
			);
			NotifyMovingFundsBelowDust => notify_moving_funds_below_dust, call_notify_moving_funds_below_dust(
				wallet_pub_key_hash: WalletPubKeyHash,
				main_utxo: BitcoinTxUtxo,
			);
			NotifyWalletCloseable => notify_wallet_closeable, call_notify_wallet_closeable(
				wallet_pub_key_hash: WalletPubKeyHash,
				wallet_main_utxo: BitcoinTxUtxo,
			);
			NotifyWalletClosingPeriodElapsed => notify_wallet_closing_period_elapsed, call_notify_wallet_closing_period_elapsed(
				wallet_pub_key_hash: WalletPubKeyHash,
			);
			RenounceOwnership => renounce_ownership, call_renounce_ownership();
			RequestNewWallet => request_new_wallet, call_request_new_wallet(active_wallet_main_utxo: BitcoinTxUtxo);
			ResetMovingFundsTimeout => reset_moving_funds_timeout, call_reset_moving_funds_timeout(
				wallet_pub_key_hash: WalletPubKeyHash,
			);
			SubmitDepositSweepProof => submit_deposit_sweep_proof, call_submit_deposit_sweep_proof(
				sweep_tx: BitcoinTxInfo,
				sweep_proof: BitcoinTxProof,
				main_utxo: BitcoinTxUtxo,
				vault: Address,
			);
			SubmitMovedFundsSweepProof => submit_moved_funds_sweep_proof, call_submit_moved_funds_sweep_proof(
				sweep_tx: BitcoinTxInfo,
				sweep_proof: BitcoinTxProof,
				main_utxo: BitcoinTxUtxo,
			);
			SubmitMovingFundsProof => submit_moving_funds_proof, call_submit_moving_funds_proof(
				moving_funds_tx: BitcoinTxInfo,
				moving_funds_proof: BitcoinTxProof,
				main_utxo: BitcoinTxUtxo,
				wallet_pub_key_hash: WalletPubKeyHash,
			);
			SubmitRedemptionProof => submit_redemption_proof, call_submit_redemption_proof(
				redemption_tx: BitcoinTxInfo,
				redemption_proof: BitcoinTxProof,
				main_utxo: BitcoinTxUtxo,
				wallet_pub_key_hash: WalletPubKeyHash,
			);
			TransferOwnership => transfer_ownership, call_transfer_ownership(new_owner: Address);
			UnauthorizeSpvMaintainer => unauthorize_spv_maintainer, call_unauthorize_spv_maintainer(
				maintainer_to_unauthorize: Address,
			);
			UnauthorizeWalletMaintainer => unauthorize_wallet_maintainer, call_unauthorize_wallet_maintainer(
				maintainer_to_unauthorize: Address,
			);
			UpdateBridge => update_bridge, call_update_bridge(bridge: Address);
			UpdateGasOffsetParameters => update_gas_offset_parameters, call_update_gas_offset_parameters(
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
			UpdateReimbursementPool => update_reimbursement_pool, call_update_reimbursement_pool(reimbursement_pool: Address);
		}
		views {
			AllSpvMaintainers => all_spv_maintainers();
			AllWalletMaintainers => all_wallet_maintainers();
			Bridge => bridge();
			DefeatFraudChallengeGasOffset => defeat_fraud_challenge_gas_offset();
			DefeatFraudChallengeWithHeartbeatGasOffset => defeat_fraud_challenge_with_heartbeat_gas_offset();
			IsSpvMaintainer => is_spv_maintainer(maintainer: Address);
			IsWalletMaintainer => is_wallet_maintainer(maintainer: Address);
			NotifyMovingFundsBelowDustGasOffset => notify_moving_funds_below_dust_gas_offset();
			NotifyWalletCloseableGasOffset => notify_wallet_closeable_gas_offset();
			NotifyWalletClosingPeriodElapsedGasOffset => notify_wallet_closing_period_elapsed_gas_offset();
			Owner => owner();
			ReimbursementPool => reimbursement_pool();
			RequestNewWalletGasOffset => request_new_wallet_gas_offset();
			ResetMovingFundsTimeoutGasOffset => reset_moving_funds_timeout_gas_offset();
			SpvMaintainers => spv_maintainers(index: U256);
			SubmitDepositSweepProofGasOffset => submit_deposit_sweep_proof_gas_offset();
			SubmitMovedFundsSweepProofGasOffset => submit_moved_funds_sweep_proof_gas_offset();
			SubmitMovingFundsProofGasOffset => submit_moving_funds_proof_gas_offset();
			SubmitRedemptionProofGasOffset => submit_redemption_proof_gas_offset();
			WalletMaintainers => wallet_maintainers(index: U256);
		}
	}
}

contract_commands! {
	/// Commands of the RedemptionWatchtower contract.
	RedemptionWatchtowerCommand => RedemptionWatchtower {
		transactions {
			AddGuardian => add_guardian, call_add_guardian(guardian: Address);
			DisableWatchtower => disable_watchtower, call_disable_watchtower();
			/// Guardians are given as a comma separated list.
			EnableWatchtower => enable_watchtower, call_enable_watchtower(manager: Address, guardians: AddressList);
			Initialize => initialize, call_initialize(bridge: Address);
			RaiseObjection => raise_objection, call_raise_objection(
				wallet_pub_key_hash: WalletPubKeyHash,
				redeemer_output_script: Bytes,
			);
			RemoveGuardian => remove_guardian, call_remove_guardian(guardian: Address);
			RenounceOwnership => renounce_ownership, call_renounce_ownership();
			TransferOwnership => transfer_ownership, call_transfer_ownership(new_owner: Address);
			Unban => unban, call_unban(redeemer: Address);
			UpdateWatchtowerParameters => update_watchtower_parameters, call_update_watchtower_parameters(
				watchtower_lifetime: u32,
				veto_penalty_fee_divisor: u64,
				veto_freeze_period: u32,
				default_delay: u32,
				level_one_delay: u32,
				level_two_delay: u32,
				waived_amount_limit: u64,
			);
			WithdrawVetoedFunds => withdraw_vetoed_funds, call_withdraw_vetoed_funds(redemption_key: RedemptionKey);
		}
		views {
			Bank => bank();
			Bridge => bridge();
			DefaultDelay => default_delay();
			GetRedemptionDelay => get_redemption_delay(redemption_key: RedemptionKey);
			IsBanned => is_banned(redeemer: Address);
			IsGuardian => is_guardian(guardian: Address);
			IsSafeRedemption => is_safe_redemption(
				wallet_pub_key_hash: WalletPubKeyHash,
				redeemer_output_script: Bytes,
				balance_owner: Address,
				redeemer: Address,
			);
			LevelOneDelay => level_one_delay();
			LevelTwoDelay => level_two_delay();
			Manager => manager();
			Objections => objections(objection_key: U256);
			Owner => owner();
			VetoFreezePeriod => veto_freeze_period();
			VetoPenaltyFeeDivisor => veto_penalty_fee_divisor();
			VetoProposals => veto_proposals(redemption_key: RedemptionKey);
			WaivedAmountLimit => waived_amount_limit();
			WatchtowerDisabledAt => watchtower_disabled_at();
			WatchtowerEnabledAt => watchtower_enabled_at();
			WatchtowerLifetime => watchtower_lifetime();
		}
	}
}

contract_commands! {
	/// Commands of the WalletCoordinator contract.
	WalletCoordinatorCommand => WalletCoordinator {
		transactions {
			AddCoordinator => add_coordinator, call_add_coordinator(coordinator: Address);
			Initialize => initialize, call_initialize(bridge: Address);
			RemoveCoordinator => remove_coordinator, call_remove_coordinator(coordinator: Address);
			RenounceOwnership => renounce_ownership, call_renounce_ownership();
			RequestHeartbeat => request_heartbeat, call_request_heartbeat(
				wallet_pub_key_hash: WalletPubKeyHash,
				message: Bytes,
			);
			RequestHeartbeatWithReimbursement => request_heartbeat_with_reimbursement, call_request_heartbeat_with_reimbursement(
				wallet_pub_key_hash: WalletPubKeyHash,
				message: Bytes,
			);
			SubmitDepositSweepProposal => submit_deposit_sweep_proposal, call_submit_deposit_sweep_proposal(
				proposal: DepositSweepProposal,
			);
			SubmitDepositSweepProposalWithReimbursement => submit_deposit_sweep_proposal_with_reimbursement, call_submit_deposit_sweep_proposal_with_reimbursement(
				proposal: DepositSweepProposal,
			);
			TransferOwnership => transfer_ownership, call_transfer_ownership(new_owner: Address);
			UnlockWallet => unlock_wallet, call_unlock_wallet(wallet_pub_key_hash: WalletPubKeyHash);
			UpdateDepositSweepProposalParameters => update_deposit_sweep_proposal_parameters, call_update_deposit_sweep_proposal_parameters(
				deposit_sweep_proposal_validity: u32,
				deposit_min_age: u32,
				deposit_refund_safety_margin: u32,
				deposit_sweep_max_size: u16,
				deposit_sweep_proposal_submission_gas_offset: u32,
			);
			UpdateHeartbeatRequestParameters => update_heartbeat_request_parameters, call_update_heartbeat_request_parameters(
				heartbeat_request_validity: u32,
				heartbeat_request_gas_offset: u32,
			);
			UpdateReimbursementPool => update_reimbursement_pool, call_update_reimbursement_pool(reimbursement_pool: Address);
		}
		views {
			Bridge => bridge();
			DepositMinAge => deposit_min_age();
			DepositRefundSafetyMargin => deposit_refund_safety_margin();
			DepositSweepMaxSize => deposit_sweep_max_size();
			DepositSweepProposalSubmissionGasOffset => deposit_sweep_proposal_submission_gas_offset();
			DepositSweepProposalValidity => deposit_sweep_proposal_validity();
			HeartbeatRequestGasOffset => heartbeat_request_gas_offset();
			HeartbeatRequestValidity => heartbeat_request_validity();
			IsCoordinator => is_coordinator(coordinator: Address);
			Owner => owner();
			ReimbursementPool => reimbursement_pool();
			/// Extra deposit data is given as a JSON array.
			ValidateDepositSweepProposal => validate_deposit_sweep_proposal(
				proposal: DepositSweepProposal,
				deposits_extra_info: JsonList<DepositExtraInfo>,
			);
			WalletLock => wallet_lock(wallet_pub_key_hash: WalletPubKeyHash);
		}
	}
}
