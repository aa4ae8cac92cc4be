//! Events emitted by the `WalletCoordinator` contract.
use tbtc_macros::ContractEvent;
use tbtc_primitives::types::{
	Address,
	Bytes,
	DepositSweepProposal,
	WalletPubKeyHash,
};

use super::{
	ContractEvent,
	Event,
	EventError,
	EventMetadata,
};

#[derive(Clone, Debug, ContractEvent)]
pub struct CoordinatorAdded {
	pub coordinator: Address,
	pub meta: EventMetadata,
}

#[derive(Clone, Debug, ContractEvent)]
pub struct CoordinatorRemoved {
	pub coordinator: Address,
	pub meta: EventMetadata,
}

#[derive(Clone, Debug, ContractEvent)]
pub struct DepositSweepProposalParametersUpdated {
	pub deposit_sweep_proposal_validity: u32,
	pub deposit_min_age: u32,
	pub deposit_refund_safety_margin: u32,
	pub deposit_sweep_max_size: u16,
	pub deposit_sweep_proposal_submission_gas_offset: u32,
	pub meta: EventMetadata,
}

#[derive(Clone, Debug, ContractEvent)]
pub struct DepositSweepProposalSubmitted {
	pub proposal: DepositSweepProposal,
	pub coordinator: Address,
	pub meta: EventMetadata,
}

#[derive(Clone, Debug, ContractEvent)]
pub struct HeartbeatRequestParametersUpdated {
	pub heartbeat_request_validity: u32,
	pub heartbeat_request_gas_offset: u32,
	pub meta: EventMetadata,
}

#[derive(Clone, Debug, ContractEvent)]
pub struct HeartbeatRequestSubmitted {
	pub wallet_pub_key_hash: WalletPubKeyHash,
	pub message: Bytes,
	pub coordinator: Address,
	pub meta: EventMetadata,
}

#[derive(Clone, Debug, ContractEvent)]
pub struct Initialized {
	pub version: u8,
	pub meta: EventMetadata,
}

#[derive(Clone, Debug, ContractEvent)]
pub struct OwnershipTransferred {
	pub previous_owner: Address,
	pub new_owner: Address,
	pub meta: EventMetadata,
}

#[derive(Clone, Debug, ContractEvent)]
pub struct ReimbursementPoolUpdated {
	pub new_reimbursement_pool: Address,
	pub meta: EventMetadata,
}

#[derive(Clone, Debug, ContractEvent)]
pub struct WalletManuallyUnlocked {
	pub wallet_pub_key_hash: WalletPubKeyHash,
	pub meta: EventMetadata,
}
