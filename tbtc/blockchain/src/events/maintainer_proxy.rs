//! Events emitted by the `MaintainerProxy` contract.
use tbtc_macros::ContractEvent;
use tbtc_primitives::types::{
	Address,
	U256,
};

use super::{
	ContractEvent,
	Event,
	EventError,
	EventMetadata,
};

#[derive(Clone, Debug, ContractEvent)]
pub struct BridgeUpdated {
	pub new_bridge: Address,
	pub meta: EventMetadata,
}

#[derive(Clone, Debug, ContractEvent)]
pub struct GasOffsetParametersUpdated {
	pub submit_deposit_sweep_proof_gas_offset: U256,
	pub submit_redemption_proof_gas_offset: U256,
	pub reset_moving_funds_timeout_gas_offset: U256,
	pub submit_moving_funds_proof_gas_offset: U256,
	pub notify_moving_funds_below_dust_gas_offset: U256,
	pub submit_moved_funds_sweep_proof_gas_offset: U256,
	pub request_new_wallet_gas_offset: U256,
	pub notify_wallet_closeable_gas_offset: U256,
	pub notify_wallet_closing_period_elapsed_gas_offset: U256,
	pub defeat_fraud_challenge_gas_offset: U256,
	pub defeat_fraud_challenge_with_heartbeat_gas_offset: U256,
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
pub struct SpvMaintainerAuthorized {
	pub maintainer: Address,
	pub meta: EventMetadata,
}

#[derive(Clone, Debug, ContractEvent)]
pub struct SpvMaintainerUnauthorized {
	pub maintainer: Address,
	pub meta: EventMetadata,
}

#[derive(Clone, Debug, ContractEvent)]
pub struct WalletMaintainerAuthorized {
	pub maintainer: Address,
	pub meta: EventMetadata,
}

#[derive(Clone, Debug, ContractEvent)]
pub struct WalletMaintainerUnauthorized {
	pub maintainer: Address,
	pub meta: EventMetadata,
}
