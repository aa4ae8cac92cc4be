//! Events emitted by the `RedemptionWatchtower` contract.
use tbtc_macros::ContractEvent;
use tbtc_primitives::types::{
	Address,
	RedemptionKey,
};

use super::{
	ContractEvent,
	Event,
	EventError,
	EventMetadata,
};

#[derive(Clone, Debug, ContractEvent)]
pub struct Banned {
	pub redeemer: Address,
	pub meta: EventMetadata,
}

#[derive(Clone, Debug, ContractEvent)]
pub struct GuardianAdded {
	pub guardian: Address,
	pub meta: EventMetadata,
}

#[derive(Clone, Debug, ContractEvent)]
pub struct GuardianRemoved {
	pub guardian: Address,
	pub meta: EventMetadata,
}

#[derive(Clone, Debug, ContractEvent)]
pub struct Initialized {
	pub version: u8,
	pub meta: EventMetadata,
}

/// A guardian objected to a pending redemption.
#[derive(Clone, Debug, ContractEvent)]
pub struct ObjectionRaised {
	pub redemption_key: RedemptionKey,
	pub guardian: Address,
	pub meta: EventMetadata,
}

#[derive(Clone, Debug, ContractEvent)]
pub struct OwnershipTransferred {
	pub previous_owner: Address,
	pub new_owner: Address,
	pub meta: EventMetadata,
}

#[derive(Clone, Debug, ContractEvent)]
pub struct Unbanned {
	pub redeemer: Address,
	pub meta: EventMetadata,
}

#[derive(Clone, Debug, ContractEvent)]
pub struct VetoFinalized {
	pub redemption_key: RedemptionKey,
	pub meta: EventMetadata,
}

#[derive(Clone, Debug, ContractEvent)]
pub struct VetoPeriodCheckOmitted {
	pub redemption_key: RedemptionKey,
	pub meta: EventMetadata,
}

#[derive(Clone, Debug, ContractEvent)]
pub struct VetoedFundsWithdrawn {
	pub redemption_key: RedemptionKey,
	pub redeemer: Address,
	pub amount: u64,
	pub meta: EventMetadata,
}

#[derive(Clone, Debug, ContractEvent)]
pub struct WatchtowerDisabled {
	pub disabled_at: u32,
	pub executor: Address,
	pub meta: EventMetadata,
}

#[derive(Clone, Debug, ContractEvent)]
pub struct WatchtowerEnabled {
	pub enabled_at: u32,
	pub manager: Address,
	pub meta: EventMetadata,
}

#[derive(Clone, Debug, ContractEvent)]
pub struct WatchtowerParametersUpdated {
	pub watchtower_lifetime: u32,
	pub veto_penalty_fee_divisor: u64,
	pub veto_freeze_period: u32,
	pub default_delay: u32,
	pub level_one_delay: u32,
	pub level_two_delay: u32,
	pub waived_amount_limit: u64,
	pub meta: EventMetadata,
}
