use std::collections::HashMap;

use derive_more::Display;
use ethabi::Contract;

use crate::errors::ContractDefError;

mod consts;

/// Identifies the contracts this crate talks to.
#[derive(Copy, Clone, Debug, Display, Eq, Hash, PartialEq)]
pub enum ContractIdentifier {
	MaintainerProxy,
	RedemptionWatchtower,
	WalletCoordinator,
}

impl ContractIdentifier {
	pub fn all() -> [ContractIdentifier; 3] {
		[Self::MaintainerProxy, Self::RedemptionWatchtower, Self::WalletCoordinator]
	}

	fn abi(&self) -> &'static str {
		match self {
			Self::MaintainerProxy => consts::MAINTAINER_PROXY,
			Self::RedemptionWatchtower => consts::REDEMPTION_WATCHTOWER,
			Self::WalletCoordinator => consts::WALLET_COORDINATOR,
		}
	}
}

/// Holds the parsed ABIs of the embedded contracts.
pub struct ContractsManager {
	contracts: HashMap<ContractIdentifier, Contract>,
}

impl ContractsManager {
	/// Parses the ABI of every known contract.
	pub fn new() -> Result<Self, ContractDefError> {
		let mut contracts = HashMap::new();
		for id in ContractIdentifier::all() {
			let contract = Contract::load(id.abi().as_bytes())?;
			contracts.insert(id, contract);
		}
		Ok(Self { contracts })
	}

	pub fn get(&self, id: ContractIdentifier) -> Result<Contract, ContractDefError> {
		self.contracts.get(&id).cloned().ok_or(ContractDefError::AbiNotFound(id))
	}
}
