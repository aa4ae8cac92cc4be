pub(crate) const MAINTAINER_PROXY: &str =
	include_str!("../../resources/contracts/MaintainerProxy.json");
pub(crate) const REDEMPTION_WATCHTOWER: &str =
	include_str!("../../resources/contracts/RedemptionWatchtower.json");
pub(crate) const WALLET_COORDINATOR: &str =
	include_str!("../../resources/contracts/WalletCoordinator.json");
