#[macro_use]
mod macros;

mod common;
mod contract;
mod error;
mod maintainer_proxy;
mod manager;
mod options;
mod redemption_watchtower;
mod wallet_coordinator;

pub use common::*;
pub use contract::*;
pub use error::*;
pub use maintainer_proxy::*;
pub use manager::*;
pub use options::*;
pub use redemption_watchtower::*;
pub use wallet_coordinator::*;
