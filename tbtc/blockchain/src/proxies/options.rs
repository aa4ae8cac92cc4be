use tbtc_primitives::types::{
	GasLimit,
	GasPrice,
	U256,
};

/// Overrides applied to the default transactor options of a single submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionOptions {
	/// Gas limit; estimated when not set.
	pub gas_limit: Option<GasLimit>,
	/// Gas price; taken from `eth_gasPrice` when not set.
	pub gas_price: Option<GasPrice>,
	pub value: Option<U256>,
}

impl TransactionOptions {
	/// Returns `defaults` with the values set on `self` applied on top.
	pub fn apply(&self, defaults: &TransactionOptions) -> TransactionOptions {
		TransactionOptions {
			gas_limit: self.gas_limit.or(defaults.gas_limit),
			gas_price: self.gas_price.or(defaults.gas_price),
			value: self.value.or(defaults.value),
		}
	}
}
