use tbtc_primitives::types::{
	Address,
	H256,
	U64,
};
use web3::{
	contract::tokens::Tokenizable,
	types::{
		BlockNumber,
		Filter,
		FilterBuilder,
	},
};

/// Values accepted for each indexed parameter of an event, in declaration order.
///
/// An empty list matches any value.
pub type IndexedFilters = Vec<Vec<H256>>;

/// Encodes the accepted values of an indexed parameter as log topics.
pub fn topics<T: Tokenizable>(values: Vec<T>) -> Vec<H256> {
	values
		.into_iter()
		.map(|value| H256::from_slice(&ethabi::encode(&[value.into_token()])))
		.collect()
}

fn topic(values: Option<&Vec<H256>>) -> Option<Vec<H256>> {
	values.filter(|values| !values.is_empty()).cloned()
}

/// Builds the log filter of an event emitted by `address`.
///
/// Without a block range the filter is suitable for push subscriptions.
pub fn event_filter(
	address: Address,
	signature: H256,
	indexed: &IndexedFilters,
	from_block: Option<U64>,
	to_block: Option<U64>,
) -> Filter {
	let mut builder = FilterBuilder::default().address(vec![address]).topics(
		Some(vec![signature]),
		topic(indexed.get(0)),
		topic(indexed.get(1)),
		topic(indexed.get(2)),
	);
	if let Some(from_block) = from_block {
		builder = builder.from_block(BlockNumber::Number(from_block));
	}
	if let Some(to_block) = to_block {
		builder = builder.to_block(BlockNumber::Number(to_block));
	}
	builder.build()
}
