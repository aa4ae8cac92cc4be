use web3::types::U256;

/// Number of wei in one gwei.
pub const GWEI: u64 = 1_000_000_000;

/// Selector of the standard `Error(string)` revert payload.
pub const ERROR_STRING_SELECTOR: [u8; 4] = [0x08, 0xc3, 0x79, 0xa0];

/// Returns the given amount of gwei expressed in wei.
pub fn gwei(amount: u64) -> U256 {
	U256::from(amount) * U256::from(GWEI)
}
