use std::path::PathBuf;

use structopt::StructOpt;
use tbtc_primitives::{
	deserializers::parse_u256,
	types::BlockNumber,
};

use crate::commands::{
	MaintainerProxyCommand,
	RedemptionWatchtowerCommand,
	WalletCoordinatorCommand,
};

fn parse_block(value: &str) -> Result<BlockNumber, String> {
	let block = parse_u256(value)?;
	if block.bits() > 64 {
		return Err(format!("Block {} is out of range", value))
	}
	Ok(BlockNumber::from(block.low_u64()))
}

#[derive(StructOpt, Debug)]
#[structopt(name = "tbtc", about = "Interact with the tBTC contracts")]
pub struct Opt {
	/// JSON configuration of the Ethereum connection, account and contract addresses.
	#[structopt(short("c"), long, parse(from_os_str), takes_value = true)]
	pub config: Option<PathBuf>,

	/// RPC endpoint, overriding the configured one. `ws://` and `wss://` endpoints enable
	/// push subscriptions.
	#[structopt(long, takes_value = true)]
	pub eth_rpc_endpoint: Option<String>,

	/// Keystore file of the account, overriding the configured one.
	#[structopt(short("k"), long, parse(from_os_str), takes_value = true)]
	pub keystore_file: Option<PathBuf>,

	#[structopt(long, parse(from_os_str), takes_value = true)]
	pub password_file: Option<PathBuf>,

	/// Block at which calls are evaluated. Defaults to the latest block.
	#[structopt(short("b"), long, parse(try_from_str = parse_block), takes_value = true)]
	pub block: Option<BlockNumber>,

	/// Submit mutating commands to the chain instead of only checking them with a call.
	#[structopt(short("s"), long)]
	pub submit: bool,

	/// Raise the log level, can be repeated.
	#[structopt(short("v"), long, parse(from_occurrences))]
	pub verbose: u8,

	/// Log as JSON lines.
	#[structopt(long)]
	pub log_json: bool,

	#[structopt(subcommand)]
	pub cmd: Command,
}

impl Opt {
	pub fn flags(&self) -> Flags {
		Flags { block: self.block, submit: self.submit }
	}
}

/// Flags every contract command runs with.
#[derive(Clone, Copy, Debug)]
pub struct Flags {
	pub block: Option<BlockNumber>,
	pub submit: bool,
}

#[derive(StructOpt, Debug)]
pub enum Command {
	/// MaintainerProxy contract.
	MaintainerProxy(MaintainerProxyCommand),
	/// RedemptionWatchtower contract.
	RedemptionWatchtower(RedemptionWatchtowerCommand),
	/// WalletCoordinator contract.
	WalletCoordinator(WalletCoordinatorCommand),
}

#[cfg(test)]
mod tests {
	use tbtc_primitives::types::{
		Address,
		U256,
	};

	use super::*;
	use crate::args::AddressList;

	#[test]
	fn test_parse_transaction_command() {
		let opt = Opt::from_iter_safe(vec![
			"tbtc",
			"--submit",
			"wallet-coordinator",
			"add-coordinator",
			"0x0101010101010101010101010101010101010101",
		])
		.expect("Should parse");

		assert!(opt.flags().submit);
		assert!(matches!(
			opt.cmd,
			Command::WalletCoordinator(WalletCoordinatorCommand::AddCoordinator { .. })
		));
	}

	#[test]
	fn test_parse_view_command() {
		let opt = Opt::from_iter_safe(vec![
			"tbtc",
			"-b",
			"0x10",
			"-vv",
			"redemption-watchtower",
			"veto-proposals",
			"12",
		])
		.expect("Should parse");

		assert_eq!(opt.block, Some(BlockNumber::from(16u64)));
		assert_eq!(opt.verbose, 2);
		assert!(!opt.submit);
		assert!(matches!(
			opt.cmd,
			Command::RedemptionWatchtower(RedemptionWatchtowerCommand::VetoProposals { .. })
		));
	}

	#[test]
	fn test_parse_address_list_argument() {
		let opt = Opt::from_iter_safe(vec![
			"tbtc",
			"redemption-watchtower",
			"enable-watchtower",
			"0x0101010101010101010101010101010101010101",
			"0x0202020202020202020202020202020202020202,0x0303030303030303030303030303030303030303",
		])
		.expect("Should parse");

		match opt.cmd {
			Command::RedemptionWatchtower(RedemptionWatchtowerCommand::EnableWatchtower {
				manager,
				guardians,
			}) => {
				assert_eq!(manager, Address::repeat_byte(0x01));
				assert_eq!(
					guardians,
					AddressList(vec![Address::repeat_byte(0x02), Address::repeat_byte(0x03)])
				);
			},
			other => panic!("Unexpected command {:?}", other),
		}

		assert!(Opt::from_iter_safe(vec![
			"tbtc",
			"redemption-watchtower",
			"enable-watchtower",
			"0x0101010101010101010101010101010101010101",
			"0x0202020202020202020202020202020202020202",
			"0x0303030303030303030303030303030303030303",
		])
		.is_err());
	}

	#[test]
	fn test_parse_json_arguments() {
		let opt = Opt::from_iter_safe(vec![
			"tbtc",
			"wallet-coordinator",
			"validate-deposit-sweep-proposal",
			r#"{
				"walletPubKeyHash": "0x8db50eb52063ea9d98b3eac91489a90f738986f6",
				"depositsKeys": [{
					"fundingTxHash": "0x0101010101010101010101010101010101010101010101010101010101010101",
					"fundingOutputIndex": 0
				}],
				"sweepTxFee": "0x2710"
			}"#,
			r#"[{
				"fundingTx": {
					"version": "0x01000000",
					"inputVector": "0x01",
					"outputVector": "0x02",
					"locktime": "0x00000000"
				},
				"blindingFactor": "0xf9f0c90d00039523",
				"walletPubKeyHash": "0x8db50eb52063ea9d98b3eac91489a90f738986f6",
				"refundPubKeyHash": "0x28e081f285138ccbe389c1eb8985716230129f89",
				"refundLocktime": "0x60bcea61"
			}]"#,
		])
		.expect("Should parse");

		match opt.cmd {
			Command::WalletCoordinator(WalletCoordinatorCommand::ValidateDepositSweepProposal {
				proposal,
				deposits_extra_info,
			}) => {
				assert_eq!(proposal.deposits_keys.len(), 1);
				assert_eq!(proposal.sweep_tx_fee, U256::from(10_000));
				assert_eq!(deposits_extra_info.0.len(), 1);
				assert_eq!(deposits_extra_info.0[0].funding_tx.input_vector.0, vec![0x01]);
			},
			other => panic!("Unexpected command {:?}", other),
		}
	}

	#[test]
	fn test_parse_invalid_argument() {
		assert!(Opt::from_iter_safe(vec![
			"tbtc",
			"maintainer-proxy",
			"authorize-spv-maintainer",
			"not-an-address",
		])
		.is_err());
	}
}
