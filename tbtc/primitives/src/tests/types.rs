use std::str::FromStr;

use serde_json::json;
use web3::{
	contract::tokens::Tokenizable,
	ethabi::{
		self,
		Token,
	},
};

use crate::types::{
	Address,
	BitcoinTxUtxo,
	Bytes20,
	Bytes4,
	DepositKey,
	DepositSweepProposal,
	FixedBytesError,
	VetoProposal,
	WalletActionCause,
	WalletLock,
	H256,
	U256,
};

#[test]
fn test_fixed_bytes_parsing() {
	let hash = Bytes20::from_str("0x8db50eb52063ea9d98b3eac91489a90f738986f6").expect("Should parse");
	assert_eq!(hash.0[0], 0x8d);
	assert_eq!(hash.to_string(), "0x8db50eb52063ea9d98b3eac91489a90f738986f6");

	let without_prefix = Bytes20::from_str("8db50eb52063ea9d98b3eac91489a90f738986f6").expect("Should parse");
	assert_eq!(hash, without_prefix);

	assert_eq!(
		Bytes4::from_str("0x0102"),
		Err(FixedBytesError::InvalidLength { expected: 4, actual: 2 })
	);
	assert!(matches!(Bytes4::from_str("0xnothex"), Err(FixedBytesError::InvalidHex(_))));
}

#[test]
fn test_fixed_bytes_encode_right_padded() {
	let hash = Bytes20::from([0xffu8; 20]);
	let encoded = ethabi::encode(&[hash.into_token()]);

	assert_eq!(encoded.len(), 32);
	assert_eq!(&encoded[..20], &[0xffu8; 20][..]);
	assert_eq!(&encoded[20..], &[0u8; 12][..]);

	let address = Address::from([0xffu8; 20]);
	let encoded = ethabi::encode(&[address.into_token()]);
	assert_eq!(&encoded[..12], &[0u8; 12][..]);
}

#[test]
fn test_utxo_from_json_and_token() {
	let utxo: BitcoinTxUtxo = serde_json::from_value(json!({
		"txHash": "0x0000000000000000000000000000000000000000000000000000000000000001",
		"txOutputIndex": 3,
		"txOutputValue": 100000,
	}))
	.expect("Should deserialize");

	assert_eq!(utxo.tx_hash, H256::from_low_u64_be(1));
	assert_eq!(
		utxo.clone().into_token(),
		Token::Tuple(vec![
			Token::FixedBytes(H256::from_low_u64_be(1).as_bytes().to_vec()),
			Token::Uint(U256::from(3)),
			Token::Uint(U256::from(100000)),
		])
	);
	assert_eq!(BitcoinTxUtxo::from_token(utxo.clone().into_token()).expect("Should decode"), utxo);
}

#[test]
fn test_tuple_with_wrong_arity_is_rejected() {
	let token = Token::Tuple(vec![Token::Uint(U256::from(1))]);
	assert!(BitcoinTxUtxo::from_token(token).is_err());
	assert!(DepositKey::from_token(Token::Bool(true)).is_err());
}

#[test]
fn test_sweep_proposal_nested_array() {
	let proposal = DepositSweepProposal {
		wallet_pub_key_hash: Bytes20::from([1u8; 20]),
		deposits_keys: vec![
			DepositKey { funding_tx_hash: H256::from_low_u64_be(7), funding_output_index: 0 },
			DepositKey { funding_tx_hash: H256::from_low_u64_be(8), funding_output_index: 1 },
		],
		sweep_tx_fee: U256::from(5000),
	};

	match proposal.clone().into_token() {
		Token::Tuple(fields) => match &fields[1] {
			Token::Array(keys) => assert_eq!(keys.len(), 2),
			other => panic!("Unexpected token {:?}", other),
		},
		other => panic!("Unexpected token {:?}", other),
	}
	assert_eq!(DepositSweepProposal::from_token(proposal.clone().into_token()).unwrap(), proposal);
}

#[test]
fn test_veto_proposal_from_outputs() {
	let redeemer = Address::from_low_u64_be(9);
	let outputs = vec![
		Token::Address(redeemer),
		Token::Uint(U256::from(1_000_000)),
		Token::Uint(U256::from(0)),
		Token::Uint(U256::from(2)),
	];
	let proposal = VetoProposal::from_token(Token::Tuple(outputs)).expect("Should decode");

	assert_eq!(proposal.redeemer, redeemer);
	assert_eq!(proposal.objections_count, 2);
	assert!(!proposal.is_finalized());
}

#[test]
fn test_wallet_lock_cause() {
	let lock = WalletLock::from_token(Token::Tuple(vec![
		Token::Uint(U256::from(1_700_000_000u32)),
		Token::Uint(U256::from(2)),
	]))
	.expect("Should decode");
	assert_eq!(lock.cause, WalletActionCause::DepositSweep);
	assert!(lock.is_active(1_600_000_000));
	assert!(!lock.is_active(1_700_000_000));

	let unknown = WalletLock { expires_at: 0, cause: 9u8.into() };
	assert_eq!(unknown.cause, WalletActionCause::Unknown(9));
	assert_eq!(u8::from(unknown.cause), 9);
}

#[test]
fn test_fixed_bytes_error_messages() {
	let error = Bytes4::from_str("0x0102").expect_err("Should fail");
	assert_eq!(error.to_string(), "expected 4 bytes, got 2");

	let error = Bytes4::from_str("0xzz").expect_err("Should fail");
	assert!(error.to_string().starts_with("invalid hex string: "));

	let boxed: Box<dyn std::error::Error> = Box::new(error);
	assert!(boxed.source().is_none());
}
