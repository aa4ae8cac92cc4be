use tbtc_primitives::types::H256;
use web3::signing::Key;

use super::factories::private_key;
use crate::keys::{
	keccak256,
	KeyError,
	PrivateKey,
};

#[test]
fn test_keccak256() {
	assert_eq!(
		keccak256(b""),
		"c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
			.parse::<H256>()
			.expect("Valid hash")
	);
}

#[test]
fn test_invalid_raw_key() {
	assert!(matches!(PrivateKey::from_raw(&[0u8; 32]), Err(KeyError::InvalidKey(_))));
	assert!(matches!(PrivateKey::from_raw(&[1u8; 5]), Err(KeyError::InvalidKey(_))));
}

#[test]
fn test_sign_and_recover() {
	let key = private_key();
	let message = keccak256(b"heartbeat");

	let signature = key.sign_message(message.as_bytes()).expect("Should sign");
	let mut compact = signature.r.as_bytes().to_vec();
	compact.extend_from_slice(signature.s.as_bytes());

	let signer = PrivateKey::recover(message.as_bytes(), &compact, signature.v as i32)
		.expect("Should recover");
	assert_eq!(signer, key.address());
}

#[test]
fn test_sign_replay_protection() {
	let key = private_key();
	let message = keccak256(b"transaction");

	let legacy = key.sign(message.as_bytes(), None).expect("Should sign");
	assert!(legacy.v == 27 || legacy.v == 28);

	let protected = key.sign(message.as_bytes(), Some(1337)).expect("Should sign");
	assert_eq!(protected.v, legacy.v - 27 + 35 + 2 * 1337);
	assert_eq!(protected.r, legacy.r);
}

#[test]
fn test_debug_hides_secret() {
	let key = private_key();
	let debug = format!("{:?}", key);

	assert!(debug.contains(&format!("{:?}", key.address())));
	assert!(!debug.contains("1111111111"));
}

#[test]
fn test_missing_keyfile() {
	assert!(matches!(
		PrivateKey::from_keyfile("/does/not/exist.json", "password".to_owned()),
		Err(KeyError::Open(..))
	));
}
