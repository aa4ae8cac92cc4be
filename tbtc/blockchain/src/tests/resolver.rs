use ethabi::Token;
use tbtc_primitives::types::{
	Address,
	Bytes,
	U256,
};

use super::factories::{
	abi,
	contract_address,
	revert_payload,
	FakeClient,
};
use crate::{
	contracts::ContractIdentifier,
	resolver::{
		decode_reason,
		ErrorResolver,
		ResolvedError,
	},
};

fn resolver(client: std::sync::Arc<FakeClient>) -> ErrorResolver<FakeClient> {
	ErrorResolver::new(client, abi(ContractIdentifier::WalletCoordinator), contract_address())
}

fn add_coordinator_params() -> Vec<Token> {
	vec![Token::Address(Address::repeat_byte(0x01))]
}

#[tokio::test]
async fn test_resolve_revert_reason() {
	let client = FakeClient::new();
	client.with(|state| state.call_results.push_back(Ok(revert_payload("Caller is not the owner"))));

	let from = Address::repeat_byte(0x02);
	let resolved = resolver(client.clone())
		.resolve_error(
			"execution reverted",
			from,
			Some(U256::from(5u64)),
			"addCoordinator",
			&add_coordinator_params(),
		)
		.await;

	assert_eq!(
		resolved,
		ResolvedError::Reverted {
			original: "execution reverted".to_owned(),
			reason: "Caller is not the owner".to_owned(),
		}
	);
	assert_eq!(
		resolved.to_string(),
		"original error [execution reverted], revert reason [Caller is not the owner]"
	);

	client.with(|state| {
		assert_eq!(state.calls.len(), 1);
		let (request, block) = &state.calls[0];
		assert_eq!(request.from, Some(from));
		assert_eq!(request.to, Some(contract_address()));
		assert_eq!(request.value, Some(U256::from(5u64)));
		assert!(block.is_none());

		let selector = abi(ContractIdentifier::WalletCoordinator)
			.function("addCoordinator")
			.expect("addCoordinator exists")
			.short_signature();
		let data = request.data.as_ref().expect("call data");
		assert_eq!(&data.0[..4], &selector[..]);
	});
}

#[tokio::test]
async fn test_resolve_call_failure() {
	let client = FakeClient::new();
	client.with(|state| state.call_results.push_back(Err("connection reset".to_owned())));

	let resolved = resolver(client)
		.resolve_error("nonce too low", Address::zero(), None, "addCoordinator", &add_coordinator_params())
		.await;

	match resolved {
		ResolvedError::CallFailed { original, error } => {
			assert_eq!(original, "nonce too low");
			assert!(error.contains("connection reset"));
		},
		other => panic!("Unexpected resolution {:?}", other),
	}
}

#[tokio::test]
async fn test_resolve_unknown_method() {
	let client = FakeClient::new();

	let resolved = resolver(client.clone())
		.resolve_error("failed", Address::zero(), None, "doesNotExist", &[])
		.await;

	assert!(matches!(resolved, ResolvedError::EncodingFailed { .. }));
	client.with(|state| assert!(state.calls.is_empty()));
}

#[tokio::test]
async fn test_resolve_short_response() {
	let client = FakeClient::new();
	client.with(|state| state.call_results.push_back(Ok(Bytes(vec![0x08, 0xc3]))));

	let resolved = resolver(client)
		.resolve_error("failed", Address::zero(), None, "addCoordinator", &add_coordinator_params())
		.await;

	assert_eq!(
		resolved,
		ResolvedError::ShortResponse { original: "failed".to_owned(), response: Bytes(vec![0x08, 0xc3]) }
	);
	assert!(resolved.to_string().contains("was not long enough to hold an error"));
}

#[tokio::test]
async fn test_resolve_unknown_selector() {
	let client = FakeClient::new();
	let response = Bytes(vec![0x4e, 0x48, 0x7b, 0x71, 0x00]);
	client.with(|state| state.call_results.push_back(Ok(response.clone())));

	let resolved = resolver(client)
		.resolve_error("failed", Address::zero(), None, "addCoordinator", &add_coordinator_params())
		.await;

	assert_eq!(
		resolved,
		ResolvedError::UnknownSelector {
			original: "failed".to_owned(),
			selector: "0x4e487b71".to_owned(),
			response,
		}
	);
}

#[tokio::test]
async fn test_resolve_malformed_reason() {
	let client = FakeClient::new();
	let mut payload = revert_payload("Some reason").0;
	payload.truncate(4 + 32 + 16);
	client.with(|state| state.call_results.push_back(Ok(Bytes(payload))));

	let resolved = resolver(client)
		.resolve_error("failed", Address::zero(), None, "addCoordinator", &add_coordinator_params())
		.await;

	assert!(matches!(resolved, ResolvedError::MalformedReason { .. }));
}

#[test]
fn test_decode_reason() {
	let payload = ethabi::encode(&[Token::String("Not enough objections".to_owned())]);
	assert_eq!(decode_reason(&payload), Ok("Not enough objections".to_owned()));

	let empty = ethabi::encode(&[Token::String(String::new())]);
	assert_eq!(decode_reason(&empty), Ok(String::new()));
}

#[test]
fn test_decode_reason_offset_out_of_bounds() {
	let mut payload = ethabi::encode(&[Token::String("reason".to_owned())]);
	payload[31] = 0xff;

	let error = decode_reason(&payload).expect_err("Offset is past the payload");
	assert!(error.contains("would go over slice boundary"));
}

#[test]
fn test_decode_reason_length_insufficient() {
	let mut payload = ethabi::encode(&[Token::String("reason".to_owned())]);
	payload[63] = 0x40;

	let error = decode_reason(&payload).expect_err("String is longer than the payload");
	assert!(error.contains("length insufficient"));

	let error = decode_reason(&[0u8; 16]).expect_err("No offset word");
	assert!(error.contains("length insufficient"));
}
