use std::{
	fs::File,
	path::Path,
};

use ethsign::{
	KeyFile,
	Protected,
	SecretKey,
};
use tbtc_primitives::types::{
	Address,
	H256,
};
use thiserror::Error;
use tiny_keccak::{
	Hasher,
	Keccak,
};
use web3::signing::{
	self,
	Key,
	RecoveryError,
	Signature,
	SigningError,
};

#[derive(Error, Debug)]
pub enum KeyError {
	#[error("Could not open key file `{0}`: {1}")]
	Open(String, std::io::Error),
	#[error("Could not read key file `{0}`: {1}")]
	Read(String, serde_json::Error),
	#[error("Could not decrypt key file `{0}`")]
	Decrypt(String),
	#[error("Invalid secret key: {0}")]
	InvalidKey(String),
}

/// Signing key of the operator account.
#[derive(Clone)]
pub struct PrivateKey {
	inner: SecretKey,
}

impl PrivateKey {
	/// Decrypts a geth keystore file with the given password.
	pub fn from_keyfile<P: AsRef<Path>>(path: P, password: String) -> Result<Self, KeyError> {
		let filename = path.as_ref().display().to_string();
		let file = File::open(path.as_ref()).map_err(|e| KeyError::Open(filename.clone(), e))?;

		let key: KeyFile =
			serde_json::from_reader(file).map_err(|e| KeyError::Read(filename.clone(), e))?;

		let password: Protected = password.into();
		let plain = key.crypto.decrypt(&password).map_err(|_| KeyError::Decrypt(filename))?;

		Self::from_raw(&plain)
	}

	pub fn from_raw(secret: &[u8]) -> Result<Self, KeyError> {
		let inner =
			SecretKey::from_raw(secret).map_err(|e| KeyError::InvalidKey(format!("{:?}", e)))?;
		Ok(Self { inner })
	}

	/// Recovers the signer of a 32 byte message from a compact signature.
	pub fn recover(
		data: &[u8],
		signature: &[u8],
		recovery_id: i32,
	) -> Result<Address, RecoveryError> {
		signing::recover(data, signature, recovery_id)
	}
}

impl std::fmt::Debug for PrivateKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PrivateKey").field("address", &self.address()).finish()
	}
}

impl Key for PrivateKey {
	fn sign(&self, message: &[u8], chain_id: Option<u64>) -> Result<Signature, SigningError> {
		let signature = self.inner.sign(message).map_err(|_| SigningError::InvalidMessage)?;

		let standard_v = signature.v as u64;
		let v = match chain_id {
			Some(chain_id) => standard_v + 35 + chain_id * 2,
			None => standard_v + 27,
		};
		Ok(Signature { r: H256::from(signature.r), s: H256::from(signature.s), v })
	}

	fn sign_message(&self, message: &[u8]) -> Result<Signature, SigningError> {
		let signature = self.inner.sign(message).map_err(|_| SigningError::InvalidMessage)?;

		Ok(Signature {
			r: H256::from(signature.r),
			s: H256::from(signature.s),
			v: signature.v as u64,
		})
	}

	fn address(&self) -> Address {
		Address::from(self.inner.public().address())
	}
}

/// Keccak-256 of the given bytes.
pub fn keccak256(data: &[u8]) -> H256 {
	let mut keccak = Keccak::v256();
	let mut result = [0u8; 32];
	keccak.update(data);
	keccak.finalize(&mut result);
	H256::from(result)
}
