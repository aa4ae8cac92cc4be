use serde::{
	Deserialize,
	Serialize,
};
use web3::{
	contract::{
		tokens::Tokenizable,
		Error,
	},
	ethabi::Token,
	types::Address,
};

use crate::tokens::TupleFields;

/// Veto state of a redemption request, as stored by the watchtower.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VetoProposal {
	pub redeemer: Address,
	pub withdrawable_amount: u64,
	pub finalized_at: u32,
	pub objections_count: u8,
}

impl VetoProposal {
	/// A veto is finalized once enough guardians objected, at which point `finalized_at` is set.
	pub fn is_finalized(&self) -> bool {
		self.finalized_at != 0
	}
}

impl Tokenizable for VetoProposal {
	fn from_token(token: Token) -> Result<Self, Error> {
		let mut fields = TupleFields::new(token, "RedemptionWatchtower.VetoProposal", 4)?;
		Ok(Self {
			redeemer: fields.next()?,
			withdrawable_amount: fields.next()?,
			finalized_at: fields.next()?,
			objections_count: fields.next()?,
		})
	}

	fn into_token(self) -> Token {
		Token::Tuple(vec![
			self.redeemer.into_token(),
			self.withdrawable_amount.into_token(),
			self.finalized_at.into_token(),
			self.objections_count.into_token(),
		])
	}
}
