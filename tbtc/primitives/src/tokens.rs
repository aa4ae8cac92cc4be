use std::vec::IntoIter;

use web3::{
	contract::{
		tokens::Tokenizable,
		Error,
	},
	ethabi::Token,
};

/// Sequential reader over the members of an ABI tuple.
pub struct TupleFields {
	/// Name of the struct being decoded, used in error messages.
	name: &'static str,
	/// Remaining tuple members.
	fields: IntoIter<Token>,
}

impl TupleFields {
	/// Unwraps a `Token::Tuple` with exactly `len` members.
	pub fn new(token: Token, name: &'static str, len: usize) -> Result<Self, Error> {
		match token {
			Token::Tuple(fields) if fields.len() == len => {
				Ok(Self { name, fields: fields.into_iter() })
			},
			Token::Tuple(fields) => Err(Error::InvalidOutputType(format!(
				"Expected {} with {} members, got {}",
				name,
				len,
				fields.len()
			))),
			other => Err(Error::InvalidOutputType(format!(
				"Expected {} tuple, got {:?}",
				name, other
			))),
		}
	}

	/// Decodes the next member.
	pub fn next<T: Tokenizable>(&mut self) -> Result<T, Error> {
		let token = self.fields.next().ok_or_else(|| {
			Error::InvalidOutputType(format!("Missing member in {}", self.name))
		})?;
		T::from_token(token)
	}
}
