use serde::{
	Serialize,
	Serializer,
};

use crate::types::ChainID;

impl Serialize for ChainID {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let value: u64 = (*self).into();
		serializer.serialize_str(&value.to_string())
	}
}
