use serde::{Deserialize, Serialize};

use super::contract::NNS;

/// A key-value record stored on a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameAttribute {
	pub key: String,
	pub value: String,
}

impl NameAttribute {
	pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			value: value.into(),
		}
	}
}

impl From<NNS::Attribute> for NameAttribute {
	fn from(value: NNS::Attribute) -> Self {
		Self {
			key: value.key,
			value: value.value,
		}
	}
}

impl From<NameAttribute> for NNS::Attribute {
	fn from(value: NameAttribute) -> Self {
		Self {
			key: value.key,
			value: value.value,
		}
	}
}
