#![allow(clippy::pub_underscore_fields)]

use alloy::sol;

/// Attribute key the NNS frontends store a name's avatar URL under.
pub const AVATAR_KEY: &str = "avatar";

sol! {
	#[sol(rpc)]
	interface NNS {
		struct Attribute {
			string key;
			string value;
		}

		function getResolvedAddress(bytes32 node) external view returns (address);
		function getPrimaryNameForAddress(address addr) external view returns (string);
		function getNameAttribute(bytes32 node, string key) external view returns (string);
		function getNameAttributes(bytes32 node, string[] keys) external view returns (Attribute[]);
		function getNamesOfAddress(address addr) external view returns (string[]);

		function setNameAttribute(bytes32 node, string key, string value) external;
		function setNameAttributes(bytes32 node, Attribute[] attributes) external;
	}
}
