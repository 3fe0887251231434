use alloy::primitives::{keccak256, B256};

use crate::normalize::{ensip15, InvalidNameError, Normalizer};

const REVERSE_SUFFIX: &str = ".addr.reverse";

/// EIP-137 namehash of an already-normalized name.
///
/// The working buffer is `[node @ [u8; 32], label_hash @ [u8; 32]]`. Labels are
/// folded in from the right, so `node(label.parent)` is
/// `keccak256(node(parent) ++ keccak256(label))`. Empty labels are hashed as the
/// empty byte string.
pub fn raw_namehash(name: &str) -> B256 {
	let mut buffer = [0u8; 64];
	if name.is_empty() {
		return B256::ZERO;
	}

	for label in name.rsplit('.') {
		buffer[32..].copy_from_slice(keccak256(label.as_bytes()).as_slice());
		let node = keccak256(buffer);
		buffer[..32].copy_from_slice(node.as_slice());
	}

	B256::from_slice(&buffer[..32])
}

/// Normalize `name` with `normalizer` and hash it.
///
/// # Errors
///
/// Errors if the normalizer rejects the name.
pub fn node_with<N: Normalizer + ?Sized>(
	normalizer: &N,
	name: &str,
) -> Result<B256, InvalidNameError> {
	if name.is_empty() {
		return Ok(B256::ZERO);
	}

	Ok(raw_namehash(&normalizer.normalize(name)?))
}

/// Normalize `name` with ENSIP-15 and hash it.
///
/// # Errors
///
/// Errors if `name` is not a valid ENSIP-15 name.
pub fn node(name: &str) -> Result<B256, InvalidNameError> {
	node_with(ensip15(), name)
}

/// Like [`namehash`], with a caller-provided normalizer.
///
/// # Errors
///
/// Errors if the normalizer rejects the name.
pub fn namehash_with<N: Normalizer + ?Sized>(
	normalizer: &N,
	name: &str,
) -> Result<String, InvalidNameError> {
	node_with(normalizer, name).map(|node| to_hex(&node))
}

/// 0x-prefixed lowercase hex namehash of `name`, normalized with ENSIP-15.
///
/// # Errors
///
/// Errors if `name` is not a valid ENSIP-15 name.
pub fn namehash(name: &str) -> Result<String, InvalidNameError> {
	namehash_with(ensip15(), name)
}

/// Node of `<address>.addr.reverse`, the key of an address's reverse record.
///
/// Only the `0x` (or `0X`) prefix is stripped. The address is neither
/// validated nor lowercased here; normalization takes care of case.
///
/// # Errors
///
/// Errors if the derived name fails normalization.
pub fn reverse_node_raw(address: &str) -> Result<B256, InvalidNameError> {
	node(&reverse_name(address))
}

/// Hex form of [`reverse_node_raw`].
///
/// # Errors
///
/// Errors if the derived name fails normalization.
pub fn reverse_node(address: &str) -> Result<String, InvalidNameError> {
	namehash(&reverse_name(address))
}

fn reverse_name(address: &str) -> String {
	let address = address
		.strip_prefix("0x")
		.or_else(|| address.strip_prefix("0X"))
		.unwrap_or(address);
	format!("{address}{REVERSE_SUFFIX}")
}

/// 0x-prefixed lowercase hex.
pub fn to_hex(node: &B256) -> String {
	format!("0x{}", hex::encode(node))
}
