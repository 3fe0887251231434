use alloy::{
	primitives::Address,
	providers::{DynProvider, Provider, ProviderBuilder},
};
use std::fmt;
use tracing::{debug, instrument};
use url::Url;

use super::Error;
use crate::{
	namehash,
	types::{NameAttribute, AVATAR_KEY, NNS},
};

/// Read-only access to the NNS contract.
///
/// Holds no signer, so it exposes no state-changing calls. See
/// [`NnsSigningClient`](super::NnsSigningClient) for those.
#[derive(Clone)]
pub struct NnsClient {
	pub(super) contract: NNS::NNSInstance<DynProvider>,
}

impl NnsClient {
	pub fn new(provider: DynProvider, contract: Address) -> Self {
		Self {
			contract: NNS::new(contract, provider),
		}
	}

	/// Connect to the NNS contract at `contract` over HTTP JSON-RPC.
	pub fn connect(rpc_url: Url, contract: Address) -> Self {
		let provider = ProviderBuilder::new().connect_http(rpc_url).erased();

		Self::new(provider, contract)
	}

	pub fn contract_address(&self) -> &Address {
		self.contract.address()
	}

	/// Resolve a name to its address. Unregistered names resolve to the zero address.
	///
	/// # Errors
	///
	/// Errors if the name fails normalization or the call fails.
	#[instrument(skip(self), err)]
	pub async fn resolve_address(&self, name: &str) -> Result<Address, Error> {
		let node = namehash::node(name)?;
		debug!(%node, "resolving address");

		Ok(self.contract.getResolvedAddress(node).call().await?)
	}

	/// Primary name of `address`, or an empty string if none is set.
	///
	/// # Errors
	///
	/// Errors if the call fails.
	#[instrument(skip(self), err)]
	pub async fn primary_name(&self, address: Address) -> Result<String, Error> {
		Ok(self.contract.getPrimaryNameForAddress(address).call().await?)
	}

	/// # Errors
	///
	/// Errors if the name fails normalization or the call fails.
	#[instrument(skip(self), err)]
	pub async fn name_attribute(&self, name: &str, key: &str) -> Result<String, Error> {
		let node = namehash::node(name)?;
		debug!(%node, "fetching attribute");

		Ok(self
			.contract
			.getNameAttribute(node, key.to_string())
			.call()
			.await?)
	}

	/// Fetch several attributes of a name in a single call.
	///
	/// # Errors
	///
	/// Errors if the name fails normalization or the call fails.
	#[instrument(skip(self), err)]
	pub async fn name_attributes(
		&self,
		name: &str,
		keys: &[String],
	) -> Result<Vec<NameAttribute>, Error> {
		let node = namehash::node(name)?;
		debug!(%node, "fetching attributes");

		let attributes = self
			.contract
			.getNameAttributes(node, keys.to_vec())
			.call()
			.await?;

		Ok(attributes.into_iter().map(NameAttribute::from).collect())
	}

	/// All names owned by `address`.
	///
	/// # Errors
	///
	/// Errors if the call fails.
	#[instrument(skip(self), err)]
	pub async fn names_of_address(&self, address: Address) -> Result<Vec<String>, Error> {
		Ok(self.contract.getNamesOfAddress(address).call().await?)
	}

	/// The name's `avatar` attribute.
	///
	/// # Errors
	///
	/// Errors if the name fails normalization or the call fails.
	pub async fn avatar_url(&self, name: &str) -> Result<String, Error> {
		self.name_attribute(name, AVATAR_KEY).await
	}
}

impl fmt::Debug for NnsClient {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NnsClient")
			.field("contract", self.contract.address())
			.finish_non_exhaustive()
	}
}
