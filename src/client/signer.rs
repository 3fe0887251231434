use alloy::{
	network::EthereumWallet,
	primitives::{Address, TxHash},
	providers::{Provider, ProviderBuilder},
	signers::local::PrivateKeySigner,
};
use std::{fmt, ops::Deref};
use tracing::{debug, instrument};
use url::Url;

use super::{Error, NnsClient};
use crate::{namehash, types::NameAttribute};

/// Write access to the NNS contract. Derefs to [`NnsClient`] for reads.
#[derive(Clone)]
pub struct NnsSigningClient {
	reader: NnsClient,
	sender: Address,
}

impl NnsSigningClient {
	/// Connect over HTTP JSON-RPC, signing transactions with `signer`.
	pub fn connect(rpc_url: Url, contract: Address, signer: PrivateKeySigner) -> Self {
		let sender = signer.address();
		let provider = ProviderBuilder::new()
			.wallet(EthereumWallet::from(signer))
			.connect_http(rpc_url)
			.erased();

		Self {
			reader: NnsClient::new(provider, contract),
			sender,
		}
	}

	/// Address transactions are sent from.
	pub const fn sender(&self) -> Address {
		self.sender
	}

	/// Set one attribute on a name. Returns once the transaction is broadcast.
	///
	/// # Errors
	///
	/// Errors if the name fails normalization or the transaction is rejected.
	#[instrument(skip(self), fields(sender = %self.sender), err)]
	pub async fn set_name_attribute(
		&self,
		name: &str,
		key: &str,
		value: &str,
	) -> Result<TxHash, Error> {
		let node = namehash::node(name)?;
		debug!(%node, "setting attribute");

		let pending = self
			.reader
			.contract
			.setNameAttribute(node, key.to_string(), value.to_string())
			.send()
			.await?;

		Ok(*pending.tx_hash())
	}

	/// Set several attributes on a name in one transaction.
	///
	/// # Errors
	///
	/// Errors if the name fails normalization or the transaction is rejected.
	#[instrument(skip(self), fields(sender = %self.sender), err)]
	pub async fn set_name_attributes(
		&self,
		name: &str,
		attributes: Vec<NameAttribute>,
	) -> Result<TxHash, Error> {
		let node = namehash::node(name)?;
		debug!(%node, count = attributes.len(), "setting attributes");

		let pending = self
			.reader
			.contract
			.setNameAttributes(node, attributes.into_iter().map(Into::into).collect())
			.send()
			.await?;

		Ok(*pending.tx_hash())
	}
}

impl Deref for NnsSigningClient {
	type Target = NnsClient;

	fn deref(&self) -> &Self::Target {
		&self.reader
	}
}

impl fmt::Debug for NnsSigningClient {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NnsSigningClient")
			.field("contract", self.reader.contract_address())
			.field("sender", &self.sender)
			.finish()
	}
}
