use alloy::{primitives::Address, signers::local::PrivateKeySigner};
use anyhow::Context;
use std::{env, fmt, str::FromStr};
use url::Url;

use crate::client::{NnsClient, NnsSigningClient};

pub struct Config {
	pub rpc_url: Url,
	pub contract_address: Address,
	signer: Option<PrivateKeySigner>,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Url(#[from] url::ParseError),
	#[error("invalid contract address: {0}")]
	Address(String),
	#[error("invalid private key: {0}")]
	Signer(String),
	#[error("NNS_PRIVATE_KEY is required for this operation")]
	MissingSigner,
	#[error(transparent)]
	EnvWithContext(#[from] anyhow::Error),
}

impl Config {
	pub fn from_env() -> Result<Self, Error> {
		let rpc_url = env::var("NNS_RPC_URL").context("NNS_RPC_URL environment variable not set")?;
		let contract_address = env::var("NNS_CONTRACT_ADDRESS")
			.context("NNS_CONTRACT_ADDRESS environment variable not set")?;

		Self::new(
			&rpc_url,
			&contract_address,
			env::var("NNS_PRIVATE_KEY").ok(),
		)
	}

	pub fn new(
		rpc_url: &str,
		contract_address: &str,
		private_key: Option<String>,
	) -> Result<Self, Error> {
		let signer = private_key
			.as_deref()
			.map(str::trim)
			.filter(|k| !k.is_empty())
			.map(PrivateKeySigner::from_str)
			.transpose()
			.map_err(|e| Error::Signer(e.to_string()))?;

		Ok(Self {
			rpc_url: rpc_url.parse()?,
			contract_address: Address::from_str(contract_address)
				.map_err(|e| Error::Address(e.to_string()))?,
			signer,
		})
	}

	pub fn client(&self) -> NnsClient {
		NnsClient::connect(self.rpc_url.clone(), self.contract_address)
	}

	/// Build a client able to send transactions.
	///
	/// # Errors
	///
	/// Errors if no private key is configured.
	pub fn signing_client(&self) -> Result<NnsSigningClient, Error> {
		let signer = self.signer.clone().ok_or(Error::MissingSigner)?;

		Ok(NnsSigningClient::connect(
			self.rpc_url.clone(),
			self.contract_address,
			signer,
		))
	}
}

// Only the signer's address is printed, never the key.
impl fmt::Debug for Config {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Config")
			.field("rpc_url", &self.rpc_url.as_str())
			.field("contract_address", &self.contract_address)
			.field("signer", &self.signer.as_ref().map(PrivateKeySigner::address))
			.finish()
	}
}
