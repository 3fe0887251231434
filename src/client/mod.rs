mod reader;
mod signer;

pub use reader::NnsClient;
pub use signer::NnsSigningClient;

use crate::normalize::InvalidNameError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	InvalidName(#[from] InvalidNameError),
	#[error("contract call failed: {0}")]
	Contract(#[from] alloy::contract::Error),
}
