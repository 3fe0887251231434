#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

//! Client for the Nad Name Service.
//!
//! [`namehash`] derives the 32-byte node a name is keyed by on-chain. [`NnsClient`]
//! and [`NnsSigningClient`] wrap the NNS contract.

pub mod client;
pub mod config;
pub mod namehash;
pub mod normalize;
pub mod types;

pub use client::{Error, NnsClient, NnsSigningClient};
pub use config::Config;
pub use namehash::{namehash, raw_namehash, reverse_node};
pub use normalize::{normalize, InvalidNameError, Normalizer};
pub use types::NameAttribute;
