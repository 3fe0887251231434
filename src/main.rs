#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

use alloy::primitives::Address;
use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use nns_client::{namehash, normalize, reverse_node, Config, NameAttribute, NnsClient};
use tracing_subscriber::{
	prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

#[derive(Debug, Parser)]
#[command(name = "nns", version, about = "Nad Name Service client")]
struct Cli {
	/// Log as JSON instead of human-readable lines.
	#[arg(long, global = true)]
	json_logs: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
	/// Print the namehash of a name.
	Namehash { name: String },
	/// Print the ENSIP-15 normalized form of a name.
	Normalize { name: String },
	/// Print the reverse record node of an address.
	ReverseNode { address: String },
	/// Resolve a name to an address.
	Resolve { name: String },
	/// Print the primary name of an address.
	PrimaryName { address: Address },
	/// List the names owned by an address.
	Names { address: Address },
	/// Read one attribute of a name.
	Attribute { name: String, key: String },
	/// Read several attributes of a name.
	Attributes {
		name: String,
		#[arg(required = true)]
		keys: Vec<String>,
	},
	/// Print the avatar URL of a name.
	Avatar { name: String },
	/// Set an attribute on a name. Requires NNS_PRIVATE_KEY.
	SetAttribute {
		name: String,
		key: String,
		value: String,
	},
	/// Set several attributes on a name in one transaction. Requires NNS_PRIVATE_KEY.
	SetAttributes {
		name: String,
		/// Attributes as KEY=VALUE pairs.
		#[arg(required = true, value_parser = parse_attribute)]
		attributes: Vec<NameAttribute>,
	},
}

fn parse_attribute(pair: &str) -> Result<NameAttribute, String> {
	let (key, value) = pair
		.split_once('=')
		.ok_or_else(|| format!("expected KEY=VALUE, got {pair:?}"))?;

	Ok(NameAttribute::new(key, value))
}

#[tokio::main]
async fn main() -> Result<()> {
	dotenv().ok();

	let cli = Cli::parse();

	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| "nns_client=info,nns=info".into());
	let registry = tracing_subscriber::registry().with(env_filter);
	if cli.json_logs {
		registry
			.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
			.init();
	} else {
		registry
			.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
			.init();
	}

	run(cli.command).await
}

async fn run(command: Command) -> Result<()> {
	match command {
		Command::Namehash { name } => println!("{}", namehash(&name)?),
		Command::Normalize { name } => println!("{}", normalize(&name)?),
		Command::ReverseNode { address } => println!("{}", reverse_node(&address)?),
		Command::Resolve { name } => println!("{}", client()?.resolve_address(&name).await?),
		Command::PrimaryName { address } => {
			println!("{}", client()?.primary_name(address).await?);
		},
		Command::Names { address } => {
			let names = client()?.names_of_address(address).await?;
			println!("{}", serde_json::to_string_pretty(&names)?);
		},
		Command::Attribute { name, key } => {
			println!("{}", client()?.name_attribute(&name, &key).await?);
		},
		Command::Attributes { name, keys } => {
			let attributes = client()?.name_attributes(&name, &keys).await?;
			println!("{}", serde_json::to_string_pretty(&attributes)?);
		},
		Command::Avatar { name } => println!("{}", client()?.avatar_url(&name).await?),
		Command::SetAttribute { name, key, value } => {
			let tx_hash = Config::from_env()?
				.signing_client()?
				.set_name_attribute(&name, &key, &value)
				.await?;
			tracing::info!(%tx_hash, "transaction sent");
			println!("{tx_hash}");
		},
		Command::SetAttributes { name, attributes } => {
			let tx_hash = Config::from_env()?
				.signing_client()?
				.set_name_attributes(&name, attributes)
				.await?;
			tracing::info!(%tx_hash, "transaction sent");
			println!("{tx_hash}");
		},
	}

	Ok(())
}

fn client() -> Result<NnsClient> {
	Ok(Config::from_env()?.client())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_set_attributes_pairs() {
		let cli = Cli::try_parse_from([
			"nns",
			"set-attributes",
			"alice.nad",
			"twitter=@alice",
			"url=https://example.com/?a=b",
		])
		.unwrap();

		let Command::SetAttributes { name, attributes } = cli.command else {
			panic!("wrong subcommand");
		};
		assert_eq!(name, "alice.nad");
		assert_eq!(
			attributes,
			vec![
				NameAttribute::new("twitter", "@alice"),
				NameAttribute::new("url", "https://example.com/?a=b"),
			]
		);
	}

	#[test]
	fn rejects_pairs_without_separator() {
		assert!(Cli::try_parse_from(["nns", "set-attributes", "alice.nad", "twitter"]).is_err());
		assert!(Cli::try_parse_from(["nns", "set-attributes", "alice.nad"]).is_err());
	}

	#[test]
	fn empty_values_are_allowed() {
		assert_eq!(parse_attribute("url=").unwrap(), NameAttribute::new("url", ""));
	}
}
