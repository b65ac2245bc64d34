//! Main entry point for the gasless relay service.
//!
//! This binary assembles a relay from configuration and serves the
//! submission API. All component implementations are resolved through
//! factory maps, so adding a storage backend or executor is a one-line
//! registration here.

use clap::Parser;
use relay_config::Config;
use relay_core::{RelayBuilder, RelayFactories};
use std::path::PathBuf;
use std::sync::Arc;

mod server;

/// Command-line arguments for the relay service.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Path to configuration file
	#[arg(short, long, default_value = "config.toml")]
	config: PathBuf,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, default_value = "info")]
	log_level: String,
}

/// Main entry point for the relay service.
///
/// This function:
/// 1. Parses command-line arguments
/// 2. Initializes logging infrastructure
/// 3. Loads configuration from file
/// 4. Builds the relay with all registered implementations
/// 5. Serves the submission API until interrupted
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	// Initialize tracing with env filter
	use tracing_subscriber::{fmt, EnvFilter};

	let default_directive = args.log_level.to_string();
	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

	fmt()
		.with_env_filter(env_filter)
		.with_thread_ids(true)
		.with_target(true)
		.init();

	tracing::info!("Started relay");

	// Load configuration
	let config = Config::from_file(&args.config).await?;
	tracing::info!("Loaded configuration [{}]", config.relay.id);

	// Build the relay with all registered implementations
	let factories = RelayFactories {
		storage: relay_storage::get_all_implementations()
			.into_iter()
			.map(|(name, factory)| (name.to_string(), factory))
			.collect(),
		executors: relay_executor::get_all_implementations()
			.into_iter()
			.map(|(name, factory)| (name.to_string(), factory))
			.collect(),
	};
	let relay = Arc::new(RelayBuilder::new(config.clone()).build(factories)?);

	// The relay is request-driven; without the API there is nothing to serve.
	match config.api {
		Some(api_config) if api_config.enabled => {
			server::start_server(api_config, relay).await?;
		},
		_ => {
			tracing::warn!("API server is disabled; nothing to serve");
		},
	}

	tracing::info!("Stopped relay");
	Ok(())
}
