//! Bloomgate Server - Main entrypoint.
//!
//! Loads configuration, initializes logging and serves the Bloom filter
//! protocol until interrupted.

use bloomgate_lib::config::{self, BloomgateConfig, ConfigLoader, LogConfig, Validate};
use bloomgate_lib::data_structures::BloomFilter;
use bloomgate_lib::error::{set_error_reporter, BloomgateError, BloomgateResult, TracingErrorReporter};
use bloomgate_lib::server::{Server, ServerState};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the Bloomgate server.
#[derive(Parser, Debug)]
#[clap(name = "bloomgate", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Port to listen on (1025-65535)
    #[clap(requires = "size")]
    port: Option<u16>,

    /// Bloom filter size in bits (a power of two)
    #[clap(requires = "iterations")]
    size: Option<usize>,

    /// Iteration count for each hash function
    iterations: Vec<u32>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

impl Args {
    /// Apply positional overrides on top of the loaded configuration.
    fn apply_overrides(&self, config: &mut BloomgateConfig) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(size) = self.size {
            config.filter.size_bits = size;
        }
        if !self.iterations.is_empty() {
            config.filter.hash_iterations = self.iterations.clone();
        }
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Start the server
    Start,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> BloomgateResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_thread_names(true);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.map_err(|e| BloomgateError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Load and validate the configuration, exiting on failure.
fn load_config(loader: &ConfigLoader, args: &Args) -> BloomgateConfig {
    let loaded = loader.load().and_then(|mut config| {
        args.apply_overrides(&mut config);
        config.validate().map(|()| config)
    });
    match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            process::exit(1);
        }
    }
}

/// Bind the listening socket and serve until Ctrl-C.
async fn serve(config: BloomgateConfig) -> BloomgateResult<()> {
    let bloom = Arc::new(BloomFilter::with_config(config.filter.to_bloom_config())?);
    info!(
        size_bits = bloom.size(),
        hash_functions = bloom.hash_functions().len(),
        "Bloom filter ready"
    );

    let state = ServerState::initialize(bloom, &config.persistence)?;
    let server = Server::from_config(&config.server, state).await?;

    let handle = server.shutdown_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown requested");
            handle.shutdown();
        }
    });

    server.run().await;
    Ok(())
}

/// Main entry point for the application.
fn main() -> BloomgateResult<()> {
    let args = Args::parse();
    let loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);

    match args.command.as_ref().unwrap_or(&Command::Start) {
        Command::Start => {
            let config = load_config(&loader, &args);
            init_logging(&config.log)?;
            set_error_reporter(Arc::new(TracingErrorReporter));

            info!(
                version = bloomgate_lib::VERSION,
                addr = %config.server.socket_addr(),
                "Starting Bloomgate server"
            );

            let runtime = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(config.server.worker_threads)
                .thread_name("bloomgate-worker")
                .enable_all()
                .build()?;
            runtime.block_on(serve(config))
        }
        Command::Validate => {
            load_config(&loader, &args);
            println!("Configuration is valid");
            Ok(())
        }
        Command::GenConfig { output } => {
            let default_config = BloomgateConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| BloomgateError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(output, toml)?;

            println!("Default configuration written to {}", output.display());
            Ok(())
        }
    }
}
