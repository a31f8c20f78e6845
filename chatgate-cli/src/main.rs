//! Gateway binary entry point
//!
//! Loads configuration once, builds the dispatcher and serves `POST /api/chat`.

use chatgate_core::config::GatewayConfig;
use chatgate_core::model::Dispatcher;
use chatgate_core::server;
use clap::Parser;
use std::error::Error;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(name = "chatgate", version, about = "Chat-completion gateway for local and cloud LLMs")]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// REST API bind address (overrides config if specified)
    #[arg(long)]
    addr: Option<SocketAddr>,

    /// Routing spec used when a request names no model, e.g. `local/llama3`
    #[arg(long)]
    default_model: Option<String>,

    /// Base URL of the local inference server
    #[arg(long)]
    local_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    init_tracing();
    info!("Starting chatgate");

    let config_path = args.config.as_deref().map(Path::new);
    let config = apply_cli_overrides(&args, GatewayConfig::load(config_path)?);
    config.validate()?;

    debug!(
        default_model = %config.default_model,
        timeout_secs = config.request_timeout.as_secs(),
        local = %config.providers.local.endpoint,
        cloud_a_configured = config.providers.cloud_a.api_key.is_some(),
        cloud_b_configured = config.providers.cloud_b.api_key.is_some(),
        "Configuration loaded"
    );

    let dispatcher = Arc::new(Dispatcher::from_config(&config)?);

    info!(addr = %config.server.bind, "REST server starting");
    server::serve(dispatcher, &config.server).await?;

    info!("chatgate stopped");
    Ok(())
}

fn apply_cli_overrides(args: &Args, mut config: GatewayConfig) -> GatewayConfig {
    if let Some(addr) = args.addr {
        config = config.with_bind(addr);
    }
    if let Some(spec) = &args.default_model {
        config = config.with_default_model(spec.clone());
    }
    if let Some(url) = &args.local_url {
        config = config.with_local_endpoint(url.clone());
    }
    config
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .init();
}
