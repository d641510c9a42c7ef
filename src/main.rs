use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

use taskd::config::ServerConfig;
use taskd::{rest, AppContext};

#[derive(Parser)]
#[command(
    name = "taskd",
    about = "taskd — in-memory task tracking REST service",
    version
)]
struct Args {
    /// HTTP listen port
    #[arg(long, env = "TASKD_PORT")]
    port: Option<u16>,

    /// Bind address (default: 127.0.0.1; use 0.0.0.0 for LAN access)
    #[arg(long, env = "TASKD_BIND")]
    bind_address: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "TASKD_LOG")]
    log: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = ServerConfig::new(args.port, args.bind_address, args.log);

    tracing_subscriber::fmt()
        .with_env_filter(config.log_level.as_str())
        .compact()
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "starting taskd");

    let ctx = Arc::new(AppContext::new(config));
    rest::start_server(ctx).await
}
