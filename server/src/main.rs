use anyhow::{Context, Result};
use clap::Parser;
use todo_core::TodoStore;
use todo_server::config::Config;
use todo_server::demo;
use todo_server::telemetry::{init_telemetry, log_startup_info};
use tokio::net::TcpListener;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "todo-server")]
#[command(about = "In-memory todo service")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "CONFIG_FILE")]
    config: Option<String>,

    /// Listen address override
    #[arg(long, env = "LISTEN_ADDR")]
    listen_addr: Option<String>,

    /// Port override
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Log level override
    #[arg(long, env = "LOG_LEVEL")]
    log_level: Option<String>,

    /// Start with an empty store
    #[arg(long)]
    no_demo_data: bool,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;

    if let Some(ref listen_addr) = cli.listen_addr {
        config.server.listen_addr = listen_addr.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(ref log_level) = cli.log_level {
        config.logging.level = log_level.clone();
    }
    if cli.no_demo_data {
        config.store.seed_demo_data = false;
    }

    Ok(config)
}

/// Resolves on Ctrl-C. If the handler cannot be installed the server keeps
/// running and never shuts down on its own.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C, shutting down"),
        Err(e) => {
            error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli).context("Failed to load configuration")?;

    config.validate().context("Invalid configuration")?;
    init_telemetry(&config.logging).context("Failed to initialize telemetry")?;
    log_startup_info(&config);

    let mut store = TodoStore::new();
    if config.store.seed_demo_data {
        let added = demo::seed(&mut store);
        info!(todos = added, "Seeded demo data");
    }

    let addr = config.server_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("listening on {addr}");

    todo_server::serve(listener, store, shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}
