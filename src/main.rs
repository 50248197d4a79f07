//! Data service entry point.

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use data_service::api::{create_router, AppState};
use data_service::config::Config;
use data_service::metrics;
use data_service::utils::shutdown_signal;

/// Minimal HTTP data service.
#[derive(Parser, Debug)]
#[command(name = "data-service")]
#[command(about = "HTTP service with health, user, and data-processing endpoints")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Run {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(Command::CheckConfig) = args.command {
        return cmd_check_config();
    }

    let config = Config::load()?;

    let filter = if args.verbose {
        EnvFilter::new("data_service=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    metrics::init_metrics();

    let port_override = match args.command {
        Some(Command::Run { port }) => port,
        _ => args.port,
    };
    let port = port_override.unwrap_or(config.port);

    cmd_run(config, port).await
}

/// Run the HTTP server until SIGINT/SIGTERM.
async fn cmd_run(config: Config, port: u16) -> anyhow::Result<()> {
    info!("Configuration loaded successfully");
    info!("Version: {}", config.app_version);
    info!("Environment: {}", config.environment);

    let state = AppState::new(&config);
    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!("Starting application on port {}", port);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("DATA SERVICE - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Version: {}", config.app_version);
    println!("  Environment: {}", config.environment);
    println!("  Port: {}", config.port);
    println!("  Debug: {}", config.debug);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}
