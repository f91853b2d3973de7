//! MotorBrew intake service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request id → trace → timeout → body limit
//!                                                      │
//!                          ┌───────────────────────────┼──────────────────────┐
//!                          ▼                           ▼                      ▼
//!                  /upload/ /uploads/ /reset/   /save_angles /get_angles   /  (index)
//!                  (x-api-key on upload)        /qr1 .. /qr5
//!                          │                           │
//!                          ▼                           ▼
//!                    UploadStore                  AngleStore
//!                  (in-memory, locked)       (angles.txt, atomic replace)
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use motorbrew_server::lifecycle::{signals, startup, Shutdown};
use motorbrew_server::observability::{logging, metrics};
use motorbrew_server::HttpServer;

#[derive(Parser)]
#[command(name = "motorbrew-server")]
#[command(about = "Upload intake and QR label service", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "MOTORBREW_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = startup::resolve_config(args.config.as_deref())?;

    logging::init_logging(&config.observability.log_level);

    tracing::info!("motorbrew-server v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        api_keys_restricted = !config.security.api_keys.is_empty(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Validation already checked the address.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.listener();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    HttpServer::new(config).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
