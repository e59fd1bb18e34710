//! velora-daemon: the Velora earner-side service daemon.
//!
//! Single OS process running a Tokio async runtime. The UI communicates
//! with the daemon via JSON-RPC over Unix socket.

mod accounting;
mod commands;
mod config;
mod events;
mod rpc;

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{error, info};

use velora_pricing::policy::PricingPolicy;

use crate::config::DaemonConfig;
use crate::events::EventBus;
use crate::rpc::RpcServer;

/// Daemon-wide shared state.
pub struct DaemonState {
    /// Database connection.
    pub db: Arc<tokio::sync::Mutex<rusqlite::Connection>>,
    /// Configuration.
    pub config: DaemonConfig,
    /// The active pricing policy, validated at startup.
    pub policy: PricingPolicy,
    /// Event bus for pushing events to subscribers.
    pub event_bus: EventBus,
    /// Shutdown signal sender.
    pub shutdown_tx: broadcast::Sender<()>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("velora=info".parse()?),
        )
        .init();

    info!("Velora daemon starting");

    // 1. Load config and materialize the pricing policy
    let config = DaemonConfig::load()?;
    let policy = config.pricing.to_policy()?;
    let data_dir = config.data_dir();

    // Ensure data directory exists
    std::fs::create_dir_all(&data_dir)?;

    // 2. Open database
    let db_path = data_dir.join("velora.db");
    let conn = velora_db::open(&db_path)?;
    let db = Arc::new(tokio::sync::Mutex::new(conn));

    // 3. Create event bus
    let event_bus = EventBus::new(1000);

    // 4. Create shutdown channel
    let (shutdown_tx, _shutdown_rx) = broadcast::channel(1);

    // 5. Build daemon state
    let state = Arc::new(DaemonState {
        db,
        config,
        policy,
        event_bus,
        shutdown_tx: shutdown_tx.clone(),
    });

    // 6. Start IPC server
    let socket_path = data_dir.join("daemon.sock");
    let rpc_server = RpcServer::new(state.clone(), socket_path.clone());

    info!("Starting JSON-RPC server on {:?}", socket_path);

    // 7. Emit DaemonStarted event
    state.event_bus.emit(events::Event {
        event_type: "DaemonStarted".to_string(),
        timestamp: accounting::now_unix(),
        payload: serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
        }),
    });

    // 8. Run the RPC server until shutdown
    let mut shutdown_rx = shutdown_tx.subscribe();
    tokio::select! {
        result = rpc_server.run() => {
            if let Err(e) = result {
                error!("RPC server error: {}", e);
            }
        }
        _ = shutdown_rx.recv() => {
            info!("Shutdown signal received");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Ctrl-C received, shutting down");
        }
    }

    // Graceful shutdown
    info!("Daemon shutting down gracefully");

    // Clean up socket file
    let _ = std::fs::remove_file(&socket_path);

    info!("Daemon stopped");
    Ok(())
}
