//! Countdown Board - a shared countdown-timer display
//!
//! This is the main entry point: `serve` runs the backing store,
//! `display` runs a passive display surface, `admin` issues operator
//! commands against the store.

use std::{sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tracing::info;

use countdown_board::{
    admin::AdminController,
    api::create_router,
    client::StoreClient,
    config::{AdminCommand, Cli, Command, PresetCommand},
    display::DisplayController,
    state::StoreState,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Log to stderr: the display and preview loops own stdout.
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "countdown_board={},tower_http=info",
            cli.log_level()
        ))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Serve { host, port } => serve(host, port).await,
        Command::Display {
            store_url,
            poll_interval_ms,
        } => {
            let client = StoreClient::new(&store_url);
            DisplayController::new(client, Duration::from_millis(poll_interval_ms))
                .run()
                .await
        }
        Command::Admin { store_url, action } => {
            let admin = AdminController::new(StoreClient::new(&store_url));
            match action {
                AdminCommand::Start {
                    title,
                    at,
                    minutes,
                    preset,
                } => {
                    match preset {
                        Some(id) => admin.start_preset(&id).await?,
                        None => admin.start(title, at, minutes).await?,
                    };
                    Ok(())
                }
                AdminCommand::Stop => admin.stop().await.map(|_| ()),
                AdminCommand::Status => admin.status().await,
                AdminCommand::Watch { poll_interval_ms } => {
                    admin.watch(Duration::from_millis(poll_interval_ms)).await
                }
                AdminCommand::Preset { action } => match action {
                    PresetCommand::List => admin.list_presets().await,
                    PresetCommand::Add { title, minutes } => {
                        admin.add_preset(&title, minutes).await
                    }
                    PresetCommand::Delete { id } => admin.delete_preset(&id).await,
                },
            }
        }
    }
}

async fn serve(host: String, port: u16) -> anyhow::Result<()> {
    info!("Starting countdown-board store v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}", host, port);

    let state = Arc::new(StoreState::new(host.clone(), port));
    let app = create_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Store running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET    /ping         - Connectivity probe");
    info!("  GET    /timer        - Current timer record");
    info!("  POST   /timer        - Overwrite the timer record");
    info!("  GET    /presets      - List presets");
    info!("  POST   /presets      - Add a preset");
    info!("  DELETE /presets/:id  - Delete a preset");
    info!("  GET    /health       - Health check");

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Store shutdown complete");
    Ok(())
}
