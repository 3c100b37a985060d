use std::process::ExitCode;

use hpkeeper::services::{seeder, store::connect_from_env};
use hpkeeper::utils::static_object::{BIND_ADDRESS, CHARACTERS_DIR, JSON_LOGS, PORT};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "hpkeeper=info,tower_http=info".into());

    if *JSON_LOGS {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(
                env!("CARGO_PKG_NAME").into(),
                std::io::stdout,
            ))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let store = connect_from_env().await;

    // Seeding completes before the listener is bound.
    if let Err(e) = seeder::load_all(store.as_ref(), &CHARACTERS_DIR).await {
        error!(?e, "Character seeding failed, serving existing records only");
    }

    let addr = format!("{}:{}", *BIND_ADDRESS, *PORT);
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, ?e, "Failed to bind listener");
            return ExitCode::FAILURE;
        }
    };
    info!("Server running at http://{addr}");

    if let Err(e) = axum::serve(listener, hpkeeper::app(store)).await {
        error!(?e, "Server terminated with an error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
