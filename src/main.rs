use std::{path::Path, sync::Arc};

use anyhow::Context;
use piano_cover_book::{SessionController, Snapshot, config::Config, storage::SqliteRecordStore};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt::SubscriberBuilder, prelude::*};

type PianoCoverBookResult<T> = anyhow::Result<T>;

#[tokio::main]
async fn main() -> PianoCoverBookResult<()> {
    // Respect RUST_LOG if set, default to info for our crate and warn for the database stack.
    let default_filter = format!("{}=info,sea_orm=warn,sqlx=warn", env!("CARGO_PKG_NAME"));
    let env_filter = std::env::var("RUST_LOG").unwrap_or(default_filter);
    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::new(env_filter))
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .pretty()
        .finish()
        .with(ErrorLayer::default())
        .init();
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "starting piano cover book"
    );
    if Path::new(".env.local").exists() {
        dotenvy::from_filename(".env.local")?;
    } else if Path::new(".env").exists() {
        dotenvy::from_filename(".env")?;
    };
    let config = Config::load()?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    let store = SqliteRecordStore::open(&config)
        .await
        .with_context(|| "Failed to open record database")?;
    tracing::info!(db = %config.db_connection_string, "record store ready");

    let controller = SessionController::spawn(Arc::new(store));
    let snapshot = controller.settled().await;
    let result = match &snapshot {
        Snapshot::Failed(err) => {
            Err(anyhow::Error::new(err.clone()).context("Failed to load practice records"))
        }
        _ => {
            tracing::info!(count = snapshot.records().len(), "loaded practice records");
            serde_json::to_string_pretty(snapshot.records())
                .with_context(|| "Failed to serialize practice records")
                .map(|json| println!("{json}"))
        }
    };
    controller.shutdown().await;
    result
}
