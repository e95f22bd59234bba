//! Album Minder - watches Immich albums and pings Telegram about growth.
//!
//! The process is three long-lived pieces under one runtime: a poll loop
//! that reconciles remote album state against a cached snapshot, a tiny
//! liveness listener, and a ctrl-c handler. All configuration comes from
//! the environment at startup.

pub mod cache;
pub mod config;
pub mod diff;
pub mod immich;
pub mod server;
pub mod telegram;
#[cfg(test)]
pub mod test_utils;
pub mod watcher;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = config::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("album_minder=info".parse().unwrap()))
        .init();

    let config = config::Config::from(args);
    tracing::info!(
        albums = ?config.albums,
        interval_secs = config.interval.as_secs(),
        "album minder running"
    );

    let api = immich::ImmichClient::new(&config.api_key, config.endpoint.clone());
    let messenger = telegram::TelegramClient::new(config.bot_token.clone());
    let albums_cache = match &config.cache_path {
        Some(path) => cache::AlbumCache::new(path),
        None => cache::AlbumCache::default_location(),
    };
    tracing::info!(cache = %albums_cache.path().display(), "using snapshot cache");

    tokio::select! {
        () = watcher::run(&config, &api, &messenger, &albums_cache) => {
            // The poll loop never returns on its own
            unreachable!("watcher loop ended");
        }
        result = server::serve(config.port) => {
            result.map_err(|e| anyhow::anyhow!("liveness listener failed: {e}"))?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    Ok(())
}
