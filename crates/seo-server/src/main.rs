mod config;
mod error;
mod rate_limit;
mod redis;
mod server;
mod snapshot;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use seo_engine::BlogSeoService;

use config::Config;
use rate_limit::RateLimiter;
use server::AppState;
use snapshot::SnapshotStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting seo-server");

    let config = Config::from_env()?;
    info!(
        bind_addr = %config.bind_addr,
        redis = config.redis_url.is_some(),
        rate_limit_rps = ?config.rate_limit_rps,
        snapshot_ttl_secs = config.snapshot_ttl_secs,
        "configuration loaded"
    );

    // Redis is optional; without it every request is analyzed from scratch
    let redis_cache = crate::redis::RedisCache::new(config.redis_url.as_deref());
    if !redis_cache.is_enabled() {
        info!("redis disabled, running without snapshots");
    } else if redis_cache.is_available().await {
        info!("redis connected");
    } else {
        warn!("redis unavailable, running without snapshots");
    }
    let snapshots = SnapshotStore::new(redis_cache, config.snapshot_ttl_secs);

    let limiter = config.rate_limit_rps.map(RateLimiter::new);
    let state = AppState::new(BlogSeoService::default(), snapshots, limiter);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "HTTP server ready");

    axum::serve(listener, server::build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, "HTTP server error");
        })?;

    info!("HTTP server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to install Ctrl-C handler, running until killed");
        std::future::pending::<()>().await;
    }
}
