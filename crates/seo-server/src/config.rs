use std::net::SocketAddr;

use crate::error::AppError;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SNAPSHOT_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// Server configuration loaded explicitly from environment variables.
///
/// Redis and rate limiting are optional; without them the server analyzes
/// every request from scratch and accepts unlimited traffic.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Redis connection URL (e.g. "redis://127.0.0.1:6379"). `None` disables snapshots.
    pub redis_url: Option<String>,
    /// Requests per second allowed on `/api/seo/*`. `None` disables limiting.
    pub rate_limit_rps: Option<u32>,
    /// Lifetime of stored analysis snapshots.
    pub snapshot_ttl_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listener port (default 3000)
    /// - `SEO_BIND_ADDR`: full socket address, overrides `PORT`
    /// - `REDIS_URL`: Redis connection string (omit to disable snapshots)
    /// - `RATE_LIMIT_RPS`: positive integer (omit to disable limiting)
    /// - `SNAPSHOT_TTL_SECS`: positive integer (default one week)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with variables resolved through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::Config(format!("PORT must be a port number, got {raw:?}"))
            })?,
            None => DEFAULT_PORT,
        };

        let bind_addr = match var("SEO_BIND_ADDR") {
            Some(raw) => raw.trim().parse::<SocketAddr>().map_err(|_| {
                AppError::Config(format!("SEO_BIND_ADDR must be host:port, got {raw:?}"))
            })?,
            None => SocketAddr::from(([0, 0, 0, 0], port)),
        };

        let rate_limit_rps = var("RATE_LIMIT_RPS")
            .map(|raw| positive::<u32>("RATE_LIMIT_RPS", &raw))
            .transpose()?;

        let snapshot_ttl_secs = var("SNAPSHOT_TTL_SECS")
            .map(|raw| positive::<u64>("SNAPSHOT_TTL_SECS", &raw))
            .transpose()?
            .unwrap_or(DEFAULT_SNAPSHOT_TTL_SECS);

        Ok(Self {
            bind_addr,
            redis_url: var("REDIS_URL"),
            rate_limit_rps,
            snapshot_ttl_secs,
        })
    }
}

fn positive<T>(key: &str, raw: &str) -> Result<T, AppError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    raw.trim()
        .parse::<T>()
        .ok()
        .filter(|n| *n > T::default())
        .ok_or_else(|| AppError::Config(format!("{key} must be a positive integer, got {raw:?}")))
}
