use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::AppError;
use crate::server::AppState;

/// Token bucket holding up to `rps` tokens, refilled continuously at `rps`
/// tokens per second.
#[derive(Clone)]
pub struct RateLimiter {
    rps: u32,
    state: Arc<Mutex<Bucket>>,
}

#[derive(Debug)]
struct Bucket {
    tokens: f64,
    last: Instant,
}

impl RateLimiter {
    pub fn new(rps: u32) -> Self {
        let rps = rps.max(1);
        Self {
            rps,
            state: Arc::new(Mutex::new(Bucket {
                tokens: rps as f64,
                last: Instant::now(),
            })),
        }
    }

    /// Take one token, or report how long until one is available.
    pub async fn check(&self) -> Result<(), AppError> {
        let mut bucket = self.state.lock().await;
        let now = Instant::now();
        let elapsed = now.duration_since(bucket.last);
        bucket.last = now;

        let capacity = self.rps as f64;
        bucket.tokens = (bucket.tokens + elapsed.as_secs_f64() * capacity).min(capacity);

        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            return Ok(());
        }

        let wait = Duration::from_secs_f64((1.0 - bucket.tokens) / capacity);
        Err(AppError::RateLimited {
            rps: self.rps,
            retry_after_ms: wait.as_millis() as u64,
        })
    }
}

/// Middleware rejecting requests with 429 once the bucket is empty.
/// Passes everything through when no limiter is configured.
pub async fn enforce(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(limiter) = &state.limiter {
        limiter.check().await.inspect_err(|e| {
            debug!(path = %request.uri().path(), error = %e, "request rate limited");
        })?;
    }
    Ok(next.run(request).await)
}
