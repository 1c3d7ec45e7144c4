/// Stored analyses keyed by post id.
///
/// Key schema:
/// - `seo:v1:snapshot:{postId}`: JSON-serialized [`Snapshot`] (TTL: configured)
///
/// A snapshot is only reused while its fingerprint matches the post being
/// analyzed, so any edit to the title, content, meta description, keyword or
/// slug forces a fresh analysis.
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use seo_engine::service::PublishAnalysis;
use seo_engine::BlogPost;

use crate::redis::RedisCache;

const KEY_PREFIX: &str = "seo:v1:";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub post_id: String,
    pub fingerprint: String,
    pub analysis: PublishAnalysis,
}

impl Snapshot {
    pub fn matches(&self, fingerprint: &str) -> bool {
        self.fingerprint == fingerprint
    }
}

pub struct SnapshotStore {
    redis: RedisCache,
    ttl_secs: u64,
}

impl SnapshotStore {
    pub fn new(redis: RedisCache, ttl_secs: u64) -> Self {
        Self { redis, ttl_secs }
    }

    pub async fn get(&self, post_id: &str) -> Option<Snapshot> {
        let key = snapshot_key(post_id);
        let json = self.redis.get(&key).await?;
        serde_json::from_str(&json)
            .inspect_err(|e| warn!(error = %e, key, "snapshot deserialization failed"))
            .ok()
    }

    /// Stored analysis for `post_id` if it was computed from identical input.
    pub async fn reusable(&self, post_id: &str, fingerprint: &str) -> Option<PublishAnalysis> {
        let snapshot = self.get(post_id).await?;
        if snapshot.matches(fingerprint) {
            Some(snapshot.analysis)
        } else {
            debug!(post_id, "stored snapshot is stale");
            None
        }
    }

    pub async fn put(&self, post_id: &str, fingerprint: String, analysis: PublishAnalysis) -> bool {
        let snapshot = Snapshot {
            post_id: post_id.to_string(),
            fingerprint,
            analysis,
        };
        let key = snapshot_key(post_id);
        match serde_json::to_string(&snapshot) {
            Ok(json) => self.redis.set_with_ttl(&key, &json, self.ttl_secs).await,
            Err(e) => {
                warn!(error = %e, key, "snapshot serialization failed");
                false
            }
        }
    }

    pub async fn delete(&self, post_id: &str) -> bool {
        self.redis.delete(&snapshot_key(post_id)).await
    }
}

pub fn snapshot_key(post_id: &str) -> String {
    format!("{KEY_PREFIX}snapshot:{post_id}")
}

/// SHA-256 over the analyzed fields of `post`, hex encoded.
///
/// Each field is length-prefixed so moving text between fields changes the
/// digest.
pub fn fingerprint(post: &BlogPost) -> String {
    let mut hasher = Sha256::new();
    for field in [
        &post.title,
        &post.content,
        &post.meta_description,
        &post.focus_keyword,
        &post.slug,
    ] {
        hasher.update((field.len() as u64).to_be_bytes());
        hasher.update(field.as_bytes());
    }
    format!("{:x}", hasher.finalize())
}
