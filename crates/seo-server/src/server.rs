use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use seo_engine::service::{self, PublishReport};
use seo_engine::{BlogPost, BlogSeoService};

use crate::error::AppError;
use crate::rate_limit::{self, RateLimiter};
use crate::snapshot::{self, SnapshotStore};

/// State shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<BlogSeoService>,
    pub snapshots: Arc<SnapshotStore>,
    pub limiter: Option<RateLimiter>,
}

impl AppState {
    pub fn new(
        service: BlogSeoService,
        snapshots: SnapshotStore,
        limiter: Option<RateLimiter>,
    ) -> Self {
        Self {
            service: Arc::new(service),
            snapshots: Arc::new(snapshots),
            limiter,
        }
    }
}

/// `/api/seo/*` behind the rate limiter, `/health` outside it.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/seo/analyze", post(analyze))
        .route(
            "/api/seo/snapshots/{post_id}",
            get(get_snapshot).delete(delete_snapshot),
        )
        .route("/api/seo/keyword-suggestions", post(keyword_suggestions))
        .route("/api/seo/recommendations/{content_type}", get(recommendations))
        .route("/api/seo/generate-slug", post(generate_slug))
        .route("/api/seo/flesch-reading-ease", post(flesch_reading_ease))
        .route("/api/seo/readability", post(readability))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::enforce,
        ));

    Router::new()
        .merge(api)
        .route("/health", get(health))
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct AnalyzeRequest {
    post_id: Option<String>,
    title: Option<String>,
    content: Option<String>,
    meta_description: Option<String>,
    focus_keyword: Option<String>,
    slug: Option<String>,
}

impl AnalyzeRequest {
    /// Split into the optional post id and the post to analyze. A missing
    /// slug is derived from the title.
    fn into_parts(self) -> (Option<String>, BlogPost) {
        let title = self.title.unwrap_or_default();
        let slug = self
            .slug
            .filter(|slug| !slug.is_empty())
            .unwrap_or_else(|| service::generate_slug(&title));
        let post = BlogPost {
            title,
            content: self.content.unwrap_or_default(),
            meta_description: self.meta_description.unwrap_or_default(),
            focus_keyword: self.focus_keyword.unwrap_or_default(),
            slug,
        };
        let post_id = self.post_id.filter(|id| !id.trim().is_empty());
        (post_id, post)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TextRequest {
    title: Option<String>,
    content: Option<String>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;
    let (post_id, post) = request.into_parts();
    let fingerprint = snapshot::fingerprint(&post);

    if let Some(post_id) = &post_id {
        if let Some(analysis) = state.snapshots.reusable(post_id, &fingerprint).await {
            info!(post_id, "serving stored SEO analysis");
            return Ok(Json(json!({ "success": true, "data": analysis })));
        }
    }

    let report = state.service.analyze_blog_before_publish(&post);
    if let PublishReport::Completed(analysis) = &report {
        info!(
            post_id = post_id.as_deref().unwrap_or("-"),
            overall_score = analysis.seo_score.overall_score,
            passed = analysis.seo_score.passed,
            "SEO analysis served"
        );
        if let Some(post_id) = &post_id {
            state
                .snapshots
                .put(post_id, fingerprint, analysis.clone())
                .await;
        }
    }

    Ok(Json(json!({ "success": true, "data": report })))
}

async fn get_snapshot(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let snapshot = state
        .snapshots
        .get(&post_id)
        .await
        .ok_or(AppError::NotFound(post_id))?;
    Ok(Json(json!({ "success": true, "snapshot": snapshot })))
}

async fn delete_snapshot(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Json<Value> {
    let deleted = state.snapshots.delete(&post_id).await;
    info!(post_id, deleted, "snapshot delete requested");
    Json(json!({ "success": true, "deleted": deleted }))
}

async fn keyword_suggestions(
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;
    let suggestions = service::extract_keyword_suggestions(
        request.content.as_deref().unwrap_or_default(),
        request.title.as_deref().unwrap_or_default(),
    );
    Ok(Json(json!({ "success": true, "suggestions": suggestions })))
}

async fn recommendations(Path(content_type): Path<String>) -> Json<Value> {
    let recommendations = service::content_type_guidance(&content_type);
    Json(json!({ "success": true, "recommendations": recommendations }))
}

async fn generate_slug(
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;
    let slug = service::generate_slug(request.title.as_deref().unwrap_or_default());
    Ok(Json(json!({ "success": true, "slug": slug })))
}

async fn flesch_reading_ease(
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;
    let report = service::flesch_report(request.content.as_deref().unwrap_or_default());
    Ok(Json(json!({ "success": true, "data": report })))
}

async fn readability(
    State(state): State<AppState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;
    let result = state
        .service
        .readability_analysis(request.content.as_deref().unwrap_or_default());
    Ok(Json(json!({ "success": true, "data": result })))
}
