use crate::infra::{deserialize_date, deserialize_optional_date, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{Local, NaiveDate};
use numerology::error::AppError;
use numerology::readings::calculate_fortune;
use numerology::readings::views::FortuneReadingView;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
pub(crate) struct FortuneReadingRequest {
    pub(crate) name: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub(crate) birthdate: NaiveDate,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct FortuneReadingResponse {
    pub(crate) name: String,
    pub(crate) birthdate: NaiveDate,
    pub(crate) today: NaiveDate,
    pub(crate) reading: FortuneReadingView,
}

pub(crate) fn reading_routes() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/fortune/reading",
            axum::routing::post(fortune_reading_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn fortune_reading_endpoint(
    Json(payload): Json<FortuneReadingRequest>,
) -> Result<Json<FortuneReadingResponse>, AppError> {
    let FortuneReadingRequest {
        name,
        birthdate,
        today,
    } = payload;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let reading = calculate_fortune(&name, birthdate, today)?;

    Ok(Json(FortuneReadingResponse {
        name,
        birthdate,
        today,
        reading: reading.to_view(),
    }))
}
