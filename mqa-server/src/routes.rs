//! HTTP boundary: ask, health, and service-info routes.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use mqa_core::{Answer, HealthStatus, Question, ServiceInfo, NO_DATA};

use crate::service::QaService;

const SERVICE_NAME: &str = "Member Data QA System";

#[derive(Serialize)]
struct ErrorDetail {
    detail: &'static str,
}

/// Router over a shared [`QaService`]; any origin may call, requests are
/// traced.
pub fn build_router(service: Arc<QaService>) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/ask", post(ask))
        .route("/health", get(health))
        .with_state(service)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn ask(
    State(service): State<Arc<QaService>>,
    Json(question): Json<Question>,
) -> Result<Json<Answer>, (StatusCode, Json<ErrorDetail>)> {
    info!(question = %question.question, "Question received");

    let answer = service.answer(&question.question).await;
    if answer == NO_DATA {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorDetail {
                detail: "Unable to fetch messages",
            }),
        ));
    }
    Ok(Json(Answer { answer }))
}

async fn health(State(service): State<Arc<QaService>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        api_connected: service.source_reachable().await,
    })
}

async fn service_info() -> Json<ServiceInfo> {
    let mut endpoints = BTreeMap::new();
    endpoints.insert(
        "/ask".to_string(),
        "POST - Ask questions about member data".to_string(),
    );
    endpoints.insert("/health".to_string(), "GET - Health check".to_string());

    Json(ServiceInfo {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
    })
}
