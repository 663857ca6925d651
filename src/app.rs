// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Application state, route handlers, and router construction.
//!
//! This module is `pub` so that integration tests can build a test router directly
//! without starting the full binary.

use crate::models::status::{HealthResponse, InfoResponse};
use crate::models::version::VersionInfo;
use crate::services::config::ServiceConfig;
use axum::{extract::State, response::Html, routing::get, Json, Router};
use chrono::Utc;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application version extracted from `Cargo.toml` at compile time.
/// The patch segment can be overridden via `DRILL_PATCH_VERSION` (see `build.rs`).
pub const VERSION: &str = env!("DRILL_VERSION");

// Course metadata reported by /api/info. These are data served to the
// grading tooling, not decoration.
const COURSE_NAME: &str = "Herramientas de Automatización en DevOps";
const COURSE_PROFESSOR: &str = "Froylan Alonso Perez";
const COURSE_STUDENT: &str = "Cesar Ulises Saldivar Chavez";

/// Landing page embedded at compile time.
const INDEX_PAGE: &str = include_str!("../templates/index.html");

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Shared application state injected into every route handler via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// GET / - Static landing page with project information.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// GET /api/info - Course metadata plus runtime environment.
#[utoipa::path(
    get,
    path = "/api/info",
    responses((status = 200, description = "Course and deployment information", body = InfoResponse))
)]
pub async fn info_handler(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        materia: COURSE_NAME.to_string(),
        profesor: COURSE_PROFESSOR.to_string(),
        alumno: COURSE_STUDENT.to_string(),
        fecha: Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        version: VERSION.to_string(),
        entorno: state.config.environment.clone(),
        status: "running".to_string(),
    })
}

/// GET /api/health - Liveness probe. Always healthy; the drill's "failure"
/// is narrated by the runner, never injected here.
#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Service liveness", body = HealthResponse))
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        uptime: "running".to_string(),
    })
}

/// GET /api/version - Version metadata the drill runner snapshots.
#[utoipa::path(
    get,
    path = "/api/version",
    responses((status = 200, description = "Running version metadata", body = VersionInfo))
)]
pub async fn version_handler(State(state): State<AppState>) -> Json<VersionInfo> {
    Json(VersionInfo {
        version: VERSION.to_string(),
        build: state.config.build_number.clone(),
        commit: state.config.git_commit.clone(),
    })
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

#[derive(OpenApi)]
#[openapi(
    paths(info_handler, health_handler, version_handler),
    components(schemas(InfoResponse, HealthResponse, VersionInfo))
)]
pub struct StatusApiDoc;

/// Build the Axum application router. Unmapped paths fall through to the
/// router's default 404 response.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/info", get(info_handler))
        .route("/api/health", get(health_handler))
        .route("/api/version", get(version_handler))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", StatusApiDoc::openapi()))
}
