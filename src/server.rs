//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::FromRef,
    routing::{delete, get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api;
use crate::models::AppConfig;
use crate::rendering::SvgRenderer;
use crate::services::{InMemorySessionStore, PaletteExporter};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub sessions: Arc<InMemorySessionStore>,
    pub exporter: Arc<PaletteExporter>,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<InMemorySessionStore> {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}

impl FromRef<AppState> for Arc<PaletteExporter> {
    fn from_ref(state: &AppState) -> Self {
        state.exporter.clone()
    }
}

/// Create application state from a loaded configuration.
pub fn create_app_state(config: AppConfig) -> AppState {
    let font_dir = config.export.font_dir.as_deref().map(Path::new);
    let renderer = Arc::new(SvgRenderer::with_font_dir(font_dir));
    let exporter = Arc::new(PaletteExporter::new(config.export.clone(), renderer));
    let sessions = Arc::new(InMemorySessionStore::from_config(&config.sessions));

    AppState {
        config: Arc::new(config),
        sessions,
        exporter,
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    type Store = InMemorySessionStore;

    Router::new()
        // Color analysis
        .route("/api/color/:color", get(api::handle_color))
        .route("/api/contrast", get(api::handle_contrast))
        .route("/api/simulate/:color", get(api::handle_simulate))
        .route("/api/palette/:color", get(api::handle_palette))
        .route("/api/palette/:color/export", get(api::handle_palette_export))
        // Picker sessions
        .route("/api/sessions", post(api::handle_create_session::<Store>))
        .route(
            "/api/sessions/:id",
            get(api::handle_get_session::<Store>).delete(api::handle_delete_session::<Store>),
        )
        .route("/api/sessions/:id/hover", post(api::handle_hover::<Store>))
        .route("/api/sessions/:id/select", post(api::handle_select::<Store>))
        .route(
            "/api/sessions/:id/selection",
            delete(api::handle_clear_selection::<Store>),
        )
        .route(
            "/api/sessions/:id/history/:index",
            post(api::handle_select_history::<Store>),
        )
        .route("/api/sessions/:id/reset", post(api::handle_reset::<Store>))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Browser front-ends are served from other origins
        .layer(CorsLayer::permissive())
}
