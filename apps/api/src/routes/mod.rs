pub mod catalog;
pub mod export;
pub mod health;
pub mod preview;
pub mod resume;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume data and editor operations
        .route(
            "/api/v1/resume",
            get(resume::get_resume).put(resume::put_resume),
        )
        .route("/api/v1/resume/edits", post(resume::post_edit))
        .route(
            "/api/v1/selection",
            get(resume::get_selection).put(resume::put_selection),
        )
        // Design catalogs
        .route("/api/v1/catalog/templates", get(catalog::list_templates))
        .route("/api/v1/catalog/fonts", get(catalog::list_fonts))
        .route("/api/v1/catalog/layouts", get(catalog::list_layouts))
        // Rendering
        .route(
            "/api/v1/preview",
            get(preview::get_preview).post(preview::post_preview),
        )
        .route("/api/v1/preview/print", get(preview::get_print))
        // Downloads
        .route("/api/v1/export/json", get(export::export_json))
        .route("/api/v1/export/docx", get(export::export_docx))
        .with_state(state)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
