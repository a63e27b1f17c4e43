pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analytics::handlers as analytics;
use crate::assistant::handlers as assistant;
use crate::document::handlers as documents;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Document store (reducer, import)
        .route("/api/v1/documents/new", get(documents::handle_new_document))
        .route(
            "/api/v1/documents/actions",
            post(documents::handle_apply_action),
        )
        .route("/api/v1/documents/import", post(documents::handle_import))
        .route(
            "/api/v1/documents/import/linkedin",
            post(documents::handle_linkedin_import),
        )
        .route(
            "/api/v1/documents/import/template",
            get(documents::handle_import_template),
        )
        // Scoring engine
        .route("/api/v1/analytics", post(analytics::handle_score))
        // Writing assistant
        .route(
            "/api/v1/assistant/suggestions",
            post(assistant::handle_suggestions),
        )
        .route(
            "/api/v1/assistant/summary",
            post(assistant::handle_improve_summary),
        )
        .route(
            "/api/v1/skills/suggestions",
            post(assistant::handle_skill_suggestions),
        )
        .with_state(state)
}
