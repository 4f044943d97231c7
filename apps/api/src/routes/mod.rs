pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

/// Both generation routes are POST-only; axum's method router answers any
/// other verb on these paths with 405.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate-email", post(handlers::handle_generate_email))
        .route(
            "/generate-job-description",
            post(handlers::handle_generate_job_description),
        )
        .with_state(state)
}
