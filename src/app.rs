use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/submit", post(handlers::submit))
        .route("/data", get(handlers::get_data))
        .route("/summary", get(handlers::get_summary))
        .route("/export", get(handlers::export))
        .with_state(state)
}
