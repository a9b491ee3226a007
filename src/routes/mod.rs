pub mod hunt;

use std::sync::Arc;

use axum::Router;
use axum::routing::post;

use crate::providers::MultiSource;

/// Shared state handed to the request handlers.
#[derive(Clone)]
pub struct AppState {
    pub sources: Arc<MultiSource>,
    pub forward_url: Option<String>,
    pub country: String,
}

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/hunt", post(hunt::run))
        .with_state(state);

    Router::new().nest("/api/v1", api)
}
