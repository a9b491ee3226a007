use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde_json::Value;

use crate::error::AppError;
use crate::hunt::{self, query};
use crate::models::task::HuntSpec;
use crate::routes::AppState;
use crate::sink;

/// POST /api/v1/hunt
///
/// Run one aggregation pass over the requested term x location grid. The
/// body is the envelope (or the downstream response when forwarding is
/// configured and succeeds); "no jobs found" is a business outcome and
/// still answers HTTP 200.
pub async fn run(
    State(state): State<AppState>,
    Json(spec): Json<HuntSpec>,
) -> Result<Json<Value>, AppError> {
    if spec.results_wanted == 0 {
        return Err(AppError::BadRequest(
            "results_wanted must be positive".to_string(),
        ));
    }

    let tasks = query::expand(&spec, &state.country);
    let outcome = hunt::run_hunt(Arc::clone(&state.sources), tasks).await;
    let envelope = sink::envelope(&outcome);
    let body = sink::deliver(envelope, state.forward_url.as_deref()).await;
    Ok(Json(body))
}
