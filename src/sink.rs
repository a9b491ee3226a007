use std::time::Duration;

use serde_json::{Value, json};

use crate::error::AppError;
use crate::hunt::HuntOutcome;

/// Downstream delivery timeout; one bounded attempt, no retry.
const FORWARD_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the response envelope for a run outcome. An empty run is a
/// business result, not an error.
pub fn envelope(outcome: &HuntOutcome) -> Value {
    match outcome {
        HuntOutcome::Found(result) => json!({
            "success": true,
            "count": result.count,
            "generated_at": result.generated_at,
            "data": result.listings,
        }),
        HuntOutcome::Empty => json!({
            "success": false,
            "message": "No jobs found",
            "count": 0,
            "data": [],
        }),
    }
}

/// Deliver the envelope: POST it to the forward target when one is
/// configured and hand back the downstream response, falling back to the
/// local envelope on any delivery failure. At most one delivery attempt
/// per run.
pub async fn deliver(envelope: Value, forward_url: Option<&str>) -> Value {
    let Some(url) = forward_url else {
        return envelope;
    };

    tracing::info!(url, "forwarding results downstream");
    match forward(&envelope, url).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(url, "forwarding failed, returning local envelope: {e}");
            envelope
        }
    }
}

async fn forward(envelope: &Value, url: &str) -> Result<Value, AppError> {
    let client = reqwest::Client::builder().timeout(FORWARD_TIMEOUT).build()?;

    let resp = client
        .post(url)
        .json(envelope)
        .send()
        .await?
        .error_for_status()?;

    Ok(resp.json().await?)
}
