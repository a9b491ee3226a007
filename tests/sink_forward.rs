use chrono::Utc;
use serde_json::json;

use jobhunt::hunt::HuntOutcome;
use jobhunt::models::listing::{NormalizedListing, ResultSet};
use jobhunt::sink;

fn one_listing() -> NormalizedListing {
    NormalizedListing {
        job_title: "Backend Engineer".to_string(),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        posted_via: "N/A".to_string(),
        source_site: "indeed".to_string(),
        date_posted: json!("2025-06-01"),
        job_url: "https://example.test/job/1".to_string(),
        remote: json!(true),
        salary: json!("N/A"),
        job_type: json!("fulltime"),
        description: "N/A".to_string(),
    }
}

fn found() -> HuntOutcome {
    HuntOutcome::Found(ResultSet {
        listings: vec![one_listing()],
        count: 1,
        generated_at: Utc::now(),
    })
}

#[test]
fn success_envelope_carries_count_timestamp_and_data() {
    let envelope = sink::envelope(&found());

    assert_eq!(envelope["success"], json!(true));
    assert_eq!(envelope["count"], json!(1));
    assert!(envelope["generated_at"].is_string());
    assert_eq!(envelope["data"][0]["job_title"], json!("Backend Engineer"));
    assert_eq!(envelope["data"][0]["remote"], json!(true));
    assert!(envelope.get("message").is_none());
}

#[test]
fn empty_envelope_reports_the_business_failure() {
    let envelope = sink::envelope(&HuntOutcome::Empty);

    assert_eq!(
        envelope,
        json!({
            "success": false,
            "message": "No jobs found",
            "count": 0,
            "data": [],
        })
    );
}

#[tokio::test]
async fn no_forward_target_returns_the_local_envelope() {
    let envelope = sink::envelope(&found());
    let delivered = sink::deliver(envelope.clone(), None).await;
    assert_eq!(delivered, envelope);
}

#[tokio::test]
async fn unreachable_forward_target_falls_back_to_the_local_envelope() {
    // Nothing listens on port 1; the connection is refused immediately and
    // the caller still gets the locally built envelope, not an error.
    let envelope = sink::envelope(&found());
    let delivered = sink::deliver(envelope.clone(), Some("http://127.0.0.1:1/ingest")).await;
    assert_eq!(delivered, envelope);
}
