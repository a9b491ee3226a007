use chrono::Utc;
use serde_json::json;

use jobhunt::export;
use jobhunt::models::listing::{NormalizedListing, ResultSet};

fn listing(title: &str, location: &str) -> NormalizedListing {
    NormalizedListing {
        job_title: title.to_string(),
        company: "Acme, Inc".to_string(),
        location: location.to_string(),
        posted_via: "N/A".to_string(),
        source_site: "indeed".to_string(),
        date_posted: json!("2025-06-01"),
        job_url: "https://example.test/job/1".to_string(),
        remote: json!(false),
        salary: json!(120000),
        job_type: json!("fulltime"),
        description: "Ship backend services".to_string(),
    }
}

fn result_set() -> ResultSet {
    ResultSet {
        listings: vec![
            listing("Backend Engineer", "Abuja, Nigeria"),
            listing("Mobile Developer", "Lagos, Nigeria"),
        ],
        count: 2,
        generated_at: Utc::now(),
    }
}

#[test]
fn artifact_is_bom_prefixed_utf8() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = export::write_csv(&result_set(), dir.path()).expect("written");

    let bytes = std::fs::read(&path).expect("readable");
    assert_eq!(&bytes[..3], [0xEF, 0xBB, 0xBF]);
}

#[test]
fn filename_follows_the_timestamp_pattern() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = export::write_csv(&result_set(), dir.path()).expect("written");

    let name = path.file_name().and_then(|n| n.to_str()).expect("utf8 name");
    assert!(name.starts_with("Jobs_results_"));
    assert!(name.ends_with(".csv"));
}

#[test]
fn header_row_uses_capitalized_names_and_text_is_quoted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = export::write_csv(&result_set(), dir.path()).expect("written");

    let content = std::fs::read_to_string(&path).expect("readable");
    let header = content
        .trim_start_matches('\u{feff}')
        .lines()
        .next()
        .expect("header row");

    assert!(header.starts_with("\"Job Title\",\"Company\",\"Location\""));
    assert!(header.ends_with("\"Job Type\",\"Description\""));

    // Commas inside fields survive quoting; numeric cells stay bare.
    assert!(content.contains("\"Acme, Inc\""));
    assert!(content.contains(",120000,"));
    assert!(!content.contains("\"120000\""));
}

#[test]
fn rows_appear_in_result_set_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = export::write_csv(&result_set(), dir.path()).expect("written");

    let content = std::fs::read_to_string(&path).expect("readable");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("Backend Engineer"));
    assert!(lines[2].contains("Mobile Developer"));
}
