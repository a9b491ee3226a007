//! The merge pipeline: raw provider tables in, one canonical result set
//! out, as a fixed sequence of pure stages over immutable rows.

use std::collections::HashSet;

use chrono::{NaiveDate, Utc};
use serde_json::Value;

use crate::models::listing::{NOT_AVAILABLE, NormalizedListing, RawListing, RawTable, ResultSet};

/// Source-side fields the pipeline keeps, in canonical order.
const SOURCE_FIELDS: [&str; 11] = [
    "title",
    "company",
    "location",
    "via",
    "site",
    "date_posted",
    "job_url",
    "is_remote",
    "salary",
    "job_type",
    "description",
];

/// Display cutoff for descriptions; longer text is cut here and marked
/// with an ellipsis.
const DESCRIPTION_LIMIT: usize = 500;
const ELLIPSIS: &str = "...";

/// Collapse raw tables into the canonical result set.
///
/// Returns None when the tables hold no rows at all, so callers can report
/// "no jobs found" instead of shipping an empty success.
pub fn merge(tables: Vec<RawTable>) -> Option<ResultSet> {
    let combined = concat(tables);
    if combined.is_empty() {
        return None;
    }

    let deduped = dedup(combined);
    let by_recency = sort_by_date_desc(deduped);
    let mut listings: Vec<NormalizedListing> = by_recency
        .into_iter()
        .map(unify_schema)
        .map(normalize)
        .collect();
    sort_for_output(&mut listings);

    let count = listings.len();
    Some(ResultSet {
        listings,
        count,
        generated_at: Utc::now(),
    })
}

/// Stage 1: one combined table, first table's rows first.
pub fn concat(tables: Vec<RawTable>) -> Vec<RawListing> {
    tables.into_iter().flat_map(|t| t.rows).collect()
}

/// Stage 2: drop later rows sharing the (title, company, site) key.
///
/// First occurrence wins, which pins the surviving duplicate to
/// concatenation order rather than recency; the date sort runs after this.
pub fn dedup(rows: Vec<RawListing>) -> Vec<RawListing> {
    let mut seen: HashSet<(Option<String>, Option<String>, Option<String>)> = HashSet::new();
    let mut kept = Vec::with_capacity(rows.len());
    for row in rows {
        let key = (
            key_field(&row, "title"),
            key_field(&row, "company"),
            key_field(&row, "site"),
        );
        if seen.insert(key) {
            kept.push(row);
        }
    }
    kept
}

/// Dedup key component: canonical string for a field, None when the field
/// is missing or null so absent values still collapse together.
fn key_field(row: &RawListing, field: &str) -> Option<String> {
    match row.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}

/// Stage 3: most recent first, rows without a parseable date last. Stable,
/// so rows keep their relative order on date ties.
pub fn sort_by_date_desc(mut rows: Vec<RawListing>) -> Vec<RawListing> {
    rows.sort_by_key(|row| std::cmp::Reverse(posted_date(row)));
    rows
}

fn posted_date(row: &RawListing) -> Option<NaiveDate> {
    let text = row.get("date_posted")?.as_str()?;
    text.parse::<NaiveDate>().ok().or_else(|| {
        chrono::DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|dt| dt.date_naive())
    })
}

/// Stage 4: make every source field present, inserting nulls for gaps.
pub fn unify_schema(mut row: RawListing) -> RawListing {
    for field in SOURCE_FIELDS {
        row.entry(field.to_string()).or_insert(Value::Null);
    }
    row
}

/// Stages 5-7: project to the fixed field set, rename to the public names,
/// fill the gaps with the placeholder, and bound the description.
pub fn normalize(row: RawListing) -> NormalizedListing {
    NormalizedListing {
        job_title: text_field(&row, "title"),
        company: text_field(&row, "company"),
        location: text_field(&row, "location"),
        posted_via: text_field(&row, "via"),
        source_site: text_field(&row, "site"),
        date_posted: value_field(&row, "date_posted"),
        job_url: text_field(&row, "job_url"),
        remote: value_field(&row, "is_remote"),
        salary: value_field(&row, "salary"),
        job_type: value_field(&row, "job_type"),
        description: truncate_description(text_field(&row, "description")),
    }
}

/// String projection of a source field, placeholder when missing or null.
fn text_field(row: &RawListing, field: &str) -> String {
    match row.get(field) {
        None | Some(Value::Null) => NOT_AVAILABLE.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Loosely-typed projection: provider-typed values (bools, numbers, date
/// strings) pass through untouched, gaps become the placeholder.
fn value_field(row: &RawListing, field: &str) -> Value {
    match row.get(field) {
        None | Some(Value::Null) => Value::String(NOT_AVAILABLE.to_string()),
        Some(v) => v.clone(),
    }
}

/// Cut overlong descriptions to their first 500 characters plus a marker.
/// The placeholder and anything short enough pass through untouched.
fn truncate_description(text: String) -> String {
    if text == NOT_AVAILABLE || text.chars().count() <= DESCRIPTION_LIMIT {
        return text;
    }
    let mut cut: String = text.chars().take(DESCRIPTION_LIMIT).collect();
    cut.push_str(ELLIPSIS);
    cut
}

/// Stage 8: the ascending (location, job_title) order consumers actually
/// see; supersedes the recency sort.
pub fn sort_for_output(listings: &mut [NormalizedListing]) {
    listings.sort_by(|a, b| {
        (a.location.as_str(), a.job_title.as_str()).cmp(&(b.location.as_str(), b.job_title.as_str()))
    });
}
