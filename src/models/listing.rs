use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Placeholder substituted for source data a provider did not emit.
pub const NOT_AVAILABLE: &str = "N/A";

/// Provider-native row. Providers differ in which fields they emit, so raw
/// listings stay a tolerant key-value mapping until normalization.
pub type RawListing = serde_json::Map<String, Value>;

/// Ordered rows produced by one successful fetch task.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub rows: Vec<RawListing>,
}

impl RawTable {
    pub fn new(rows: Vec<RawListing>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Canonical schema-complete record exposed to consumers.
///
/// Every field is always present in serialized output. The loosely-typed
/// fields keep whatever the provider emitted (bools, numbers, ISO date
/// strings); gaps materialize as the `"N/A"` placeholder, never as absent
/// keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedListing {
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub posted_via: String,
    pub source_site: String,
    pub date_posted: Value,
    pub job_url: String,
    pub remote: Value,
    pub salary: Value,
    pub job_type: Value,
    pub description: String,
}

/// Deduplicated, sorted output of one run. No two listings share the
/// (job_title, company, source_site) triple.
#[derive(Debug, Clone, Serialize)]
pub struct ResultSet {
    pub listings: Vec<NormalizedListing>,
    pub count: usize,
    pub generated_at: DateTime<Utc>,
}
