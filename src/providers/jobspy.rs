use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::error::AppError;
use crate::models::listing::{RawListing, RawTable};
use crate::models::task::{FetchTask, LocationScope};
use crate::providers::JobSource;

/// Request timeout for one engine call. A hung upstream must not stall the
/// rest of the run.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared connection settings for the scrape engine behind the site
/// adapters.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    base_url: String,
    client: reqwest::Client,
}

impl EngineConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }
}

/// One job site exposed through a JobSpy-compatible scrape engine.
///
/// The engine owns all scraping mechanics (pagination, anti-bot handling,
/// HTML parsing); this adapter only shapes the query and tags the rows it
/// gets back.
pub struct JobSpySite {
    site: String,
    engine: EngineConfig,
}

impl JobSpySite {
    pub fn new(site: impl Into<String>, engine: EngineConfig) -> Self {
        Self {
            site: site.into(),
            engine,
        }
    }

    fn request_body(&self, task: &FetchTask) -> Value {
        let mut body = serde_json::Map::new();
        body.insert("site_name".into(), json!([self.site]));
        body.insert("search_term".into(), json!(task.search_term));
        body.insert("results_wanted".into(), json!(task.results_wanted));
        body.insert("hours_old".into(), json!(task.hours_old));
        body.insert("linkedin_fetch_description".into(), json!(false));

        match &task.scope {
            LocationScope::Remote => {
                body.insert("location".into(), json!("Remote"));
            }
            LocationScope::Geo { country } => {
                body.insert("location".into(), json!(task.location));
                body.insert("country_indeed".into(), json!(country));
            }
        }

        if self.site == "google" {
            body.insert(
                "google_search_term".into(),
                json!(format!(
                    "{} jobs near {} since last week",
                    task.search_term, task.location
                )),
            );
        }

        Value::Object(body)
    }
}

#[async_trait]
impl JobSource for JobSpySite {
    fn name(&self) -> &str {
        &self.site
    }

    async fn fetch(&self, task: &FetchTask) -> Result<RawTable, AppError> {
        let url = format!("{}/api/v1/search_jobs", self.engine.base_url);

        let resp = self
            .engine
            .client
            .post(&url)
            .json(&self.request_body(task))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(AppError::Source(format!(
                "{} returned {} for '{}' in '{}'",
                self.site,
                resp.status(),
                task.search_term,
                task.location
            )));
        }

        let data: Value = resp.json().await?;
        Ok(parse_rows(&data, &self.site))
    }
}

/// Pull the rows out of an engine response and make sure each carries the
/// site it came from; the merge key depends on it.
fn parse_rows(data: &Value, site: &str) -> RawTable {
    let jobs = data
        .get("jobs")
        .and_then(|v| v.as_array())
        .cloned()
        .unwrap_or_default();

    let mut rows: Vec<RawListing> = Vec::with_capacity(jobs.len());
    for job in jobs {
        if let Value::Object(mut row) = job {
            row.entry("site".to_string())
                .or_insert_with(|| Value::String(site.to_string()));
            rows.push(row);
        }
    }
    RawTable::new(rows)
}
