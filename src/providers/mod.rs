// Provider module: the boundary between the pipeline and the external
// job-search capability. Site adapters live behind the JobSource trait.

pub mod jobspy;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::listing::RawTable;
use crate::models::task::FetchTask;

/// Trait all job sources implement. Each source answers one fetch task with
/// the raw rows it found, or a task-scoped failure.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Site name matching the `site_names` entries in requests.
    fn name(&self) -> &str;

    /// Fetch raw listings for one task.
    async fn fetch(&self, task: &FetchTask) -> Result<RawTable, AppError>;
}

/// Fans one task across every composed source named in `task.sites`,
/// concatenating their rows in source order.
///
/// Per-site failures are logged and skipped; the task as a whole fails only
/// when every selected site failed.
pub struct MultiSource {
    sources: Vec<Arc<dyn JobSource>>,
}

impl MultiSource {
    pub fn new(sources: Vec<Arc<dyn JobSource>>) -> Self {
        Self { sources }
    }

    pub async fn fetch(&self, task: &FetchTask) -> Result<RawTable, AppError> {
        let selected: Vec<&Arc<dyn JobSource>> = self
            .sources
            .iter()
            .filter(|s| task.sites.iter().any(|name| name == s.name()))
            .collect();

        if selected.is_empty() {
            return Err(AppError::Source(format!(
                "no known source matches {:?}",
                task.sites
            )));
        }

        let mut rows = Vec::new();
        let mut failures = 0usize;
        for source in &selected {
            match source.fetch(task).await {
                Ok(table) => rows.extend(table.rows),
                Err(e) => {
                    failures += 1;
                    tracing::warn!(
                        site = source.name(),
                        term = %task.search_term,
                        location = %task.location,
                        "site fetch failed: {e}"
                    );
                }
            }
        }

        if failures == selected.len() {
            return Err(AppError::Source(format!(
                "all {failures} sites failed for '{}' in '{}'",
                task.search_term, task.location
            )));
        }

        Ok(RawTable::new(rows))
    }
}

/// Registry of the known site adapters, all backed by the scrape engine.
pub fn default_sources(engine: &jobspy::EngineConfig) -> Vec<Arc<dyn JobSource>> {
    ["indeed", "linkedin", "google", "zip_recruiter"]
        .into_iter()
        .map(|site| Arc::new(jobspy::JobSpySite::new(site, engine.clone())) as Arc<dyn JobSource>)
        .collect()
}
