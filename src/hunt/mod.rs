// Hunt module: query expansion, fetch orchestration and the merge pipeline
// behind one run of the aggregator.

pub mod merge;
pub mod query;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::models::listing::{RawTable, ResultSet};
use crate::models::task::FetchTask;
use crate::providers::MultiSource;

/// Cap on simultaneously running fetch tasks; keeps a wide term x location
/// grid within provider rate limits.
const MAX_CONCURRENT_FETCHES: usize = 5;

/// Upper bound on one task's execution, over and above the engine client's
/// own request timeout. A hung task must not block the rest of the run.
const TASK_TIMEOUT: Duration = Duration::from_secs(60);

/// Outcome of a run: either a merged result set or an explicit signal that
/// every task failed or came back empty.
#[derive(Debug)]
pub enum HuntOutcome {
    Found(ResultSet),
    Empty,
}

/// Run every fetch task against the composed sources and merge whatever
/// came back. Best-effort per task: failures are logged and contribute
/// zero rows; they never abort the run.
pub async fn run_hunt(sources: Arc<MultiSource>, tasks: Vec<FetchTask>) -> HuntOutcome {
    let tables = fetch_all(sources, tasks).await;
    match merge::merge(tables) {
        Some(result) => HuntOutcome::Found(result),
        None => HuntOutcome::Empty,
    }
}

/// Execute all tasks with bounded concurrency, dropping failed and empty
/// ones. Output tables keep the task emission order regardless of which
/// task finished first.
async fn fetch_all(sources: Arc<MultiSource>, tasks: Vec<FetchTask>) -> Vec<RawTable> {
    let semaphore = Arc::new(Semaphore::new(MAX_CONCURRENT_FETCHES));
    let mut join_set = JoinSet::new();

    let total = tasks.len();
    for (index, task) in tasks.into_iter().enumerate() {
        let sources = Arc::clone(&sources);
        let semaphore = Arc::clone(&semaphore);
        join_set.spawn(async move {
            let Ok(_permit) = semaphore.acquire_owned().await else {
                return (index, None);
            };
            (index, fetch_one(&sources, &task).await)
        });
    }

    let mut slots: Vec<Option<RawTable>> = (0..total).map(|_| None).collect();
    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok((index, table)) => slots[index] = table,
            Err(e) => tracing::error!("fetch task panicked: {e}"),
        }
    }

    slots.into_iter().flatten().collect()
}

/// Run one task, swallowing its failure. A task that errors, times out, or
/// finds nothing yields None.
async fn fetch_one(sources: &MultiSource, task: &FetchTask) -> Option<RawTable> {
    tracing::info!(term = %task.search_term, location = %task.location, "searching");

    match tokio::time::timeout(TASK_TIMEOUT, sources.fetch(task)).await {
        Ok(Ok(table)) if !table.is_empty() => {
            tracing::info!(
                term = %task.search_term,
                location = %task.location,
                found = table.len(),
                "task finished"
            );
            Some(table)
        }
        Ok(Ok(_)) => {
            tracing::info!(term = %task.search_term, location = %task.location, "no rows");
            None
        }
        Ok(Err(e)) => {
            tracing::warn!(
                term = %task.search_term,
                location = %task.location,
                "task failed: {e}"
            );
            None
        }
        Err(_) => {
            tracing::warn!(term = %task.search_term, location = %task.location, "task timed out");
            None
        }
    }
}
