use serde::Deserialize;

/// One aggregation request: the HTTP body and the batch-mode parameter set
/// share this shape.
#[derive(Debug, Clone, Deserialize)]
pub struct HuntSpec {
    pub search_terms: Vec<String>,
    pub locations: Vec<String>,

    /// Job sites to query
    #[serde(default = "default_sites")]
    pub site_names: Vec<String>,

    /// Listings wanted per search
    #[serde(default = "default_results_wanted")]
    pub results_wanted: u32,

    /// Maximum listing age in hours
    #[serde(default = "default_hours_old")]
    pub hours_old: u32,
}

pub fn default_sites() -> Vec<String> {
    ["indeed", "linkedin", "google"].map(String::from).to_vec()
}

fn default_results_wanted() -> u32 {
    40
}

fn default_hours_old() -> u32 {
    168
}

/// One (term, location) unit of work against the job-search providers.
/// Immutable once created; consumed exactly once by the orchestrator.
#[derive(Debug, Clone)]
pub struct FetchTask {
    pub search_term: String,
    pub location: String,
    pub scope: LocationScope,
    pub sites: Vec<String>,
    pub results_wanted: u32,
    pub hours_old: u32,
}

/// Location semantics for a task. Remote queries are location-agnostic;
/// everything else is geo-scoped with a country context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationScope {
    Remote,
    Geo { country: String },
}
