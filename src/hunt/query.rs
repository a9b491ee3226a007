use crate::models::task::{FetchTask, HuntSpec, LocationScope};

/// Expand search terms x locations into discrete fetch tasks.
///
/// Terms are the outer dimension and locations the inner one, so logs and
/// tests see a deterministic order. A location that case-insensitively
/// equals "remote" becomes a location-agnostic remote query; everything
/// else is geo-scoped with the configured country context.
pub fn expand(spec: &HuntSpec, country: &str) -> Vec<FetchTask> {
    let mut tasks = Vec::with_capacity(spec.search_terms.len() * spec.locations.len());
    for term in &spec.search_terms {
        for location in &spec.locations {
            let scope = if location.eq_ignore_ascii_case("remote") {
                LocationScope::Remote
            } else {
                LocationScope::Geo {
                    country: country.to_string(),
                }
            };
            tasks.push(FetchTask {
                search_term: term.clone(),
                location: location.clone(),
                scope,
                sites: spec.site_names.clone(),
                results_wanted: spec.results_wanted,
                hours_old: spec.hours_old,
            });
        }
    }
    tasks
}
