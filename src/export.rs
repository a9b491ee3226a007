use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, WriterBuilder};
use serde_json::Value;

use crate::error::AppError;
use crate::models::listing::{NormalizedListing, ResultSet};

/// Human-readable header variant of the canonical schema.
const HEADERS: [&str; 11] = [
    "Job Title",
    "Company",
    "Location",
    "Posted Via",
    "Source Site",
    "Date Posted",
    "Job URL",
    "Remote",
    "Salary",
    "Job Type",
    "Description",
];

/// Write the result set as the batch artifact: BOM-prefixed UTF-8 CSV with
/// non-numeric fields quoted, one row per listing in final sort order.
/// Returns the path of the written file.
pub fn write_csv(result: &ResultSet, dir: &Path) -> Result<PathBuf, AppError> {
    let filename = format!(
        "Jobs_results_{}.csv",
        result.generated_at.format("%Y-%m-%d_%H-%M")
    );
    let path = dir.join(filename);

    let mut file = File::create(&path)?;
    // Excel needs the BOM to pick UTF-8.
    file.write_all("\u{feff}".as_bytes())?;

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .from_writer(file);

    writer.write_record(HEADERS)?;
    for listing in &result.listings {
        writer.write_record(row(listing))?;
    }
    writer.flush()?;

    Ok(path)
}

fn row(listing: &NormalizedListing) -> [String; 11] {
    [
        listing.job_title.clone(),
        listing.company.clone(),
        listing.location.clone(),
        listing.posted_via.clone(),
        listing.source_site.clone(),
        cell(&listing.date_posted),
        listing.job_url.clone(),
        cell(&listing.remote),
        cell(&listing.salary),
        cell(&listing.job_type),
        listing.description.clone(),
    ]
}

/// Flatten a loosely-typed value into its CSV cell text.
fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
