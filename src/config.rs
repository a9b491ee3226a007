use std::path::PathBuf;

use clap::Parser;

use crate::models::task::default_sites;

#[derive(Parser, Debug, Clone)]
#[command(name = "jobhunt", about = "Job search aggregation service")]
pub struct Config {
    /// Downstream API that receives the result envelope; local responses
    /// are returned when unset or unreachable
    #[arg(long, env = "EXTERNAL_API_URL")]
    pub forward_url: Option<String>,

    /// Base URL of the JobSpy-compatible scrape engine
    #[arg(long, env = "JOBSPY_API_URL", default_value = "http://localhost:8787")]
    pub engine_url: String,

    /// Country context for geo-scoped queries
    #[arg(long, env = "COUNTRY_INDEED", default_value = "Nigeria")]
    pub country: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the web server (default when no subcommand given)
    Serve {
        /// Listen address
        #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8000")]
        listen_addr: String,
    },
    /// Run one batch hunt and write the CSV artifact
    Hunt {
        /// Search terms, one per flag
        #[arg(long = "term", default_values_t = default_terms())]
        terms: Vec<String>,

        /// Locations, one per flag
        #[arg(long = "location", default_values_t = default_locations())]
        locations: Vec<String>,

        /// Job sites to query
        #[arg(long = "site", default_values_t = default_sites())]
        sites: Vec<String>,

        /// Listings wanted per search
        #[arg(long, default_value = "40")]
        results_wanted: u32,

        /// Maximum listing age in hours
        #[arg(long, default_value = "168")]
        hours_old: u32,

        /// Directory for the CSV artifact
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },
}

impl Config {
    /// Resolve the command, defaulting to Serve if none specified.
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve {
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
        })
    }
}

fn default_terms() -> Vec<String> {
    [
        "React Native Developer",
        "Mobile App Developer",
        "Frontend Developer React Native",
        "React Developer Mobile",
    ]
    .map(String::from)
    .to_vec()
}

fn default_locations() -> Vec<String> {
    [
        "Lagos, Nigeria",
        "Abuja, Nigeria",
        "Oyo, Nigeria",
        "Ogun, Nigeria",
        "Remote",
    ]
    .map(String::from)
    .to_vec()
}
