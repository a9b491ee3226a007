use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use jobhunt::config::{Command, Config};
use jobhunt::export;
use jobhunt::hunt::{self, HuntOutcome, query};
use jobhunt::models::task::HuntSpec;
use jobhunt::providers::jobspy::EngineConfig;
use jobhunt::providers::{self, MultiSource};
use jobhunt::routes::{self, AppState};

async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("jobhunt=info,tower_http=info")),
        )
        .init();

    let config = Config::parse();

    let engine = EngineConfig::new(&config.engine_url)?;
    let sources = Arc::new(MultiSource::new(providers::default_sources(&engine)));

    match config.resolved_command() {
        Command::Serve { listen_addr } => {
            let state = AppState {
                sources,
                forward_url: config.forward_url.clone(),
                country: config.country.clone(),
            };

            let app = Router::new()
                .route("/healthz", get(healthz))
                .merge(routes::router(state))
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive());

            let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
            tracing::info!("Listening on {listen_addr}");
            axum::serve(listener, app).await?;
        }
        Command::Hunt {
            terms,
            locations,
            sites,
            results_wanted,
            hours_old,
            output_dir,
        } => {
            let spec = HuntSpec {
                search_terms: terms,
                locations,
                site_names: sites,
                results_wanted,
                hours_old,
            };

            let tasks = query::expand(&spec, &config.country);
            match hunt::run_hunt(sources, tasks).await {
                HuntOutcome::Found(result) => {
                    let path = export::write_csv(&result, &output_dir)?;
                    tracing::info!(count = result.count, "saved results to {}", path.display());
                }
                HuntOutcome::Empty => {
                    tracing::warn!("no jobs found, try adjusting the search parameters");
                }
            }
        }
    }

    Ok(())
}
