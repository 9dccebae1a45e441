//! Applicant Evaluator — Binary Entrypoint
//! Boots the Axum HTTP server, wiring the form UI, JSON API, shared session
//! state, and the Prometheus exporter.

use anyhow::Context;
use std::net::SocketAddr;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use applicant_evaluator::api::{self, AppState};
use applicant_evaluator::metrics::Metrics;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("applicant_evaluator=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op elsewhere. Enables PORT and RUST_LOG
    // overrides without exporting them by hand.
    let _ = dotenvy::dotenv();

    init_tracing();

    let state = AppState::new();
    let metrics = Metrics::init(state.weight_sum());
    let router = api::create_router(state).merge(metrics.router());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!(%addr, "applicant evaluator ready");

    axum::serve(listener, router).await?;
    Ok(())
}
