//! Page through every call, optionally limited to a window given as two RFC 3339 arguments
//! (`cargo run --example list_calls -- 2024-01-01T00:00:00Z 2024-01-08T00:00:00Z`).
//!
//! Needs GONG_ACCESS_KEY and GONG_ACCESS_KEY_SECRET in the environment or a `.env` file.

use futures_util::TryStreamExt;
use gong_gateway::{GongClient, GongConfig, ListCallsParams};
use std::env;
use tracing::info;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<(), gong_gateway::GongError> {
    let subscriber = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_file(true)
                .with_line_number(true),
        )
        .with(tracing_subscriber::filter::Targets::new().with_targets([
            ("hyper", tracing_subscriber::filter::LevelFilter::OFF),
            ("gong_gateway", tracing_subscriber::filter::LevelFilter::DEBUG),
            ("list_calls", tracing_subscriber::filter::LevelFilter::INFO),
        ]));
    tracing::subscriber::set_global_default(subscriber).unwrap();

    let config = GongConfig::from_env()?;
    let client = GongClient::from_config(config);
    let params = ListCallsParams {
        from_date_time: env::args().nth(1),
        to_date_time: env::args().nth(2),
        ..Default::default()
    };

    let mut pages = Box::pin(client.calls_pages(params));
    let mut seen = 0;
    while let Some(page) = pages.try_next().await? {
        seen += page.records.len();
        for call in &page.records {
            info!(id=%call.id, title=?call.title, started=?call.started, "call");
        }
        info!(seen, total=?page.total_records, "page done");
    }

    Ok(())
}
