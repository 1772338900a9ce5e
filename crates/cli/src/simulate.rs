//! Simulated real-time sales stream.
//!
//! A producer task generates sales onto a channel; the ingest loop applies
//! each one to the shared engine, appends it to the optional CSV log, and
//! prints a report every `report_every` sales.

use anyhow::{Context, Result};
use sales_analytics::{AggregationEngine, EngineSnapshot, SharedEngine};
use sales_core::config::SimulatorConfig;
use sales_core::{now_secs, Config, Sale};
use sales_ingestion::{SaleLog, SalesStreamSimulator};
use std::fmt::Write;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::SimulateArgs;

const CHANNEL_CAPACITY: usize = 1024;

/// Fold command-line overrides into the loaded config and re-validate.
pub fn apply_overrides(mut config: Config, args: &SimulateArgs) -> Result<Config> {
    if let Some(events) = args.events {
        config.simulator.event_count = events;
    }
    if let Some(interval_ms) = args.interval_ms {
        config.simulator.interval_ms = interval_ms;
    }
    if args.seed.is_some() {
        config.simulator.seed = args.seed;
    }
    if let Some(report_every) = args.report_every {
        config.simulator.report_every = report_every;
    }
    if let Some(top_k) = args.top_k {
        config.ranking.top_k = top_k;
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

/// Run the stream to completion and return the engine for inspection.
pub async fn run(config: Config, args: &SimulateArgs) -> Result<SharedEngine> {
    let engine = SharedEngine::new(AggregationEngine::new(&config)?);
    let mut sale_log = match &args.log_csv {
        Some(path) => Some(
            SaleLog::create(path)
                .with_context(|| format!("failed to open sale log {}", path.display()))?,
        ),
        None => None,
    };

    info!(
        events = config.simulator.event_count,
        interval_ms = config.simulator.interval_ms,
        "starting real-time sales stream"
    );

    let (tx, mut rx) = mpsc::channel::<Sale>(CHANNEL_CAPACITY);
    let producer = tokio::spawn(produce(config.simulator.clone(), tx));

    let report_every = config.simulator.report_every;
    let top_k = config.ranking.top_k;
    let mut ingested = 0usize;

    while let Some(sale) = rx.recv().await {
        // Rejections are logged by the engine; skip the sale.
        if engine.ingest(&sale).is_err() {
            continue;
        }
        if let Some(log) = sale_log.as_mut() {
            log.append(&sale)?;
        }

        if ingested % report_every == 0 {
            if args.wall_clock_eviction {
                let evicted = engine.advance_clock(now_secs());
                debug!(evicted, "wall-clock eviction before report");
            }
            let snapshot = engine.snapshot(top_k);
            if args.json {
                println!("{}", serde_json::to_string(&snapshot)?);
            } else {
                print!("{}", format_report(&snapshot));
            }
        }
        ingested += 1;
    }

    producer.await.context("producer task panicked")??;

    if let (Some(log), Some(path)) = (sale_log.as_mut(), &args.log_csv) {
        log.flush()?;
        info!(rows = log.rows_written(), path = %path.display(), "sales log saved");
    }
    info!(ingested, "sales stream finished");

    Ok(engine)
}

/// Generate `event_count` sales, pausing `interval_ms` between them.
async fn produce(config: SimulatorConfig, tx: mpsc::Sender<Sale>) -> sales_core::Result<()> {
    let mut simulator = SalesStreamSimulator::with_default_catalog(&config)?;
    let delay = Duration::from_millis(config.interval_ms);

    for _ in 0..config.event_count {
        let sale = simulator.generate();
        if tx.send(sale).await.is_err() {
            debug!("ingest loop closed, stopping producer");
            break;
        }
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
    Ok(())
}

/// Human-readable report: ranked best-sellers, then trend alerts.
pub fn format_report(snapshot: &EngineSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n--- Top Products ---");
    for row in &snapshot.top_products {
        let _ = writeln!(out, "{}: {} sold", row.product_key, row.total_quantity);
    }
    let _ = writeln!(
        out,
        "Revenue: ${:.2} over {} sales",
        snapshot.total_revenue, snapshot.sales_ingested
    );
    let _ = writeln!(out, "\n--- Trend Alerts ---");
    for product in &snapshot.trending {
        let _ = writeln!(out, "Spike in: {product}");
    }
    out
}
