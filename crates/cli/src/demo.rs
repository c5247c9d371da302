//! The fixed walkthrough the binary runs.
//!
//! It exercises every stock operation once, including the failure paths,
//! against a fresh stock and the given snapshot store. Failures inside the
//! walkthrough are logged and skipped; only a broken report sink aborts it.

use std::io::Write;

use anyhow::{Context, Result};

use stockroom_core::ItemName;
use stockroom_infra::{SnapshotStore, load_or_empty};
use stockroom_inventory::{DEFAULT_LOW_STOCK_THRESHOLD, Stock, StockAdded};

/// Everything the walkthrough produced, for callers and tests to inspect.
#[derive(Debug)]
pub struct DemoRun {
    /// The stock as reloaded from the snapshot store at the end.
    pub stock: Stock,
    /// Journal entries from the successful additions, in order.
    pub journal: Vec<StockAdded>,
}

/// Run the walkthrough against `store`, printing the items report to
/// `report`.
pub fn run<S, W>(store: &S, report: &mut W) -> Result<DemoRun>
where
    S: SnapshotStore,
    W: Write,
{
    let mut stock = Stock::new();
    let mut journal = Vec::new();

    record_add(&mut stock, &mut journal, "apple", 10);
    record_add(&mut stock, &mut journal, "banana", -2);
    // Rejected input; the failure is logged and the walkthrough keeps going.
    record_add(&mut stock, &mut journal, "", 10);

    let _ = stock.remove("apple", 3);
    // Not in stock; warns and is ignored.
    let _ = stock.remove("orange", 1);

    tracing::info!("apple stock: {}", stock.quantity_of("apple"));

    let low = stock.low_stock(DEFAULT_LOW_STOCK_THRESHOLD);
    let low: Vec<&str> = low.iter().map(ItemName::as_str).collect();
    tracing::info!("low items: {low:?}");

    if let Err(err) = store.save(&stock) {
        tracing::error!("{err}");
    }
    stock = load_or_empty(store);

    for entry in &journal {
        tracing::debug!("journal entry: {entry}");
    }

    tracing::info!("generating items report");
    let mut text = String::from("\nItems Report:\n");
    for line in stock.report_lines() {
        text.push_str(&line);
        text.push('\n');
    }
    report
        .write_all(text.as_bytes())
        .context("failed to write items report")?;

    Ok(DemoRun { stock, journal })
}

fn record_add(stock: &mut Stock, journal: &mut Vec<StockAdded>, item: &str, qty: i64) {
    if let Ok(event) = stock.add(item, qty) {
        journal.push(event);
    }
}
