//! `chartbar` - Demo wiring for the chart control bar
//!
//! Builds a control bar with default configuration, scripts the collaborator
//! callbacks a dashboard would wire up, and prints every emitted options
//! snapshot as JSON.

use anyhow::{Context, Result};
use chartbar::{
    config::{BarConfig, GridDensity, ScopeSelection},
    controller::ControlBar,
    range::{TimeWindow, unix_time_ms},
    utils,
};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use tracing::info;

fn main() -> Result<()> {
    utils::init_logging().context("Failed to initialize logging system")?;

    info!("chartbar v{} starting demo", env!("CARGO_PKG_VERSION"));

    let (options_tx, options_rx) = mpsc::sync_channel(32);
    let (mut bar, handle) = ControlBar::new(BarConfig::default(), options_tx);

    // Props the rendering layer would hand to its widgets
    for density in GridDensity::ALL {
        info!(span = density.span(), label = density.label(), "density preset");
    }
    info!(
        presets = bar.scope_presets().len(),
        metric_filter = bar.metric_filter().is_some(),
        "collaborator props"
    );

    bar.send_initial_options();
    let loop_handle = bar.start();

    // The parent view: render every snapshot (here, print it)
    let printer = thread::spawn(move || {
        while let Ok(options) = options_rx.recv() {
            match serde_json::to_string(&options) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("failed to serialize options: {e}"),
            }
        }
    });

    // Scripted user session: widen the layout, narrow the scope, pin the
    // window, hit refresh
    handle.density_change(GridDensity::OnePerRow)?;
    handle.node_scope_change(ScopeSelection::Nodes(vec![
        "broker-1".to_string(),
        "broker-2".to_string(),
    ]))?;

    let now = unix_time_ms();
    handle.time_change(TimeWindow::new(now - 1_800_000, now), false)?;
    handle.refresh_clicked()?;
    handle.metric_filter_open()?;

    thread::sleep(Duration::from_millis(200));

    handle.shutdown()?;
    loop_handle
        .join()
        .map_err(|_| anyhow::anyhow!("control bar event loop panicked"))?;
    printer
        .join()
        .map_err(|_| anyhow::anyhow!("printer thread panicked"))?;

    info!("demo finished");
    Ok(())
}
