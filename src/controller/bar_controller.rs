//! Control bar implementation
//!
//! This module implements the main controller that coordinates the time
//! range, node scope, grid density and auto-reload ticker, and notifies the
//! parent view of every state change.

use crate::config::{BarConfig, GridDensity, MetricFilterConfig, ScopePreset, ScopeSelection};
use crate::error::{ChartBarError, Result};
use crate::range::{TimeRange, TimeWindow, unix_time_ms};
use crate::ticker::TickerHandle;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, mpsc};

/// Capacity of the inbound control channel
const CONTROL_QUEUE_DEPTH: usize = 32;

/// Events driving the control bar
///
/// Collaborator callbacks and the auto-reload ticker all feed the same
/// channel, so state mutations are processed strictly in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    /// The range picker reported a new window together with its relativity
    TimeSelected {
        /// The chosen window
        window: TimeWindow,
        /// Whether the window tracks "now"
        relative: bool,
    },
    /// The refresh icon was clicked
    RefreshClicked,
    /// The node-scope selector reported a new selection
    ScopeChanged(ScopeSelection),
    /// The density select reported a new column layout
    DensityChanged(GridDensity),
    /// The metric-filter button was clicked
    MetricFilterOpened,
    /// The auto-reload ticker fired
    Tick {
        /// Generation of the handle that produced this tick
        generation: u64,
        /// Wall-clock "now" stamped when the tick fired
        now_ms: i64,
    },
    /// The parent view is unmounting the control bar
    Shutdown,
}

/// Consolidated options snapshot sent to the parent view
///
/// A snapshot, not a subscription: it never mutates after emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartOptions {
    /// Current chart window
    pub range: TimeWindow,
    /// Whether the window tracks "now"
    pub relative: bool,
    /// True only on the one snapshot produced directly by a ticker refresh
    pub auto_reload: bool,
    /// Column-layout density
    pub grid: GridDensity,
    /// Node scope the charts are limited to
    pub scope: ScopeSelection,
}

/// Cloneable inbound surface handed to the rendering-layer widgets
///
/// Each method normalizes one collaborator callback into a [`ControlEvent`].
/// All methods fail with [`ChartBarError::Disconnected`] once the event loop
/// has exited.
#[derive(Debug, Clone)]
pub struct BarHandle {
    events: mpsc::SyncSender<ControlEvent>,
    latest: Arc<Mutex<Option<ChartOptions>>>,
}

impl BarHandle {
    /// The range picker chose a new window
    pub fn time_change(&self, window: TimeWindow, is_relative: bool) -> Result<()> {
        self.send(ControlEvent::TimeSelected {
            window,
            relative: is_relative,
        })
    }

    /// The refresh icon was clicked
    pub fn refresh_clicked(&self) -> Result<()> {
        self.send(ControlEvent::RefreshClicked)
    }

    /// The node-scope selector chose a new selection
    pub fn node_scope_change(&self, scope: ScopeSelection) -> Result<()> {
        self.send(ControlEvent::ScopeChanged(scope))
    }

    /// The density select chose a new column layout
    pub fn density_change(&self, grid: GridDensity) -> Result<()> {
        self.send(ControlEvent::DensityChanged(grid))
    }

    /// The metric-filter button was clicked
    pub fn metric_filter_open(&self) -> Result<()> {
        self.send(ControlEvent::MetricFilterOpened)
    }

    /// Ask the event loop to exit and cancel the ticker (unmount)
    pub fn shutdown(&self) -> Result<()> {
        self.send(ControlEvent::Shutdown)
    }

    /// The most recently emitted snapshot, for late-joining collaborators
    pub fn latest_options(&self) -> Option<ChartOptions> {
        self.latest.lock().clone()
    }

    fn send(&self, event: ControlEvent) -> Result<()> {
        self.events
            .send(event)
            .map_err(|_| ChartBarError::Disconnected)
    }
}

/// Stateful chart control bar
///
/// Owns the five control states, the auto-reload ticker handle and the
/// outbound notification channel. All mutation happens on the event loop
/// thread; see the module documentation for the notification rules.
pub struct ControlBar {
    /// Control bar configuration
    config: BarConfig,
    /// Time window plus relativity flag
    range: TimeRange,
    /// Current node scope
    scope: ScopeSelection,
    /// Current column-layout density
    grid: GridDensity,
    /// Transient marker for the one snapshot caused by a ticker refresh
    auto_reload: bool,
    /// Armed ticker, present iff the range is relative
    ticker: Option<TickerHandle>,
    /// Generation handed to the next armed ticker
    next_generation: u64,
    /// Event receiver (taken when the event loop starts)
    event_receiver: Option<mpsc::Receiver<ControlEvent>>,
    /// Sender cloned into each armed ticker
    event_sender: mpsc::SyncSender<ControlEvent>,
    /// Options sender to the parent view
    options_sender: mpsc::SyncSender<ChartOptions>,
    /// Shared cell holding the most recently emitted snapshot
    latest: Arc<Mutex<Option<ChartOptions>>>,
}

impl ControlBar {
    /// Create a control bar with default state and its inbound handle
    ///
    /// Initial state: window = last `config.initial_window_ms` up to now,
    /// relative, scope and density at their defaults. Nothing is emitted and
    /// no ticker is armed until [`ControlBar::send_initial_options`] runs.
    pub fn new(
        config: BarConfig,
        options_sender: mpsc::SyncSender<ChartOptions>,
    ) -> (Self, BarHandle) {
        let (event_sender, event_receiver) = mpsc::sync_channel(CONTROL_QUEUE_DEPTH);
        let latest = Arc::new(Mutex::new(None));

        let handle = BarHandle {
            events: event_sender.clone(),
            latest: Arc::clone(&latest),
        };

        let bar = Self {
            range: TimeRange::new(config.initial_window_ms, unix_time_ms()),
            scope: ScopeSelection::default(),
            grid: GridDensity::default(),
            auto_reload: false,
            ticker: None,
            next_generation: 0,
            event_receiver: Some(event_receiver),
            event_sender,
            options_sender,
            latest,
            config,
        };

        (bar, handle)
    }

    /// Scope shortcuts to hand to the node-scope selector
    pub fn scope_presets(&self) -> &[ScopePreset] {
        &self.config.scope_presets
    }

    /// Input props for the metric-filter dialog, `None` when hidden
    pub fn metric_filter(&self) -> Option<&MetricFilterConfig> {
        self.config.metric_filter.as_ref()
    }

    /// Publish the initial snapshot and arm the auto-reload ticker
    ///
    /// Call once after construction (mount) so the parent renders from the
    /// default state.
    pub fn send_initial_options(&mut self) {
        use tracing::info;

        info!("publishing initial options and arming auto-reload");
        self.rearm_ticker();
        self.emit();
    }

    /// Take ownership of the event receiver if it hasn't been taken yet.
    /// Returns None if already taken. Caller should treat None as a no-op.
    fn take_event_receiver(&mut self) -> Option<mpsc::Receiver<ControlEvent>> {
        self.event_receiver.take()
    }

    /// Run the event loop until shutdown is requested
    ///
    /// Processes control events strictly in arrival order. On exit the ticker
    /// handle is dropped, which cancels and joins the timer thread.
    pub fn run(&mut self) {
        use tracing::{info, warn};

        let Some(event_receiver) = self.take_event_receiver() else {
            warn!("event loop already running; run() call ignored");
            return;
        };

        info!("entering control bar event loop");
        loop {
            match event_receiver.recv() {
                Ok(ControlEvent::Shutdown) => {
                    info!("shutdown requested");
                    break;
                }
                Ok(event) => self.handle_event(event),
                Err(_) => {
                    warn!("all control senders dropped, exiting event loop");
                    break;
                }
            }
        }

        // Unmount path: the timer must not outlive the bar
        self.ticker = None;
        info!("control bar event loop exited");
    }

    /// Spawn the event loop in a background thread
    pub fn start(mut self) -> std::thread::JoinHandle<()> {
        std::thread::spawn(move || self.run())
    }

    /// Apply one control event: mutate, manage the ticker, notify
    fn handle_event(&mut self, event: ControlEvent) {
        use tracing::{debug, info, warn};

        match event {
            ControlEvent::TimeSelected { window, relative } => {
                info!(
                    start = window.start,
                    end = window.end,
                    relative,
                    "time range selected"
                );
                if relative {
                    self.range.set_relative(window);
                } else {
                    self.range.set_absolute(window);
                }
                self.rearm_ticker();
                self.emit();
            }

            ControlEvent::RefreshClicked => {
                debug!("manual refresh");
                self.range.reload(unix_time_ms());
                self.rearm_ticker();
                // Refresh is never a no-op to the parent, even while absolute
                self.emit();
            }

            ControlEvent::ScopeChanged(scope) => {
                if !self.config.show_node_scope {
                    warn!("scope event while node-scope selector is hidden, dropping");
                    return;
                }
                debug!(?scope, "node scope changed");
                // Selections are replaced wholesale; notify even on equal values
                self.scope = scope;
                self.emit();
            }

            ControlEvent::DensityChanged(grid) => {
                if !self.config.show_grid_select {
                    warn!("density event while density select is hidden, dropping");
                    return;
                }
                if grid == self.grid {
                    debug!(span = grid.span(), "density unchanged, skipping");
                    return;
                }
                debug!(span = grid.span(), "grid density changed");
                self.grid = grid;
                self.emit();
            }

            ControlEvent::MetricFilterOpened => {
                // The dialog is an external collaborator; opening it changes
                // no control state and must not notify
                debug!("metric filter dialog opened");
            }

            ControlEvent::Tick { generation, now_ms } => {
                let live = self
                    .ticker
                    .as_ref()
                    .is_some_and(|ticker| ticker.generation() == generation);
                if !live {
                    debug!(generation, "discarding stale tick");
                    return;
                }
                debug!(generation, now_ms, "auto-reload tick");
                self.auto_reload = true;
                self.range.reload(now_ms);
                self.rearm_ticker();
                self.emit();
            }

            ControlEvent::Shutdown => unreachable!("handled by the event loop"),
        }
    }

    /// Replace the owned ticker handle
    ///
    /// Dropping the previous handle cancels it and joins its thread; a fresh
    /// one is armed only while the range is relative, so the period restarts
    /// from every window or relativity change.
    fn rearm_ticker(&mut self) {
        use tracing::debug;

        self.ticker = None;
        if self.range.is_relative() {
            self.next_generation += 1;
            self.ticker = Some(TickerHandle::spawn(
                self.config.tick_interval(),
                self.next_generation,
                self.event_sender.clone(),
            ));
        } else {
            debug!("range is absolute, ticker stays disarmed");
        }
    }

    /// Build and deliver one snapshot, then reset the auto-reload marker
    fn emit(&mut self) {
        use tracing::{debug, warn};

        let options = ChartOptions {
            range: self.range.window(),
            relative: self.range.is_relative(),
            auto_reload: self.auto_reload,
            grid: self.grid,
            scope: self.scope.clone(),
        };

        *self.latest.lock() = Some(options.clone());

        debug!(auto_reload = options.auto_reload, "emitting options snapshot");
        if let Err(e) = self.options_sender.send(options) {
            warn!("failed to deliver options snapshot: {e}");
        }

        // The reset is out of band: it does not itself produce an emission
        self.auto_reload = false;
    }
}
