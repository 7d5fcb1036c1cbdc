//! Auto-reload ticker module
//!
//! Keeps a relative time window "live" by driving a duration-preserving
//! reload once per period.
//!
//! # Overview
//!
//! - **Owned handle**: the controller stores a [`TickerHandle`] next to the
//!   relativity flag; arming, re-arming and cancelling are all "replace the
//!   handle"
//! - **Cancellable**: dropping the handle closes the stop channel, wakes the
//!   timer thread and joins it — no timer outlives its owning state
//! - **Generation stamped**: every tick carries the generation of the handle
//!   that produced it, so a tick that raced its own cancellation is discarded
//!   by the controller instead of reloading a torn-down range
//!
//! # Lifecycle
//!
//! At most one handle is live at any instant. The controller replaces it
//! whenever the window or the relativity flag changes, arms a new one only
//! while the range is relative, and drops the last one when its event loop
//! exits.

pub mod auto_reload;

pub use auto_reload::TickerHandle;
