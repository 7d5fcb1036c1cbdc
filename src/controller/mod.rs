//! Control bar orchestration module
//!
//! This module coordinates the time range, node scope, grid density and
//! auto-reload concerns, implementing the core control bar logic.
//!
//! # Overview
//!
//! The control bar is the central coordinator that:
//! - **Receives control events** from the collaborator widgets via [`BarHandle`]
//! - **Keeps a relative window live** by consuming ticks from the armed
//!   [`crate::ticker::TickerHandle`]
//! - **Owns the ticker lifecycle**, replacing the handle whenever the window
//!   or relativity changes and cancelling it on every exit path
//! - **Emits one consolidated snapshot** to the parent view per state change
//!
//! # Architecture
//!
//! - `ControlBar`: main controller owning all control state and the event loop
//! - `BarHandle`: cloneable inbound surface for the rendering-layer widgets
//! - `ChartOptions`: state snapshot sent to the parent for chart re-rendering
//! - **Event-driven design**: every mutation arrives as a [`ControlEvent`] on
//!   one channel, so change-and-notify cycles never interleave
//!
//! # Event Flow
//!
//! ```text
//! widgets → BarHandle → ControlEvent → ControlBar → ChartOptions → parent
//!                            ↑              ↓
//!                       TickerHandle ← re-arm/cancel
//! ```
//!
//! # Notification Rules
//!
//! Exactly one snapshot per event that alters the window, relativity, scope or
//! density. Window and scope are replaced wholesale and always notify, even
//! when the new value compares equal (a manual refresh must stay visible to
//! the parent); density notifies only when the value differs. The snapshot
//! produced directly by a tick carries `auto_reload = true`; the flag resets
//! to false right after that emission without re-triggering notification.

pub mod bar_controller;

pub use bar_controller::{BarHandle, ChartOptions, ControlBar, ControlEvent};
