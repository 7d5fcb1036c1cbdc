//! Control bar configuration module
//!
//! Defines the data model the control bar is parameterized with: the grid
//! density presets, the node scope selection, and the `BarConfig` the parent
//! dashboard constructs the bar from. All of it is serde-serializable so the
//! parent can ship it across a JSON boundary.

pub mod models;

pub use models::{BarConfig, GridDensity, MetricFilterConfig, ScopePreset, ScopeSelection};
