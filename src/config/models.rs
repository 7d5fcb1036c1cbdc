//! Configuration data models
//!
//! This module defines the data structures used to configure the control bar
//! and the payloads it exchanges with its collaborator widgets.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Column-layout density for the chart panel grid
///
/// The dashboard lays panels out on a 24-column grid; each variant carries the
/// span one panel occupies, so `ThreePerRow` panels span 8 columns and
/// `OnePerRow` panels span the full 24. Serialized as the raw span value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum GridDensity {
    /// Three panels per row (8-column span)
    ThreePerRow,
    /// Two panels per row (12-column span)
    #[default]
    TwoPerRow,
    /// One panel per row (24-column span)
    OnePerRow,
}

impl GridDensity {
    /// The selectable presets, in the order the density select shows them
    pub const ALL: [GridDensity; 3] = [
        GridDensity::ThreePerRow,
        GridDensity::TwoPerRow,
        GridDensity::OnePerRow,
    ];

    /// Grid span units occupied by one panel (out of 24)
    pub fn span(self) -> u8 {
        match self {
            GridDensity::ThreePerRow => 8,
            GridDensity::TwoPerRow => 12,
            GridDensity::OnePerRow => 24,
        }
    }

    /// Number of panels that fit in one row at this density
    pub fn panels_per_row(self) -> u8 {
        match self {
            GridDensity::ThreePerRow => 3,
            GridDensity::TwoPerRow => 2,
            GridDensity::OnePerRow => 1,
        }
    }

    /// Display label for the density select widget
    pub fn label(self) -> &'static str {
        match self {
            GridDensity::ThreePerRow => "3 columns",
            GridDensity::TwoPerRow => "2 columns",
            GridDensity::OnePerRow => "1 column",
        }
    }
}

impl From<GridDensity> for u8 {
    fn from(density: GridDensity) -> Self {
        density.span()
    }
}

impl TryFrom<u8> for GridDensity {
    type Error = String;

    fn try_from(span: u8) -> Result<Self, Self::Error> {
        match span {
            8 => Ok(GridDensity::ThreePerRow),
            12 => Ok(GridDensity::TwoPerRow),
            24 => Ok(GridDensity::OnePerRow),
            other => Err(format!("unknown grid span: {other}")),
        }
    }
}

/// The set of nodes/hosts a chart's data is limited to
///
/// Produced by the node-scope selector. The selection is replaced wholesale on
/// every change; node identifiers are opaque to the control bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeSelection {
    /// Top N nodes ranked by the charted metric
    TopN(u32),
    /// An explicit set of node identifiers
    Nodes(Vec<String>),
}

impl ScopeSelection {
    /// Whether this is a "top N" selection rather than an explicit node set
    pub fn is_top(&self) -> bool {
        matches!(self, ScopeSelection::TopN(_))
    }
}

impl Default for ScopeSelection {
    fn default() -> Self {
        ScopeSelection::TopN(5)
    }
}

/// A named scope shortcut offered by the node-scope selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopePreset {
    /// Label shown in the selector
    pub label: String,
    /// Node identifier the preset resolves to
    pub value: String,
}

/// Input props for the metric-filter dialog collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricFilterConfig {
    /// Metric category the dialog lists (e.g. "broker", "topic")
    pub metric_type: String,
    /// Title shown on the dialog drawer
    pub drawer_title: String,
    /// Metric names preselected when the dialog opens
    pub selected: Vec<String>,
}

/// Top-level control bar configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarConfig {
    /// Auto-reload period in milliseconds while the window is relative
    pub tick_interval_ms: u64,
    /// Length of the initial relative window in milliseconds
    pub initial_window_ms: i64,
    /// Whether the node-scope selector is rendered; scope events arriving
    /// while hidden are dropped
    pub show_node_scope: bool,
    /// Whether the density select is rendered; density events arriving while
    /// hidden are dropped
    pub show_grid_select: bool,
    /// Scope shortcuts offered to the node-scope selector
    pub scope_presets: Vec<ScopePreset>,
    /// Metric-filter dialog configuration; `None` hides the dialog entirely
    pub metric_filter: Option<MetricFilterConfig>,
}

impl BarConfig {
    /// Auto-reload period as a [`Duration`]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 60_000,
            initial_window_ms: 3_600_000,
            show_node_scope: true,
            show_grid_select: true,
            scope_presets: Vec::new(),
            metric_filter: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BarConfig::default();
        assert_eq!(config.tick_interval_ms, 60_000);
        assert_eq!(config.initial_window_ms, 3_600_000);
        assert!(config.show_node_scope);
        assert!(config.show_grid_select);
        assert!(config.scope_presets.is_empty());
        assert!(config.metric_filter.is_none());
    }

    #[test]
    fn test_default_density_is_middle_preset() {
        assert_eq!(GridDensity::default(), GridDensity::TwoPerRow);
        assert_eq!(GridDensity::ALL[1], GridDensity::default());
    }

    #[test]
    fn test_density_span_round_trip() {
        for density in GridDensity::ALL {
            assert_eq!(GridDensity::try_from(density.span()), Ok(density));
        }
        assert!(GridDensity::try_from(16).is_err());
    }

    #[test]
    fn test_density_serializes_as_span() {
        let json = serde_json::to_string(&GridDensity::OnePerRow).unwrap();
        assert_eq!(json, "24");
        let parsed: GridDensity = serde_json::from_str("8").unwrap();
        assert_eq!(parsed, GridDensity::ThreePerRow);
    }

    #[test]
    fn test_scope_default_is_top_five() {
        assert_eq!(ScopeSelection::default(), ScopeSelection::TopN(5));
        assert!(ScopeSelection::default().is_top());
        assert!(!ScopeSelection::Nodes(vec!["broker-1".to_string()]).is_top());
    }

    #[test]
    fn test_serialization() {
        let config = BarConfig {
            scope_presets: vec![ScopePreset {
                label: "All brokers".to_string(),
                value: "*".to_string(),
            }],
            metric_filter: Some(MetricFilterConfig {
                metric_type: "broker".to_string(),
                drawer_title: "Metric filter".to_string(),
                selected: vec!["BytesIn".to_string()],
            }),
            ..BarConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BarConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
