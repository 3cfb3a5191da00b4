//! Fusion configuration contracts that can be shared across crates.

use serde::{Deserialize, Serialize};

/// Timeline fusion configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    /// Restrict timing input to a single source
    #[serde(default)]
    pub time_in: TimeIn,

    /// Which timing fields to attach to samples
    #[serde(default)]
    pub time_out: TimeOut,

    /// Grouping requested by a downstream pass; forces elapsed time to be
    /// retained even in date-only output
    #[serde(default)]
    pub group_times: Option<GroupTimes>,

    /// Fallbacks for missing timing data
    #[serde(default)]
    pub fallback: FallbackConfig,
}

/// Timing input restriction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeIn {
    /// Use both sources with per-packet fallback
    #[default]
    Auto,
    /// GPS stream dates only
    Gps,
    /// Container frame timing only
    Container,
}

/// Output timing selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOut {
    /// Attach both elapsed time and date
    #[default]
    Both,
    /// Elapsed time only
    Cts,
    /// Date only
    Date,
}

/// Sample grouping requested by a downstream pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupTimes {
    /// Group samples to video frames
    Frames,
    /// Group samples to a fixed period in milliseconds
    Millis(f64),
}

/// Fallbacks for missing timing data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Duration assumed for a packet when no source supplies one (ms)
    pub packet_duration_ms: f64,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            packet_duration_ms: 1001.0,
        }
    }
}
