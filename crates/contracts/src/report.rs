//! FusionReport - per-pass summary of a time assignment, for diagnostics.

use serde::{Deserialize, Serialize};

/// Summary of one fusion pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FusionReport {
    /// Packets in the input sequence
    pub packet_count: usize,

    /// Packets with a directly parsed GPS date
    pub gps_dated_packets: usize,

    /// Packets whose GPS date was synthesized by gap filling
    pub gps_interpolated_packets: usize,

    /// GPS date strings that failed to parse
    pub malformed_dates: usize,

    /// Container timing entries supplied by the caller
    pub container_entries: usize,

    /// Whether a container timeline had to be synthesized
    pub synthesized_container: bool,

    /// Samples that received timing
    pub timed_samples: u64,

    /// Samples left untimed
    pub untimed_samples: u64,
}

impl FusionReport {
    /// Fraction of packets with a directly parsed GPS date (0-1)
    pub fn gps_coverage(&self) -> f64 {
        if self.packet_count == 0 {
            0.0
        } else {
            self.gps_dated_packets as f64 / self.packet_count as f64
        }
    }

    /// Fraction of samples that received timing (0-1)
    pub fn timed_ratio(&self) -> f64 {
        let total = self.timed_samples + self.untimed_samples;
        if total == 0 {
            0.0
        } else {
            self.timed_samples as f64 / total as f64
        }
    }
}
