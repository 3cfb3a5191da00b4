//! Per-packet timing records and container timing input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timing deduced for one packet by one extractor.
///
/// A full timeline is a `Vec<Option<PacketTiming>>` aligned with the packet
/// sequence; a `None` element means the source knows nothing about that
/// packet. Individual fields are absent when the source could not deduce
/// them; absence is distinct from zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PacketTiming {
    /// Wall-clock instant of the packet start
    pub date: Option<DateTime<Utc>>,

    /// Elapsed milliseconds since the first known packet
    pub cts: Option<f64>,

    /// Packet span in milliseconds
    pub duration: Option<f64>,
}

impl PacketTiming {
    /// A dated record whose duration is not yet known
    pub fn dated(date: DateTime<Utc>, cts: f64) -> Self {
        Self {
            date: Some(date),
            cts: Some(cts),
            duration: None,
        }
    }
}

/// Frame timing supplied by the container format.
///
/// Container timing is container-relative: the only wall-clock instant it
/// carries is the recording start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerTiming {
    /// Wall-clock instant of the first frame
    pub start: DateTime<Utc>,

    /// Per-packet timing, index-aligned with the packet sequence,
    /// possibly shorter than the packet count
    pub entries: Vec<ContainerEntry>,
}

/// One container timing entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerEntry {
    /// Elapsed milliseconds from the container start
    pub cts: f64,

    /// Frame duration in milliseconds
    pub duration: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_is_all_absent() {
        let timing = PacketTiming::default();
        assert!(timing.date.is_none());
        assert!(timing.cts.is_none());
        assert!(timing.duration.is_none());
    }

    #[test]
    fn test_dated_constructor() {
        let date = Utc.with_ymd_and_hms(2021, 1, 1, 12, 0, 0).unwrap();
        let timing = PacketTiming::dated(date, 500.0);
        assert_eq!(timing.date, Some(date));
        assert_eq!(timing.cts, Some(500.0));
        assert!(timing.duration.is_none());
    }

    #[test]
    fn test_container_timing_serde() {
        let timing = ContainerTiming {
            start: Utc.with_ymd_and_hms(2021, 6, 1, 8, 30, 0).unwrap(),
            entries: vec![
                ContainerEntry {
                    cts: 0.0,
                    duration: 1001.0,
                },
                ContainerEntry {
                    cts: 1001.0,
                    duration: 1001.0,
                },
            ],
        };

        let json = serde_json::to_string(&timing).unwrap();
        let parsed: ContainerTiming = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.entries, timing.entries);
        assert_eq!(parsed.start, timing.start);
    }
}
