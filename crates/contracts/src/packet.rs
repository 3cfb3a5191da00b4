//! TelemetryPacket - decoder output
//!
//! Raw packet/stream/sample tree consumed by the timeline engine.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::FourCc;

/// One unit of telemetry captured per container frame/chunk.
///
/// Produced by the upstream binary decoder; the timeline engine only reads
/// the streams and rewrites their samples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryPacket {
    /// Device ID, when the decoder reported one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<u32>,

    /// Device name, when the decoder reported one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,

    /// Sample streams in decode order
    #[serde(default)]
    pub streams: Vec<SampleStream>,
}

impl TelemetryPacket {
    /// Create a packet from its streams
    pub fn new(streams: Vec<SampleStream>) -> Self {
        Self {
            device_id: None,
            device_name: None,
            streams,
        }
    }
}

/// A named group of homogeneous samples of one sensor type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleStream {
    /// Stream type code
    pub four_cc: FourCc,

    /// Raw samples in capture order
    pub samples: Vec<Sample>,

    /// Embedded GPS UTC date string (`YYMMDDhhmmss.mmm`).
    /// Consumed (taken) during extraction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gps_date: Option<String>,
}

impl SampleStream {
    /// Create a stream without an embedded date
    pub fn new(four_cc: FourCc, samples: Vec<Sample>) -> Self {
        Self {
            four_cc,
            samples,
            gps_date: None,
        }
    }

    /// Attach an embedded GPS date string
    pub fn with_gps_date(mut self, raw: impl Into<String>) -> Self {
        self.gps_date = Some(raw.into());
        self
    }
}

/// One telemetry reading, optionally timed by the fusion pass.
///
/// Input samples carry `None` timing; fusion fills the optional fields per
/// the output configuration. A sample whose timing could not be resolved
/// keeps only its value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    /// Raw value
    pub value: SampleValue,

    /// Elapsed time since recording start (milliseconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cts: Option<f64>,

    /// Wall-clock date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

impl Sample {
    /// An untimed sample
    pub fn new(value: SampleValue) -> Self {
        Self {
            value,
            cts: None,
            date: None,
        }
    }
}

/// Raw sample payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleValue {
    /// Single reading
    Scalar(f64),

    /// Multi-component reading (GPS fix, accelerometer axes, …)
    Vector(Vec<f64>),

    /// Text payload
    Text(String),

    /// Undecoded bytes (fallback)
    Raw(Bytes),
}
