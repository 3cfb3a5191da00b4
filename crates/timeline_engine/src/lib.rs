//! # Timeline Engine
//!
//! Per-sample time reconstruction for video telemetry tracks.
//!
//! Two partially-reliable sources cover the same packet sequence: sparse GPS
//! dates embedded in the sample streams, and frame-accurate container
//! timing. Each is extracted into a per-packet timeline, gaps are
//! interpolated or extrapolated, and the two are fused into one
//! elapsed-time/date assignment per sample.
//!
//! ## Usage
//!
//! ```ignore
//! use timeline_engine::{TimeFuser, TimelineConfig};
//!
//! let fuser = TimeFuser::new(TimelineConfig::default());
//! let timed = fuser.assign(&packets, Some(&container_timing));
//! ```

mod clock;
mod container;
mod fuser;
mod gaps;
mod gps;

pub use fuser::TimeFuser;

// Re-export contracts types
pub use contracts::{
    ContainerEntry, ContainerTiming, FusionReport, PacketTiming, TelemetryPacket, TimeIn,
    TimeOut, TimelineConfig, TimelineError,
};
