//! Per-sample time assignment.
//!
//! Fuses the GPS and container timelines and rewrites every sample with its
//! elapsed time and date. Elapsed time prefers container timing and falls
//! back to GPS; dates prefer GPS and fall back to container timing. The two
//! choices are independent and may draw from different sources for the same
//! packet.

use std::collections::HashMap;

use contracts::{
    ContainerTiming, FourCc, FusionReport, PacketTiming, TelemetryPacket, TimeOut,
    TimelineConfig, TimelineError,
};
use tracing::instrument;

use crate::clock::{from_millis, millis};
use crate::container;
use crate::gps;

/// Timeline fusion engine
#[derive(Debug, Clone, Default)]
pub struct TimeFuser {
    config: TimelineConfig,
}

impl TimeFuser {
    /// Create a fuser with the given configuration
    pub fn new(config: TimelineConfig) -> Self {
        Self { config }
    }

    /// Assign timing to every sample.
    ///
    /// Returns a deep copy of the input with samples rewritten; the caller's
    /// tree is never mutated. An empty packet sequence is reported once and
    /// the unmodified copy returned.
    pub fn assign(
        &self,
        packets: &[TelemetryPacket],
        container: Option<&ContainerTiming>,
    ) -> Vec<TelemetryPacket> {
        self.assign_with_report(packets, container).0
    }

    /// Assign timing and return the pass summary alongside the tree
    #[instrument(
        name = "time_fuser_assign",
        skip_all,
        fields(packets = packets.len())
    )]
    pub fn assign_with_report(
        &self,
        packets: &[TelemetryPacket],
        container: Option<&ContainerTiming>,
    ) -> (Vec<TelemetryPacket>, FusionReport) {
        let mut result = packets.to_vec();
        let mut report = FusionReport {
            packet_count: result.len(),
            ..FusionReport::default()
        };

        if result.is_empty() {
            let err = TimelineError::invalid_input("no telemetry packets");
            tracing::error!(error = %err, "time assignment skipped");
            metrics::counter!("timeline_invalid_input_total").increment(1);
            return (result, report);
        }

        let gps = gps::extract_gps_timeline(&mut result, &self.config);
        let container_timeline =
            container::extract_container_timeline(result.len(), container, &self.config);

        report.gps_dated_packets = gps.dated;
        report.gps_interpolated_packets = gps.interpolated;
        report.malformed_dates = gps.malformed;
        report.container_entries = container.map(|t| t.entries.len()).unwrap_or(0);
        report.synthesized_container =
            !container_timeline.is_empty() && report.container_entries == 0;

        self.fuse(&mut result, &gps.entries, &container_timeline, &mut report);

        metrics::counter!("timeline_passes_total").increment(1);
        metrics::counter!("timeline_samples_timed_total").increment(report.timed_samples);
        metrics::counter!("timeline_samples_untimed_total").increment(report.untimed_samples);
        tracing::debug!(
            packets = report.packet_count,
            gps_dated = report.gps_dated_packets,
            timed = report.timed_samples,
            untimed = report.untimed_samples,
            "time assignment complete"
        );

        (result, report)
    }

    fn fuse(
        &self,
        packets: &mut [TelemetryPacket],
        gps: &[Option<PacketTiming>],
        container: &[Option<PacketTiming>],
        report: &mut FusionReport,
    ) {
        // Last known per-sample steps per stream type, for packets that do
        // not supply their own duration (typically the final one). Reset
        // per fusion pass.
        let mut elapsed_steps: HashMap<FourCc, f64> = HashMap::new();
        let mut date_steps: HashMap<FourCc, f64> = HashMap::new();

        for (i, packet) in packets.iter_mut().enumerate() {
            let elapsed = pick(container, i).or_else(|| pick(gps, i));
            let dated = pick(gps, i).or_else(|| pick(container, i));

            let (cts, duration) = match elapsed {
                Some(t) => (t.cts, t.duration),
                None => (None, None),
            };
            let (date, date_duration) = match dated {
                Some(t) => (t.date, t.duration),
                None => (None, None),
            };

            for stream in &mut packet.streams {
                let count = stream.samples.len();
                if count == 0 {
                    continue;
                }

                if let Some(d) = duration {
                    elapsed_steps.insert(stream.four_cc, d / count as f64);
                }
                if let Some(d) = date_duration {
                    date_steps.insert(stream.four_cc, d / count as f64);
                }

                let step = elapsed_steps.get(&stream.four_cc).copied();
                let (Some(start_cts), Some(step)) = (cts, step) else {
                    report.untimed_samples += count as u64;
                    continue;
                };
                let date_step = date_steps.get(&stream.four_cc).copied();

                let mut curr_cts = start_cts;
                let mut curr_date_ms = date.map(millis);
                for sample in &mut stream.samples {
                    if self.config.time_out != TimeOut::Date || self.config.group_times.is_some()
                    {
                        sample.cts = Some(curr_cts);
                    }
                    if self.config.time_out != TimeOut::Cts {
                        sample.date = curr_date_ms.map(from_millis);
                    }
                    curr_cts += step;
                    // The date advances only while a date step is known
                    if let (Some(ms), Some(ds)) = (curr_date_ms, date_step) {
                        curr_date_ms = Some(ms + ds);
                    }
                }
                report.timed_samples += count as u64;
            }
        }
    }
}

/// Entry for packet `i`, when the timeline is enabled and knows it
fn pick(timeline: &[Option<PacketTiming>], i: usize) -> Option<PacketTiming> {
    timeline.get(i).copied().flatten()
}
