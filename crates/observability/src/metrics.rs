//! Fusion metrics collection.
//!
//! Records and aggregates per-pass statistics from `FusionReport`.

use contracts::FusionReport;
use metrics::{counter, gauge, histogram};

/// Record metrics from a FusionReport.
///
/// Call once per fusion pass.
///
/// # Example
///
/// ```ignore
/// use observability::record_fusion_metrics;
///
/// let (timed, report) = fuser.assign_with_report(&packets, None);
/// record_fusion_metrics(&report);
/// ```
pub fn record_fusion_metrics(report: &FusionReport) {
    counter!("timeline_fusion_passes_total").increment(1);
    gauge!("timeline_fusion_last_packet_count").set(report.packet_count as f64);

    histogram!("timeline_fusion_gps_coverage").record(report.gps_coverage());
    histogram!("timeline_fusion_timed_ratio").record(report.timed_ratio());

    if report.malformed_dates > 0 {
        counter!("timeline_fusion_malformed_dates_total")
            .increment(report.malformed_dates as u64);
    }
    if report.gps_interpolated_packets > 0 {
        counter!("timeline_fusion_interpolated_packets_total")
            .increment(report.gps_interpolated_packets as u64);
    }
    if report.synthesized_container {
        counter!("timeline_fusion_synthesized_container_total").increment(1);
    }

    counter!("timeline_fusion_samples_total", "status" => "timed")
        .increment(report.timed_samples);
    counter!("timeline_fusion_samples_total", "status" => "untimed")
        .increment(report.untimed_samples);
}

/// Record the wall-clock duration of one fusion pass
pub fn record_pass_duration_ms(duration_ms: f64) {
    histogram!("timeline_fusion_pass_duration_ms").record(duration_ms);
}

/// Fusion metrics aggregator
///
/// Aggregates reports in memory for summaries at the end of a run.
#[derive(Debug, Clone, Default)]
pub struct FusionMetricsAggregator {
    /// Total fusion passes
    pub total_passes: u64,

    /// Total packets across passes
    pub total_packets: u64,

    /// Total malformed GPS dates
    pub total_malformed_dates: u64,

    /// Total gap-filled packets
    pub total_interpolated: u64,

    /// Passes that needed a synthesized container timeline
    pub synthesized_containers: u64,

    /// Total timed samples
    pub total_timed_samples: u64,

    /// Total untimed samples
    pub total_untimed_samples: u64,

    /// GPS coverage statistics per pass
    pub gps_coverage_stats: RunningStats,

    /// Timed-sample ratio statistics per pass
    pub timed_ratio_stats: RunningStats,
}

impl FusionMetricsAggregator {
    /// Create a new aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Update aggregate statistics from one pass
    pub fn update(&mut self, report: &FusionReport) {
        self.total_passes += 1;
        self.total_packets += report.packet_count as u64;
        self.total_malformed_dates += report.malformed_dates as u64;
        self.total_interpolated += report.gps_interpolated_packets as u64;
        if report.synthesized_container {
            self.synthesized_containers += 1;
        }
        self.total_timed_samples += report.timed_samples;
        self.total_untimed_samples += report.untimed_samples;

        self.gps_coverage_stats.push(report.gps_coverage());
        self.timed_ratio_stats.push(report.timed_ratio());
    }

    /// Produce a summary report
    pub fn summary(&self) -> MetricsSummary {
        let total_samples = self.total_timed_samples + self.total_untimed_samples;
        MetricsSummary {
            total_passes: self.total_passes,
            total_packets: self.total_packets,
            total_malformed_dates: self.total_malformed_dates,
            total_interpolated: self.total_interpolated,
            synthesized_containers: self.synthesized_containers,
            total_timed_samples: self.total_timed_samples,
            total_untimed_samples: self.total_untimed_samples,
            timed_rate: if total_samples > 0 {
                self.total_timed_samples as f64 / total_samples as f64 * 100.0
            } else {
                0.0
            },
            gps_coverage: StatsSummary::from(&self.gps_coverage_stats),
            timed_ratio: StatsSummary::from(&self.timed_ratio_stats),
        }
    }

    /// Reset all statistics
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Metrics summary
#[derive(Debug, Clone, Default)]
pub struct MetricsSummary {
    pub total_passes: u64,
    pub total_packets: u64,
    pub total_malformed_dates: u64,
    pub total_interpolated: u64,
    pub synthesized_containers: u64,
    pub total_timed_samples: u64,
    pub total_untimed_samples: u64,
    pub timed_rate: f64,
    pub gps_coverage: StatsSummary,
    pub timed_ratio: StatsSummary,
}

impl std::fmt::Display for MetricsSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Fusion Metrics Summary ===")?;
        writeln!(f, "Total passes: {}", self.total_passes)?;
        writeln!(f, "Total packets: {}", self.total_packets)?;
        writeln!(f, "Malformed GPS dates: {}", self.total_malformed_dates)?;
        writeln!(f, "Gap-filled packets: {}", self.total_interpolated)?;
        writeln!(
            f,
            "Synthesized container timelines: {}",
            self.synthesized_containers
        )?;
        writeln!(
            f,
            "Timed samples: {} ({:.2}%)",
            self.total_timed_samples, self.timed_rate
        )?;
        writeln!(f, "Untimed samples: {}", self.total_untimed_samples)?;
        writeln!(f, "GPS coverage: {}", self.gps_coverage)?;
        writeln!(f, "Timed ratio: {}", self.timed_ratio)?;
        Ok(())
    }
}

/// Statistics summary
#[derive(Debug, Clone, Default)]
pub struct StatsSummary {
    pub count: u64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl From<&RunningStats> for StatsSummary {
    fn from(stats: &RunningStats) -> Self {
        Self {
            count: stats.count(),
            min: stats.min(),
            max: stats.max(),
            mean: stats.mean(),
            std_dev: stats.std_dev(),
        }
    }
}

impl std::fmt::Display for StatsSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.count == 0 {
            write!(f, "N/A")
        } else {
            write!(
                f,
                "min={:.3}, max={:.3}, mean={:.3}, std={:.3} (n={})",
                self.min, self.max, self.mean, self.std_dev, self.count
            )
        }
    }
}

/// Online statistics calculator (Welford's algorithm)
#[derive(Debug, Clone, Default)]
pub struct RunningStats {
    count: u64,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl RunningStats {
    /// Add a new value
    pub fn push(&mut self, value: f64) {
        self.count += 1;

        if self.count == 1 {
            self.min = value;
            self.max = value;
            self.mean = value;
            self.m2 = 0.0;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);

            let delta = value - self.mean;
            self.mean += delta / self.count as f64;
            let delta2 = value - self.mean;
            self.m2 += delta * delta2;
        }
    }

    /// Number of samples
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Mean value
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.mean
        }
    }

    /// Sample variance
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    /// Standard deviation
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Minimum value
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Maximum value
    pub fn max(&self) -> f64 {
        self.max
    }
}
