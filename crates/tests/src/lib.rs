//! # Integration Tests
//!
//! Cross-crate and end-to-end tests.
//!
//! Covers:
//! - contract serialization snapshots
//! - config file -> fuser -> per-sample assertions
//! - metrics aggregation over fusion reports

#[cfg(test)]
mod contract_tests {
    use contracts::{FourCc, Sample, SampleStream, SampleValue, TelemetryPacket};

    #[test]
    fn test_untimed_tree_round_trips_unchanged() {
        let packet = TelemetryPacket::new(vec![SampleStream::new(
            FourCc::GPS5,
            vec![Sample::new(SampleValue::Vector(vec![
                33.12, -117.3, 12.0, 1.5, 1.6,
            ]))],
        )
        .with_gps_date("210101120000.000")]);

        let json = serde_json::to_string(&packet).unwrap();
        let parsed: TelemetryPacket = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.streams[0].four_cc, FourCc::GPS5);
        assert_eq!(
            parsed.streams[0].gps_date.as_deref(),
            Some("210101120000.000")
        );
        // No timing fields appear before fusion
        assert!(!json.contains("\"cts\""));
        assert!(!json.contains("\"date\""));
    }
}

#[cfg(test)]
mod e2e_tests {
    use chrono::{TimeZone, Utc};
    use config_loader::{ConfigFormat, ConfigLoader};
    use contracts::{
        ContainerEntry, ContainerTiming, FourCc, Sample, SampleStream, SampleValue,
        TelemetryPacket,
    };
    use observability::FusionMetricsAggregator;
    use timeline_engine::TimeFuser;

    fn gps_packet(date: &str, sample_count: usize) -> TelemetryPacket {
        let samples = (0..sample_count)
            .map(|i| Sample::new(SampleValue::Vector(vec![i as f64; 5])))
            .collect();
        TelemetryPacket::new(vec![
            SampleStream::new(FourCc::GPS5, samples).with_gps_date(date)
        ])
    }

    fn container(entry_durations: &[f64]) -> ContainerTiming {
        let mut cts = 0.0;
        let entries = entry_durations
            .iter()
            .map(|&duration| {
                let entry = ContainerEntry { cts, duration };
                cts += duration;
                entry
            })
            .collect();
        ContainerTiming {
            start: Utc.with_ymd_and_hms(2021, 1, 1, 12, 0, 0).unwrap(),
            entries,
        }
    }

    /// End-to-end: TOML config -> ConfigLoader -> TimeFuser -> samples
    #[test]
    fn test_e2e_config_to_timed_samples() {
        let config = ConfigLoader::load_from_str(
            r#"
time_in = "auto"
time_out = "both"
"#,
            ConfigFormat::Toml,
        )
        .unwrap();

        let packets = vec![
            gps_packet("210101120000.000", 2),
            gps_packet("210101120001.000", 2),
        ];
        let timing = container(&[1000.0, 1000.0]);

        let fuser = TimeFuser::new(config);
        let (timed, report) = fuser.assign_with_report(&packets, Some(&timing));

        assert_eq!(report.packet_count, 2);
        assert_eq!(report.gps_dated_packets, 2);
        assert_eq!(report.timed_samples, 4);
        assert_eq!(report.untimed_samples, 0);
        assert!(!report.synthesized_container);

        // Elapsed time from the container, two samples per 1000 ms packet
        let samples: Vec<f64> = timed
            .iter()
            .flat_map(|p| &p.streams[0].samples)
            .map(|s| s.cts.unwrap())
            .collect();
        assert_eq!(samples, vec![0.0, 500.0, 1000.0, 1500.0]);

        // Dates from GPS
        assert_eq!(
            timed[1].streams[0].samples[0].date,
            Some(Utc.with_ymd_and_hms(2021, 1, 1, 12, 0, 1).unwrap())
        );
    }

    /// Date-only output keeps elapsed time when grouping is requested
    #[test]
    fn test_e2e_date_only_with_grouping() {
        let config = ConfigLoader::load_from_str(
            r#"
time_out = "date"
group_times = "frames"
"#,
            ConfigFormat::Toml,
        )
        .unwrap();

        let packets = vec![gps_packet("210101120000.000", 1)];
        let timed = TimeFuser::new(config).assign(&packets, Some(&container(&[1001.0])));

        let sample = &timed[0].streams[0].samples[0];
        assert!(sample.date.is_some());
        assert!(sample.cts.is_some());
    }

    /// GPS gaps are bridged while container timing stays authoritative for
    /// elapsed time
    #[test]
    fn test_e2e_mixed_sources_with_gps_gap() {
        let config = ConfigLoader::load_from_str("", ConfigFormat::Toml).unwrap();

        let mut packets = vec![
            gps_packet("210101120000.000", 1),
            gps_packet("210101120001.000", 1),
            gps_packet("210101120002.000", 1),
        ];
        // Middle packet loses its date string entirely
        packets[1].streams[0].gps_date = None;

        let timing = container(&[900.0, 900.0, 900.0]);
        let (timed, report) = TimeFuser::new(config).assign_with_report(&packets, Some(&timing));

        assert_eq!(report.gps_dated_packets, 2);
        assert_eq!(report.gps_interpolated_packets, 1);

        // Elapsed follows the container cadence
        let cts: Vec<f64> = timed
            .iter()
            .map(|p| p.streams[0].samples[0].cts.unwrap())
            .collect();
        assert_eq!(cts, vec![0.0, 900.0, 1800.0]);

        // The bridged date lands halfway between its neighbors
        assert_eq!(
            timed[1].streams[0].samples[0].date,
            Some(Utc.with_ymd_and_hms(2021, 1, 1, 12, 0, 1).unwrap())
        );
    }

    /// Reports accumulate across passes in the aggregator
    #[test]
    fn test_e2e_metrics_aggregation() {
        let fuser = TimeFuser::new(Default::default());
        let mut aggregator = FusionMetricsAggregator::new();

        for _ in 0..3 {
            let packets = vec![
                gps_packet("210101120000.000", 2),
                gps_packet("210101120001.000", 2),
            ];
            let (_, report) = fuser.assign_with_report(&packets, None);
            aggregator.update(&report);
        }

        let summary = aggregator.summary();
        assert_eq!(summary.total_passes, 3);
        assert_eq!(summary.total_packets, 6);
        assert_eq!(summary.total_timed_samples, 12);
        // No container timing was supplied; every pass synthesized one
        assert_eq!(summary.synthesized_containers, 3);
        assert!((summary.gps_coverage.mean - 1.0).abs() < 1e-12);
    }

    /// Consecutive fusion passes are independent: the duration memo does not
    /// leak between calls
    #[test]
    fn test_e2e_passes_are_independent() {
        let fuser = TimeFuser::new(ConfigLoader::load_from_str(
            r#"time_in = "gps""#,
            ConfigFormat::Toml,
        )
        .unwrap());

        let dated = vec![
            gps_packet("210101120000.000", 1),
            gps_packet("210101120010.000", 1),
        ];
        let first = fuser.assign(&dated, None);
        assert_eq!(first[1].streams[0].samples[0].cts, Some(10_000.0));

        // A fresh undated input sees no leftover step from the previous pass
        let undated = vec![TelemetryPacket::new(vec![SampleStream::new(
            FourCc::GPS5,
            vec![Sample::new(SampleValue::Scalar(0.0))],
        )])];
        let second = fuser.assign(&undated, None);
        assert!(second[0].streams[0].samples[0].cts.is_none());
    }
}
