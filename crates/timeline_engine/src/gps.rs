//! GPS timeline extraction.
//!
//! Walks packets pulling the embedded GPS UTC date out of each stream,
//! anchors elapsed time at the first parsed date and late-assigns each dated
//! packet's duration once its successor is seen. Undated packets go through
//! the gap filler.

use chrono::{DateTime, NaiveDate, Utc};
use contracts::{PacketTiming, TelemetryPacket, TimeIn, TimelineConfig, TimelineError};

use crate::clock::millis;
use crate::gaps;

/// GPS timeline plus extraction counters
#[derive(Debug, Default)]
pub(crate) struct GpsExtraction {
    /// One entry per input packet; empty when GPS timing is disabled
    pub entries: Vec<Option<PacketTiming>>,
    /// Packets with a directly parsed date
    pub dated: usize,
    /// Packets synthesized by gap filling
    pub interpolated: usize,
    /// Date strings that failed to parse
    pub malformed: usize,
}

/// Parse the fixed-width `YYMMDDhhmmss.mmm` GPS date format.
///
/// Two-digit years are 2000-based.
pub(crate) fn parse_gps_date(raw: &str) -> Result<DateTime<Utc>, TimelineError> {
    let bytes = raw.as_bytes();
    if bytes.len() != 16
        || bytes[12] != b'.'
        || !bytes[..12].iter().all(u8::is_ascii_digit)
        || !bytes[13..].iter().all(u8::is_ascii_digit)
    {
        return Err(TimelineError::malformed_date(raw));
    }

    let digit = |i: usize| (bytes[i] - b'0') as u32;
    let two = |i: usize| digit(i) * 10 + digit(i + 1);

    let year = 2000 + two(0) as i32;
    let month = two(2);
    let day = two(4);
    let milli = digit(13) * 100 + digit(14) * 10 + digit(15);

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_milli_opt(two(6), two(8), two(10), milli))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| TimelineError::malformed_date(raw))
}

/// Extract the GPS timeline, consuming each stream's embedded date.
pub(crate) fn extract_gps_timeline(
    packets: &mut [TelemetryPacket],
    config: &TimelineConfig,
) -> GpsExtraction {
    let mut out = GpsExtraction::default();
    if config.time_in == TimeIn::Container {
        return out;
    }

    let mut epoch_ms: Option<f64> = None;
    for packet in packets.iter_mut() {
        let mut date = None;
        for stream in &mut packet.streams {
            let Some(raw) = stream.gps_date.take() else {
                continue;
            };
            // The last stream carrying a date wins, even a malformed one
            date = match parse_gps_date(&raw) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    out.malformed += 1;
                    metrics::counter!("timeline_malformed_dates_total").increment(1);
                    tracing::warn!(error = %err, "GPS date ignored");
                    None
                }
            };
        }

        match date {
            Some(date) => {
                let date_ms = millis(date);
                let epoch = *epoch_ms.get_or_insert(date_ms);
                // The previous dated packet's duration is only fixed now
                if let Some(prev) = out.entries.last_mut().and_then(Option::as_mut) {
                    if let Some(prev_date) = prev.date {
                        prev.duration = Some(date_ms - millis(prev_date));
                    }
                }
                out.entries.push(Some(PacketTiming::dated(date, date_ms - epoch)));
                out.dated += 1;
            }
            None => {
                out.entries.push(None);
                metrics::counter!("timeline_gps_undated_packets_total").increment(1);
            }
        }
    }

    if let Some(epoch) = epoch_ms {
        out.interpolated = gaps::fill_gaps(&mut out.entries, epoch);
    }

    // A lone dated packet still gets a usable span
    if out.entries.len() == 1 {
        if let Some(entry) = out.entries[0].as_mut() {
            if entry.duration.is_none() {
                entry.duration = Some(config.fallback.packet_duration_ms);
            }
        }
    }

    out
}
