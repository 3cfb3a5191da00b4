//! Container timeline extraction.
//!
//! Copies the container's per-packet frame timing where supplied, deduces
//! offsets positionally past the end of the supplied entries, and dates
//! every packet relative to the container start instant.

use chrono::Utc;
use contracts::{ContainerEntry, ContainerTiming, PacketTiming, TimeIn, TimelineConfig};

use crate::clock::{from_millis, millis};

/// Extract the container timeline for `packet_count` packets.
pub(crate) fn extract_container_timeline(
    packet_count: usize,
    timing: Option<&ContainerTiming>,
    config: &TimelineConfig,
) -> Vec<Option<PacketTiming>> {
    if config.time_in == TimeIn::Gps {
        return Vec::new();
    }

    // With no container data at all, a single synthetic entry applied
    // positionally still yields a usable timeline
    let synthesized;
    let timing = match timing {
        Some(t) if !t.entries.is_empty() => t,
        _ => {
            synthesized = ContainerTiming {
                start: Utc::now(),
                entries: vec![ContainerEntry {
                    cts: 0.0,
                    duration: config.fallback.packet_duration_ms,
                }],
            };
            &synthesized
        }
    };

    let start_ms = millis(timing.start);
    let mut out: Vec<Option<PacketTiming>> = Vec::with_capacity(packet_count);

    for i in 0..packet_count {
        let (cts, duration) = match timing.entries.get(i) {
            Some(entry) => (Some(entry.cts), Some(entry.duration)),
            None => {
                let prev = out.last().copied().flatten().unwrap_or_default();
                let cts = match (prev.cts, prev.duration) {
                    (Some(c), Some(d)) => Some(c + d),
                    _ => None,
                };
                // The final packet's true duration is unknowable; leave it
                // absent rather than guessing
                let duration = if i + 1 < packet_count {
                    prev.duration
                } else {
                    None
                };
                (cts, duration)
            }
        };

        out.push(Some(PacketTiming {
            date: cts.map(|c| from_millis(start_ms + c)),
            cts,
            duration,
        }));
    }

    out
}
