//! Sparse-timeline gap filling.
//!
//! Two-pass sweep over a fixed-size sequence of optional timing records:
//! interior gaps are interpolated from the nearest later dated entry,
//! trailing gaps are extrapolated from the nearest known duration, then a
//! second pass fills each synthesized entry's own duration from its
//! successor's date.

use contracts::PacketTiming;

use crate::clock::{from_millis, millis};

/// Fill `None` entries in place.
///
/// `epoch_ms` anchors synthesized elapsed offsets (milliseconds since the
/// Unix epoch of the first dated packet). Entries before the first dated
/// one stay `None`. Returns the number of entries synthesized.
pub(crate) fn fill_gaps(entries: &mut [Option<PacketTiming>], epoch_ms: f64) -> usize {
    let mut pending: Vec<usize> = Vec::new();

    for i in 1..entries.len() {
        if entries[i].is_some() {
            continue;
        }
        let Some(prev) = entries[i - 1] else { continue };
        let Some(prev_date) = prev.date else { continue };
        let prev_ms = millis(prev_date);

        // Nearest later dated entry splits the span evenly across the
        // intervals it covers
        let mut interpolated = None;
        for x in 1..entries.len() - i {
            if let Some(date) = entries[i + x].and_then(|e| e.date) {
                interpolated = Some((millis(date) - prev_ms) / (x as f64 + 1.0));
                break;
            }
        }

        // No dated entry ahead: reuse the duration from two positions back
        let duration = interpolated
            .or_else(|| i.checked_sub(2).and_then(|j| entries[j].and_then(|e| e.duration)))
            .or(prev.duration);
        let Some(duration) = duration else { continue };

        if let Some(prev_entry) = entries[i - 1].as_mut() {
            prev_entry.duration = Some(duration);
        }

        let date_ms = prev_ms + duration;
        entries[i] = Some(PacketTiming {
            date: Some(from_millis(date_ms)),
            cts: Some(date_ms - epoch_ms),
            duration: None,
        });
        pending.push(i);
    }

    let synthesized = pending.len();

    // Synthesized entries get their own duration from the successor's date
    for i in pending {
        let next_date = entries.get(i + 1).copied().flatten().and_then(|e| e.date);
        if let (Some(entry), Some(next)) = (entries[i].as_mut(), next_date) {
            if let Some(date) = entry.date {
                entry.duration = Some(millis(next) - millis(date));
            }
        }
    }

    synthesized
}
