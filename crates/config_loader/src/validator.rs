//! Configuration validation.
//!
//! Rules:
//! - fallback.packet_duration_ms finite and > 0
//! - group_times millis finite and > 0

use contracts::{GroupTimes, TimelineConfig, TimelineError};

/// Validate a TimelineConfig.
///
/// Returns the first error encountered, or Ok(()).
pub fn validate(config: &TimelineConfig) -> Result<(), TimelineError> {
    validate_fallback(config)?;
    validate_group_times(config)?;
    Ok(())
}

fn validate_fallback(config: &TimelineConfig) -> Result<(), TimelineError> {
    let duration = config.fallback.packet_duration_ms;
    if !duration.is_finite() || duration <= 0.0 {
        return Err(TimelineError::config_validation(
            "fallback.packet_duration_ms",
            format!("must be finite and > 0, got {duration}"),
        ));
    }
    Ok(())
}

fn validate_group_times(config: &TimelineConfig) -> Result<(), TimelineError> {
    if let Some(GroupTimes::Millis(ms)) = config.group_times {
        if !ms.is_finite() || ms <= 0.0 {
            return Err(TimelineError::config_validation(
                "group_times.millis",
                format!("must be finite and > 0, got {ms}"),
            ));
        }
    }
    Ok(())
}
