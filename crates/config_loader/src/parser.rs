//! Configuration parsing.
//!
//! Supports TOML (primary) and JSON formats.

use contracts::{TimelineConfig, TimelineError};

/// Configuration file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format (recommended)
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    /// Infer the format from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse TOML configuration
pub fn parse_toml(content: &str) -> Result<TimelineConfig, TimelineError> {
    toml::from_str(content).map_err(|e| TimelineError::ConfigParse {
        message: format!("TOML parse error: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Parse JSON configuration
pub fn parse_json(content: &str) -> Result<TimelineConfig, TimelineError> {
    serde_json::from_str(content).map_err(|e| TimelineError::ConfigParse {
        message: format!("JSON parse error: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Parse configuration in the given format
pub fn parse(content: &str, format: ConfigFormat) -> Result<TimelineConfig, TimelineError> {
    match format {
        ConfigFormat::Toml => parse_toml(content),
        ConfigFormat::Json => parse_json(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::{GroupTimes, TimeIn, TimeOut};

    #[test]
    fn test_parse_toml_minimal() {
        // Everything is optional; an empty file is a valid config
        let config = parse_toml("").unwrap();
        assert_eq!(config, TimelineConfig::default());
    }

    #[test]
    fn test_parse_toml_full() {
        let content = r#"
time_in = "gps"
time_out = "date"
group_times = "frames"

[fallback]
packet_duration_ms = 500.0
"#;
        let config = parse_toml(content).unwrap();
        assert_eq!(config.time_in, TimeIn::Gps);
        assert_eq!(config.time_out, TimeOut::Date);
        assert_eq!(config.group_times, Some(GroupTimes::Frames));
        assert_eq!(config.fallback.packet_duration_ms, 500.0);
    }

    #[test]
    fn test_parse_toml_group_times_millis() {
        let content = r#"
group_times = { millis = 40.0 }
"#;
        let config = parse_toml(content).unwrap();
        assert_eq!(config.group_times, Some(GroupTimes::Millis(40.0)));
    }

    #[test]
    fn test_parse_json_minimal() {
        let content = r#"{
            "time_in": "container",
            "time_out": "cts"
        }"#;
        let config = parse_json(content).unwrap();
        assert_eq!(config.time_in, TimeIn::Container);
        assert_eq!(config.time_out, TimeOut::Cts);
    }

    #[test]
    fn test_parse_toml_syntax_error() {
        let result = parse_toml("invalid toml [[[");
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            TimelineError::ConfigParse { .. }
        ));
    }

    #[test]
    fn test_parse_unknown_variant() {
        let result = parse_toml(r#"time_in = "ntp""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ConfigFormat::from_extension("toml"),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(
            ConfigFormat::from_extension("TOML"),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(
            ConfigFormat::from_extension("json"),
            Some(ConfigFormat::Json)
        );
        assert_eq!(ConfigFormat::from_extension("yaml"), None);
    }
}
