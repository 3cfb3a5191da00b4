//! FourCc - four-character stream type code
//!
//! Copyable key identifying one sample group within a packet.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::TimelineError;

/// Four-character stream type code.
///
/// Telemetry streams are keyed by a 4-byte ASCII code (`"GPS5"`, `"ACCL"`, …).
/// Stored inline as `[u8; 4]` so it is `Copy` and cheap to use as a map key.
///
/// # Examples
/// ```
/// use contracts::FourCc;
///
/// let code = FourCc::parse("GPS5").unwrap();
/// assert_eq!(code, FourCc::GPS5);
/// assert_eq!(code.to_string(), "GPS5");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourCc([u8; 4]);

impl FourCc {
    /// GPS 5-value fix stream (lat, lon, alt, 2D speed, 3D speed)
    pub const GPS5: FourCc = FourCc(*b"GPS5");
    /// Accelerometer stream
    pub const ACCL: FourCc = FourCc(*b"ACCL");
    /// Gyroscope stream
    pub const GYRO: FourCc = FourCc(*b"GYRO");

    /// Create a code from raw bytes.
    #[inline]
    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Parse a code from its textual form; must be exactly four bytes.
    pub fn parse(code: &str) -> Result<Self, TimelineError> {
        match <[u8; 4]>::try_from(code.as_bytes()) {
            Ok(bytes) => Ok(Self(bytes)),
            Err(_) => Err(TimelineError::Other(format!(
                "four-character code must be 4 bytes, got {:?}",
                code
            ))),
        }
    }

    /// Get the underlying bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl TryFrom<&str> for FourCc {
    type Error = TimelineError;

    fn try_from(code: &str) -> Result<Self, Self::Error> {
        Self::parse(code)
    }
}

impl fmt::Display for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            let c = if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FourCc(\"{self}\")")
    }
}

// Serde support - serialized as the 4-character string
impl Serialize for FourCc {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FourCc {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
