//! Request context: locale, reference time and timezone.

use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOCALE: &str = "en_GB";
pub const DEFAULT_TIMEZONE: &str = "Europe/London";

/// Metadata sent alongside a sentence so the service can resolve relative expressions
/// ("tomorrow", "in two hours").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextObject {
    pub locale: String,
    /// Serialized as RFC 3339 with offset.
    pub reference_time: DateTime<FixedOffset>,
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coords: Option<Coordinates>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub long: f64,
}

impl ContextObject {
    pub fn new(
        locale: impl Into<String>,
        reference_time: DateTime<FixedOffset>,
        timezone: impl Into<String>,
    ) -> Self {
        Self {
            locale: locale.into(),
            reference_time,
            timezone: timezone.into(),
            coords: None,
        }
    }

    pub fn with_coords(mut self, lat: f64, long: f64) -> Self {
        self.coords = Some(Coordinates { lat, long });
        self
    }
}

impl Default for ContextObject {
    fn default() -> Self {
        default_context()
    }
}

/// Context used when a request carries none: `en_GB`, `Europe/London`, and the
/// current instant with the local offset.
pub fn default_context() -> ContextObject {
    ContextObject::new(DEFAULT_LOCALE, Local::now().into(), DEFAULT_TIMEZONE)
}
