use chrono::{DateTime, FixedOffset, Locale};

use crate::error::DateError;

pub const LISTING_DATE_PATTERN: &str = "%d/%b/%Y";
pub const DETAIL_DATE_PATTERN: &str = "%d %b %Y";
pub const DEFAULT_LOCALE: &str = "en_US";

/// Renders content API timestamps in a fixed locale.
///
/// A missing timestamp is not an error: it formats to `None` in every
/// pattern, so listing and detail views agree on what an unpublished
/// post looks like.
#[derive(Debug, Clone, Copy)]
pub struct DateFormatter {
    locale: Locale,
}

impl DateFormatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Builds a formatter from a POSIX locale name such as `pt_BR`.
    pub fn from_locale_name(name: &str) -> Result<Self, DateError> {
        let locale =
            Locale::try_from(name).map_err(|_| DateError::UnknownLocale(name.to_string()))?;
        Ok(Self::new(locale))
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Listing format, e.g. `19/Apr/2021`.
    pub fn listing(&self, input: Option<&str>) -> Result<Option<String>, DateError> {
        self.format_with(input, LISTING_DATE_PATTERN)
    }

    /// Detail page format, e.g. `19 Apr 2021`.
    pub fn detail(&self, input: Option<&str>) -> Result<Option<String>, DateError> {
        self.format_with(input, DETAIL_DATE_PATTERN)
    }

    pub fn format_with(
        &self,
        input: Option<&str>,
        pattern: &str,
    ) -> Result<Option<String>, DateError> {
        let Some(raw) = input else {
            return Ok(None);
        };
        let timestamp = parse_timestamp(raw)?;
        Ok(Some(timestamp.format_localized(pattern, self.locale).to_string()))
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new(Locale::en_US)
    }
}

/// Parses RFC 3339 as well as the `+0000` offset form the content API emits.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, DateError> {
    let trimmed = raw.trim();
    DateTime::parse_from_rfc3339(trimmed)
        .or_else(|_| DateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%z"))
        .or_else(|_| DateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .map_err(|source| DateError::Invalid {
            input: raw.to_string(),
            source,
        })
}
