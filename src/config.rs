use anyhow::{Context, Result};

use crate::date::{DateFormatter, DEFAULT_LOCALE};
use crate::mapper::PostMapper;
use crate::reading_time::{ReadingTimeEstimator, WORDS_PER_MINUTE};

pub const WORDS_PER_MINUTE_VAR: &str = "SPACETRAVELING_WORDS_PER_MINUTE";
pub const LOCALE_VAR: &str = "SPACETRAVELING_LOCALE";

/// Display settings shared by the mappers and the estimator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub words_per_minute: u32,
    pub locale: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            words_per_minute: WORDS_PER_MINUTE,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl Settings {
    /// Reads overrides from the environment, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let mut settings = Self::default();

        if let Ok(wpm) = std::env::var(WORDS_PER_MINUTE_VAR) {
            settings.words_per_minute = wpm
                .trim()
                .parse()
                .with_context(|| {
                    format!("{} must be a whole number, got {:?}", WORDS_PER_MINUTE_VAR, wpm)
                })?;
        }
        if let Ok(locale) = std::env::var(LOCALE_VAR) {
            if !locale.trim().is_empty() {
                settings.locale = locale.trim().to_string();
            }
        }

        Ok(settings)
    }

    pub fn estimator(&self) -> ReadingTimeEstimator {
        ReadingTimeEstimator::new(self.words_per_minute)
    }

    pub fn date_formatter(&self) -> Result<DateFormatter> {
        DateFormatter::from_locale_name(&self.locale)
            .with_context(|| format!("Unsupported locale {}", self.locale))
    }

    pub fn mapper(&self) -> Result<PostMapper> {
        Ok(PostMapper::new(self.date_formatter()?))
    }
}
