//! Error types for mapping content API records.

use thiserror::Error;

/// Errors raised while formatting publication dates.
#[derive(Error, Debug)]
pub enum DateError {
    #[error("invalid publication date {input:?}: {source}")]
    Invalid {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("unknown locale: {0}")]
    UnknownLocale(String),
}

/// Errors raised when a raw record cannot become a view model.
#[derive(Error, Debug)]
pub enum MappingError {
    #[error("post {} is missing required field `{field}`", uid.as_deref().unwrap_or("<no uid>"))]
    MissingField {
        field: &'static str,
        uid: Option<String>,
    },

    #[error(transparent)]
    InvalidDate(#[from] DateError),
}
