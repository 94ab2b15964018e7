use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("activity data must be a JSON object mapping dates to counts")]
    NotAnObject,

    #[error("invalid date key '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("invalid count for {date}: {value} (expected a non-negative integer)")]
    InvalidCount { date: String, value: String },

    #[error("year {0} is outside the supported range 1..=9999")]
    InvalidYear(i32),

    #[error("invalid color '{0}' (expected #rrggbb)")]
    InvalidColor(String),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file or the output directory does not exist as the
    /// expected kind of filesystem entry.
    #[error("target not found: {0}")]
    MissingTarget(String),

    #[error("could not convert SVG to PNG: {0}")]
    Raster(String),
}

impl CalendarError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CalendarError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalendarError>;
