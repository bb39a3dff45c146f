//! Error types for ingestion and the validated room query.

use serde::{Deserialize, Serialize};

use crate::source::{FetchError, ParseError};

/// Result type for ingestion operations.
pub type IngestResult<T> = Result<T, IngestError>;

/// Error raised while building the store from the timetable site.
///
/// Ingestion failures are not retried: a failure mid-sequence halts the
/// loop and leaves the store partial for the process lifetime. Re-invocation
/// is blocked by the already-loaded guard, so the partial state is final.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The timetable source address is missing. Raised lazily on the first
    /// load attempt, never at construction time.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A page fetch failed outright (connection, TLS, invalid URL).
    #[error("failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    /// A fetched page could not be parsed into the expected structure.
    #[error("failed to parse page {url}")]
    Parse {
        url: String,
        #[source]
        source: ParseError,
    },
}

/// Typed result codes of the validated room-availability query.
///
/// These are returned, never thrown; the surrounding request layer maps them
/// to user messages. `NoRequiredData` belongs to the shared code set but is
/// produced only by callers when request fields are missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FindEmptyRoomsError {
    #[error("DAY_NOT_EXIST")]
    DayNotExist,
    #[error("LESSON_NOT_EXIST")]
    LessonNotExist,
    #[error("NO_REQUIRED_DATA")]
    NoRequiredData,
}

impl FindEmptyRoomsError {
    /// Wire code consumed by the request layer.
    pub fn code(&self) -> &'static str {
        match self {
            FindEmptyRoomsError::DayNotExist => "DAY_NOT_EXIST",
            FindEmptyRoomsError::LessonNotExist => "LESSON_NOT_EXIST",
            FindEmptyRoomsError::NoRequiredData => "NO_REQUIRED_DATA",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_match_wire_format() {
        assert_eq!(FindEmptyRoomsError::DayNotExist.code(), "DAY_NOT_EXIST");
        assert_eq!(
            FindEmptyRoomsError::LessonNotExist.code(),
            "LESSON_NOT_EXIST"
        );
        assert_eq!(
            FindEmptyRoomsError::NoRequiredData.code(),
            "NO_REQUIRED_DATA"
        );
    }

    #[test]
    fn test_error_serializes_to_code() {
        let json = serde_json::to_string(&FindEmptyRoomsError::DayNotExist).unwrap();
        assert_eq!(json, "\"DAY_NOT_EXIST\"");
    }

    #[test]
    fn test_ingest_error_display() {
        let err = IngestError::Configuration(
            "TIMETABLE_WEBSITE is not set; configure the timetable source address".to_string(),
        );
        assert!(err.to_string().contains("TIMETABLE_WEBSITE"));
    }
}
