//! The external boundary: page fetching and page parsing.
//!
//! The crate does not implement HTML parsing itself. A [`TimetableParser`]
//! turns raw page text into entity lists and grids; a [`PageFetcher`] gets
//! the page text in the first place. Both are trait seams so tests (and
//! alternative sources) can substitute their own implementations.

use async_trait::async_trait;

use crate::models::{EntityList, Grid, HourMap};

#[cfg(feature = "http-source")]
pub mod http;

#[cfg(feature = "http-source")]
pub use http::HttpFetcher;

/// Error type for page fetches.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request itself failed (connection, TLS, invalid URL).
    #[error("request failed: {0}")]
    Request(String),
    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Error type for page parsing.
///
/// A parser given unexpected markup may fail unpredictably; the pipeline
/// propagates this uncaught, halting ingestion for the remaining entities.
#[derive(Debug, Clone, thiserror::Error)]
#[error("malformed page content: {0}")]
pub struct ParseError(pub String);

/// Fetches the body of a page as text.
///
/// Only an empty body is treated specially downstream (as "no data");
/// non-2xx responses with a non-empty body are not distinguished from
/// success.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Parses raw timetable pages into structured data.
pub trait TimetableParser: Send + Sync {
    /// Derive the entity-list page path from the landing page.
    fn list_path(&self, landing_html: &str) -> Result<String, ParseError>;

    /// Parse the entity-list page into class and room references.
    fn parse_list(&self, list_html: &str) -> Result<EntityList, ParseError>;

    /// Parse one entity page into its hour descriptor and grid.
    fn parse_timetable(&self, entity_html: &str) -> Result<(HourMap, Grid), ParseError>;
}
