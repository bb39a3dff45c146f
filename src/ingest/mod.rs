//! One-shot sequential ingestion pipeline.
//!
//! Fetches the source site's entity list and then, strictly one entity at a
//! time, every class and room page, populating a [`TimetableStore`].
//! Sequential fetching is a politeness constraint toward the source site and
//! also keeps the hour descriptor's richest-wins update deterministic.
//!
//! There is no retry, no rollback and no resume: a failure mid-sequence
//! surfaces as an [`IngestError`] and leaves the store partial for the
//! process lifetime. A second `load_all` on a populated store is a warned
//! no-op.

use tracing::{debug, info, warn};

use crate::config::{SourceConfig, TIMETABLE_WEBSITE_VAR};
use crate::error::{IngestError, IngestResult};
use crate::models::{EntityKind, EntityList, Grid, TimetableEntry};
use crate::source::{PageFetcher, TimetableParser};
use crate::store::TimetableStore;

/// Pipeline over a configured source address, a page fetcher and a parser.
pub struct IngestionPipeline {
    config: SourceConfig,
    fetcher: Box<dyn PageFetcher>,
    parser: Box<dyn TimetableParser>,
}

impl IngestionPipeline {
    pub fn new(
        config: SourceConfig,
        fetcher: Box<dyn PageFetcher>,
        parser: Box<dyn TimetableParser>,
    ) -> Self {
        Self {
            config,
            fetcher,
            parser,
        }
    }

    fn base_url(&self) -> IngestResult<&str> {
        self.config.base_url().ok_or_else(|| {
            IngestError::Configuration(format!(
                "{TIMETABLE_WEBSITE_VAR} is not set; configure the timetable source address"
            ))
        })
    }

    async fn fetch_page(&self, url: &str) -> IngestResult<String> {
        self.fetcher
            .fetch(url)
            .await
            .map_err(|source| IngestError::Fetch {
                url: url.to_string(),
                source,
            })
    }

    /// Fetch and parse the source's entity list.
    ///
    /// Fails with a configuration error when no source address is set. An
    /// empty landing body is "no data" and yields `Ok(None)`, not an error.
    /// The list-page path is derived from the landing page by the parser.
    pub async fn fetch_entity_list(&self) -> IngestResult<Option<EntityList>> {
        let base = self.base_url()?;

        let landing = self.fetch_page(base).await?;
        if landing.is_empty() {
            return Ok(None);
        }

        let list_path = self
            .parser
            .list_path(&landing)
            .map_err(|source| IngestError::Parse {
                url: base.to_string(),
                source,
            })?;

        let list_url = format!("{base}/{list_path}");
        let list_html = self.fetch_page(&list_url).await?;
        let list = self
            .parser
            .parse_list(&list_html)
            .map_err(|source| IngestError::Parse {
                url: list_url,
                source,
            })?;

        Ok(Some(list))
    }

    /// Fetch and parse one entity's timetable page.
    ///
    /// The page address is deterministic: `{base}/plany/{prefix}{id}.html`
    /// with `o` for classes and `s` for rooms. The observed hour descriptor
    /// is merged into the store under the richest-wins rule as a side
    /// effect.
    pub async fn fetch_entity_timetable(
        &self,
        store: &mut TimetableStore,
        kind: EntityKind,
        id: &str,
    ) -> IngestResult<Grid> {
        let base = self.base_url()?;
        let url = format!("{base}/plany/{}{}.html", kind.page_prefix(), id);

        debug!(?kind, id, %url, "fetching entity timetable");
        let html = self.fetch_page(&url).await?;
        let (hours, grid) = self
            .parser
            .parse_timetable(&html)
            .map_err(|source| IngestError::Parse { url, source })?;

        store.merge_hours(hours);
        Ok(grid)
    }

    /// Populate the store once: every class, then every room, in list order.
    ///
    /// A populated store makes this a warned no-op (accidental re-entry
    /// guard; concurrent loads still need caller-side serialization). An
    /// empty landing body returns quietly without populating anything.
    pub async fn load_all(&self, store: &mut TimetableStore) -> IngestResult<()> {
        let Some(list) = self.fetch_entity_list().await? else {
            return Ok(());
        };

        if store.is_loaded() {
            warn!("timetables already loaded, skipping");
            return Ok(());
        }

        for item in &list.classes {
            let grid = self
                .fetch_entity_timetable(store, EntityKind::Class, &item.id)
                .await?;
            store.insert_class(TimetableEntry {
                name: item.name.clone(),
                id: item.id.clone(),
                grid,
            });
        }

        for item in &list.rooms {
            let grid = self
                .fetch_entity_timetable(store, EntityKind::Room, &item.id)
                .await?;
            store.insert_room(TimetableEntry {
                name: item.name.clone(),
                id: item.id.clone(),
                grid,
            });
        }

        info!(
            classes = store.class_count(),
            rooms = store.room_count(),
            "loaded timetables"
        );
        Ok(())
    }
}
