//! Fake fetcher and parser for pipeline tests.
//!
//! The fetcher serves canned bodies by URL and records every fetch; the
//! parser maps canned bodies to structured results. Together they stand in
//! for the external timetable site and the HTML parsing library.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use ttm_rust::models::{EntityList, EntityRef, Grid, HourEntry, HourMap};
use ttm_rust::source::{FetchError, PageFetcher, ParseError, TimetableParser};

#[derive(Clone, Default)]
pub struct FakeFetcher {
    pages: HashMap<String, String>,
    log: Arc<Mutex<Vec<String>>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }

    /// URLs fetched so far, in request order.
    pub fn fetched(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.log.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Request(format!("no page at {url}")))
    }
}

#[derive(Clone, Default)]
pub struct FakeParser {
    list_path: String,
    lists: HashMap<String, EntityList>,
    timetables: HashMap<String, (HourMap, Grid)>,
}

impl FakeParser {
    pub fn new(list_path: &str) -> Self {
        Self {
            list_path: list_path.to_string(),
            ..Self::default()
        }
    }

    pub fn with_list(mut self, body: &str, list: EntityList) -> Self {
        self.lists.insert(body.to_string(), list);
        self
    }

    pub fn with_timetable(mut self, body: &str, hours: HourMap, grid: Grid) -> Self {
        self.timetables.insert(body.to_string(), (hours, grid));
        self
    }
}

impl TimetableParser for FakeParser {
    fn list_path(&self, _landing_html: &str) -> Result<String, ParseError> {
        Ok(self.list_path.clone())
    }

    fn parse_list(&self, list_html: &str) -> Result<EntityList, ParseError> {
        self.lists
            .get(list_html)
            .cloned()
            .ok_or_else(|| ParseError(format!("unexpected list markup: {list_html}")))
    }

    fn parse_timetable(&self, entity_html: &str) -> Result<(HourMap, Grid), ParseError> {
        self.timetables
            .get(entity_html)
            .cloned()
            .ok_or_else(|| ParseError(format!("unexpected timetable markup: {entity_html}")))
    }
}

pub fn entity(name: &str, id: &str) -> EntityRef {
    EntityRef {
        name: name.to_string(),
        id: id.to_string(),
    }
}

/// Hour descriptor with `count` numbered entries.
pub fn numbered_hours(count: u32) -> HourMap {
    (1..=count)
        .map(|n| {
            (
                n,
                HourEntry {
                    number: Some(n),
                    start: Some(format!("{}:00", 7 + n)),
                    end: Some(format!("{}:45", 7 + n)),
                },
            )
        })
        .collect()
}

/// Grid built from a JSON literal, e.g. `[[[{"subject":"math","room":"101"}]]]`.
pub fn grid(json: serde_json::Value) -> Grid {
    serde_json::from_value(json).expect("grid fixture should deserialize")
}
