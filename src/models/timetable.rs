//! Lessons, grids and timetable entries.
//!
//! A [`Grid`] is a three-level ordered structure `[day][hour_index][lessons]`
//! describing one entity's week. The outer length is the observed day count;
//! the inner per-day lengths need not match a global hour count — short days
//! are meaningful and drive the availability rule.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One scheduled occurrence within a slot.
///
/// A slot may hold zero or more lessons (split electives produce several).
/// Lessons are immutable once produced by the source parser; the only
/// derived field is `class_id`, which the room-timetable synthesizer sets to
/// the originating class when it inverts class grids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
}

/// One entity's weekly grid: `[day][hour_index][lessons]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    days: Vec<Vec<Vec<Lesson>>>,
}

impl Grid {
    /// Wrap parser output as a grid. The shape is fixed from here on.
    pub fn from_days(days: Vec<Vec<Vec<Lesson>>>) -> Self {
        Self { days }
    }

    /// Build an all-empty grid of `day_count` days with `hour_count` slots each.
    pub fn blank(day_count: usize, hour_count: usize) -> Self {
        Self {
            days: vec![vec![Vec::new(); hour_count]; day_count],
        }
    }

    /// Number of recorded days.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// All recorded days, in week order.
    pub fn days(&self) -> &[Vec<Vec<Lesson>>] {
        &self.days
    }

    /// Hour slots of one day, or `None` when the grid doesn't reach that day.
    pub fn day(&self, day: usize) -> Option<&[Vec<Lesson>]> {
        self.days.get(day).map(Vec::as_slice)
    }

    /// Lessons at `(day, hour)`, or `None` when the slot isn't recorded.
    pub fn slot(&self, day: usize, hour: usize) -> Option<&[Lesson]> {
        self.days.get(day)?.get(hour).map(Vec::as_slice)
    }

    /// Mutable slot access, used only while a synthesized grid is being built.
    pub fn slot_mut(&mut self, day: usize, hour: usize) -> Option<&mut Vec<Lesson>> {
        self.days.get_mut(day)?.get_mut(hour)
    }
}

/// One class or room together with its grid.
///
/// `id` is the source-assigned key; the store enforces uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableEntry {
    pub name: String,
    pub id: String,
    pub grid: Grid,
}

/// Human-facing metadata for one hour slot (lesson number and time range).
///
/// Times stay in the source's own format (e.g. `8:00`), they are presentation
/// data and never used for arithmetic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// Hour descriptor: hour key to [`HourEntry`], iterated in ascending key order.
pub type HourMap = BTreeMap<u32, HourEntry>;

/// Kind of entity a timetable page belongs to.
///
/// The variants carry the page prefixes of the Optivum site layout:
/// class pages live at `plany/o{id}.html`, room pages at `plany/s{id}.html`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Class,
    Room,
}

impl EntityKind {
    /// Prefix of the entity's page file name.
    pub fn page_prefix(self) -> char {
        match self {
            EntityKind::Class => 'o',
            EntityKind::Room => 's',
        }
    }
}

/// One item of the source's entity list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub name: String,
    pub id: String,
}

/// Parsed entity list page. Rooms may be absent on the source site, which is
/// an empty set rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityList {
    pub classes: Vec<EntityRef>,
    #[serde(default)]
    pub rooms: Vec<EntityRef>,
}
