//! In-memory timetable store.
//!
//! Two id-keyed, insertion-ordered collections of [`TimetableEntry`]
//! (classes and rooms) plus the process-lifetime hour descriptor. The store
//! is created empty at process start, filled once by the ingestion pipeline,
//! and afterwards only read — apart from the synthesizer's occasional
//! overwrite of a single room entry.
//!
//! There is no locking: the caller holds `&mut` during the one-time load and
//! hands out shared references for queries. The already-loaded guard is a
//! plain size check, so concurrent loads must be serialized by the caller.

use std::collections::HashMap;

use crate::models::{HourMap, TimetableEntry};

/// Id-keyed entries preserving first-insertion order. A same-id insert
/// overwrites the existing entry in place, keeping its position.
#[derive(Debug, Default)]
struct EntryMap {
    entries: Vec<TimetableEntry>,
    index: HashMap<String, usize>,
}

impl EntryMap {
    fn insert(&mut self, entry: TimetableEntry) {
        match self.index.get(&entry.id) {
            Some(&pos) => self.entries[pos] = entry,
            None => {
                self.index.insert(entry.id.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    fn get(&self, id: &str) -> Option<&TimetableEntry> {
        self.index.get(id).map(|&pos| &self.entries[pos])
    }

    fn as_slice(&self) -> &[TimetableEntry] {
        &self.entries
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The in-memory weekly timetable store.
#[derive(Debug, Default)]
pub struct TimetableStore {
    classes: EntryMap,
    rooms: EntryMap,
    hours: HourMap,
}

impl TimetableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the one-time load has populated any classes.
    pub fn is_loaded(&self) -> bool {
        !self.classes.is_empty()
    }

    pub fn insert_class(&mut self, entry: TimetableEntry) {
        self.classes.insert(entry);
    }

    pub fn insert_room(&mut self, entry: TimetableEntry) {
        self.rooms.insert(entry);
    }

    /// Class entries in first-insertion order.
    pub fn classes(&self) -> &[TimetableEntry] {
        self.classes.as_slice()
    }

    /// Room entries in first-insertion order.
    pub fn rooms(&self) -> &[TimetableEntry] {
        self.rooms.as_slice()
    }

    pub fn class(&self, id: &str) -> Option<&TimetableEntry> {
        self.classes.get(id)
    }

    pub fn room(&self, id: &str) -> Option<&TimetableEntry> {
        self.rooms.get(id)
    }

    /// The first loaded class, used as the shape reference for hour-count
    /// inference and room-grid synthesis.
    pub fn first_class(&self) -> Option<&TimetableEntry> {
        self.classes.as_slice().first()
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Merge a newly observed hour descriptor under the richest-wins rule:
    /// only a descriptor with strictly more entries replaces the current
    /// one, ties keep the first.
    pub fn merge_hours(&mut self, observed: HourMap) {
        if observed.len() > self.hours.len() {
            self.hours = observed;
        }
    }

    /// The current hour descriptor, in ascending key order.
    pub fn hours(&self) -> &HourMap {
        &self.hours
    }
}
