//! Room-catalog extraction.

use std::collections::HashSet;

use crate::store::TimetableStore;

/// Distinct room identifiers referenced anywhere in the class grids.
///
/// First-seen order, duplicates excluded, lessons without a room skipped.
pub fn all_rooms(store: &TimetableStore) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut rooms = Vec::new();

    for entry in store.classes() {
        for day in entry.grid.days() {
            for slot in day {
                for lesson in slot {
                    let Some(room) = lesson.room.as_deref() else {
                        continue;
                    };
                    if room.is_empty() {
                        continue;
                    }
                    if seen.insert(room.to_string()) {
                        rooms.push(room.to_string());
                    }
                }
            }
        }
    }

    rooms
}
