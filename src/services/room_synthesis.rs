//! Room-timetable synthesis.
//!
//! Some source sites publish no independent room pages. A room's grid can
//! still be derived by inverting the class grids: every lesson naming the
//! room is collected into a fresh grid of the reference class's shape.

use crate::models::{Grid, TimetableEntry};
use crate::store::TimetableStore;

/// Derive a room's grid from the loaded class grids and insert it.
///
/// A no-op while no class entry exists. The first class entry fixes the
/// output shape (its day count and day-0 hour count); every class lesson
/// whose `room` equals `room` lands in the matching slot, tagged with its
/// originating class id. The resulting entry `{name: room, id: room, grid}`
/// fully replaces any existing room entry with that id.
pub fn create_room_timetable(store: &mut TimetableStore, room: &str) {
    let Some(reference) = store.first_class() else {
        return;
    };
    let day_count = reference.grid.day_count();
    let hour_count = reference.grid.day(0).map(<[_]>::len).unwrap_or(0);

    let mut grid = Grid::blank(day_count, hour_count);
    for entry in store.classes() {
        for (day, day_slots) in entry.grid.days().iter().enumerate() {
            for (hour, lessons) in day_slots.iter().enumerate() {
                for lesson in lessons {
                    if lesson.room.as_deref() != Some(room) {
                        continue;
                    }
                    // lessons outside the reference shape have no slot to
                    // land in and are dropped
                    if let Some(slot) = grid.slot_mut(day, hour) {
                        let mut tagged = lesson.clone();
                        tagged.class_id = Some(entry.id.clone());
                        slot.push(tagged);
                    }
                }
            }
        }
    }

    store.insert_room(TimetableEntry {
        name: room.to_string(),
        id: room.to_string(),
        grid,
    });
}
