//! Room-availability queries.

use crate::error::FindEmptyRoomsError;
use crate::models::TimetableEntry;
use crate::services::hours;
use crate::store::TimetableStore;

/// Highest valid day index (five school days, 0-based).
const MAX_DAY: i32 = 4;

/// Rooms free at `(day, hour_index)`, in store order.
///
/// A room is reported empty when its schedule doesn't reach `day` at all,
/// when that day's recorded hours don't reach `hour_index`, or when the slot
/// exists with an empty lesson set. Negative coordinates match nothing —
/// a silent empty result, bound enforcement lives in the validated entry
/// point. No upper bound is enforced here.
pub fn find_empty_rooms(
    store: &TimetableStore,
    day: i32,
    hour_index: i32,
) -> Vec<&TimetableEntry> {
    let mut empty = Vec::new();
    if day < 0 || hour_index < 0 {
        return empty;
    }
    let (day, hour_index) = (day as usize, hour_index as usize);

    for entry in store.rooms() {
        let Some(day_slots) = entry.grid.day(day) else {
            // schedule doesn't reach this day
            empty.push(entry);
            continue;
        };
        if hour_index >= day_slots.len() || day_slots[hour_index].is_empty() {
            empty.push(entry);
        }
    }

    empty
}

/// Bound-checked variant of [`find_empty_rooms`].
///
/// `day` must lie in `[0, 4]`, `hour_index` in `[0, hour_count)` with the
/// hour count resolved per [`hours::resolve_hour_count`]. An hour count of 0
/// (nothing loaded, or genuinely zero hours) rejects every index. Past
/// validation, the query itself never fails.
pub fn find_empty_rooms_validated(
    store: &TimetableStore,
    day: i32,
    hour_index: i32,
) -> Result<Vec<&TimetableEntry>, FindEmptyRoomsError> {
    if !(0..=MAX_DAY).contains(&day) {
        return Err(FindEmptyRoomsError::DayNotExist);
    }

    let hour_count = hours::resolve_hour_count(store);
    if hour_count == 0 {
        return Err(FindEmptyRoomsError::LessonNotExist);
    }
    if hour_index < 0 || hour_index as usize >= hour_count {
        return Err(FindEmptyRoomsError::LessonNotExist);
    }

    Ok(find_empty_rooms(store, day, hour_index))
}
