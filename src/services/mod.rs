//! Query services over a populated store.
//!
//! All operations here are plain reads (plus the synthesizer's single-entry
//! overwrite) and are safe for concurrent callers once loading has finished.

pub mod availability;
pub mod hours;
pub mod room_catalog;
pub mod room_synthesis;

pub use availability::{find_empty_rooms, find_empty_rooms_validated};
pub use hours::{lesson_numbers, resolve_hour_count};
pub use room_catalog::all_rooms;
pub use room_synthesis::create_room_timetable;
