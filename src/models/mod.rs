pub mod timetable;

pub use timetable::*;
