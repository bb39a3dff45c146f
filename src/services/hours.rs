//! Hour count resolution.
//!
//! The hour descriptor is authoritative when present; otherwise the hour
//! dimension of the first loaded class grid stands in. With no data loaded
//! at all, both operations report "no hours".

use crate::store::TimetableStore;

/// Ordered lesson numbers for the selectable hour slots.
///
/// A non-empty descriptor yields its declared `number` values in descriptor
/// key order, dropping entries without one. Otherwise a `1..=count` sequence
/// is synthesized from the first class grid's day-0 width. Empty when
/// nothing is loaded.
pub fn lesson_numbers(store: &TimetableStore) -> Vec<u32> {
    if !store.hours().is_empty() {
        return store.hours().values().filter_map(|hour| hour.number).collect();
    }

    (1..=inferred_hour_count(store) as u32).collect()
}

/// Hour count used to bound-check queries: descriptor size, else inferred
/// class-grid width, else 0.
pub fn resolve_hour_count(store: &TimetableStore) -> usize {
    let declared = store.hours().len();
    if declared > 0 {
        declared
    } else {
        inferred_hour_count(store)
    }
}

fn inferred_hour_count(store: &TimetableStore) -> usize {
    store
        .first_class()
        .and_then(|entry| entry.grid.day(0))
        .map(<[_]>::len)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Grid, HourEntry, TimetableEntry};

    fn class_of_width(hours: usize) -> TimetableEntry {
        TimetableEntry {
            name: "1A".to_string(),
            id: "1a".to_string(),
            grid: Grid::blank(5, hours),
        }
    }

    #[test]
    fn test_nothing_loaded_yields_no_hours() {
        let store = TimetableStore::new();
        assert!(lesson_numbers(&store).is_empty());
        assert_eq!(resolve_hour_count(&store), 0);
    }

    #[test]
    fn test_descriptor_numbers_in_key_order() {
        let mut store = TimetableStore::new();
        store.merge_hours(
            [
                (2, HourEntry { number: Some(2), ..Default::default() }),
                (1, HourEntry { number: Some(1), ..Default::default() }),
                (3, HourEntry { number: None, ..Default::default() }),
            ]
            .into_iter()
            .collect(),
        );

        // numberless entries are dropped from the sequence but still count
        // toward the hour count
        assert_eq!(lesson_numbers(&store), vec![1, 2]);
        assert_eq!(resolve_hour_count(&store), 3);
    }

    #[test]
    fn test_fallback_synthesizes_from_class_grid_width() {
        let mut store = TimetableStore::new();
        store.insert_class(class_of_width(6));

        assert_eq!(lesson_numbers(&store), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(resolve_hour_count(&store), 6);
    }

    #[test]
    fn test_descriptor_takes_precedence_over_grid_width() {
        let mut store = TimetableStore::new();
        store.insert_class(class_of_width(6));
        store.merge_hours(
            (1..=8)
                .map(|n| (n, HourEntry { number: Some(n), ..Default::default() }))
                .collect(),
        );

        assert_eq!(resolve_hour_count(&store), 8);
        assert_eq!(lesson_numbers(&store).len(), 8);
    }

    #[test]
    fn test_class_with_empty_day_zero() {
        let mut store = TimetableStore::new();
        store.insert_class(TimetableEntry {
            name: "1A".to_string(),
            id: "1a".to_string(),
            grid: Grid::from_days(vec![]),
        });

        assert!(lesson_numbers(&store).is_empty());
        assert_eq!(resolve_hour_count(&store), 0);
    }
}
