//! In-memory workout journal.
//!
//! Insertion order is display order. Records are never edited or removed
//! during a session, and a lookup miss is an ordinary `None` rather than
//! an error. The collection stays small enough that id lookup is a linear
//! scan.

use crate::workout::Workout;

/// Ordered collection of logged workouts
#[derive(Clone, Debug, Default)]
pub struct WorkoutJournal {
    entries: Vec<Workout>,
}

impl WorkoutJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a workout and return a borrow of the stored record
    pub fn append(&mut self, workout: Workout) -> &Workout {
        tracing::debug!("Appending workout {} to journal", workout.id);
        let idx = self.entries.len();
        self.entries.push(workout);
        &self.entries[idx]
    }

    /// Find a workout by its id; `None` when no record matches
    pub fn find_by_id(&self, id: &str) -> Option<&Workout> {
        self.entries.iter().find(|w| w.id == id)
    }

    /// Iterate workouts in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Workout> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::{build_workout, Coordinates, WorkoutKind};
    use chrono::{TimeZone, Utc};

    fn workout_at(seconds: u32) -> Workout {
        // Distinct second => distinct millisecond timestamp => distinct id
        let created_at = Utc.with_ymd_and_hms(2024, 4, 14, 9, 0, seconds).unwrap();
        build_workout(
            WorkoutKind::Running,
            Coordinates::new(51.5, -0.1),
            "5",
            "25",
            "180",
            created_at,
        )
        .unwrap()
    }

    #[test]
    fn test_find_by_id_returns_exact_record() {
        let mut journal = WorkoutJournal::new();
        let ids: Vec<String> = (0..5)
            .map(|s| journal.append(workout_at(s)).id.clone())
            .collect();

        for id in &ids {
            let found = journal.find_by_id(id).unwrap();
            assert_eq!(&found.id, id);
        }
    }

    #[test]
    fn test_find_by_id_miss_is_none() {
        let mut journal = WorkoutJournal::new();
        journal.append(workout_at(0));

        assert!(journal.find_by_id("0000000000").is_none());
    }

    #[test]
    fn test_iteration_order_is_insertion_order() {
        let mut journal = WorkoutJournal::new();
        let ids: Vec<String> = (0..4)
            .map(|s| journal.append(workout_at(s)).id.clone())
            .collect();

        let iterated: Vec<String> = journal.iter().map(|w| w.id.clone()).collect();
        assert_eq!(iterated, ids);
    }

    #[test]
    fn test_ids_are_unique_across_entries() {
        let mut journal = WorkoutJournal::new();
        for s in 0..5 {
            journal.append(workout_at(s));
        }

        let mut ids: Vec<&str> = journal.iter().map(|w| w.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), journal.len());
    }

    #[test]
    fn test_empty_journal() {
        let journal = WorkoutJournal::new();
        assert!(journal.is_empty());
        assert_eq!(journal.len(), 0);
        assert!(journal.find_by_id("anything").is_none());
    }
}
