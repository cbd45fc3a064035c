use std::ops::Bound;

use serde::{Deserialize, Serialize};
use skiplist::OrderedSkipList;

use super::Departure;

/// the schedule of a pattern hop while a feed is being imported.
///
/// entries are kept in a skip list ordered by (departure_time, travel_time). the skip
/// list allows duplicate values, so [`HopSchedule::insert`] tests membership first to
/// give the schedule set semantics. entries are never removed or modified.
pub struct HopSchedule {
    departures: OrderedSkipList<Departure>,
}

impl HopSchedule {
    pub fn new() -> HopSchedule {
        HopSchedule {
            departures: OrderedSkipList::new(),
        }
    }

    /// adds a departure to this schedule. returns false if the identical
    /// (departure_time, travel_time) pair was already present.
    pub fn insert(&mut self, departure: Departure) -> bool {
        if self.departures.contains(&departure) {
            false
        } else {
            self.departures.insert(departure);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.departures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Departure> {
        self.departures.iter()
    }

    /// finds the first departure leaving at or after `time`.
    pub fn next_departure(&self, time: i32) -> Option<&Departure> {
        let query = Departure::query(time);
        self.departures.lower_bound(Bound::Included(&query))
    }

    /// copies the entries into an immutable, sorted schedule.
    pub fn freeze(&self) -> FrozenSchedule {
        FrozenSchedule {
            departures: self.departures.iter().copied().collect(),
        }
    }
}

impl Default for HopSchedule {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HopSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.departures.iter()).finish()
    }
}

/// the schedule of a pattern hop after import has been committed. read-only, shared
/// between query threads and searched with binary search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Departure>", into = "Vec<Departure>")]
pub struct FrozenSchedule {
    departures: Box<[Departure]>,
}

impl FrozenSchedule {
    pub fn len(&self) -> usize {
        self.departures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departures.is_empty()
    }

    pub fn as_slice(&self) -> &[Departure] {
        &self.departures
    }

    /// finds the first departure leaving at or after `time`.
    pub fn next_departure(&self, time: i32) -> Option<&Departure> {
        self.departures_from(time).first()
    }

    /// all departures leaving at or after `time`, in schedule order.
    pub fn departures_from(&self, time: i32) -> &[Departure] {
        let idx = self
            .departures
            .partition_point(|d| d.departure_time < time);
        &self.departures[idx..]
    }
}

impl From<Vec<Departure>> for FrozenSchedule {
    /// sorts and de-duplicates the departures, as a schedule read back from storage
    /// must obey the same ordering as one built during import.
    fn from(mut value: Vec<Departure>) -> Self {
        value.sort();
        value.dedup();
        FrozenSchedule {
            departures: value.into_boxed_slice(),
        }
    }
}

impl From<FrozenSchedule> for Vec<Departure> {
    fn from(value: FrozenSchedule) -> Self {
        value.departures.into_vec()
    }
}

#[cfg(test)]
mod test {
    use super::{FrozenSchedule, HopSchedule};
    use crate::model::Departure;

    #[test]
    fn test_insert_has_set_semantics() {
        let mut schedule = HopSchedule::new();
        assert!(schedule.insert(Departure::new(28800, 300)));
        assert!(!schedule.insert(Departure::new(28800, 300)));
        assert!(schedule.insert(Departure::new(28800, 360)));
        assert_eq!(schedule.len(), 2);
    }

    #[test]
    fn test_iterates_in_ascending_order() {
        let mut schedule = HopSchedule::new();
        for (dep, tt) in [(29700, 300), (28800, 390), (28800, 300), (30600, 120)] {
            schedule.insert(Departure::new(dep, tt));
        }
        let result: Vec<(i32, i32)> = schedule
            .iter()
            .map(|d| (d.departure_time, d.travel_time))
            .collect();
        assert_eq!(
            result,
            vec![(28800, 300), (28800, 390), (29700, 300), (30600, 120)]
        );
    }

    #[test]
    fn test_next_departure() {
        let mut schedule = HopSchedule::new();
        schedule.insert(Departure::new(28800, 300));
        schedule.insert(Departure::new(29700, 300));

        assert_eq!(
            schedule.next_departure(0),
            Some(&Departure::new(28800, 300))
        );
        assert_eq!(
            schedule.next_departure(28800),
            Some(&Departure::new(28800, 300))
        );
        assert_eq!(
            schedule.next_departure(28801),
            Some(&Departure::new(29700, 300))
        );
        assert_eq!(schedule.next_departure(29701), None);

        let frozen = schedule.freeze();
        assert_eq!(frozen.next_departure(28801), Some(&Departure::new(29700, 300)));
        assert_eq!(frozen.next_departure(29701), None);
        assert_eq!(frozen.departures_from(0).len(), 2);
    }

    #[test]
    fn test_frozen_from_unsorted_vec() {
        let frozen = FrozenSchedule::from(vec![
            Departure::new(600, 60),
            Departure::new(300, 60),
            Departure::new(600, 60),
        ]);
        assert_eq!(
            frozen.as_slice(),
            &[Departure::new(300, 60), Departure::new(600, 60)]
        );
    }
}
