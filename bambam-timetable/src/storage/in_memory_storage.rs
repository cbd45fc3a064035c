use std::sync::Arc;

use super::{StorageError, TimetableStorage};
use crate::model::TimetableSnapshot;

/// keeps the latest committed snapshot in memory. readers take a clone of the [`Arc`]
/// and keep using it across a later commit, which replaces the snapshot wholesale.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTimetableStorage {
    current: Option<Arc<TimetableSnapshot>>,
}

impl InMemoryTimetableStorage {
    pub fn new() -> InMemoryTimetableStorage {
        InMemoryTimetableStorage::default()
    }

    pub fn snapshot(&self) -> Option<Arc<TimetableSnapshot>> {
        self.current.clone()
    }

    pub fn has_snapshot(&self) -> bool {
        self.current.is_some()
    }
}

impl TimetableStorage for InMemoryTimetableStorage {
    fn commit(&mut self, snapshot: TimetableSnapshot) -> Result<(), StorageError> {
        self.current = Some(Arc::new(snapshot));
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use super::InMemoryTimetableStorage;
    use crate::{
        model::{TimetableSnapshot, TransitGraph},
        storage::TimetableStorage,
    };

    fn snapshot(day: u32) -> TimetableSnapshot {
        TimetableSnapshot {
            service_date: NaiveDate::from_ymd_opt(2024, 3, day)
                .expect("test invariant failed: invalid date"),
            graph: TransitGraph::new(),
            edges: Default::default(),
            real_edges_size: 0,
        }
    }

    #[test]
    fn test_commit_replaces_snapshot_wholesale() {
        let mut storage = InMemoryTimetableStorage::new();
        assert!(storage.snapshot().is_none());

        storage.commit(snapshot(4)).unwrap();
        let reader = storage.snapshot().expect("snapshot should be committed");

        storage.commit(snapshot(5)).unwrap();
        let latest = storage.snapshot().expect("snapshot should be committed");

        // a reader holding the earlier snapshot is unaffected by the later commit
        assert_eq!(reader.service_date.to_string(), "2024-03-04");
        assert_eq!(latest.service_date.to_string(), "2024-03-05");
        assert!(!Arc::ptr_eq(&reader, &latest));
    }
}
