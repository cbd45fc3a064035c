use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::ImportError;
use crate::{
    model::{EdgeId, HopSchedule, PendingEdgeRecord, TimetableSnapshot, TransitGraph},
    storage::TimetableStorage,
};

/// owns the semantic record of every edge created during an import, along with the count
/// of real (non stop-loop) edges.
///
/// the registry is transient builder state. nothing in it is visible to the router until
/// [`EdgeRegistry::persist`] hands the frozen result to storage, which happens once, after
/// every builder has succeeded.
#[derive(Debug, Default)]
pub struct EdgeRegistry {
    edges: BTreeMap<EdgeId, PendingEdgeRecord>,
    real_edges_size: usize,
}

impl EdgeRegistry {
    pub fn new() -> EdgeRegistry {
        EdgeRegistry::default()
    }

    /// registers the record for a new edge. each edge id may be registered once.
    pub fn register(&mut self, edge_id: EdgeId, record: PendingEdgeRecord) -> Result<(), ImportError> {
        if let Some(existing) = self.edges.get(&edge_id) {
            return Err(ImportError::DuplicateEdgeRecord {
                edge_id,
                existing: existing.kind().to_string(),
            });
        }
        if !record.is_stop_loop() {
            self.real_edges_size += 1;
        }
        self.edges.insert(edge_id, record);
        Ok(())
    }

    /// the schedule of a pattern hop edge, for inserting departures.
    pub fn hop_schedule_mut(&mut self, edge_id: EdgeId) -> Result<&mut HopSchedule, ImportError> {
        self.edges
            .get_mut(&edge_id)
            .and_then(|r| r.schedule_mut())
            .ok_or(ImportError::NotAPatternHop(edge_id))
    }

    pub fn get(&self, edge_id: EdgeId) -> Option<&PendingEdgeRecord> {
        self.edges.get(&edge_id)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn real_edges_size(&self) -> usize {
        self.real_edges_size
    }

    pub fn stop_loop_count(&self) -> usize {
        self.edges.len() - self.real_edges_size
    }

    /// total number of departures across all pattern hop schedules.
    pub fn departure_count(&self) -> usize {
        self.edges
            .values()
            .filter_map(|r| r.schedule())
            .map(|s| s.len())
            .sum()
    }

    /// freezes the registry and commits it, together with the graph it describes, to
    /// storage in a single call.
    pub fn persist(
        self,
        service_date: NaiveDate,
        graph: TransitGraph,
        storage: &mut dyn TimetableStorage,
    ) -> Result<(), ImportError> {
        let edges = self
            .edges
            .iter()
            .map(|(edge_id, record)| (*edge_id, record.freeze()))
            .collect();
        let snapshot = TimetableSnapshot {
            service_date,
            graph,
            edges,
            real_edges_size: self.real_edges_size,
        };
        storage.commit(snapshot)?;
        Ok(())
    }
}
