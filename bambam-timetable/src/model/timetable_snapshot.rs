use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Departure, EdgeId, PtEdge, TransitGraph};

/// the committed result of a timetable import: the transit graph, the record of every
/// edge created by the import, and the count of non-loop edges.
///
/// a snapshot is never modified after commit and may be shared between any number of
/// query threads. a re-import replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableSnapshot {
    pub service_date: NaiveDate,
    pub graph: TransitGraph,
    #[serde(with = "edge_map")]
    pub edges: BTreeMap<EdgeId, PtEdge>,
    pub real_edges_size: usize,
}

impl TimetableSnapshot {
    pub fn edge_record(&self, edge_id: EdgeId) -> Option<&PtEdge> {
        self.edges.get(&edge_id)
    }

    /// for a pattern hop edge, the first departure leaving at or after `time`.
    /// returns None for other edge types or when no departure remains that day.
    pub fn next_departure(&self, edge_id: EdgeId, time: i32) -> Option<&Departure> {
        self.edges
            .get(&edge_id)
            .and_then(|r| r.schedule())
            .and_then(|s| s.next_departure(time))
    }

    /// for a pattern hop edge, all departures leaving at or after `time`.
    pub fn departures_from(&self, edge_id: EdgeId, time: i32) -> &[Departure] {
        self.edges
            .get(&edge_id)
            .and_then(|r| r.schedule())
            .map(|s| s.departures_from(time))
            .unwrap_or(&[])
    }
}

/// edge ids are written as a list of (edge_id, record) pairs so that the map survives
/// formats that only support string keys.
mod edge_map {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::model::{EdgeId, PtEdge};

    pub fn serialize<S>(edges: &BTreeMap<EdgeId, PtEdge>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rows: Vec<(&EdgeId, &PtEdge)> = edges.iter().collect();
        rows.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<EdgeId, PtEdge>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<(EdgeId, PtEdge)>::deserialize(deserializer)?;
        Ok(rows.into_iter().collect())
    }
}
