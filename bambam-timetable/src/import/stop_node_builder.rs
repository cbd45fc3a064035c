use std::collections::HashMap;

use geo::Point;

use super::{EdgeRegistry, ImportError};
use crate::{
    feed::FeedStop,
    model::{GraphBuilder, NodeId, PtEdgeRecord},
};

/// where a stop was placed in the graph.
#[derive(Debug, Clone)]
pub struct StopEntry {
    pub node_id: NodeId,
    pub location: Point<f64>,
    /// stop name, or the stop id when the feed gives no name
    pub name: String,
}

/// stop id lookup built alongside the stop nodes, used by the hop and transfer builders.
#[derive(Debug, Default)]
pub struct StopIndex {
    entries: HashMap<String, StopEntry>,
}

impl StopIndex {
    pub fn get(&self, stop_id: &str) -> Option<&StopEntry> {
        self.entries.get(stop_id)
    }

    /// looks up a stop referenced by some feed element, described by `context`.
    pub fn lookup(&self, stop_id: &str, context: &str) -> Result<&StopEntry, ImportError> {
        self.entries
            .get(stop_id)
            .ok_or_else(|| ImportError::UnknownStop {
                stop_id: stop_id.to_string(),
                context: context.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// creates one node per stop, in the order given, plus a zero-length self loop on that
/// node registered as a [`PtEdgeRecord::StopLoop`]. stop ids must be unique.
pub fn build_stop_nodes(
    stops: &[FeedStop],
    graph: &mut dyn GraphBuilder,
    registry: &mut EdgeRegistry,
) -> Result<StopIndex, ImportError> {
    let mut index = StopIndex::default();
    for stop in stops.iter() {
        if index.entries.contains_key(&stop.id) {
            return Err(ImportError::DuplicateStop(stop.id.clone()));
        }
        let node_id = graph.add_node(stop.location);
        let edge_id = graph.add_edge(node_id, node_id, 0.0, &stop.name);
        registry.register(edge_id, PtEdgeRecord::StopLoop)?;
        index.entries.insert(
            stop.id.clone(),
            StopEntry {
                node_id,
                location: stop.location,
                name: if stop.name.is_empty() {
                    stop.id.clone()
                } else {
                    stop.name.clone()
                },
            },
        );
    }
    Ok(index)
}
