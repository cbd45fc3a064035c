use geo::Point;
use serde::{Deserialize, Serialize};

use super::{EdgeId, NodeId};

/// node and edge allocation for the graph the timetable is written into.
///
/// the import only ever appends, and it relies on each call returning the id of the
/// element it just created.
pub trait GraphBuilder {
    /// adds a node at some location, returning its id.
    fn add_node(&mut self, location: Point<f64>) -> NodeId;

    /// adds a directed edge with a base cost of `distance` meters, returning its id.
    fn add_edge(&mut self, src: NodeId, dst: NodeId, distance: f64, name: &str) -> EdgeId;

    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitNode {
    pub node_id: NodeId,
    pub location: Point<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitEdge {
    pub edge_id: EdgeId,
    pub src_node_id: NodeId,
    pub dst_node_id: NodeId,
    /// great-circle distance in meters
    pub distance: f64,
    pub name: String,
}

/// in-memory graph with dense node and edge ids, assigned in creation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitGraph {
    nodes: Vec<TransitNode>,
    edges: Vec<TransitEdge>,
}

impl TransitGraph {
    pub fn new() -> TransitGraph {
        TransitGraph::default()
    }

    pub fn node(&self, node_id: NodeId) -> Option<&TransitNode> {
        self.nodes.get(node_id.0)
    }

    pub fn edge(&self, edge_id: EdgeId) -> Option<&TransitEdge> {
        self.edges.get(edge_id.0)
    }

    pub fn nodes(&self) -> &[TransitNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[TransitEdge] {
        &self.edges
    }

    /// edges leaving some node, in creation order.
    pub fn out_edges(&self, node_id: NodeId) -> impl Iterator<Item = &TransitEdge> {
        self.edges
            .iter()
            .filter(move |e| e.src_node_id == node_id)
    }
}

impl GraphBuilder for TransitGraph {
    fn add_node(&mut self, location: Point<f64>) -> NodeId {
        let node_id = NodeId(self.nodes.len());
        self.nodes.push(TransitNode { node_id, location });
        node_id
    }

    fn add_edge(&mut self, src: NodeId, dst: NodeId, distance: f64, name: &str) -> EdgeId {
        let edge_id = EdgeId(self.edges.len());
        self.edges.push(TransitEdge {
            edge_id,
            src_node_id: src,
            dst_node_id: dst,
            distance,
            name: name.to_string(),
        });
        edge_id
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod test {
    use super::{GraphBuilder, TransitGraph};
    use crate::model::{EdgeId, NodeId};
    use geo::Point;

    #[test]
    fn test_ids_are_dense_and_in_creation_order() {
        let mut graph = TransitGraph::new();
        let a = graph.add_node(Point::new(-105.27, 40.01));
        let b = graph.add_node(Point::new(-105.25, 40.02));
        assert_eq!((a, b), (NodeId(0), NodeId(1)));

        let e0 = graph.add_edge(a, a, 0.0, "loop");
        let e1 = graph.add_edge(a, b, 1500.0, "hop");
        assert_eq!((e0, e1), (EdgeId(0), EdgeId(1)));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);

        let out: Vec<EdgeId> = graph.out_edges(a).map(|e| e.edge_id).collect();
        assert_eq!(out, vec![e0, e1]);
        assert_eq!(graph.out_edges(b).count(), 0);
    }
}
