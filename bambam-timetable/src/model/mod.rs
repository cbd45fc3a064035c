mod departure;
mod hop_schedule;
mod ids;
mod pt_edge_record;
mod timetable_snapshot;
mod transit_graph;

pub use departure::Departure;
pub use hop_schedule::{FrozenSchedule, HopSchedule};
pub use ids::{EdgeId, NodeId};
pub use pt_edge_record::{PendingEdgeRecord, PtEdge, PtEdgeRecord, TransferInfo};
pub use timetable_snapshot::TimetableSnapshot;
pub use transit_graph::{GraphBuilder, TransitEdge, TransitGraph, TransitNode};
