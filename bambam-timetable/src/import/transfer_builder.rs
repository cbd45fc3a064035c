use super::{EdgeRegistry, ImportError, StopIndex};
use crate::{
    feed::{FeedTransfer, TransferType},
    model::{GraphBuilder, PtEdgeRecord, TransferInfo},
    util::distance::compute_haversine,
};

/// creates a directed transfer edge for each minimum-time transfer between two distinct
/// stops, named after the stops. other transfer types, and transfers from a stop to
/// itself, add nothing.
///
/// returns the number of transfer edges created.
pub fn build_transfers(
    transfers: &[FeedTransfer],
    stops: &StopIndex,
    graph: &mut dyn GraphBuilder,
    registry: &mut EdgeRegistry,
) -> Result<usize, ImportError> {
    let mut created = 0;
    for transfer in transfers.iter() {
        if transfer.transfer_type != TransferType::MinimumTime
            || transfer.from_stop_id == transfer.to_stop_id
        {
            continue;
        }
        let context = format!(
            "transfer from {} to {}",
            transfer.from_stop_id, transfer.to_stop_id
        );
        let src = stops.lookup(&transfer.from_stop_id, &context)?;
        let dst = stops.lookup(&transfer.to_stop_id, &context)?;
        let name = format!("Transfer: {} -> {}", src.name, dst.name);
        let distance = compute_haversine(src.location, dst.location);
        let edge_id = graph.add_edge(src.node_id, dst.node_id, distance, &name);
        let record = PtEdgeRecord::Transfer {
            transfer: TransferInfo {
                from_stop_id: transfer.from_stop_id.clone(),
                to_stop_id: transfer.to_stop_id.clone(),
                transfer_type: transfer.transfer_type,
                min_transfer_time: transfer.min_transfer_time,
            },
        };
        registry.register(edge_id, record)?;
        created += 1;
    }
    Ok(created)
}

#[cfg(test)]
mod test {
    use geo::Point;

    use super::build_transfers;
    use crate::{
        feed::{FeedStop, FeedTransfer, TransferType},
        import::{build_stop_nodes, EdgeRegistry, ImportError},
        model::{GraphBuilder, TransitGraph},
    };

    fn transfer(from: &str, to: &str, transfer_type: TransferType) -> FeedTransfer {
        FeedTransfer {
            from_stop_id: from.to_string(),
            to_stop_id: to.to_string(),
            transfer_type,
            min_transfer_time: Some(120),
        }
    }

    fn setup() -> (TransitGraph, EdgeRegistry, crate::import::StopIndex) {
        let stops: Vec<FeedStop> = [("A", "Alpha"), ("B", "")]
            .iter()
            .enumerate()
            .map(|(i, (id, name))| FeedStop {
                id: id.to_string(),
                name: name.to_string(),
                location: Point::new(-105.0, 40.0 + i as f64 * 0.001),
            })
            .collect();
        let mut graph = TransitGraph::new();
        let mut registry = EdgeRegistry::new();
        let index = build_stop_nodes(&stops, &mut graph, &mut registry)
            .expect("test invariant failed: stop nodes");
        (graph, registry, index)
    }

    #[test]
    fn test_only_min_time_between_distinct_stops() {
        let (mut graph, mut registry, index) = setup();
        let transfers = vec![
            transfer("A", "B", TransferType::MinimumTime),
            transfer("A", "A", TransferType::MinimumTime),
            transfer("A", "B", TransferType::Recommended),
            transfer("B", "A", TransferType::Timed),
            transfer("B", "A", TransferType::NotPossible),
            transfer("B", "A", TransferType::Other(4)),
        ];
        let created = build_transfers(&transfers, &index, &mut graph, &mut registry).unwrap();
        assert_eq!(created, 1);
        assert_eq!(registry.real_edges_size(), 1);

        let edge = graph.edges().last().expect("transfer edge should exist");
        // B has no name and falls back to its id
        assert_eq!(edge.name, "Transfer: Alpha -> B");
        assert_eq!(edge.src_node_id, index.get("A").unwrap().node_id);
        assert_eq!(edge.dst_node_id, index.get("B").unwrap().node_id);
        let info = registry
            .get(edge.edge_id)
            .and_then(|r| r.transfer())
            .expect("transfer record should exist");
        assert_eq!(info.min_transfer_time, Some(120));
    }

    #[test]
    fn test_non_routable_transfers_add_nothing() {
        let (mut graph, mut registry, index) = setup();
        let before = graph.edge_count();
        let transfers = vec![
            transfer("A", "B", TransferType::Recommended),
            transfer("B", "B", TransferType::MinimumTime),
        ];
        let created = build_transfers(&transfers, &index, &mut graph, &mut registry).unwrap();
        assert_eq!(created, 0);
        assert_eq!(graph.edge_count(), before);
    }

    #[test]
    fn test_unknown_stop_is_an_error() {
        let (mut graph, mut registry, index) = setup();
        let transfers = vec![transfer("A", "Z", TransferType::MinimumTime)];
        let result = build_transfers(&transfers, &index, &mut graph, &mut registry);
        assert!(matches!(result, Err(ImportError::UnknownStop { .. })));
    }
}
