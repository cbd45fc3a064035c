use super::{EdgeRegistry, ImportError, StopIndex};
use crate::{
    feed::FeedPattern,
    model::{EdgeId, GraphBuilder, PendingEdgeRecord},
    util::distance::compute_haversine,
};

/// creates one directed hop edge per consecutive stop pair of the pattern, each with an
/// empty schedule. returns the hop edge ids in stop order, so that hop `k` runs from
/// stop `k` to stop `k + 1`.
pub fn build_pattern_hops(
    pattern: &FeedPattern,
    stops: &StopIndex,
    graph: &mut dyn GraphBuilder,
    registry: &mut EdgeRegistry,
) -> Result<Vec<EdgeId>, ImportError> {
    let context = format!("pattern {}", pattern.name);
    let mut hops = Vec::with_capacity(pattern.stops.len().saturating_sub(1));
    for pair in pattern.stops.windows(2) {
        let prev = stops.lookup(&pair[0], &context)?;
        let next = stops.lookup(&pair[1], &context)?;
        let distance = compute_haversine(prev.location, next.location);
        let edge_id = graph.add_edge(prev.node_id, next.node_id, distance, &pattern.name);
        registry.register(edge_id, PendingEdgeRecord::empty_hop())?;
        hops.push(edge_id);
    }
    Ok(hops)
}
