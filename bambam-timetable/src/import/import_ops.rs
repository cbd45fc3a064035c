use kdam::{Bar, BarExt};
use serde::Serialize;

use super::{
    build_pattern_hops, build_stop_nodes, build_transfers, schedule_pattern_trips, EdgeRegistry,
    ImportError, TimetableImportConfig, TripScheduleCounts,
};
use crate::{
    feed::TransitFeed,
    model::{GraphBuilder, TransitGraph},
    storage::TimetableStorage,
};

/// what an import created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub service_date: String,
    pub nodes: usize,
    pub stop_loops: usize,
    pub hop_edges: usize,
    pub transfer_edges: usize,
    pub departures: usize,
    pub active_trips: usize,
    pub inactive_trips: usize,
}

/// imports a transit feed into a fresh [`TransitGraph`] and commits the result to
/// `storage`.
///
/// the service date comes from the configuration, falling back to the first date with
/// service in the feed. every builder writes into transient state: any error aborts the
/// import before `storage` is touched, so a previously committed timetable stays in
/// place.
pub fn run_import(
    feed: &dyn TransitFeed,
    config: &TimetableImportConfig,
    storage: &mut dyn TimetableStorage,
) -> Result<ImportSummary, ImportError> {
    let service_date = match config.service_date {
        Some(date) => date,
        None => feed.schedule_start_date()?,
    };
    log::info!("importing timetable for service date {service_date}");

    let mut graph = TransitGraph::new();
    let mut registry = EdgeRegistry::new();

    let stops = build_stop_nodes(feed.stops(), &mut graph, &mut registry)?;
    log::info!("created {} stop nodes", graph.node_count());

    let patterns = feed.patterns();
    let mut bar = match config.show_progress {
        true => Bar::builder()
            .total(patterns.len())
            .desc("schedule patterns")
            .build()
            .map_err(|e| log::warn!("unable to build progress bar: {e}"))
            .ok(),
        false => None,
    };
    let mut counts = TripScheduleCounts::default();
    let mut hop_edges = 0;
    for pattern in patterns.iter() {
        let hops = build_pattern_hops(pattern, &stops, &mut graph, &mut registry)?;
        let pattern_counts =
            schedule_pattern_trips(feed, pattern, &hops, service_date, &mut registry)?;
        log::debug!(
            "pattern {}: {} hops, {} active trips, {} departures",
            pattern.name,
            hops.len(),
            pattern_counts.active_trips,
            pattern_counts.departures
        );
        hop_edges += hops.len();
        counts += pattern_counts;
        if let Some(bar) = bar.as_mut() {
            let _ = bar.update(1);
        }
    }
    if bar.is_some() {
        eprintln!();
    }

    let transfer_edges = build_transfers(feed.transfers(), &stops, &mut graph, &mut registry)?;
    log::info!(
        "created {} edges for {} patterns and {} transfer edges",
        hop_edges,
        patterns.len(),
        transfer_edges
    );

    let summary = ImportSummary {
        service_date: service_date.to_string(),
        nodes: graph.node_count(),
        stop_loops: registry.stop_loop_count(),
        hop_edges,
        transfer_edges,
        departures: registry.departure_count(),
        active_trips: counts.active_trips,
        inactive_trips: counts.inactive_trips,
    };
    registry.persist(service_date, graph, storage)?;
    log::info!(
        "committed timetable with {} departures from {} active trips ({} not running on {})",
        summary.departures,
        summary.active_trips,
        summary.inactive_trips,
        service_date
    );
    Ok(summary)
}
