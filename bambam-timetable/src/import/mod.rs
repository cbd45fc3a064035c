mod edge_registry;
mod import_config;
mod import_error;
mod import_ops;
mod pattern_hop_builder;
mod schedule_inserter;
mod stop_node_builder;
mod transfer_builder;
mod trip_scheduler;

pub use edge_registry::EdgeRegistry;
pub use import_config::TimetableImportConfig;
pub use import_error::ImportError;
pub use import_ops::{run_import, ImportSummary};
pub use pattern_hop_builder::build_pattern_hops;
pub use schedule_inserter::insert_trip_instance;
pub use stop_node_builder::{build_stop_nodes, StopEntry, StopIndex};
pub use transfer_builder::build_transfers;
pub use trip_scheduler::{schedule_pattern_trips, TripScheduleCounts};
