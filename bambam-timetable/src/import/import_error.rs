use crate::{
    feed::FeedError,
    model::EdgeId,
    storage::StorageError,
};

#[derive(thiserror::Error, Debug)]
pub enum ImportError {
    #[error(transparent)]
    Feed(#[from] FeedError),
    #[error("stop {0} is listed more than once in the feed")]
    DuplicateStop(String),
    #[error("{context} references stop {stop_id} which is not in the feed")]
    UnknownStop { stop_id: String, context: String },
    #[error("pattern {pattern} references trip {trip_id} which is not in the feed")]
    UnknownTrip { pattern: String, trip_id: String },
    #[error("trip {trip_id} references service {service_id} which is not in the feed")]
    UnknownService { trip_id: String, service_id: String },
    #[error("trip {trip_id} has a frequency with headway {headway_secs}, must be positive")]
    InvalidFrequency { trip_id: String, headway_secs: i32 },
    #[error("trip {trip_id} has {stop_times} stop times but its pattern has {hops} hops")]
    PatternMismatch {
        trip_id: String,
        stop_times: usize,
        hops: usize,
    },
    #[error("edge {edge_id} already has a {existing} record")]
    DuplicateEdgeRecord { edge_id: EdgeId, existing: String },
    #[error("edge {0} is not a pattern hop")]
    NotAPatternHop(EdgeId),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
