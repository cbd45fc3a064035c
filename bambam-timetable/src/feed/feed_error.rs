#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    #[error("Failed to parse gtfs bundle file into `Gtfs` struct: {0}")]
    BundleReadError(#[from] gtfs_structures::Error),
    #[error("First and last stops of trip {trip_id} do not have times")]
    MissingBoundaryTimes { trip_id: String },
    #[error("Missing lon,lat data and parent_location for stop: {0}")]
    MissingStopLocation(String),
    #[error("Trip {0} does not exist in feed")]
    UnknownTrip(String),
    #[error("Trip {0} has no stop times")]
    EmptyTrip(String),
    #[error("No service in feed lists any date, cannot compute schedule start date")]
    EmptyCalendar,
}
