mod feed_error;
mod gtfs_feed;
mod interpolation;
mod missing_stop_location_policy;
mod pattern_ops;
mod service_calendar;
mod static_feed;
mod transit_feed;

pub use feed_error::FeedError;
pub use interpolation::interpolate_stop_times;
pub use missing_stop_location_policy::MissingStopLocationPolicy;
pub use pattern_ops::derive_patterns;
pub use service_calendar::{ServiceCalendar, WeekdayFlags};
pub use static_feed::{StaticFeed, StaticFeedBuilder};
pub use transit_feed::{
    FeedFrequency, FeedPattern, FeedStop, FeedTransfer, FeedTrip, ScheduledStopTime,
    StopTimeSample, TransferType, TransitFeed,
};
