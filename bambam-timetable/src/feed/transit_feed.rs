use chrono::NaiveDate;
use geo::Point;
use serde::{Deserialize, Serialize};

use super::{FeedError, ServiceCalendar};

/// a transit stop. becomes one node of the transit graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedStop {
    pub id: String,
    pub name: String,
    pub location: Point<f64>,
}

/// the ordered stop sequence shared by one or more trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedPattern {
    pub name: String,
    pub stops: Vec<String>,
    pub trip_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedTrip {
    pub id: String,
    pub route_id: String,
    pub service_id: String,
}

/// a frequencies.txt row. times are seconds since midnight; the window
/// [start_time, end_time) is end-exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedFrequency {
    pub start_time: i32,
    pub end_time: i32,
    pub headway_secs: i32,
}

/// GTFS transfers.txt transfer_type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferType {
    /// 0 (or empty): recommended transfer point
    Recommended,
    /// 1: timed transfer point, the departing vehicle waits
    Timed,
    /// 2: requires a minimum transfer time
    MinimumTime,
    /// 3: transfers are not possible
    NotPossible,
    /// any other code, such as the in-seat transfer types
    Other(i32),
}

impl From<i32> for TransferType {
    fn from(value: i32) -> Self {
        match value {
            0 => TransferType::Recommended,
            1 => TransferType::Timed,
            2 => TransferType::MinimumTime,
            3 => TransferType::NotPossible,
            other => TransferType::Other(other),
        }
    }
}

impl From<&gtfs_structures::TransferType> for TransferType {
    fn from(value: &gtfs_structures::TransferType) -> Self {
        use gtfs_structures::TransferType as Gtfs;
        match value {
            Gtfs::Recommended => TransferType::Recommended,
            Gtfs::Timed => TransferType::Timed,
            Gtfs::MinTime => TransferType::MinimumTime,
            Gtfs::Impossible => TransferType::NotPossible,
            Gtfs::StayOnBoard => TransferType::Other(4),
            Gtfs::MustAlight => TransferType::Other(5),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedTransfer {
    pub from_stop_id: String,
    pub to_stop_id: String,
    pub transfer_type: TransferType,
    pub min_transfer_time: Option<u32>,
}

/// a stop time as listed in the feed. either time may be missing for stops that are
/// not timepoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledStopTime {
    pub stop_id: String,
    pub arrival_time: Option<i32>,
    pub departure_time: Option<i32>,
}

impl ScheduledStopTime {
    pub fn new(stop_id: &str, arrival_time: i32, departure_time: i32) -> ScheduledStopTime {
        ScheduledStopTime {
            stop_id: stop_id.to_string(),
            arrival_time: Some(arrival_time),
            departure_time: Some(departure_time),
        }
    }

    /// a stop with no listed times, to be interpolated.
    pub fn untimed(stop_id: &str) -> ScheduledStopTime {
        ScheduledStopTime {
            stop_id: stop_id.to_string(),
            arrival_time: None,
            departure_time: None,
        }
    }
}

/// a fully interpolated stop time: both values are present for every visited stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopTimeSample {
    pub arrival_time: i32,
    pub departure_time: i32,
}

/// everything the timetable import reads from a transit feed.
///
/// pattern derivation, calendar evaluation and stop time interpolation belong to the
/// feed, the import only consumes their results.
pub trait TransitFeed {
    /// all stops. the import allocates graph nodes in this order.
    fn stops(&self) -> &[FeedStop];

    fn patterns(&self) -> &[FeedPattern];

    fn trip(&self, trip_id: &str) -> Option<&FeedTrip>;

    fn service(&self, service_id: &str) -> Option<&ServiceCalendar>;

    /// frequency entries of a trip, empty if the trip runs once at its listed times.
    fn frequencies(&self, trip_id: &str) -> &[FeedFrequency];

    fn transfers(&self) -> &[FeedTransfer];

    /// the earliest calendar start date or added date across all services of the feed.
    fn schedule_start_date(&self) -> Result<NaiveDate, FeedError>;

    /// the stop times of a trip in visiting order with every arrival and departure filled
    /// in. fails with [`FeedError::MissingBoundaryTimes`] if the first or last stop has
    /// no time.
    fn interpolated_stop_times(&self, trip_id: &str) -> Result<Vec<StopTimeSample>, FeedError>;
}
