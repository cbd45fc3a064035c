use serde::{Deserialize, Serialize};

/// a single sample in a hop schedule: leaving the source stop at `departure_time`
/// and reaching the destination stop `travel_time` seconds later.
///
/// both values are in seconds since midnight of the reference service day. departures
/// order by departure time and then by travel time, so two samples leaving at the same
/// time with different travel times are distinct entries of a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Departure {
    pub departure_time: i32,
    pub travel_time: i32,
}

impl Departure {
    pub fn new(departure_time: i32, travel_time: i32) -> Departure {
        Departure {
            departure_time,
            travel_time,
        }
    }

    /// the smallest possible departure leaving at `time`. used as the search key when
    /// looking for the next departure at or after some time.
    pub fn query(time: i32) -> Departure {
        Departure {
            departure_time: time,
            travel_time: i32::MIN,
        }
    }

    /// time at which this departure reaches the destination stop.
    pub fn arrival_time(&self) -> i32 {
        self.departure_time + self.travel_time
    }
}
