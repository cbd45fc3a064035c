use chrono::NaiveDate;

use super::{schedule_inserter::insert_trip_instance, EdgeRegistry, ImportError};
use crate::{
    feed::{FeedPattern, TransitFeed},
    model::EdgeId,
};

/// tallies of the trips of one or more patterns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TripScheduleCounts {
    /// trips running on the service date
    pub active_trips: usize,
    /// trips skipped because their service does not run on the service date
    pub inactive_trips: usize,
    /// trip instances inserted, counting each frequency repeat
    pub instances: usize,
    /// departures added to hop schedules
    pub departures: usize,
}

impl std::ops::AddAssign for TripScheduleCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.active_trips += rhs.active_trips;
        self.inactive_trips += rhs.inactive_trips;
        self.instances += rhs.instances;
        self.departures += rhs.departures;
    }
}

/// fills the hop schedules of a pattern with every trip of the pattern that runs on
/// `service_date`.
///
/// a trip without frequencies is inserted once, as scheduled. a trip with frequencies is
/// inserted once per headway step within each window `[start_time, end_time)`, shifted
/// by the step's offset from `start_time`.
pub fn schedule_pattern_trips(
    feed: &dyn TransitFeed,
    pattern: &FeedPattern,
    hops: &[EdgeId],
    service_date: NaiveDate,
    registry: &mut EdgeRegistry,
) -> Result<TripScheduleCounts, ImportError> {
    let mut counts = TripScheduleCounts::default();
    for trip_id in pattern.trip_ids.iter() {
        let trip = feed.trip(trip_id).ok_or_else(|| ImportError::UnknownTrip {
            pattern: pattern.name.clone(),
            trip_id: trip_id.clone(),
        })?;
        let service = feed
            .service(&trip.service_id)
            .ok_or_else(|| ImportError::UnknownService {
                trip_id: trip_id.clone(),
                service_id: trip.service_id.clone(),
            })?;
        if !service.runs_on(service_date) {
            counts.inactive_trips += 1;
            continue;
        }
        counts.active_trips += 1;

        let frequencies = feed.frequencies(trip_id);
        if let Some(invalid) = frequencies.iter().find(|f| f.headway_secs <= 0) {
            return Err(ImportError::InvalidFrequency {
                trip_id: trip_id.clone(),
                headway_secs: invalid.headway_secs,
            });
        }

        let samples = feed.interpolated_stop_times(trip_id)?;
        if frequencies.is_empty() {
            counts.departures += insert_trip_instance(trip_id, &samples, 0, hops, registry)?;
            counts.instances += 1;
            continue;
        }
        for frequency in frequencies.iter() {
            let mut offset = frequency.start_time;
            while offset < frequency.end_time {
                let shift = offset - frequency.start_time;
                counts.departures +=
                    insert_trip_instance(trip_id, &samples, shift, hops, registry)?;
                counts.instances += 1;
                offset += frequency.headway_secs;
            }
        }
    }
    Ok(counts)
}
