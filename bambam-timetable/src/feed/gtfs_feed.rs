use std::collections::BinaryHeap;

use geo::Point;
use gtfs_structures::{Exception, Gtfs, Stop, StopTime, Trip};
use itertools::Itertools;

use super::{
    FeedError, FeedFrequency, FeedStop, FeedTransfer, FeedTrip, MissingStopLocationPolicy,
    ScheduledStopTime, StaticFeed, StaticFeedBuilder, TransferType, WeekdayFlags,
};

impl StaticFeed {
    /// reads a GTFS archive (zip file or directory) into a feed.
    pub fn from_path(
        bundle_file: &str,
        missing_stop_location_policy: &MissingStopLocationPolicy,
    ) -> Result<StaticFeed, FeedError> {
        let gtfs = Gtfs::new(bundle_file).map_err(FeedError::from)?;
        log::info!(
            "read GTFS bundle {bundle_file} with {} stops and {} trips",
            gtfs.stops.len(),
            gtfs.trips.len()
        );
        StaticFeed::from_gtfs(&gtfs, missing_stop_location_policy)
    }

    /// converts a parsed GTFS archive into a feed. stops are ordered by stop id so
    /// that repeated imports of the same archive allocate the same node ids.
    pub fn from_gtfs(
        gtfs: &Gtfs,
        missing_stop_location_policy: &MissingStopLocationPolicy,
    ) -> Result<StaticFeed, FeedError> {
        let mut builder = StaticFeedBuilder::default();

        let sorted_stops = gtfs
            .stops
            .iter()
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .collect_vec();

        for (stop_id, stop) in sorted_stops.iter() {
            match get_stop_location(stop, gtfs) {
                Some(location) => builder.add_stop(FeedStop {
                    id: stop_id.to_string(),
                    name: stop.name.clone().unwrap_or_default(),
                    location,
                }),
                None => match missing_stop_location_policy {
                    MissingStopLocationPolicy::Fail => {
                        return Err(FeedError::MissingStopLocation(stop_id.to_string()))
                    }
                    MissingStopLocationPolicy::DropStop => {
                        log::warn!("dropping stop {stop_id} which has no location");
                    }
                },
            }
        }

        for (service_id, calendar) in gtfs.calendar.iter() {
            let weekdays = WeekdayFlags::from_bools(
                calendar.monday,
                calendar.tuesday,
                calendar.wednesday,
                calendar.thursday,
                calendar.friday,
                calendar.saturday,
                calendar.sunday,
            );
            let service = builder.service_mut(service_id);
            service.date_range = Some((calendar.start_date, calendar.end_date));
            service.weekdays = weekdays;
        }
        for (service_id, calendar_dates) in gtfs.calendar_dates.iter() {
            let service = builder.service_mut(service_id);
            for calendar_date in calendar_dates.iter() {
                match calendar_date.exception_type {
                    Exception::Added => service.add_date(calendar_date.date),
                    Exception::Deleted => service.remove_date(calendar_date.date),
                }
            }
        }

        for (trip_id, trip) in gtfs.trips.iter() {
            let stop_times = get_ordered_stops(trip)
                .iter()
                .map(|st| ScheduledStopTime {
                    stop_id: st.stop.id.clone(),
                    arrival_time: st.arrival_time.map(|t| t as i32),
                    departure_time: st.departure_time.map(|t| t as i32),
                })
                .collect_vec();
            let feed_trip = FeedTrip {
                id: trip_id.clone(),
                route_id: trip.route_id.clone(),
                service_id: trip.service_id.clone(),
            };
            builder.add_trip(feed_trip, stop_times);
            for frequency in trip.frequencies.iter() {
                builder.add_frequency(
                    trip_id,
                    FeedFrequency {
                        start_time: frequency.start_time as i32,
                        end_time: frequency.end_time as i32,
                        headway_secs: frequency.headway_secs as i32,
                    },
                );
            }
        }

        // gtfs_structures attaches each transfers.txt row to its from_stop
        for (stop_id, stop) in sorted_stops.iter() {
            for transfer in stop.transfers.iter() {
                builder.add_transfer(FeedTransfer {
                    from_stop_id: stop_id.to_string(),
                    to_stop_id: transfer.to_stop_id.clone(),
                    transfer_type: TransferType::from(&transfer.transfer_type),
                    min_transfer_time: transfer.min_transfer_time,
                });
            }
        }

        Ok(builder.build())
    }
}

/// location of a stop, taken from its parent station when the stop has none of its own.
fn get_stop_location(stop: &Stop, gtfs: &Gtfs) -> Option<Point<f64>> {
    if let (Some(lon), Some(lat)) = (stop.longitude, stop.latitude) {
        return Some(Point::new(lon, lat));
    }

    // entrances and boarding areas may omit lon,lat. one level of parent only.
    stop.parent_station
        .as_ref()
        .and_then(|parent_id| gtfs.stops.get(parent_id))
        .and_then(
            |parent_stop| match (parent_stop.longitude, parent_stop.latitude) {
                (Some(lon), Some(lat)) => Some(Point::new(lon, lat)),
                _ => None,
            },
        )
}

/// stop times of a trip by ascending stop_sequence.
fn get_ordered_stops(trip: &Trip) -> Vec<&StopTime> {
    let by_sequence: BinaryHeap<(u32, usize)> = trip
        .stop_times
        .iter()
        .enumerate()
        .map(|(i, st)| (st.stop_sequence, i))
        .collect();

    by_sequence
        .into_sorted_vec()
        .iter()
        .map(|(_, idx)| &trip.stop_times[*idx])
        .collect()
}
