use std::collections::HashMap;

use chrono::NaiveDate;
use geo::Point;

use super::{
    interpolation, pattern_ops, FeedError, FeedFrequency, FeedPattern, FeedStop, FeedTransfer,
    FeedTrip, ScheduledStopTime, ServiceCalendar, StopTimeSample, TransitFeed,
};

/// an in-memory transit feed. built from a GTFS archive with [`StaticFeed::from_gtfs`]
/// or assembled directly with a [`StaticFeedBuilder`].
#[derive(Debug, Clone)]
pub struct StaticFeed {
    stops: Vec<FeedStop>,
    stop_index: HashMap<String, usize>,
    patterns: Vec<FeedPattern>,
    trips: HashMap<String, FeedTrip>,
    stop_times: HashMap<String, Vec<ScheduledStopTime>>,
    services: HashMap<String, ServiceCalendar>,
    frequencies: HashMap<String, Vec<FeedFrequency>>,
    transfers: Vec<FeedTransfer>,
}

impl StaticFeed {
    pub fn builder() -> StaticFeedBuilder {
        StaticFeedBuilder::default()
    }

    pub fn stop(&self, stop_id: &str) -> Option<&FeedStop> {
        self.stop_index.get(stop_id).and_then(|i| self.stops.get(*i))
    }

    fn stop_location(&self, stop_id: &str) -> Option<Point<f64>> {
        self.stop(stop_id).map(|s| s.location)
    }
}

impl TransitFeed for StaticFeed {
    fn stops(&self) -> &[FeedStop] {
        &self.stops
    }

    fn patterns(&self) -> &[FeedPattern] {
        &self.patterns
    }

    fn trip(&self, trip_id: &str) -> Option<&FeedTrip> {
        self.trips.get(trip_id)
    }

    fn service(&self, service_id: &str) -> Option<&ServiceCalendar> {
        self.services.get(service_id)
    }

    fn frequencies(&self, trip_id: &str) -> &[FeedFrequency] {
        self.frequencies
            .get(trip_id)
            .map(|f| f.as_slice())
            .unwrap_or(&[])
    }

    fn transfers(&self) -> &[FeedTransfer] {
        &self.transfers
    }

    fn schedule_start_date(&self) -> Result<NaiveDate, FeedError> {
        self.services
            .values()
            .filter_map(|s| s.start_date())
            .min()
            .ok_or(FeedError::EmptyCalendar)
    }

    fn interpolated_stop_times(&self, trip_id: &str) -> Result<Vec<StopTimeSample>, FeedError> {
        let stop_times = self
            .stop_times
            .get(trip_id)
            .ok_or_else(|| FeedError::UnknownTrip(trip_id.to_string()))?;
        let locations: Vec<Option<Point<f64>>> = stop_times
            .iter()
            .map(|st| self.stop_location(&st.stop_id))
            .collect();
        interpolation::interpolate_stop_times(trip_id, stop_times, &locations)
    }
}

/// assembles a [`StaticFeed`]. patterns are derived from the trips when the feed is
/// built.
#[derive(Debug, Default)]
pub struct StaticFeedBuilder {
    stops: Vec<FeedStop>,
    stop_index: HashMap<String, usize>,
    trips: HashMap<String, FeedTrip>,
    stop_times: HashMap<String, Vec<ScheduledStopTime>>,
    services: HashMap<String, ServiceCalendar>,
    frequencies: HashMap<String, Vec<FeedFrequency>>,
    transfers: Vec<FeedTransfer>,
}

impl StaticFeedBuilder {
    /// adds a stop at a lon,lat location. stops keep the order they are first added in.
    pub fn stop(mut self, id: &str, name: &str, lon: f64, lat: f64) -> Self {
        self.add_stop(FeedStop {
            id: id.to_string(),
            name: name.to_string(),
            location: Point::new(lon, lat),
        });
        self
    }

    pub fn service(mut self, calendar: ServiceCalendar) -> Self {
        self.add_service(calendar);
        self
    }

    /// adds a trip with its stop times in visiting order.
    pub fn trip(
        mut self,
        id: &str,
        route_id: &str,
        service_id: &str,
        stop_times: Vec<ScheduledStopTime>,
    ) -> Self {
        let trip = FeedTrip {
            id: id.to_string(),
            route_id: route_id.to_string(),
            service_id: service_id.to_string(),
        };
        self.add_trip(trip, stop_times);
        self
    }

    pub fn frequency(mut self, trip_id: &str, start_time: i32, end_time: i32, headway_secs: i32) -> Self {
        self.add_frequency(
            trip_id,
            FeedFrequency {
                start_time,
                end_time,
                headway_secs,
            },
        );
        self
    }

    pub fn transfer(mut self, transfer: FeedTransfer) -> Self {
        self.add_transfer(transfer);
        self
    }

    /// adds a stop. a stop id seen before is replaced in its original position.
    pub fn add_stop(&mut self, stop: FeedStop) {
        match self.stop_index.get(&stop.id) {
            Some(idx) => self.stops[*idx] = stop,
            None => {
                self.stop_index.insert(stop.id.clone(), self.stops.len());
                self.stops.push(stop);
            }
        }
    }

    /// adds a service. a service id seen before is replaced.
    pub fn add_service(&mut self, calendar: ServiceCalendar) {
        self.services.insert(calendar.service_id.clone(), calendar);
    }

    /// the service with this id, created empty if not seen yet.
    pub fn service_mut(&mut self, service_id: &str) -> &mut ServiceCalendar {
        self.services
            .entry(service_id.to_string())
            .or_insert_with(|| ServiceCalendar::new(service_id))
    }

    pub fn add_trip(&mut self, trip: FeedTrip, stop_times: Vec<ScheduledStopTime>) {
        self.stop_times.insert(trip.id.clone(), stop_times);
        self.trips.insert(trip.id.clone(), trip);
    }

    pub fn add_frequency(&mut self, trip_id: &str, frequency: FeedFrequency) {
        self.frequencies
            .entry(trip_id.to_string())
            .or_default()
            .push(frequency);
    }

    pub fn add_transfer(&mut self, transfer: FeedTransfer) {
        self.transfers.push(transfer);
    }

    pub fn build(self) -> StaticFeed {
        let stop_lookup: HashMap<String, &FeedStop> =
            self.stops.iter().map(|s| (s.id.clone(), s)).collect();
        let patterns = pattern_ops::derive_patterns(&self.trips, &self.stop_times, &stop_lookup);
        StaticFeed {
            stop_index: self.stop_index,
            patterns,
            stops: self.stops,
            trips: self.trips,
            stop_times: self.stop_times,
            services: self.services,
            frequencies: self.frequencies,
            transfers: self.transfers,
        }
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use geo::Point;

    use crate::feed::{FeedError, ScheduledStopTime, ServiceCalendar, TransitFeed, WeekdayFlags};

    use super::StaticFeed;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("test invariant failed: invalid date")
    }

    #[test]
    fn test_build_derives_patterns_and_lookups() {
        let feed = StaticFeed::builder()
            .stop("A", "Alpha", -105.0, 40.0)
            .stop("B", "Bravo", -105.0, 40.01)
            .service(ServiceCalendar::new("wk").with_date_range(
                date(2024, 3, 4),
                date(2024, 3, 31),
                WeekdayFlags::all(),
            ))
            .trip(
                "t1",
                "r1",
                "wk",
                vec![
                    ScheduledStopTime::new("A", 100, 100),
                    ScheduledStopTime::new("B", 200, 200),
                ],
            )
            .frequency("t1", 100, 700, 300)
            .build();

        assert_eq!(feed.stops().len(), 2);
        assert_eq!(feed.patterns().len(), 1);
        assert_eq!(feed.patterns()[0].name, "r1 from Alpha to Bravo");
        assert_eq!(feed.frequencies("t1").len(), 1);
        assert!(feed.frequencies("t2").is_empty());
        assert_eq!(feed.schedule_start_date().unwrap(), date(2024, 3, 4));
        assert_eq!(feed.interpolated_stop_times("t1").unwrap().len(), 2);
        assert!(matches!(
            feed.interpolated_stop_times("t2"),
            Err(FeedError::UnknownTrip(_))
        ));
    }

    #[test]
    fn test_start_date_is_earliest_calendar_start() {
        // "wk" starts on saturday 2024-03-02 but only runs monday to friday
        let feed = StaticFeed::builder()
            .service(ServiceCalendar::new("wk").with_date_range(
                date(2024, 3, 2),
                date(2024, 3, 31),
                WeekdayFlags::from_bools(true, true, true, true, true, false, false),
            ))
            .service(ServiceCalendar::new("later").with_date_range(
                date(2024, 3, 9),
                date(2024, 3, 31),
                WeekdayFlags::all(),
            ))
            .build();
        assert_eq!(feed.schedule_start_date().unwrap(), date(2024, 3, 2));
    }

    #[test]
    fn test_repeated_stop_id_replaces_stop() {
        let feed = StaticFeed::builder()
            .stop("A", "Alpha", -105.0, 40.0)
            .stop("B", "Bravo", -105.0, 40.01)
            .stop("A", "Alpha Station", -105.1, 40.1)
            .build();
        assert_eq!(feed.stops().len(), 2);
        assert_eq!(feed.stops()[0].id, "A");
        assert_eq!(feed.stops()[1].id, "B");
        let a = feed.stop("A").expect("stop A should exist");
        assert_eq!(a.name, "Alpha Station");
        assert_eq!(a.location, Point::new(-105.1, 40.1));
    }

    #[test]
    fn test_empty_calendar_has_no_start_date() {
        let feed = StaticFeed::builder().stop("A", "Alpha", 0.0, 0.0).build();
        assert!(matches!(
            feed.schedule_start_date(),
            Err(FeedError::EmptyCalendar)
        ));
    }
}
