use std::collections::{BTreeMap, HashMap};

use itertools::Itertools;

use super::{FeedPattern, FeedStop, FeedTrip, ScheduledStopTime};

/// groups trips into patterns by their ordered stop sequence.
///
/// patterns are returned ordered by stop sequence, and the trip ids of each pattern are
/// sorted, so the result does not depend on the iteration order of the inputs. a
/// pattern is named after the route of its first trip and its terminal stops.
pub fn derive_patterns(
    trips: &HashMap<String, FeedTrip>,
    stop_times: &HashMap<String, Vec<ScheduledStopTime>>,
    stops: &HashMap<String, &FeedStop>,
) -> Vec<FeedPattern> {
    let mut by_sequence: BTreeMap<Vec<String>, Vec<String>> = BTreeMap::new();
    for (trip_id, trip_stop_times) in stop_times.iter() {
        if !trips.contains_key(trip_id) || trip_stop_times.is_empty() {
            continue;
        }
        let sequence = trip_stop_times
            .iter()
            .map(|st| st.stop_id.clone())
            .collect_vec();
        by_sequence.entry(sequence).or_default().push(trip_id.clone());
    }

    by_sequence
        .into_iter()
        .map(|(sequence, trip_ids)| {
            let trip_ids = trip_ids.into_iter().sorted().collect_vec();
            let route_id = trip_ids
                .first()
                .and_then(|id| trips.get(id))
                .map(|t| t.route_id.as_str())
                .unwrap_or_default();
            let name = pattern_name(route_id, &sequence, stops);
            FeedPattern {
                name,
                stops: sequence,
                trip_ids,
            }
        })
        .collect_vec()
}

fn pattern_name(route_id: &str, sequence: &[String], stops: &HashMap<String, &FeedStop>) -> String {
    let stop_name = |stop_id: Option<&String>| -> String {
        match stop_id {
            Some(id) => stops
                .get(id)
                .map(|s| s.name.clone())
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| id.clone()),
            None => String::new(),
        }
    };
    format!(
        "{} from {} to {}",
        route_id,
        stop_name(sequence.first()),
        stop_name(sequence.last())
    )
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::derive_patterns;
    use crate::feed::{FeedStop, FeedTrip, ScheduledStopTime};
    use geo::Point;

    fn trip(id: &str, route_id: &str) -> (String, FeedTrip) {
        (
            id.to_string(),
            FeedTrip {
                id: id.to_string(),
                route_id: route_id.to_string(),
                service_id: "s".to_string(),
            },
        )
    }

    fn visits(stop_ids: &[&str]) -> Vec<ScheduledStopTime> {
        stop_ids
            .iter()
            .enumerate()
            .map(|(i, s)| ScheduledStopTime::new(s, i as i32 * 60, i as i32 * 60))
            .collect()
    }

    #[test]
    fn test_trips_with_same_sequence_share_pattern() {
        let trips: HashMap<_, _> = [trip("t2", "r1"), trip("t1", "r1"), trip("t3", "r1")]
            .into_iter()
            .collect();
        let stop_times: HashMap<String, Vec<ScheduledStopTime>> = [
            ("t1".to_string(), visits(&["A", "B", "C"])),
            ("t2".to_string(), visits(&["A", "B", "C"])),
            ("t3".to_string(), visits(&["C", "B", "A"])),
        ]
        .into_iter()
        .collect();
        let stop_a = FeedStop {
            id: "A".to_string(),
            name: "Alpha".to_string(),
            location: Point::new(0.0, 0.0),
        };
        let stops: HashMap<String, &FeedStop> = [("A".to_string(), &stop_a)].into_iter().collect();

        let patterns = derive_patterns(&trips, &stop_times, &stops);
        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[0].stops, vec!["A", "B", "C"]);
        assert_eq!(patterns[0].trip_ids, vec!["t1", "t2"]);
        assert_eq!(patterns[0].name, "r1 from Alpha to C");
        assert_eq!(patterns[1].stops, vec!["C", "B", "A"]);
        assert_eq!(patterns[1].trip_ids, vec!["t3"]);
    }
}
