use super::{EdgeRegistry, ImportError};
use crate::{
    feed::StopTimeSample,
    model::{Departure, EdgeId},
};

/// inserts one departure per hop for a single trip instance, shifted by `shift` seconds.
/// hop `k` receives the departure from stop `k` and the travel time to the arrival at
/// stop `k + 1`.
///
/// returns the number of departures that were new to their hop schedules. a departure
/// already present is absorbed.
pub fn insert_trip_instance(
    trip_id: &str,
    samples: &[StopTimeSample],
    shift: i32,
    hops: &[EdgeId],
    registry: &mut EdgeRegistry,
) -> Result<usize, ImportError> {
    if samples.len() != hops.len() + 1 {
        return Err(ImportError::PatternMismatch {
            trip_id: trip_id.to_string(),
            stop_times: samples.len(),
            hops: hops.len(),
        });
    }
    let mut inserted = 0;
    for (hop, pair) in hops.iter().zip(samples.windows(2)) {
        let departure_time = pair[0].departure_time + shift;
        let arrival_time = pair[1].arrival_time + shift;
        let departure = Departure::new(departure_time, arrival_time - departure_time);
        if registry.hop_schedule_mut(*hop)?.insert(departure) {
            inserted += 1;
        }
    }
    Ok(inserted)
}

#[cfg(test)]
mod test {
    use super::insert_trip_instance;
    use crate::{
        feed::StopTimeSample,
        import::{EdgeRegistry, ImportError},
        model::{Departure, EdgeId, PendingEdgeRecord},
    };

    fn registry_with_hops(n: usize) -> (EdgeRegistry, Vec<EdgeId>) {
        let mut registry = EdgeRegistry::new();
        let hops: Vec<EdgeId> = (0..n).map(EdgeId).collect();
        for hop in hops.iter() {
            registry
                .register(*hop, PendingEdgeRecord::empty_hop())
                .expect("test invariant failed: fresh edge id");
        }
        (registry, hops)
    }

    fn departures(registry: &EdgeRegistry, hop: EdgeId) -> Vec<Departure> {
        registry
            .get(hop)
            .and_then(|r| r.schedule())
            .map(|s| s.iter().copied().collect())
            .unwrap_or_default()
    }

    fn samples() -> Vec<StopTimeSample> {
        vec![
            StopTimeSample {
                arrival_time: 28800,
                departure_time: 28800,
            },
            StopTimeSample {
                arrival_time: 29100,
                departure_time: 29130,
            },
            StopTimeSample {
                arrival_time: 29520,
                departure_time: 29520,
            },
        ]
    }

    #[test]
    fn test_dwell_is_excluded_from_travel_time() {
        let (mut registry, hops) = registry_with_hops(2);
        let inserted = insert_trip_instance("t1", &samples(), 0, &hops, &mut registry).unwrap();
        assert_eq!(inserted, 2);
        assert_eq!(departures(&registry, hops[0]), vec![Departure::new(28800, 300)]);
        assert_eq!(departures(&registry, hops[1]), vec![Departure::new(29130, 390)]);
    }

    #[test]
    fn test_shift_moves_departure_not_travel_time() {
        let (mut registry, hops) = registry_with_hops(2);
        insert_trip_instance("t1", &samples(), 0, &hops, &mut registry).unwrap();
        insert_trip_instance("t1", &samples(), 600, &hops, &mut registry).unwrap();
        assert_eq!(
            departures(&registry, hops[0]),
            vec![Departure::new(28800, 300), Departure::new(29400, 300)]
        );
    }

    #[test]
    fn test_repeated_instance_is_absorbed() {
        let (mut registry, hops) = registry_with_hops(2);
        insert_trip_instance("t1", &samples(), 0, &hops, &mut registry).unwrap();
        let inserted = insert_trip_instance("t2", &samples(), 0, &hops, &mut registry).unwrap();
        assert_eq!(inserted, 0);
        assert_eq!(departures(&registry, hops[0]).len(), 1);
    }

    #[test]
    fn test_sample_count_must_match_hops() {
        let (mut registry, hops) = registry_with_hops(3);
        let result = insert_trip_instance("t1", &samples(), 0, &hops, &mut registry);
        assert!(matches!(
            result,
            Err(ImportError::PatternMismatch {
                stop_times: 3,
                hops: 3,
                ..
            })
        ));
        assert!(departures(&registry, hops[0]).is_empty());
    }
}
