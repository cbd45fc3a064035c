use geo::Point;

use super::{FeedError, ScheduledStopTime, StopTimeSample};
use crate::util::distance::compute_haversine;

/// fills in the missing times of a trip's stop times.
///
/// a stop missing only one of arrival or departure takes the other. runs of stops with
/// no time at all are interpolated linearly between the surrounding timed stops, by
/// straight-line distance along the stops when every stop in the run has a location,
/// otherwise by stop count. the first and last stops must carry a time.
///
/// # Arguments
///
/// * `trip_id` - trip these stop times belong to, for error reporting
/// * `stop_times` - stop times in visiting order
/// * `locations` - location of each stop in `stop_times`, if known
pub fn interpolate_stop_times(
    trip_id: &str,
    stop_times: &[ScheduledStopTime],
    locations: &[Option<Point<f64>>],
) -> Result<Vec<StopTimeSample>, FeedError> {
    if stop_times.is_empty() {
        return Err(FeedError::EmptyTrip(trip_id.to_string()));
    }
    let times: Vec<Option<(i32, i32)>> = stop_times
        .iter()
        .map(|st| match (st.arrival_time, st.departure_time) {
            (Some(a), Some(d)) => Some((a, d)),
            (Some(a), None) => Some((a, a)),
            (None, Some(d)) => Some((d, d)),
            (None, None) => None,
        })
        .collect();

    let last = times.len() - 1;
    let (first_time, last_time) = (times[0], times[last]);
    if first_time.is_none() || last_time.is_none() {
        return Err(FeedError::MissingBoundaryTimes {
            trip_id: trip_id.to_string(),
        });
    }

    let mut result = Vec::with_capacity(times.len());
    let mut prev_timed: usize = 0;
    for (idx, time) in times.iter().enumerate() {
        match time {
            Some((arrival_time, departure_time)) => {
                prev_timed = idx;
                result.push(StopTimeSample {
                    arrival_time: *arrival_time,
                    departure_time: *departure_time,
                });
            }
            None => {
                // the last stop is timed, so a next timed stop always exists
                let next_timed = (idx + 1..=last)
                    .find(|i| times[*i].is_some())
                    .unwrap_or(last);
                let (_, run_start) = times[prev_timed].unwrap_or_default();
                let (run_end, _) = times[next_timed].unwrap_or_default();
                let fraction = run_fraction(prev_timed, idx, next_timed, locations);
                let t = run_start + ((run_end - run_start) as f64 * fraction).round() as i32;
                result.push(StopTimeSample {
                    arrival_time: t,
                    departure_time: t,
                });
            }
        }
    }
    Ok(result)
}

/// how far stop `idx` lies along the run from stop `start` to stop `end`, in [0, 1].
fn run_fraction(
    start: usize,
    idx: usize,
    end: usize,
    locations: &[Option<Point<f64>>],
) -> f64 {
    let by_count = (idx - start) as f64 / (end - start) as f64;
    let run: Option<Vec<Point<f64>>> = (start..=end)
        .map(|i| locations.get(i).copied().flatten())
        .collect();
    let Some(points) = run else {
        return by_count;
    };
    let cumulative: Vec<f64> = points
        .windows(2)
        .scan(0.0, |acc, w| {
            *acc += compute_haversine(w[0], w[1]);
            Some(*acc)
        })
        .collect();
    let total = cumulative.last().copied().unwrap_or(0.0);
    if total <= 0.0 {
        by_count
    } else {
        cumulative[idx - start - 1] / total
    }
}
