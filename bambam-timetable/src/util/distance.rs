use geo::{line_string, Haversine, Length, LineString, Point};

/// great-circle distance in meters between two lon,lat points.
pub fn compute_haversine(src_point: Point<f64>, dst_point: Point<f64>) -> f64 {
    let line: LineString<f64> = line_string![src_point.0, dst_point.0];
    Haversine.length(&line)
}
