use geo::{Distance, Geodesic, Point};

/// Ellipsoidal (WGS84) surface distance between two positions, in kilometres.
pub fn point_to_point_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    Geodesic::distance(Point::new(lon1, lat1), Point::new(lon2, lat2)) / 1000.0
}
