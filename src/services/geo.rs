//! Great-circle distance and the fixed-speed delivery ETA estimate.

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Assumed average delivery speed. The ETA is a stated approximation, not a
/// live routing computation.
const AVERAGE_SPEED_KMH: f64 = 30.0;

/// Haversine distance in kilometers between two (latitude, longitude)
/// pairs in degrees. Malformed coordinates propagate as NaN; callers guard.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Estimated delivery time in whole minutes at the fixed average speed.
pub fn eta_minutes(distance_km: f64) -> i64 {
    (distance_km / AVERAGE_SPEED_KMH * 60.0).ceil() as i64
}
