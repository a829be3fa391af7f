use crate::{Airport, Error, Result};

fn in_range(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude)
}

/// Returns the distance between two geo-points in km
fn haversine(from: (f64, f64), to: (f64, f64)) -> f64 {
    let from = geoutils::Location::new(from.0, from.1);
    let to = geoutils::Location::new(to.0, to.1);
    from.haversine_distance_to(&to).meters() / 1000.0
}

/// Returns the great-circle distance between two [`Airport`]s in km,
/// via the haversine formula over the mean Earth radius (6371.0 km).
/// Symmetric in its arguments; zero when both are at the same point.
/// # Error
/// Errors if either latitude lies outside [-90, 90] or either longitude
/// outside [-180, 180].
pub fn distance(from: &Airport, to: &Airport) -> Result<f64> {
    for airport in [from, to] {
        if !in_range(airport.latitude_deg, airport.longitude_deg) {
            return Err(Error::InvalidCoordinate {
                latitude: airport.latitude_deg,
                longitude: airport.longitude_deg,
            });
        }
    }
    Ok(haversine(
        (from.latitude_deg, from.longitude_deg),
        (to.latitude_deg, to.longitude_deg),
    ))
}
