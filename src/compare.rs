use crate::{
    estimator, AirportDirectory, Cabin, EmissionFactorTable, Error, Policy, Result,
    TripRequest,
};

/// Estimated emissions of flying one route on one aircraft category,
/// used to rank categories against each other.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CategoryRanking {
    pub category: String,
    pub cabin: Cabin,
    /// in kg, all passengers of the request combined
    pub total_co2_kg: f64,
}

/// Estimates the trip's emissions on every aircraft category offering its
/// cabin, sorted by ascending `total_co2_kg`. The trip's own category is
/// ignored.
/// # Error
/// Errors if an airport is unknown, origin and destination coincide, or
/// the request has no passengers.
pub fn compare(
    trip: &TripRequest,
    airports: &AirportDirectory,
    factors: &EmissionFactorTable,
    policy: &Policy,
) -> Result<Vec<CategoryRanking>> {
    if trip.passengers == 0 {
        return Err(Error::InvalidPassengerCount(trip.passengers));
    }
    let distance_km = estimator::resolve_distance(trip, airports)?;
    compare_distance(distance_km, trip.cabin, trip.passengers, factors, policy)
}

/// As [`compare`], but over a known distance in km.
pub fn compare_distance(
    distance_km: f64,
    cabin: Cabin,
    passengers: u32,
    factors: &EmissionFactorTable,
    policy: &Policy,
) -> Result<Vec<CategoryRanking>> {
    if passengers == 0 {
        return Err(Error::InvalidPassengerCount(passengers));
    }
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(Error::InvalidDistance(distance_km));
    }

    let mut rankings = factors
        .iter()
        .filter(|category| category.cabin_multipliers.contains_key(&cabin))
        .map(|category| {
            let estimate = estimator::estimate_distance(
                distance_km,
                &category.category,
                cabin,
                passengers,
                factors,
                policy,
            )?;
            Ok(CategoryRanking {
                category: category.category.clone(),
                cabin,
                total_co2_kg: estimate.total_co2_kg,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    rankings.sort_by(|a, b| a.total_co2_kg.total_cmp(&b.total_co2_kg));
    Ok(rankings)
}
