use crate::{geo, AirportDirectory, Cabin, EmissionFactorTable, Error, Policy, Result};

/// in kg CO2 per kg of jet fuel burned
/// source: https://www.iata.org/en/programs/environment/passenger-emissions-methodology/
static CO2_PER_KG_FUEL: f64 = 3.16;
/// in kg/L
/// source: https://en.wikipedia.org/wiki/Jet_fuel
static FUEL_KG_PER_LITER: f64 = 0.8;
/// radiative forcing index accounting for non-CO2 effects at altitude
/// source: https://www.umweltbundesamt.de/en/publikationen
static RF_MULTIPLIER: f64 = 1.9;
/// lifecycle emission reduction of pure sustainable aviation fuel
/// source: https://www.iata.org/en/programs/environment/sustainable-aviation-fuels/
pub(crate) static SAF_MAX_REDUCTION: f64 = 0.80;

/// A passenger trip between two airports of the reference dataset.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TripRequest {
    /// IATA code of the origin airport
    pub origin: String,
    /// IATA code of the destination airport
    pub destination: String,
    /// aircraft category flown, e.g. `narrowbody`
    pub category: String,
    pub cabin: Cabin,
    /// number of passengers traveling together, at least 1
    pub passengers: u32,
}

/// Estimated emissions of a trip.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct EmissionEstimate {
    /// great-circle distance flown in km
    pub distance_km: f64,
    /// in kg, all passengers of the request combined
    pub total_co2_kg: f64,
    /// in kg
    pub per_passenger_co2_kg: f64,
}

impl EmissionEstimate {
    pub fn total_co2_tonnes(&self) -> f64 {
        self.total_co2_kg / 1000.0
    }

    /// Jet fuel burned for these emissions, in liters.
    pub fn fuel_liters(&self) -> f64 {
        self.total_co2_kg / CO2_PER_KG_FUEL / FUEL_KG_PER_LITER
    }
}

/// Returns the great-circle distance of the trip's route in km.
/// # Error
/// Errors if either airport is unknown or both codes name the same airport.
pub(crate) fn resolve_distance(
    trip: &TripRequest,
    airports: &AirportDirectory,
) -> Result<f64> {
    let origin = airports.lookup(&trip.origin)?;
    let destination = airports.lookup(&trip.destination)?;
    if origin.code == destination.code {
        return Err(Error::SameAirport(origin.code.to_string()));
    }
    geo::distance(origin, destination)
}

/// Estimates the CO2 emissions of a trip between two airports of the
/// reference dataset.
/// # Error
/// Errors if an airport, category or cabin is unknown, origin and
/// destination coincide, or the request has no passengers.
pub fn estimate(
    trip: &TripRequest,
    airports: &AirportDirectory,
    factors: &EmissionFactorTable,
    policy: &Policy,
) -> Result<EmissionEstimate> {
    if trip.passengers == 0 {
        return Err(Error::InvalidPassengerCount(trip.passengers));
    }
    let distance_km = resolve_distance(trip, airports)?;
    log::debug!(
        "{} -> {}: {distance_km} km",
        trip.origin,
        trip.destination
    );
    with_distance(
        distance_km,
        &trip.category,
        trip.cabin,
        trip.passengers,
        factors,
        policy,
    )
}

/// Estimates the CO2 emissions of flying a known distance, bypassing the
/// airport directory. Used for routes whose airports are not in the
/// reference dataset.
/// # Error
/// Errors if the category or cabin is unknown, the distance is not a
/// finite non-negative number of km, or the request has no passengers.
pub fn estimate_distance(
    distance_km: f64,
    category: &str,
    cabin: Cabin,
    passengers: u32,
    factors: &EmissionFactorTable,
    policy: &Policy,
) -> Result<EmissionEstimate> {
    if passengers == 0 {
        return Err(Error::InvalidPassengerCount(passengers));
    }
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(Error::InvalidDistance(distance_km));
    }
    with_distance(distance_km, category, cabin, passengers, factors, policy)
}

fn with_distance(
    distance_km: f64,
    category: &str,
    cabin: Cabin,
    passengers: u32,
    factors: &EmissionFactorTable,
    policy: &Policy,
) -> Result<EmissionEstimate> {
    let (base_factor, cabin_multiplier) = factors.lookup(category, cabin)?;
    let adjustment = policy.bands.adjustment(distance_km);

    let mut per_passenger_co2_kg =
        distance_km * base_factor * adjustment * cabin_multiplier;
    if policy.radiative_forcing {
        per_passenger_co2_kg *= RF_MULTIPLIER;
    }
    let saf_blend = policy.saf_blend.clamp(0.0, 1.0);
    if saf_blend > 0.0 {
        per_passenger_co2_kg *= 1.0 - saf_blend * SAF_MAX_REDUCTION;
    }
    let total_co2_kg = per_passenger_co2_kg * passengers as f64;

    Ok(EmissionEstimate {
        distance_km,
        total_co2_kg,
        per_passenger_co2_kg,
    })
}
