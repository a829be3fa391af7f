use std::cmp::Ordering;

use crate::{estimator, EmissionEstimate, EmissionFactorTable, Policy, TripRequest};

/// in kg CO2 per passenger-km of electrified rail
/// source: https://uic.org/sustainable-development/energy-and-co2-emissions/
static RAIL_FACTOR_KG_KM: f64 = 0.033;
/// ratio of rail track length to great-circle distance
static RAIL_DETOUR_RATIO: f64 = 1.2;
/// in kg CO2 absorbed per tree and year
/// source: https://winrock.org/flr-calculator/
static TREE_KG_PER_YEAR: f64 = 22.0;
/// in USD per kg CO2 offset
static OFFSET_COST_PER_KG: f64 = 0.60;
/// fraction of sustainable aviation fuel in the recommended blend
static SAF_CANDIDATE_BLEND: f64 = 0.30;

/// A lower-emission alternative to an estimated trip, together with the
/// offset counterbalancing its remaining emissions.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Recommendation {
    pub description: String,
    /// in kg, emissions remaining after taking the alternative
    pub estimated_co2_kg: f64,
    /// in kg, relative to the estimate the recommendation was derived from
    pub co2_saved_kg: f64,
    /// trees to plant to absorb the remaining emissions within a year
    pub offset_trees: u32,
    /// in USD, to offset the remaining emissions via credits
    pub offset_cost: f64,
}

fn trees(co2_kg: f64) -> u32 {
    (co2_kg / TREE_KG_PER_YEAR).ceil() as u32
}

impl Recommendation {
    /// An alternative emitting `estimated_co2_kg` instead of the reference
    /// estimate's total. The offset is sized to the remaining emissions.
    fn alternative(
        description: String,
        estimated_co2_kg: f64,
        reference: &EmissionEstimate,
    ) -> Self {
        Self {
            description,
            estimated_co2_kg,
            co2_saved_kg: reference.total_co2_kg - estimated_co2_kg,
            offset_trees: trees(estimated_co2_kg),
            offset_cost: estimated_co2_kg * OFFSET_COST_PER_KG,
        }
    }

    /// Offsetting the whole estimate, netting its emissions to zero.
    fn full_offset(reference: &EmissionEstimate) -> Self {
        Self {
            description: "offset the flight in full".to_string(),
            estimated_co2_kg: 0.0,
            co2_saved_kg: reference.total_co2_kg,
            offset_trees: trees(reference.total_co2_kg),
            offset_cost: reference.total_co2_kg * OFFSET_COST_PER_KG,
        }
    }
}

fn rank(a: &Recommendation, b: &Recommendation) -> Ordering {
    b.co2_saved_kg
        .total_cmp(&a.co2_saved_kg)
        .then(a.offset_cost.total_cmp(&b.offset_cost))
}

/// Returns lower-emission alternatives to an estimated trip, sorted by
/// descending `co2_saved_kg` with ties broken by ascending `offset_cost`.
/// Only alternatives that actually save emissions are returned; a trip
/// that cannot be improved yields an empty list.
pub fn recommend(
    estimate: &EmissionEstimate,
    trip: &TripRequest,
    factors: &EmissionFactorTable,
    policy: &Policy,
) -> Vec<Recommendation> {
    let mut candidates = vec![];

    if let Ok(category) = factors.get(&trip.category) {
        for cabin in category.cabins().filter(|cabin| *cabin < trip.cabin) {
            let Ok(downgraded) = estimator::estimate_distance(
                estimate.distance_km,
                &trip.category,
                cabin,
                trip.passengers,
                factors,
                policy,
            ) else {
                continue;
            };
            candidates.push(Recommendation::alternative(
                format!("downgrade from {} to {} class", trip.cabin, cabin),
                downgraded.total_co2_kg,
                estimate,
            ));
        }
    }

    if estimate.distance_km < policy.train_max_km {
        let rail_co2_kg = estimate.distance_km
            * RAIL_DETOUR_RATIO
            * RAIL_FACTOR_KG_KM
            * trip.passengers as f64;
        candidates.push(Recommendation::alternative(
            "take the train instead".to_string(),
            rail_co2_kg,
            estimate,
        ));
    }

    if policy.saf_blend == 0.0 && estimate.total_co2_kg > 0.0 {
        let blended_co2_kg = estimate.total_co2_kg
            * (1.0 - SAF_CANDIDATE_BLEND * estimator::SAF_MAX_REDUCTION);
        candidates.push(Recommendation::alternative(
            format!(
                "fly on a {:.0}% sustainable aviation fuel blend",
                SAF_CANDIDATE_BLEND * 100.0
            ),
            blended_co2_kg,
            estimate,
        ));
    }

    if estimate.total_co2_kg > 0.0 {
        candidates.push(Recommendation::full_offset(estimate));
    }

    candidates.retain(|candidate| candidate.co2_saved_kg > 0.0);
    candidates.sort_by(rank);
    candidates
}
