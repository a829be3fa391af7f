use std::{collections::HashMap, io::Cursor, str::FromStr};

use crate::{Error, Result};

/// Cabin of a scheduled flight. Ordered by seat area, so
/// `Cabin::Economy < Cabin::First`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Cabin {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl Cabin {
    /// All cabins, most to least space-efficient.
    pub fn all() -> [Cabin; 4] {
        [
            Cabin::Economy,
            Cabin::PremiumEconomy,
            Cabin::Business,
            Cabin::First,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cabin::Economy => "economy",
            Cabin::PremiumEconomy => "premium_economy",
            Cabin::Business => "business",
            Cabin::First => "first",
        }
    }
}

impl FromStr for Cabin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "economy" => Ok(Cabin::Economy),
            "premium_economy" | "premium economy" => Ok(Cabin::PremiumEconomy),
            "business" => Ok(Cabin::Business),
            "first" => Ok(Cabin::First),
            _ => Err(Error::UnknownCabin(s.to_string())),
        }
    }
}

impl std::fmt::Display for Cabin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An aircraft category of the reference dataset together with its
/// per-passenger-km base factor and the cabins it offers.
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftCategory {
    pub category: String,
    /// kg CO2 emitted per passenger and km flown, before haul and cabin
    /// adjustments
    pub base_factor: f64,
    /// seat-area multipliers; a cabin absent here is not offered by this
    /// category
    pub cabin_multipliers: HashMap<Cabin, f64>,
}

impl AircraftCategory {
    /// Returns the cabins this category offers, most to least
    /// space-efficient.
    pub fn cabins(&self) -> impl Iterator<Item = Cabin> + '_ {
        Cabin::all()
            .into_iter()
            .filter(|cabin| self.cabin_multipliers.contains_key(cabin))
    }
}

#[derive(Debug, serde::Deserialize)]
struct Row {
    category: String,
    base_factor: f64,
    economy: Option<f64>,
    premium_economy: Option<f64>,
    business: Option<f64>,
    first: Option<f64>,
}

impl From<Row> for AircraftCategory {
    fn from(row: Row) -> Self {
        let cabin_multipliers = [
            (Cabin::Economy, row.economy),
            (Cabin::PremiumEconomy, row.premium_economy),
            (Cabin::Business, row.business),
            (Cabin::First, row.first),
        ]
        .into_iter()
        .filter_map(|(cabin, multiplier)| Some((cabin, multiplier?)))
        .collect();
        AircraftCategory {
            // `get` matches on lower case keys
            category: row.category.to_ascii_lowercase(),
            base_factor: row.base_factor,
            cabin_multipliers,
        }
    }
}

// note: base factors are fleet averages in kg CO2 per passenger-km derived
// from ICAO carbon calculator methodology v11
// (https://www.icao.int/environmental-protection/CarbonOffset/)
static FACTORS: &'static [u8] = include_bytes!("./factors.csv");

/// Emission factors per aircraft category, built once from the embedded
/// reference dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionFactorTable(HashMap<String, AircraftCategory>);

impl EmissionFactorTable {
    pub fn new() -> Self {
        let rdr = csv::Reader::from_reader(Cursor::new(FACTORS));
        let categories = rdr
            .into_deserialize()
            .map(|r| {
                let row: Row = r.expect("src/factors.csv to be deserializable");
                let category: AircraftCategory = row.into();
                (category.category.clone(), category)
            })
            .collect();
        Self(categories)
    }

    /// Returns the `(base_factor, cabin_multiplier)` pair for this category
    /// and cabin, matched case-insensitively on the category.
    /// # Error
    /// Errors if the category is not in the table or the category does not
    /// offer the cabin.
    pub fn lookup(&self, category: &str, cabin: Cabin) -> Result<(f64, f64)> {
        let category = self.get(category)?;
        let multiplier = category
            .cabin_multipliers
            .get(&cabin)
            .ok_or_else(|| {
                Error::UnknownCabin(format!(
                    "{cabin} for category {}",
                    category.category
                ))
            })?;
        Ok((category.base_factor, *multiplier))
    }

    /// Returns the [`AircraftCategory`] with this name, matched
    /// case-insensitively.
    /// # Error
    /// Errors if the category is not in the table.
    pub fn get(&self, category: &str) -> Result<&AircraftCategory> {
        self.0
            .get(category.to_ascii_lowercase().as_str())
            .ok_or_else(|| Error::UnknownCategory(category.to_string()))
    }

    /// Iterates over all categories in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &AircraftCategory> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
