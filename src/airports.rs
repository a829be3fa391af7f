use std::{collections::HashMap, io::Cursor, sync::Arc};

use crate::{Error, Result};

/// An airport of the reference dataset
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Airport {
    /// IATA code (e.g. `DEL`), upper case
    pub code: Arc<str>,
    pub name: String,
    pub country: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

// note: coordinates were extracted from the ourairports dataset
// (https://ourairports.com/data/), large and medium airports only
static AIRPORTS: &'static [u8] = include_bytes!("./airports.csv");

/// Read-only directory of [`Airport`]s keyed by upper-cased IATA code,
/// built once from the embedded reference dataset. Lookups take `&self`
/// and nothing mutates after construction, so one directory can be shared
/// across threads without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct AirportDirectory(HashMap<Arc<str>, Airport>);

impl AirportDirectory {
    pub fn new() -> Self {
        let rdr = csv::Reader::from_reader(Cursor::new(AIRPORTS));
        let airports: HashMap<Arc<str>, Airport> = rdr
            .into_deserialize()
            .map(|r| {
                let mut airport: Airport =
                    r.expect("src/airports.csv to be deserializable");
                airport.code = airport.code.to_ascii_uppercase().into();
                (airport.code.clone(), airport)
            })
            .collect();
        log::debug!("airport directory loaded: {} airports", airports.len());
        Self(airports)
    }

    /// Returns the [`Airport`] with this IATA code, matched
    /// case-insensitively.
    /// # Error
    /// Errors if the code is not in the directory.
    pub fn lookup(&self, code: &str) -> Result<&Airport> {
        self.0
            .get(code.to_ascii_uppercase().as_str())
            .ok_or_else(|| Error::UnknownAirport(code.to_string()))
    }

    /// Iterates over all airports in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Airport> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let directory = AirportDirectory::new();
        let delhi = directory.lookup("DEL").unwrap();
        assert_eq!(directory.lookup("del").unwrap(), delhi);
        assert_eq!(directory.lookup("dEl").unwrap(), delhi);
        assert_eq!(delhi.latitude_deg, 28.5562);
        assert_eq!(delhi.longitude_deg, 77.1000);
    }

    #[test]
    fn unknown_code_errors() {
        let directory = AirportDirectory::new();
        assert_eq!(
            directory.lookup("XXX"),
            Err(Error::UnknownAirport("XXX".to_string()))
        );
    }

    #[test]
    fn has_all_continents() {
        let directory = AirportDirectory::new();
        assert!(directory.len() > 50);
        for code in ["LHR", "JFK", "GRU", "SYD", "NBO", "SIN"] {
            assert!(directory.lookup(code).is_ok(), "{code}");
        }
    }

    #[test]
    fn coordinates_are_in_range() {
        for airport in AirportDirectory::new().iter() {
            assert!((-90.0..=90.0).contains(&airport.latitude_deg));
            assert!((-180.0..=180.0).contains(&airport.longitude_deg));
        }
    }
}
