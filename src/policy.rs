/// Upper bound of a short haul flight in km
/// source: ICAO carbon calculator methodology v11
static SHORT_HAUL_MAX_KM: f64 = 1500.0;
/// Lower bound of a long haul flight in km
static LONG_HAUL_MIN_KM: f64 = 4000.0;

/// A haul band: distances strictly below `upper_km` that did not match an
/// earlier band receive `adjustment`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub upper_km: f64,
    pub adjustment: f64,
}

/// Distance-dependent adjustment of the per-km factor. Short flights spend
/// a larger share of the flight in takeoff and climb and thus burn more
/// fuel per km; very long flights cruise most of the time.
#[derive(Debug, Clone, PartialEq)]
pub struct HaulBands {
    /// bands in ascending order of `upper_km`
    bands: Vec<Band>,
    /// adjustment for distances at or beyond the last band
    beyond: f64,
}

impl HaulBands {
    pub fn new(bands: Vec<Band>, beyond: f64) -> Self {
        Self { bands, beyond }
    }

    /// Returns the adjustment for this distance. The first band whose
    /// `upper_km` strictly exceeds the distance wins.
    pub fn adjustment(&self, distance_km: f64) -> f64 {
        self.bands
            .iter()
            .find(|band| distance_km < band.upper_km)
            .map(|band| band.adjustment)
            .unwrap_or(self.beyond)
    }
}

impl Default for HaulBands {
    fn default() -> Self {
        Self::new(
            vec![
                Band {
                    upper_km: SHORT_HAUL_MAX_KM,
                    adjustment: 1.10,
                },
                Band {
                    upper_km: LONG_HAUL_MIN_KM,
                    adjustment: 1.00,
                },
            ],
            0.95,
        )
    }
}

/// Options of an estimation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    pub bands: HaulBands,
    /// when set, non-CO2 effects at altitude are accounted for by
    /// multiplying emissions with a radiative forcing index
    pub radiative_forcing: bool,
    /// fraction of sustainable aviation fuel in the tank; values outside
    /// `0.0..=1.0` are clamped into it before use
    pub saf_blend: f64,
    /// routes shorter than this have a rail alternative worth recommending
    pub train_max_km: f64,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            bands: HaulBands::default(),
            radiative_forcing: false,
            saf_blend: 0.0,
            train_max_km: 800.0,
        }
    }
}
