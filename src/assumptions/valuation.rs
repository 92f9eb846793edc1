//! Market value lookup by animal age

/// Static lookup mapping animal age (months) to market value.
///
/// Ages are bucketed into inclusive bands; the last band is open-ended.
/// There is exactly one canonical table shared by every valuation path.
#[derive(Debug, Clone)]
pub struct ValuationTable {
    /// (min_age, max_age, value) bands, min/max inclusive
    bands: Vec<(u32, u32, f64)>,
}

impl ValuationTable {
    /// Create from loaded CSV data
    pub fn from_loaded(bands: &[(u32, u32, f64)]) -> Self {
        Self {
            bands: bands.to_vec(),
        }
    }

    /// Default age bands from the rate card
    pub fn default_bands() -> Self {
        Self {
            bands: vec![
                (0, 12, 10_000.0),
                (13, 18, 25_000.0),
                (19, 24, 40_000.0),
                (25, 34, 100_000.0),
                (35, 40, 150_000.0),
                (41, u32::MAX, 175_000.0),
            ],
        }
    }

    /// Market value of an animal at a given age.
    ///
    /// `first_year` applies the convention that animals up to 12 months old
    /// are carried at zero when the valuation target is year 1.
    pub fn value_at(&self, age_months: u32, first_year: bool) -> f64 {
        if first_year && age_months <= 12 {
            return 0.0;
        }
        for &(min_age, max_age, value) in &self.bands {
            if age_months >= min_age && age_months <= max_age {
                return value;
            }
        }
        // Beyond every band: hold at the top band's value
        self.bands.last().map(|b| b.2).unwrap_or(0.0)
    }
}
