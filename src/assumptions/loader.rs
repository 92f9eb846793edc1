//! CSV-based assumption loader
//!
//! Loads the table-driven assumptions (valuation bands, growth-fee tiers)
//! from CSV files so pricing can be revised without a rebuild.

use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

/// Load valuation bands from CSV
/// Columns: min_age_months, max_age_months, value
pub fn load_valuation_bands(path: &Path) -> Result<Vec<(u32, u32, f64)>, Box<dyn Error>> {
    let file = File::open(path.join("valuation_bands.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut bands = Vec::new();

    for result in reader.records() {
        let record = result?;
        let min_age: u32 = record[0].parse()?;
        let max_age: u32 = record[1].parse()?;
        let value: f64 = record[2].parse()?;
        bands.push((min_age, max_age, value));
    }

    Ok(bands)
}

/// Load growth-fee tiers from CSV
/// Columns: min_age_months, max_age_months, monthly_fee
pub fn load_growth_fee_tiers(path: &Path) -> Result<Vec<(u32, u32, f64)>, Box<dyn Error>> {
    let file = File::open(path.join("growth_fee_tiers.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut tiers = Vec::new();

    for result in reader.records() {
        let record = result?;
        let min_age: u32 = record[0].parse()?;
        let max_age: u32 = record[1].parse()?;
        let fee: f64 = record[2].parse()?;
        tiers.push((min_age, max_age, fee));
    }

    Ok(tiers)
}

/// All table-driven assumptions loaded from a directory
pub struct LoadedAssumptions {
    pub valuation_bands: Vec<(u32, u32, f64)>,
    pub growth_fee_tiers: Vec<(u32, u32, f64)>,
}

impl LoadedAssumptions {
    /// Load all assumptions from the default path
    pub fn load_default() -> Result<Self, Box<dyn Error>> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load all assumptions from a specific path
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            valuation_bands: load_valuation_bands(path)?,
            growth_fee_tiers: load_growth_fee_tiers(path)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::{GrowthFeeSchedule, ValuationTable};

    #[test]
    fn test_tables_build_from_loaded_rows() {
        let loaded = LoadedAssumptions {
            valuation_bands: vec![(0, 12, 5_000.0), (13, u32::MAX, 50_000.0)],
            growth_fee_tiers: vec![(0, 12, 750.0)],
        };

        let valuation = ValuationTable::from_loaded(&loaded.valuation_bands);
        assert_eq!(valuation.value_at(6, false), 5_000.0);
        assert_eq!(valuation.value_at(40, false), 50_000.0);

        let growth = GrowthFeeSchedule::from_loaded(&loaded.growth_fee_tiers);
        assert_eq!(growth.monthly_fee(6), 750.0);
        assert_eq!(growth.monthly_fee(13), 0.0);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let result = LoadedAssumptions::load_from(Path::new("does/not/exist"));
        assert!(result.is_err());
    }
}
