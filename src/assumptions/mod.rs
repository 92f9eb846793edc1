//! Pricing assumptions: valuation table, fee schedules, and the revenue cycle

mod fees;
mod revenue;
mod valuation;
pub mod loader;

pub use fees::{CapitalFee, GrowthFeeSchedule};
pub use loader::LoadedAssumptions;
pub use revenue::RevenueCycle;
pub use valuation::ValuationTable;

use std::path::Path;

/// Cost of one purchased unit (two animals), in currency units.
///
/// The ACF schedules accumulate to exactly this amount per unit.
pub const BASE_UNIT_COST: f64 = 330_000.0;

/// Container for all pricing assumptions used by the engine
#[derive(Debug, Clone)]
pub struct Assumptions {
    pub valuation: ValuationTable,
    pub capital_fee: CapitalFee,
    pub growth_fee: GrowthFeeSchedule,
    pub revenue: RevenueCycle,
}

impl Assumptions {
    /// In-memory defaults matching the published rate card
    pub fn default_pricing() -> Self {
        Self {
            valuation: ValuationTable::default_bands(),
            capital_fee: CapitalFee::default(),
            growth_fee: GrowthFeeSchedule::default_tiers(),
            revenue: RevenueCycle::default(),
        }
    }

    /// Load table-driven assumptions from CSV files in the default location
    pub fn from_csv() -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load table-driven assumptions from CSV files in a specific directory.
    ///
    /// Only the valuation bands and growth-fee tiers are table-driven; the
    /// capital fee and revenue cycle are contractual constants and stay at
    /// their defaults.
    pub fn from_csv_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let loaded = LoadedAssumptions::load_from(path)?;

        Ok(Self {
            valuation: ValuationTable::from_loaded(&loaded.valuation_bands),
            capital_fee: CapitalFee::default(),
            growth_fee: GrowthFeeSchedule::from_loaded(&loaded.growth_fee_tiers),
            revenue: RevenueCycle::default(),
        })
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_pricing()
    }
}
