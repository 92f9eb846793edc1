//! Capital reserve fee (CPF) and calf growth fee (CGF) schedules

use crate::herd::ANIMALS_PER_UNIT;

/// Fixed yearly per-animal capital reserve fee (CPF).
///
/// Charged monthly at one twelfth of the yearly amount, for every animal
/// strictly older than the eligibility threshold.
#[derive(Debug, Clone)]
pub struct CapitalFee {
    /// Yearly fee per animal
    pub yearly_per_animal: f64,

    /// Age in months an animal must exceed before the fee applies
    pub eligible_age_months: u32,
}

impl Default for CapitalFee {
    fn default() -> Self {
        Self {
            yearly_per_animal: 12_000.0,
            eligible_age_months: 12,
        }
    }
}

impl CapitalFee {
    /// Monthly fee per eligible animal
    pub fn monthly_per_animal(&self) -> f64 {
        self.yearly_per_animal / 12.0
    }

    /// Yearly fee for one full unit (both animals)
    pub fn yearly_per_unit(&self) -> f64 {
        self.yearly_per_animal * ANIMALS_PER_UNIT as f64
    }

    /// Whether the fee applies to an animal of this age
    pub fn applies_at(&self, age_months: u32) -> bool {
        age_months > self.eligible_age_months
    }
}

/// Tiered monthly growth fee (CGF) charged while a calf is growing.
///
/// Applies to bred animals only; purchased animals enter the herd mature.
#[derive(Debug, Clone)]
pub struct GrowthFeeSchedule {
    /// (min_age, max_age, monthly fee) tiers, min/max inclusive.
    /// Ages outside every tier carry no fee.
    tiers: Vec<(u32, u32, f64)>,
}

impl GrowthFeeSchedule {
    /// Create from loaded CSV data
    pub fn from_loaded(tiers: &[(u32, u32, f64)]) -> Self {
        Self {
            tiers: tiers.to_vec(),
        }
    }

    /// Default growth-fee tiers; fees end at maturity
    pub fn default_tiers() -> Self {
        Self {
            tiers: vec![
                (0, 6, 1_000.0),
                (7, 12, 1_500.0),
                (13, 24, 2_000.0),
                (25, 32, 2_500.0),
            ],
        }
    }

    /// Monthly fee for a calf of the given age, 0 outside every tier
    pub fn monthly_fee(&self, calf_age_months: u32) -> f64 {
        for &(min_age, max_age, fee) in &self.tiers {
            if calf_age_months >= min_age && calf_age_months <= max_age {
                return fee;
            }
        }
        0.0
    }
}
