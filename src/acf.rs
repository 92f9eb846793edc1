//! ACF fixed-installment crowd-funding schedule
//!
//! Independent of the loan and the herd: a pure linear accumulation of a
//! tenure-dependent per-unit installment.

use serde::{Deserialize, Serialize};

use crate::assumptions::CapitalFee;
use crate::error::ParameterError;

/// Supported ACF tenures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcfTenure {
    Months11,
    Months30,
}

impl AcfTenure {
    /// Parse a tenure from its length in months
    pub fn from_months(months: u32) -> Result<Self, ParameterError> {
        match months {
            11 => Ok(Self::Months11),
            30 => Ok(Self::Months30),
            other => Err(ParameterError::InvalidAcfTenure(other)),
        }
    }

    pub fn months(&self) -> u32 {
        match self {
            Self::Months11 => 11,
            Self::Months30 => 30,
        }
    }

    /// Fixed per-unit monthly installment. Both tenures accumulate to the
    /// full unit cost of 330 000.
    pub fn monthly_installment_per_unit(&self) -> f64 {
        match self {
            Self::Months11 => 30_000.0,
            Self::Months30 => 11_000.0,
        }
    }

    /// Years of per-unit capital fee granted as the CPF-equivalent benefit
    pub fn cpf_benefit_years(&self) -> u32 {
        match self {
            Self::Months11 => 1,
            Self::Months30 => 2,
        }
    }
}

/// One month of an ACF schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcfScheduleRow {
    /// 1-based month index
    pub month: u32,
    pub installment: f64,
    pub cumulative_installment: f64,
}

/// Build the full schedule for a unit count and tenure
pub fn compute_acf_schedule(unit_count: u32, tenure: AcfTenure) -> Vec<AcfScheduleRow> {
    let units = unit_count.max(1) as f64;
    let installment = tenure.monthly_installment_per_unit() * units;

    (1..=tenure.months())
        .map(|month| AcfScheduleRow {
            month,
            installment,
            cumulative_installment: installment * month as f64,
        })
        .collect()
}

/// CPF-equivalent benefit amount for the tenure
pub fn cpf_equivalent_benefit(unit_count: u32, tenure: AcfTenure, capital_fee: &CapitalFee) -> f64 {
    unit_count.max(1) as f64 * capital_fee.yearly_per_unit() * tenure.cpf_benefit_years() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::BASE_UNIT_COST;

    #[test]
    fn test_eleven_month_schedule() {
        let schedule = compute_acf_schedule(1, AcfTenure::Months11);

        assert_eq!(schedule.len(), 11);
        assert!(schedule.iter().all(|row| row.installment == 30_000.0));
        assert_eq!(schedule[10].cumulative_installment, 330_000.0);
    }

    #[test]
    fn test_both_tenures_accumulate_to_unit_cost() {
        for tenure in [AcfTenure::Months11, AcfTenure::Months30] {
            let schedule = compute_acf_schedule(1, tenure);
            let last = schedule.last().unwrap();
            assert_eq!(last.cumulative_installment, BASE_UNIT_COST);
        }
    }

    #[test]
    fn test_installments_scale_with_units() {
        let schedule = compute_acf_schedule(3, AcfTenure::Months30);

        assert_eq!(schedule[0].installment, 33_000.0);
        assert_eq!(schedule[29].cumulative_installment, 990_000.0);
    }

    #[test]
    fn test_zero_units_treated_as_one() {
        assert_eq!(
            compute_acf_schedule(0, AcfTenure::Months11),
            compute_acf_schedule(1, AcfTenure::Months11)
        );
    }

    #[test]
    fn test_tenure_parsing() {
        assert_eq!(AcfTenure::from_months(11), Ok(AcfTenure::Months11));
        assert_eq!(AcfTenure::from_months(30), Ok(AcfTenure::Months30));
        assert_eq!(
            AcfTenure::from_months(12),
            Err(ParameterError::InvalidAcfTenure(12))
        );
    }

    #[test]
    fn test_cpf_benefit_doubles_for_long_tenure() {
        let fee = CapitalFee::default();

        assert_eq!(cpf_equivalent_benefit(1, AcfTenure::Months11, &fee), 24_000.0);
        assert_eq!(cpf_equivalent_benefit(1, AcfTenure::Months30, &fee), 48_000.0);
        assert_eq!(cpf_equivalent_benefit(2, AcfTenure::Months30, &fee), 96_000.0);
    }
}
