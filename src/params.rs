//! Simulation input parameters

use serde::{Deserialize, Serialize};

use crate::error::ParameterError;

/// Immutable input for a single simulation run.
///
/// Every derived structure (herd timeline, ledgers, totals) is recomputed
/// from scratch from one of these. A parameter change means a fresh run;
/// nothing is carried over between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Financed principal amount
    pub principal: f64,

    /// Annual interest rate in percent (e.g. 18.0)
    pub annual_rate_pct: f64,

    /// Loan term in months
    pub loan_term_months: u32,

    /// Simulation horizon in months; must cover the loan term
    pub horizon_months: u32,

    /// Number of purchased units (0 is computed as 1)
    pub unit_count: u32,

    /// Whether the yearly per-animal capital reserve fee (CPF) is charged
    pub capital_fee_enabled: bool,

    /// Whether the tiered monthly calf growth fee (CGF) is charged
    pub growth_fee_enabled: bool,
}

impl ParameterSet {
    /// Monthly interest rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_pct / 12.0 / 100.0
    }

    /// Unit count floored to 1.
    ///
    /// A zero unit count is a deliberate leniency for callers wiring up
    /// forms, not an error; everything else invalid is rejected by
    /// [`validate`](Self::validate).
    pub fn effective_unit_count(&self) -> u32 {
        self.unit_count.max(1)
    }

    /// Copy of this parameter set with a different annual rate
    pub fn with_rate(&self, annual_rate_pct: f64) -> Self {
        Self {
            annual_rate_pct,
            ..self.clone()
        }
    }

    /// Reject invalid inputs before any simulation work begins.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.loan_term_months == 0 {
            return Err(ParameterError::NonPositiveLoanTerm);
        }
        if self.horizon_months == 0 {
            return Err(ParameterError::NonPositiveHorizon);
        }
        if self.horizon_months < self.loan_term_months {
            return Err(ParameterError::HorizonShorterThanLoanTerm {
                horizon_months: self.horizon_months,
                loan_term_months: self.loan_term_months,
            });
        }
        if self.principal < 0.0 {
            return Err(ParameterError::NegativePrincipal(self.principal));
        }
        if !(0.0..=100.0).contains(&self.annual_rate_pct) {
            return Err(ParameterError::RateOutOfBounds(self.annual_rate_pct));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_params() -> ParameterSet {
        ParameterSet {
            principal: 400_000.0,
            annual_rate_pct: 18.0,
            loan_term_months: 60,
            horizon_months: 60,
            unit_count: 1,
            capital_fee_enabled: true,
            growth_fee_enabled: true,
        }
    }

    #[test]
    fn test_valid_params_pass() {
        assert!(valid_params().validate().is_ok());
    }

    #[test]
    fn test_zero_term_rejected() {
        let mut params = valid_params();
        params.loan_term_months = 0;
        assert_eq!(params.validate(), Err(ParameterError::NonPositiveLoanTerm));
    }

    #[test]
    fn test_horizon_shorter_than_term_rejected() {
        let mut params = valid_params();
        params.horizon_months = 48;
        assert_eq!(
            params.validate(),
            Err(ParameterError::HorizonShorterThanLoanTerm {
                horizon_months: 48,
                loan_term_months: 60,
            })
        );
    }

    #[test]
    fn test_negative_principal_rejected() {
        let mut params = valid_params();
        params.principal = -1.0;
        assert!(matches!(
            params.validate(),
            Err(ParameterError::NegativePrincipal(_))
        ));
    }

    #[test]
    fn test_rate_out_of_bounds_rejected() {
        let mut params = valid_params();
        params.annual_rate_pct = 120.0;
        assert!(matches!(
            params.validate(),
            Err(ParameterError::RateOutOfBounds(_))
        ));
    }

    #[test]
    fn test_zero_units_floored_to_one() {
        let mut params = valid_params();
        params.unit_count = 0;
        assert!(params.validate().is_ok());
        assert_eq!(params.effective_unit_count(), 1);
    }

    #[test]
    fn test_monthly_rate() {
        let params = valid_params();
        assert!((params.monthly_rate() - 0.015).abs() < 1e-12);
    }
}
