//! Input rejection errors
//!
//! The engine has no I/O, so every failure is a programming or input error
//! and is surfaced synchronously before any simulation work begins.

use thiserror::Error;

/// A parameter set was rejected before computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("loan term must be at least 1 month")]
    NonPositiveLoanTerm,

    #[error("simulation horizon must be at least 1 month")]
    NonPositiveHorizon,

    #[error("simulation horizon ({horizon_months} months) is shorter than the loan term ({loan_term_months} months)")]
    HorizonShorterThanLoanTerm {
        horizon_months: u32,
        loan_term_months: u32,
    },

    #[error("principal must be non-negative, got {0}")]
    NegativePrincipal(f64),

    #[error("annual rate {0}% is outside the supported range [0, 100]")]
    RateOutOfBounds(f64),

    #[error("asset valuation target year must be at least 1")]
    NonPositiveTargetYear,

    #[error("unsupported ACF tenure of {0} months (expected 11 or 30)")]
    InvalidAcfTenure(u32),
}
