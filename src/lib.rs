//! Herdcash - investment simulation and cash-flow engine for livestock
//! financing products
//!
//! This library provides:
//! - Fixed-installment (EMI) loan amortization
//! - Multi-generation breeding timeline projection
//! - Monthly revenue projection over the herd productivity cycle
//! - A prioritized payment waterfall backed by a capital reserve pool
//! - Herd market valuation at future horizons
//! - Highest-sustainable-rate search and ACF crowd-funding schedules
//!
//! The engine is a pure function of a [`ParameterSet`]: synchronous,
//! single-threaded, and deterministic. Presentation, persistence, and
//! transport are all external callers' concerns.

pub mod acf;
pub mod assumptions;
pub mod error;
pub mod herd;
pub mod params;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use acf::{AcfScheduleRow, AcfTenure};
pub use assumptions::{Assumptions, ValuationTable};
pub use error::ParameterError;
pub use params::ParameterSet;
pub use projection::{
    optimize_rate, AssetProjection, MonthlyLedgerRow, SimulationEngine, SimulationResult,
    YearlyLedgerRow,
};
pub use scenario::ScenarioRunner;
