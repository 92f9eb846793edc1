//! Scenario runner facade
//!
//! Pre-loads pricing assumptions once, then exposes the whole engine
//! surface (simulation, asset valuation, rate search, ACF schedules) for
//! presentation callers and what-if batches.

use std::path::Path;

use crate::acf::{self, AcfScheduleRow, AcfTenure};
use crate::assumptions::Assumptions;
use crate::error::ParameterError;
use crate::params::ParameterSet;
use crate::projection::{
    optimize_rate, AssetProjection, SimulationEngine, SimulationResult,
};

/// Pre-loaded runner for the engine's function-call contract
///
/// # Example
/// ```
/// use herdcash::{ParameterSet, ScenarioRunner};
///
/// let runner = ScenarioRunner::new();
/// let params = ParameterSet {
///     principal: 400_000.0,
///     annual_rate_pct: 18.0,
///     loan_term_months: 60,
///     horizon_months: 60,
///     unit_count: 1,
///     capital_fee_enabled: true,
///     growth_fee_enabled: true,
/// };
/// let result = runner.simulate(&params).unwrap();
/// assert_eq!(result.monthly_ledger.len(), 60);
/// ```
pub struct ScenarioRunner {
    engine: SimulationEngine,
}

impl ScenarioRunner {
    /// Create a runner with default in-memory pricing
    pub fn new() -> Self {
        Self {
            engine: SimulationEngine::with_default_pricing(),
        }
    }

    /// Create a runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            engine: SimulationEngine::new(assumptions),
        }
    }

    /// Create a runner loading table-driven assumptions from a directory
    pub fn from_csv_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self::with_assumptions(Assumptions::from_csv_path(path)?))
    }

    /// Run one full simulation
    pub fn simulate(&self, params: &ParameterSet) -> Result<SimulationResult, ParameterError> {
        self.engine.simulate(params)
    }

    /// Run several independent what-if scenarios
    pub fn run_scenarios(
        &self,
        scenarios: &[ParameterSet],
    ) -> Result<Vec<SimulationResult>, ParameterError> {
        scenarios.iter().map(|p| self.engine.simulate(p)).collect()
    }

    /// Value the herd at a target year
    pub fn project_asset_value(
        &self,
        target_year: u32,
        unit_count: u32,
    ) -> Result<AssetProjection, ParameterError> {
        self.engine.project_asset_value(target_year, unit_count)
    }

    /// Search for the highest loss-free rate (one decimal place)
    pub fn optimize_rate(&self, params: &ParameterSet) -> Result<f64, ParameterError> {
        optimize_rate(&self.engine, params)
    }

    /// Build an ACF schedule
    pub fn acf_schedule(&self, unit_count: u32, tenure: AcfTenure) -> Vec<AcfScheduleRow> {
        acf::compute_acf_schedule(unit_count, tenure)
    }

    /// CPF-equivalent benefit granted with an ACF tenure
    pub fn cpf_equivalent_benefit(&self, unit_count: u32, tenure: AcfTenure) -> f64 {
        acf::cpf_equivalent_benefit(unit_count, tenure, &self.engine.assumptions().capital_fee)
    }

    /// Get reference to the loaded assumptions for inspection
    pub fn assumptions(&self) -> &Assumptions {
        self.engine.assumptions()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ParameterSet {
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
    fn test_run_scenarios_preserves_order() {
        let runner = ScenarioRunner::new();

        let scenarios: Vec<ParameterSet> = [12.0, 15.0, 18.0]
            .iter()
            .map(|&rate| params().with_rate(rate))
            .collect();

        let results = runner.run_scenarios(&scenarios).unwrap();
        assert_eq!(results.len(), 3);

        // A higher rate means a higher installment
        assert!(results[2].installment > results[1].installment);
        assert!(results[1].installment > results[0].installment);
    }

    #[test]
    fn test_one_invalid_scenario_fails_the_batch() {
        let runner = ScenarioRunner::new();
        let mut bad = params();
        bad.horizon_months = 10;

        let result = runner.run_scenarios(&[params(), bad]);
        assert!(result.is_err());
    }

    #[test]
    fn test_facade_covers_every_operation() {
        let runner = ScenarioRunner::new();

        assert!(runner.simulate(&params()).is_ok());
        assert!(runner.project_asset_value(5, 1).is_ok());
        assert!(runner.optimize_rate(&params()).is_ok());
        assert_eq!(runner.acf_schedule(1, AcfTenure::Months11).len(), 11);
        assert_eq!(runner.cpf_equivalent_benefit(1, AcfTenure::Months11), 24_000.0);
    }
}
