//! Cash-flow waterfall simulation engine

use log::debug;

use crate::assumptions::Assumptions;
use crate::error::ParameterError;
use crate::herd::BreedingTimeline;
use crate::params::ParameterSet;

use super::amortization::LoanSchedule;
use super::assets::{project_asset_value, AssetProjection};
use super::ledger::{rollup_yearly, MonthlyLedgerRow, ObligationPayment, SimulationResult};
use super::revenue::RevenueProjector;
use super::state::SimulationState;

/// The month-by-month cash-flow simulator.
///
/// A pure function of the parameter set: identical inputs produce
/// bit-identical ledgers, and nothing is shared between runs.
pub struct SimulationEngine {
    assumptions: Assumptions,
}

impl SimulationEngine {
    /// Create an engine with the given pricing assumptions
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    /// Create an engine with the in-memory default pricing
    pub fn with_default_pricing() -> Self {
        Self::new(Assumptions::default_pricing())
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Run the full simulation for one parameter set.
    pub fn simulate(&self, params: &ParameterSet) -> Result<SimulationResult, ParameterError> {
        params.validate()?;

        let units = params.effective_unit_count() as f64;
        let loan = LoanSchedule::new(
            params.principal,
            params.monthly_rate(),
            params.loan_term_months,
        );
        let timeline = BreedingTimeline::generate(params.horizon_months);
        let projector = RevenueProjector::new(&self.assumptions.revenue);
        let mut state = SimulationState::new(params, &self.assumptions.capital_fee);

        debug!(
            "simulating {} months: principal {:.2} at {:.1}%, {} unit(s), reserve seed {:.2}",
            params.horizon_months,
            params.principal,
            params.annual_rate_pct,
            params.effective_unit_count(),
            state.reserve_balance,
        );

        let mut monthly = Vec::with_capacity(params.horizon_months as usize);

        for month in 1..=params.horizon_months {
            let split = loan.split(month, state.loan_balance);
            state.loan_balance = split.closing_balance;

            let capital_fee_due = self.capital_fee_due(params, &timeline, month) * units;
            let growth_fee_due = self.growth_fee_due(params, &timeline, month) * units;
            let revenue = projector.herd_revenue(timeline.animals(), month) * units;

            // Obligations settle in fixed priority order: EMI first, then
            // the capital fee, then the growth fee. Reordering changes
            // every downstream number.
            let mut remaining_revenue = revenue;
            let mut pool = state.reserve_balance;
            let emi = ObligationPayment::settle(split.emi_due, &mut remaining_revenue, &mut pool);
            let capital_fee =
                ObligationPayment::settle(capital_fee_due, &mut remaining_revenue, &mut pool);
            let growth_fee =
                ObligationPayment::settle(growth_fee_due, &mut remaining_revenue, &mut pool);

            let loss = emi.shortfall + capital_fee.shortfall + growth_fee.shortfall;
            let profit = remaining_revenue;

            // Surplus replenishes the pool
            state.reserve_balance = pool + profit;
            state.cumulative_loss += loss;
            state.cumulative_profit += profit;

            monthly.push(MonthlyLedgerRow {
                month,
                emi_due: split.emi_due,
                interest: split.interest,
                principal_paid: split.principal,
                loan_balance: state.loan_balance,
                revenue,
                capital_fee_due,
                growth_fee_due,
                emi,
                capital_fee,
                growth_fee,
                reserve_balance: state.reserve_balance,
                loss,
                profit,
            });
        }

        let yearly_ledger = rollup_yearly(&monthly);
        let assets = self.project_asset_value(params.horizon_months.div_ceil(12), params.unit_count)?;

        let total_emi_due: f64 = monthly.iter().map(|r| r.emi_due).sum();
        let total_interest: f64 = monthly.iter().map(|r| r.interest).sum();
        let total_revenue: f64 = monthly.iter().map(|r| r.revenue).sum();
        let total_capital_fee: f64 = monthly.iter().map(|r| r.capital_fee_due).sum();
        let total_growth_fee: f64 = monthly.iter().map(|r| r.growth_fee_due).sum();

        Ok(SimulationResult {
            installment: loan.installment(),
            total_interest,
            total_revenue,
            total_capital_fee,
            total_growth_fee,
            total_profit: state.cumulative_profit,
            total_loss: state.cumulative_loss,
            total_net_cash: total_revenue - (total_emi_due + total_capital_fee + total_growth_fee),
            total_asset_value: assets.total_asset_value,
            monthly_ledger: monthly,
            yearly_ledger,
        })
    }

    /// Value the herd at a target year (see [`project_asset_value`])
    pub fn project_asset_value(
        &self,
        target_year: u32,
        unit_count: u32,
    ) -> Result<AssetProjection, ParameterError> {
        project_asset_value(&self.assumptions.valuation, target_year, unit_count)
    }

    /// Capital fee due for one unit's herd at a month
    fn capital_fee_due(&self, params: &ParameterSet, timeline: &BreedingTimeline, month: u32) -> f64 {
        if !params.capital_fee_enabled {
            return 0.0;
        }
        let fee = &self.assumptions.capital_fee;
        let eligible = timeline
            .animals()
            .iter()
            .filter_map(|a| a.age_at(month))
            .filter(|&age| fee.applies_at(age))
            .count();
        eligible as f64 * fee.monthly_per_animal()
    }

    /// Growth fee due for one unit's herd at a month; seeds never pay it
    fn growth_fee_due(&self, params: &ParameterSet, timeline: &BreedingTimeline, month: u32) -> f64 {
        if !params.growth_fee_enabled {
            return 0.0;
        }
        timeline
            .animals()
            .iter()
            .filter(|a| !a.is_seed())
            .filter_map(|a| a.age_at(month))
            .map(|age| self.assumptions.growth_fee.monthly_fee(age))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_params() -> ParameterSet {
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
    fn test_reference_scenario() {
        let engine = SimulationEngine::with_default_pricing();
        let result = engine.simulate(&test_params()).unwrap();

        assert_eq!(result.monthly_ledger.len(), 60);
        assert_eq!(result.yearly_ledger.len(), 5);
        // Quoted product figure; the closed form gives 10157.37
        assert!((result.installment - 10_158.79).abs() < 2.0);
        // The loan closes exactly at the end of the term
        assert_eq!(result.monthly_ledger[59].loan_balance, 0.0);
    }

    #[test]
    fn test_invalid_params_rejected_before_any_work() {
        let engine = SimulationEngine::with_default_pricing();
        let mut params = test_params();
        params.loan_term_months = 0;

        assert_eq!(
            engine.simulate(&params),
            Err(ParameterError::NonPositiveLoanTerm)
        );
    }

    #[test]
    fn test_waterfall_conserves_currency() {
        let engine = SimulationEngine::with_default_pricing();
        let result = engine.simulate(&test_params()).unwrap();

        let mut prior_reserve = 46_000.0; // seeded pool for this scenario
        for row in &result.monthly_ledger {
            for payment in [&row.emi, &row.capital_fee, &row.growth_fee] {
                assert!(
                    (payment.due - (payment.from_revenue + payment.from_reserve + payment.shortfall))
                        .abs()
                        < 1e-9,
                    "month {}: obligation split does not balance",
                    row.month
                );
            }

            let shortfalls =
                row.emi.shortfall + row.capital_fee.shortfall + row.growth_fee.shortfall;
            assert!((row.loss - shortfalls).abs() < 1e-9);

            let paid_from_revenue =
                row.emi.from_revenue + row.capital_fee.from_revenue + row.growth_fee.from_revenue;
            let paid_from_reserve =
                row.emi.from_reserve + row.capital_fee.from_reserve + row.growth_fee.from_reserve;

            // All revenue is either spent on obligations or reinvested
            assert!((row.revenue - (paid_from_revenue + row.profit)).abs() < 1e-9);
            // Pool moves only by withdrawals and reinvested surplus
            assert!(
                (row.reserve_balance - (prior_reserve - paid_from_reserve + row.profit)).abs()
                    < 1e-9,
                "month {}: reserve pool does not reconcile",
                row.month
            );

            prior_reserve = row.reserve_balance;
        }
    }

    #[test]
    fn test_reserve_never_negative() {
        let engine = SimulationEngine::with_default_pricing();

        for principal in [250_000.0, 330_000.0, 400_000.0, 500_000.0] {
            let mut params = test_params();
            params.principal = principal;
            let result = engine.simulate(&params).unwrap();

            assert!(result
                .monthly_ledger
                .iter()
                .all(|row| row.reserve_balance >= 0.0));
        }
    }

    #[test]
    fn test_emi_has_first_claim_on_revenue() {
        let engine = SimulationEngine::with_default_pricing();
        let result = engine.simulate(&test_params()).unwrap();

        for row in &result.monthly_ledger {
            // The growth fee can only draw on the pool or shortfall once
            // the EMI has exhausted the revenue
            if row.emi.shortfall > 0.0 {
                assert_eq!(row.capital_fee.from_revenue, 0.0);
                assert_eq!(row.growth_fee.from_revenue, 0.0);
            }
        }
    }

    #[test]
    fn test_determinism() {
        let engine = SimulationEngine::with_default_pricing();
        let params = test_params();

        let a = engine.simulate(&params).unwrap();
        let b = engine.simulate(&params).unwrap();

        assert_eq!(a, b);
        // Byte-identical when serialized
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_unit_count_scales_flows() {
        let engine = SimulationEngine::with_default_pricing();
        let mut params = test_params();
        params.principal = 800_000.0;
        params.unit_count = 2;
        let two = engine.simulate(&params).unwrap();

        let one = engine.simulate(&test_params()).unwrap();

        assert!((two.total_revenue - 2.0 * one.total_revenue).abs() < 1e-6);
        assert!((two.total_growth_fee - 2.0 * one.total_growth_fee).abs() < 1e-6);
    }

    #[test]
    fn test_disabled_fees_are_never_due() {
        let engine = SimulationEngine::with_default_pricing();
        let mut params = test_params();
        params.capital_fee_enabled = false;
        params.growth_fee_enabled = false;
        let result = engine.simulate(&params).unwrap();

        assert_eq!(result.total_capital_fee, 0.0);
        assert_eq!(result.total_growth_fee, 0.0);
    }

    #[test]
    fn test_horizon_beyond_term_has_no_emi() {
        let engine = SimulationEngine::with_default_pricing();
        let mut params = test_params();
        params.horizon_months = 72;
        let result = engine.simulate(&params).unwrap();

        assert_eq!(result.monthly_ledger.len(), 72);
        for row in &result.monthly_ledger[60..] {
            assert_eq!(row.emi_due, 0.0);
            assert_eq!(row.loan_balance, 0.0);
        }
    }
}
