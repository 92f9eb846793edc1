//! Month-to-month waterfall state

use crate::assumptions::{CapitalFee, BASE_UNIT_COST};
use crate::params::ParameterSet;

/// Mutable state carried across the waterfall months.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Outstanding loan balance at the start of the current month
    pub loan_balance: f64,

    /// Capital reserve pool; spent on shortfalls, replenished by surplus.
    /// Never negative.
    pub reserve_balance: f64,

    pub cumulative_loss: f64,
    pub cumulative_profit: f64,
}

impl SimulationState {
    /// Initial state at month 0.
    ///
    /// The reserve pool is seeded once with the over-financed capital:
    /// whatever the principal exceeds the required capital by, where the
    /// required capital is the unit cost plus (when the capital fee is
    /// enabled) one year of capital fee per unit.
    pub fn new(params: &ParameterSet, capital_fee: &CapitalFee) -> Self {
        let units = params.effective_unit_count() as f64;
        let fee_reserve = if params.capital_fee_enabled {
            capital_fee.yearly_per_unit()
        } else {
            0.0
        };
        let required_capital = units * (BASE_UNIT_COST + fee_reserve);

        Self {
            loan_balance: params.principal,
            reserve_balance: (params.principal - required_capital).max(0.0),
            cumulative_loss: 0.0,
            cumulative_profit: 0.0,
        }
    }
}
