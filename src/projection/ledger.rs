//! Ledger output rows, roll-ups, and the simulation result

use serde::{Deserialize, Serialize};

/// How a single obligation was funded in one month.
///
/// Invariant: `due == from_revenue + from_reserve + shortfall`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ObligationPayment {
    pub due: f64,
    pub from_revenue: f64,
    pub from_reserve: f64,
    pub shortfall: f64,
}

impl ObligationPayment {
    /// Settle `due` from the remaining revenue first, then the reserve pool.
    /// Decrements the passed balances in place; whatever could not be paid
    /// is the shortfall.
    pub fn settle(due: f64, revenue: &mut f64, reserve: &mut f64) -> Self {
        let from_revenue = due.min(*revenue);
        *revenue -= from_revenue;

        let from_reserve = (due - from_revenue).min(*reserve);
        *reserve -= from_reserve;

        Self {
            due,
            from_revenue,
            from_reserve,
            shortfall: due - from_revenue - from_reserve,
        }
    }
}

/// One month of the cash-flow waterfall. Produced exactly once per month,
/// in increasing month order, and never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyLedgerRow {
    /// 1-based month index
    pub month: u32,

    // Loan
    pub emi_due: f64,
    pub interest: f64,
    pub principal_paid: f64,
    pub loan_balance: f64,

    // Inflows and fee obligations
    pub revenue: f64,
    pub capital_fee_due: f64,
    pub growth_fee_due: f64,

    // Waterfall splits, in priority order
    pub emi: ObligationPayment,
    pub capital_fee: ObligationPayment,
    pub growth_fee: ObligationPayment,

    /// Reserve pool balance at end of month; never negative
    pub reserve_balance: f64,

    /// Total unmet obligation this month
    pub loss: f64,

    /// Surplus revenue after all obligations, reinvested into the pool
    pub profit: f64,
}

/// Roll-up of up to 12 consecutive monthly rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyLedgerRow {
    /// 1-based year index
    pub year: u32,

    // Flow columns are sums over the year's months
    pub emi_due: f64,
    pub interest: f64,
    pub principal_paid: f64,
    pub revenue: f64,
    pub capital_fee_due: f64,
    pub growth_fee_due: f64,
    pub loss: f64,
    pub profit: f64,

    // Balance columns are the year's closing values
    pub loan_balance: f64,
    pub reserve_balance: f64,
}

/// Roll monthly rows into yearly rows; the final year may be partial.
pub fn rollup_yearly(monthly: &[MonthlyLedgerRow]) -> Vec<YearlyLedgerRow> {
    let mut yearly = Vec::with_capacity(monthly.len().div_ceil(12));

    for (i, chunk) in monthly.chunks(12).enumerate() {
        let Some(last) = chunk.last() else { continue };

        yearly.push(YearlyLedgerRow {
            year: i as u32 + 1,
            emi_due: chunk.iter().map(|r| r.emi_due).sum(),
            interest: chunk.iter().map(|r| r.interest).sum(),
            principal_paid: chunk.iter().map(|r| r.principal_paid).sum(),
            revenue: chunk.iter().map(|r| r.revenue).sum(),
            capital_fee_due: chunk.iter().map(|r| r.capital_fee_due).sum(),
            growth_fee_due: chunk.iter().map(|r| r.growth_fee_due).sum(),
            loss: chunk.iter().map(|r| r.loss).sum(),
            profit: chunk.iter().map(|r| r.profit).sum(),
            loan_balance: last.loan_balance,
            reserve_balance: last.reserve_balance,
        });
    }

    yearly
}

/// Complete output of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub monthly_ledger: Vec<MonthlyLedgerRow>,
    pub yearly_ledger: Vec<YearlyLedgerRow>,

    /// Fixed monthly installment over the loan term
    pub installment: f64,

    pub total_interest: f64,
    pub total_revenue: f64,
    pub total_capital_fee: f64,
    pub total_growth_fee: f64,
    pub total_profit: f64,
    pub total_loss: f64,

    /// Revenue net of everything due over the horizon (EMI and both fees),
    /// before reserve movements
    pub total_net_cash: f64,

    /// Herd market value projected at the horizon year
    pub total_asset_value: f64,
}
