//! Cash-flow projection: amortization, revenue, the waterfall engine,
//! asset valuation, and the rate search

mod amortization;
mod assets;
mod engine;
mod ledger;
mod optimizer;
mod revenue;
mod state;

pub use amortization::{InstallmentSplit, LoanSchedule};
pub use assets::{project_asset_value, AssetProjection};
pub use engine::SimulationEngine;
pub use ledger::{
    rollup_yearly, MonthlyLedgerRow, ObligationPayment, SimulationResult, YearlyLedgerRow,
};
pub use optimizer::{optimize_rate, LOSS_TOLERANCE, RATE_CEILING_PCT, RATE_FLOOR_PCT};
pub use revenue::RevenueProjector;
pub use state::SimulationState;
