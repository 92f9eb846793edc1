//! Highest sustainable interest rate search
//!
//! Treats the full simulation as a black-box oracle and bisects the rate
//! range for the highest rate that stays loss-free. Loss is monotone in the
//! rate (a higher rate only raises the EMI while revenue is unchanged), so
//! bisection over tenths of a percent is exact.

use log::debug;

use crate::error::ParameterError;
use crate::params::ParameterSet;

use super::engine::SimulationEngine;

/// Lower search bound, percent
pub const RATE_FLOOR_PCT: f64 = 9.0;

/// Upper search bound, percent
pub const RATE_CEILING_PCT: f64 = 24.0;

/// A run counts as loss-free while cumulative loss stays under one
/// currency unit
pub const LOSS_TOLERANCE: f64 = 1.0;

/// Find the highest rate in `[9.0, 24.0]` (0.1 steps) at which the
/// simulation reports no cumulative loss.
///
/// The rate in `params` is ignored; every probe re-runs the full engine at
/// the probed rate. If even the floor rate produces loss, the floor is
/// returned regardless — a loss-bearing quote is still a quote.
pub fn optimize_rate(
    engine: &SimulationEngine,
    params: &ParameterSet,
) -> Result<f64, ParameterError> {
    let probe = |tenths: u32| -> Result<bool, ParameterError> {
        let rate = tenths as f64 / 10.0;
        let result = engine.simulate(&params.with_rate(rate))?;
        debug!(
            "rate probe {:.1}% -> cumulative loss {:.2}",
            rate, result.total_loss
        );
        Ok(result.total_loss < LOSS_TOLERANCE)
    };

    let mut lo = (RATE_FLOOR_PCT * 10.0).round() as u32;
    let mut hi = (RATE_CEILING_PCT * 10.0).round() as u32;

    if probe(hi)? {
        return Ok(RATE_CEILING_PCT);
    }
    if !probe(lo)? {
        return Ok(RATE_FLOOR_PCT);
    }

    // Invariant: lo is loss-free, hi is not
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if probe(mid)? {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Ok(lo as f64 / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_params() -> ParameterSet {
        ParameterSet {
            principal: 400_000.0,
            // Ignored by the search
            annual_rate_pct: 0.0,
            loan_term_months: 60,
            horizon_months: 60,
            unit_count: 1,
            capital_fee_enabled: false,
            growth_fee_enabled: false,
        }
    }

    #[test]
    fn test_result_stays_in_bounds() {
        let engine = SimulationEngine::with_default_pricing();
        let rate = optimize_rate(&engine, &search_params()).unwrap();

        assert!((RATE_FLOOR_PCT..=RATE_CEILING_PCT).contains(&rate));
    }

    #[test]
    fn test_result_is_loss_free_when_floor_is() {
        let engine = SimulationEngine::with_default_pricing();
        let params = search_params();

        let floor = engine.simulate(&params.with_rate(RATE_FLOOR_PCT)).unwrap();
        let rate = optimize_rate(&engine, &params).unwrap();
        let at_rate = engine.simulate(&params.with_rate(rate)).unwrap();

        if floor.total_loss < LOSS_TOLERANCE {
            assert!(at_rate.total_loss < LOSS_TOLERANCE);
        } else {
            assert_eq!(rate, RATE_FLOOR_PCT);
        }
    }

    #[test]
    fn test_one_decimal_precision() {
        let engine = SimulationEngine::with_default_pricing();
        let rate = optimize_rate(&engine, &search_params()).unwrap();

        assert_eq!(rate, (rate * 10.0).round() / 10.0);
    }

    #[test]
    fn test_heavy_fee_load_falls_back_to_floor() {
        // Both fees on with a 60-month horizon: descendants cost growth
        // fees but never produce revenue, so even the floor rate loses
        let engine = SimulationEngine::with_default_pricing();
        let mut params = search_params();
        params.capital_fee_enabled = true;
        params.growth_fee_enabled = true;

        let floor = engine.simulate(&params.with_rate(RATE_FLOOR_PCT)).unwrap();
        assert!(floor.total_loss >= LOSS_TOLERANCE);

        let rate = optimize_rate(&engine, &params).unwrap();
        assert_eq!(rate, RATE_FLOOR_PCT);
    }

    #[test]
    fn test_invalid_params_propagate() {
        let engine = SimulationEngine::with_default_pricing();
        let mut params = search_params();
        params.horizon_months = 0;

        assert!(optimize_rate(&engine, &params).is_err());
    }
}
