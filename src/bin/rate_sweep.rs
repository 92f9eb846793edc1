//! Sweep a range of principals for the highest sustainable interest rate
//!
//! Each principal is an independent full optimization, so the sweep runs in
//! parallel. Supports JSON output for API integration via --json flag.
//! Accepts config via environment variables:
//!   SWEEP_MIN_PRINCIPAL, SWEEP_MAX_PRINCIPAL, SWEEP_STEP,
//!   TERM_MONTHS, HORIZON_MONTHS, UNITS, CAPITAL_FEE, GROWTH_FEE

use herdcash::{ParameterSet, ScenarioRunner};
use rayon::prelude::*;
use serde::Serialize;
use std::env;
use std::time::Instant;

#[derive(Serialize)]
struct SweepRow {
    principal: f64,
    best_rate_pct: f64,
    installment: f64,
    total_loss: f64,
    total_profit: f64,
    total_asset_value: f64,
}

#[derive(Serialize)]
struct SweepResponse {
    term_months: u32,
    horizon_months: u32,
    unit_count: u32,
    rows: Vec<SweepRow>,
    execution_time_ms: u64,
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key).ok().and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn main() {
    env_logger::init();

    let json_output = env::args().any(|arg| arg == "--json");
    let start = Instant::now();

    let min_principal: f64 = env_or("SWEEP_MIN_PRINCIPAL", 350_000.0);
    let max_principal: f64 = env_or("SWEEP_MAX_PRINCIPAL", 500_000.0);
    let step: f64 = env_or("SWEEP_STEP", 25_000.0);
    let term_months: u32 = env_or("TERM_MONTHS", 60);
    let horizon_months: u32 = env_or("HORIZON_MONTHS", term_months);
    let unit_count: u32 = env_or("UNITS", 1);
    let capital_fee: bool = env_or("CAPITAL_FEE", false);
    let growth_fee: bool = env_or("GROWTH_FEE", false);

    let mut principals = Vec::new();
    let mut principal = min_principal;
    while principal <= max_principal {
        principals.push(principal);
        principal += step;
    }

    let runner = ScenarioRunner::new();

    let rows: Vec<SweepRow> = principals
        .par_iter()
        .map(|&principal| {
            let params = ParameterSet {
                principal,
                annual_rate_pct: 0.0,
                loan_term_months: term_months,
                horizon_months,
                unit_count,
                capital_fee_enabled: capital_fee,
                growth_fee_enabled: growth_fee,
            };

            let best_rate_pct = runner
                .optimize_rate(&params)
                .expect("sweep parameters are valid");
            let result = runner
                .simulate(&params.with_rate(best_rate_pct))
                .expect("sweep parameters are valid");

            SweepRow {
                principal,
                best_rate_pct,
                installment: result.installment,
                total_loss: result.total_loss,
                total_profit: result.total_profit,
                total_asset_value: result.total_asset_value,
            }
        })
        .collect();

    let response = SweepResponse {
        term_months,
        horizon_months,
        unit_count,
        rows,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&response).expect("sweep response serializes")
        );
        return;
    }

    println!("Rate sweep ({} months, {} unit(s))", term_months, unit_count);
    println!(
        "{:>12} {:>10} {:>12} {:>12} {:>12} {:>14}",
        "Principal", "Rate %", "Installment", "Loss", "Profit", "AssetValue"
    );
    println!("{}", "-".repeat(78));
    for row in &response.rows {
        println!(
            "{:>12.0} {:>10.1} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
            row.principal,
            row.best_rate_pct,
            row.installment,
            row.total_loss,
            row.total_profit,
            row.total_asset_value,
        );
    }
    println!("\nCompleted in {} ms", response.execution_time_ms);
}
