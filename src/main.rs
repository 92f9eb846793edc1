//! Herdcash CLI
//!
//! Runs a single cash-flow simulation and prints the monthly and yearly
//! ledgers, with optional CSV export and rate optimization.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use herdcash::{ParameterSet, ScenarioRunner};

#[derive(Parser, Debug)]
#[command(name = "herdcash", about = "Livestock financing cash-flow simulator")]
struct Args {
    /// Financed principal
    #[arg(long, default_value_t = 400_000.0)]
    principal: f64,

    /// Annual interest rate in percent
    #[arg(long, default_value_t = 18.0)]
    rate: f64,

    /// Loan term in months
    #[arg(long, default_value_t = 60)]
    term: u32,

    /// Simulation horizon in months (defaults to the loan term)
    #[arg(long)]
    horizon: Option<u32>,

    /// Number of purchased units
    #[arg(long, default_value_t = 1)]
    units: u32,

    /// Disable the yearly per-animal capital fee
    #[arg(long)]
    no_capital_fee: bool,

    /// Disable the tiered calf growth fee
    #[arg(long)]
    no_growth_fee: bool,

    /// Directory with CSV assumption overrides
    #[arg(long)]
    assumptions_dir: Option<PathBuf>,

    /// Write the full monthly ledger to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Also search for the highest sustainable rate
    #[arg(long)]
    optimize: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let runner = match &args.assumptions_dir {
        Some(dir) => ScenarioRunner::from_csv_path(dir)
            .map_err(|e| anyhow::anyhow!("failed to load assumptions: {e}"))?,
        None => ScenarioRunner::new(),
    };

    let params = ParameterSet {
        principal: args.principal,
        annual_rate_pct: args.rate,
        loan_term_months: args.term,
        horizon_months: args.horizon.unwrap_or(args.term),
        unit_count: args.units,
        capital_fee_enabled: !args.no_capital_fee,
        growth_fee_enabled: !args.no_growth_fee,
    };

    let result = runner.simulate(&params)?;

    println!("Herdcash v0.1.0");
    println!("===============\n");
    println!(
        "Principal: {:.2} at {:.1}% over {} months ({} unit(s), horizon {} months)",
        params.principal,
        params.annual_rate_pct,
        params.loan_term_months,
        params.effective_unit_count(),
        params.horizon_months,
    );
    println!("Installment: {:.2}\n", result.installment);

    println!(
        "{:>5} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "Month", "EMI", "Interest", "Balance", "Revenue", "CPF", "CGF", "Reserve", "Loss"
    );
    println!("{}", "-".repeat(110));

    // First 24 months to console, the rest via --csv
    for row in result.monthly_ledger.iter().take(24) {
        println!(
            "{:>5} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>12.2}",
            row.month,
            row.emi_due,
            row.interest,
            row.loan_balance,
            row.revenue,
            row.capital_fee_due,
            row.growth_fee_due,
            row.reserve_balance,
            row.loss,
        );
    }
    if result.monthly_ledger.len() > 24 {
        println!("... ({} more months)", result.monthly_ledger.len() - 24);
    }

    println!(
        "\n{:>5} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14}",
        "Year", "EMI", "Revenue", "Fees", "Profit", "Loss", "Reserve"
    );
    println!("{}", "-".repeat(100));
    for row in &result.yearly_ledger {
        println!(
            "{:>5} {:>14.2} {:>14.2} {:>14.2} {:>14.2} {:>14.2} {:>14.2}",
            row.year,
            row.emi_due,
            row.revenue,
            row.capital_fee_due + row.growth_fee_due,
            row.profit,
            row.loss,
            row.reserve_balance,
        );
    }

    println!("\nSummary:");
    println!("  Total Interest:    {:>14.2}", result.total_interest);
    println!("  Total Revenue:     {:>14.2}", result.total_revenue);
    println!("  Total Capital Fee: {:>14.2}", result.total_capital_fee);
    println!("  Total Growth Fee:  {:>14.2}", result.total_growth_fee);
    println!("  Total Profit:      {:>14.2}", result.total_profit);
    println!("  Total Loss:        {:>14.2}", result.total_loss);
    println!("  Total Net Cash:    {:>14.2}", result.total_net_cash);
    println!("  Asset Value:       {:>14.2}", result.total_asset_value);

    if let Some(csv_path) = &args.csv {
        let mut file = File::create(csv_path)
            .with_context(|| format!("unable to create {}", csv_path.display()))?;

        writeln!(
            file,
            "Month,EMI_Due,Interest,Principal,LoanBalance,Revenue,CPF_Due,CGF_Due,\
             EMI_FromRevenue,EMI_FromReserve,EMI_Shortfall,\
             CPF_FromRevenue,CPF_FromReserve,CPF_Shortfall,\
             CGF_FromRevenue,CGF_FromReserve,CGF_Shortfall,\
             ReserveBalance,Loss,Profit"
        )?;
        for row in &result.monthly_ledger {
            writeln!(
                file,
                "{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
                row.month,
                row.emi_due,
                row.interest,
                row.principal_paid,
                row.loan_balance,
                row.revenue,
                row.capital_fee_due,
                row.growth_fee_due,
                row.emi.from_revenue,
                row.emi.from_reserve,
                row.emi.shortfall,
                row.capital_fee.from_revenue,
                row.capital_fee.from_reserve,
                row.capital_fee.shortfall,
                row.growth_fee.from_revenue,
                row.growth_fee.from_reserve,
                row.growth_fee.shortfall,
                row.reserve_balance,
                row.loss,
                row.profit,
            )?;
        }
        println!("\nFull ledger written to: {}", csv_path.display());
    }

    if args.optimize {
        let best = runner.optimize_rate(&params)?;
        println!("\nHighest sustainable rate: {best:.1}%");
    }

    Ok(())
}
