//! Per-month herd revenue projection

use crate::assumptions::RevenueCycle;
use crate::herd::Animal;

/// Projects monthly revenue for individual animals and whole herds.
///
/// Purchased animals start producing a fixed offset after their acquisition
/// month; bred animals anchor their cycle to their own maturity month and
/// take a short zero-payout ramp first. Both then repeat the same
/// peak/mid/dry 12-month pattern.
#[derive(Debug, Clone)]
pub struct RevenueProjector<'a> {
    cycle: &'a RevenueCycle,
}

impl<'a> RevenueProjector<'a> {
    pub fn new(cycle: &'a RevenueCycle) -> Self {
        Self { cycle }
    }

    /// Revenue produced by one animal at an absolute month
    pub fn animal_revenue(&self, animal: &Animal, month: u32) -> f64 {
        if animal.age_at(month).is_none() {
            return 0.0;
        }

        if animal.is_seed() {
            let start = animal.entry_month + self.cycle.seed_start_offset;
            if month < start {
                return 0.0;
            }
            self.cycle.payout_at(month - start)
        } else {
            let maturity = animal.maturity_month();
            if month < maturity {
                return 0.0;
            }
            let pos = month - maturity;
            if pos < self.cycle.descendant_ramp_months {
                return 0.0;
            }
            self.cycle.payout_at(pos - self.cycle.descendant_ramp_months)
        }
    }

    /// Total per-unit herd revenue at an absolute month
    pub fn herd_revenue(&self, herd: &[Animal], month: u32) -> f64 {
        herd.iter().map(|a| self.animal_revenue(a, month)).sum()
    }
}
