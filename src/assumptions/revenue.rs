//! The 12-month productivity cycle driving per-animal revenue

/// Cycle phase boundaries: positions 0-4 pay the peak amount, 5-7 the mid
/// amount, and 8-11 nothing (dry).
const PEAK_MONTHS: u32 = 5;
const MID_MONTHS: u32 = 3;

/// Per-animal monthly payouts over the repeating 12-month productivity cycle
#[derive(Debug, Clone)]
pub struct RevenueCycle {
    /// Payout during the peak phase of the cycle
    pub peak_monthly: f64,

    /// Payout during the mid phase of the cycle
    pub mid_monthly: f64,

    /// Months after acquisition before a purchased animal starts producing
    pub seed_start_offset: u32,

    /// Zero-payout months a first-time mother takes after maturity before
    /// entering the cycle
    pub descendant_ramp_months: u32,
}

impl Default for RevenueCycle {
    fn default() -> Self {
        Self {
            peak_monthly: 9_000.0,
            mid_monthly: 6_000.0,
            seed_start_offset: 1,
            descendant_ramp_months: 2,
        }
    }
}

impl RevenueCycle {
    /// Payout at a position within the repeating 12-month cycle
    pub fn payout_at(&self, cycle_pos: u32) -> f64 {
        let pos = cycle_pos % 12;
        if pos < PEAK_MONTHS {
            self.peak_monthly
        } else if pos < PEAK_MONTHS + MID_MONTHS {
            self.mid_monthly
        } else {
            0.0
        }
    }
}
