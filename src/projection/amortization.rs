//! Fixed-installment (EMI) loan amortization

/// Amortization schedule for a principal / monthly rate / term.
///
/// The installment is fixed over the term; the interest/principal split of
/// each payment follows the declining balance.
#[derive(Debug, Clone)]
pub struct LoanSchedule {
    monthly_rate: f64,
    term_months: u32,
    installment: f64,
}

/// One month's installment split against an opening balance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstallmentSplit {
    /// Amount due this month (0 past the loan term)
    pub emi_due: f64,
    pub interest: f64,
    pub principal: f64,
    pub closing_balance: f64,
}

impl LoanSchedule {
    /// Build the schedule. The term must already be validated as non-zero
    /// (`ParameterSet::validate` runs before any schedule is built).
    pub fn new(principal: f64, monthly_rate: f64, term_months: u32) -> Self {
        let installment = if monthly_rate == 0.0 {
            principal / term_months as f64
        } else {
            let growth = (1.0 + monthly_rate).powi(term_months as i32);
            principal * monthly_rate * growth / (growth - 1.0)
        };

        Self {
            monthly_rate,
            term_months,
            installment,
        }
    }

    /// Fixed monthly installment
    pub fn installment(&self) -> f64 {
        self.installment
    }

    pub fn term_months(&self) -> u32 {
        self.term_months
    }

    /// Split the payment for `month` (1-based) against the opening balance.
    ///
    /// The final loan month closes the balance exactly, absorbing any float
    /// residue into the principal component.
    pub fn split(&self, month: u32, opening_balance: f64) -> InstallmentSplit {
        if month > self.term_months {
            return InstallmentSplit {
                emi_due: 0.0,
                interest: 0.0,
                principal: 0.0,
                closing_balance: opening_balance,
            };
        }

        let interest = opening_balance * self.monthly_rate;
        let principal = if month == self.term_months {
            opening_balance
        } else {
            (self.installment - interest).max(0.0)
        };
        let emi_due = if month == self.term_months {
            interest + principal
        } else {
            self.installment
        };

        InstallmentSplit {
            emi_due,
            interest,
            principal,
            closing_balance: opening_balance - principal,
        }
    }
}
