//! Animal records in the projected herd

use serde::{Deserialize, Serialize};

use super::{GESTATION_MATURITY_MONTHS, SEED_AGE_AT_ENTRY_MONTHS};

/// A single animal in the projected herd.
///
/// Derived, never user-supplied: seeds come from the acquisition schedule
/// and every other animal from the breeding timeline. Month indices count
/// from the simulation epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub id: u32,

    /// 0 = originally purchased, N = Nth-generation descendant
    pub generation: u32,

    /// Parent animal, absent for generation 0
    pub parent_id: Option<u32>,

    /// Month the animal joined the herd: acquisition month for seeds,
    /// birth month for descendants
    pub entry_month: u32,

    /// Age in months at entry (purchased animals arrive mature)
    pub age_at_entry_months: u32,
}

impl Animal {
    /// A purchased generation-0 animal entering at its acquisition month
    pub fn seed(id: u32, entry_month: u32) -> Self {
        Self {
            id,
            generation: 0,
            parent_id: None,
            entry_month,
            age_at_entry_months: SEED_AGE_AT_ENTRY_MONTHS,
        }
    }

    /// A newborn descendant
    pub fn calf(id: u32, parent_id: u32, generation: u32, birth_month: u32) -> Self {
        Self {
            id,
            generation,
            parent_id: Some(parent_id),
            entry_month: birth_month,
            age_at_entry_months: 0,
        }
    }

    pub fn is_seed(&self) -> bool {
        self.generation == 0
    }

    /// Age in months at an absolute month, or None before the animal exists
    pub fn age_at(&self, month: u32) -> Option<u32> {
        if month < self.entry_month {
            return None;
        }
        Some(self.age_at_entry_months + (month - self.entry_month))
    }

    /// Month the animal bears its first offspring
    pub fn maturity_month(&self) -> u32 {
        self.entry_month + GESTATION_MATURITY_MONTHS
    }
}
