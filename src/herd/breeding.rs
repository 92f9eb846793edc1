//! Multi-generation birth calendar

use super::{Animal, ANIMALS_PER_UNIT, BIRTH_INTERVAL_MONTHS, SEED_ENTRY_OFFSET_MONTHS};

/// The flat herd timeline for one purchased unit, up to a horizon.
///
/// Callers scale fee and revenue totals by the unit count; per-unit herds
/// are identical, so one timeline serves every unit.
#[derive(Debug, Clone)]
pub struct BreedingTimeline {
    animals: Vec<Animal>,
    horizon_months: u32,
}

impl BreedingTimeline {
    /// Generate the full birth calendar for one purchased unit.
    ///
    /// The two seeds enter at months 0 and 6. Every animal bears one
    /// offspring every 12 months starting at its maturity month, with
    /// unbounded generation depth; the recursion terminates once birth
    /// months pass the horizon. The walk is a plain queue: children are
    /// appended behind their parent and visited in turn, so ids and
    /// ordering are deterministic.
    pub fn generate(horizon_months: u32) -> Self {
        let mut animals: Vec<Animal> = Vec::new();
        let mut next_id = 0u32;

        for slot in 0..ANIMALS_PER_UNIT {
            animals.push(Animal::seed(next_id, slot * SEED_ENTRY_OFFSET_MONTHS));
            next_id += 1;
        }

        let mut i = 0;
        while i < animals.len() {
            let (parent_id, child_generation, first_birth) = {
                let parent = &animals[i];
                (parent.id, parent.generation + 1, parent.maturity_month())
            };

            let mut birth = first_birth;
            while birth <= horizon_months {
                animals.push(Animal::calf(next_id, parent_id, child_generation, birth));
                next_id += 1;
                birth += BIRTH_INTERVAL_MONTHS;
            }

            i += 1;
        }

        Self {
            animals,
            horizon_months,
        }
    }

    /// All animals in the timeline, seeds included
    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn horizon_months(&self) -> u32 {
        self.horizon_months
    }

    /// Number of animals present in the herd at an absolute month
    pub fn count_at(&self, month: u32) -> u32 {
        self.animals
            .iter()
            .filter(|a| a.entry_month <= month)
            .count() as u32
    }
}
