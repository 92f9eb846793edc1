//! Herd composition and the multi-generation breeding timeline

mod animal;
mod breeding;

pub use animal::Animal;
pub use breeding::BreedingTimeline;

/// Animals acquired per purchased unit
pub const ANIMALS_PER_UNIT: u32 = 2;

/// Stagger between the two seed-animal acquisitions of a unit
pub const SEED_ENTRY_OFFSET_MONTHS: u32 = 6;

/// Age of a purchased (generation-0) animal when it joins the herd
pub const SEED_AGE_AT_ENTRY_MONTHS: u32 = 60;

/// Months from an animal's herd entry until it bears its first offspring.
///
/// The legacy calculators disagreed on this constant (32 in one, 33 in the
/// other); 33 is canonical here and pinned by the timeline tests.
pub const GESTATION_MATURITY_MONTHS: u32 = 33;

/// Months between consecutive births of the same animal
pub const BIRTH_INTERVAL_MONTHS: u32 = 12;
