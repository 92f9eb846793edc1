//! Herd market valuation at a future year

use serde::{Deserialize, Serialize};

use crate::assumptions::ValuationTable;
use crate::error::ParameterError;
use crate::herd::BreedingTimeline;

/// Herd value and head count at a target year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetProjection {
    pub total_asset_value: f64,
    pub total_animal_count: u32,
}

/// Project the herd to the end of `target_year` and value every living
/// animal at its age through the valuation table.
///
/// Re-runs the breeding timeline from scratch; there are no decrements, so
/// every animal born by the target month is counted.
pub fn project_asset_value(
    valuation: &ValuationTable,
    target_year: u32,
    unit_count: u32,
) -> Result<AssetProjection, ParameterError> {
    if target_year == 0 {
        return Err(ParameterError::NonPositiveTargetYear);
    }

    let target_month = target_year * 12;
    let timeline = BreedingTimeline::generate(target_month);
    let units = unit_count.max(1);
    let first_year = target_year == 1;

    let per_unit_value: f64 = timeline
        .animals()
        .iter()
        .filter_map(|a| a.age_at(target_month))
        .map(|age| valuation.value_at(age, first_year))
        .sum();

    Ok(AssetProjection {
        total_asset_value: per_unit_value * units as f64,
        total_animal_count: timeline.animals().len() as u32 * units,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ValuationTable {
        ValuationTable::default_bands()
    }

    #[test]
    fn test_year_one_is_just_the_seeds() {
        let projection = project_asset_value(&table(), 1, 1).unwrap();

        // Two seeds aged 72 and 66 months, no calves yet
        assert_eq!(projection.total_animal_count, 2);
        assert_eq!(projection.total_asset_value, 2.0 * 175_000.0);
    }

    #[test]
    fn test_year_five_herd_value() {
        let projection = project_asset_value(&table(), 5, 1).unwrap();

        // Seeds (175k each) plus calves born at months 33, 39, 45, 51, 57,
        // aged 27, 21, 15, 9, 3 at month 60: 100k + 40k + 25k + 10k + 10k
        assert_eq!(projection.total_animal_count, 7);
        assert_eq!(
            projection.total_asset_value,
            2.0 * 175_000.0 + 100_000.0 + 40_000.0 + 25_000.0 + 10_000.0 + 10_000.0
        );
    }

    #[test]
    fn test_scales_with_unit_count() {
        let one = project_asset_value(&table(), 5, 1).unwrap();
        let three = project_asset_value(&table(), 5, 3).unwrap();

        assert_eq!(three.total_animal_count, 3 * one.total_animal_count);
        assert_eq!(three.total_asset_value, 3.0 * one.total_asset_value);
    }

    #[test]
    fn test_zero_units_treated_as_one() {
        let zero = project_asset_value(&table(), 5, 0).unwrap();
        let one = project_asset_value(&table(), 5, 1).unwrap();

        assert_eq!(zero, one);
    }

    #[test]
    fn test_year_zero_rejected() {
        assert_eq!(
            project_asset_value(&table(), 0, 1),
            Err(ParameterError::NonPositiveTargetYear)
        );
    }
}
