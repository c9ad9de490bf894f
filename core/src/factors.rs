//! Environmental conversion factors per habit category.
//!
//! The per-unit meaning differs by category: kilometres for transportation,
//! kWh for energy, litres for water, kilograms for waste, meals for food,
//! items for shopping and activities for nature.

use crate::models::HabitCategory;

// ============================================================================
// Equivalence Constants
// ============================================================================

/// CO2 absorbed by one tree in a year (kg).
pub const CO2_PER_TREE_KG: f64 = 22.0;

/// CO2 emitted by an average car in one day of driving (kg).
pub const CO2_PER_CAR_DAY_KG: f64 = 4.6;

// ============================================================================
// Factor Table
// ============================================================================

/// Per-unit conversion factors for one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryFactors {
    /// kg CO2 avoided per unit
    pub co2_per_unit: f64,
    /// Litres of water saved per unit
    pub water_per_unit: f64,
    /// kg of waste avoided per unit
    pub waste_per_unit: f64,
}

impl CategoryFactors {
    const fn new(co2_per_unit: f64, water_per_unit: f64, waste_per_unit: f64) -> Self {
        Self {
            co2_per_unit,
            water_per_unit,
            waste_per_unit,
        }
    }
}

const TRANSPORTATION: CategoryFactors = CategoryFactors::new(0.21, 0.0, 0.0);
const ENERGY: CategoryFactors = CategoryFactors::new(0.5, 4.0, 0.0);
const WATER: CategoryFactors = CategoryFactors::new(0.0036, 1.0, 0.0);
const WASTE: CategoryFactors = CategoryFactors::new(2.5, 50.0, 1.0);
const FOOD: CategoryFactors = CategoryFactors::new(3.3, 1100.0, 0.2);
const SHOPPING: CategoryFactors = CategoryFactors::new(0.5, 20.0, 0.1);
const NATURE: CategoryFactors = CategoryFactors::new(0.5, 0.0, 0.0);

impl HabitCategory {
    pub fn factors(&self) -> CategoryFactors {
        match self {
            HabitCategory::Transportation => TRANSPORTATION,
            HabitCategory::Energy => ENERGY,
            HabitCategory::Water => WATER,
            HabitCategory::Waste => WASTE,
            HabitCategory::Food => FOOD,
            HabitCategory::Shopping => SHOPPING,
            HabitCategory::Nature => NATURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factors_are_non_negative() {
        for category in HabitCategory::ALL {
            let f = category.factors();
            assert!(f.co2_per_unit >= 0.0, "{category}");
            assert!(f.water_per_unit >= 0.0, "{category}");
            assert!(f.waste_per_unit >= 0.0, "{category}");
        }
    }

    #[test]
    fn test_food_factors() {
        let f = HabitCategory::Food.factors();
        assert_eq!(f.co2_per_unit, 3.3);
        assert_eq!(f.water_per_unit, 1100.0);
        assert_eq!(f.waste_per_unit, 0.2);
    }
}
