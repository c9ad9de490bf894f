//! Per-habit environmental impact estimation.
//!
//! Pure functions only: a habit goes in, an [`EnvironmentalImpact`] comes out.

use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::factors::{CO2_PER_CAR_DAY_KG, CO2_PER_TREE_KG};
use crate::models::Habit;
use crate::templates::Multiplier;

/// Estimated savings attributed to one or more habits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalImpact {
    /// kg of CO2 avoided
    pub co2_saved: f64,
    /// Litres of water saved
    pub water_saved: f64,
    /// kg of waste avoided
    pub waste_saved: f64,
    /// Trees needed to absorb the same CO2 in a year
    pub trees_equivalent: f64,
    /// Days of average car driving avoided
    pub cars_off_road: f64,
}

impl EnvironmentalImpact {
    pub const ZERO: EnvironmentalImpact = EnvironmentalImpact {
        co2_saved: 0.0,
        water_saved: 0.0,
        waste_saved: 0.0,
        trees_equivalent: 0.0,
        cars_off_road: 0.0,
    };

    /// Build a rounded impact from raw savings.
    ///
    /// The equivalents derive from the already rounded CO2 figure, so
    /// `trees_equivalent == round2(co2_saved / 22)` holds on every result.
    pub fn from_raw(co2_saved: f64, water_saved: f64, waste_saved: f64) -> Self {
        let co2_saved = round_to(co2_saved, 2);
        EnvironmentalImpact {
            co2_saved,
            water_saved: water_saved.round(),
            waste_saved: round_to(waste_saved, 2),
            trees_equivalent: round_to(co2_saved / CO2_PER_TREE_KG, 2),
            cars_off_road: round_to(co2_saved / CO2_PER_CAR_DAY_KG, 3),
        }
    }
}

impl Add for EnvironmentalImpact {
    type Output = EnvironmentalImpact;

    fn add(self, rhs: Self) -> Self::Output {
        EnvironmentalImpact {
            co2_saved: self.co2_saved + rhs.co2_saved,
            water_saved: self.water_saved + rhs.water_saved,
            waste_saved: self.waste_saved + rhs.waste_saved,
            trees_equivalent: self.trees_equivalent + rhs.trees_equivalent,
            cars_off_road: self.cars_off_road + rhs.cars_off_road,
        }
    }
}

impl Sum for EnvironmentalImpact {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(EnvironmentalImpact::ZERO, Add::add)
    }
}

/// Round half away from zero to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Estimate the impact of a single habit.
pub fn calculate_habit_impact(habit: &Habit) -> EnvironmentalImpact {
    let template = habit.resolved_template();
    if template.is_none() {
        tracing::trace!(
            title = %habit.title,
            category = %habit.category,
            "no habit template matched, using category defaults"
        );
    }

    let factors = habit.category.factors();
    let (co2, water, waste) = match Multiplier::resolve(template, habit.category) {
        Multiplier::Transportation {
            distance_km,
            efficiency,
        } => (factors.co2_per_unit * distance_km * efficiency, 0.0, 0.0),
        Multiplier::Energy { kwh } => (
            factors.co2_per_unit * kwh,
            factors.water_per_unit * kwh,
            0.0,
        ),
        Multiplier::Water { litres } => (factors.co2_per_unit * litres, litres, 0.0),
        Multiplier::Waste { kg } => (factors.co2_per_unit * kg, factors.water_per_unit * kg, kg),
        Multiplier::Food { meals: units } | Multiplier::Shopping { items: units } => (
            factors.co2_per_unit * units,
            factors.water_per_unit * units,
            factors.waste_per_unit * units,
        ),
        Multiplier::Nature { co2_kg } => (co2_kg, 0.0, 0.0),
    };

    EnvironmentalImpact::from_raw(co2, water, waste)
}
