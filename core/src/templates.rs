//! Known habits and the quantities they stand for.
//!
//! Each template carries a [`Multiplier`] whose shape is tied to one
//! category. Habits logged without a template (or with one whose shape does
//! not fit the logged category) use the category default.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EcoError;
use crate::models::HabitCategory;

/// Quantity attached to a habit, shaped per category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Multiplier {
    /// Distance travelled without a car; `efficiency` splits shared trips.
    Transportation { distance_km: f64, efficiency: f64 },
    Energy { kwh: f64 },
    Water { litres: f64 },
    Waste { kg: f64 },
    Food { meals: f64 },
    Shopping { items: f64 },
    /// Direct CO2 offset of the activity.
    Nature { co2_kg: f64 },
}

impl Multiplier {
    pub fn category(&self) -> HabitCategory {
        match self {
            Multiplier::Transportation { .. } => HabitCategory::Transportation,
            Multiplier::Energy { .. } => HabitCategory::Energy,
            Multiplier::Water { .. } => HabitCategory::Water,
            Multiplier::Waste { .. } => HabitCategory::Waste,
            Multiplier::Food { .. } => HabitCategory::Food,
            Multiplier::Shopping { .. } => HabitCategory::Shopping,
            Multiplier::Nature { .. } => HabitCategory::Nature,
        }
    }

    /// Quantity assumed for an unrecognized habit.
    pub fn default_for(category: HabitCategory) -> Self {
        match category {
            HabitCategory::Transportation => Multiplier::Transportation {
                distance_km: 10.0,
                efficiency: 1.0,
            },
            HabitCategory::Energy => Multiplier::Energy { kwh: 1.0 },
            HabitCategory::Water => Multiplier::Water { litres: 20.0 },
            HabitCategory::Waste => Multiplier::Waste { kg: 0.3 },
            HabitCategory::Food => Multiplier::Food { meals: 1.0 },
            HabitCategory::Shopping => Multiplier::Shopping { items: 1.0 },
            HabitCategory::Nature => Multiplier::Nature {
                co2_kg: HabitCategory::Nature.factors().co2_per_unit,
            },
        }
    }

    /// The template's multiplier if it fits `category`, else the default.
    pub fn resolve(template: Option<HabitTemplate>, category: HabitCategory) -> Self {
        template
            .map(|t| t.multiplier())
            .filter(|m| m.category() == category)
            .unwrap_or_else(|| Multiplier::default_for(category))
    }
}

/// Habits with known quantities, keyed by a stable id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "snake_case")]
pub enum HabitTemplate {
    PublicTransport,
    BikedToWork,
    WalkedInsteadOfDriving,
    Carpooled,
    ReusableWaterBottle,
    ShorterShower,
    FixedLeakyFaucet,
    CompostedFoodScraps,
    RecycledPlasticBottles,
    PlantBasedMeal,
    BoughtLocalProduce,
    ClothShoppingBags,
    PlantedTree,
    TurnedOffLights,
    UnpluggedElectronics,
}

impl HabitTemplate {
    pub const ALL: [HabitTemplate; 15] = [
        HabitTemplate::PublicTransport,
        HabitTemplate::BikedToWork,
        HabitTemplate::WalkedInsteadOfDriving,
        HabitTemplate::Carpooled,
        HabitTemplate::ReusableWaterBottle,
        HabitTemplate::ShorterShower,
        HabitTemplate::FixedLeakyFaucet,
        HabitTemplate::CompostedFoodScraps,
        HabitTemplate::RecycledPlasticBottles,
        HabitTemplate::PlantBasedMeal,
        HabitTemplate::BoughtLocalProduce,
        HabitTemplate::ClothShoppingBags,
        HabitTemplate::PlantedTree,
        HabitTemplate::TurnedOffLights,
        HabitTemplate::UnpluggedElectronics,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            HabitTemplate::PublicTransport => "public_transport",
            HabitTemplate::BikedToWork => "biked_to_work",
            HabitTemplate::WalkedInsteadOfDriving => "walked_instead_of_driving",
            HabitTemplate::Carpooled => "carpooled",
            HabitTemplate::ReusableWaterBottle => "reusable_water_bottle",
            HabitTemplate::ShorterShower => "shorter_shower",
            HabitTemplate::FixedLeakyFaucet => "fixed_leaky_faucet",
            HabitTemplate::CompostedFoodScraps => "composted_food_scraps",
            HabitTemplate::RecycledPlasticBottles => "recycled_plastic_bottles",
            HabitTemplate::PlantBasedMeal => "plant_based_meal",
            HabitTemplate::BoughtLocalProduce => "bought_local_produce",
            HabitTemplate::ClothShoppingBags => "cloth_shopping_bags",
            HabitTemplate::PlantedTree => "planted_tree",
            HabitTemplate::TurnedOffLights => "turned_off_lights",
            HabitTemplate::UnpluggedElectronics => "unplugged_electronics",
        }
    }

    /// Canonical display title, as stored on legacy records.
    pub fn title(&self) -> &'static str {
        match self {
            HabitTemplate::PublicTransport => "Used public transport",
            HabitTemplate::BikedToWork => "Biked to work",
            HabitTemplate::WalkedInsteadOfDriving => "Walked instead of driving",
            HabitTemplate::Carpooled => "Carpooled",
            HabitTemplate::ReusableWaterBottle => "Used reusable water bottle",
            HabitTemplate::ShorterShower => "Took shorter shower",
            HabitTemplate::FixedLeakyFaucet => "Fixed leaky faucet",
            HabitTemplate::CompostedFoodScraps => "Composted food scraps",
            HabitTemplate::RecycledPlasticBottles => "Recycled plastic bottles",
            HabitTemplate::PlantBasedMeal => "Ate plant-based meal",
            HabitTemplate::BoughtLocalProduce => "Bought local produce",
            HabitTemplate::ClothShoppingBags => "Used cloth shopping bags",
            HabitTemplate::PlantedTree => "Planted a tree",
            HabitTemplate::TurnedOffLights => "Turned off lights",
            HabitTemplate::UnpluggedElectronics => "Unplugged electronics",
        }
    }

    pub fn multiplier(&self) -> Multiplier {
        match self {
            HabitTemplate::PublicTransport => Multiplier::Transportation {
                distance_km: 20.0,
                efficiency: 1.0,
            },
            HabitTemplate::BikedToWork => Multiplier::Transportation {
                distance_km: 15.0,
                efficiency: 1.0,
            },
            HabitTemplate::WalkedInsteadOfDriving => Multiplier::Transportation {
                distance_km: 5.0,
                efficiency: 1.0,
            },
            HabitTemplate::Carpooled => Multiplier::Transportation {
                distance_km: 25.0,
                efficiency: 0.5,
            },
            HabitTemplate::ReusableWaterBottle => Multiplier::Shopping { items: 3.0 },
            HabitTemplate::ShorterShower => Multiplier::Water { litres: 50.0 },
            HabitTemplate::FixedLeakyFaucet => Multiplier::Water { litres: 100.0 },
            HabitTemplate::CompostedFoodScraps => Multiplier::Waste { kg: 0.5 },
            HabitTemplate::RecycledPlasticBottles => Multiplier::Waste { kg: 0.2 },
            HabitTemplate::PlantBasedMeal => Multiplier::Food { meals: 1.0 },
            HabitTemplate::BoughtLocalProduce => Multiplier::Food { meals: 0.5 },
            HabitTemplate::ClothShoppingBags => Multiplier::Shopping { items: 5.0 },
            HabitTemplate::PlantedTree => Multiplier::Nature { co2_kg: 10.0 },
            HabitTemplate::TurnedOffLights => Multiplier::Energy { kwh: 2.0 },
            HabitTemplate::UnpluggedElectronics => Multiplier::Energy { kwh: 1.0 },
        }
    }

    pub fn category(&self) -> HabitCategory {
        self.multiplier().category()
    }

    /// Exact, case-sensitive match against the canonical titles.
    pub fn from_title(title: &str) -> Option<Self> {
        HabitTemplate::ALL.into_iter().find(|t| t.title() == title)
    }
}

impl FromStr for HabitTemplate {
    type Err = EcoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HabitTemplate::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| EcoError::UnknownTemplate(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_title_exact_only() {
        assert_eq!(
            HabitTemplate::from_title("Carpooled"),
            Some(HabitTemplate::Carpooled)
        );
        assert_eq!(HabitTemplate::from_title("carpooled"), None);
        assert_eq!(HabitTemplate::from_title("Carpooled with friends"), None);
    }

    #[test]
    fn test_ids_and_titles_are_unique() {
        for (i, a) in HabitTemplate::ALL.iter().enumerate() {
            for b in &HabitTemplate::ALL[i + 1..] {
                assert_ne!(a.id(), b.id());
                assert_ne!(a.title(), b.title());
            }
            assert_eq!(a.id().parse::<HabitTemplate>(), Ok(*a));
        }
    }

    #[test]
    fn test_serde_uses_template_id() {
        let json = serde_json::to_string(&HabitTemplate::TurnedOffLights).unwrap();
        assert_eq!(json, "\"turned_off_lights\"");
    }

    #[test]
    fn test_resolve_uses_matching_template() {
        let m = Multiplier::resolve(
            Some(HabitTemplate::Carpooled),
            HabitCategory::Transportation,
        );
        assert_eq!(
            m,
            Multiplier::Transportation {
                distance_km: 25.0,
                efficiency: 0.5
            }
        );
    }

    #[test]
    fn test_resolve_falls_back_on_category_mismatch() {
        // Reusable bottles are counted as items; logged under waste they
        // carry no waste quantity.
        let m = Multiplier::resolve(
            Some(HabitTemplate::ReusableWaterBottle),
            HabitCategory::Waste,
        );
        assert_eq!(m, Multiplier::Waste { kg: 0.3 });
    }

    #[test]
    fn test_resolve_without_template() {
        assert_eq!(
            Multiplier::resolve(None, HabitCategory::Transportation),
            Multiplier::Transportation {
                distance_km: 10.0,
                efficiency: 1.0
            }
        );
        assert_eq!(
            Multiplier::resolve(None, HabitCategory::Nature),
            Multiplier::Nature { co2_kg: 0.5 }
        );
    }
}
