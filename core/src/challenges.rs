//! Challenge catalogs and point totals.

use serde::{Deserialize, Serialize};

use crate::models::HabitCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeKind {
    Daily,
    Weekly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ChallengeKind,
    pub points: u32,
    pub category: HabitCategory,
}

impl Challenge {
    fn new(
        id: &str,
        title: &str,
        description: &str,
        kind: ChallengeKind,
        points: u32,
        category: HabitCategory,
    ) -> Self {
        Challenge {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            kind,
            points,
            category,
        }
    }
}

/// The standing daily and weekly challenges.
pub fn default_challenges() -> Vec<Challenge> {
    use ChallengeKind::{Daily, Weekly};
    use HabitCategory::*;

    vec![
        Challenge::new(
            "1",
            "Zero Plastic Day",
            "Avoid using any single-use plastic items today",
            Daily,
            50,
            Waste,
        ),
        Challenge::new(
            "2",
            "Bike to Work Week",
            "Use your bike or walk for transportation 5 times this week",
            Weekly,
            100,
            Transportation,
        ),
        Challenge::new(
            "3",
            "Vegetarian Tuesday",
            "Have all plant-based meals today",
            Daily,
            30,
            Food,
        ),
        Challenge::new(
            "4",
            "Energy Saver",
            "Unplug all electronics when not in use today",
            Daily,
            25,
            Energy,
        ),
        Challenge::new(
            "5",
            "Water Warrior",
            "Take 5-minute showers for 7 days straight",
            Weekly,
            75,
            Water,
        ),
    ]
}

/// Random one-off tasks offered by the eco dice.
pub fn eco_dice_tasks() -> Vec<Challenge> {
    use ChallengeKind::Daily;
    use HabitCategory::*;

    vec![
        Challenge::new(
            "dice-1",
            "Reuse Something Old",
            "Find a creative way to repurpose an item you were going to throw away",
            Daily,
            35,
            Waste,
        ),
        Challenge::new(
            "dice-2",
            "Nature Connection",
            "Spend 15 minutes outdoors observing plants or wildlife",
            Daily,
            20,
            Nature,
        ),
        Challenge::new(
            "dice-3",
            "Local Hero",
            "Buy one item from a local farmer or small business",
            Daily,
            40,
            Shopping,
        ),
        Challenge::new(
            "dice-4",
            "Energy Detective",
            "Find and fix one energy waste in your home (lights, chargers, etc.)",
            Daily,
            30,
            Energy,
        ),
        Challenge::new(
            "dice-5",
            "Green Commute",
            "Use public transport, bike, or walk for all trips today",
            Daily,
            45,
            Transportation,
        ),
        Challenge::new(
            "dice-6",
            "Kitchen Ninja",
            "Cook a meal using only ingredients you already have",
            Daily,
            25,
            Food,
        ),
    ]
}

/// Pick the dice task for a roll. The caller owns the randomness.
pub fn eco_dice_task(roll: u32) -> Challenge {
    let mut tasks = eco_dice_tasks();
    let index = roll as usize % tasks.len();
    tasks.swap_remove(index)
}

/// Points earned from the challenges in `catalog` whose ids appear in
/// `completed_ids`. Unknown ids contribute nothing.
pub fn completed_points<S: AsRef<str>>(catalog: &[Challenge], completed_ids: &[S]) -> u32 {
    catalog
        .iter()
        .filter(|c| completed_ids.iter().any(|id| id.as_ref() == c.id))
        .map(|c| c.points)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(default_challenges().len(), 5);
        assert_eq!(eco_dice_tasks().len(), 6);
    }

    #[test]
    fn test_eco_dice_task_wraps() {
        assert_eq!(eco_dice_task(0).id, "dice-1");
        assert_eq!(eco_dice_task(5).id, "dice-6");
        assert_eq!(eco_dice_task(6).id, "dice-1");
        assert_eq!(eco_dice_task(13).id, "dice-2");
    }

    #[test]
    fn test_completed_points() {
        let catalog = default_challenges();
        assert_eq!(completed_points::<&str>(&catalog, &[]), 0);
        assert_eq!(completed_points(&catalog, &["1", "3"]), 80);
        assert_eq!(completed_points(&catalog, &["2", "missing"]), 100);
        // Duplicate ids do not double count.
        assert_eq!(completed_points(&catalog, &["5", "5"]), 75);
    }

    #[test]
    fn test_challenge_serde_kind_field() {
        let json = serde_json::to_value(&default_challenges()[0]).unwrap();
        assert_eq!(json["type"], "daily");
        assert_eq!(json["category"], "waste");
    }
}
