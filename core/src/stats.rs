//! Descriptive statistics over a user's habit history.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Habit, HabitCategory};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub category: HabitCategory,
    pub count: u32,
    /// Share of all habits, 0–100
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct MoodCount {
    pub mood: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct HabitStats {
    pub habit_count: u32,
    pub total_points: u64,
    /// Mean points per habit, rounded; 0 for no habits
    pub average_points: u32,
    /// Most frequent category first
    pub categories: Vec<CategoryShare>,
    /// Most frequent mood first
    pub moods: Vec<MoodCount>,
}

pub fn habit_stats(habits: &[Habit]) -> HabitStats {
    let habit_count = u32::try_from(habits.len()).unwrap_or(u32::MAX);
    let total_points: u64 = habits.iter().map(|h| u64::from(h.points)).sum();
    let average_points = if habits.is_empty() {
        0
    } else {
        (total_points as f64 / habits.len() as f64).round() as u32
    };

    let mut by_category: BTreeMap<HabitCategory, u32> = BTreeMap::new();
    let mut by_mood: BTreeMap<&str, u32> = BTreeMap::new();
    for habit in habits {
        *by_category.entry(habit.category).or_default() += 1;
        if let Some(mood) = habit.mood.as_deref().filter(|m| !m.is_empty()) {
            *by_mood.entry(mood).or_default() += 1;
        }
    }

    let mut categories: Vec<CategoryShare> = by_category
        .into_iter()
        .map(|(category, count)| CategoryShare {
            category,
            count,
            percentage: f64::from(count) / habits.len() as f64 * 100.0,
        })
        .collect();
    categories.sort_by(|a, b| b.count.cmp(&a.count));

    let mut moods: Vec<MoodCount> = by_mood
        .into_iter()
        .map(|(mood, count)| MoodCount {
            mood: mood.to_string(),
            count,
        })
        .collect();
    moods.sort_by(|a, b| b.count.cmp(&a.count));

    HabitStats {
        habit_count,
        total_points,
        average_points,
        categories,
        moods,
    }
}

/// Calendar cell shading by number of habits logged on a day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, uniffi::Enum,
)]
#[serde(rename_all = "lowercase")]
pub enum ActivityIntensity {
    Empty,
    Light,
    Medium,
    High,
}

impl ActivityIntensity {
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => ActivityIntensity::Empty,
            1 => ActivityIntensity::Light,
            2 => ActivityIntensity::Medium,
            _ => ActivityIntensity::High,
        }
    }
}

pub fn activity_on(habits: &[Habit], date: NaiveDate) -> ActivityIntensity {
    ActivityIntensity::from_count(habits.iter().filter(|h| h.date == date).count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact::tests::make_habit;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn habit(category: HabitCategory, d: u32, points: u32, mood: Option<&str>) -> Habit {
        let mut h = make_habit("Logged", category, date(d));
        h.points = points;
        h.mood = mood.map(str::to_string);
        h
    }

    #[test]
    fn test_empty_stats() {
        let stats = habit_stats(&[]);
        assert_eq!(stats.habit_count, 0);
        assert_eq!(stats.total_points, 0);
        assert_eq!(stats.average_points, 0);
        assert!(stats.categories.is_empty());
        assert!(stats.moods.is_empty());
    }

    #[test]
    fn test_stats_distribution() {
        let habits = vec![
            habit(HabitCategory::Waste, 9, 20, Some("😊")),
            habit(HabitCategory::Transportation, 9, 35, Some("🌞")),
            habit(HabitCategory::Waste, 8, 25, Some("😊")),
            habit(HabitCategory::Water, 8, 30, None),
        ];
        let stats = habit_stats(&habits);

        assert_eq!(stats.habit_count, 4);
        assert_eq!(stats.total_points, 110);
        assert_eq!(stats.average_points, 28);

        assert_eq!(stats.categories[0].category, HabitCategory::Waste);
        assert_eq!(stats.categories[0].count, 2);
        assert!((stats.categories[0].percentage - 50.0).abs() < 1e-9);
        // Ties keep category order.
        assert_eq!(stats.categories[1].category, HabitCategory::Transportation);
        assert_eq!(stats.categories[2].category, HabitCategory::Water);

        assert_eq!(
            stats.moods[0],
            MoodCount {
                mood: "😊".to_string(),
                count: 2
            }
        );
        assert_eq!(stats.moods.len(), 2);
    }

    #[test]
    fn test_activity_intensity() {
        let habits = vec![
            habit(HabitCategory::Food, 9, 10, None),
            habit(HabitCategory::Food, 9, 10, None),
            habit(HabitCategory::Food, 9, 10, None),
            habit(HabitCategory::Food, 8, 10, None),
        ];
        assert_eq!(activity_on(&habits, date(9)), ActivityIntensity::High);
        assert_eq!(activity_on(&habits, date(8)), ActivityIntensity::Light);
        assert_eq!(activity_on(&habits, date(7)), ActivityIntensity::Empty);
        assert_eq!(ActivityIntensity::from_count(2), ActivityIntensity::Medium);
    }
}
