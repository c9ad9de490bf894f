use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EcoError;
use crate::templates::HabitTemplate;

/// Calendar date format used for habit records.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(pub String);

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

/// The closed set of habit categories.
///
/// The derived `Ord` follows declaration order, which breaks count ties in
/// habit statistics. Keep variants in the same order as [`HabitCategory::ALL`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, uniffi::Enum,
)]
#[serde(rename_all = "lowercase")]
pub enum HabitCategory {
    Transportation,
    Energy,
    Water,
    Waste,
    Food,
    Shopping,
    Nature,
}

impl HabitCategory {
    pub const ALL: [HabitCategory; 7] = [
        HabitCategory::Transportation,
        HabitCategory::Energy,
        HabitCategory::Water,
        HabitCategory::Waste,
        HabitCategory::Food,
        HabitCategory::Shopping,
        HabitCategory::Nature,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HabitCategory::Transportation => "transportation",
            HabitCategory::Energy => "energy",
            HabitCategory::Water => "water",
            HabitCategory::Waste => "waste",
            HabitCategory::Food => "food",
            HabitCategory::Shopping => "shopping",
            HabitCategory::Nature => "nature",
        }
    }
}

impl fmt::Display for HabitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HabitCategory {
    type Err = EcoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HabitCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| EcoError::UnknownCategory(s.to_string()))
    }
}

/// A single logged sustainability action. Immutable once logged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: HabitId,
    pub user_id: UserId,
    pub title: String,
    pub category: HabitCategory,
    /// Known habit this entry was logged from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<HabitTemplate>,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, rename = "impact", skip_serializing_if = "Option::is_none")]
    pub impact_note: Option<String>,
    pub points: u32,
}

impl Habit {
    /// The template driving impact multipliers: the explicit one, else an
    /// exact match on the title.
    pub fn resolved_template(&self) -> Option<HabitTemplate> {
        self.template.or_else(|| HabitTemplate::from_title(&self.title))
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, uniffi::Enum,
)]
#[serde(rename_all = "lowercase")]
pub enum BadgeRarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl BadgeRarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeRarity::Common => "common",
            BadgeRarity::Rare => "rare",
            BadgeRarity::Epic => "epic",
            BadgeRarity::Legendary => "legendary",
        }
    }
}

impl FromStr for BadgeRarity {
    type Err = EcoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "common" => Ok(BadgeRarity::Common),
            "rare" => Ok(BadgeRarity::Rare),
            "epic" => Ok(BadgeRarity::Epic),
            "legendary" => Ok(BadgeRarity::Legendary),
            other => Err(EcoError::UnknownRarity(other.to_string())),
        }
    }
}

/// An unlocked achievement. Unique by `id` within a user's collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub unlocked_at: DateTime<Utc>,
    pub rarity: BadgeRarity,
}

/// Persisted gamification counters for one user.
///
/// Level is not stored: it is always derived from `xp`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub xp: u32,
    pub green_score: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_habits_logged: u32,
    #[serde(default)]
    pub badges: Vec<Badge>,
}

impl UserProgress {
    pub fn has_badge(&self, id: &str) -> bool {
        self.badges.iter().any(|b| b.id == id)
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, EcoError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| EcoError::InvalidDate {
        value: value.to_string(),
    })
}

pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, EcoError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| EcoError::InvalidTimestamp {
            value: value.to_string(),
        })
}
