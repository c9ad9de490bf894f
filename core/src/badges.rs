//! Badge catalog and unlock evaluation.

use chrono::{DateTime, Utc};

use crate::models::{Badge, BadgeRarity, Habit, UserProgress};

/// Condition a user must meet to earn a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeRule {
    /// At least one habit in the history.
    FirstHabit,
    /// `current_streak` at or above the given length.
    StreakAtLeast(u32),
    /// `total_habits_logged` at or above the given count.
    HabitsLoggedAtLeast(u32),
}

impl BadgeRule {
    pub fn is_met(&self, user: &UserProgress, habits: &[Habit]) -> bool {
        match *self {
            BadgeRule::FirstHabit => !habits.is_empty(),
            BadgeRule::StreakAtLeast(days) => user.current_streak >= days,
            BadgeRule::HabitsLoggedAtLeast(count) => user.total_habits_logged >= count,
        }
    }
}

/// A badge that can be earned.
#[derive(Debug, Clone)]
pub struct BadgeDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub rarity: BadgeRarity,
    pub rule: BadgeRule,
}

impl BadgeDefinition {
    pub fn unlock(&self, unlocked_at: DateTime<Utc>) -> Badge {
        Badge {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            icon: self.icon.to_string(),
            unlocked_at,
            rarity: self.rarity,
        }
    }
}

/// All badges in evaluation order.
pub static BADGES: &[BadgeDefinition] = &[
    BadgeDefinition {
        id: "1",
        name: "First Steps",
        description: "Log your first eco-friendly habit",
        icon: "🌱",
        rarity: BadgeRarity::Common,
        rule: BadgeRule::FirstHabit,
    },
    BadgeDefinition {
        id: "2",
        name: "Week Warrior",
        description: "Maintain a 7-day streak",
        icon: "🔥",
        rarity: BadgeRarity::Common,
        rule: BadgeRule::StreakAtLeast(7),
    },
    BadgeDefinition {
        id: "3",
        name: "Month Master",
        description: "Maintain a 30-day streak",
        icon: "🏆",
        rarity: BadgeRarity::Rare,
        rule: BadgeRule::StreakAtLeast(30),
    },
    // Described as ten completed challenges but awarded on habit count;
    // challenge completions are not tracked per user.
    BadgeDefinition {
        id: "4",
        name: "Challenge Champion",
        description: "Complete 10 challenges",
        icon: "⭐",
        rarity: BadgeRarity::Rare,
        rule: BadgeRule::HabitsLoggedAtLeast(50),
    },
    BadgeDefinition {
        id: "5",
        name: "Eco Legend",
        description: "Reach 100 day streak",
        icon: "👑",
        rarity: BadgeRarity::Legendary,
        rule: BadgeRule::StreakAtLeast(100),
    },
];

pub fn find_badge(id: &str) -> Option<&'static BadgeDefinition> {
    BADGES.iter().find(|b| b.id == id)
}

/// Badges the user now qualifies for but does not yet own, in catalog
/// order, each stamped with `now`. `user` is not modified.
pub fn check_badge_unlocks(
    user: &UserProgress,
    habits: &[Habit],
    now: DateTime<Utc>,
) -> Vec<Badge> {
    let unlocked: Vec<Badge> = BADGES
        .iter()
        .filter(|def| !user.has_badge(def.id))
        .filter(|def| def.rule.is_met(user, habits))
        .map(|def| def.unlock(now))
        .collect();

    if !unlocked.is_empty() {
        tracing::debug!(
            count = unlocked.len(),
            ids = ?unlocked.iter().map(|b| b.id.as_str()).collect::<Vec<_>>(),
            "badges unlocked"
        );
    }
    unlocked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact::tests::make_habit;
    use crate::models::HabitCategory;
    use chrono::{NaiveDate, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 9, 12, 0, 0).unwrap()
    }

    fn one_habit() -> Vec<Habit> {
        vec![make_habit(
            "Biked to work",
            HabitCategory::Transportation,
            NaiveDate::from_ymd_opt(2025, 1, 9).unwrap(),
        )]
    }

    fn ids(badges: &[Badge]) -> Vec<&str> {
        badges.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_no_unlocks_for_fresh_user() {
        let user = UserProgress::default();
        assert!(check_badge_unlocks(&user, &[], now()).is_empty());
    }

    #[test]
    fn test_first_habit_unlock() {
        let user = UserProgress::default();
        let badges = check_badge_unlocks(&user, &one_habit(), now());
        assert_eq!(ids(&badges), vec!["1"]);
        assert_eq!(badges[0].unlocked_at, now());
        assert_eq!(badges[0].name, "First Steps");
        assert_eq!(badges[0].rarity, BadgeRarity::Common);
    }

    #[test]
    fn test_thirty_day_streak_unlocks_week_and_month() {
        let user = UserProgress {
            current_streak: 30,
            total_habits_logged: 30,
            ..UserProgress::default()
        };
        let badges = check_badge_unlocks(&user, &[], now());
        assert_eq!(ids(&badges), vec!["2", "3"]);
    }

    #[test]
    fn test_habit_count_unlocks_challenge_champion() {
        let user = UserProgress {
            total_habits_logged: 50,
            ..UserProgress::default()
        };
        let badges = check_badge_unlocks(&user, &one_habit(), now());
        assert_eq!(ids(&badges), vec!["1", "4"]);
    }

    #[test]
    fn test_owned_badges_are_skipped() {
        let owned = find_badge("1").unwrap().unlock(now());
        let user = UserProgress {
            current_streak: 120,
            total_habits_logged: 200,
            badges: vec![owned, find_badge("3").unwrap().unlock(now())],
            ..UserProgress::default()
        };
        let badges = check_badge_unlocks(&user, &one_habit(), now());
        assert_eq!(ids(&badges), vec!["2", "4", "5"]);
        for badge in &badges {
            assert!(!user.has_badge(&badge.id));
        }
    }

    #[test]
    fn test_catalog_ids_unique() {
        for (i, a) in BADGES.iter().enumerate() {
            assert!(BADGES[i + 1..].iter().all(|b| b.id != a.id));
        }
        assert!(find_badge("6").is_none());
    }
}
