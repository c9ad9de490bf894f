//! Milestone progress for the achievements view.

use serde::{Deserialize, Serialize};

use crate::models::{Habit, UserProgress};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneKind {
    Streak,
    Habits,
    Points,
    Level,
}

#[derive(Debug, Clone)]
pub struct MilestoneDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub kind: MilestoneKind,
    pub target: u32,
}

pub static MILESTONES: &[MilestoneDefinition] = &[
    MilestoneDefinition {
        id: "streak_7",
        title: "Week Warrior",
        description: "7-day streak",
        icon: "🔥",
        kind: MilestoneKind::Streak,
        target: 7,
    },
    MilestoneDefinition {
        id: "streak_30",
        title: "Month Master",
        description: "30-day streak",
        icon: "🏆",
        kind: MilestoneKind::Streak,
        target: 30,
    },
    MilestoneDefinition {
        id: "streak_100",
        title: "Century Saver",
        description: "100-day streak",
        icon: "👑",
        kind: MilestoneKind::Streak,
        target: 100,
    },
    MilestoneDefinition {
        id: "habits_50",
        title: "Half Century",
        description: "50 habits logged",
        icon: "📝",
        kind: MilestoneKind::Habits,
        target: 50,
    },
    MilestoneDefinition {
        id: "habits_100",
        title: "Habit Master",
        description: "100 habits logged",
        icon: "⭐",
        kind: MilestoneKind::Habits,
        target: 100,
    },
    MilestoneDefinition {
        id: "points_1000",
        title: "Green Guru",
        description: "1,000 points earned",
        icon: "🌟",
        kind: MilestoneKind::Points,
        target: 1000,
    },
    MilestoneDefinition {
        id: "level_5",
        title: "Rising Star",
        description: "Reach level 5",
        icon: "🚀",
        kind: MilestoneKind::Level,
        target: 5,
    },
    MilestoneDefinition {
        id: "level_10",
        title: "Eco Champion",
        description: "Reach level 10",
        icon: "🏅",
        kind: MilestoneKind::Level,
        target: 10,
    },
];

/// Where a user stands on one milestone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneProgress {
    pub id: String,
    pub title: String,
    pub kind: MilestoneKind,
    pub current: u32,
    pub target: u32,
    pub completed: bool,
    /// `current / target` as a rounded percentage, capped at 100
    pub percent: u32,
}

impl MilestoneDefinition {
    pub fn evaluate(&self, user: &UserProgress, habits: &[Habit]) -> MilestoneProgress {
        let current = match self.kind {
            MilestoneKind::Streak => user.current_streak,
            MilestoneKind::Habits => u32::try_from(habits.len()).unwrap_or(u32::MAX),
            MilestoneKind::Points => user.green_score,
            MilestoneKind::Level => user.level(),
        };
        let percent = if self.target == 0 {
            100
        } else {
            (f64::from(current) * 100.0 / f64::from(self.target))
                .min(100.0)
                .round() as u32
        };

        MilestoneProgress {
            id: self.id.to_string(),
            title: self.title.to_string(),
            kind: self.kind,
            current,
            target: self.target,
            completed: current >= self.target,
            percent,
        }
    }
}

pub fn milestone_progress(user: &UserProgress, habits: &[Habit]) -> Vec<MilestoneProgress> {
    MILESTONES.iter().map(|m| m.evaluate(user, habits)).collect()
}
