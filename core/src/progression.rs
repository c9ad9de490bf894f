//! XP, levels and streaks.
//!
//! Progression state is always derived from the habit history and the
//! persisted counters. Applying activity returns a new [`UserProgress`].

use std::iter;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::challenges::Challenge;
use crate::models::{Habit, UserProgress};

pub const XP_PER_LEVEL: u32 = 100;

/// `floor(xp / 100) + 1`; level 1 at zero XP.
pub fn calculate_level(xp: u32) -> u32 {
    xp / XP_PER_LEVEL + 1
}

/// XP still needed to reach the next level, in `1..=100`.
pub fn xp_for_next_level(current_xp: u32) -> u32 {
    XP_PER_LEVEL - current_xp % XP_PER_LEVEL
}

/// Progress through the current level as a percentage in `0..100`.
pub fn level_progress_percent(xp: u32) -> u32 {
    xp % XP_PER_LEVEL * 100 / XP_PER_LEVEL
}

/// Consecutive days, ending with `today`, that have at least one habit.
///
/// Returns 0 when nothing was logged today. Habits dated after `today` are
/// ignored.
pub fn calculate_streak(habits: &[Habit], today: NaiveDate) -> u32 {
    streak_from_dates(habits.iter().map(|h| h.date), today)
}

fn streak_from_dates<I>(dates: I, today: NaiveDate) -> u32
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut days: Vec<NaiveDate> = dates.into_iter().filter(|d| *d <= today).collect();
    days.sort_unstable_by(|a, b| b.cmp(a));
    days.dedup();

    let mut streak = 0;
    let mut expected = Some(today);
    for day in days {
        if Some(day) != expected {
            break;
        }
        streak += 1;
        expected = day.pred_opt();
    }
    streak
}

/// Visual tier of a streak.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, uniffi::Enum,
)]
#[serde(rename_all = "lowercase")]
pub enum StreakTier {
    Starting,
    /// 7+ days
    Week,
    /// 30+ days
    Month,
    /// 100+ days
    Century,
}

impl StreakTier {
    pub fn from_streak(streak: u32) -> Self {
        match streak {
            100.. => StreakTier::Century,
            30.. => StreakTier::Month,
            7.. => StreakTier::Week,
            _ => StreakTier::Starting,
        }
    }
}

impl UserProgress {
    pub fn level(&self) -> u32 {
        calculate_level(self.xp)
    }

    pub fn xp_for_next_level(&self) -> u32 {
        xp_for_next_level(self.xp)
    }

    /// State after logging `habit`.
    ///
    /// `history` is the user's stored habits; it may or may not already
    /// contain `habit`.
    pub fn apply_habit(&self, habit: &Habit, history: &[Habit], today: NaiveDate) -> UserProgress {
        let dates = history.iter().map(|h| h.date).chain(iter::once(habit.date));
        let current_streak = streak_from_dates(dates, today);

        UserProgress {
            xp: self.xp.saturating_add(habit.points),
            green_score: self.green_score.saturating_add(habit.points),
            current_streak,
            longest_streak: self.longest_streak.max(current_streak),
            total_habits_logged: self.total_habits_logged.saturating_add(1),
            badges: self.badges.clone(),
        }
    }

    /// State after completing `challenge`.
    pub fn apply_challenge(&self, challenge: &Challenge) -> UserProgress {
        UserProgress {
            xp: self.xp.saturating_add(challenge.points),
            green_score: self.green_score.saturating_add(challenge.points),
            ..self.clone()
        }
    }
}
