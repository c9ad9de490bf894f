//! Foreign-language surface.
//!
//! Records here carry dates and timestamps as strings so bindings need no
//! date types. Calls that depend on "today" or "now" read the local clock.

use chrono::{Local, NaiveDate, SecondsFormat, Utc};

use crate::aggregate::{self, ImpactSummary, MonthlyImpact};
use crate::badges;
use crate::config::EngineConfig;
use crate::error::EcoError;
use crate::format::{format_impact_value, ImpactUnit};
use crate::impact::{calculate_habit_impact, EnvironmentalImpact};
use crate::leaderboard::{rank_leaderboard, LeaderboardEntry, RankedEntry};
use crate::milestones::{self, MilestoneProgress};
use crate::models::{
    parse_date, parse_timestamp, Badge, BadgeRarity, Habit, HabitCategory, HabitId, UserId,
    UserProgress,
};
use crate::progression;
use crate::stats::{self, HabitStats};
use crate::templates::HabitTemplate;

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiHabit {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub category: HabitCategory,
    pub template: Option<HabitTemplate>,
    /// `YYYY-MM-DD`
    pub date: String,
    pub mood: Option<String>,
    pub impact_note: Option<String>,
    pub points: u32,
}

impl TryFrom<FfiHabit> for Habit {
    type Error = EcoError;

    fn try_from(value: FfiHabit) -> Result<Self, Self::Error> {
        Ok(Habit {
            id: HabitId(value.id),
            user_id: UserId(value.user_id),
            title: value.title,
            category: value.category,
            template: value.template,
            date: parse_date(&value.date)?,
            mood: value.mood,
            impact_note: value.impact_note,
            points: value.points,
        })
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiBadge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    /// RFC 3339
    pub unlocked_at: String,
    pub rarity: BadgeRarity,
}

impl From<Badge> for FfiBadge {
    fn from(value: Badge) -> Self {
        FfiBadge {
            id: value.id,
            name: value.name,
            description: value.description,
            icon: value.icon,
            unlocked_at: value.unlocked_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            rarity: value.rarity,
        }
    }
}

impl TryFrom<FfiBadge> for Badge {
    type Error = EcoError;

    fn try_from(value: FfiBadge) -> Result<Self, Self::Error> {
        Ok(Badge {
            unlocked_at: parse_timestamp(&value.unlocked_at)?,
            id: value.id,
            name: value.name,
            description: value.description,
            icon: value.icon,
            rarity: value.rarity,
        })
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiUserProgress {
    pub xp: u32,
    pub green_score: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_habits_logged: u32,
    pub badges: Vec<FfiBadge>,
}

impl TryFrom<FfiUserProgress> for UserProgress {
    type Error = EcoError;

    fn try_from(value: FfiUserProgress) -> Result<Self, Self::Error> {
        Ok(UserProgress {
            xp: value.xp,
            green_score: value.green_score,
            current_streak: value.current_streak,
            longest_streak: value.longest_streak,
            total_habits_logged: value.total_habits_logged,
            badges: value
                .badges
                .into_iter()
                .map(Badge::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

fn convert_habits(habits: Vec<FfiHabit>) -> Result<Vec<Habit>, EcoError> {
    habits.into_iter().map(Habit::try_from).collect()
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[uniffi::export]
pub fn habit_impact(habit: FfiHabit) -> Result<EnvironmentalImpact, EcoError> {
    Ok(calculate_habit_impact(&Habit::try_from(habit)?))
}

#[uniffi::export]
pub fn total_impact(habits: Vec<FfiHabit>) -> Result<EnvironmentalImpact, EcoError> {
    Ok(aggregate::calculate_total_impact(&convert_habits(habits)?))
}

#[uniffi::export]
pub fn impact_by_timeframe(
    habits: Vec<FfiHabit>,
    window_days: u32,
) -> Result<EnvironmentalImpact, EcoError> {
    let habits = convert_habits(habits)?;
    Ok(aggregate::impact_by_timeframe(&habits, window_days, today()))
}

#[uniffi::export]
pub fn monthly_impact_trend(
    habits: Vec<FfiHabit>,
    month_count: u32,
) -> Result<Vec<MonthlyImpact>, EcoError> {
    let habits = convert_habits(habits)?;
    Ok(aggregate::monthly_impact_trend(&habits, month_count, today()))
}

#[uniffi::export]
pub fn impact_summary(habits: Vec<FfiHabit>) -> Result<ImpactSummary, EcoError> {
    let habits = convert_habits(habits)?;
    Ok(aggregate::impact_summary(&habits, today(), &EngineConfig::default()))
}

#[uniffi::export]
pub fn format_impact(value: f64, unit: ImpactUnit) -> String {
    format_impact_value(value, unit)
}

#[uniffi::export]
pub fn level_for_xp(xp: u32) -> u32 {
    progression::calculate_level(xp)
}

#[uniffi::export]
pub fn xp_for_next_level(xp: u32) -> u32 {
    progression::xp_for_next_level(xp)
}

#[uniffi::export]
pub fn current_streak(habits: Vec<FfiHabit>) -> Result<u32, EcoError> {
    Ok(progression::calculate_streak(&convert_habits(habits)?, today()))
}

#[uniffi::export]
pub fn badge_unlocks(
    user: FfiUserProgress,
    habits: Vec<FfiHabit>,
) -> Result<Vec<FfiBadge>, EcoError> {
    let user = UserProgress::try_from(user)?;
    let habits = convert_habits(habits)?;
    Ok(badges::check_badge_unlocks(&user, &habits, Utc::now())
        .into_iter()
        .map(FfiBadge::from)
        .collect())
}

#[uniffi::export]
pub fn milestone_progress(
    user: FfiUserProgress,
    habits: Vec<FfiHabit>,
) -> Result<Vec<MilestoneProgress>, EcoError> {
    let user = UserProgress::try_from(user)?;
    let habits = convert_habits(habits)?;
    Ok(milestones::milestone_progress(&user, &habits))
}

#[uniffi::export]
pub fn habit_statistics(habits: Vec<FfiHabit>) -> Result<HabitStats, EcoError> {
    Ok(stats::habit_stats(&convert_habits(habits)?))
}

/// Ranked rows; `limit` defaults to the configured leaderboard size.
#[uniffi::export]
pub fn leaderboard(entries: Vec<LeaderboardEntry>, limit: Option<u32>) -> Vec<RankedEntry> {
    let limit = limit.map_or(EngineConfig::default().leaderboard_limit, |l| l as usize);
    rank_leaderboard(&entries, limit)
}
