pub mod aggregate;
pub mod badges;
pub mod challenges;
pub mod config;
pub mod error;
pub mod factors;
pub mod ffi;
pub mod format;
pub mod impact;
pub mod leaderboard;
pub mod milestones;
pub mod models;
pub mod progression;
pub mod stats;
pub mod templates;

uniffi::setup_scaffolding!();

pub use aggregate::{
    calculate_total_impact, impact_by_timeframe, impact_summary, monthly_impact_trend,
    ImpactSummary, MonthlyImpact,
};
pub use badges::{check_badge_unlocks, BadgeDefinition, BadgeRule, BADGES};
pub use challenges::{Challenge, ChallengeKind};
pub use config::EngineConfig;
pub use error::EcoError;
pub use format::{format_impact_value, ImpactUnit};
pub use impact::{calculate_habit_impact, EnvironmentalImpact};
pub use models::{Badge, BadgeRarity, Habit, HabitCategory, HabitId, UserId, UserProgress};
pub use progression::{calculate_level, calculate_streak, xp_for_next_level, StreakTier};
pub use templates::{HabitTemplate, Multiplier};
