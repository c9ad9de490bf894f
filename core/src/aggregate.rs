//! Impact aggregation over habit collections.
//!
//! Every function here takes the full habit history and a reference date and
//! recomputes from scratch. Nothing is cached between calls.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::impact::{calculate_habit_impact, EnvironmentalImpact};
use crate::models::Habit;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Aggregated impact for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyImpact {
    /// `YYYY-MM`
    pub month_key: String,
    /// Short display label, e.g. `Jan 25`
    #[serde(rename = "month")]
    pub label: String,
    pub impact: EnvironmentalImpact,
}

/// Impact figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct ImpactSummary {
    pub total: EnvironmentalImpact,
    pub weekly: EnvironmentalImpact,
    pub monthly: EnvironmentalImpact,
    pub trend: Vec<MonthlyImpact>,
}

/// Sum of per-habit impacts. Empty input yields [`EnvironmentalImpact::ZERO`].
pub fn calculate_total_impact(habits: &[Habit]) -> EnvironmentalImpact {
    habits.iter().map(calculate_habit_impact).sum()
}

/// Impact of habits dated on or after `today - window_days`.
///
/// A window of 0 covers only habits logged on `today`.
pub fn impact_by_timeframe(
    habits: &[Habit],
    window_days: u32,
    today: NaiveDate,
) -> EnvironmentalImpact {
    let cutoff = today
        .checked_sub_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MIN);
    tracing::debug!(%cutoff, window_days, "aggregating impact window");

    habits
        .iter()
        .filter(|h| h.date >= cutoff)
        .map(calculate_habit_impact)
        .sum()
}

/// One entry per calendar month for the last `month_count` months ending
/// with the month of `today`, oldest first. Empty months are zero entries.
pub fn monthly_impact_trend(
    habits: &[Habit],
    month_count: u32,
    today: NaiveDate,
) -> Vec<MonthlyImpact> {
    (0..month_count)
        .rev()
        .map(|months_back| {
            let (year, month) = shift_month(today.year(), today.month(), months_back);
            let impact = habits
                .iter()
                .filter(|h| h.date.year() == year && h.date.month() == month)
                .map(calculate_habit_impact)
                .sum();
            MonthlyImpact {
                month_key: format!("{year:04}-{month:02}"),
                label: month_label(year, month),
                impact,
            }
        })
        .collect()
}

/// Total, weekly and monthly windows plus the trend, sized by `config`.
pub fn impact_summary(habits: &[Habit], today: NaiveDate, config: &EngineConfig) -> ImpactSummary {
    ImpactSummary {
        total: calculate_total_impact(habits),
        weekly: impact_by_timeframe(habits, config.weekly_window_days, today),
        monthly: impact_by_timeframe(habits, config.monthly_window_days, today),
        trend: monthly_impact_trend(habits, config.trend_months, today),
    }
}

/// Step back `months_back` calendar months from `year`/`month` (1-based).
fn shift_month(year: i32, month: u32, months_back: u32) -> (i32, u32) {
    let index = i64::from(year) * 12 + i64::from(month) - 1 - i64::from(months_back);
    (index.div_euclid(12) as i32, index.rem_euclid(12) as u32 + 1)
}

fn month_label(year: i32, month: u32) -> String {
    let name = MONTH_ABBREVIATIONS[(month as usize - 1) % 12];
    format!("{} {:02}", name, year.rem_euclid(100))
}
