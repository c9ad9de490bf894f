use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub name: String,
    pub green_score: u32,
    pub current_streak: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct RankedEntry {
    /// 1-based position
    pub rank: u32,
    pub entry: LeaderboardEntry,
}

fn sorted(entries: &[LeaderboardEntry]) -> Vec<&LeaderboardEntry> {
    let mut sorted: Vec<&LeaderboardEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.green_score.cmp(&a.green_score));
    sorted
}

/// Entries ordered by green score, highest first, keeping input order for
/// ties, truncated to `limit`.
pub fn rank_leaderboard(entries: &[LeaderboardEntry], limit: usize) -> Vec<RankedEntry> {
    sorted(entries)
        .into_iter()
        .take(limit)
        .zip(1u32..)
        .map(|(entry, rank)| RankedEntry {
            rank,
            entry: entry.clone(),
        })
        .collect()
}

/// 1-based rank of `user_id` over all entries, ignoring any display limit.
pub fn rank_of(entries: &[LeaderboardEntry], user_id: &str) -> Option<u32> {
    sorted(entries)
        .iter()
        .position(|e| e.user_id == user_id)
        .and_then(|i| u32::try_from(i + 1).ok())
}
