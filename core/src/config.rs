use serde::{Deserialize, Serialize};

use crate::error::EcoError;

/// Tunables for dashboard-style aggregations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Months in the impact trend series
    pub trend_months: u32,
    pub weekly_window_days: u32,
    pub monthly_window_days: u32,
    /// Rows returned by leaderboard ranking
    pub leaderboard_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            trend_months: 6,
            weekly_window_days: 7,
            monthly_window_days: 30,
            leaderboard_limit: 10,
        }
    }
}

impl EngineConfig {
    /// Parse from TOML. Missing keys take their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, EcoError> {
        let config: EngineConfig =
            toml::from_str(input).map_err(|e| EcoError::Config(e.message().to_string()))?;
        tracing::debug!(?config, "loaded engine config");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, EcoError> {
        toml::to_string(self).map_err(|e| EcoError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = EngineConfig::from_toml_str("trend_months = 12\nleaderboard_limit = 25\n")
            .unwrap();
        assert_eq!(config.trend_months, 12);
        assert_eq!(config.leaderboard_limit, 25);
        assert_eq!(config.weekly_window_days, 7);
        assert_eq!(config.monthly_window_days, 30);
    }

    #[test]
    fn test_invalid_type_is_config_error() {
        let err = EngineConfig::from_toml_str("trend_months = \"six\"").unwrap_err();
        assert!(matches!(err, EcoError::Config(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EngineConfig {
            trend_months: 3,
            ..EngineConfig::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(EngineConfig::from_toml_str(&text).unwrap(), config);
    }
}
