use thiserror::Error;

/// Error type for data crossing into the core from strings or foreign callers.
///
/// The calculators themselves are infallible; these only arise while parsing
/// records, enum names, or configuration.
#[derive(Error, Debug, Clone, PartialEq, uniffi::Error)]
#[uniffi(flat_error)]
pub enum EcoError {
    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("invalid timestamp '{value}': expected RFC 3339")]
    InvalidTimestamp { value: String },

    #[error("unknown habit category: {0}")]
    UnknownCategory(String),

    #[error("unknown badge rarity: {0}")]
    UnknownRarity(String),

    #[error("unknown impact unit: {0}")]
    UnknownUnit(String),

    #[error("unknown habit template: {0}")]
    UnknownTemplate(String),

    #[error("invalid config: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eco_error_display() {
        let err = EcoError::InvalidDate {
            value: "2024/01/01".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date '2024/01/01': expected YYYY-MM-DD"
        );

        let err = EcoError::UnknownCategory("travel".to_string());
        assert_eq!(err.to_string(), "unknown habit category: travel");

        let err = EcoError::UnknownUnit("lbs".to_string());
        assert_eq!(err.to_string(), "unknown impact unit: lbs");

        let err = EcoError::Config("expected a table".to_string());
        assert_eq!(err.to_string(), "invalid config: expected a table");
    }
}
