use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EcoError;
use crate::impact::round_to;

/// Unit of a raw impact magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
pub enum ImpactUnit {
    #[serde(rename = "kg")]
    Kilograms,
    #[serde(rename = "L")]
    Litres,
}

impl ImpactUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            ImpactUnit::Kilograms => "kg",
            ImpactUnit::Litres => "L",
        }
    }

    /// Unit shown once a value reaches 1000 of the base unit.
    fn large_symbol(&self) -> &'static str {
        match self {
            ImpactUnit::Kilograms => "tons",
            ImpactUnit::Litres => "m³",
        }
    }
}

impl fmt::Display for ImpactUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ImpactUnit {
    type Err = EcoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kg" => Ok(ImpactUnit::Kilograms),
            "L" => Ok(ImpactUnit::Litres),
            other => Err(EcoError::UnknownUnit(other.to_string())),
        }
    }
}

/// Render an impact magnitude for display.
///
/// Tiers are checked in order against the raw value: zero, large-unit
/// conversion at 1000, below 0.01, two decimals below 1, one decimal below
/// 10, whole numbers otherwise. Halves round up.
pub fn format_impact_value(value: f64, unit: ImpactUnit) -> String {
    if value == 0.0 {
        return format!("0 {unit}");
    }
    if value >= 1000.0 {
        return format!("{:.1} {}", round_to(value / 1000.0, 1), unit.large_symbol());
    }
    if value < 0.01 {
        return format!("<0.01 {unit}");
    }
    if value < 1.0 {
        return format!("{:.2} {unit}", round_to(value, 2));
    }
    if value < 10.0 {
        return format!("{:.1} {unit}", round_to(value, 1));
    }
    format!("{:.0} {unit}", value.round())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero() {
        assert_eq!(format_impact_value(0.0, ImpactUnit::Kilograms), "0 kg");
        assert_eq!(format_impact_value(0.0, ImpactUnit::Litres), "0 L");
    }

    #[test]
    fn test_format_tiers() {
        assert_eq!(format_impact_value(0.005, ImpactUnit::Kilograms), "<0.01 kg");
        assert_eq!(format_impact_value(0.256, ImpactUnit::Kilograms), "0.26 kg");
        assert_eq!(format_impact_value(5.4321, ImpactUnit::Kilograms), "5.4 kg");
        assert_eq!(format_impact_value(42.6, ImpactUnit::Litres), "43 L");
        assert_eq!(format_impact_value(999.4, ImpactUnit::Kilograms), "999 kg");
    }

    #[test]
    fn test_format_large_units() {
        assert_eq!(format_impact_value(1500.0, ImpactUnit::Kilograms), "1.5 tons");
        assert_eq!(format_impact_value(1000.0, ImpactUnit::Kilograms), "1.0 tons");
        assert_eq!(format_impact_value(2300.0, ImpactUnit::Litres), "2.3 m³");
    }

    #[test]
    fn test_format_rounds_halves_up() {
        assert_eq!(format_impact_value(1.25, ImpactUnit::Kilograms), "1.3 kg");
        assert_eq!(format_impact_value(0.125, ImpactUnit::Kilograms), "0.13 kg");
        assert_eq!(format_impact_value(2.25, ImpactUnit::Litres), "2.3 L");
        assert_eq!(format_impact_value(1250.0, ImpactUnit::Kilograms), "1.3 tons");
    }

    #[test]
    fn test_format_has_no_thousands_separator() {
        assert_eq!(format_impact_value(1_234_000.0, ImpactUnit::Kilograms), "1234.0 tons");
    }

    #[test]
    fn test_unit_parse() {
        assert_eq!("kg".parse::<ImpactUnit>(), Ok(ImpactUnit::Kilograms));
        assert_eq!("L".parse::<ImpactUnit>(), Ok(ImpactUnit::Litres));
        assert!("lbs".parse::<ImpactUnit>().is_err());
    }
}
