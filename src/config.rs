//! Fee settings, layered from built-in defaults, an optional TOML file and
//! command-line overrides.
//!
//! ```toml
//! [fees]
//! platform_fee_percentage = "0.15"
//! rounding = "half_away_from_zero"
//! ```

use crate::domain::breakdown::{BreakdownCalculator, Rounding};
use crate::domain::money::FeeRate;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Settings {
    pub fee_rate: FeeRate,
    pub rounding: Rounding,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    fees: FeesSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FeesSection {
    platform_fee_percentage: Option<FeeRate>,
    rounding: Option<Rounding>,
}

impl Settings {
    /// Parses settings from TOML text; missing keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(contents)?;
        let defaults = Self::default();
        Ok(Self {
            fee_rate: file.fees.platform_fee_percentage.unwrap_or(defaults.fee_rate),
            rounding: file.fees.rounding.unwrap_or(defaults.rounding),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Applies command-line overrides on top of the loaded settings.
    pub fn with_overrides(self, fee_rate: Option<Decimal>, rounding: Option<Rounding>) -> Result<Self> {
        Ok(Self {
            fee_rate: fee_rate.map(FeeRate::new).transpose()?.unwrap_or(self.fee_rate),
            rounding: rounding.unwrap_or(self.rounding),
        })
    }

    pub fn calculator(&self) -> BreakdownCalculator {
        BreakdownCalculator::new(self.fee_rate, self.rounding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaymentError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.fee_rate.value(), dec!(0.15));
        assert_eq!(settings.rounding, Rounding::HalfAwayFromZero);
    }

    #[test]
    fn test_full_file() {
        let settings = Settings::from_toml_str(
            "[fees]\nplatform_fee_percentage = \"0.10\"\nrounding = \"half_even\"\n",
        )
        .unwrap();
        assert_eq!(settings.fee_rate.value(), dec!(0.10));
        assert_eq!(settings.rounding, Rounding::HalfEven);
    }

    #[test]
    fn test_partial_and_empty_files_keep_defaults() {
        let settings = Settings::from_toml_str("[fees]\nrounding = \"half_even\"\n").unwrap();
        assert_eq!(settings.fee_rate, FeeRate::default());

        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn test_invalid_files_rejected() {
        assert!(matches!(
            Settings::from_toml_str("[fees]\nplatform_fee_percentage = \"1.5\"\n"),
            Err(PaymentError::ConfigError(_))
        ));
        assert!(matches!(
            Settings::from_toml_str("[fees]\nrounding = \"up\"\n"),
            Err(PaymentError::ConfigError(_))
        ));
        assert!(matches!(
            Settings::from_toml_str("[fees]\nfee = \"0.1\"\n"),
            Err(PaymentError::ConfigError(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::default()
            .with_overrides(Some(dec!(0.2)), None)
            .unwrap();
        assert_eq!(settings.fee_rate.value(), dec!(0.2));
        assert_eq!(settings.rounding, Rounding::HalfAwayFromZero);

        assert!(matches!(
            Settings::default().with_overrides(Some(dec!(-0.2)), None),
            Err(PaymentError::ValidationError(_))
        ));
    }

    #[test]
    fn test_calculator_uses_settings() {
        let settings = Settings::default()
            .with_overrides(Some(dec!(0.1)), Some(Rounding::HalfEven))
            .unwrap();
        let breakdown = settings.calculator().compute(dec!(80).try_into().unwrap());
        assert_eq!(breakdown.platform_fee, dec!(8));
        assert_eq!(breakdown.technician_payout, dec!(72));
    }
}
