//! Configuration types for the planning engine.
//!
//! This module contains the calculation constants and the per-invocation
//! overrides that may replace individual values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Rates and working-time constants read by the calculation stages.
///
/// Constants are read-only for the duration of a calculation.
///
/// # Example
///
/// ```
/// use planning_engine::config::CalculationConstants;
/// use rust_decimal::Decimal;
///
/// let constants = CalculationConstants::default();
/// assert_eq!(constants.social_security_rate, Decimal::new(141, 3));
/// assert_eq!(constants.pension_rate, Decimal::new(2, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationConstants {
    /// Employer social security charge as a fraction of gross salary.
    pub social_security_rate: Decimal,
    /// Employer pension contribution as a fraction of gross salary.
    pub pension_rate: Decimal,
    /// Value added tax rate.
    pub vat_rate: Decimal,
    /// Standard working hours per day.
    pub working_hours: Decimal,
    /// Standard working days per month.
    pub working_days_per_month: Decimal,
}

impl Default for CalculationConstants {
    fn default() -> Self {
        Self {
            social_security_rate: Decimal::new(141, 3),
            pension_rate: Decimal::new(2, 2),
            vat_rate: Decimal::new(25, 2),
            working_hours: Decimal::new(8, 0),
            working_days_per_month: Decimal::new(21, 0),
        }
    }
}

impl CalculationConstants {
    /// Returns a copy with every overridden value replaced, without range
    /// checks.
    pub fn merge(&self, overrides: &ConstantOverrides) -> Self {
        Self {
            social_security_rate: overrides
                .social_security_rate
                .unwrap_or(self.social_security_rate),
            pension_rate: overrides.pension_rate.unwrap_or(self.pension_rate),
            vat_rate: overrides.vat_rate.unwrap_or(self.vat_rate),
            working_hours: overrides.working_hours.unwrap_or(self.working_hours),
            working_days_per_month: overrides
                .working_days_per_month
                .unwrap_or(self.working_days_per_month),
        }
    }

    /// Returns a copy with every overridden value replaced.
    ///
    /// The merged constants are validated; an out-of-range override returns
    /// `InvalidConstant`.
    ///
    /// # Example
    ///
    /// ```
    /// use planning_engine::config::{CalculationConstants, ConstantOverrides};
    /// use rust_decimal::Decimal;
    ///
    /// let overrides = ConstantOverrides {
    ///     pension_rate: Some(Decimal::new(45, 3)),
    ///     ..Default::default()
    /// };
    /// let merged = CalculationConstants::default().with_overrides(&overrides)?;
    /// assert_eq!(merged.pension_rate, Decimal::new(45, 3));
    /// assert_eq!(merged.social_security_rate, Decimal::new(141, 3));
    /// # Ok::<(), planning_engine::error::EngineError>(())
    /// ```
    pub fn with_overrides(&self, overrides: &ConstantOverrides) -> EngineResult<Self> {
        let merged = self.merge(overrides);
        merged.validate()?;
        Ok(merged)
    }

    /// Checks that rates lie in `[0, 1]` and working time is positive.
    pub fn validate(&self) -> EngineResult<()> {
        let rates = [
            ("social_security_rate", self.social_security_rate),
            ("pension_rate", self.pension_rate),
            ("vat_rate", self.vat_rate),
        ];
        for (name, rate) in rates {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(EngineError::InvalidConstant {
                    name: name.to_string(),
                    message: format!("must be between 0 and 1, got {}", rate),
                });
            }
        }

        let durations = [
            ("working_hours", self.working_hours),
            ("working_days_per_month", self.working_days_per_month),
        ];
        for (name, value) in durations {
            if value <= Decimal::ZERO {
                return Err(EngineError::InvalidConstant {
                    name: name.to_string(),
                    message: format!("must be greater than 0, got {}", value),
                });
            }
        }

        Ok(())
    }
}

/// Per-invocation replacements for individual constants.
///
/// Absent values keep the configured constant. Keys are accepted in
/// snake_case or camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstantOverrides {
    /// Replacement social security rate.
    #[serde(alias = "socialSecurityRate", skip_serializing_if = "Option::is_none")]
    pub social_security_rate: Option<Decimal>,
    /// Replacement pension rate.
    #[serde(alias = "pensionRate", skip_serializing_if = "Option::is_none")]
    pub pension_rate: Option<Decimal>,
    /// Replacement VAT rate.
    #[serde(alias = "vatRate", skip_serializing_if = "Option::is_none")]
    pub vat_rate: Option<Decimal>,
    /// Replacement working hours per day.
    #[serde(alias = "workingHours", skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<Decimal>,
    /// Replacement working days per month.
    #[serde(alias = "workingDaysPerMonth", skip_serializing_if = "Option::is_none")]
    pub working_days_per_month: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(CalculationConstants::default().validate().is_ok());
    }

    #[test]
    fn test_empty_overrides_keep_constants() {
        let constants = CalculationConstants::default();
        let merged = constants
            .with_overrides(&ConstantOverrides::default())
            .unwrap();
        assert_eq!(merged, constants);
    }

    #[test]
    fn test_merge_does_not_validate() {
        let overrides = ConstantOverrides {
            pension_rate: Some(dec("3")),
            ..Default::default()
        };
        let merged = CalculationConstants::default().merge(&overrides);
        assert_eq!(merged.pension_rate, dec("3"));
        assert!(merged.validate().is_err());
    }

    #[test]
    fn test_rate_above_one_is_rejected() {
        let overrides = ConstantOverrides {
            social_security_rate: Some(dec("1.41")),
            ..Default::default()
        };
        let result = CalculationConstants::default().with_overrides(&overrides);
        match result {
            Err(EngineError::InvalidConstant { name, message }) => {
                assert_eq!(name, "social_security_rate");
                assert!(message.contains("1.41"));
            }
            other => panic!("Expected InvalidConstant, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let overrides = ConstantOverrides {
            vat_rate: Some(dec("-0.1")),
            ..Default::default()
        };
        assert!(
            CalculationConstants::default()
                .with_overrides(&overrides)
                .is_err()
        );
    }

    #[test]
    fn test_zero_working_days_is_rejected() {
        let overrides = ConstantOverrides {
            working_days_per_month: Some(Decimal::ZERO),
            ..Default::default()
        };
        match CalculationConstants::default().with_overrides(&overrides) {
            Err(EngineError::InvalidConstant { name, .. }) => {
                assert_eq!(name, "working_days_per_month");
            }
            other => panic!("Expected InvalidConstant, got {:?}", other),
        }
    }

    #[test]
    fn test_overrides_accept_camel_case_keys() {
        let json = r#"{ "socialSecurityRate": "0.15", "pension_rate": "0.03" }"#;
        let overrides: ConstantOverrides = serde_json::from_str(json).unwrap();
        assert_eq!(overrides.social_security_rate, Some(dec("0.15")));
        assert_eq!(overrides.pension_rate, Some(dec("0.03")));
        assert_eq!(overrides.vat_rate, None);
    }
}
