//! Configuration loading functionality.
//!
//! This module provides the [`ConstantsLoader`] type for loading calculation
//! constants from a YAML file.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};

use super::types::CalculationConstants;

/// Loads and provides access to calculation constants.
///
/// The constants file is a flat YAML mapping. Every key is optional and falls
/// back to the built-in default:
///
/// ```text
/// social_security_rate: "0.141"
/// pension_rate: "0.02"
/// vat_rate: "0.25"
/// working_hours: "8"
/// working_days_per_month: "21"
/// ```
///
/// # Example
///
/// ```no_run
/// use planning_engine::config::ConstantsLoader;
///
/// let loader = ConstantsLoader::load("./config/constants.yaml")?;
/// println!("Pension rate: {}", loader.constants().pension_rate);
/// # Ok::<(), planning_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConstantsLoader {
    constants: CalculationConstants,
}

impl ConstantsLoader {
    /// Loads constants from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConstantsLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - A constant is out of range (`InvalidConstant`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let constants = Self::parse(&content).map_err(|e| match e {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        debug!(path = %path_str, "Loaded calculation constants");
        Ok(Self { constants })
    }

    /// Loads constants from a file, falling back to the defaults if the file
    /// does not exist. Parse and range errors are still returned.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        match Self::load(path) {
            Err(EngineError::ConfigNotFound { path }) => {
                warn!(path = %path, "Constants file not found, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Parses and validates constants from YAML text.
    ///
    /// ```
    /// use planning_engine::config::ConstantsLoader;
    /// use rust_decimal::Decimal;
    ///
    /// let constants = ConstantsLoader::parse("vat_rate: \"0.12\"")?;
    /// assert_eq!(constants.vat_rate, Decimal::new(12, 2));
    /// assert_eq!(constants.pension_rate, Decimal::new(2, 2));
    /// # Ok::<(), planning_engine::error::EngineError>(())
    /// ```
    pub fn parse(content: &str) -> EngineResult<CalculationConstants> {
        // An empty document is YAML null rather than an empty mapping.
        let constants: CalculationConstants = if content.trim().is_empty() {
            CalculationConstants::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?
        };
        constants.validate()?;
        Ok(constants)
    }

    /// Returns the loaded constants.
    pub fn constants(&self) -> &CalculationConstants {
        &self.constants
    }

    /// Consumes the loader and returns the constants.
    pub fn into_constants(self) -> CalculationConstants {
        self.constants
    }
}
