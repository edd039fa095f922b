//! Configuration loading and management for the planning engine.
//!
//! This module provides the calculation constants (social charge rates, VAT,
//! working time), their per-invocation overrides, and loading from YAML.
//!
//! # Example
//!
//! ```no_run
//! use planning_engine::config::ConstantsLoader;
//!
//! let loader = ConstantsLoader::load("./config/constants.yaml").unwrap();
//! println!("Social security rate: {}", loader.constants().social_security_rate);
//! ```

mod loader;
mod types;

pub use loader::ConstantsLoader;
pub use types::{CalculationConstants, ConstantOverrides};
