//! Core data models for the planning engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod dimension;
mod field;
mod month;
mod monthly_value;
mod planning_data;
mod sample;

pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, PlanningResult};
pub use dimension::{Level, Role, role_levels};
pub use field::{OfficeField, RoleLevelField};
pub use month::Month;
pub use monthly_value::MonthlyValue;
pub use planning_data::{BusinessPlanningData, OfficeData, RoleLevelData, RoleLevelGrid};
pub use sample::sample_business_planning_data;
