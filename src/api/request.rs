//! Request types for the planning engine API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use serde::{Deserialize, Serialize};

use crate::config::ConstantOverrides;
use crate::models::BusinessPlanningData;

/// Request body for the `/calculate` endpoint.
///
/// # Example
///
/// ```
/// use planning_engine::api::CalculationRequest;
///
/// let json = r#"{
///     "data": {
///         "officeLevel": { "office_rent": { "jan": "50000" } },
///         "roleLevel": {}
///     },
///     "constants": { "socialSecurityRate": "0.15" }
/// }"#;
///
/// let request: CalculationRequest = serde_json::from_str(json).unwrap();
/// assert!(request.constants.social_security_rate.is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The raw planning inputs.
    pub data: BusinessPlanningData,
    /// Optional replacements for the server's constants.
    #[serde(default)]
    pub constants: ConstantOverrides,
}
