//! Calculation result models for the planning engine.
//!
//! This module contains the [`PlanningResult`] type and the audit structures
//! that record what each pipeline stage read, wrote and assumed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::BusinessPlanningData;
use crate::validation::ValidationOutcome;

/// A single step in the audit trace recording one pipeline stage.
///
/// # Example
///
/// ```
/// use planning_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     stage_id: "salary".to_string(),
///     stage_name: "Salary-Derived Fields".to_string(),
///     input: serde_json::json!({"social_security_rate": "0.141"}),
///     output: serde_json::json!({"pairs_processed": 16}),
///     reasoning: "Derived social security, pension and total salary cost".to_string(),
/// };
/// assert_eq!(step.stage_id, "salary");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the stage.
    pub stage_id: String,
    /// The human-readable name of the stage.
    pub stage_name: String,
    /// Summary of the inputs the stage read.
    pub input: serde_json::Value,
    /// Summary of the fields the stage wrote.
    pub output: serde_json::Value,
    /// Human-readable explanation of the computation.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings never change results; they flag inputs that were substituted
/// with zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a low-severity warning for an input that was treated as zero.
    pub fn missing_input(message: impl Into<String>) -> Self {
        Self {
            code: "MISSING_INPUT".to_string(),
            message: message.into(),
            severity: "low".to_string(),
        }
    }
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use planning_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 42,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The pipeline stages in execution order.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a planning calculation.
///
/// Wraps the fully derived data set together with the screening results of
/// the validation collaborator and the audit trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The input data with every derived field populated.
    pub data: BusinessPlanningData,
    /// Input cells that failed validation. These do not affect the result.
    pub validation: Vec<ValidationOutcome>,
    /// Audit trace of the pipeline stages.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_sample_step() -> AuditStep {
        AuditStep {
            step_number: 2,
            stage_id: "revenue".to_string(),
            stage_name: "Revenue".to_string(),
            input: serde_json::json!({"pairs": 16}),
            output: serde_json::json!({"net_sales_total": "5184000"}),
            reasoning: "Summed price x utr x hours x fte".to_string(),
        }
    }

    #[test]
    fn test_missing_input_warning_fields() {
        let warning = AuditWarning::missing_input("price missing");
        assert_eq!(warning.code, "MISSING_INPUT");
        assert_eq!(warning.severity, "low");
        assert_eq!(warning.message, "price missing");
    }

    #[test]
    fn test_audit_step_serialization() {
        let json = serde_json::to_string(&create_sample_step()).unwrap();
        assert!(json.contains("\"step_number\":2"));
        assert!(json.contains("\"stage_id\":\"revenue\""));
        assert!(json.contains("\"net_sales_total\":\"5184000\""));
    }

    #[test]
    fn test_planning_result_round_trip() {
        let result = PlanningResult {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            data: BusinessPlanningData::default(),
            validation: vec![],
            audit_trace: AuditTrace {
                steps: vec![create_sample_step()],
                warnings: vec![],
                duration_us: 10,
            },
        };

        let json = serde_json::to_string(&result).unwrap();
        let parsed: PlanningResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
