//! Calculation context shared by the pipeline stages.

use crate::config::CalculationConstants;
use crate::models::{AuditWarning, BusinessPlanningData, OfficeField, RoleLevelField, role_levels};

/// The in-progress data set and the constants of one calculation.
///
/// A context is built fresh for every invocation and owned by it. Stages read
/// earlier results from `data` and write their own fields back into it.
#[derive(Debug, Clone)]
pub struct CalculationContext {
    /// The data set being derived, starting as a copy of the input.
    pub data: BusinessPlanningData,
    /// Constants for this run.
    pub constants: CalculationConstants,
    warnings: Vec<AuditWarning>,
}

impl CalculationContext {
    /// Creates a context from a copy of the input and the run's constants.
    pub fn new(input: &BusinessPlanningData, constants: CalculationConstants) -> Self {
        Self {
            data: input.clone(),
            constants,
            warnings: Vec::new(),
        }
    }

    /// Records a missing-input warning.
    pub fn warn_missing(&mut self, message: impl Into<String>) {
        self.warnings.push(AuditWarning::missing_input(message));
    }

    /// Warns if any role/level cell of an input field is absent.
    ///
    /// Returns the number of absent cells.
    pub fn check_role_level_input(&mut self, field: RoleLevelField) -> usize {
        let missing = role_levels()
            .filter(|&(role, level)| !self.data.has_role_level(field, role, level))
            .count();
        if missing > 0 {
            self.warn_missing(format!(
                "{} missing for {} of 16 role/level pairs; treated as zero",
                field, missing
            ));
        }
        missing
    }

    /// Warns if an office-level input field is absent.
    ///
    /// Returns true if the field was absent.
    pub fn check_office_input(&mut self, field: OfficeField) -> bool {
        let missing = !self.data.has_office(field);
        if missing {
            self.warn_missing(format!("{} missing; treated as zero", field));
        }
        missing
    }

    /// Returns the warnings recorded so far.
    pub fn warnings(&self) -> &[AuditWarning] {
        &self.warnings
    }

    /// Consumes the context, returning the derived data and the warnings.
    pub fn into_parts(self) -> (BusinessPlanningData, Vec<AuditWarning>) {
        (self.data, self.warnings)
    }
}
