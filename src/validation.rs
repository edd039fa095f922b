//! Input validation for planning data.
//!
//! The calculation pipeline accepts any input and substitutes zero for what is
//! missing. Screening edits is the job of this module: it reports which cells
//! break their constraints but never errors, and the pipeline result does not
//! depend on it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{BusinessPlanningData, Month, MonthlyValue, OfficeField, RoleLevelField};

/// Constraints a single value must satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldConstraints {
    /// Whether a value must be present.
    pub required: bool,
    /// Inclusive lower bound.
    pub min: Option<Decimal>,
    /// Inclusive upper bound.
    pub max: Option<Decimal>,
}

impl FieldConstraints {
    /// Constraints requiring a value of at least zero, if present.
    pub fn non_negative() -> Self {
        Self {
            required: false,
            min: Some(Decimal::ZERO),
            max: None,
        }
    }
}

/// The result of validating one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// The field that was validated, including its grid position.
    pub field: String,
    /// Whether every constraint was satisfied.
    pub valid: bool,
    /// Human-readable descriptions of each failed constraint.
    pub messages: Vec<String>,
}

/// Validates a single value against its constraints.
///
/// # Example
///
/// ```
/// use planning_engine::validation::{validate_field, FieldConstraints};
/// use rust_decimal::Decimal;
///
/// let constraints = FieldConstraints {
///     required: true,
///     min: Some(Decimal::ZERO),
///     max: Some(Decimal::ONE),
/// };
///
/// assert!(validate_field("utr", Some(Decimal::new(75, 2)), &constraints).valid);
///
/// let outcome = validate_field("utr", Some(Decimal::new(12, 1)), &constraints);
/// assert!(!outcome.valid);
/// assert_eq!(outcome.messages, vec!["utr must be at most 1, got 1.2"]);
///
/// assert!(!validate_field("utr", None, &constraints).valid);
/// ```
pub fn validate_field(
    field: &str,
    value: Option<Decimal>,
    constraints: &FieldConstraints,
) -> ValidationOutcome {
    let mut messages = Vec::new();

    match value {
        None if constraints.required => messages.push(format!("{} is required", field)),
        None => {}
        Some(value) => {
            if let Some(min) = constraints.min.filter(|min| value < *min) {
                messages.push(format!("{} must be at least {}, got {}", field, min, value));
            }
            if let Some(max) = constraints.max.filter(|max| value > *max) {
                messages.push(format!("{} must be at most {}, got {}", field, max, value));
            }
        }
    }

    ValidationOutcome {
        field: field.to_string(),
        valid: messages.is_empty(),
        messages,
    }
}

/// Returns the product's default constraints for a role/level field.
///
/// Utilization is a fraction in `[0, 1]`; every other input is non-negative.
pub fn default_constraints(field: RoleLevelField) -> FieldConstraints {
    match field {
        RoleLevelField::Utr => FieldConstraints {
            required: false,
            min: Some(Decimal::ZERO),
            max: Some(Decimal::ONE),
        },
        _ => FieldConstraints::non_negative(),
    }
}

/// Screens every raw input cell of a planning data set.
///
/// Covers the five role/level inputs and the eight office cost line items.
/// Missing cells are not reported. Returns only the failing outcomes, one per
/// cell, with a message for each offending month.
pub fn validate_planning_data(data: &BusinessPlanningData) -> Vec<ValidationOutcome> {
    let mut failures = Vec::new();

    for field in RoleLevelField::INPUTS {
        let Some(roles) = data.role_level.get(&field) else {
            continue;
        };
        let constraints = default_constraints(field);
        for (role, levels) in roles {
            for (level, value) in levels {
                let label = format!("{}[{}][{}]", field, role, level);
                if let Some(outcome) = validate_series(&label, value, &constraints) {
                    failures.push(outcome);
                }
            }
        }
    }

    let constraints = FieldConstraints::non_negative();
    for field in OfficeField::OPERATING_EXPENSES {
        let outcome = data
            .office_level
            .get(&field)
            .and_then(|value| validate_series(field.key(), value, &constraints));
        failures.extend(outcome);
    }

    failures
}

fn validate_series(
    label: &str,
    value: &MonthlyValue,
    constraints: &FieldConstraints,
) -> Option<ValidationOutcome> {
    let messages: Vec<String> = Month::ALL
        .iter()
        .flat_map(|&month| {
            let name = format!("{}.{}", label, month.key());
            validate_field(&name, Some(value.get(month)), constraints).messages
        })
        .collect();

    if messages.is_empty() {
        None
    } else {
        Some(ValidationOutcome {
            field: label.to_string(),
            valid: false,
            messages,
        })
    }
}
