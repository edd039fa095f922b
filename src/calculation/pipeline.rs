//! The derived-field calculation pipeline.
//!
//! Runs the four stages in dependency order over one private context:
//!
//! 1. salary-derived fields (role/level)
//! 2. revenue (office level)
//! 3. expenses (office level)
//! 4. financial summary (office level)
//!
//! Each stage reads what the earlier stages wrote. Missing inputs read as zero,
//! so running a stage early would silently produce wrong numbers; the order is
//! fixed here and nowhere else.

use std::time::Instant;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::config::{CalculationConstants, ConstantOverrides};
use crate::models::{AuditStep, AuditTrace, BusinessPlanningData, OfficeField, PlanningResult};
use crate::validation::validate_planning_data;

use super::context::CalculationContext;
use super::expenses::calculate_expenses;
use super::financial_summary::calculate_financial_summary;
use super::revenue::calculate_revenue;
use super::salary::calculate_salary_fields;

type Stage = fn(&mut CalculationContext, u32) -> AuditStep;

const STAGES: [Stage; 4] = [
    calculate_salary_fields,
    calculate_revenue,
    calculate_expenses,
    calculate_financial_summary,
];

/// Runs every stage over the context and returns their audit steps.
fn run_stages(context: &mut CalculationContext) -> Vec<AuditStep> {
    let mut steps = Vec::with_capacity(STAGES.len());
    for (step_number, stage) in (1u32..).zip(STAGES) {
        steps.push(stage(context, step_number));
    }
    steps
}

/// Computes every derived field of a planning data set.
///
/// The overrides are applied on top of the default constants without range
/// checks. Never fails: absent inputs are treated as zero series.
///
/// # Example
///
/// ```
/// use planning_engine::calculation::calculate_derived_fields;
/// use planning_engine::config::ConstantOverrides;
/// use planning_engine::models::{sample_business_planning_data, OfficeField};
/// use rust_decimal::Decimal;
///
/// let input = sample_business_planning_data();
/// let result = calculate_derived_fields(&input, &ConstantOverrides::default());
///
/// let net_sales = result.office(OfficeField::NetSales);
/// assert_eq!(net_sales.months[0], Decimal::new(432000, 0));
/// assert_eq!(net_sales.total, Decimal::new(432000 * 12, 0));
/// ```
pub fn calculate_derived_fields(
    input: &BusinessPlanningData,
    overrides: &ConstantOverrides,
) -> BusinessPlanningData {
    let constants = CalculationConstants::default().merge(overrides);
    let mut context = CalculationContext::new(input, constants);
    run_stages(&mut context);
    context.data
}

/// Computes every derived field and records an audit trace.
///
/// Produces the same data as [`calculate_derived_fields`] with the same
/// constants, plus one audit step per stage, a warning per missing input, and
/// the validation failures found in the input.
pub fn run_calculation(
    input: &BusinessPlanningData,
    constants: &CalculationConstants,
) -> PlanningResult {
    let start_time = Instant::now();

    let mut context = CalculationContext::new(input, constants.clone());
    let steps = run_stages(&mut context);
    let (data, warnings) = context.into_parts();
    let validation = validate_planning_data(input);

    let duration_us = u64::try_from(start_time.elapsed().as_micros()).unwrap_or(u64::MAX);
    info!(
        steps = steps.len(),
        warnings = warnings.len(),
        validation_failures = validation.len(),
        ebitda = %data.office(OfficeField::Ebitda).total,
        duration_us,
        "Planning calculation completed"
    );

    PlanningResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        data,
        validation,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    }
}
