//! Salary-derived fields.
//!
//! First pipeline stage. Derives employer social security, pension and total
//! salary cost per head for every role/level pair from the gross salary.

use tracing::debug;

use crate::models::{AuditStep, RoleLevelField, role_levels};

use super::context::CalculationContext;
use super::primitives::{add_monthly_values, calculate_total, multiply_by_constant};

/// Derives `social_security`, `pension` and `total_salary_cost`.
///
/// For each of the 16 role/level pairs:
/// - `social_security = gross_salary * social_security_rate`
/// - `pension = gross_salary * pension_rate`
/// - `total_salary_cost = gross_salary + social_security + pension`
///
/// A pair without gross salary is treated as zero salary, so all three
/// outputs are written as zero series. Every output is finalized.
///
/// # Example
///
/// ```
/// use planning_engine::calculation::{calculate_salary_fields, CalculationContext};
/// use planning_engine::config::CalculationConstants;
/// use planning_engine::models::{
///     BusinessPlanningData, Level, MonthlyValue, Role, RoleLevelField,
/// };
/// use rust_decimal::Decimal;
///
/// let mut input = BusinessPlanningData::default();
/// input.set_role_level(
///     RoleLevelField::GrossSalary,
///     Role::Sales,
///     Level::B,
///     MonthlyValue::uniform(Decimal::new(1000, 0)),
/// );
///
/// let mut context = CalculationContext::new(&input, CalculationConstants::default());
/// calculate_salary_fields(&mut context, 1);
///
/// let cost = context.data.role_level(RoleLevelField::TotalSalaryCost, Role::Sales, Level::B);
/// assert_eq!(cost.months[0], Decimal::new(1161, 0));
/// assert_eq!(cost.total, Decimal::new(13932, 0));
/// ```
pub fn calculate_salary_fields(context: &mut CalculationContext, step_number: u32) -> AuditStep {
    let missing = context.check_role_level_input(RoleLevelField::GrossSalary);
    let social_security_rate = context.constants.social_security_rate;
    let pension_rate = context.constants.pension_rate;

    let mut pairs_processed = 0u32;
    for (role, level) in role_levels() {
        let gross_salary = context
            .data
            .role_level(RoleLevelField::GrossSalary, role, level);

        let mut social_security = multiply_by_constant(&gross_salary, social_security_rate);
        calculate_total(&mut social_security);

        let mut pension = multiply_by_constant(&gross_salary, pension_rate);
        calculate_total(&mut pension);

        let mut total_salary_cost = add_monthly_values(&[gross_salary, social_security, pension]);
        calculate_total(&mut total_salary_cost);

        let data = &mut context.data;
        data.set_role_level(RoleLevelField::SocialSecurity, role, level, social_security);
        data.set_role_level(RoleLevelField::Pension, role, level, pension);
        data.set_role_level(RoleLevelField::TotalSalaryCost, role, level, total_salary_cost);
        pairs_processed += 1;
    }

    debug!(
        pairs_processed,
        missing_gross_salary = missing,
        "Salary-derived fields calculated"
    );

    AuditStep {
        step_number,
        stage_id: "salary".to_string(),
        stage_name: "Salary-Derived Fields".to_string(),
        input: serde_json::json!({
            "social_security_rate": social_security_rate.to_string(),
            "pension_rate": pension_rate.to_string(),
            "missing_gross_salary_pairs": missing
        }),
        output: serde_json::json!({
            "fields": ["social_security", "pension", "total_salary_cost"],
            "pairs_processed": pairs_processed
        }),
        reasoning: format!(
            "gross_salary x {} = social_security, gross_salary x {} = pension, \
             total_salary_cost = gross_salary + social_security + pension for {} role/level pairs",
            social_security_rate, pension_rate, pairs_processed
        ),
    }
}
