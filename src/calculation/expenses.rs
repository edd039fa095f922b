//! Expense aggregation.
//!
//! Third pipeline stage. Turns per-head salary cost into an office-level salary
//! expense and sums the fixed office cost line items.

use tracing::debug;

use crate::models::{AuditStep, OfficeField, RoleLevelField, role_levels};

use super::context::CalculationContext;
use super::primitives::{
    add_monthly_values, add_to_monthly_value, calculate_total, create_empty_monthly_value,
    multiply_monthly_values,
};

/// Derives `total_salary_expenses` and `total_operating_expenses`.
///
/// - `total_salary_expenses` is the sum over all 16 role/level pairs of
///   `total_salary_cost x fte`. Requires the salary stage to have run.
/// - `total_operating_expenses` is the sum of the eight office cost line items
///   in [`OfficeField::OPERATING_EXPENSES`]; absent items count as zero.
pub fn calculate_expenses(context: &mut CalculationContext, step_number: u32) -> AuditStep {
    let mut total_salary_expenses = create_empty_monthly_value();
    for (role, level) in role_levels() {
        let cost = context
            .data
            .role_level(RoleLevelField::TotalSalaryCost, role, level);
        let fte = context.data.role_level(RoleLevelField::Fte, role, level);
        add_to_monthly_value(&mut total_salary_expenses, &multiply_monthly_values(&[cost, fte]));
    }
    calculate_total(&mut total_salary_expenses);

    let missing_items: Vec<&'static str> = OfficeField::OPERATING_EXPENSES
        .into_iter()
        .filter(|&field| context.check_office_input(field))
        .map(OfficeField::key)
        .collect();

    let line_items = OfficeField::OPERATING_EXPENSES.map(|field| context.data.office(field));
    let mut total_operating_expenses = add_monthly_values(&line_items);
    calculate_total(&mut total_operating_expenses);

    context
        .data
        .set_office(OfficeField::TotalSalaryExpenses, total_salary_expenses);
    context
        .data
        .set_office(OfficeField::TotalOperatingExpenses, total_operating_expenses);

    debug!(
        total_salary_expenses = %total_salary_expenses.total,
        total_operating_expenses = %total_operating_expenses.total,
        missing_line_items = missing_items.len(),
        "Expenses calculated"
    );

    AuditStep {
        step_number,
        stage_id: "expenses".to_string(),
        stage_name: "Expenses".to_string(),
        input: serde_json::json!({
            "line_items": OfficeField::OPERATING_EXPENSES.map(OfficeField::key),
            "missing_line_items": missing_items
        }),
        output: serde_json::json!({
            "total_salary_expenses_total": total_salary_expenses.total.to_string(),
            "total_operating_expenses_total": total_operating_expenses.total.to_string()
        }),
        reasoning: format!(
            "total_salary_expenses = sum of total_salary_cost x fte = {}; \
             total_operating_expenses = sum of {} line items = {}",
            total_salary_expenses.total,
            OfficeField::OPERATING_EXPENSES.len(),
            total_operating_expenses.total
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_salary_fields;
    use crate::config::CalculationConstants;
    use crate::models::{
        BusinessPlanningData, Level, Month, MonthlyValue, Role, sample_business_planning_data,
    };
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn run_with_salary(input: &BusinessPlanningData) -> (CalculationContext, AuditStep) {
        let mut context = CalculationContext::new(input, CalculationConstants::default());
        calculate_salary_fields(&mut context, 1);
        let step = calculate_expenses(&mut context, 2);
        (context, step)
    }

    #[test]
    fn test_sample_operating_expenses() {
        let (context, step) = run_with_salary(&sample_business_planning_data());
        let opex = context.data.office(OfficeField::TotalOperatingExpenses);

        // 50000 + 0 + 5000 + 8000 + 6000 + 2000 + 4000 + 3000
        assert_eq!(opex.get(Month::Jan), dec("78000"));
        assert_eq!(opex.total, dec("936000"));
        assert_eq!(step.input["missing_line_items"], serde_json::json!([]));
    }

    #[test]
    fn test_sample_salary_expenses_scale_by_fte() {
        let (context, _) = run_with_salary(&sample_business_planning_data());
        let salary = context.data.office(OfficeField::TotalSalaryExpenses);

        // 45000 * 1.161 * 3
        assert_eq!(salary.get(Month::Jun), dec("156735"));
        assert_eq!(salary.total, dec("1880820"));
    }

    #[test]
    fn test_salary_without_fte_is_not_an_expense() {
        let mut input = BusinessPlanningData::default();
        input.set_role_level(
            RoleLevelField::GrossSalary,
            Role::Operations,
            Level::B,
            MonthlyValue::uniform(dec("30000")),
        );

        let (context, _) = run_with_salary(&input);
        assert!(context.data.office(OfficeField::TotalSalaryExpenses).is_zero());
    }

    #[test]
    fn test_missing_line_items_count_as_zero() {
        let mut input = BusinessPlanningData::default();
        input.set_office(OfficeField::Travel, MonthlyValue::uniform(dec("1500")));

        let (context, step) = run_with_salary(&input);
        let opex = context.data.office(OfficeField::TotalOperatingExpenses);
        assert_eq!(opex.get(Month::Nov), dec("1500"));
        assert_eq!(opex.total, dec("18000"));
        assert_eq!(step.input["missing_line_items"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn test_net_sales_is_not_an_operating_expense() {
        let mut input = BusinessPlanningData::default();
        input.set_office(OfficeField::NetSales, MonthlyValue::uniform(dec("999")));

        let (context, _) = run_with_salary(&input);
        assert!(context.data.office(OfficeField::TotalOperatingExpenses).is_zero());
    }

    #[test]
    fn test_expenses_are_finalized() {
        let (context, _) = run_with_salary(&sample_business_planning_data());
        assert!(context.data.office(OfficeField::TotalSalaryExpenses).is_finalized());
        assert!(context.data.office(OfficeField::TotalOperatingExpenses).is_finalized());
    }
}
