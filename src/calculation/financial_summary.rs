//! Financial summary.
//!
//! Final pipeline stage. Derives EBITDA, EBITDA margin and EBIT from revenue
//! and expenses.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{AuditStep, MonthlyValue, OfficeField};

use super::context::CalculationContext;
use super::primitives::{
    add_monthly_values, calculate_total, create_empty_monthly_value, subtract_monthly_values,
};

/// Derives `ebitda`, `ebitda_margin` and `ebit`.
///
/// - `ebitda = net_sales - (total_salary_expenses + total_operating_expenses)`
/// - `ebitda_margin = ebitda / net_sales * 100` in months with positive net
///   sales, zero in every other month and wherever the ratio exceeds the
///   decimal range
/// - `ebit = ebitda - depreciation`
///
/// Requires the revenue and expense stages to have run.
pub fn calculate_financial_summary(
    context: &mut CalculationContext,
    step_number: u32,
) -> AuditStep {
    let net_sales = context.data.office(OfficeField::NetSales);
    let salary_expenses = context.data.office(OfficeField::TotalSalaryExpenses);
    let operating_expenses = context.data.office(OfficeField::TotalOperatingExpenses);
    let depreciation = context.data.office(OfficeField::Depreciation);

    let total_expenses = add_monthly_values(&[salary_expenses, operating_expenses]);
    let mut ebitda = subtract_monthly_values(&net_sales, &total_expenses);
    calculate_total(&mut ebitda);

    let (mut ebitda_margin, zero_revenue_months) = margin(&ebitda, &net_sales);
    calculate_total(&mut ebitda_margin);

    let mut ebit = subtract_monthly_values(&ebitda, &depreciation);
    calculate_total(&mut ebit);

    context.data.set_office(OfficeField::Ebitda, ebitda);
    context.data.set_office(OfficeField::EbitdaMargin, ebitda_margin);
    context.data.set_office(OfficeField::Ebit, ebit);

    debug!(
        ebitda = %ebitda.total,
        ebit = %ebit.total,
        zero_revenue_months,
        "Financial summary calculated"
    );

    AuditStep {
        step_number,
        stage_id: "financial_summary".to_string(),
        stage_name: "Financial Summary".to_string(),
        input: serde_json::json!({
            "net_sales_total": net_sales.total.to_string(),
            "total_salary_expenses_total": salary_expenses.total.to_string(),
            "total_operating_expenses_total": operating_expenses.total.to_string(),
            "depreciation_total": depreciation.total.to_string()
        }),
        output: serde_json::json!({
            "ebitda_total": ebitda.total.to_string(),
            "ebit_total": ebit.total.to_string(),
            "zero_margin_months": zero_revenue_months
        }),
        reasoning: format!(
            "ebitda = net_sales - expenses = {}; ebit = ebitda - depreciation = {}; \
             margin set to 0 in {} month(s) without positive net sales",
            ebitda.total, ebit.total, zero_revenue_months
        ),
    }
}

/// Monthly margin in percent, and the number of months guarded to zero.
///
/// A ratio that overflows the decimal range is guarded like a month without
/// sales.
fn margin(ebitda: &MonthlyValue, net_sales: &MonthlyValue) -> (MonthlyValue, u32) {
    let mut result = create_empty_monthly_value();
    let mut guarded = 0u32;
    for (i, out) in result.months.iter_mut().enumerate() {
        let sales = net_sales.months[i];
        let percent = Some(sales)
            .filter(|sales| *sales > Decimal::ZERO)
            .and_then(|sales| ebitda.months[i].checked_div(sales))
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED));
        match percent {
            Some(percent) => *out = percent,
            None => guarded += 1,
        }
    }
    (result, guarded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalculationConstants;
    use crate::models::{BusinessPlanningData, Month};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn run(input: &BusinessPlanningData) -> (CalculationContext, AuditStep) {
        let mut context = CalculationContext::new(input, CalculationConstants::default());
        let step = calculate_financial_summary(&mut context, 4);
        (context, step)
    }

    fn office_input(fields: &[(OfficeField, MonthlyValue)]) -> BusinessPlanningData {
        let mut input = BusinessPlanningData::default();
        for (field, value) in fields {
            input.set_office(*field, *value);
        }
        input
    }

    #[test]
    fn test_ebitda_without_expenses_equals_net_sales() {
        let input = office_input(&[
            (OfficeField::NetSales, MonthlyValue::uniform(dec("432000"))),
            (OfficeField::Depreciation, MonthlyValue::uniform(dec("4000"))),
        ]);
        let (context, _) = run(&input);

        let ebitda = context.data.office(OfficeField::Ebitda);
        let ebit = context.data.office(OfficeField::Ebit);
        for month in Month::ALL {
            assert_eq!(ebitda.get(month), dec("432000"));
            assert_eq!(ebit.get(month), ebitda.get(month) - dec("4000"));
        }
    }

    #[test]
    fn test_ebitda_subtracts_both_expense_totals() {
        let input = office_input(&[
            (OfficeField::NetSales, MonthlyValue::uniform(dec("1000"))),
            (OfficeField::TotalSalaryExpenses, MonthlyValue::uniform(dec("600"))),
            (OfficeField::TotalOperatingExpenses, MonthlyValue::uniform(dec("150"))),
        ]);
        let (context, _) = run(&input);

        let ebitda = context.data.office(OfficeField::Ebitda);
        assert_eq!(ebitda.get(Month::Feb), dec("250"));
        assert_eq!(ebitda.total, dec("3000"));

        let margin = context.data.office(OfficeField::EbitdaMargin);
        assert_eq!(margin.get(Month::Feb), dec("25"));
    }

    #[test]
    fn test_margin_guard_is_per_month() {
        let mut sales = MonthlyValue::uniform(dec("1000"));
        sales.set(Month::Mar, Decimal::ZERO);
        let input = office_input(&[
            (OfficeField::NetSales, sales),
            (OfficeField::TotalOperatingExpenses, MonthlyValue::uniform(dec("500"))),
        ]);
        let (context, step) = run(&input);

        let margin = context.data.office(OfficeField::EbitdaMargin);
        assert_eq!(margin.get(Month::Mar), Decimal::ZERO);
        assert_eq!(margin.get(Month::Apr), dec("50"));
        assert_eq!(margin.total, dec("550"));
        assert_eq!(step.output["zero_margin_months"], 1);
    }

    #[test]
    fn test_margin_is_zero_for_negative_net_sales() {
        let input = office_input(&[(OfficeField::NetSales, MonthlyValue::uniform(dec("-10")))]);
        let (context, _) = run(&input);
        assert!(context.data.office(OfficeField::EbitdaMargin).is_zero());
    }

    #[test]
    fn test_negative_ebitda_gives_negative_margin() {
        let input = office_input(&[
            (OfficeField::NetSales, MonthlyValue::uniform(dec("200"))),
            (OfficeField::TotalSalaryExpenses, MonthlyValue::uniform(dec("300"))),
        ]);
        let (context, _) = run(&input);
        let margin = context.data.office(OfficeField::EbitdaMargin);
        assert_eq!(margin.get(Month::Oct), dec("-50"));
    }

    #[test]
    fn test_tiny_net_sales_does_not_overflow_margin() {
        let tiny = MonthlyValue::uniform(dec("0.000000000000000000000000001"));
        let input = office_input(&[
            (OfficeField::NetSales, tiny),
            (OfficeField::TotalOperatingExpenses, MonthlyValue::uniform(dec("50000"))),
        ]);
        let (context, step) = run(&input);

        let margin = context.data.office(OfficeField::EbitdaMargin);
        assert!(margin.is_zero());
        assert_eq!(step.output["zero_margin_months"], 12);
        assert!(context.data.office(OfficeField::Ebitda).get(Month::Jan) < Decimal::ZERO);
    }

    #[test]
    fn test_saturated_inputs_yield_bounded_summary() {
        let input = office_input(&[
            (OfficeField::NetSales, MonthlyValue::uniform(Decimal::MAX)),
            (OfficeField::TotalSalaryExpenses, MonthlyValue::uniform(Decimal::MIN)),
            (OfficeField::Depreciation, MonthlyValue::uniform(Decimal::MIN)),
        ]);
        let (context, _) = run(&input);

        assert_eq!(context.data.office(OfficeField::Ebitda).get(Month::Sep), Decimal::MAX);
        assert_eq!(context.data.office(OfficeField::Ebit).total, Decimal::MAX);
        assert_eq!(
            context.data.office(OfficeField::EbitdaMargin).get(Month::Sep),
            dec("100")
        );
    }

    #[test]
    fn test_empty_input_yields_zero_summary() {
        let (context, step) = run(&BusinessPlanningData::default());
        for field in [OfficeField::Ebitda, OfficeField::EbitdaMargin, OfficeField::Ebit] {
            assert!(context.data.has_office(field));
            assert!(context.data.office(field).is_zero());
        }
        assert_eq!(step.output["zero_margin_months"], 12);
    }

    #[test]
    fn test_summary_fields_are_finalized() {
        let input = office_input(&[
            (OfficeField::NetSales, MonthlyValue::uniform(dec("1000"))),
            (OfficeField::Depreciation, MonthlyValue::uniform(dec("10"))),
        ]);
        let (context, _) = run(&input);
        for field in [OfficeField::Ebitda, OfficeField::EbitdaMargin, OfficeField::Ebit] {
            assert!(context.data.office(field).is_finalized(), "{} not finalized", field);
        }
        assert_eq!(context.data.office(OfficeField::Ebit).total, dec("11880"));
    }
}
