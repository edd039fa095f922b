//! Revenue calculation.
//!
//! Second pipeline stage. Aggregates billable revenue over the role/level grid
//! into the office-level `net_sales` series.

use tracing::debug;

use crate::models::{AuditStep, OfficeField, RoleLevelField, role_levels};

use super::context::CalculationContext;
use super::primitives::{
    add_to_monthly_value, calculate_total, create_empty_monthly_value, multiply_monthly_values,
};

const REVENUE_INPUTS: [RoleLevelField; 4] = [
    RoleLevelField::Price,
    RoleLevelField::Utr,
    RoleLevelField::Hours,
    RoleLevelField::Fte,
];

/// Derives office-level `net_sales`.
///
/// `net_sales` is the sum over all 16 role/level pairs of
/// `price x utr x hours x fte`, month by month. Missing inputs are zero, so a
/// pair lacking any of the four contributes nothing.
///
/// # Example
///
/// ```
/// use planning_engine::calculation::{calculate_revenue, CalculationContext};
/// use planning_engine::config::CalculationConstants;
/// use planning_engine::models::{sample_business_planning_data, OfficeField};
/// use rust_decimal::Decimal;
///
/// let input = sample_business_planning_data();
/// let mut context = CalculationContext::new(&input, CalculationConstants::default());
/// calculate_revenue(&mut context, 2);
///
/// let net_sales = context.data.office(OfficeField::NetSales);
/// assert_eq!(net_sales.months[0], Decimal::new(432000, 0));
/// assert_eq!(net_sales.total, Decimal::new(5184000, 0));
/// ```
pub fn calculate_revenue(context: &mut CalculationContext, step_number: u32) -> AuditStep {
    let missing: Vec<(String, usize)> = REVENUE_INPUTS
        .iter()
        .map(|&field| (field.key().to_string(), context.check_role_level_input(field)))
        .collect();

    let mut net_sales = create_empty_monthly_value();
    let mut contributing_pairs = 0u32;
    for (role, level) in role_levels() {
        let factors = REVENUE_INPUTS.map(|field| context.data.role_level(field, role, level));
        let contribution = multiply_monthly_values(&factors);
        if !contribution.months.iter().all(|m| m.is_zero()) {
            contributing_pairs += 1;
        }
        add_to_monthly_value(&mut net_sales, &contribution);
    }
    calculate_total(&mut net_sales);
    context.data.set_office(OfficeField::NetSales, net_sales);

    debug!(
        contributing_pairs,
        net_sales_total = %net_sales.total,
        "Revenue calculated"
    );

    let missing_json: serde_json::Map<String, serde_json::Value> = missing
        .into_iter()
        .map(|(field, count)| (field, serde_json::json!(count)))
        .collect();

    AuditStep {
        step_number,
        stage_id: "revenue".to_string(),
        stage_name: "Revenue".to_string(),
        input: serde_json::json!({
            "factors": ["price", "utr", "hours", "fte"],
            "missing_pairs": missing_json
        }),
        output: serde_json::json!({
            "net_sales_total": net_sales.total.to_string(),
            "contributing_pairs": contributing_pairs
        }),
        reasoning: format!(
            "net_sales = sum of price x utr x hours x fte over 16 role/level pairs \
             ({} contributing) = {}",
            contributing_pairs, net_sales.total
        ),
    }
}
