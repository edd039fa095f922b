//! Monthly value arithmetic.
//!
//! Elementwise operations over [`MonthlyValue`]. Every derived value leaves
//! `total` at zero; callers finalize with [`calculate_total`] once a series is
//! written out as a finished field.
//!
//! Arithmetic saturates at [`Decimal::MAX`] / [`Decimal::MIN`] instead of
//! panicking, so an out-of-scale plan still yields a result.

use rust_decimal::Decimal;

use crate::models::MonthlyValue;

/// Returns a series with every month and the total at zero.
pub fn create_empty_monthly_value() -> MonthlyValue {
    MonthlyValue::default()
}

/// Multiplies every month by a constant. The total is left at zero.
///
/// Products saturate on overflow.
///
/// # Example
///
/// ```
/// use planning_engine::calculation::multiply_by_constant;
/// use planning_engine::models::MonthlyValue;
/// use rust_decimal::Decimal;
///
/// let salary = MonthlyValue::uniform(Decimal::new(1000, 0));
/// let charge = multiply_by_constant(&salary, Decimal::new(141, 3));
/// assert_eq!(charge.months[0], Decimal::new(141, 0));
/// assert_eq!(charge.total, Decimal::ZERO);
/// ```
pub fn multiply_by_constant(value: &MonthlyValue, factor: Decimal) -> MonthlyValue {
    let mut result = create_empty_monthly_value();
    for (out, month) in result.months.iter_mut().zip(value.months) {
        *out = month.saturating_mul(factor);
    }
    result
}

/// Multiplies series elementwise. The total is left at zero.
///
/// An empty slice yields the all-zero series, not a series of ones. Products
/// saturate on overflow.
///
/// # Example
///
/// ```
/// use planning_engine::calculation::multiply_monthly_values;
/// use planning_engine::models::MonthlyValue;
/// use rust_decimal::Decimal;
///
/// let price = MonthlyValue::uniform(Decimal::new(1200, 0));
/// let fte = MonthlyValue::uniform(Decimal::new(3, 0));
/// let product = multiply_monthly_values(&[price, fte]);
/// assert_eq!(product.months[5], Decimal::new(3600, 0));
///
/// assert!(multiply_monthly_values(&[]).is_zero());
/// ```
pub fn multiply_monthly_values(values: &[MonthlyValue]) -> MonthlyValue {
    let mut result = create_empty_monthly_value();
    if values.is_empty() {
        return result;
    }
    for (i, out) in result.months.iter_mut().enumerate() {
        *out = values.iter().fold(Decimal::ONE, |product, value| {
            product.saturating_mul(value.months[i])
        });
    }
    result
}

/// Adds series elementwise. The total is left at zero.
///
/// An empty slice yields the all-zero series.
pub fn add_monthly_values(values: &[MonthlyValue]) -> MonthlyValue {
    let mut result = create_empty_monthly_value();
    for value in values {
        add_to_monthly_value(&mut result, value);
    }
    result
}

/// Subtracts `b` from `a` elementwise. The total is left at zero.
pub fn subtract_monthly_values(a: &MonthlyValue, b: &MonthlyValue) -> MonthlyValue {
    let mut result = create_empty_monthly_value();
    for (i, out) in result.months.iter_mut().enumerate() {
        *out = a.months[i].saturating_sub(b.months[i]);
    }
    result
}

/// Accumulates `source` into `target` month by month.
///
/// Only the month slots change; `target.total` is not touched.
pub fn add_to_monthly_value(target: &mut MonthlyValue, source: &MonthlyValue) {
    for (out, month) in target.months.iter_mut().zip(source.months) {
        *out = out.saturating_add(month);
    }
}

/// Sets `total` to the sum of the twelve months.
///
/// # Example
///
/// ```
/// use planning_engine::calculation::{calculate_total, multiply_by_constant};
/// use planning_engine::models::MonthlyValue;
/// use rust_decimal::Decimal;
///
/// let mut value = multiply_by_constant(&MonthlyValue::uniform(Decimal::new(10, 0)), Decimal::new(2, 0));
/// assert_eq!(value.total, Decimal::ZERO);
/// calculate_total(&mut value);
/// assert_eq!(value.total, Decimal::new(240, 0));
/// ```
pub fn calculate_total(value: &mut MonthlyValue) {
    value.total = value.sum_of_months();
}
