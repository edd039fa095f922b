//! Calculation logic for the planning engine.
//!
//! This module contains the monthly value arithmetic, the calculation context,
//! and the four ordered pipeline stages: salary-derived fields, revenue,
//! expenses and the financial summary.

mod context;
mod expenses;
mod financial_summary;
mod pipeline;
mod primitives;
mod revenue;
mod salary;

pub use context::CalculationContext;
pub use expenses::calculate_expenses;
pub use financial_summary::calculate_financial_summary;
pub use pipeline::{calculate_derived_fields, run_calculation};
pub use primitives::{
    add_monthly_values, add_to_monthly_value, calculate_total, create_empty_monthly_value,
    multiply_by_constant, multiply_monthly_values, subtract_monthly_values,
};
pub use revenue::calculate_revenue;
pub use salary::calculate_salary_fields;
