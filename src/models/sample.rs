//! Sample planning data.
//!
//! A small, fully known data set used by tests, benches and demos: one
//! Consultant/A cell with revenue and salary inputs plus the office cost line
//! items. Every other role/level cell is absent.

use rust_decimal::Decimal;

use super::{BusinessPlanningData, Level, MonthlyValue, OfficeField, Role, RoleLevelField};

/// Returns the sample planning data set.
///
/// With the default constants this yields `net_sales` of 432,000 per month
/// (1200 x 0.75 x 160 x 3).
///
/// # Example
///
/// ```
/// use planning_engine::models::{sample_business_planning_data, Level, Role, RoleLevelField};
/// use rust_decimal::Decimal;
///
/// let data = sample_business_planning_data();
/// let fte = data.role_level(RoleLevelField::Fte, Role::Consultant, Level::A);
/// assert_eq!(fte.total, Decimal::new(36, 0));
/// ```
pub fn sample_business_planning_data() -> BusinessPlanningData {
    let mut data = BusinessPlanningData::default();

    let consultant_a = [
        (RoleLevelField::Price, Decimal::new(1200, 0)),
        (RoleLevelField::Utr, Decimal::new(75, 2)),
        (RoleLevelField::Hours, Decimal::new(160, 0)),
        (RoleLevelField::Fte, Decimal::new(3, 0)),
        (RoleLevelField::GrossSalary, Decimal::new(45000, 0)),
    ];
    for (field, amount) in consultant_a {
        data.set_role_level(field, Role::Consultant, Level::A, MonthlyValue::uniform(amount));
    }

    let office_costs = [
        (OfficeField::OfficeRent, 50000),
        (OfficeField::Severance, 0),
        (OfficeField::Education, 5000),
        (OfficeField::ExternalServices, 8000),
        (OfficeField::ItRelated, 6000),
        (OfficeField::ExternalRepresentation, 2000),
        (OfficeField::Depreciation, 4000),
        (OfficeField::Travel, 3000),
    ];
    for (field, amount) in office_costs {
        data.set_office(field, MonthlyValue::uniform(Decimal::new(amount, 0)));
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_has_only_consultant_a_inputs() {
        let data = sample_business_planning_data();
        for field in RoleLevelField::INPUTS {
            let roles = &data.role_level[&field];
            assert_eq!(roles.len(), 1);
            assert_eq!(roles[&Role::Consultant].len(), 1);
            assert!(data.has_role_level(field, Role::Consultant, Level::A));
        }
    }

    #[test]
    fn test_sample_has_every_operating_expense_line() {
        let data = sample_business_planning_data();
        for field in OfficeField::OPERATING_EXPENSES {
            assert!(data.has_office(field), "missing {}", field);
        }
    }
}
