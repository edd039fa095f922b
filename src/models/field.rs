//! Field names of the planning grids.
//!
//! Office-level and role/level metrics live in separate grids, so their names
//! are separate enums. Both serialize as snake_case keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A metric that exists once per office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfficeField {
    /// Office rent.
    OfficeRent,
    /// Severance payments.
    Severance,
    /// Education and training.
    Education,
    /// External services.
    ExternalServices,
    /// IT-related costs.
    ItRelated,
    /// External representation.
    ExternalRepresentation,
    /// Depreciation.
    Depreciation,
    /// Travel.
    Travel,
    /// Revenue across all roles and levels.
    NetSales,
    /// Salary cost across all roles and levels.
    TotalSalaryExpenses,
    /// Sum of the operating cost line items.
    TotalOperatingExpenses,
    /// Earnings before interest, tax, depreciation and amortization.
    Ebitda,
    /// EBITDA as a percentage of net sales.
    EbitdaMargin,
    /// Earnings before interest and tax.
    Ebit,
}

impl OfficeField {
    /// The fixed office cost line items summed into total operating expenses.
    pub const OPERATING_EXPENSES: [OfficeField; 8] = [
        OfficeField::OfficeRent,
        OfficeField::Severance,
        OfficeField::Education,
        OfficeField::ExternalServices,
        OfficeField::ItRelated,
        OfficeField::ExternalRepresentation,
        OfficeField::Depreciation,
        OfficeField::Travel,
    ];

    /// Returns the snake_case key of the field.
    pub fn key(self) -> &'static str {
        match self {
            OfficeField::OfficeRent => "office_rent",
            OfficeField::Severance => "severance",
            OfficeField::Education => "education",
            OfficeField::ExternalServices => "external_services",
            OfficeField::ItRelated => "it_related",
            OfficeField::ExternalRepresentation => "external_representation",
            OfficeField::Depreciation => "depreciation",
            OfficeField::Travel => "travel",
            OfficeField::NetSales => "net_sales",
            OfficeField::TotalSalaryExpenses => "total_salary_expenses",
            OfficeField::TotalOperatingExpenses => "total_operating_expenses",
            OfficeField::Ebitda => "ebitda",
            OfficeField::EbitdaMargin => "ebitda_margin",
            OfficeField::Ebit => "ebit",
        }
    }
}

impl fmt::Display for OfficeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A metric broken down by role and level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleLevelField {
    /// Monthly gross salary per head.
    GrossSalary,
    /// Hourly price.
    Price,
    /// Utilization rate.
    Utr,
    /// Available hours per head.
    Hours,
    /// Full-time-equivalent headcount.
    Fte,
    /// Employer social security charge per head.
    SocialSecurity,
    /// Employer pension contribution per head.
    Pension,
    /// Gross salary plus employer contributions, per head.
    TotalSalaryCost,
}

impl RoleLevelField {
    /// The raw inputs supplied by the planning grid.
    pub const INPUTS: [RoleLevelField; 5] = [
        RoleLevelField::GrossSalary,
        RoleLevelField::Price,
        RoleLevelField::Utr,
        RoleLevelField::Hours,
        RoleLevelField::Fte,
    ];

    /// Returns the snake_case key of the field.
    pub fn key(self) -> &'static str {
        match self {
            RoleLevelField::GrossSalary => "gross_salary",
            RoleLevelField::Price => "price",
            RoleLevelField::Utr => "utr",
            RoleLevelField::Hours => "hours",
            RoleLevelField::Fte => "fte",
            RoleLevelField::SocialSecurity => "social_security",
            RoleLevelField::Pension => "pension",
            RoleLevelField::TotalSalaryCost => "total_salary_cost",
        }
    }
}

impl fmt::Display for RoleLevelField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_office_field_serialization() {
        let json = serde_json::to_string(&OfficeField::ExternalRepresentation).unwrap();
        assert_eq!(json, "\"external_representation\"");
        let field: OfficeField = serde_json::from_str("\"ebitda_margin\"").unwrap();
        assert_eq!(field, OfficeField::EbitdaMargin);
    }

    #[test]
    fn test_keys_match_serialized_names() {
        for field in OfficeField::OPERATING_EXPENSES {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.key()));
        }
        for field in RoleLevelField::INPUTS {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.key()));
        }
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result: Result<OfficeField, _> = serde_json::from_str("\"office_rnet\"");
        assert!(result.is_err());
    }
}
