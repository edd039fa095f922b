//! Business planning data set.
//!
//! This module contains [`BusinessPlanningData`], the aggregate that the
//! calculation pipeline reads its inputs from and writes its derived fields to.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Level, MonthlyValue, OfficeField, Role, RoleLevelField};

/// Office-level metrics keyed by field.
pub type OfficeData = BTreeMap<OfficeField, MonthlyValue>;

/// One role/level metric: role, then level, then series.
pub type RoleLevelGrid = BTreeMap<Role, BTreeMap<Level, MonthlyValue>>;

/// Role/level metrics keyed by field.
pub type RoleLevelData = BTreeMap<RoleLevelField, RoleLevelGrid>;

/// The complete planning data set for one office and one year.
///
/// Lookups through [`office`](Self::office) and [`role_level`](Self::role_level)
/// return a zero series for anything absent; they never fail.
///
/// # Example
///
/// ```
/// use planning_engine::models::{
///     BusinessPlanningData, Level, MonthlyValue, OfficeField, Role, RoleLevelField,
/// };
/// use rust_decimal::Decimal;
///
/// let mut data = BusinessPlanningData::default();
/// data.set_office(OfficeField::OfficeRent, MonthlyValue::uniform(Decimal::new(50000, 0)));
/// data.set_role_level(
///     RoleLevelField::Fte,
///     Role::Consultant,
///     Level::A,
///     MonthlyValue::uniform(Decimal::new(3, 0)),
/// );
///
/// assert_eq!(data.office(OfficeField::OfficeRent).total, Decimal::new(600000, 0));
/// assert!(data.office(OfficeField::Travel).is_zero());
/// assert!(data.role_level(RoleLevelField::Fte, Role::Sales, Level::B).is_zero());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessPlanningData {
    /// Metrics without a role/level breakdown.
    #[serde(default)]
    pub office_level: OfficeData,
    /// Metrics broken down by role and level.
    #[serde(default)]
    pub role_level: RoleLevelData,
}

impl BusinessPlanningData {
    /// Returns the office-level series for a field, or a zero series.
    pub fn office(&self, field: OfficeField) -> MonthlyValue {
        self.office_level.get(&field).copied().unwrap_or_default()
    }

    /// Returns true if an office-level series is present for a field.
    pub fn has_office(&self, field: OfficeField) -> bool {
        self.office_level.contains_key(&field)
    }

    /// Writes an office-level series, replacing any previous value.
    pub fn set_office(&mut self, field: OfficeField, value: MonthlyValue) {
        self.office_level.insert(field, value);
    }

    /// Returns the series for a role/level cell, or a zero series.
    pub fn role_level(&self, field: RoleLevelField, role: Role, level: Level) -> MonthlyValue {
        self.role_level
            .get(&field)
            .and_then(|roles| roles.get(&role))
            .and_then(|levels| levels.get(&level))
            .copied()
            .unwrap_or_default()
    }

    /// Returns true if a series is present for a role/level cell.
    pub fn has_role_level(&self, field: RoleLevelField, role: Role, level: Level) -> bool {
        self.role_level
            .get(&field)
            .and_then(|roles| roles.get(&role))
            .is_some_and(|levels| levels.contains_key(&level))
    }

    /// Writes the series for a role/level cell, replacing any previous value.
    pub fn set_role_level(
        &mut self,
        field: RoleLevelField,
        role: Role,
        level: Level,
        value: MonthlyValue,
    ) {
        self.role_level
            .entry(field)
            .or_default()
            .entry(role)
            .or_default()
            .insert(level, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_empty_data_returns_zero_series() {
        let data = BusinessPlanningData::default();
        assert!(data.office(OfficeField::NetSales).is_zero());
        assert!(
            data.role_level(RoleLevelField::GrossSalary, Role::Consultant, Level::A)
                .is_zero()
        );
        assert!(!data.has_office(OfficeField::NetSales));
        assert!(!data.has_role_level(RoleLevelField::GrossSalary, Role::Consultant, Level::A));
    }

    #[test]
    fn test_set_role_level_creates_nested_maps() {
        let mut data = BusinessPlanningData::default();
        data.set_role_level(
            RoleLevelField::Price,
            Role::Sales,
            Level::C,
            MonthlyValue::uniform(dec("900")),
        );
        assert!(data.has_role_level(RoleLevelField::Price, Role::Sales, Level::C));
        assert!(!data.has_role_level(RoleLevelField::Price, Role::Sales, Level::D));
        assert_eq!(
            data.role_level(RoleLevelField::Price, Role::Sales, Level::C).total,
            dec("10800")
        );
    }

    #[test]
    fn test_deserialize_planning_data() {
        let json = r#"{
            "officeLevel": {
                "office_rent": { "jan": "50000", "total": "50000" }
            },
            "roleLevel": {
                "fte": { "Consultant": { "A": { "jan": "3", "feb": "3" } } }
            }
        }"#;

        let data: BusinessPlanningData = serde_json::from_str(json).unwrap();
        assert_eq!(data.office(OfficeField::OfficeRent).months[0], dec("50000"));
        assert_eq!(
            data.role_level(RoleLevelField::Fte, Role::Consultant, Level::A)
                .months[1],
            dec("3")
        );
    }

    #[test]
    fn test_deserialize_defaults_missing_grids() {
        let data: BusinessPlanningData = serde_json::from_str("{}").unwrap();
        assert!(data.office_level.is_empty());
        assert!(data.role_level.is_empty());
    }

    #[test]
    fn test_deserialize_rejects_unknown_role() {
        let json = r#"{ "roleLevel": { "fte": { "Partner": { "A": {} } } } }"#;
        let result: Result<BusinessPlanningData, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
