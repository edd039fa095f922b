//! Monthly value model.
//!
//! A [`MonthlyValue`] is one planning year of a single metric: twelve month
//! slots plus a `total`. The total is only meaningful once the series has been
//! finalized with [`crate::calculation::calculate_total`]; intermediate values
//! produced by the arithmetic primitives carry a zero total.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Month;

/// Twelve monthly amounts plus their yearly total.
///
/// Serializes with one key per month (`"jan"` .. `"dec"`) and a `"total"` key.
/// Missing keys deserialize as zero.
///
/// # Example
///
/// ```
/// use planning_engine::models::{Month, MonthlyValue};
/// use rust_decimal::Decimal;
///
/// let rent = MonthlyValue::uniform(Decimal::new(50000, 0));
/// assert_eq!(rent.get(Month::Mar), Decimal::new(50000, 0));
/// assert_eq!(rent.total, Decimal::new(600000, 0));
/// assert!(rent.is_finalized());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "NamedMonths", into = "NamedMonths")]
pub struct MonthlyValue {
    /// Month amounts indexed by [`Month::index`].
    pub months: [Decimal; 12],
    /// Sum of all months once finalized, otherwise zero.
    pub total: Decimal,
}

impl MonthlyValue {
    /// Creates a finalized series from twelve month amounts.
    pub fn from_months(months: [Decimal; 12]) -> Self {
        let total = saturating_sum(&months);
        Self { months, total }
    }

    /// Creates a finalized series with the same amount in every month.
    pub fn uniform(amount: Decimal) -> Self {
        Self::from_months([amount; 12])
    }

    /// Returns the amount for a month.
    pub fn get(&self, month: Month) -> Decimal {
        self.months[month.index()]
    }

    /// Sets the amount for a month. The total is left untouched.
    pub fn set(&mut self, month: Month, amount: Decimal) {
        self.months[month.index()] = amount;
    }

    /// Returns the sum of the twelve month slots, saturating on overflow.
    pub fn sum_of_months(&self) -> Decimal {
        saturating_sum(&self.months)
    }

    /// Returns true if `total` equals the sum of the month slots.
    pub fn is_finalized(&self) -> bool {
        self.total == self.sum_of_months()
    }

    /// Returns true if every month and the total are zero.
    pub fn is_zero(&self) -> bool {
        self.total.is_zero() && self.months.iter().all(Decimal::is_zero)
    }
}

fn saturating_sum(months: &[Decimal; 12]) -> Decimal {
    months
        .iter()
        .fold(Decimal::ZERO, |sum, month| sum.saturating_add(*month))
}

/// Wire shape of a [`MonthlyValue`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
struct NamedMonths {
    jan: Decimal,
    feb: Decimal,
    mar: Decimal,
    apr: Decimal,
    may: Decimal,
    jun: Decimal,
    jul: Decimal,
    aug: Decimal,
    sep: Decimal,
    oct: Decimal,
    nov: Decimal,
    dec: Decimal,
    total: Decimal,
}

impl From<NamedMonths> for MonthlyValue {
    fn from(n: NamedMonths) -> Self {
        MonthlyValue {
            months: [
                n.jan, n.feb, n.mar, n.apr, n.may, n.jun, n.jul, n.aug, n.sep, n.oct, n.nov, n.dec,
            ],
            total: n.total,
        }
    }
}

impl From<MonthlyValue> for NamedMonths {
    fn from(v: MonthlyValue) -> Self {
        let [jan, feb, mar, apr, may, jun, jul, aug, sep, oct, nov, dec] = v.months;
        NamedMonths {
            jan,
            feb,
            mar,
            apr,
            may,
            jun,
            jul,
            aug,
            sep,
            oct,
            nov,
            dec,
            total: v.total,
        }
    }
}
