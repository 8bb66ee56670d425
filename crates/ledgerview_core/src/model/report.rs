use std::fmt;

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Total spending attributed to one category label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    pub category: String,
    /// Sum of absolute spending amounts
    pub amount: Decimal,
}

/// A calendar month, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i16,
    pub month: i8,
}

impl YearMonth {
    pub fn new(year: i16, month: i8) -> Self {
        Self { year, month }
    }

    pub fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Total spending within one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    pub month: YearMonth,
    pub amount: Decimal,
}

/// Aggregate figures derived from a transaction set.
///
/// Always produced fresh by [`crate::aggregate::aggregate`]; nothing mutates a
/// report after it is built.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Sum of absolute values of all negative amounts
    pub total_spending: Decimal,
    /// Sum of all positive amounts
    pub total_income: Decimal,
    /// `total_income - total_spending`
    pub net: Decimal,
    /// One entry per category with spending, in first-encountered order
    pub category_breakdown: Vec<CategoryAggregate>,
    /// Every transaction considered, including zero amounts
    pub transaction_count: usize,
    /// Spending per month, ascending
    pub monthly_spending: Vec<MonthlyAggregate>,
}
