//! View-ready values derived from a [`SummaryReport`]
//!
//! Everything here reads the report's public fields only and is a pure
//! function of its inputs. Rounding for display happens here and nowhere
//! earlier.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::model::{CategoryAggregate, MonthlyAggregate, SummaryReport, Transaction};

/// Label shown when there are no transactions to span
pub const NO_DATA_LABEL: &str = "No data";

/// Breakdown ordered by amount, largest first.
///
/// The sort is stable: equal amounts keep the order in which their categories
/// were first encountered during aggregation.
pub fn sorted_categories(report: &SummaryReport) -> Vec<CategoryAggregate> {
    let mut sorted = report.category_breakdown.clone();
    sorted.sort_by(|a, b| b.amount.cmp(&a.amount));
    sorted
}

/// Share of total spending, in percent, rounded to one fractional digit.
///
/// A zero total has no meaningful ratio; the share is then `0.0` for every
/// category instead of a division error.
pub fn percentage(category: &CategoryAggregate, total_spending: Decimal) -> Decimal {
    if total_spending.is_zero() {
        return Decimal::ZERO;
    }
    (category.amount / total_spending * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Render a percentage with exactly one fractional digit, e.g. `86.7%`
pub fn format_percentage(value: Decimal) -> String {
    let mut value = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    value.rescale(1);
    format!("{}%", value)
}

/// Short month label, e.g. `Mar 2024`
fn month_label(date: jiff::civil::Date) -> String {
    date.strftime("%b %Y").to_string()
}

/// Label summarizing the span of transaction dates.
///
/// - no transactions: [`NO_DATA_LABEL`]
/// - earliest and latest in the same month: `Mar 2024`
/// - otherwise: `Jan 2024 - Jun 2024`
///
/// The input does not need to be sorted.
pub fn date_range(transactions: &[Transaction]) -> String {
    let bounds = transactions.iter().map(|t| t.date).fold(None, |acc, d| match acc {
        None => Some((d, d)),
        Some((lo, hi)) => Some((std::cmp::min(lo, d), std::cmp::max(hi, d))),
    });

    match bounds {
        None => NO_DATA_LABEL.to_string(),
        Some((earliest, latest))
            if earliest.year() == latest.year() && earliest.month() == latest.month() =>
        {
            month_label(earliest)
        }
        Some((earliest, latest)) => {
            format!("{} - {}", month_label(earliest), month_label(latest))
        }
    }
}

/// One row of the category list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Decimal,
    /// Percent of total spending, already rounded to one digit
    pub percentage: Decimal,
}

impl CategoryShare {
    pub fn percentage_label(&self) -> String {
        format_percentage(self.percentage)
    }
}

/// Everything the overview screen shows, derived in one go
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overview {
    pub date_range: String,
    pub total_spending: Decimal,
    pub total_income: Decimal,
    pub net: Decimal,
    pub transaction_count: usize,
    pub categories: Vec<CategoryShare>,
    pub monthly_spending: Vec<MonthlyAggregate>,
}

impl Overview {
    pub fn build(report: &SummaryReport, transactions: &[Transaction]) -> Self {
        let categories = sorted_categories(report)
            .into_iter()
            .map(|c| CategoryShare {
                percentage: percentage(&c, report.total_spending),
                category: c.category,
                amount: c.amount,
            })
            .collect();

        Self {
            date_range: date_range(transactions),
            total_spending: report.total_spending,
            total_income: report.total_income,
            net: report.net,
            transaction_count: report.transaction_count,
            categories,
            monthly_spending: report.monthly_spending.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use rust_decimal_macros::dec;

    fn category(name: &str, amount: Decimal) -> CategoryAggregate {
        CategoryAggregate {
            category: name.to_string(),
            amount,
        }
    }

    #[test]
    fn test_percentage_rounds_half_away_from_zero() {
        assert_eq!(percentage(&category("A", dec!(1)), dec!(8)), dec!(12.5));
        // 1/16 = 6.25% -> 6.3
        assert_eq!(percentage(&category("A", dec!(1)), dec!(16)), dec!(6.3));
    }

    #[test]
    fn test_percentage_of_zero_total() {
        let share = percentage(&category("A", dec!(0)), Decimal::ZERO);
        assert_eq!(share, Decimal::ZERO);
        assert_eq!(format_percentage(share), "0.0%");
    }

    #[test]
    fn test_format_percentage_always_one_digit() {
        assert_eq!(format_percentage(dec!(100)), "100.0%");
        assert_eq!(format_percentage(dec!(86.7)), "86.7%");
        assert_eq!(format_percentage(dec!(50.0)), "50.0%");
    }

    #[test]
    fn test_date_range_ignores_input_order() {
        let txs = [
            Transaction::new(date(2024, 6, 2), dec!(-1), "A"),
            Transaction::new(date(2023, 11, 30), dec!(-1), "A"),
            Transaction::new(date(2024, 1, 10), dec!(-1), "A"),
        ];
        assert_eq!(date_range(&txs), "Nov 2023 - Jun 2024");
    }

    #[test]
    fn test_date_range_same_month_different_year() {
        let txs = [
            Transaction::new(date(2023, 3, 5), dec!(-1), "A"),
            Transaction::new(date(2024, 3, 5), dec!(-1), "A"),
        ];
        assert_eq!(date_range(&txs), "Mar 2023 - Mar 2024");
    }

    #[test]
    fn test_date_range_single_transaction() {
        let txs = [Transaction::new(date(2024, 12, 31), dec!(5), "Salary")];
        assert_eq!(date_range(&txs), "Dec 2024");
    }

    #[test]
    fn test_overview_puts_largest_category_first() {
        let report = SummaryReport {
            total_spending: dec!(30),
            category_breakdown: vec![category("Small", dec!(10)), category("Big", dec!(20))],
            transaction_count: 2,
            ..Default::default()
        };
        let overview = Overview::build(&report, &[]);
        assert_eq!(overview.categories[0].category, "Big");
        assert_eq!(overview.categories[0].percentage, dec!(66.7));
        assert_eq!(overview.date_range, NO_DATA_LABEL);
    }
}
