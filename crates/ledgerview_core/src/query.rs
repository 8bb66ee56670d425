//! In-memory transaction search
//!
//! Mirrors the filters of the backend's "list transactions" call so the same
//! narrowing can be applied to an exported transaction set.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::model::{StatementSource, Transaction};

/// Result cap used when none is given
pub const DEFAULT_LIMIT: usize = 100;

/// Filter, order and cap a transaction set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionQuery {
    /// Inclusive lower bound
    #[serde(default)]
    pub start_date: Option<Date>,
    /// Inclusive upper bound
    #[serde(default)]
    pub end_date: Option<Date>,
    /// Exact, case-sensitive category match
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub source: Option<StatementSource>,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for TransactionQuery {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            category: None,
            source: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl TransactionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn start_date(mut self, date: Date) -> Self {
        self.start_date = Some(date);
        self
    }

    #[must_use]
    pub fn end_date(mut self, date: Date) -> Self {
        self.end_date = Some(date);
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn source(mut self, source: StatementSource) -> Self {
        self.source = Some(source);
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        if self.start_date.is_some_and(|start| tx.date < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| tx.date > end) {
            return false;
        }
        if let Some(category) = &self.category
            && tx.category != *category
        {
            return false;
        }
        if self.source.is_some() && tx.source != self.source {
            return false;
        }
        true
    }

    /// Matching transactions, newest first, at most `limit` of them.
    ///
    /// Transactions on the same date keep their input order.
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        let mut selected: Vec<Transaction> = transactions
            .iter()
            .filter(|tx| self.matches(tx))
            .cloned()
            .collect();
        selected.sort_by(|a, b| b.date.cmp(&a.date));
        selected.truncate(self.limit);
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use rust_decimal_macros::dec;

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::new(date(2024, 1, 10), dec!(-12), "Transportation")
                .with_source(StatementSource::AppleCard),
            Transaction::new(date(2024, 3, 1), dec!(-40), "Shopping")
                .with_source(StatementSource::BoaCredit),
            Transaction::new(date(2024, 2, 15), dec!(2000), "Bills & Utilities")
                .with_source(StatementSource::BoaCredit),
            Transaction::new(date(2024, 3, 1), dec!(-8), "Food & Dining")
                .with_source(StatementSource::AppleCard),
        ]
    }

    #[test]
    fn test_default_orders_newest_first() {
        let result = TransactionQuery::new().apply(&sample());
        let dates: Vec<_> = result.iter().map(|t| t.date).collect();
        assert_eq!(
            dates,
            [
                date(2024, 3, 1),
                date(2024, 3, 1),
                date(2024, 2, 15),
                date(2024, 1, 10)
            ]
        );
        // Same-date ties keep input order
        assert_eq!(result[0].category, "Shopping");
        assert_eq!(result[1].category, "Food & Dining");
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let query = TransactionQuery::new()
            .start_date(date(2024, 1, 10))
            .end_date(date(2024, 2, 15));
        let result = query.apply(&sample());
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|t| t.date <= date(2024, 2, 15)));
    }

    #[test]
    fn test_category_and_source_filters() {
        let by_category = TransactionQuery::new().category("Shopping").apply(&sample());
        assert_eq!(by_category.len(), 1);

        let by_source = TransactionQuery::new()
            .source(StatementSource::AppleCard)
            .apply(&sample());
        assert_eq!(by_source.len(), 2);

        let none = TransactionQuery::new().category("shopping").apply(&sample());
        assert!(none.is_empty());
    }

    #[test]
    fn test_limit_keeps_newest() {
        let result = TransactionQuery::new().limit(1).apply(&sample());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].date, date(2024, 3, 1));

        assert!(TransactionQuery::new().limit(0).apply(&sample()).is_empty());
    }
}
