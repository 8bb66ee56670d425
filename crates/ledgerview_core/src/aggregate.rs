//! Transaction aggregation
//!
//! Reduces a transaction set into a [`SummaryReport`] in a single pass.
//! Classification is purely by sign:
//! - `amount < 0` adds `|amount|` to total spending, its category and its month
//! - `amount > 0` adds `amount` to total income
//! - `amount == 0` only counts
//!
//! All arithmetic is exact decimal arithmetic; nothing is rounded here.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use crate::error::{InvalidTransaction, Result, ValidationError};
use crate::model::{
    CategoryAggregate, MonthlyAggregate, SummaryReport, Transaction, TransactionRecord, YearMonth,
    validate_records,
};

/// Add `amount` to a running total without overflowing
fn add_to(total: &mut Decimal, amount: Decimal) -> std::result::Result<(), InvalidTransaction> {
    *total = total
        .checked_add(amount)
        .ok_or(InvalidTransaction::TotalOverflow)?;
    Ok(())
}

/// Category totals keyed by exact label, remembering first-encounter order.
#[derive(Debug, Default)]
struct CategoryTotals {
    index: FxHashMap<String, usize>,
    entries: Vec<CategoryAggregate>,
}

impl CategoryTotals {
    fn add(
        &mut self,
        category: &str,
        amount: Decimal,
    ) -> std::result::Result<(), InvalidTransaction> {
        match self.index.get(category) {
            Some(&i) => add_to(&mut self.entries[i].amount, amount)?,
            None => {
                self.index.insert(category.to_string(), self.entries.len());
                self.entries.push(CategoryAggregate {
                    category: category.to_string(),
                    amount,
                });
            }
        }
        Ok(())
    }

    fn into_vec(self) -> Vec<CategoryAggregate> {
        self.entries
    }
}

#[derive(Debug, Default)]
struct Accumulator {
    spending: Decimal,
    income: Decimal,
    categories: CategoryTotals,
    months: BTreeMap<YearMonth, Decimal>,
    count: usize,
}

impl Accumulator {
    fn push(&mut self, tx: &Transaction) -> std::result::Result<(), InvalidTransaction> {
        if tx.is_spending() {
            let spent = tx.amount.abs();
            add_to(&mut self.spending, spent)?;
            self.categories.add(&tx.category, spent)?;
            add_to(
                self.months.entry(YearMonth::of(tx.date)).or_insert(Decimal::ZERO),
                spent,
            )?;
        } else if tx.is_income() {
            add_to(&mut self.income, tx.amount)?;
        }

        self.count += 1;
        Ok(())
    }

    fn finish(self) -> SummaryReport {
        SummaryReport {
            total_spending: self.spending,
            total_income: self.income,
            net: self.income - self.spending,
            category_breakdown: self.categories.into_vec(),
            transaction_count: self.count,
            monthly_spending: self
                .months
                .into_iter()
                .map(|(month, amount)| MonthlyAggregate { month, amount })
                .collect(),
        }
    }
}

/// Aggregate a transaction set into a [`SummaryReport`].
///
/// Fails with the position of the first malformed transaction, or of the
/// first one that would push a running total past [`Decimal::MAX`]; no
/// partial report is ever returned.
pub fn aggregate(transactions: &[Transaction]) -> Result<SummaryReport> {
    let mut acc = Accumulator::default();

    for (index, tx) in transactions.iter().enumerate() {
        tx.validate()
            .and_then(|()| acc.push(tx))
            .map_err(|reason| ValidationError::new(index, reason))?;
    }

    let report = acc.finish();
    tracing::debug!(
        transactions = report.transaction_count,
        categories = report.category_breakdown.len(),
        "Aggregated transaction set"
    );
    Ok(report)
}

/// Validate raw backend records and aggregate them.
pub fn aggregate_records(records: &[TransactionRecord]) -> Result<SummaryReport> {
    let transactions = validate_records(records)?;
    aggregate(&transactions)
}
