//! Transaction types
//!
//! [`TransactionRecord`] is the loosely typed shape the backend serves from its
//! "list transactions" endpoint. [`Transaction`] is the validated form every
//! aggregation works on. The sign of `amount` is the only thing that separates
//! spending (negative) from income (positive).

use std::str::FromStr;

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{StatementSource, TransactionId};
use crate::error::{InvalidTransaction, Result, ValidationError};

/// A single dated, signed, categorized monetary record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: Date,
    /// Negative = spending, positive = income
    pub amount: Decimal,
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TransactionId>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<StatementSource>,
}

impl Transaction {
    pub fn new(date: Date, amount: Decimal, category: impl Into<String>) -> Self {
        Self {
            date,
            amount,
            category: category.into(),
            id: None,
            description: String::new(),
            merchant: None,
            source: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_merchant(mut self, merchant: impl Into<String>) -> Self {
        self.merchant = Some(merchant.into());
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: StatementSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn is_spending(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub fn is_income(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Check the invariants the type system cannot express
    pub fn validate(&self) -> std::result::Result<(), InvalidTransaction> {
        validate_category(&self.category)
    }
}

fn validate_category(category: &str) -> std::result::Result<(), InvalidTransaction> {
    if category.trim().is_empty() {
        return Err(InvalidTransaction::EmptyCategory);
    }
    Ok(())
}

/// Transaction as serialized by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(default)]
    pub id: Option<TransactionId>,
    /// ISO `YYYY-MM-DD`
    pub transaction_date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub merchant: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub source: Option<StatementSource>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl TransactionRecord {
    /// Convert into a validated [`Transaction`].
    ///
    /// The amount goes through its shortest decimal rendering so that a wire
    /// value of `-45.1` becomes exactly `-45.1` rather than the nearest binary
    /// fraction.
    pub fn to_transaction(&self) -> std::result::Result<Transaction, InvalidTransaction> {
        let date = Date::from_str(&self.transaction_date)
            .map_err(|_| InvalidTransaction::InvalidDate(self.transaction_date.clone()))?;

        if !self.amount.is_finite() {
            return Err(InvalidTransaction::NonFiniteAmount(self.amount));
        }
        let amount = Decimal::from_str(&self.amount.to_string())
            .map_err(|_| InvalidTransaction::AmountOutOfRange(self.amount))?;

        let category = self
            .category
            .as_deref()
            .ok_or(InvalidTransaction::MissingCategory)?;
        validate_category(category)?;

        Ok(Transaction {
            date,
            amount,
            category: category.to_string(),
            id: self.id,
            description: self.description.clone(),
            merchant: self.merchant.clone(),
            source: self.source,
        })
    }
}

/// Validate a whole record set, failing on the first malformed record.
pub fn validate_records(records: &[TransactionRecord]) -> Result<Vec<Transaction>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            record
                .to_transaction()
                .map_err(|reason| ValidationError::new(index, reason))
        })
        .collect()
}
