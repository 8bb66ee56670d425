/// Why a single transaction was rejected
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidTransaction {
    #[error("category is missing")]
    MissingCategory,

    #[error("category is empty")]
    EmptyCategory,

    #[error("amount {0} is not a finite number")]
    NonFiniteAmount(f64),

    #[error("amount {0} cannot be represented as a decimal")]
    AmountOutOfRange(f64),

    #[error("invalid transaction date {0:?}")]
    InvalidDate(String),

    #[error("running total exceeds the largest representable amount")]
    TotalOverflow,
}

/// A malformed transaction in an aggregation input.
///
/// Aggregation is all-or-nothing: the first offending record fails the whole
/// call and is identified by its position in the input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("transaction #{index}: {reason}")]
pub struct ValidationError {
    pub index: usize,
    pub reason: InvalidTransaction,
}

impl ValidationError {
    pub fn new(index: usize, reason: InvalidTransaction) -> Self {
        Self { index, reason }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
