//! Personal finance overview library
//!
//! Turns a set of dated, categorized, signed transactions into the figures a
//! spending dashboard shows:
//! - total spending, total income and net balance
//! - spending broken down by category and by month
//! - category shares of total spending and a date range label
//!
//! Every function here is pure; loading transactions is left to the caller.
//!
//! ```ignore
//! use ledgerview_core::{Overview, aggregate};
//!
//! let report = aggregate(&transactions)?;
//! let overview = Overview::build(&report, &transactions);
//! println!("{}: spent {}", overview.date_range, overview.total_spending);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod aggregate;
pub mod categorize;
pub mod error;
pub mod present;
pub mod query;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use aggregate::{aggregate, aggregate_records};
pub use categorize::{Categorizer, CategoryRule};
pub use error::{InvalidTransaction, ValidationError};
pub use present::{CategoryShare, Overview};
pub use query::TransactionQuery;
