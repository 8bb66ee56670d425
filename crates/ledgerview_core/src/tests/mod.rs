//! Integration tests for aggregation and presentation
//!
//! Tests are organized by topic:
//! - `dashboard` - End-to-end scenarios from a transaction set to the overview
//! - `invariants` - Properties checked over seeded random transaction sets
//! - `presentation` - Sorting, percentages and date range labels

mod dashboard;
