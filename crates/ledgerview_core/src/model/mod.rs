mod ids;
mod report;
mod source;
mod transaction;

pub use ids::TransactionId;
pub use report::{CategoryAggregate, MonthlyAggregate, SummaryReport, YearMonth};
pub use source::{StatementSource, UnknownSource};
pub use transaction::{Transaction, TransactionRecord, validate_records};
