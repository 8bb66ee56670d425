//! One refresh of the overview: fetch, categorize, validate, filter,
//! aggregate and present.

use ledgerview_core::model::{SummaryReport, Transaction, validate_records};
use ledgerview_core::{Categorizer, Overview, TransactionQuery, aggregate};

use crate::source::{LoadError, TransactionSource};

/// Everything derived from one fetch of the transaction set
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub transactions: Vec<Transaction>,
    pub report: SummaryReport,
    pub overview: Overview,
}

pub struct OverviewLoader {
    source: Box<dyn TransactionSource>,
    query: TransactionQuery,
    categorizer: Option<Categorizer>,
}

impl OverviewLoader {
    pub fn new(source: impl TransactionSource + 'static, query: TransactionQuery) -> Self {
        Self {
            source: Box::new(source),
            query,
            categorizer: None,
        }
    }

    /// Re-categorize every record from its description before validation
    #[must_use]
    pub fn with_categorizer(mut self, categorizer: Categorizer) -> Self {
        self.categorizer = Some(categorizer);
        self
    }

    pub fn source_name(&self) -> String {
        self.source.describe()
    }

    /// Fetch a fresh transaction set and derive the overview from it.
    ///
    /// Nothing is kept between calls; a failed load leaves no partial result.
    pub fn load(&self) -> Result<Snapshot, LoadError> {
        let mut records = self.source.list_transactions()?;

        if let Some(categorizer) = &self.categorizer {
            categorizer.apply(&mut records);
        }

        let all = validate_records(&records)?;
        let transactions = self.query.apply(&all);
        let report = aggregate(&transactions)?;
        let overview = Overview::build(&report, &transactions);

        tracing::info!(
            source = %self.source.describe(),
            fetched = all.len(),
            selected = transactions.len(),
            categories = overview.categories.len(),
            "Overview refreshed"
        );

        Ok(Snapshot {
            transactions,
            report,
            overview,
        })
    }
}
