//! Where transaction sets come from.
//!
//! The backend that parses and stores statements is not part of this program.
//! [`TransactionSource`] is the seam to it: anything that can produce the
//! records of a "list transactions" call. [`JsonFileSource`] reads a saved
//! response from disk.

use std::path::{Path, PathBuf};

use ledgerview_core::ValidationError;
use ledgerview_core::model::TransactionRecord;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid transaction data: {0}")]
    Validation(#[from] ValidationError),
}

/// Produces the current transaction set
pub trait TransactionSource {
    /// Short human-readable origin, for logs and the status bar
    fn describe(&self) -> String;

    /// Fetch every available record
    fn list_transactions(&self) -> Result<Vec<TransactionRecord>, LoadError>;
}

/// Accepted file shapes: the backend response object or a bare array
#[derive(Deserialize)]
#[serde(untagged)]
enum Listing {
    Response { transactions: Vec<TransactionRecord> },
    Records(Vec<TransactionRecord>),
}

impl Listing {
    fn into_records(self) -> Vec<TransactionRecord> {
        match self {
            Listing::Response { transactions } => transactions,
            Listing::Records(records) => records,
        }
    }
}

/// A JSON export of the backend's transaction listing
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn parse(path: &Path, content: &str) -> Result<Vec<TransactionRecord>, LoadError> {
        serde_json::from_str::<Listing>(content)
            .map(Listing::into_records)
            .map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl TransactionSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn list_transactions(&self) -> Result<Vec<TransactionRecord>, LoadError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;

        let records = Self::parse(&self.path, &content)?;
        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            "Read transaction listing"
        );
        Ok(records)
    }
}
