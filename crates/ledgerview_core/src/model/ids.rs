//! Identifiers carried over from the backend
//!
//! The core never looks records up by id; ids are kept so that a rendered row
//! can be traced back to the stored transaction.

use serde::{Deserialize, Serialize};

/// Backend-assigned identifier of a stored transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub u64);
