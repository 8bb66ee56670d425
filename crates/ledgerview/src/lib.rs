//! Terminal dashboard for categorized spending.
//!
//! Reads a transaction listing, aggregates it with `ledgerview_core` and shows
//! the overview: headline totals, spending by category and per month. The
//! same overview can be printed as text or exported as JSON.

pub mod app;
pub mod components;
pub mod config;
pub mod loader;
pub mod logging;
pub mod report;
pub mod source;
pub mod state;
pub mod util;

pub use app::App;
pub use config::AppConfig;
pub use loader::{OverviewLoader, Snapshot};
pub use logging::init_logging;
pub use source::{JsonFileSource, LoadError, TransactionSource};
