use ledgerview_core::Overview;

use crate::loader::Snapshot;

/// What the dashboard shows and where the user is in it
#[derive(Debug, Default)]
pub struct DashboardState {
    /// Origin of the transactions, shown in the header
    pub source_name: String,
    /// Last successful load; kept when a reload fails
    pub snapshot: Option<Snapshot>,
    /// Message from the most recent failed load
    pub error_message: Option<String>,
    /// Index of the first category row shown
    pub category_offset: usize,
    pub exit: bool,
}

impl DashboardState {
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            ..Self::default()
        }
    }

    pub fn overview(&self) -> Option<&Overview> {
        self.snapshot.as_ref().map(|s| &s.overview)
    }

    pub fn category_count(&self) -> usize {
        self.overview().map_or(0, |o| o.categories.len())
    }

    pub fn scroll_down(&mut self) {
        let max = self.category_count().saturating_sub(1);
        self.category_offset = (self.category_offset + 1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.category_offset = self.category_offset.saturating_sub(1);
    }

    /// Install a fresh snapshot, clearing any previous error
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshot = Some(snapshot);
        self.error_message = None;
        let max = self.category_count().saturating_sub(1);
        self.category_offset = self.category_offset.min(max);
    }
}
