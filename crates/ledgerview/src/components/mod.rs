pub mod category_chart;
pub mod monthly_panel;
pub mod status_bar;
pub mod summary_cards;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use crate::state::DashboardState;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq)]
pub enum EventResult {
    /// Event was handled, continue
    Handled,
    /// Event was not handled, pass to parent
    NotHandled,
}

/// Trait for components that can handle input and render
pub trait Component {
    /// Handle a key event
    fn handle_key(&mut self, key: KeyEvent, state: &mut DashboardState) -> EventResult;

    /// Render the component
    fn render(&mut self, frame: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState);
}
