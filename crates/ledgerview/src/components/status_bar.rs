use super::{Component, EventResult};
use crate::state::DashboardState;
use crate::util::styles::{HELP_COLOR, NEGATIVE_COLOR};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub const HELP_TEXT: &str = "j/k: scroll categories | r: reload | q: quit";

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut DashboardState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(NEGATIVE_COLOR)),
                Span::raw(error.as_str()),
            ])
        } else {
            Line::from(Span::styled(HELP_TEXT, Style::default().fg(HELP_COLOR)))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
