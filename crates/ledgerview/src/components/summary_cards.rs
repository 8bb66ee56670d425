use super::{Component, EventResult};
use crate::state::DashboardState;
use crate::util::format::format_currency;
use crate::util::styles::{HEADER_COLOR, NEGATIVE_COLOR, POSITIVE_COLOR, focused_block, value_style};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Header line plus one row of headline figures
pub struct SummaryCards;

impl SummaryCards {
    pub fn new() -> Self {
        Self
    }

    fn card(frame: &mut Frame, area: Rect, title: &str, value: String, style: Style) {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            value,
            style.add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(focused_block(title, false));
        frame.render_widget(paragraph, area);
    }
}

impl Default for SummaryCards {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SummaryCards {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut DashboardState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(3)])
            .split(area);

        let range = state
            .overview()
            .map_or("Loading...", |o| o.date_range.as_str());
        let header = Line::from(vec![
            Span::styled(
                " SPENDING OVERVIEW ",
                Style::default().fg(HEADER_COLOR).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("{range}  ")),
            Span::styled(state.source_name.as_str(), Style::default().fg(HEADER_COLOR)),
        ]);
        frame.render_widget(Paragraph::new(header), rows[0]);

        let Some(overview) = state.overview() else {
            return;
        };

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(rows[1]);

        Self::card(
            frame,
            cards[0],
            " Total Spending ",
            format_currency(overview.total_spending),
            Style::default().fg(NEGATIVE_COLOR),
        );
        Self::card(
            frame,
            cards[1],
            " Total Income ",
            format_currency(overview.total_income),
            Style::default().fg(POSITIVE_COLOR),
        );
        Self::card(
            frame,
            cards[2],
            " Net ",
            format_currency(overview.net),
            value_style(overview.net),
        );
        Self::card(
            frame,
            cards[3],
            " Transactions ",
            overview.transaction_count.to_string(),
            Style::default(),
        );
    }
}
