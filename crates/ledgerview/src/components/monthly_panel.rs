use super::{Component, EventResult};
use super::category_chart::CategoryChart;
use crate::state::DashboardState;
use crate::util::format::format_currency_short;
use crate::util::styles::{BAR_TRACK_COLOR, HEADER_COLOR, HELP_COLOR, focused_block};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

/// "2024-03 " plus the amount column
const LABEL_WIDTH: usize = 20;

/// Spending per calendar month, most recent months at the bottom
pub struct MonthlyPanel;

impl MonthlyPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MonthlyPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for MonthlyPanel {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut DashboardState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let block = focused_block(" MONTHLY SPENDING ", false);
        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        let Some(overview) = state.overview() else {
            return;
        };

        if overview.monthly_spending.is_empty() {
            let msg = Paragraph::new("No spending in range").style(Style::default().fg(HELP_COLOR));
            frame.render_widget(msg, inner_area);
            return;
        }

        // Scale bars to the busiest month
        let peak = overview
            .monthly_spending
            .iter()
            .map(|m| m.amount)
            .max()
            .unwrap_or_default();
        let bar_width = (inner_area.width as usize).saturating_sub(LABEL_WIDTH);

        let visible = inner_area.height as usize;
        let skip = overview.monthly_spending.len().saturating_sub(visible);

        let lines: Vec<Line> = overview
            .monthly_spending
            .iter()
            .skip(skip)
            .map(|m| {
                let filled = CategoryChart::filled_cells(m.amount, peak, bar_width);
                Line::from(vec![
                    Span::styled(format!("{} ", m.month), Style::default().fg(HEADER_COLOR)),
                    Span::raw(format!("{:>11} ", format_currency_short(m.amount))),
                    Span::styled(" ".repeat(filled), Style::default().bg(HEADER_COLOR)),
                    Span::styled(
                        " ".repeat(bar_width - filled),
                        Style::default().bg(BAR_TRACK_COLOR),
                    ),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner_area);
    }
}
