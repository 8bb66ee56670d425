use super::{Component, EventResult};
use crate::state::DashboardState;
use crate::util::format::format_currency;
use crate::util::styles::{BAR_TRACK_COLOR, HELP_COLOR, category_color, focused_block_with_help};
use crossterm::event::{KeyCode, KeyEvent};
use ledgerview_core::CategoryShare;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const NAME_WIDTH: usize = 18;
/// Space taken by the amount and percentage columns
const LABEL_WIDTH: usize = 23;

/// Horizontal bars of spending per category, largest first
pub struct CategoryChart;

impl CategoryChart {
    pub fn new() -> Self {
        Self
    }

    fn truncate(name: &str) -> String {
        if name.chars().count() > NAME_WIDTH {
            let head: String = name.chars().take(NAME_WIDTH - 3).collect();
            format!("{head}...")
        } else {
            name.to_string()
        }
    }

    /// Cells of a `width`-wide bar filled for this share of `total`
    pub fn filled_cells(amount: Decimal, total: Decimal, width: usize) -> usize {
        if total.is_zero() {
            return 0;
        }
        // Dividing first keeps totals near Decimal::MAX in range
        amount
            .checked_div(total)
            .and_then(|share| share.checked_mul(Decimal::from(width)))
            .and_then(|cells| cells.round().to_usize())
            .unwrap_or(width)
            .min(width)
    }

    fn bar_line(share: &CategoryShare, index: usize, total: Decimal, width: u16) -> Line<'static> {
        let color = category_color(index);
        let bar_width = (width as usize).saturating_sub(NAME_WIDTH + LABEL_WIDTH + 2);
        let filled = Self::filled_cells(share.amount, total, bar_width);

        let mut spans = vec![Span::styled(
            format!("{:<NAME_WIDTH$} ", Self::truncate(&share.category)),
            Style::default().fg(color),
        )];
        if filled > 0 {
            spans.push(Span::styled(" ".repeat(filled), Style::default().bg(color)));
        }
        let empty = bar_width - filled;
        if empty > 0 {
            spans.push(Span::styled(
                " ".repeat(empty),
                Style::default().bg(BAR_TRACK_COLOR),
            ));
        }
        spans.push(Span::raw(format!(
            " {:>14} {:>7}",
            format_currency(share.amount),
            share.percentage_label()
        )));

        Line::from(spans)
    }
}

impl Default for CategoryChart {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for CategoryChart {
    fn handle_key(&mut self, key: KeyEvent, state: &mut DashboardState) -> EventResult {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                state.scroll_down();
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.scroll_up();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let block = focused_block_with_help(" SPENDING BY CATEGORY ", true, "j/k: scroll");
        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        let Some(overview) = state.overview() else {
            return;
        };

        if overview.categories.is_empty() {
            let msg = Paragraph::new("No spending in range").style(Style::default().fg(HELP_COLOR));
            frame.render_widget(msg, inner_area);
            return;
        }

        let lines: Vec<Line> = overview
            .categories
            .iter()
            .enumerate()
            .skip(state.category_offset)
            .take(inner_area.height as usize)
            .map(|(i, share)| Self::bar_line(share, i, overview.total_spending, inner_area.width))
            .collect();

        frame.render_widget(Paragraph::new(lines), inner_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_filled_cells() {
        assert_eq!(CategoryChart::filled_cells(dec!(65), dec!(75), 30), 26);
        assert_eq!(CategoryChart::filled_cells(dec!(75), dec!(75), 30), 30);
        assert_eq!(CategoryChart::filled_cells(dec!(0), dec!(75), 30), 0);
        assert_eq!(CategoryChart::filled_cells(dec!(5), dec!(0), 30), 0);
    }

    #[test]
    fn test_filled_cells_with_largest_amounts() {
        assert_eq!(CategoryChart::filled_cells(Decimal::MAX, Decimal::MAX, 40), 40);
        let half = Decimal::MAX / dec!(2);
        assert_eq!(CategoryChart::filled_cells(half, Decimal::MAX, 40), 20);
    }

    #[test]
    fn test_truncate_long_names() {
        assert_eq!(CategoryChart::truncate("Groceries"), "Groceries");
        let long = CategoryChart::truncate("Bills & Utilities and more");
        assert_eq!(long.chars().count(), NAME_WIDTH);
        assert!(long.ends_with("..."));
    }
}
