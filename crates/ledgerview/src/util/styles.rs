//! Common styling utilities for TUI components

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};
use rust_decimal::Decimal;

/// Standard color for focused panels
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Standard color for positive values
pub const POSITIVE_COLOR: Color = Color::Green;

/// Standard color for negative values
pub const NEGATIVE_COLOR: Color = Color::Red;

/// Background of the unfilled part of a bar
pub const BAR_TRACK_COLOR: Color = Color::Rgb(40, 40, 40);

/// Colors cycled through for category bars, largest category first
pub const CATEGORY_PALETTE: [Color; 6] = [
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Blue,
    Color::LightGreen,
    Color::LightRed,
];

/// Create a block with a title that shows focused state via border color.
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}

/// Create a block with title and bottom help text, shown only when focused.
pub fn focused_block_with_help(title: &str, focused: bool, help_text: &str) -> Block<'static> {
    let mut block = focused_block(title, focused);

    if focused && !help_text.is_empty() {
        block = block.title_bottom(Line::from(format!(" {} ", help_text)).fg(HELP_COLOR));
    }

    block
}

/// Green for zero and above, red below zero.
pub fn value_color(value: Decimal) -> Color {
    if value >= Decimal::ZERO {
        POSITIVE_COLOR
    } else {
        NEGATIVE_COLOR
    }
}

pub fn value_style(value: Decimal) -> Style {
    Style::default().fg(value_color(value))
}

/// Bar color for the n-th category in display order
pub fn category_color(index: usize) -> Color {
    CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_focused_block_has_title() {
        let block = focused_block("Test", true);
        assert!(format!("{:?}", block).contains("Test"));
    }

    #[test]
    fn test_value_color() {
        assert_eq!(value_color(dec!(100)), POSITIVE_COLOR);
        assert_eq!(value_color(dec!(-0.01)), NEGATIVE_COLOR);
        assert_eq!(value_color(dec!(0)), POSITIVE_COLOR);
    }

    #[test]
    fn test_category_color_cycles() {
        assert_eq!(category_color(0), CATEGORY_PALETTE[0]);
        assert_eq!(category_color(CATEGORY_PALETTE.len()), CATEGORY_PALETTE[0]);
        assert_eq!(category_color(7), CATEGORY_PALETTE[1]);
    }
}
