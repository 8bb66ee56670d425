use rust_decimal::{Decimal, RoundingStrategy};

pub use ledgerview_core::present::format_percentage;

/// Insert thousands separators into a string of digits
fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

fn with_sign(negative: bool, body: String) -> String {
    if negative {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

/// Format a currency value, rounded to cents
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let mut abs = rounded.abs();
    abs.rescale(2);
    let text = abs.to_string();
    let (dollars, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    with_sign(
        rounded < Decimal::ZERO && !rounded.is_zero(),
        format!("{}.{}", group_thousands(dollars), cents),
    )
}

/// Format a currency value without cents (shorter format for tight columns)
pub fn format_currency_short(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let text = rounded.abs().trunc().to_string();

    with_sign(
        rounded < Decimal::ZERO && !rounded.is_zero(),
        group_thousands(&text),
    )
}
