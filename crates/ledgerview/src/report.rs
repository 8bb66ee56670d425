//! Plain-text and JSON renderings of an [`Overview`], for non-interactive use

use std::fmt::{self, Write};
use std::path::Path;

use ledgerview_core::Overview;

use crate::util::format::format_currency;
use crate::util::io::atomic_write;

/// Width of the label column
const NAME_WIDTH: usize = 24;
const AMOUNT_WIDTH: usize = 14;

pub fn render_text(overview: &Overview) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_text(&mut out, overview);
    out
}

fn write_text(out: &mut impl Write, overview: &Overview) -> fmt::Result {
    writeln!(out, "Overview ({})", overview.date_range)?;
    writeln!(out)?;

    let totals = [
        ("Total spending", format_currency(overview.total_spending)),
        ("Total income", format_currency(overview.total_income)),
        ("Net", format_currency(overview.net)),
        ("Transactions", overview.transaction_count.to_string()),
    ];
    for (label, value) in totals {
        writeln!(out, "{label:<NAME_WIDTH$} {value:>AMOUNT_WIDTH$}")?;
    }

    writeln!(out)?;
    writeln!(out, "Spending by category")?;
    if overview.categories.is_empty() {
        writeln!(out, "  (no spending)")?;
    }
    for share in &overview.categories {
        writeln!(
            out,
            "  {:<width$} {:>AMOUNT_WIDTH$} {:>7}",
            share.category,
            format_currency(share.amount),
            share.percentage_label(),
            width = NAME_WIDTH - 2,
        )?;
    }

    if !overview.monthly_spending.is_empty() {
        writeln!(out)?;
        writeln!(out, "Monthly spending")?;
        for month in &overview.monthly_spending {
            writeln!(
                out,
                "  {:<width$} {:>AMOUNT_WIDTH$}",
                month.month.to_string(),
                format_currency(month.amount),
                width = NAME_WIDTH - 2,
            )?;
        }
    }

    Ok(())
}

/// Write the overview as pretty-printed JSON
pub fn export_json(overview: &Overview, path: &Path) -> color_eyre::Result<()> {
    let json = serde_json::to_string_pretty(overview)?;
    atomic_write(path, &json)?;
    tracing::info!(path = %path.display(), "Exported overview");
    Ok(())
}
