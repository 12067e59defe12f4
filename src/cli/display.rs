//! Styling and table helpers for human-readable output.

use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};
use console::{style, StyledObject};

/// Colour a convergence status label.
///
/// Green: changed. Dim: unchanged. Red: failed.
pub fn colorize_status(status: &str) -> StyledObject<&str> {
    match status {
        "changed" => style(status).green().bold(),
        "unchanged" => style(status).dim(),
        "failed" => style(status).red().bold(),
        _ => style(status),
    }
}

/// Borderless table with upper-cased, left-aligned headers.
pub fn list_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h.to_uppercase()).set_alignment(CellAlignment::Left)),
        );
    table
}
