use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use recipe_cli::pipeline::RunOutcome;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Print scrape failures, skipped listings and refused actions to stderr.
pub fn print_issues(outcome: &RunOutcome) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Kind"),
        header_cell("Detail"),
    ]);
    apply_table_style(&mut table);

    for (site, error) in outcome.report.failures() {
        table.add_row(vec![
            Cell::new(site),
            Cell::new("fetch failed").fg(Color::Red),
            Cell::new(error),
        ]);
    }
    for (site, gap) in outcome.report.gaps() {
        table.add_row(vec![
            Cell::new(site),
            Cell::new("listing skipped").fg(Color::Yellow),
            Cell::new(format!("listing {} has no {}", gap.listing, gap.missing)),
        ]);
    }
    for error in &outcome.rejected {
        table.add_row(vec![
            Cell::new("favorites"),
            Cell::new("action refused").fg(Color::Yellow),
            Cell::new(error),
        ]);
    }

    if table.row_count() > 0 {
        eprintln!("{table}");
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
