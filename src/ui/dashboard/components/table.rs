//! Dashboard table component
//!
//! Renders the visible slice of display rows in fixed-width columns

use super::super::state::DashboardState;
use crate::consts::cli_consts::{KIND_COLUMN_WIDTH, LABEL_COLUMN_WIDTH, VALUE_COLUMN_WIDTH};
use crate::rows::{DisplayRow, RowKind};
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

/// Fixed style lookup per row kind. The renderer dispatches on the tag only;
/// no other row semantics influence styling.
pub fn row_style(kind: RowKind) -> Style {
    match kind {
        RowKind::Asset => Style::default().fg(Color::Cyan),
        RowKind::CrossRate => Style::default().fg(Color::Yellow),
        RowKind::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

/// The column-label line rendered in the header, kept next to the row
/// formatter so the widths stay in sync.
pub fn column_headings() -> String {
    format!(
        "{:<kind$}{:<label$}{:>value$}  {:>7}",
        "TYPE",
        "ASSET",
        "VALUE",
        "24H",
        kind = KIND_COLUMN_WIDTH,
        label = LABEL_COLUMN_WIDTH,
        value = VALUE_COLUMN_WIDTH,
    )
}

pub fn render_table(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let capacity = area.height as usize;
    let lines: Vec<Line> = state
        .visible_rows(capacity)
        .iter()
        .map(|row| Line::styled(format_row(row), row_style(row.kind)))
        .collect();

    // Rows below the visible slice stay blank; the frame buffer is cleared on
    // every draw, so a shorter row set leaves no stale lines behind.
    f.render_widget(Paragraph::new(lines), area);
}

fn format_row(row: &DisplayRow) -> String {
    let kind = format!("{:<width$}", row.kind.to_string(), width = KIND_COLUMN_WIDTH);
    match row.kind {
        // Error rows span the label and value columns with the message.
        RowKind::Error => format!("{kind}{}", row.label),
        _ => format!(
            "{kind}{:<label$}{:>value$}  {:>7}",
            fit(&row.label, LABEL_COLUMN_WIDTH),
            row.formatted_value,
            format!("{:+.1}%", row.change_percent),
            label = LABEL_COLUMN_WIDTH,
            value = VALUE_COLUMN_WIDTH,
        ),
    }
}

fn fit(label: &str, width: usize) -> String {
    label.chars().take(width).collect::<String>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_differ_per_kind() {
        let styles = [
            row_style(RowKind::Asset),
            row_style(RowKind::CrossRate),
            row_style(RowKind::Error),
        ];
        assert_ne!(styles[0], styles[1]);
        assert_ne!(styles[1], styles[2]);
        assert_ne!(styles[0], styles[2]);
    }

    #[test]
    fn test_row_columns_line_up_with_headings() {
        let row = DisplayRow::asset("Bitcoin".to_string(), 50_000.0, 1.23);
        let line = format_row(&row);

        assert!(line.starts_with(&format!("{:<width$}", "Asset", width = KIND_COLUMN_WIDTH)));
        assert!(line.contains("Bitcoin"));
        assert!(line.ends_with("+1.2%"));

        let headings = column_headings();
        assert_eq!(
            headings.find("VALUE").map(|i| i + "VALUE".len()),
            line.find("$50.0K").map(|i| i + "$50.0K".len()),
            "value column is right-aligned under its heading"
        );
    }

    #[test]
    fn test_negative_change_keeps_sign() {
        let row = DisplayRow::asset("Bitcoin".to_string(), 50_000.0, -2.5);
        assert!(format_row(&row).ends_with("-2.5%"));
    }

    #[test]
    fn test_long_labels_are_truncated() {
        let row = DisplayRow::asset("a".repeat(40), 10.0, 0.0);
        let line = format_row(&row);
        assert!(line.contains(&"a".repeat(LABEL_COLUMN_WIDTH)));
        assert!(!line.contains(&"a".repeat(LABEL_COLUMN_WIDTH + 1)));
    }

    #[test]
    fn test_error_rows_carry_the_message() {
        let row = DisplayRow::error("HTTP error with status 500");
        let line = format_row(&row);
        assert!(line.starts_with("Error"));
        assert!(line.contains("HTTP error with status 500"));
        assert!(!line.contains('%'));
    }
}
