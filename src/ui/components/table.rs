//! Result table renderer.
//!
//! Renders search results and the full job list as a four-column table
//! (TITLE, COMPANY, TYPE, SALARY) with selection and fuzzy match highlighting.

use crate::ui::helpers::{self, char_len, truncate, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, ResultsView};

const TYPE_WIDTH: usize = 12;
const SALARY_WIDTH: usize = 8;

/// Column widths `(title, company)` for a terminal `cols` wide.
fn column_widths(cols: usize) -> (usize, usize) {
    let flexible = cols.saturating_sub(TYPE_WIDTH + SALARY_WIDTH + 5);
    let company = flexible / 3;
    (flexible - company, company)
}

/// Renders the heading, query line, column headers and rows. Returns the
/// next free row.
pub fn render_results(canvas: &mut Canvas, row: usize, results: &ResultsView, theme: &Theme, cols: usize) -> usize {
    canvas.position_cursor(row, 1);
    canvas.write(Theme::bold());
    canvas.write(&Theme::fg(&theme.colors.header_fg));
    canvas.write(" ");
    canvas.write(&results.title);
    canvas.write(Theme::reset());

    canvas.position_cursor(row + 1, 1);
    if let Some(query) = &results.query {
        canvas.write(&Theme::fg(&theme.colors.text_dim));
        if query.trim().is_empty() {
            canvas.write(" Showing every job");
        } else {
            canvas.write(&truncate(&format!(" Query: \"{query}\""), cols));
        }
        canvas.write(Theme::reset());
    }

    if let Some(empty) = &results.empty_state {
        return super::empty::render_empty_state(canvas, row + 3, empty, theme, cols);
    }

    let current_row = render_table_headers(canvas, row + 2, theme, cols);
    render_table_rows(canvas, current_row, &results.items, theme, cols)
}

/// Renders the table column headers at the specified row.
pub fn render_table_headers(canvas: &mut Canvas, row: usize, theme: &Theme, cols: usize) -> usize {
    let (title_width, company_width) = column_widths(cols);
    canvas.position_cursor(row, 1);
    canvas.write(Theme::bold());
    canvas.write(&Theme::fg(&theme.colors.header_fg));
    canvas.write(&format!(
        " {:<title_width$} {:<company_width$} {:<TYPE_WIDTH$} {:<SALARY_WIDTH$}",
        "TITLE", "COMPANY", "TYPE", "SALARY"
    ));
    canvas.write(Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
pub fn render_table_rows(canvas: &mut Canvas, row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(canvas, current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single row.
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Fuzzy match highlights on the title (unless selected)
/// 3. Normal text color
///
/// The row is padded to the full terminal width so the selection background
/// spans the line.
fn render_table_row(canvas: &mut Canvas, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let (title_width, company_width) = column_widths(cols);
    canvas.position_cursor(row, 1);

    if item.is_selected {
        canvas.write(&Theme::fg(&theme.colors.selection_fg));
        canvas.write(&Theme::bg(&theme.colors.selection_bg));
    } else {
        canvas.write(&Theme::fg(&theme.colors.text_normal));
    }

    canvas.pad(1);
    let title = truncate(&item.title, title_width);
    let ranges: Vec<(usize, usize)> = if char_len(&title) < char_len(&item.title) {
        vec![]
    } else {
        item.highlight_ranges.clone()
    };
    helpers::render_highlighted_text(canvas, &title, &ranges, theme, item.is_selected);
    canvas.pad(title_width.saturating_sub(char_len(&title)) + 1);

    let columns = [
        (truncate(&item.employer, company_width), company_width),
        (truncate(&item.job_type, TYPE_WIDTH), TYPE_WIDTH),
        (truncate(&item.salary, SALARY_WIDTH), SALARY_WIDTH),
    ];
    let mut line_len = 1 + title_width + 1;
    for (text, width) in &columns {
        canvas.write(text);
        canvas.pad(width.saturating_sub(char_len(text)) + 1);
        line_len += width + 1;
    }

    canvas.pad(cols.saturating_sub(line_len));
    canvas.write(Theme::reset());
    row + 1
}
