//! Footer component renderer.
//!
//! This module renders the footer help bar with centered keybinding hints.

use crate::ui::helpers::{char_len, truncate, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at the specified row.
///
/// Displays keybinding hints centered horizontally with dimmed styling. Pads
/// the line to fill the entire terminal width.
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Truncation
///
/// If the help text exceeds terminal width, it is truncated to fit. This
/// prevents layout corruption on narrow terminals.
pub fn render_footer(canvas: &mut Canvas, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate(&footer.keybindings, cols);
    let text_len = char_len(&help_text);
    let padding = (cols.saturating_sub(text_len)) / 2;

    canvas.position_cursor(row, 1);
    canvas.write(&Theme::fg(&theme.colors.text_dim));
    canvas.pad(padding);
    canvas.write(&help_text);
    canvas.pad(cols.saturating_sub(padding + text_len));
    canvas.write(Theme::reset());
    row + 1
}
