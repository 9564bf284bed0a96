//! Empty state component renderer.
//!
//! This module renders the centered message shown when a page has nothing to
//! display: no search matches, an unknown job id, or a flow that lives in the
//! web application.

use crate::ui::helpers::{char_len, truncate, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message starting at `row`.
///
/// # Layout
///
/// ```text
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
///
/// Both lines are horizontally centered. The message uses the `empty_state_fg`
/// theme color, and the subtitle uses `text_dim` with dim styling.
///
/// # Returns
///
/// The next available row position (row + 2)
pub fn render_empty_state(canvas: &mut Canvas, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let message = truncate(&empty.message, cols);
    let msg_len = char_len(&message);
    let msg_padding = (cols.saturating_sub(msg_len)) / 2;

    canvas.position_cursor(row, 1);
    canvas.write(&Theme::fg(&theme.colors.empty_state_fg));
    canvas.pad(msg_padding);
    canvas.write(&message);
    canvas.pad(cols.saturating_sub(msg_padding + msg_len));
    canvas.write(Theme::reset());

    let subtitle = truncate(&empty.subtitle, cols);
    let sub_len = char_len(&subtitle);
    let sub_padding = (cols.saturating_sub(sub_len)) / 2;

    canvas.position_cursor(row + 1, 1);
    canvas.write(Theme::dim());
    canvas.write(&Theme::fg(&theme.colors.text_dim));
    canvas.pad(sub_padding);
    canvas.write(&subtitle);
    canvas.pad(cols.saturating_sub(sub_padding + sub_len));
    canvas.write(Theme::reset());

    row + 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::strip_ansi;

    #[test]
    fn centers_both_lines() {
        let empty = EmptyState {
            message: "Job not found".to_string(),
            subtitle: "Press Backspace to go back".to_string(),
        };
        let mut canvas = Canvas::new();
        let next = render_empty_state(&mut canvas, 6, &empty, &Theme::default(), 40);
        let text = strip_ansi(canvas.as_str());

        assert_eq!(next, 8);
        assert!(text.contains(&format!("{}Job not found", " ".repeat(13))));
        assert!(text.contains("Press Backspace to go back"));
    }
}
