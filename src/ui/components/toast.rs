//! Notification line renderer.

use crate::app::notifications::NotificationKind;
use crate::ui::helpers::{char_len, truncate, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ToastView;

/// Renders `toast` on a single line at `row`, prefixed with a status glyph.
pub fn render_toast(canvas: &mut Canvas, row: usize, toast: &ToastView, theme: &Theme, cols: usize) -> usize {
    let (glyph, color) = match toast.kind {
        NotificationKind::Success => ("✓", &theme.colors.success_fg),
        NotificationKind::Error => ("✗", &theme.colors.error_fg),
    };
    let text = truncate(&format!(" {glyph} {}", toast.message), cols);

    canvas.position_cursor(row, 1);
    canvas.write(Theme::bold());
    canvas.write(&Theme::fg(color));
    canvas.write(&text);
    canvas.pad(cols.saturating_sub(char_len(&text)));
    canvas.write(Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::strip_ansi;

    #[test]
    fn glyph_follows_kind() {
        let theme = Theme::default();
        let mut canvas = Canvas::new();
        render_toast(
            &mut canvas,
            22,
            &ToastView {
                kind: NotificationKind::Success,
                message: "Logged out successfully".to_string(),
            },
            &theme,
            60,
        );
        render_toast(
            &mut canvas,
            22,
            &ToastView {
                kind: NotificationKind::Error,
                message: "Logout failed".to_string(),
            },
            &theme,
            60,
        );
        let text = strip_ansi(canvas.as_str());

        assert!(text.contains("✓ Logged out successfully"));
        assert!(text.contains("✗ Logout failed"));
        assert!(canvas.as_str().contains(&Theme::fg(&theme.colors.error_fg)));
    }
}
