//! Hero search box renderer.
//!
//! This module renders the landing-page search input with a bordered frame,
//! the draft (or a placeholder) and a search button.

use crate::ui::helpers::{char_len, truncate, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeroView;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Shown while the draft is empty and the box is not focused.
const PLACEHOLDER: &str = "Find your dream jobs";

const BUTTON: &str = " Search ";

/// Renders the search input box at the specified row.
///
/// # Returns
///
/// The next available row position (row + 3, since the box uses 3 lines)
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────────────────┐ [margin]
/// [margin] │ rust developer▏     [ Search ]│ [margin]
/// [margin] └──────────────────────────────┘ [margin]
/// ```
///
/// Borders use `search_bar_border`; the draft uses `text_normal`, the
/// placeholder `text_dim`. A cursor bar follows the draft while typing.
pub fn render_search_bar(canvas: &mut Canvas, row: usize, hero: &HeroView, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    canvas.position_cursor(row, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.write(&border);
    canvas.write(&format!("┌{}┐", "─".repeat(inner_width)));
    canvas.write(Theme::reset());

    let text_room = inner_width.saturating_sub(BUTTON.len() + 3);
    let (text, color) = if hero.draft.is_empty() && !hero.is_typing {
        (PLACEHOLDER.to_string(), &theme.colors.text_dim)
    } else {
        // Keep the tail of long drafts visible while typing.
        let chars: Vec<char> = hero.draft.chars().collect();
        let room = text_room.saturating_sub(1);
        let visible: String = chars[chars.len().saturating_sub(room)..].iter().collect();
        (visible, &theme.colors.text_normal)
    };
    let text = truncate(&text, text_room);
    let cursor = if hero.is_typing { "▏" } else { "" };
    let used = 1 + char_len(&text) + char_len(cursor);

    canvas.position_cursor(row + 1, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.write(&border);
    canvas.write("│");
    canvas.write(&Theme::fg(color));
    canvas.pad(1);
    canvas.write(&text);
    canvas.write(cursor);
    canvas.pad(inner_width.saturating_sub(used + BUTTON.len()));
    canvas.write(&Theme::fg(&theme.colors.button_fg));
    canvas.write(&Theme::bg(&theme.colors.button_bg));
    canvas.write(BUTTON);
    canvas.write(Theme::reset());
    canvas.write(&border);
    canvas.write("│");
    canvas.write(Theme::reset());

    canvas.position_cursor(row + 2, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.write(&border);
    canvas.write(&format!("└{}┘", "─".repeat(inner_width)));
    canvas.write(Theme::reset());

    row + 3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::strip_ansi;

    #[test]
    fn shows_placeholder_when_idle() {
        let hero = HeroView {
            draft: String::new(),
            is_typing: false,
        };
        let mut canvas = Canvas::new();
        let next = render_search_bar(&mut canvas, 4, &hero, &Theme::default(), 80);

        assert_eq!(next, 7);
        assert!(strip_ansi(canvas.as_str()).contains(PLACEHOLDER));
    }

    #[test]
    fn shows_draft_with_cursor_while_typing() {
        let hero = HeroView {
            draft: "rust".to_string(),
            is_typing: true,
        };
        let mut canvas = Canvas::new();
        render_search_bar(&mut canvas, 1, &hero, &Theme::default(), 80);
        let text = strip_ansi(canvas.as_str());

        assert!(text.contains("rust▏"));
        assert!(!text.contains(PLACEHOLDER));
    }

    #[test]
    fn long_draft_keeps_its_tail() {
        let hero = HeroView {
            draft: format!("{}END", "x".repeat(200)),
            is_typing: true,
        };
        let mut canvas = Canvas::new();
        render_search_bar(&mut canvas, 1, &hero, &Theme::default(), 60);
        assert!(strip_ansi(canvas.as_str()).contains("END▏"));
    }
}
