//! Latest-jobs feed renderers.

use crate::ui::helpers::{char_len, truncate, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FeedView, JobCard};

/// Rows used by one card, including the gap after it.
pub const CARD_HEIGHT: usize = 5;

const LOCATION: &str = "India";

/// Renders the feed body from `row`, stopping before `bottom`.
///
/// Cards that do not fit are left out; the selection always stays within the
/// first six, so on short terminals the tail of the feed is simply not drawn.
pub fn render_feed(canvas: &mut Canvas, row: usize, feed: &FeedView, theme: &Theme, cols: usize, bottom: usize) -> usize {
    match feed {
        FeedView::Loading => {
            canvas.position_cursor(row, 1);
            canvas.write(&Theme::fg(&theme.colors.text_dim));
            canvas.write("  Loading jobs...");
            canvas.write(Theme::reset());
            row + 1
        }
        FeedView::Empty(message) => {
            canvas.position_cursor(row, 1);
            canvas.write(&Theme::fg(&theme.colors.empty_state_fg));
            canvas.write("  ");
            canvas.write(message);
            canvas.write(Theme::reset());
            row + 1
        }
        FeedView::Cards(cards) => {
            let mut current_row = row;
            for card in cards {
                if current_row + CARD_HEIGHT - 1 > bottom {
                    break;
                }
                current_row = render_card(canvas, current_row, card, theme, cols);
            }
            current_row
        }
    }
}

/// Renders one card.
///
/// ```text
/// ▌ Acme · India
/// ▌ Rust Engineer
/// ▌ Build the plugin runtime...
/// ▌ 2 Positions  Full Time  12LPA
/// ```
fn render_card(canvas: &mut Canvas, row: usize, card: &JobCard, theme: &Theme, cols: usize) -> usize {
    let width = cols.saturating_sub(4);
    let marker_color = if card.is_selected {
        &theme.colors.selection_bg
    } else {
        &theme.colors.border
    };
    let marker = format!("{}  ▌ {}", Theme::fg(marker_color), Theme::reset());

    let start_line = |canvas: &mut Canvas, line: usize| {
        canvas.position_cursor(row + line, 1);
        canvas.write(&marker);
        if card.is_selected {
            canvas.write(&Theme::fg(&theme.colors.selection_fg));
            canvas.write(&Theme::bg(&theme.colors.selection_bg));
        }
    };

    let employer = truncate(&format!("{} · {LOCATION}", card.employer), width);
    start_line(canvas, 0);
    canvas.write(Theme::bold());
    canvas.write(&employer);
    canvas.write(Theme::reset());

    start_line(canvas, 1);
    if !card.is_selected {
        canvas.write(&Theme::fg(&theme.colors.header_fg));
    }
    canvas.write(Theme::bold());
    canvas.write(&truncate(&card.title, width));
    canvas.write(Theme::reset());

    start_line(canvas, 2);
    if !card.is_selected {
        canvas.write(&Theme::fg(&theme.colors.text_dim));
    }
    let description = card.description.lines().next().unwrap_or_default();
    canvas.write(&truncate(description, width));
    canvas.write(Theme::reset());

    canvas.position_cursor(row + 3, 1);
    canvas.write(&marker);
    let badges = [
        (&theme.colors.badge_positions_fg, &card.positions),
        (&theme.colors.badge_type_fg, &card.job_type),
        (&theme.colors.badge_salary_fg, &card.salary),
    ];
    let mut used = 0;
    for (color, text) in badges {
        if text.is_empty() || used + char_len(text) > width {
            continue;
        }
        canvas.write(Theme::bold());
        canvas.write(&Theme::fg(color));
        canvas.write(text);
        canvas.write(Theme::reset());
        canvas.pad(2);
        used += char_len(text) + 2;
    }

    row + CARD_HEIGHT
}
