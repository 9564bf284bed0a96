//! Landing page: hero banner, search box and latest-jobs feed.

use super::cards::render_feed;
use super::search::render_search_bar;
use crate::ui::helpers::{char_len, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FeedView, HeroView};

const TAGLINE: &str = "No. 1 Job Hunt Website";
const HEADLINE: &str = "Search, Apply & Get Your ";
const HEADLINE_ACCENT: &str = "Dream Jobs";
const FEED_HEADING: &str = "Latest & Top ";
const FEED_HEADING_REST: &str = "Job Openings";

fn centered(canvas: &mut Canvas, row: usize, cols: usize, parts: &[(String, &str)]) {
    let len: usize = parts.iter().map(|(_, text)| char_len(text)).sum();
    canvas.position_cursor(row, 1);
    canvas.pad(cols.saturating_sub(len) / 2);
    for (style, text) in parts {
        canvas.write(style);
        canvas.write(text);
        canvas.write(Theme::reset());
    }
}

/// Renders the home page from `row` down to `bottom`. Returns the next free row.
pub fn render_home(
    canvas: &mut Canvas,
    row: usize,
    hero: &HeroView,
    feed: &FeedView,
    theme: &Theme,
    cols: usize,
    bottom: usize,
) -> usize {
    let mut current_row = row + 1;

    centered(
        canvas,
        current_row,
        cols,
        &[(Theme::fg(&theme.colors.brand_accent), TAGLINE)],
    );
    current_row += 1;

    centered(
        canvas,
        current_row,
        cols,
        &[
            (format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg)), HEADLINE),
            (format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.link_active_fg)), HEADLINE_ACCENT),
        ],
    );
    current_row += 2;

    current_row = render_search_bar(canvas, current_row, hero, theme, cols);
    current_row += 1;

    canvas.position_cursor(current_row, 1);
    canvas.write("  ");
    canvas.write(Theme::bold());
    canvas.write(&Theme::fg(&theme.colors.link_active_fg));
    canvas.write(FEED_HEADING);
    canvas.write(&Theme::fg(&theme.colors.header_fg));
    canvas.write(FEED_HEADING_REST);
    canvas.write(Theme::reset());
    current_row += 2;

    render_feed(canvas, current_row, feed, theme, cols, bottom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::strip_ansi;

    #[test]
    fn renders_banner_search_and_feed_heading() {
        let hero = HeroView {
            draft: String::new(),
            is_typing: false,
        };
        let mut canvas = Canvas::new();
        render_home(&mut canvas, 3, &hero, &FeedView::Loading, &Theme::default(), 90, 30);
        let text = strip_ansi(canvas.as_str());

        assert!(text.contains(TAGLINE));
        assert!(text.contains("Search, Apply & Get Your Dream Jobs"));
        assert!(text.contains("Find your dream jobs"));
        assert!(text.contains("Latest & Top Job Openings"));
        assert!(text.contains("Loading jobs..."));
    }
}
