//! Composable UI component renderers.
//!
//! Each component draws one part of the interface into a [`Canvas`] and
//! returns the next free row, so layouts are built by threading the row
//! through a sequence of calls.
//!
//! # Components
//!
//! - [`navbar`]: Brand, links, auth actions, avatar, mobile panel, account popover
//! - [`home`]: Hero banner and latest-jobs feed
//! - [`search`]: Hero search input box
//! - [`cards`]: Job cards in the feed
//! - [`table`]: Result list with columns (TITLE, COMPANY, TYPE, SALARY)
//! - [`detail`]: Job detail and profile pages
//! - [`empty`]: Empty state message
//! - [`toast`]: Notification line
//! - [`footer`]: Help text and keybinding hints
//!
//! # Layout
//!
//! ```text
//! [Navbar]
//! [Mobile panel, when open]
//! [Border]
//! [Page body]
//! [Blank padding to fill screen]
//! [Toast]
//! [Border]
//! [Footer]
//! ```
//!
//! The account popover is drawn last so it overlaps the page body.

pub mod cards;
pub mod detail;
pub mod empty;
pub mod footer;
pub mod home;
pub mod navbar;
pub mod search;
pub mod table;
pub mod toast;

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PageView, UIViewModel};

/// Rows below the page body: toast, border, footer.
pub const BOTTOM_CHROME: usize = 3;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub(crate) fn render_border(canvas: &mut Canvas, row: usize, color: &str, cols: usize) -> usize {
    canvas.position_cursor(row, 1);
    canvas.write(&Theme::fg(color));
    canvas.write(&"─".repeat(cols));
    canvas.write(Theme::reset());
    row + 1
}

/// Renders a full frame for `vm` into `canvas`.
pub fn render_layout(canvas: &mut Canvas, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let page_start = navbar::render_navbar(canvas, 1, &vm.navbar, theme, cols, vm.compact);
    let bottom = rows.saturating_sub(BOTTOM_CHROME);

    match &vm.page {
        PageView::Home { hero, feed } => {
            home::render_home(canvas, page_start, hero, feed, theme, cols, bottom);
        }
        PageView::Results(results) => {
            table::render_results(canvas, page_start, results, theme, cols);
        }
        PageView::Detail(detail_view) => {
            detail::render_detail(canvas, page_start, detail_view, theme, cols, bottom);
        }
        PageView::Profile(profile) => {
            detail::render_profile(canvas, page_start, profile, theme, cols);
        }
        PageView::Placeholder(empty_state) | PageView::Empty(empty_state) => {
            empty::render_empty_state(canvas, page_start + 3, empty_state, theme, cols);
        }
    }

    let toast_row = rows.saturating_sub(2);
    if let Some(toast_view) = &vm.toast {
        toast::render_toast(canvas, toast_row, toast_view, theme, cols);
    }
    render_border(canvas, toast_row + 1, &theme.colors.border, cols);
    footer::render_footer(canvas, rows, &vm.footer, theme, cols);

    if let Some(menu) = &vm.navbar.account_menu {
        navbar::render_account_menu(canvas, page_start, menu, theme, cols);
    }
}
