//! Navigation bar, mobile panel and account popover renderers.

use crate::ui::helpers::{char_len, truncate, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{AccountMenuView, MenuEntry, NavbarView};

/// Width of the account popover including borders.
const ACCOUNT_MENU_WIDTH: usize = 36;

fn entry_text(entry: &MenuEntry) -> String {
    format!("[{}] {}", entry.hotkey, entry.label)
}

fn entry_color<'a>(entry: &MenuEntry, theme: &'a Theme) -> &'a str {
    if entry.is_disabled {
        &theme.colors.text_dim
    } else if entry.is_active {
        &theme.colors.link_active_fg
    } else {
        &theme.colors.header_fg
    }
}

/// Renders the bar at `row`, the mobile panel below it when open, and a
/// separator. Returns the first free row.
///
/// # Layout
///
/// ```text
///  HirePoint                [1] Home  [2] Jobs  [3] Browse   [l] Login  [s] Signup
///  HirePoint                                                         [m] Menu
/// ```
///
/// The second form is used when `compact` is set; links move into the panel.
pub fn render_navbar(
    canvas: &mut Canvas,
    row: usize,
    navbar: &NavbarView,
    theme: &Theme,
    cols: usize,
    compact: bool,
) -> usize {
    let base_style = theme
        .colors
        .header_bg
        .as_ref()
        .map_or_else(String::new, |bg| Theme::bg(bg));

    let mut right: Vec<(String, String)> = Vec::new();
    if compact {
        let label = if navbar.mobile_panel.is_some() { "[m] Close" } else { "[m] Menu" };
        right.push((Theme::fg(&theme.colors.header_fg), label.to_string()));
    } else {
        for link in &navbar.links {
            right.push((Theme::fg(entry_color(link, theme)), entry_text(link)));
        }
        for action in &navbar.auth_actions {
            right.push((Theme::fg(entry_color(action, theme)), entry_text(action)));
        }
        if let Some(avatar) = &navbar.avatar {
            right.push((
                format!("{}{}", Theme::fg(&theme.colors.button_fg), Theme::bg(&theme.colors.button_bg)),
                format!(" {avatar} "),
            ));
            right.push((Theme::fg(&theme.colors.text_dim), "[a]".to_string()));
        }
    }

    let right_len: usize = right.iter().map(|(_, text)| char_len(text)).sum::<usize>()
        + 2 * right.len().saturating_sub(1);
    let brand_len = " HirePoint".len();

    canvas.position_cursor(row, 1);
    canvas.write(&base_style);
    canvas.write(Theme::bold());
    canvas.write(&Theme::fg(&theme.colors.header_fg));
    canvas.write(" Hire");
    canvas.write(&Theme::fg(&theme.colors.brand_accent));
    canvas.write("Point");
    canvas.write(Theme::reset());
    canvas.write(&base_style);

    canvas.pad(cols.saturating_sub(brand_len + right_len + 1));
    for (idx, (style, text)) in right.iter().enumerate() {
        if idx > 0 {
            canvas.pad(2);
        }
        canvas.write(style);
        canvas.write(text);
        canvas.write(Theme::reset());
        canvas.write(&base_style);
    }
    canvas.pad(1);
    canvas.write(Theme::reset());

    let mut next_row = row + 1;
    if let Some(panel) = &navbar.mobile_panel {
        for entry in panel {
            let text = entry_text(entry);
            let padding = cols.saturating_sub(char_len(&text)) / 2;
            canvas.position_cursor(next_row, 1);
            canvas.pad(padding);
            canvas.write(&Theme::fg(entry_color(entry, theme)));
            canvas.write(&text);
            canvas.write(Theme::reset());
            canvas.pad(cols.saturating_sub(padding + char_len(&text)));
            next_row += 1;
        }
    }

    super::render_border(canvas, next_row, &theme.colors.border, cols)
}

/// Draws the account popover anchored to the right edge at `row`.
///
/// ```text
/// ┌──────────────────────────────────┐
/// │ Asha Verma                       │
/// │ Frontend developer               │
/// │ [p] View Profile                 │
/// │ [L] Logout                       │
/// └──────────────────────────────────┘
/// ```
pub fn render_account_menu(canvas: &mut Canvas, row: usize, menu: &AccountMenuView, theme: &Theme, cols: usize) {
    let width = ACCOUNT_MENU_WIDTH.min(cols);
    let inner = width.saturating_sub(2);
    let col = cols.saturating_sub(width) + 1;

    let mut lines: Vec<(String, String)> = vec![(
        format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg)),
        menu.display_name.clone(),
    )];
    if let Some(bio) = menu.bio.as_deref().filter(|bio| !bio.trim().is_empty()) {
        lines.push((Theme::fg(&theme.colors.text_dim), bio.to_string()));
    }
    for item in &menu.items {
        lines.push((Theme::fg(entry_color(item, theme)), entry_text(item)));
    }

    let border = Theme::fg(&theme.colors.border);

    canvas.position_cursor(row, col);
    canvas.write(&border);
    canvas.write(&format!("┌{}┐", "─".repeat(inner)));
    canvas.write(Theme::reset());

    for (offset, (style, text)) in lines.iter().enumerate() {
        let text = truncate(text, inner.saturating_sub(2));
        canvas.position_cursor(row + 1 + offset, col);
        canvas.write(&border);
        canvas.write("│ ");
        canvas.write(Theme::reset());
        canvas.write(style);
        canvas.write(&text);
        canvas.write(Theme::reset());
        canvas.pad(inner.saturating_sub(char_len(&text) + 1));
        canvas.write(&border);
        canvas.write("│");
        canvas.write(Theme::reset());
    }

    canvas.position_cursor(row + 1 + lines.len(), col);
    canvas.write(&border);
    canvas.write(&format!("└{}┘", "─".repeat(inner)));
    canvas.write(Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::strip_ansi;

    fn entry(label: &str, hotkey: char) -> MenuEntry {
        MenuEntry {
            label: label.to_string(),
            hotkey,
            is_active: false,
            is_disabled: false,
        }
    }

    fn navbar() -> NavbarView {
        NavbarView {
            links: vec![entry("Home", '1'), entry("Jobs", '2'), entry("Browse", '3')],
            auth_actions: vec![entry("Login", 'l'), entry("Signup", 's')],
            avatar: None,
            account_menu: None,
            mobile_panel: None,
        }
    }

    #[test]
    fn wide_bar_lists_links_and_auth_actions() {
        let mut canvas = Canvas::new();
        let next = render_navbar(&mut canvas, 1, &navbar(), &Theme::default(), 100, false);
        let text = strip_ansi(canvas.as_str());

        assert_eq!(next, 3);
        assert!(text.contains("HirePoint"));
        assert!(text.contains("[1] Home  [2] Jobs  [3] Browse  [l] Login  [s] Signup"));
    }

    #[test]
    fn compact_bar_hides_links_until_panel_opens() {
        let mut closed = Canvas::new();
        render_navbar(&mut closed, 1, &navbar(), &Theme::default(), 60, true);
        let text = strip_ansi(closed.as_str());
        assert!(text.contains("[m] Menu"));
        assert!(!text.contains("Browse"));

        let mut open_bar = navbar();
        open_bar.mobile_panel = Some(vec![entry("Home", '1'), entry("Login", 'l')]);
        let mut open = Canvas::new();
        let next = render_navbar(&mut open, 1, &open_bar, &Theme::default(), 60, true);
        let text = strip_ansi(open.as_str());
        assert_eq!(next, 5);
        assert!(text.contains("[m] Close"));
        assert!(text.contains("[l] Login"));
    }

    #[test]
    fn account_menu_lists_items() {
        let menu = AccountMenuView {
            display_name: "Asha Verma".to_string(),
            bio: Some("Frontend developer".to_string()),
            items: vec![entry("View Profile", 'p'), entry("Logout", 'L')],
        };
        let mut canvas = Canvas::new();
        render_account_menu(&mut canvas, 3, &menu, &Theme::default(), 100);
        let text = strip_ansi(canvas.as_str());

        assert!(text.contains("Asha Verma"));
        assert!(text.contains("Frontend developer"));
        assert!(text.contains("[p] View Profile"));
        assert!(text.contains("[L] Logout"));
    }
}
