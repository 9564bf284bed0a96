//! Shared rendering utilities and helpers.
//!
//! Components draw into a [`Canvas`], an ANSI output buffer, instead of
//! printing directly. The renderer prints the finished frame in one go.
//!
//! # Features
//!
//! - **Cursor Positioning**: absolute `row;col` moves
//! - **Fuzzy Match Highlighting**: text with highlighted character ranges
//! - **UTF-8 Safe**: widths and truncation operate on characters, not bytes

use crate::ui::theme::Theme;

/// ANSI frame buffer.
#[derive(Debug, Default, Clone)]
pub struct Canvas {
    buf: String,
}

impl Canvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor to a 1-indexed `row`/`col` (`\u{1b}[{row};{col}H`).
    pub fn position_cursor(&mut self, row: usize, col: usize) {
        self.buf.push_str(&format!("\u{1b}[{row};{col}H"));
    }

    /// Appends text or an escape sequence.
    pub fn write(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Appends `count` spaces.
    pub fn pad(&mut self, count: usize) {
        self.buf.extend(std::iter::repeat(' ').take(count));
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Display width in characters.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` characters, ending in `...` when shortened.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if char_len(text) <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

/// Greedy word wrap to `width` characters. Words longer than a line are cut.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let word = truncate(word, width);
            let needed = if line.is_empty() { char_len(&word) } else { char_len(&line) + 1 + char_len(&word) };
            if needed > width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&word);
        }
        lines.push(line);
    }
    lines
}

/// Renders text with highlighted character ranges for fuzzy matches.
///
/// Ranges are `(start, end)` character indices, exclusive end. When
/// `is_selected` is `true` highlighting is skipped so the selection background
/// stays intact. After each highlight the normal text color is restored.
pub fn render_highlighted_text(
    canvas: &mut Canvas,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        canvas.write(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            canvas.write(&normal_section);
        }

        canvas.write(&Theme::fg(&theme.colors.match_highlight_fg));
        canvas.write(&Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        canvas.write(&highlighted_section);
        canvas.write(Theme::reset());
        canvas.write(&Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        canvas.write(&remaining);
    }
}

/// Strips ANSI escape sequences, leaving printable text. Test helper for
/// asserting on rendered frames.
#[cfg(test)]
pub(crate) fn strip_ansi(text: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' && chars.peek() == Some(&'[') {
            chars.next();
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
