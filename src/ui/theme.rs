//! Theme management and ANSI escape sequence generation.
//!
//! Color schemes are TOML documents, either built in or loaded from a custom
//! file. Colors are hex strings converted to 24-bit ANSI escapes at render
//! time.
//!
//! # Built-in Themes
//!
//! - `hirepoint-dark`: Dark background with the brand violet and red (default)
//! - `hirepoint-light`: Light background matching the web app
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#e6e1f5"
//! brand_accent = "#f83002"
//! text_normal = "#e6e1f5"
//! text_dim = "#8a84a3"
//! border = "#3b3553"
//! link_active_fg = "#a78bfa"
//! button_fg = "#ffffff"
//! button_bg = "#6a38c2"
//! selection_fg = "#ffffff"
//! selection_bg = "#6a38c2"
//! search_bar_border = "#a78bfa"
//! match_highlight_fg = "#1a1625"
//! match_highlight_bg = "#fbbf24"
//! empty_state_fg = "#a78bfa"
//! badge_positions_fg = "#60a5fa"
//! badge_type_fg = "#f87171"
//! badge_salary_fg = "#c084fc"
//! success_fg = "#4ade80"
//! error_fg = "#f87171"
//! ```
//!
//! # Example
//!
//! ```
//! use hirepoint::ui::theme::Theme;
//!
//! let theme = Theme::from_name("hirepoint-light").unwrap();
//! print!("{}Hire{}", Theme::fg(&theme.colors.header_fg), Theme::reset());
//! print!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use crate::domain::error::{HirepointError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Theme used when none is configured.
pub const DEFAULT_THEME: &str = "hirepoint-dark";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g., "#6a38c2").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Navbar text and headings.
    pub header_fg: String,
    /// Optional navbar background.
    #[serde(default)]
    pub header_bg: Option<String>,
    /// Second half of the wordmark ("Point").
    pub brand_accent: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,
    /// Border and separator line color.
    pub border: String,

    /// Link pointing at the current route.
    pub link_active_fg: String,
    /// Filled button (Signup, Search).
    pub button_fg: String,
    pub button_bg: String,

    /// Selected card/row foreground.
    pub selection_fg: String,
    /// Selected card/row background.
    pub selection_bg: String,

    /// Search box border color.
    pub search_bar_border: String,
    /// Fuzzy match highlight foreground.
    pub match_highlight_fg: String,
    /// Fuzzy match highlight background.
    pub match_highlight_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Job card badges.
    pub badge_positions_fg: String,
    pub badge_type_fg: String,
    pub badge_salary_fg: String,

    /// Notification colors.
    pub success_fg: String,
    pub error_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `hirepoint-dark`, `hirepoint-light`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "hirepoint-dark" => include_str!("../../themes/hirepoint-dark.toml"),
            "hirepoint-light" => include_str!("../../themes/hirepoint-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// - [`HirepointError::Io`] if the file cannot be read
    /// - [`HirepointError::Theme`] if the TOML is invalid or misses a color
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents).map_err(|e| HirepointError::Theme(e.to_string()))
    }

    /// Picks the theme for a configuration: custom file first, then built-in
    /// name, then [`DEFAULT_THEME`]. Failures are logged and fall through.
    #[must_use]
    pub fn resolve(theme_name: Option<&str>, theme_file: Option<&str>) -> Self {
        if let Some(theme_file) = theme_file {
            match Self::from_file(theme_file) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                }
            }
        }

        theme_name.map_or_else(Self::default, |theme_name| {
            Self::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Self::default()
            })
        })
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Strips `#` prefix if present. Returns `(255, 255, 255)` (white) on
    /// parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color escape (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Two-color palette used only if the bundled default fails to parse.
    fn monochrome() -> Self {
        let fg = "#e5e5e5".to_string();
        let bg = "#262626".to_string();
        Self {
            name: "monochrome".to_string(),
            colors: ThemeColors {
                header_fg: fg.clone(),
                header_bg: None,
                brand_accent: fg.clone(),
                text_normal: fg.clone(),
                text_dim: "#a3a3a3".to_string(),
                border: "#525252".to_string(),
                link_active_fg: fg.clone(),
                button_fg: bg.clone(),
                button_bg: fg.clone(),
                selection_fg: bg.clone(),
                selection_bg: fg.clone(),
                search_bar_border: fg.clone(),
                match_highlight_fg: bg,
                match_highlight_bg: fg.clone(),
                empty_state_fg: fg.clone(),
                badge_positions_fg: fg.clone(),
                badge_type_fg: fg.clone(),
                badge_salary_fg: fg.clone(),
                success_fg: fg.clone(),
                error_fg: fg,
            },
        }
    }
}

impl Default for Theme {
    /// Returns [`DEFAULT_THEME`].
    ///
    /// ```
    /// use hirepoint::ui::Theme;
    ///
    /// assert_eq!(Theme::default().name, "hirepoint-dark");
    /// ```
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(Self::monochrome)
    }
}
