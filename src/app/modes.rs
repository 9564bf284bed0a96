//! Input mode state for the application.
//!
//! # State Machine
//!
//! - **Normal**: navigation keys, menu toggles and page shortcuts
//! - **Typing**: printable keys edit the hero search draft; Enter commits it,
//!   Esc leaves without committing
//!
//! Any route change drops back to `Normal`.
//!
//! # Example
//!
//! ```
//! use hirepoint::app::InputMode;
//!
//! assert_eq!(InputMode::default(), InputMode::Normal);
//! ```

/// Current input handling mode.
///
/// Controls which keybindings are active and the footer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (select), Enter (open), / (search), m (menu),
    /// a (account), 1-3 (links), r (refresh), Backspace (back), q (quit).
    #[default]
    Normal,

    /// Editing the hero search draft.
    Typing,
}
