//! View model types representing renderable UI state.
//!
//! View models are immutable snapshots computed from application state. They
//! carry display-ready text, selection flags and highlight ranges, and no
//! business logic.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer.
//!
//! # Example
//!
//! ```
//! use hirepoint::ui::viewmodel::{EmptyState, PageView};
//!
//! let page = PageView::Placeholder(EmptyState {
//!     message: "Login".to_string(),
//!     subtitle: "Sign in from the HirePoint web app".to_string(),
//! });
//! assert!(matches!(page, PageView::Placeholder(_)));
//! ```

use crate::app::notifications::NotificationKind;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    /// Top navigation bar.
    pub navbar: NavbarView,

    /// Route-specific page body.
    pub page: PageView,

    /// Most recent live notification, shown above the footer.
    pub toast: Option<ToastView>,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// Narrow-terminal layout: links collapse into the mobile panel.
    pub compact: bool,
}

/// One selectable entry in the navbar or a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    /// Key that triggers the entry, shown as `[k]`.
    pub hotkey: char,
    /// Entry points at the current route.
    pub is_active: bool,
    /// Entry is shown but cannot be triggered right now.
    pub is_disabled: bool,
}

/// Account popover contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountMenuView {
    pub display_name: String,
    pub bio: Option<String>,
    pub items: Vec<MenuEntry>,
}

/// Navigation bar state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarView {
    pub links: Vec<MenuEntry>,
    /// Login/Signup while anonymous, empty otherwise.
    pub auth_actions: Vec<MenuEntry>,
    /// Signed-in user's initials for the avatar chip.
    pub avatar: Option<String>,
    /// Present while the account popover is open.
    pub account_menu: Option<AccountMenuView>,
    /// Present while the mobile panel is open. Lists links followed by either
    /// auth actions or account entries.
    pub mobile_panel: Option<Vec<MenuEntry>>,
}

/// Landing-page search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroView {
    pub draft: String,
    pub is_typing: bool,
}

/// A card in the latest-jobs feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCard {
    pub employer: String,
    pub title: String,
    pub description: String,
    pub positions: String,
    pub job_type: String,
    pub salary: String,
    pub is_selected: bool,
}

/// Body of the latest-jobs section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedView {
    Loading,
    /// No jobs: indicator text and no cards.
    Empty(String),
    Cards(Vec<JobCard>),
}

/// One row of a result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub title: String,
    pub employer: String,
    pub job_type: String,
    pub salary: String,
    pub is_selected: bool,

    /// Character ranges of `title` to highlight (fuzzy search matches).
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Search results or the full job list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    /// Heading, e.g. `Search Results (3)`.
    pub title: String,
    /// Committed query shown above the table, `None` for the full list.
    pub query: Option<String>,
    /// Visible window of rows.
    pub items: Vec<DisplayItem>,
    /// Selected row within `items`.
    pub selected_index: usize,
    /// Shown instead of the table when nothing matches.
    pub empty_state: Option<EmptyState>,
}

/// Job detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub employer: String,
    pub positions: String,
    pub job_type: String,
    pub salary: String,
    pub description: String,
}

/// Signed-in user's profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub display_name: String,
    pub role: String,
    pub bio: Option<String>,
    pub photo: Option<String>,
}

/// Route-specific page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    Home { hero: HeroView, feed: FeedView },
    Results(ResultsView),
    Detail(DetailView),
    Profile(ProfileView),
    /// Informational page for flows that live in the web application.
    Placeholder(EmptyState),
    /// Missing content, e.g. unknown job id.
    Empty(EmptyState),
}

/// Notification line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub kind: NotificationKind,
    pub message: String,
}

/// Footer display information.
///
/// Contains help text and keybinding hints for the bottom of the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "j/k: select  Enter: open  q: quit").
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "Job not found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
