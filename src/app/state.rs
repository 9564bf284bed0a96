//! Application state management and view model computation.
//!
//! [`AppState`] owns everything the plugin knows: the three shared stores, the
//! gateways, the router, notifications and the view-local component state. It
//! is created once at plugin load and dropped at unload; components receive the
//! pieces they need by reference.
//!
//! # State Components
//!
//! - **Stores**: session, committed search query, job collection
//! - **Gateways**: auth (logout) and job listing request builders
//! - **Router**: current route and back history
//! - **Components**: navbar menus, hero draft, feed and result selections
//! - **Input Mode**: Normal or Typing (hero draft focus)
//!
//! View-local component state is reset on every route change, see
//! [`AppState::sync_route`].
//!
//! # Example
//!
//! ```
//! use hirepoint::app::AppState;
//! use hirepoint::gateway::{AuthGateway, JobListingGateway};
//! use hirepoint::ui::Theme;
//!
//! let state = AppState::new(
//!     AuthGateway::new("http://localhost:8000/api/v1/user", None),
//!     JobListingGateway::new("http://localhost:8000/api/v1/job"),
//!     4,
//!     Theme::default(),
//! );
//! let viewmodel = state.compute_viewmodel(24, 100);
//! assert!(!viewmodel.compact);
//! ```

use super::browse::{filter_jobs, highlight_ranges, BrowseResults};
use super::feed::{FeedView as FeedCards, JobFeed};
use super::hero::HeroSearch;
use super::modes::InputMode;
use super::navbar::{AccountItem, NavigationBar};
use super::navigator::Router;
use super::notifications::Toasts;
use crate::domain::{JobSummary, Route, SessionState};
use crate::gateway::{AuthGateway, HttpRequest, JobListingGateway};
use crate::store::{JobStore, SearchQueryStore, SessionStore};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    AccountMenuView, DetailView, DisplayItem, EmptyState, FeedView, FooterInfo, HeroView, JobCard,
    MenuEntry, NavbarView, PageView, ProfileView, ResultsView, ToastView, UIViewModel,
};

/// Terminals narrower than this use the compact navbar with a mobile panel.
pub const COMPACT_WIDTH: usize = 80;

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Signed-in user.
    pub session: SessionStore,

    /// Committed search query, written by the hero search and read by browse.
    pub search: SearchQueryStore,

    /// Job postings in service order.
    pub jobs: JobStore,

    /// Logout request builder; holds the session credentials.
    pub auth: AuthGateway,

    /// Job listing request builder.
    pub listing: JobListingGateway,

    /// Current route and back history.
    pub router: Router,

    /// Live notifications.
    pub toasts: Toasts,

    pub navbar: NavigationBar,
    pub hero: HeroSearch,
    pub feed: JobFeed,
    pub results: BrowseResults,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// A job listing request is outstanding.
    pub jobs_loading: bool,

    /// Jobs have been received at least once.
    pub jobs_loaded: bool,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    tick_pending: bool,
    seen_transitions: usize,
}

impl AppState {
    #[must_use]
    pub fn new(auth: AuthGateway, listing: JobListingGateway, toast_seconds: u32, theme: Theme) -> Self {
        Self {
            session: SessionStore::new(),
            search: SearchQueryStore::new(),
            jobs: JobStore::new(),
            auth,
            listing,
            router: Router::new(),
            toasts: Toasts::new(toast_seconds),
            navbar: NavigationBar::new(),
            hero: HeroSearch::new(),
            feed: JobFeed::new(),
            results: BrowseResults::new(),
            input_mode: InputMode::Normal,
            jobs_loading: false,
            jobs_loaded: false,
            theme,
            tick_pending: false,
            seen_transitions: 0,
        }
    }

    #[must_use]
    pub const fn route(&self) -> &Route {
        self.router.current()
    }

    /// Rows of the result list for `route`: the filtered collection on
    /// `/browse`, everything on `/jobs`, nothing elsewhere.
    #[must_use]
    pub fn results_for<'a>(route: &Route, jobs: &'a JobStore, search: &SearchQueryStore) -> Vec<&'a JobSummary> {
        match route {
            Route::Browse => filter_jobs(jobs.jobs(), search.query()),
            Route::Jobs => jobs.jobs().iter().collect(),
            _ => vec![],
        }
    }

    #[must_use]
    pub fn visible_results(&self) -> Vec<&JobSummary> {
        Self::results_for(self.route(), &self.jobs, &self.search)
    }

    /// Resets view-local state if the route changed since the last call.
    ///
    /// Closes navbar menus, clears the hero draft, rewinds selections and
    /// leaves Typing mode. Returns whether a change was seen.
    pub fn sync_route(&mut self) -> bool {
        let transitions = self.router.transitions();
        if transitions == self.seen_transitions {
            return false;
        }
        self.seen_transitions = transitions;

        tracing::debug!(route = %self.route(), "route changed, resetting view state");
        self.navbar.close_menus();
        self.hero.clear();
        self.feed.reset();
        self.results.reset();
        self.input_mode = InputMode::Normal;
        true
    }

    /// Builds a job listing request unless one is already outstanding.
    pub fn begin_jobs_refresh(&mut self) -> Option<HttpRequest> {
        if self.jobs_loading {
            tracing::debug!("job refresh already in flight");
            return None;
        }
        self.jobs_loading = true;
        Some(self.listing.jobs_request("", self.auth.credentials()))
    }

    /// Re-clamps selections after the job collection changed.
    pub fn sync_selections(&mut self) {
        self.feed.sync(self.jobs.jobs());
        let visible = self.visible_results().len();
        self.results.sync(visible);
    }

    /// Returns true when a notification-expiry tick should be scheduled.
    pub fn claim_tick(&mut self) -> bool {
        if self.toasts.is_empty() || self.tick_pending {
            return false;
        }
        self.tick_pending = true;
        true
    }

    /// Marks the scheduled tick as delivered.
    pub fn tick_delivered(&mut self) {
        self.tick_pending = false;
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// Result lists longer than the available rows are windowed around the
    /// selection:
    ///
    /// 1. Subtract UI chrome (navbar, panel, headings, toast, footer)
    /// 2. Center the window on the selected row
    /// 3. Slide the window back when it would run past the end
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let navbar = self.compute_navbar();
        let panel_rows = navbar.mobile_panel.as_ref().map_or(0, Vec::len);
        UIViewModel {
            page: self.compute_page(self.calculate_available_rows(rows, panel_rows)),
            navbar,
            toast: self.toasts.latest().map(|toast| ToastView {
                kind: toast.kind,
                message: toast.message.clone(),
            }),
            footer: self.compute_footer(),
            compact: cols < COMPACT_WIDTH,
        }
    }

    fn compute_navbar(&self) -> NavbarView {
        let session = self.session.state();
        let current = self.route();

        let links: Vec<MenuEntry> = self
            .navbar
            .links(session)
            .iter()
            .zip('1'..='9')
            .map(|(link, hotkey)| MenuEntry {
                label: link.label().to_string(),
                hotkey,
                is_active: &link.route() == current,
                is_disabled: false,
            })
            .collect();

        let auth_actions: Vec<MenuEntry> = self
            .navbar
            .auth_actions(session)
            .iter()
            .zip(['l', 's'])
            .map(|(action, hotkey)| MenuEntry {
                label: action.label().to_string(),
                hotkey,
                is_active: &action.route() == current,
                is_disabled: false,
            })
            .collect();

        let account_entries = self.account_entries(session);

        let account_menu = if self.navbar.is_account_menu_open(session) {
            session.user().map(|user| AccountMenuView {
                display_name: user.display_name.clone(),
                bio: user.profile.bio.clone(),
                items: account_entries.clone(),
            })
        } else {
            None
        };

        let mobile_panel = self.navbar.is_mobile_menu_open().then(|| {
            let mut entries = links.clone();
            if session.is_authenticated() {
                entries.extend(account_entries.iter().cloned());
            } else {
                entries.extend(auth_actions.iter().cloned());
            }
            entries
        });

        NavbarView {
            links,
            auth_actions,
            avatar: session.user().map(|user| initials(&user.display_name)),
            account_menu,
            mobile_panel,
        }
    }

    fn account_entries(&self, session: &SessionState) -> Vec<MenuEntry> {
        self.navbar
            .account_items(session)
            .into_iter()
            .map(|item| match item {
                AccountItem::ViewProfile => MenuEntry {
                    label: item.label().to_string(),
                    hotkey: 'p',
                    is_active: self.route() == &Route::Profile,
                    is_disabled: false,
                },
                AccountItem::Logout => MenuEntry {
                    label: if self.navbar.is_logout_pending() {
                        "Logging out...".to_string()
                    } else {
                        item.label().to_string()
                    },
                    hotkey: 'L',
                    is_active: false,
                    is_disabled: self.navbar.is_logout_pending(),
                },
            })
            .collect()
    }

    fn compute_page(&self, available_rows: usize) -> PageView {
        match self.route() {
            Route::Home => PageView::Home {
                hero: HeroView {
                    draft: self.hero.draft().to_string(),
                    is_typing: self.input_mode == InputMode::Typing,
                },
                feed: self.compute_feed(),
            },
            Route::Browse | Route::Jobs => PageView::Results(self.compute_results(available_rows)),
            Route::Description(id) => self.jobs.find(id).map_or_else(
                || {
                    PageView::Empty(EmptyState {
                        message: "Job not found".to_string(),
                        subtitle: format!("No posting with id {id}. Press Backspace to go back."),
                    })
                },
                |job| {
                    PageView::Detail(DetailView {
                        title: job.title.clone(),
                        employer: job.employer().to_string(),
                        positions: job.positions_label(),
                        job_type: job.job_type.clone(),
                        salary: job.salary_label(),
                        description: job.description.clone(),
                    })
                },
            ),
            Route::Profile => self.session.user().map_or_else(
                || {
                    PageView::Empty(EmptyState {
                        message: "Not signed in".to_string(),
                        subtitle: "Log in from the HirePoint web app to see your profile".to_string(),
                    })
                },
                |user| {
                    PageView::Profile(ProfileView {
                        display_name: user.display_name.clone(),
                        role: user.role.label().to_string(),
                        bio: user.profile.bio.clone(),
                        photo: user.profile.photo.clone(),
                    })
                },
            ),
            Route::Login | Route::Signup | Route::AdminCompanies | Route::AdminJobs => {
                PageView::Placeholder(EmptyState {
                    message: self.route().title().to_string(),
                    subtitle: "This page is available in the HirePoint web app".to_string(),
                })
            }
        }
    }

    fn compute_feed(&self) -> FeedView {
        if self.jobs_loading && !self.jobs_loaded {
            return FeedView::Loading;
        }
        match JobFeed::view(self.jobs.jobs()) {
            FeedCards::Empty => FeedView::Empty("No Job Available".to_string()),
            FeedCards::Cards(cards) => FeedView::Cards(
                cards
                    .iter()
                    .enumerate()
                    .map(|(idx, job)| JobCard {
                        employer: job.employer().to_string(),
                        title: job.title.clone(),
                        description: job.description.clone(),
                        positions: job.positions_label(),
                        job_type: job.job_type.clone(),
                        salary: job.salary_label(),
                        is_selected: idx == self.feed.selected_index(),
                    })
                    .collect(),
            ),
        }
    }

    fn compute_results(&self, available_rows: usize) -> ResultsView {
        let results = self.visible_results();
        let query = match self.route() {
            Route::Browse => Some(self.search.query().to_string()),
            _ => None,
        };
        let heading = match self.route() {
            Route::Browse => "Search Results",
            _ => "All Jobs",
        };
        let title = format!("{heading} ({})", results.len());

        if results.is_empty() {
            let empty_state = if self.jobs_loading {
                EmptyState {
                    message: "Loading jobs...".to_string(),
                    subtitle: String::new(),
                }
            } else if query.as_deref().is_some_and(|q| !q.trim().is_empty()) {
                EmptyState {
                    message: "No jobs match your search".to_string(),
                    subtitle: "Press / to try another query".to_string(),
                }
            } else {
                EmptyState {
                    message: "No Job Available".to_string(),
                    subtitle: "Press r to refresh".to_string(),
                }
            };
            return ResultsView {
                title,
                query,
                items: vec![],
                selected_index: 0,
                empty_state: Some(empty_state),
            };
        }

        let selected = self.results.selected_index();
        let available_rows = available_rows.max(1);

        let mut visible_start = selected.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(results.len());
        if visible_end - visible_start < available_rows && results.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let needle = query.as_deref().unwrap_or("");
        let items = results[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, job)| DisplayItem {
                title: job.title.clone(),
                employer: job.employer().to_string(),
                job_type: job.job_type.clone(),
                salary: job.salary_label(),
                is_selected: visible_start + relative_idx == selected,
                highlight_ranges: highlight_ranges(&job.title, needle),
            })
            .collect();

        ResultsView {
            title,
            query,
            items,
            selected_index: selected.saturating_sub(visible_start),
            empty_state: None,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, self.route()) {
            (InputMode::Typing, _) => "Enter: search  Esc: cancel  Type to edit",
            (InputMode::Normal, Route::Home | Route::Browse | Route::Jobs) => {
                "j/k: select  Enter: open  /: search  m: menu  a: account  r: refresh  q: quit"
            }
            (InputMode::Normal, _) => "Backspace: back  /: search  m: menu  a: account  q: quit",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// Rows left for result rows after navbar (2), mobile panel, heading,
    /// query line and column headers (3), toast (1) and footer (2).
    const fn calculate_available_rows(&self, total_rows: usize, panel_rows: usize) -> usize {
        total_rows.saturating_sub(8 + panel_rows)
    }
}

/// Up to two uppercase initials, e.g. `"Asha Verma"` → `"AV"`.
fn initials(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if initials.is_empty() {
        "?".to_string()
    } else {
        initials
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::navigator::Navigator;
    use crate::domain::job::sample_job;
    use crate::domain::{Role, User};

    fn state() -> AppState {
        AppState::new(
            AuthGateway::new("http://api/user", None),
            JobListingGateway::new("http://api/job"),
            4,
            Theme::default(),
        )
    }

    #[test]
    fn initials_from_display_name() {
        assert_eq!(initials("Asha Verma"), "AV");
        assert_eq!(initials("cher"), "C");
        assert_eq!(initials("  "), "?");
    }

    #[test]
    fn home_feed_caps_cards() {
        let mut state = state();
        state.jobs_loaded = true;
        state.jobs.replace((0..9).map(|i| sample_job(&i.to_string(), "Job")).collect());

        let vm = state.compute_viewmodel(40, 120);
        let PageView::Home { feed: FeedView::Cards(cards), .. } = vm.page else {
            panic!("expected feed cards");
        };
        assert_eq!(cards.len(), 6);
        assert!(cards[0].is_selected);
    }

    #[test]
    fn empty_feed_shows_indicator() {
        let mut state = state();
        state.jobs_loaded = true;
        let vm = state.compute_viewmodel(40, 120);
        assert!(matches!(vm.page, PageView::Home { feed: FeedView::Empty(_), .. }));
    }

    #[test]
    fn route_change_resets_menus_and_draft() {
        let mut state = state();
        state.navbar.toggle_mobile_menu();
        state.hero.on_input("rust");
        state.input_mode = InputMode::Typing;

        state.router.go_to(Route::Jobs);
        assert!(state.sync_route());

        assert!(!state.navbar.is_mobile_menu_open());
        assert_eq!(state.hero.draft(), "");
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(!state.sync_route());
    }

    #[test]
    fn browse_page_filters_by_committed_query() {
        let mut state = state();
        state.jobs.replace(vec![sample_job("a", "Rust Engineer"), sample_job("b", "Designer")]);
        state.search.set_query("rust");
        state.router.go_to(Route::Browse);

        let vm = state.compute_viewmodel(40, 120);
        let PageView::Results(results) = vm.page else {
            panic!("expected results");
        };
        assert_eq!(results.title, "Search Results (1)");
        assert_eq!(results.items[0].title, "Rust Engineer");
        assert_eq!(results.items[0].highlight_ranges, vec![(0, 4)]);
    }

    #[test]
    fn results_window_follows_selection() {
        let mut state = state();
        state.jobs.replace((0..30).map(|i| sample_job(&i.to_string(), &format!("Job {i}"))).collect());
        state.router.go_to(Route::Jobs);
        for _ in 0..29 {
            state.results.select_next(30);
        }

        let vm = state.compute_viewmodel(18, 120);
        let PageView::Results(results) = vm.page else {
            panic!("expected results");
        };
        assert_eq!(results.items.len(), 10);
        assert_eq!(results.items.last().map(|item| item.title.as_str()), Some("Job 29"));
        assert_eq!(results.selected_index, 9);
    }

    #[test]
    fn unknown_description_is_not_found() {
        let mut state = state();
        state.router.go_to(Route::Description("missing".to_string()));
        let vm = state.compute_viewmodel(24, 100);
        assert!(matches!(vm.page, PageView::Empty(ref empty) if empty.message == "Job not found"));
    }

    #[test]
    fn narrow_terminal_is_compact_and_panel_lists_auth_actions() {
        let mut state = state();
        state.navbar.toggle_mobile_menu();
        let vm = state.compute_viewmodel(24, 60);

        assert!(vm.compact);
        let labels: Vec<String> = vm
            .navbar
            .mobile_panel
            .unwrap()
            .into_iter()
            .map(|entry| entry.label)
            .collect();
        assert_eq!(labels, vec!["Home", "Jobs", "Browse", "Login", "Signup"]);
    }

    #[test]
    fn account_menu_marks_pending_logout() {
        let mut state = state();
        state.session.set_user(Some(User::new("u", "Asha Verma", Role::Student)));
        state.navbar.toggle_account_menu(state.session.state());
        state.navbar.begin_logout(state.session.state(), &state.auth);

        let vm = state.compute_viewmodel(24, 100);
        let menu = vm.navbar.account_menu.unwrap();
        assert_eq!(menu.display_name, "Asha Verma");
        assert_eq!(vm.navbar.avatar.as_deref(), Some("AV"));
        let logout = menu.items.last().unwrap();
        assert!(logout.is_disabled);
    }
}
