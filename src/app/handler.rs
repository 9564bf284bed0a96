//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! pipe messages, web-request results and timers, translating them into state
//! changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. Components mutate state and ask the router to navigate
//! 4. Route changes reset view-local state ([`AppState::sync_route`])
//! 5. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `SelectNext`, `SelectPrevious`, `Activate`, `Back`,
//!   `FollowLink`, `Login`, `Signup`, `ViewProfile`
//! - **Input**: `FocusSearch`, `Char`, `Backspace`, `SubmitSearch`, `Escape`
//! - **Menus**: `ToggleMobileMenu`, `ToggleAccountMenu`
//! - **Session**: `Logout`, `SessionStarted`, `SessionExpired`
//! - **System**: `RefreshJobs`, `ResponseReceived`, `Tick`, `CloseFocus`
//!
//! # Example
//!
//! ```
//! use hirepoint::app::{handle_event, Action, AppState, Event};
//! use hirepoint::gateway::{AuthGateway, JobListingGateway};
//! use hirepoint::ui::Theme;
//!
//! let mut state = AppState::new(
//!     AuthGateway::new("http://localhost:8000/api/v1/user", None),
//!     JobListingGateway::new("http://localhost:8000/api/v1/job"),
//!     4,
//!     Theme::default(),
//! );
//! let (_render, actions) = handle_event(&mut state, &Event::RefreshJobs)?;
//! assert!(matches!(actions.as_slice(), [Action::SendRequest(_)]));
//! # Ok::<(), hirepoint::HirepointError>(())
//! ```

use super::modes::InputMode;
use super::navbar::AuthAction;
use super::navigator::Navigator;
use super::notifications::{NotificationKind, NotificationSink};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{Route, User};
use crate::gateway::{AuthGateway, GatewayError, HttpOutcome, JobListingGateway, RequestKind};

/// Delay between notification-expiry checks.
const TICK_SECONDS: f64 = 1.0;

/// Shown when the job listing fails without a server message.
const JOBS_FALLBACK_MESSAGE: &str = "Could not load jobs. Press r to retry.";

const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

/// Events triggered by user input, pipe messages or host callbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves the card/row selection down (wraps to top).
    SelectNext,
    /// Moves the card/row selection up (wraps to bottom).
    SelectPrevious,
    /// Opens the selected card or row.
    Activate,
    /// Returns to the previous route.
    Back,
    /// Hides the plugin pane.
    CloseFocus,

    /// Focuses the hero search box, opening the home page if needed.
    FocusSearch,
    /// Appends a character to the hero draft.
    Char(char),
    /// Removes the last character from the hero draft.
    Backspace,
    /// Commits the hero draft and opens the browse page.
    SubmitSearch,
    /// Leaves typing, closes open menus, or hides the plugin, whichever applies first.
    Escape,

    ToggleMobileMenu,
    ToggleAccountMenu,
    /// Follows the zero-based navbar link.
    FollowLink(usize),
    Login,
    Signup,
    ViewProfile,
    Logout,

    /// Requests a fresh job listing.
    RefreshJobs,

    /// A web request issued through [`Action::SendRequest`] completed.
    ResponseReceived {
        /// Which request this answers.
        kind: RequestKind,
        /// Response or transport failure.
        outcome: HttpOutcome,
    },

    /// The web app signed a user in (pipe message).
    SessionStarted {
        user: User,
        /// Cookie to attach to later requests.
        credentials: Option<String>,
    },

    /// The web app reported the session as expired (pipe message).
    SessionExpired,

    /// Timer fired; expires old notifications.
    Tick,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. Actions are executed in order by the runtime.
///
/// # Errors
///
/// Reserved for failures the runtime must log; every gateway failure is turned
/// into a notification instead.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let (render, mut actions) = match event {
        Event::SelectNext => (select(state, true), vec![]),
        Event::SelectPrevious => (select(state, false), vec![]),
        Event::Activate => (activate(state), vec![]),
        Event::Back => (state.router.back(), vec![]),
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
        Event::FocusSearch => {
            if state.route() != &Route::Home {
                state.router.go_to(Route::Home);
                state.sync_route();
            }
            state.hero.on_input(state.search.query());
            state.input_mode = InputMode::Typing;
            (true, vec![])
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Typing {
                return Ok((false, vec![]));
            }
            state.hero.push_char(*c);
            tracing::trace!(draft = %state.hero.draft(), char = %c, "hero draft updated");
            (true, vec![])
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Typing {
                return Ok((false, vec![]));
            }
            state.hero.pop_char();
            (true, vec![])
        }
        Event::SubmitSearch => {
            if state.input_mode != InputMode::Typing {
                return Ok((false, vec![]));
            }
            state.hero.submit(&mut state.search, &mut state.router);
            state.input_mode = InputMode::Normal;
            (true, vec![])
        }
        Event::Escape => {
            if state.input_mode == InputMode::Typing {
                tracing::debug!("leaving hero search without committing");
                state.input_mode = InputMode::Normal;
                (true, vec![])
            } else if state.navbar.close_menus() {
                (true, vec![])
            } else {
                (false, vec![Action::CloseFocus])
            }
        }
        Event::ToggleMobileMenu => {
            let open = state.navbar.toggle_mobile_menu();
            tracing::debug!(open, "mobile menu toggled");
            (true, vec![])
        }
        Event::ToggleAccountMenu => {
            let was_open = state.navbar.is_account_menu_open(state.session.state());
            let open = state.navbar.toggle_account_menu(state.session.state());
            (open != was_open, vec![])
        }
        Event::FollowLink(index) => (
            state.navbar.follow_link(*index, state.session.state(), &mut state.router),
            vec![],
        ),
        Event::Login => (
            state
                .navbar
                .follow_auth_action(AuthAction::Login, state.session.state(), &mut state.router),
            vec![],
        ),
        Event::Signup => (
            state
                .navbar
                .follow_auth_action(AuthAction::Signup, state.session.state(), &mut state.router),
            vec![],
        ),
        Event::ViewProfile => (
            state.navbar.view_profile(state.session.state(), &mut state.router),
            vec![],
        ),
        Event::Logout => state
            .navbar
            .begin_logout(state.session.state(), &state.auth)
            .map_or((false, vec![]), |request| (true, vec![Action::SendRequest(request)])),
        Event::RefreshJobs => state
            .begin_jobs_refresh()
            .map_or((false, vec![]), |request| (true, vec![Action::SendRequest(request)])),
        Event::ResponseReceived { kind, outcome } => match kind {
            RequestKind::Logout => (settle_logout(state, outcome.clone()), vec![]),
            RequestKind::Jobs => (settle_jobs(state, outcome.clone()), vec![]),
        },
        Event::SessionStarted { user, credentials } => {
            tracing::info!(user_id = %user.id, role = ?user.role, "session started");
            state.navbar.abandon_logout();
            state.session.set_user(Some(user.clone()));
            if credentials.is_some() {
                state.auth.set_credentials(credentials.clone());
            }
            state.navbar.close_menus();
            (true, vec![])
        }
        Event::SessionExpired => {
            if !state.session.state().is_authenticated() {
                tracing::debug!("session expiry while anonymous, ignoring");
                return Ok((false, vec![]));
            }
            tracing::info!("session expired");
            state.navbar.abandon_logout();
            state.session.set_user(None);
            state.auth.set_credentials(None);
            state.navbar.close_menus();
            if matches!(state.route(), Route::Profile | Route::AdminCompanies | Route::AdminJobs) {
                state.router.go_to(Route::Home);
            }
            state
                .toasts
                .notify(NotificationKind::Error, SESSION_EXPIRED_MESSAGE.to_string());
            (true, vec![])
        }
        Event::Tick => {
            state.tick_delivered();
            (state.toasts.expire(), vec![])
        }
    };

    let route_changed = state.sync_route();

    if state.claim_tick() {
        actions.push(Action::ScheduleTick { seconds: TICK_SECONDS });
    }

    Ok((render || route_changed, actions))
}

fn select(state: &mut AppState, forward: bool) -> bool {
    match state.route().clone() {
        Route::Home => {
            if forward {
                state.feed.select_next(state.jobs.jobs());
            } else {
                state.feed.select_previous(state.jobs.jobs());
            }
            true
        }
        Route::Browse | Route::Jobs => {
            let visible = state.visible_results().len();
            if forward {
                state.results.select_next(visible);
            } else {
                state.results.select_previous(visible);
            }
            true
        }
        _ => false,
    }
}

fn activate(state: &mut AppState) -> bool {
    let route = state.route().clone();
    match route {
        Route::Home => state.feed.activate(state.jobs.jobs(), &mut state.router),
        Route::Browse | Route::Jobs => {
            let results = AppState::results_for(&route, &state.jobs, &state.search);
            state.results.activate(&results, &mut state.router)
        }
        _ => false,
    }
}

fn settle_logout(state: &mut AppState, outcome: HttpOutcome) -> bool {
    if !state.navbar.is_logout_pending() {
        tracing::warn!("logout response without a pending logout, ignoring");
        return false;
    }
    let result = AuthGateway::settle_logout(outcome);
    state.navbar.complete_logout(
        result,
        &mut state.session,
        &mut state.auth,
        &mut state.router,
        &mut state.toasts,
    );
    true
}

fn settle_jobs(state: &mut AppState, outcome: HttpOutcome) -> bool {
    state.jobs_loading = false;
    match JobListingGateway::settle_jobs(outcome) {
        Ok(jobs) => {
            tracing::info!(job_count = jobs.len(), "jobs loaded");
            state.jobs.replace(jobs);
        }
        Err(GatewayError::Status { status: 404, .. }) => {
            tracing::info!("job service reports no jobs");
            state.jobs.replace(vec![]);
        }
        Err(e) => {
            tracing::warn!(error = %e, "job listing failed");
            state
                .toasts
                .notify(NotificationKind::Error, e.user_message(JOBS_FALLBACK_MESSAGE));
        }
    }
    state.jobs_loaded = true;
    state.sync_selections();
    true
}
