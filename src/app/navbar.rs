//! Navigation bar: role-aware links, account menu and the logout transaction.
//!
//! # State Machine
//!
//! The bar combines view-local menu state with the shared session:
//!
//! ```text
//! {MenuClosed, MenuOpen} × {Anonymous, Authenticated(role)}
//! ```
//!
//! - `Recruiter` sees `Companies` and `Jobs` (admin).
//! - Everyone else, including anonymous visitors and unrecognised roles, sees
//!   `Home`, `Jobs` and `Browse`.
//! - The account menu exists only while authenticated. It offers `View Profile`
//!   to students and `Logout` to everyone.
//!
//! # Logout
//!
//! Logout is split around the network round-trip:
//!
//! 1. [`NavigationBar::begin_logout`] returns the request to send and disables
//!    the control until the request settles.
//! 2. [`NavigationBar::complete_logout`] consumes the settled
//!    [`LogoutResult`]. Only the `Ok` arm clears the session, drops the
//!    credentials and redirects home. The `Err` arm leaves the session alone and
//!    raises an error notification.

use super::navigator::Navigator;
use super::notifications::{NotificationKind, NotificationSink};
use crate::domain::{Role, Route, SessionState};
use crate::gateway::{AuthGateway, HttpRequest, LogoutResult};
use crate::store::SessionStore;

/// Shown when a failed logout carries no usable server message.
pub const LOGOUT_FALLBACK_MESSAGE: &str = "Logout failed. Please try again.";

/// A primary navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLink {
    Home,
    Jobs,
    Browse,
    Companies,
    AdminJobs,
}

impl NavLink {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Jobs | Self::AdminJobs => "Jobs",
            Self::Browse => "Browse",
            Self::Companies => "Companies",
        }
    }

    #[must_use]
    pub const fn route(self) -> Route {
        match self {
            Self::Home => Route::Home,
            Self::Jobs => Route::Jobs,
            Self::Browse => Route::Browse,
            Self::Companies => Route::AdminCompanies,
            Self::AdminJobs => Route::AdminJobs,
        }
    }
}

const RECRUITER_LINKS: &[NavLink] = &[NavLink::Companies, NavLink::AdminJobs];
const DEFAULT_LINKS: &[NavLink] = &[NavLink::Home, NavLink::Jobs, NavLink::Browse];

/// Link set for a session.
#[must_use]
pub fn links_for(session: &SessionState) -> &'static [NavLink] {
    match session.role() {
        Some(Role::Recruiter) => RECRUITER_LINKS,
        Some(Role::Student | Role::Unknown) | None => DEFAULT_LINKS,
    }
}

/// Buttons shown to anonymous visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    Signup,
}

impl AuthAction {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Signup => "Signup",
        }
    }

    #[must_use]
    pub const fn route(self) -> Route {
        match self {
            Self::Login => Route::Login,
            Self::Signup => Route::Signup,
        }
    }
}

/// Entries of the account menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountItem {
    ViewProfile,
    Logout,
}

impl AccountItem {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ViewProfile => "View Profile",
            Self::Logout => "Logout",
        }
    }
}

/// View-local navigation bar state.
///
/// Menu flags are owned here and never shared; they are reset whenever the
/// active route changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationBar {
    mobile_menu_open: bool,
    account_menu_open: bool,
    logout_in_flight: bool,
}

impl NavigationBar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn links(&self, session: &SessionState) -> &'static [NavLink] {
        links_for(session)
    }

    #[must_use]
    pub fn auth_actions(&self, session: &SessionState) -> &'static [AuthAction] {
        if session.is_authenticated() {
            &[]
        } else {
            &[AuthAction::Login, AuthAction::Signup]
        }
    }

    /// Account menu entries; empty while anonymous.
    #[must_use]
    pub fn account_items(&self, session: &SessionState) -> Vec<AccountItem> {
        match session.role() {
            None => vec![],
            Some(Role::Student) => vec![AccountItem::ViewProfile, AccountItem::Logout],
            Some(Role::Recruiter | Role::Unknown) => vec![AccountItem::Logout],
        }
    }

    #[must_use]
    pub const fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Whether the account popover is showing. Never true while anonymous.
    #[must_use]
    pub const fn is_account_menu_open(&self, session: &SessionState) -> bool {
        self.account_menu_open && session.is_authenticated()
    }

    #[must_use]
    pub const fn is_logout_pending(&self) -> bool {
        self.logout_in_flight
    }

    /// Forgets an outstanding logout after the session changed from outside
    /// (login handoff or expiry). Its response is then treated as stray.
    pub fn abandon_logout(&mut self) {
        if self.logout_in_flight {
            tracing::info!("session changed while logout pending, dropping logout");
            self.logout_in_flight = false;
        }
    }

    /// Flips the mobile panel. Independent of the session.
    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.mobile_menu_open
    }

    /// Flips the account popover; stays closed while anonymous.
    pub fn toggle_account_menu(&mut self, session: &SessionState) -> bool {
        self.account_menu_open = session.is_authenticated() && !self.account_menu_open;
        self.account_menu_open
    }

    /// Closes every menu. Returns whether anything was open.
    pub fn close_menus(&mut self) -> bool {
        let was_open = self.mobile_menu_open || self.account_menu_open;
        self.mobile_menu_open = false;
        self.account_menu_open = false;
        was_open
    }

    /// Follows the `index`-th link (zero-based) of the current link set.
    pub fn follow_link(&self, index: usize, session: &SessionState, navigator: &mut impl Navigator) -> bool {
        let Some(link) = self.links(session).get(index) else {
            tracing::debug!(index, "no navigation link at index");
            return false;
        };
        navigator.go_to(link.route());
        true
    }

    /// Opens the login or signup page for anonymous visitors.
    pub fn follow_auth_action(&self, action: AuthAction, session: &SessionState, navigator: &mut impl Navigator) -> bool {
        if !self.auth_actions(session).contains(&action) {
            tracing::debug!(action = ?action, "auth action unavailable while signed in");
            return false;
        }
        navigator.go_to(action.route());
        true
    }

    /// Opens the profile page; only offered to students.
    pub fn view_profile(&self, session: &SessionState, navigator: &mut impl Navigator) -> bool {
        if !self.account_items(session).contains(&AccountItem::ViewProfile) {
            tracing::debug!(role = ?session.role(), "view profile unavailable");
            return false;
        }
        navigator.go_to(Route::Profile);
        true
    }

    /// Starts a logout and returns the request to send.
    ///
    /// Returns `None` when nobody is signed in or a logout is already
    /// outstanding; the control stays disabled until
    /// [`NavigationBar::complete_logout`] runs.
    pub fn begin_logout(&mut self, session: &SessionState, gateway: &AuthGateway) -> Option<HttpRequest> {
        if !session.is_authenticated() {
            tracing::debug!("logout requested while anonymous");
            return None;
        }
        if self.logout_in_flight {
            tracing::debug!("logout already in flight, ignoring");
            return None;
        }
        self.logout_in_flight = true;
        tracing::debug!("logout request issued");
        Some(gateway.logout_request())
    }

    /// Applies a settled logout.
    ///
    /// Runs once per [`NavigationBar::begin_logout`]. On success: clear the
    /// session, drop the credentials, navigate to `/`, notify with the server
    /// message. On failure: notify with the server message or
    /// [`LOGOUT_FALLBACK_MESSAGE`] and change nothing else.
    pub fn complete_logout(
        &mut self,
        result: LogoutResult,
        session: &mut SessionStore,
        gateway: &mut AuthGateway,
        navigator: &mut impl Navigator,
        notifier: &mut impl NotificationSink,
    ) {
        self.logout_in_flight = false;

        match result {
            Ok(receipt) => {
                tracing::info!("logout confirmed");
                session.set_user(None);
                gateway.set_credentials(None);
                self.close_menus();
                navigator.go_to(Route::Home);
                notifier.notify(NotificationKind::Success, receipt.message);
            }
            Err(e) => {
                tracing::warn!(error = %e, "logout failed, session kept");
                notifier.notify(NotificationKind::Error, e.user_message(LOGOUT_FALLBACK_MESSAGE));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use crate::gateway::{GatewayError, LogoutReceipt};

    #[derive(Default)]
    struct RecordingNavigator(Vec<Route>);

    impl Navigator for RecordingNavigator {
        fn go_to(&mut self, route: Route) {
            self.0.push(route);
        }
    }

    #[derive(Default)]
    struct RecordingSink(Vec<(NotificationKind, String)>);

    impl NotificationSink for RecordingSink {
        fn notify(&mut self, kind: NotificationKind, message: String) {
            self.0.push((kind, message));
        }
    }

    fn signed_in(role: Role) -> SessionStore {
        let mut store = SessionStore::new();
        store.set_user(Some(User::new("u1", "Asha", role)));
        store
    }

    fn gateway() -> AuthGateway {
        AuthGateway::new("http://localhost:8000/api/v1/user", Some("token=abc".to_string()))
    }

    #[test]
    fn recruiter_sees_admin_links() {
        let session = signed_in(Role::Recruiter);
        let bar = NavigationBar::new();
        assert_eq!(bar.links(session.state()), &[NavLink::Companies, NavLink::AdminJobs]);
        assert_eq!(bar.account_items(session.state()), vec![AccountItem::Logout]);
    }

    #[test]
    fn student_sees_default_links_and_profile() {
        let session = signed_in(Role::Student);
        let bar = NavigationBar::new();
        assert_eq!(bar.links(session.state()), &[NavLink::Home, NavLink::Jobs, NavLink::Browse]);
        assert_eq!(
            bar.account_items(session.state()),
            vec![AccountItem::ViewProfile, AccountItem::Logout]
        );
        assert!(bar.auth_actions(session.state()).is_empty());
    }

    #[test]
    fn unknown_role_falls_back_to_default_links_without_profile() {
        let user: User = serde_json::from_str(r#"{"_id":"e","fullname":"Emp","role":"employer"}"#).unwrap();
        let mut session = SessionStore::new();
        session.set_user(Some(user));
        let bar = NavigationBar::new();

        assert_eq!(bar.links(session.state()), DEFAULT_LINKS);
        assert_eq!(bar.account_items(session.state()), vec![AccountItem::Logout]);
    }

    #[test]
    fn anonymous_sees_default_links_and_auth_actions() {
        let session = SessionStore::new();
        let mut bar = NavigationBar::new();
        assert_eq!(bar.links(session.state()), DEFAULT_LINKS);
        assert_eq!(bar.auth_actions(session.state()), &[AuthAction::Login, AuthAction::Signup]);
        assert!(bar.account_items(session.state()).is_empty());
        assert!(!bar.toggle_account_menu(session.state()));
        assert!(!bar.is_account_menu_open(session.state()));
    }

    #[test]
    fn mobile_toggle_twice_restores_visibility() {
        let mut bar = NavigationBar::new();
        let initial = bar.is_mobile_menu_open();
        bar.toggle_mobile_menu();
        assert_ne!(bar.is_mobile_menu_open(), initial);
        bar.toggle_mobile_menu();
        assert_eq!(bar.is_mobile_menu_open(), initial);
    }

    #[test]
    fn follow_link_uses_role_link_set() {
        let session = signed_in(Role::Recruiter);
        let bar = NavigationBar::new();
        let mut nav = RecordingNavigator::default();

        assert!(bar.follow_link(1, session.state(), &mut nav));
        assert!(!bar.follow_link(2, session.state(), &mut nav));
        assert_eq!(nav.0, vec![Route::AdminJobs]);
    }

    #[test]
    fn view_profile_only_for_students() {
        let bar = NavigationBar::new();
        let mut nav = RecordingNavigator::default();

        assert!(!bar.view_profile(signed_in(Role::Recruiter).state(), &mut nav));
        assert!(bar.view_profile(signed_in(Role::Student).state(), &mut nav));
        assert_eq!(nav.0, vec![Route::Profile]);
    }

    #[test]
    fn successful_logout_clears_session_redirects_and_notifies() {
        let mut session = signed_in(Role::Student);
        let mut gateway = gateway();
        let mut bar = NavigationBar::new();
        let mut nav = RecordingNavigator::default();
        let mut sink = RecordingSink::default();

        let request = bar.begin_logout(session.state(), &gateway).unwrap();
        assert_eq!(request.url, "http://localhost:8000/api/v1/user/logout");
        assert!(bar.is_logout_pending());

        bar.complete_logout(
            Ok(LogoutReceipt {
                message: "Logged out".to_string(),
            }),
            &mut session,
            &mut gateway,
            &mut nav,
            &mut sink,
        );

        assert_eq!(session.state(), &SessionState::Anonymous);
        assert_eq!(gateway.credentials(), None);
        assert_eq!(nav.0, vec![Route::Home]);
        assert_eq!(sink.0, vec![(NotificationKind::Success, "Logged out".to_string())]);
        assert!(!bar.is_logout_pending());
    }

    #[test]
    fn failed_logout_keeps_session_and_does_not_navigate() {
        let mut session = signed_in(Role::Student);
        let before = session.user().cloned();
        let mut gateway = gateway();
        let mut bar = NavigationBar::new();
        let mut nav = RecordingNavigator::default();
        let mut sink = RecordingSink::default();

        bar.begin_logout(session.state(), &gateway).unwrap();
        bar.complete_logout(
            Err(GatewayError::Status {
                status: 500,
                message: Some("Server exploded".to_string()),
            }),
            &mut session,
            &mut gateway,
            &mut nav,
            &mut sink,
        );

        assert_eq!(session.user().cloned(), before);
        assert_eq!(gateway.credentials(), Some("token=abc"));
        assert!(nav.0.is_empty());
        assert_eq!(sink.0, vec![(NotificationKind::Error, "Server exploded".to_string())]);
        assert!(!bar.is_logout_pending());
    }

    #[test]
    fn failed_logout_without_message_uses_fallback() {
        let mut session = signed_in(Role::Recruiter);
        let mut gateway = gateway();
        let mut bar = NavigationBar::new();
        let mut nav = RecordingNavigator::default();
        let mut sink = RecordingSink::default();

        bar.begin_logout(session.state(), &gateway).unwrap();
        bar.complete_logout(
            Err(GatewayError::Transport("timed out".to_string())),
            &mut session,
            &mut gateway,
            &mut nav,
            &mut sink,
        );

        assert!(session.state().is_authenticated());
        assert_eq!(sink.0, vec![(NotificationKind::Error, LOGOUT_FALLBACK_MESSAGE.to_string())]);
    }

    #[test]
    fn second_logout_while_in_flight_is_ignored() {
        let session = signed_in(Role::Student);
        let gateway = gateway();
        let mut bar = NavigationBar::new();

        assert!(bar.begin_logout(session.state(), &gateway).is_some());
        assert!(bar.begin_logout(session.state(), &gateway).is_none());
    }

    #[test]
    fn logout_while_anonymous_sends_nothing() {
        let session = SessionStore::new();
        let mut bar = NavigationBar::new();
        assert!(bar.begin_logout(session.state(), &gateway()).is_none());
        assert!(!bar.is_logout_pending());
    }

    #[test]
    fn close_menus_reports_previous_state() {
        let session = signed_in(Role::Student);
        let mut bar = NavigationBar::new();
        assert!(!bar.close_menus());
        bar.toggle_account_menu(session.state());
        assert!(bar.is_account_menu_open(session.state()));
        assert!(bar.close_menus());
        assert!(!bar.is_account_menu_open(session.state()));
    }
}
