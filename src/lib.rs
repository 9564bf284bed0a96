//! HirePoint: a Zellij plugin for browsing job postings.
//!
//! HirePoint brings the job board's navigation shell into a terminal pane:
//! - Role-aware navigation bar with a collapsible mobile panel
//! - Account popover with profile summary and logout
//! - Landing page with a search box and the latest job openings
//! - Fuzzy-filtered browse results and job detail pages
//! - Session handling (login handoff, logout, expiry) with toast notifications

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, routing, menus                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Store Layer   │   │ Gateway Layer │
//! │ (ui/)         │   │ (store/)      │   │ (gateway/)    │
//! │ - Rendering   │   │ - Session     │   │ - Logout      │
//! │ - Theming     │   │ - Search query│   │ - Job listing │
//! │ - Components  │   │ - Jobs        │   │ - Settling    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - User, job and route models (domain/)             │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber                               │
//! │  - Rotating log file                                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/hirepoint.wasm" {
//!         api_base "https://hirepoint.example.com/api/v1"
//!         session_cookie "token=..."
//!         theme "hirepoint-light"
//!         trace_level "debug"
//!         toast_seconds "6"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse [`Config`], initialize tracing,
//!    build [`AppState`], request permissions and subscribe to events.
//! 2. **Permission Granted**: dispatch [`Event::RefreshJobs`]; the resulting
//!    [`Action::SendRequest`] becomes a Zellij `web_request`.
//! 3. **Web Request Result**: mapped back to [`Event::ResponseReceived`] and
//!    settled by the matching gateway.
//! 4. **UI Rendering**: compute the view model and draw components.
//!
//! # Example
//!
//! ```rust
//! use hirepoint::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! let (_, actions) = handle_event(&mut state, &Event::RefreshJobs)?;
//! assert!(matches!(actions.first(), Some(Action::SendRequest(_))));
//! # Ok::<(), hirepoint::HirepointError>(())
//! ```
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator

pub mod app;
pub mod domain;
pub mod gateway;
pub mod infrastructure;
pub mod store;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{HirepointError, JobSummary, Result, Role, Route, SessionState, User};
pub use gateway::{AuthGateway, JobListingGateway};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Default backend base URL.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";

/// Default toast lifetime in seconds.
pub const DEFAULT_TOAST_SECONDS: u32 = 4;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/hirepoint.wasm" {
///     api_base "http://localhost:8000/api/v1"
///     session_cookie "token=abc"
///     theme "hirepoint-dark"
///     theme_file "~/themes/mine.toml"
///     trace_level "debug"
///     toast_seconds "4"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backend base URL without a trailing `/`.
    ///
    /// Endpoints are `{api_base}/user/...` and `{api_base}/job/...`.
    pub api_base: String,

    /// `Cookie` header value attached to gateway requests.
    pub session_cookie: Option<String>,

    /// Built-in theme name to use.
    ///
    /// Options: `hirepoint-dark`, `hirepoint-light`. Ignored if `theme_file`
    /// loads successfully.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. `~` expands to the sandbox `/host`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for the log file.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Seconds a notification stays visible.
    pub toast_seconds: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            session_cookie: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            toast_seconds: DEFAULT_TOAST_SECONDS,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `api_base`: trimmed, trailing `/` removed, blank → default
    /// - `session_cookie`: blank → `None`
    /// - `theme`, `theme_file`, `trace_level`: String → `Option<String>`
    /// - `toast_seconds`: String → `u32` (falls back to 4 on parse error or 0)
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use hirepoint::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_base".to_string(), "https://jobs.example.com/api/v1/".to_string());
    /// map.insert("toast_seconds".to_string(), "6".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_base, "https://jobs.example.com/api/v1");
    /// assert_eq!(config.toast_seconds, 6);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let non_blank = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        let api_base = non_blank("api_base")
            .map(|base| base.trim_end_matches('/').to_string())
            .filter(|base| !base.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let toast_seconds = config
            .get("toast_seconds")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|seconds| *seconds > 0)
            .unwrap_or(DEFAULT_TOAST_SECONDS);

        Self {
            api_base,
            session_cookie: non_blank("session_cookie"),
            theme_name: non_blank("theme"),
            theme_file: non_blank("theme_file"),
            trace_level: non_blank("trace_level"),
            toast_seconds,
        }
    }

    /// Base URL of the authentication service.
    #[must_use]
    pub fn user_endpoint(&self) -> String {
        format!("{}/user", self.api_base)
    }

    /// Base URL of the job-listing service.
    #[must_use]
    pub fn job_endpoint(&self) -> String {
        format!("{}/job", self.api_base)
    }
}

/// Initializes the plugin with configuration.
///
/// Creates a new `AppState` with:
/// - Gateways pointed at the configured backend, carrying the session cookie
/// - Loaded theme (from file, name, or default)
/// - Empty job list (populated by the first `RefreshJobs`)
///
/// Tracing is installed separately by the host via
/// [`observability::init_tracing`].
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(api_base = %config.api_base, "initializing hirepoint plugin");

    let theme_file = config.theme_file.as_deref().map(infrastructure::expand_tilde);
    let theme = Theme::resolve(config.theme_name.as_deref(), theme_file.as_deref());

    AppState::new(
        AuthGateway::new(config.user_endpoint(), config.session_cookie.clone()),
        JobListingGateway::new(config.job_endpoint()),
        config.toast_seconds,
        theme,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_yields_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_every_option() {
        let config = Config::from_zellij(&map(&[
            ("api_base", " https://jobs.example.com/api/v1// "),
            ("session_cookie", "token=abc"),
            ("theme", "hirepoint-light"),
            ("theme_file", "~/mine.toml"),
            ("trace_level", "debug"),
            ("toast_seconds", "7"),
        ]));

        assert_eq!(config.api_base, "https://jobs.example.com/api/v1");
        assert_eq!(config.session_cookie.as_deref(), Some("token=abc"));
        assert_eq!(config.theme_name.as_deref(), Some("hirepoint-light"));
        assert_eq!(config.theme_file.as_deref(), Some("~/mine.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.toast_seconds, 7);
        assert_eq!(config.user_endpoint(), "https://jobs.example.com/api/v1/user");
        assert_eq!(config.job_endpoint(), "https://jobs.example.com/api/v1/job");
    }

    #[test]
    fn bad_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("api_base", "   "),
            ("session_cookie", ""),
            ("toast_seconds", "soon"),
        ]));
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.session_cookie, None);
        assert_eq!(config.toast_seconds, DEFAULT_TOAST_SECONDS);

        let zero = Config::from_zellij(&map(&[("toast_seconds", "0")]));
        assert_eq!(zero.toast_seconds, DEFAULT_TOAST_SECONDS);
    }

    #[test]
    fn initialize_wires_gateways_and_theme() {
        let config = Config {
            session_cookie: Some("token=abc".to_string()),
            theme_name: Some("hirepoint-light".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);

        assert_eq!(state.theme.name, "hirepoint-light");
        assert_eq!(state.auth.credentials(), Some("token=abc"));
        assert_eq!(state.route(), &Route::Home);
        assert!(!state.session.state().is_authenticated());
    }

    #[test]
    fn unknown_theme_uses_default() {
        let config = Config {
            theme_name: Some("nope".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, ui::theme::DEFAULT_THEME);
    }
}
