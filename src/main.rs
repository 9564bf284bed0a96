//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the HirePoint
//! library and the Zellij plugin system. It implements `ZellijPlugin`, maps
//! Zellij events to library events and executes the resulting actions.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, `WebRequestResult`, `Timer` and
//!    permission events
//! 3. **Permission Granted**: Fetch the job list
//! 4. **Update**: Handle events, delegate to library layer
//! 5. **Pipe**: Accept session handoff from the web app
//! 6. **Render**: Call library render function
//!
//! # Action Execution
//!
//! - `SendRequest` → `web_request` (the request kind rides in the context)
//! - `ScheduleTick` → `set_timeout`
//! - `CloseFocus` → `hide_self`
//!
//! # Keybindings
//!
//! In normal mode:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `Enter`: Open selected job
//! - `Backspace`: Go back
//! - `/`: Focus the search box
//! - `1`-`9`: Follow navbar link
//! - `m`: Toggle mobile menu, `a`: Toggle account menu
//! - `l`: Login, `s`: Signup, `p`: View profile, `L`: Logout
//! - `r`: Reload jobs
//! - `q`: Close plugin, `Esc`: Close menus
//!
//! While typing in the search box:
//! - Characters edit the draft
//! - `Enter`: Search
//! - `Esc`: Stop typing

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_arch = "wasm32")]
mod plugin {
    use std::collections::BTreeMap;

    use hirepoint::app::event_from_pipe;
    use hirepoint::gateway::{HttpResponse, RequestKind, REQUEST_KIND_KEY};
    use hirepoint::{handle_event, Action, AppState, Config, Event, InputMode};
    use zellij_tile::prelude::*;

    /// Plugin state wrapper.
    pub struct State {
        /// Core application state from library layer.
        app: AppState,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: hirepoint::initialize(&Config::default()),
            }
        }
    }

    impl ZellijPlugin for State {
        /// Parses configuration, initializes application state, requests
        /// permissions and subscribes to events.
        ///
        /// # Permissions
        ///
        /// - `WebAccess`: Backend calls (logout, job listing)
        /// - `ChangeApplicationState`: Hide the plugin pane
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            hirepoint::observability::init_tracing(&config);

            let span = tracing::debug_span!("plugin_load");
            let _guard = span.entered();

            tracing::debug!(api_base = %config.api_base, theme = ?config.theme_name, "parsed configuration");
            self.app = hirepoint::initialize(&config);

            request_permission(&[PermissionType::WebAccess, PermissionType::ChangeApplicationState]);
            subscribe(&[
                EventType::Key,
                EventType::WebRequestResult,
                EventType::Timer,
                EventType::PermissionRequestResult,
            ]);

            tracing::debug!("plugin load complete - waiting for permissions");
        }

        /// Translates Zellij events to library events, delegates to
        /// `handle_event`, and executes resulting actions. Returns `true` if
        /// the UI should re-render.
        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let span = tracing::debug_span!("plugin_update", event_type = %Self::get_event_name(&event));
            let _guard = span.entered();

            let our_event = match event {
                zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                    Some(event) => event,
                    None => return false,
                },
                zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                    match Self::map_web_request_result(status, body, &context) {
                        Some(event) => event,
                        None => return false,
                    }
                }
                zellij_tile::prelude::Event::Timer(_) => Event::Tick,
                zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Granted) => {
                    tracing::debug!("permissions granted - loading jobs");
                    Event::RefreshJobs
                }
                zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Denied) => {
                    tracing::warn!("permissions denied - backend calls unavailable");
                    return false;
                }
                _ => return false,
            };

            self.dispatch(&our_event)
        }

        /// Accepts `hirepoint::login` and `hirepoint::session-expired`.
        fn pipe(&mut self, pipe_message: PipeMessage) -> bool {
            let span = tracing::debug_span!("plugin_pipe", name = %pipe_message.name);
            let _guard = span.entered();

            match event_from_pipe(&pipe_message.name, pipe_message.payload.as_deref()) {
                Ok(Some(event)) => self.dispatch(&event),
                Ok(None) => false,
                Err(e) => {
                    tracing::warn!(error = %e, "invalid pipe payload");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            hirepoint::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        fn dispatch(&mut self, event: &Event) -> bool {
            match handle_event(&mut self.app, event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(
                        action_count = actions.len(),
                        should_render = should_render,
                        "event handled successfully"
                    );
                    for action in actions {
                        Self::execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::error!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn execute_action(action: Action) {
            match action {
                Action::SendRequest(request) => {
                    tracing::debug!(kind = request.kind.as_str(), url = %request.url, "sending request");
                    let context = request.context();
                    web_request(request.url, HttpVerb::Get, request.headers, vec![], context);
                }
                Action::ScheduleTick { seconds } => set_timeout(seconds),
                Action::CloseFocus => hide_self(),
            }
        }

        /// Gets a string name for a Zellij event for logging purposes.
        fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
            match event {
                zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
                zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
                zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
                zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
                _ => "Other".to_string(),
            }
        }

        /// Maps keyboard events to application events.
        fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
            tracing::debug!(bare_key = ?key.bare_key, "key event");

            if self.app.input_mode == InputMode::Typing {
                return Some(match key.bare_key {
                    BareKey::Enter => Event::SubmitSearch,
                    BareKey::Esc => Event::Escape,
                    BareKey::Backspace => Event::Backspace,
                    BareKey::Char(c) => Event::Char(c),
                    _ => return None,
                });
            }

            Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::SelectNext,
                BareKey::Up | BareKey::Char('k') => Event::SelectPrevious,
                BareKey::Enter => Event::Activate,
                BareKey::Backspace => Event::Back,
                BareKey::Esc => Event::Escape,
                BareKey::Char('/') => Event::FocusSearch,
                BareKey::Char('m') => Event::ToggleMobileMenu,
                BareKey::Char('a') => Event::ToggleAccountMenu,
                BareKey::Char('l') => Event::Login,
                BareKey::Char('s') => Event::Signup,
                BareKey::Char('p') => Event::ViewProfile,
                BareKey::Char('L') => Event::Logout,
                BareKey::Char('r') => Event::RefreshJobs,
                BareKey::Char('q') => Event::CloseFocus,
                BareKey::Char(c @ '1'..='9') => Event::FollowLink((c as usize) - ('1' as usize)),
                _ => return None,
            })
        }

        /// Routes a web response to its continuation via the request context.
        ///
        /// Zellij reports failed requests (unreachable host, timeouts) as a
        /// result with a non-2xx status and the error text as body, so they
        /// settle as `GatewayError::Status` and get the fallback message.
        fn map_web_request_result(status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> Option<Event> {
            let Some(kind) = context.get(REQUEST_KIND_KEY).and_then(|kind| RequestKind::parse(kind)) else {
                tracing::debug!(status, "web response without a known request kind");
                return None;
            };
            tracing::debug!(kind = kind.as_str(), status, body_len = body.len(), "web response received");

            Some(Event::ResponseReceived {
                kind,
                outcome: Ok(HttpResponse { status, body }),
            })
        }
    }
}

#[cfg(target_arch = "wasm32")]
zellij_tile::register_plugin!(plugin::State);

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("hirepoint is a Zellij plugin; build it for wasm32-wasip1 and load it from a layout");
}
