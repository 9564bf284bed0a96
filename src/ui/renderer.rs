//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view model
//! computation and delegation to UI components.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Draw the frame into a [`Canvas`] and print it

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// # Output
///
/// Prints ANSI-styled output to stdout in a single `print!`. Does not clear
/// the screen.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    print!("{}", render_frame(&viewmodel, &state.theme, rows, cols));
}

/// Renders a view model to an ANSI string.
#[must_use]
pub fn render_frame(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut canvas = Canvas::new();
    components::render_layout(&mut canvas, vm, theme, rows, cols);
    canvas.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Event, NotificationKind, NotificationSink};
    use crate::domain::{Role, User};
    use crate::gateway::{AuthGateway, JobListingGateway};
    use crate::ui::helpers::strip_ansi;

    fn state() -> AppState {
        AppState::new(
            AuthGateway::new("http://localhost:8000/api/v1/user", None),
            JobListingGateway::new("http://localhost:8000/api/v1/job"),
            4,
            Theme::default(),
        )
    }

    #[test]
    fn home_frame_has_navbar_hero_and_footer() {
        let state = state();
        let vm = state.compute_viewmodel(30, 100);
        let text = strip_ansi(&render_frame(&vm, &state.theme, 30, 100));

        assert!(text.contains("HirePoint"));
        assert!(text.contains("[l] Login"));
        assert!(text.contains("No. 1 Job Hunt Website"));
        assert!(text.contains(&vm.footer.keybindings));
    }

    #[test]
    fn account_popover_is_drawn_when_open() {
        let mut state = state();
        state.session.set_user(Some(User::new("u1", "Asha Verma", Role::Student)));
        handle_event(&mut state, &Event::ToggleAccountMenu).unwrap();
        assert!(state.navbar.is_account_menu_open(state.session.state()));

        let vm = state.compute_viewmodel(30, 100);
        let text = strip_ansi(&render_frame(&vm, &state.theme, 30, 100));
        assert!(text.contains("[p] View Profile"));
        assert!(text.contains("[L] Logout"));
    }

    #[test]
    fn narrow_terminal_collapses_links() {
        let state = state();
        let vm = state.compute_viewmodel(30, 60);
        let text = strip_ansi(&render_frame(&vm, &state.theme, 30, 60));

        assert!(vm.compact);
        assert!(text.contains("[m] Menu"));
        assert!(!text.contains("[3] Browse"));
    }

    #[test]
    fn toast_is_rendered_above_footer() {
        let mut state = state();
        state
            .toasts
            .notify(NotificationKind::Error, "Could not load jobs. Press r to retry.".to_string());

        let vm = state.compute_viewmodel(30, 100);
        let text = strip_ansi(&render_frame(&vm, &state.theme, 30, 100));
        assert!(text.contains("✗ Could not load jobs. Press r to retry."));
    }
}
