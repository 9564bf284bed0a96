//! Job detail and profile page renderers.

use crate::ui::helpers::{truncate, wrap, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailView, ProfileView};

/// Left margin shared by both pages.
const MARGIN: usize = 2;

fn labelled(canvas: &mut Canvas, row: usize, label: &str, value: &str, theme: &Theme, cols: usize) -> usize {
    canvas.position_cursor(row, 1);
    canvas.pad(MARGIN);
    canvas.write(&Theme::fg(&theme.colors.text_dim));
    canvas.write(&format!("{label:<12}"));
    canvas.write(&Theme::fg(&theme.colors.text_normal));
    canvas.write(&truncate(value, cols.saturating_sub(MARGIN + 12)));
    canvas.write(Theme::reset());
    row + 1
}

/// Renders a job's title, badges and wrapped description, stopping at `bottom`.
pub fn render_detail(
    canvas: &mut Canvas,
    row: usize,
    detail: &DetailView,
    theme: &Theme,
    cols: usize,
    bottom: usize,
) -> usize {
    let width = cols.saturating_sub(MARGIN * 2);
    let mut current_row = row + 1;

    canvas.position_cursor(current_row, 1);
    canvas.pad(MARGIN);
    canvas.write(Theme::bold());
    canvas.write(&Theme::fg(&theme.colors.header_fg));
    canvas.write(&truncate(&detail.title, width));
    canvas.write(Theme::reset());
    current_row += 1;

    canvas.position_cursor(current_row, 1);
    canvas.pad(MARGIN);
    let badges = [
        (&theme.colors.badge_positions_fg, &detail.positions),
        (&theme.colors.badge_type_fg, &detail.job_type),
        (&theme.colors.badge_salary_fg, &detail.salary),
    ];
    for (color, text) in badges {
        if text.is_empty() {
            continue;
        }
        canvas.write(Theme::bold());
        canvas.write(&Theme::fg(color));
        canvas.write(text);
        canvas.write(Theme::reset());
        canvas.pad(2);
    }
    current_row += 2;

    current_row = labelled(canvas, current_row, "Company", &detail.employer, theme, cols);
    current_row = labelled(canvas, current_row, "Location", "India", theme, cols);
    current_row += 1;

    canvas.position_cursor(current_row, 1);
    canvas.pad(MARGIN);
    canvas.write(Theme::bold());
    canvas.write(&Theme::fg(&theme.colors.header_fg));
    canvas.write("Job Description");
    canvas.write(Theme::reset());
    current_row += 1;

    for line in wrap(&detail.description, width) {
        if current_row > bottom {
            break;
        }
        canvas.position_cursor(current_row, 1);
        canvas.pad(MARGIN);
        canvas.write(&Theme::fg(&theme.colors.text_normal));
        canvas.write(&line);
        canvas.write(Theme::reset());
        current_row += 1;
    }
    current_row
}

/// Renders the signed-in user's profile summary.
pub fn render_profile(canvas: &mut Canvas, row: usize, profile: &ProfileView, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row + 1;

    canvas.position_cursor(current_row, 1);
    canvas.pad(MARGIN);
    canvas.write(Theme::bold());
    canvas.write(&Theme::fg(&theme.colors.header_fg));
    canvas.write(&truncate(&profile.display_name, cols.saturating_sub(MARGIN)));
    canvas.write(Theme::reset());
    current_row += 2;

    current_row = labelled(canvas, current_row, "Role", &profile.role, theme, cols);
    let bio = profile.bio.as_deref().filter(|bio| !bio.trim().is_empty()).unwrap_or("-");
    current_row = labelled(canvas, current_row, "Bio", bio, theme, cols);
    if let Some(photo) = &profile.photo {
        current_row = labelled(canvas, current_row, "Photo", photo, theme, cols);
    }
    current_row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::strip_ansi;

    fn detail(description: &str) -> DetailView {
        DetailView {
            title: "Rust Engineer".to_string(),
            employer: "Acme".to_string(),
            positions: "2 Positions".to_string(),
            job_type: "Full Time".to_string(),
            salary: "12LPA".to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn detail_shows_badges_and_description() {
        let mut canvas = Canvas::new();
        render_detail(&mut canvas, 3, &detail("Build the plugin runtime"), &Theme::default(), 80, 30);
        let text = strip_ansi(canvas.as_str());

        assert!(text.contains("Rust Engineer"));
        assert!(text.contains("2 Positions"));
        assert!(text.contains("Acme"));
        assert!(text.contains("Build the plugin runtime"));
    }

    #[test]
    fn description_stops_at_bottom() {
        let long = (0..40).map(|i| format!("word{i}")).collect::<Vec<_>>().join(" ");
        let mut canvas = Canvas::new();
        let next = render_detail(&mut canvas, 1, &detail(&long), &Theme::default(), 24, 10);
        assert!(next <= 11);
        assert!(!strip_ansi(canvas.as_str()).contains("word39"));
    }

    #[test]
    fn profile_falls_back_for_missing_bio() {
        let profile = ProfileView {
            display_name: "Asha Verma".to_string(),
            role: "Student".to_string(),
            bio: None,
            photo: None,
        };
        let mut canvas = Canvas::new();
        render_profile(&mut canvas, 3, &profile, &Theme::default(), 80);
        let text = strip_ansi(canvas.as_str());

        assert!(text.contains("Asha Verma"));
        assert!(text.contains("Student"));
        assert!(text.contains("-"));
    }
}
