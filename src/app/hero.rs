//! Landing-page search box.

use super::navigator::Navigator;
use crate::domain::Route;
use crate::store::SearchQueryStore;

/// Uncommitted search draft shown on the home page.
///
/// Typing only edits the draft. [`HeroSearch::submit`] commits it to the
/// shared [`SearchQueryStore`] and opens the browse page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroSearch {
    draft: String,
}

impl HeroSearch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replaces the draft.
    pub fn on_input(&mut self, value: impl Into<String>) {
        self.draft = value.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.draft.push(c);
    }

    pub fn pop_char(&mut self) {
        self.draft.pop();
    }

    pub fn clear(&mut self) {
        self.draft.clear();
    }

    /// Commits the draft and navigates to `/browse`.
    ///
    /// No validation and no request: an empty draft is committed as-is and
    /// means "show everything".
    pub fn submit(&self, search: &mut SearchQueryStore, navigator: &mut impl Navigator) {
        tracing::debug!(query = %self.draft, "hero search submitted");
        search.set_query(self.draft.clone());
        navigator.go_to(Route::Browse);
    }
}
