//! Latest-jobs feed on the home page.

use super::navigator::Navigator;
use super::selection::Selection;
use crate::domain::{JobSummary, Route};

/// Maximum number of cards on the home page.
pub const FEED_LIMIT: usize = 6;

/// What the feed renders for a given job collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeedView<'a> {
    /// No jobs at all: an explicit indicator and no cards.
    Empty,
    /// The first [`FEED_LIMIT`] jobs in stored order.
    Cards(&'a [JobSummary]),
}

/// Card selection for the home feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JobFeed {
    selection: Selection,
}

impl JobFeed {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes a prefix of `jobs`; never sorts or deduplicates.
    #[must_use]
    pub fn view(jobs: &[JobSummary]) -> FeedView<'_> {
        if jobs.is_empty() {
            FeedView::Empty
        } else {
            FeedView::Cards(&jobs[..jobs.len().min(FEED_LIMIT)])
        }
    }

    fn cards(jobs: &[JobSummary]) -> &[JobSummary] {
        match Self::view(jobs) {
            FeedView::Empty => &[],
            FeedView::Cards(cards) => cards,
        }
    }

    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selection.index()
    }

    pub fn select_next(&mut self, jobs: &[JobSummary]) {
        self.selection.next(Self::cards(jobs).len());
    }

    pub fn select_previous(&mut self, jobs: &[JobSummary]) {
        self.selection.previous(Self::cards(jobs).len());
    }

    /// Re-clamps after the collection changed.
    pub fn sync(&mut self, jobs: &[JobSummary]) {
        self.selection.clamp(Self::cards(jobs).len());
    }

    pub fn reset(&mut self) {
        self.selection.reset();
    }

    /// Opens `/description/{id}` for the selected card.
    pub fn activate(&self, jobs: &[JobSummary], navigator: &mut impl Navigator) -> bool {
        let Some(job) = self.selection.pick(Self::cards(jobs)) else {
            return false;
        };
        navigator.go_to(Route::Description(job.id.clone()));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::job::sample_job;

    fn jobs(count: usize) -> Vec<JobSummary> {
        (0..count).map(|i| sample_job(&format!("j{i}"), &format!("Job {i}"))).collect()
    }

    fn card_ids(view: FeedView<'_>) -> Vec<String> {
        match view {
            FeedView::Empty => vec![],
            FeedView::Cards(cards) => cards.iter().map(|job| job.id.clone()).collect(),
        }
    }

    #[test]
    fn no_jobs_shows_indicator_and_no_cards() {
        assert_eq!(JobFeed::view(&[]), FeedView::Empty);
    }

    #[test]
    fn fewer_than_limit_shows_all_in_order() {
        let jobs = jobs(3);
        assert_eq!(card_ids(JobFeed::view(&jobs)), vec!["j0", "j1", "j2"]);
    }

    #[test]
    fn exactly_limit_shows_all_six_in_order() {
        let jobs = jobs(FEED_LIMIT);
        assert_eq!(
            card_ids(JobFeed::view(&jobs)),
            vec!["j0", "j1", "j2", "j3", "j4", "j5"]
        );
    }

    #[test]
    fn more_than_limit_shows_first_six() {
        let jobs = jobs(10);
        assert_eq!(
            card_ids(JobFeed::view(&jobs)),
            vec!["j0", "j1", "j2", "j3", "j4", "j5"]
        );
    }

    #[test]
    fn duplicates_are_kept() {
        let jobs = vec![sample_job("d", "Dup"), sample_job("d", "Dup")];
        assert_eq!(card_ids(JobFeed::view(&jobs)), vec!["d", "d"]);
    }

    #[derive(Default)]
    struct RecordingNavigator(Vec<Route>);

    impl Navigator for RecordingNavigator {
        fn go_to(&mut self, route: Route) {
            self.0.push(route);
        }
    }

    #[test]
    fn selection_wraps_within_visible_cards_and_activates() {
        let jobs = jobs(8);
        let mut feed = JobFeed::new();
        let mut nav = RecordingNavigator::default();

        feed.select_previous(&jobs);
        assert_eq!(feed.selected_index(), 5);
        assert!(feed.activate(&jobs, &mut nav));
        assert_eq!(nav.0, vec![Route::Description("j5".to_string())]);
    }

    #[test]
    fn activate_on_empty_feed_does_nothing() {
        let feed = JobFeed::new();
        let mut nav = RecordingNavigator::default();
        assert!(!feed.activate(&[], &mut nav));
        assert!(nav.0.is_empty());
    }
}
