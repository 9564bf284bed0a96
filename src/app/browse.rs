//! Search results and full job list.
//!
//! Both `/browse` and `/jobs` render a selectable list of postings. The browse
//! page narrows the collection with the committed search query; the jobs page
//! shows everything.
//!
//! # Filtering Algorithm
//!
//! 1. Empty (or all-whitespace) query: every job, stored order
//! 2. Otherwise split on whitespace and lowercase each token
//! 3. A job matches when every token fuzzy-matches its title, employer name or
//!    job type
//! 4. Matches keep stored order; no ranking by score

use super::navigator::Navigator;
use super::selection::Selection;
use crate::domain::{JobSummary, Route};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

fn tokenize(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// Jobs matching `query`, in stored order.
#[must_use]
pub fn filter_jobs<'a>(jobs: &'a [JobSummary], query: &str) -> Vec<&'a JobSummary> {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return jobs.iter().collect();
    }

    let _span = tracing::debug_span!("filter_jobs", total_jobs = jobs.len(), tokens = tokens.len()).entered();

    let matcher = SkimMatcherV2::default();
    let matches: Vec<&JobSummary> = jobs
        .iter()
        .filter(|job| {
            let fields = [
                job.title.to_lowercase(),
                job.employer().to_lowercase(),
                job.job_type.to_lowercase(),
            ];
            tokens
                .iter()
                .all(|token| fields.iter().any(|field| matcher.fuzzy_match(field, token).is_some()))
        })
        .collect();

    tracing::debug!(match_count = matches.len(), "jobs filtered");
    matches
}

/// Character ranges of `text` matched by any query token, merged and sorted.
///
/// Ranges are `(start, end)` char indices with exclusive end.
#[must_use]
pub fn highlight_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return vec![];
    }

    let matcher = SkimMatcherV2::default();
    let mut indices: Vec<usize> = tokens
        .iter()
        .filter_map(|token| matcher.fuzzy_indices(text, token))
        .flat_map(|(_score, indices)| indices)
        .collect();
    indices.sort_unstable();
    indices.dedup();

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

/// Selection state for a result list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowseResults {
    selection: Selection,
}

impl BrowseResults {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selection.index()
    }

    pub fn select_next(&mut self, visible: usize) {
        self.selection.next(visible);
    }

    pub fn select_previous(&mut self, visible: usize) {
        self.selection.previous(visible);
    }

    pub fn sync(&mut self, visible: usize) {
        self.selection.clamp(visible);
    }

    pub fn reset(&mut self) {
        self.selection.reset();
    }

    /// Opens the description of the selected result.
    pub fn activate(&self, results: &[&JobSummary], navigator: &mut impl Navigator) -> bool {
        let Some(job) = self.selection.pick(results) else {
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
    use crate::domain::Company;

    fn catalog() -> Vec<JobSummary> {
        let mut designer = sample_job("1", "Product Designer");
        designer.company = Some(Company {
            name: "Figment".to_string(),
        });
        designer.job_type = "Part Time".to_string();
        vec![
            sample_job("0", "Rust Engineer"),
            designer,
            sample_job("2", "Frontend Developer"),
        ]
    }

    fn ids(jobs: &[&JobSummary]) -> Vec<String> {
        jobs.iter().map(|job| job.id.clone()).collect()
    }

    #[test]
    fn empty_query_lists_everything_in_order() {
        let jobs = catalog();
        assert_eq!(ids(&filter_jobs(&jobs, "")), vec!["0", "1", "2"]);
        assert_eq!(ids(&filter_jobs(&jobs, "   ")), vec!["0", "1", "2"]);
    }

    #[test]
    fn query_keeps_only_matches() {
        let jobs = catalog();
        assert_eq!(ids(&filter_jobs(&jobs, "rust")), vec!["0"]);
        assert_eq!(ids(&filter_jobs(&jobs, "FIGMENT")), vec!["1"]);
    }

    #[test]
    fn every_token_must_match_some_field() {
        let jobs = catalog();
        assert_eq!(ids(&filter_jobs(&jobs, "designer part")), vec!["1"]);
        assert!(filter_jobs(&jobs, "designer qqq").is_empty());
    }

    #[test]
    fn highlight_merges_adjacent_indices() {
        assert_eq!(highlight_ranges("Rust Engineer", "rust"), vec![(0, 4)]);
        assert!(highlight_ranges("Rust Engineer", "").is_empty());
    }

    #[derive(Default)]
    struct RecordingNavigator(Vec<Route>);

    impl Navigator for RecordingNavigator {
        fn go_to(&mut self, route: Route) {
            self.0.push(route);
        }
    }

    #[test]
    fn activation_opens_description_of_selected_match() {
        let jobs = catalog();
        let results = filter_jobs(&jobs, "");
        let mut browse = BrowseResults::new();
        let mut nav = RecordingNavigator::default();

        browse.select_next(results.len());
        browse.select_next(results.len());
        assert!(browse.activate(&results, &mut nav));
        assert_eq!(nav.0, vec![Route::Description("2".to_string())]);
    }
}
