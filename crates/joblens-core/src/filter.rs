//! The filter predicate applied to the in-memory job list.

use serde::{Deserialize, Serialize};

use crate::derive::{derive_experience, derive_work_type};
use crate::entities::Job;

/// Active filter state: four select values plus a free-text search term.
///
/// `None` (or an empty string) means the clause is inactive and matches every
/// job. Select clauses compare case-insensitively and exactly; the search
/// term is a case-insensitive substring match over title, company, and
/// location. A job matches iff all five clauses match.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobFilter {
    pub company: Option<String>,
    pub location: Option<String>,
    pub experience: Option<String>,
    pub work_type: Option<String>,
    pub search: Option<String>,
}

impl JobFilter {
    /// Whether any clause is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [
            &self.company,
            &self.location,
            &self.experience,
            &self.work_type,
            &self.search,
        ]
        .into_iter()
        .all(|clause| clause.as_deref().is_none_or(str::is_empty))
    }

    /// Test a single job against the filter.
    #[must_use]
    pub fn matches(&self, job: &Job) -> bool {
        let company = job.company_text().to_lowercase();
        let location = job.location_text().to_lowercase();
        let title = job.title_text().to_lowercase();

        if !clause_eq(self.company.as_deref(), &company) {
            return false;
        }
        if !clause_eq(self.location.as_deref(), &location) {
            return false;
        }
        if !clause_eq(
            self.experience.as_deref(),
            &derive_experience(job).to_lowercase(),
        ) {
            return false;
        }
        if !clause_eq(
            self.work_type.as_deref(),
            &derive_work_type(job).to_lowercase(),
        ) {
            return false;
        }

        match self.search.as_deref() {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                title.contains(&term) || company.contains(&term) || location.contains(&term)
            }
        }
    }

    /// Filter a job list, preserving input order.
    #[must_use]
    pub fn apply(&self, jobs: &[Job]) -> Vec<Job> {
        jobs.iter().filter(|job| self.matches(job)).cloned().collect()
    }
}

/// Exact case-insensitive comparison; an unset or empty clause matches all.
fn clause_eq(clause: Option<&str>, candidate_lower: &str) -> bool {
    match clause {
        None | Some("") => true,
        Some(wanted) => wanted.to_lowercase() == candidate_lower,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn job(company: &str, location: &str, title: &str) -> Job {
        Job {
            company: Some(company.to_string()),
            location: Some(location.to_string()),
            title: Some(title.to_string()),
            url: Some("https://example.test/apply".to_string()),
            ..Job::default()
        }
    }

    fn sample() -> Vec<Job> {
        vec![
            job("Acme", "Berlin", "Senior Rust Engineer"),
            job("Acme", "Remote", "Junior Developer"),
            job("Globex", "Austin, TX", "Staff Engineer"),
            job("Initech", "Berlin (Hybrid)", "Software Engineer"),
        ]
    }

    #[test]
    fn empty_filter_matches_all() {
        let filter = JobFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&sample()).len(), 4);
    }

    #[test]
    fn company_match_is_case_insensitive_exact() {
        let filter = JobFilter {
            company: Some("acme".to_string()),
            ..JobFilter::default()
        };
        let matched = filter.apply(&sample());
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|j| j.company_text() == "Acme"));
    }

    #[test]
    fn company_substring_does_not_match() {
        let filter = JobFilter {
            company: Some("Acm".to_string()),
            ..JobFilter::default()
        };
        assert!(filter.apply(&sample()).is_empty());
    }

    #[test]
    fn experience_clause_matches_derived_value() {
        let filter = JobFilter {
            experience: Some("senior".to_string()),
            ..JobFilter::default()
        };
        let matched = filter.apply(&sample());
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title_text(), "Senior Rust Engineer");
    }

    #[test]
    fn work_type_clause_matches_derived_value() {
        let filter = JobFilter {
            work_type: Some("hybrid".to_string()),
            ..JobFilter::default()
        };
        let matched = filter.apply(&sample());
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].company_text(), "Initech");
    }

    #[test]
    fn search_is_substring_over_title_company_location() {
        let by_title = JobFilter {
            search: Some("rust".to_string()),
            ..JobFilter::default()
        };
        assert_eq!(by_title.apply(&sample()).len(), 1);

        let by_company = JobFilter {
            search: Some("glob".to_string()),
            ..JobFilter::default()
        };
        assert_eq!(by_company.apply(&sample()).len(), 1);

        let by_location = JobFilter {
            search: Some("berlin".to_string()),
            ..JobFilter::default()
        };
        assert_eq!(by_location.apply(&sample()).len(), 2);
    }

    #[test]
    fn clauses_combine_conjunctively() {
        let filter = JobFilter {
            company: Some("Acme".to_string()),
            search: Some("junior".to_string()),
            ..JobFilter::default()
        };
        let matched = filter.apply(&sample());
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].location_text(), "Remote");
    }

    #[test]
    fn empty_string_clause_behaves_like_unset() {
        let filter = JobFilter {
            company: Some(String::new()),
            search: Some(String::new()),
            ..JobFilter::default()
        };
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&sample()).len(), 4);
    }

    #[test]
    fn apply_preserves_input_order() {
        let filter = JobFilter {
            location: Some("berlin".to_string()),
            ..JobFilter::default()
        };
        // Exact match: only the plain "Berlin" row, not "Berlin (Hybrid)".
        let matched = filter.apply(&sample());
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title_text(), "Senior Rust Engineer");

        let all = JobFilter::default().apply(&sample());
        let companies: Vec<&str> = all.iter().map(Job::company_text).collect();
        assert_eq!(companies, vec!["Acme", "Acme", "Globex", "Initech"]);
    }

    #[test]
    fn jobs_with_missing_fields_still_filterable() {
        let jobs = vec![Job::default()];
        assert_eq!(JobFilter::default().apply(&jobs).len(), 1);

        let filter = JobFilter {
            search: Some("anything".to_string()),
            ..JobFilter::default()
        };
        assert!(filter.apply(&jobs).is_empty());
    }
}
