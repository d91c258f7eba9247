//! Building the option lists the filter selects are populated with.

use serde::{Deserialize, Serialize};

use crate::derive::{derive_experience, derive_work_type};
use crate::entities::Job;

/// Drop empty strings, deduplicate, and sort case-insensitively.
///
/// Ties between values that differ only in case are broken by the raw string
/// so the order is deterministic.
#[must_use]
pub fn uniq_sorted<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out: Vec<String> = values.into_iter().filter(|v| !v.is_empty()).collect();
    out.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    out.dedup();
    out
}

/// The four option lists backing the filter selects.
///
/// Companies and locations come straight from their endpoints; experience
/// levels and work types are derived from the job list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterOptions {
    pub companies: Vec<String>,
    pub locations: Vec<String>,
    pub experience_levels: Vec<String>,
    pub work_types: Vec<String>,
}

impl FilterOptions {
    #[must_use]
    pub fn from_board(jobs: &[Job], companies: Vec<String>, locations: Vec<String>) -> Self {
        Self {
            companies: uniq_sorted(companies),
            locations: uniq_sorted(locations),
            experience_levels: uniq_sorted(jobs.iter().map(|job| derive_experience(job))),
            work_types: uniq_sorted(jobs.iter().map(|job| derive_work_type(job))),
        }
    }
}
