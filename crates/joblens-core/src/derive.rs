//! Heuristics for tags the feed usually omits.
//!
//! An explicit `experience_level`/`work_type` on the job always wins; the
//! keyword rules only fill the gap. Derived values are recomputed per call
//! and never stored back on the job.

use std::sync::OnceLock;

use regex::Regex;

use crate::entities::Job;

pub const ENTRY: &str = "Entry";
pub const MID: &str = "Mid";
pub const SENIOR: &str = "Senior";
pub const EXECUTIVE: &str = "Executive";

pub const REMOTE: &str = "Remote";
pub const HYBRID: &str = "Hybrid";
pub const ON_SITE: &str = "On-Site";

fn entry_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(intern|junior|jr|entry)\b").expect("valid pattern"))
}

fn executive_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(staff|principal|architect|director|head|vp|executive|chief)\b")
            .expect("valid pattern")
    })
}

fn senior_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(senior|sr|lead)\b").expect("valid pattern"))
}

/// Experience level for a job: the explicit tag when present, otherwise a
/// title classification. First matching rule wins; a non-empty title that
/// matches nothing is `Mid`, and a missing title yields the empty string.
#[must_use]
pub fn derive_experience(job: &Job) -> String {
    if let Some(explicit) = &job.experience_level {
        if !explicit.is_empty() {
            return explicit.clone();
        }
    }

    let title = job.title_text().to_lowercase();
    if entry_re().is_match(&title) {
        return ENTRY.to_string();
    }
    if executive_re().is_match(&title) {
        return EXECUTIVE.to_string();
    }
    if senior_re().is_match(&title) {
        return SENIOR.to_string();
    }
    if !title.is_empty() {
        return MID.to_string();
    }
    String::new()
}

/// Work type for a job: the explicit tag when present, otherwise a substring
/// scan over location and title. Hybrid postings often also say "remote", so
/// hybrid is checked first.
#[must_use]
pub fn derive_work_type(job: &Job) -> String {
    if let Some(explicit) = &job.work_type {
        if !explicit.is_empty() {
            return explicit.clone();
        }
    }

    let combined = format!(
        "{} {}",
        job.location_text().to_lowercase(),
        job.title_text().to_lowercase()
    );

    if combined.contains("hybrid") {
        return HYBRID.to_string();
    }
    if combined.contains("remote") {
        return REMOTE.to_string();
    }
    if combined.contains("on-site") || combined.contains("onsite") {
        return ON_SITE.to_string();
    }
    String::new()
}
