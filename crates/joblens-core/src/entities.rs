use serde::{Deserialize, Serialize};

/// A single job posting as returned by the board API.
///
/// Every field is optional free text: the `/jobs` endpoint only guarantees
/// `company`/`location`/`title`/`url`, and merged feeds may add the rest.
/// Missing or null fields deserialize to `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Job {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Explicit experience tag; some feeds call this `experience`.
    #[serde(default, alias = "experience")]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub work_type: Option<String>,
    /// Date the posting went up, as free text from the feed (`YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_posted: Option<String>,
}

impl Job {
    /// Field accessor that treats a missing value as the empty string.
    #[must_use]
    pub fn company_text(&self) -> &str {
        self.company.as_deref().unwrap_or("")
    }

    #[must_use]
    pub fn location_text(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }

    #[must_use]
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    #[must_use]
    pub fn url_text(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_minimal_row() {
        let job: Job = serde_json::from_str(
            r#"{"company":"Acme","location":"Berlin","title":"Engineer","url":"https://acme.example/1"}"#,
        )
        .unwrap();
        assert_eq!(job.company.as_deref(), Some("Acme"));
        assert!(job.experience_level.is_none());
        assert!(job.work_type.is_none());
        assert!(job.date_posted.is_none());
    }

    #[test]
    fn deserializes_nulls_and_missing_fields() {
        let job: Job = serde_json::from_str(r#"{"title":null}"#).unwrap();
        assert!(job.title.is_none());
        assert_eq!(job.title_text(), "");
        assert_eq!(job.company_text(), "");
    }

    #[test]
    fn accepts_experience_alias() {
        let job: Job = serde_json::from_str(r#"{"experience":"Senior"}"#).unwrap();
        assert_eq!(job.experience_level.as_deref(), Some("Senior"));

        let job: Job = serde_json::from_str(r#"{"experience_level":"Entry"}"#).unwrap();
        assert_eq!(job.experience_level.as_deref(), Some("Entry"));
    }

    #[test]
    fn merged_feed_shape_roundtrips() {
        let job: Job = serde_json::from_str(
            r#"{
                "company": "Acme",
                "location": "Remote",
                "title": "Staff Engineer",
                "url": "https://acme.example/2",
                "work_type": "Remote",
                "date_posted": "2026-08-01"
            }"#,
        )
        .unwrap();
        assert_eq!(job.work_type.as_deref(), Some("Remote"));
        assert_eq!(job.date_posted.as_deref(), Some("2026-08-01"));

        let json = serde_json::to_string(&job).unwrap();
        let back: Job = serde_json::from_str(&json).unwrap();
        assert_eq!(back, job);
    }
}
