//! # joblens-api
//!
//! HTTP client for the three read-only job-board endpoints:
//! - `GET /jobs` → job records
//! - `GET /companies` → company names
//! - `GET /locations` → location names
//!
//! [`BoardClient::fetch_board`] runs all three concurrently and awaits them
//! jointly; nothing renders until the whole snapshot has loaded.

mod error;
mod http;

pub use error::ApiError;

use joblens_core::Job;

use crate::http::check_response;

/// A complete snapshot of the board, fetched in one joint load.
#[derive(Debug, Clone, Default)]
pub struct BoardSnapshot {
    pub jobs: Vec<Job>,
    pub companies: Vec<String>,
    pub locations: Vec<String>,
}

/// HTTP client for a job-board API instance.
pub struct BoardClient {
    http: reqwest::Client,
    base_url: String,
}

impl BoardClient {
    /// Create a client for the board at `base_url`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("joblens/0.1")
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch jobs, companies, and locations concurrently.
    ///
    /// The three requests are awaited jointly; any failure fails the whole
    /// load, since a partial board is not renderable.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if any request fails, returns a non-success
    /// status, or yields a body that does not parse.
    pub async fn fetch_board(&self) -> Result<BoardSnapshot, ApiError> {
        let (jobs, companies, locations) = tokio::try_join!(
            self.fetch_jobs(),
            self.fetch_companies(),
            self.fetch_locations(),
        )?;

        tracing::debug!(
            jobs = jobs.len(),
            companies = companies.len(),
            locations = locations.len(),
            "board snapshot loaded"
        );

        Ok(BoardSnapshot {
            jobs,
            companies,
            locations,
        })
    }

    /// Fetch the job list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// unparseable body.
    pub async fn fetch_jobs(&self) -> Result<Vec<Job>, ApiError> {
        self.get_json("/jobs").await
    }

    /// Fetch the company option list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// unparseable body.
    pub async fn fetch_companies(&self) -> Result<Vec<String>, ApiError> {
        self.get_json("/companies").await
    }

    /// Fetch the location option list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// unparseable body.
    pub async fn fetch_locations(&self) -> Result<Vec<String>, ApiError> {
        self.get_json("/locations").await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let body = resp.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ApiError::Parse(format!("{path}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = BoardClient::new("http://127.0.0.1:5000/", 10);
        assert_eq!(client.base_url(), "http://127.0.0.1:5000");
    }

    #[test]
    fn jobs_payload_parses() {
        let body = r#"[
            {"company":"Acme","location":"Berlin","title":"Engineer","url":"https://x.test/1"},
            {"company":"Globex","location":"Remote","title":"Analyst","url":"https://x.test/2"}
        ]"#;
        let jobs: Vec<Job> = serde_json::from_str(body).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[1].location.as_deref(), Some("Remote"));
    }

    #[test]
    fn string_list_payload_parses() {
        let body = r#"["Acme","Globex"]"#;
        let companies: Vec<String> = serde_json::from_str(body).unwrap();
        assert_eq!(companies, vec!["Acme", "Globex"]);
    }

    #[tokio::test]
    #[ignore] // requires a running board API
    async fn live_fetch_board() {
        let client = BoardClient::new("http://127.0.0.1:5000", 10);
        let snapshot = client.fetch_board().await.expect("board reachable");
        println!(
            "{} jobs, {} companies, {} locations",
            snapshot.jobs.len(),
            snapshot.companies.len(),
            snapshot.locations.len(),
        );
    }
}
