//! Job board API client.
//!
//! [`JobBoardApi`] is the seam between the controller and the network. The
//! production implementation, [`HttpJobBoardClient`], speaks JSON over HTTP with
//! `reqwest`; tests plug in an in-memory implementation.

use crate::api::messages::SearchFilters;
use crate::domain::error::{JobBoardError, Result};
use crate::domain::{ApplyPayload, Job, JobId, NewJobPayload};
use async_trait::async_trait;
use reqwest::{Client, Response, Url};

/// The three operations the widget consumes.
///
/// Any non-success outcome is reported as [`JobBoardError::Transport`]. No
/// operation retries.
#[async_trait]
pub trait JobBoardApi: Send + Sync {
    /// `GET /api/jobs` with blank filters omitted. Server ordering is kept.
    async fn search_jobs(&self, filters: &SearchFilters) -> Result<Vec<Job>>;

    /// `POST /api/jobs`.
    async fn create_job(&self, payload: &NewJobPayload) -> Result<()>;

    /// `POST /api/jobs/{id}/apply`.
    async fn apply_to_job(&self, job_id: &JobId, payload: &ApplyPayload) -> Result<()>;
}

/// HTTP implementation of [`JobBoardApi`].
#[derive(Debug, Clone)]
pub struct HttpJobBoardClient {
    client: Client,
    base: Url,
}

impl HttpJobBoardClient {
    /// Creates a client rooted at `api_base` (for example `http://localhost:8000/api`).
    ///
    /// # Errors
    ///
    /// Returns [`JobBoardError::Config`] if `api_base` is not an absolute URL
    /// that can carry path segments.
    pub fn new(api_base: &str) -> Result<Self> {
        let base = Url::parse(api_base)
            .map_err(|e| JobBoardError::Config(format!("invalid api_base `{api_base}`: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(JobBoardError::Config(format!(
                "api_base `{api_base}` cannot carry a path"
            )));
        }
        let client = Client::builder().build()?;
        Ok(Self { client, base })
    }

    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| JobBoardError::Config(format!("api_base `{}` cannot carry a path", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Builds the listing URL for `filters`.
    ///
    /// Blank filters produce no query parameter at all.
    ///
    /// ```
    /// use jobboard::api::{HttpJobBoardClient, SearchFilters};
    ///
    /// let client = HttpJobBoardClient::new("http://localhost:8000/api").unwrap();
    /// let filters = SearchFilters { query: "cook".into(), ..Default::default() };
    /// let url = client.search_url(&filters).unwrap();
    /// assert_eq!(url.as_str(), "http://localhost:8000/api/jobs?q=cook");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`JobBoardError::Config`] if the base URL cannot carry a path.
    pub fn search_url(&self, filters: &SearchFilters) -> Result<Url> {
        let mut url = self.endpoint(&["jobs"])?;
        let pairs = filters.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    /// Builds `jobs/{id}/apply`, percent-encoding the id.
    ///
    /// # Errors
    ///
    /// Returns [`JobBoardError::Config`] if the base URL cannot carry a path.
    pub fn apply_url(&self, job_id: &JobId) -> Result<Url> {
        self.endpoint(&["jobs", job_id.as_str(), "apply"])
    }

    fn handle_response_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(JobBoardError::Transport(format!("server answered {status}")))
        }
    }
}

#[async_trait]
impl JobBoardApi for HttpJobBoardClient {
    async fn search_jobs(&self, filters: &SearchFilters) -> Result<Vec<Job>> {
        let url = self.search_url(filters)?;
        tracing::debug!(url = %url, "searching jobs");

        let response = self.client.get(url).send().await?;
        let response = Self::handle_response_status(response)?;
        Ok(response.json::<Vec<Job>>().await?)
    }

    async fn create_job(&self, payload: &NewJobPayload) -> Result<()> {
        let url = self.endpoint(&["jobs"])?;
        tracing::debug!(url = %url, title = %payload.title, "creating job");

        let response = self.client.post(url).json(payload).send().await?;
        Self::handle_response_status(response)?;
        Ok(())
    }

    async fn apply_to_job(&self, job_id: &JobId, payload: &ApplyPayload) -> Result<()> {
        let url = self.apply_url(job_id)?;
        tracing::debug!(url = %url, job_id = %job_id, "submitting application");

        let response = self.client.post(url).json(payload).send().await?;
        Self::handle_response_status(response)?;
        Ok(())
    }
}
