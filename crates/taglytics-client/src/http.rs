use std::time::Duration;

use taglytics_types::{
    build_wire_query, AccessKey, AnalysisStep, NamedQuery, ProjectId, WireGroup,
};

use crate::error::{Error, Result};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the analytics server.
///
/// One instance per server; the cookie store carries the authenticated
/// session established by the login flow. Every call takes the real
/// project identifier (or access key) from the caller - nothing is
/// substituted on the way out.
pub struct AnalysisClient {
    http: reqwest::Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(Error::Transport)?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the project's tag catalog
    pub async fn fetch_tags(&self, access_key: &AccessKey) -> Result<Vec<String>> {
        let url = format!("{}/projects/{}/tags", self.base_url, access_key);
        tracing::debug!("GET {}", url);

        let resp = self.http.get(&url).send().await.map_err(Error::Transport)?;
        Self::decode(resp).await
    }

    /// Run the percentage breakdown for a saved query.
    ///
    /// Returns one percentage per submitted group, positionally aligned
    /// with the query's groups.
    pub async fn percentages(&self, query: &NamedQuery, project: &ProjectId) -> Result<Vec<f64>> {
        let url = format!("{}/projects/{}/percentages", self.base_url, project);
        self.post_wire_query(&url, query).await
    }

    /// Run the multi-step session analysis for a saved query
    pub async fn session_analysis(
        &self,
        query: &NamedQuery,
        project: &ProjectId,
    ) -> Result<Vec<AnalysisStep>> {
        let url = format!("{}/projects/{}/analysis", self.base_url, project);
        self.post_wire_query(&url, query).await
    }

    async fn post_wire_query<T>(&self, url: &str, query: &NamedQuery) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let body: Vec<WireGroup> = build_wire_query(query);
        tracing::debug!("POST {} ({} groups)", url, body.len());

        let resp = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::decode(resp).await
    }

    async fn decode<T>(resp: reqwest::Response) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::debug!("request rejected: {} {}", status, body);
            return Err(Error::Status { status, body });
        }

        resp.json().await.map_err(Error::Decode)
    }
}
