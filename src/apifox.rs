//! Apifox API client

use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::{Error, Result};

/// Body of the import-openapi request. Blank fields are left out entirely so
/// no null values ever appear on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct ImportRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
}

impl ImportRequest {
    pub fn new(document: &str) -> Self {
        let input = if document.trim().is_empty() {
            None
        } else {
            Some(document.to_string())
        };
        Self { input }
    }
}

/// Client for the Apifox import-openapi endpoint
#[derive(Debug, Clone)]
pub struct ApifoxClient {
    base_url: String,
    api_version: String,
    client: reqwest::Client,
}

impl ApifoxClient {
    pub fn new(config: &Config) -> Self {
        // No request timeout here: the deadline is enforced by the uploader,
        // which bounds the whole call with tokio::time::timeout.
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            client: reqwest::Client::new(),
        }
    }

    /// URL for importing an OpenAPI document into a project
    fn import_url(&self, project_id: &str) -> String {
        format!(
            "{}/v1/projects/{}/import-openapi?locale=zh-CN",
            self.base_url, project_id
        )
    }

    /// Upload an OpenAPI document to an Apifox project.
    ///
    /// Returns the platform's JSON object on 2xx. A 4xx/5xx response becomes
    /// [`Error::Rejection`] carrying the status code and the raw body text; a
    /// connection-level failure becomes [`Error::Transport`].
    pub async fn import_document(
        &self,
        project_id: &str,
        access_token: &str,
        document: &str,
    ) -> Result<serde_json::Map<String, Value>> {
        let url = self.import_url(project_id);
        let body = ImportRequest::new(document);

        tracing::info!(project_id, api_version = %self.api_version, "uploading OpenAPI document to Apifox");

        let response = self
            .client
            .post(&url)
            .bearer_auth(access_token)
            .header("X-Apifox-Api-Version", &self.api_version)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body_text, "Apifox rejected the import");
            return Err(Error::Rejection {
                status: status.as_u16(),
                body: body_text,
            });
        }

        let result: serde_json::Map<String, Value> = response
            .json()
            .await
            .map_err(|e| Error::Transport(format!("failed to parse response: {}", e)))?;

        tracing::info!(project_id, "Apifox import succeeded");
        Ok(result)
    }
}
