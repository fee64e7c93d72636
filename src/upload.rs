//! Upload orchestration: validation, deadline enforcement, result rendering

use std::time::Duration;

use serde_json::Value;

use crate::apifox::ApifoxClient;
use crate::error::Error;

/// Hard deadline for a single upload round trip.
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Drives an upload end to end and renders the outcome as a plain string.
///
/// The tool boundary has no structured error channel, so every outcome of
/// [`Uploader::upload`] is a human-readable string: validation failures,
/// remote rejections, transport errors and timeouts included.
#[derive(Debug, Clone)]
pub struct Uploader {
    client: ApifoxClient,
    timeout: Duration,
}

impl Uploader {
    pub fn new(client: ApifoxClient) -> Self {
        Self {
            client,
            timeout: UPLOAD_TIMEOUT,
        }
    }

    /// Override the upload deadline. Used by tests; production callers keep
    /// the 30 second default.
    pub fn with_timeout(client: ApifoxClient, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Upload an OpenAPI document to an Apifox project.
    ///
    /// Blank parameters fail fast with a per-field message before any network
    /// I/O. A valid request is awaited under the upload deadline; if the
    /// deadline elapses the in-flight call is dropped and a timeout message is
    /// returned. This method never panics and never returns an error value.
    pub async fn upload(&self, project_id: &str, access_token: &str, document: &str) -> String {
        if project_id.trim().is_empty() {
            return format!("Error: {}", Error::MissingField("projectId"));
        }
        if access_token.trim().is_empty() {
            return format!("Error: {}", Error::MissingField("accessToken"));
        }
        if document.trim().is_empty() {
            return format!("Error: {}", Error::MissingField("openapiJson"));
        }

        let call = self.client.import_document(project_id, access_token, document);

        // Dropping the timed-out future abandons the request; its eventual
        // completion cannot reach the caller.
        let result = match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout(self.timeout.as_secs())),
        };

        match result {
            Ok(payload) => {
                let rendered = serde_json::to_string(&Value::Object(payload))
                    .unwrap_or_else(|e| format!("<unrenderable payload: {}>", e));
                format!(
                    "Successfully uploaded OpenAPI document to Apifox!\nProject ID: {}\nResult: {}",
                    project_id, rendered
                )
            }
            Err(e) => {
                tracing::error!(error = %e, "upload failed");
                format!("Upload failed: {}", e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn uploader() -> Uploader {
        Uploader::new(ApifoxClient::new(&Config::default()))
    }

    #[tokio::test]
    async fn test_blank_project_id_is_rejected() {
        let result = uploader().upload("", "token", "{}").await;
        assert_eq!(result, "Error: projectId must not be empty");

        let result = uploader().upload("   ", "token", "{}").await;
        assert_eq!(result, "Error: projectId must not be empty");
    }

    #[tokio::test]
    async fn test_blank_access_token_is_rejected() {
        let result = uploader().upload("p1", "", "{}").await;
        assert_eq!(result, "Error: accessToken must not be empty");
    }

    #[tokio::test]
    async fn test_blank_document_is_rejected() {
        let result = uploader().upload("p1", "token", " \n ").await;
        assert_eq!(result, "Error: openapiJson must not be empty");
    }

    #[tokio::test]
    async fn test_validation_order_reports_first_missing_field() {
        // All three blank: projectId is reported, matching the check order.
        let result = uploader().upload("", "", "").await;
        assert_eq!(result, "Error: projectId must not be empty");
    }
}
