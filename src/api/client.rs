//! Native HTTP client
//!
//! `reqwest` implementation of [`ActivitiesApi`] used by the CLI and the
//! integration tests.

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

use super::{endpoints, ActivitiesApi, ApiError, ApiResult, SignupReceipt};
use crate::activities::ActivityCatalog;
use crate::config::ApiConfig;

/// Activities backend client
#[derive(Debug, Clone)]
pub struct HttpActivitiesClient {
    client: Client,
    base_url: String,
}

impl HttpActivitiesClient {
    /// Create a client from the `[api]` config section.
    ///
    /// No timeout is applied unless `request_timeout_secs` is set.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        endpoints::join(&self.base_url, path)
    }

    /// Turn a non-success response into an [`ApiError`]
    async fn rejection(response: Response) -> ApiError {
        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => ApiError::from_rejection(status, &body),
            Err(e) => transport_error(e),
        }
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Transport(format!("request timed out: {}", e))
    } else if e.is_connect() {
        ApiError::Transport(format!("backend unavailable: {}", e))
    } else {
        ApiError::Transport(e.to_string())
    }
}

#[async_trait(?Send)]
impl ActivitiesApi for HttpActivitiesClient {
    async fn list_activities(&self) -> ApiResult<ActivityCatalog> {
        let url = self.url(&endpoints::list_activities());
        tracing::debug!(%url, "Fetching activities");

        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let body = response.text().await.map_err(transport_error)?;
        serde_json::from_str(&body).map_err(ApiError::malformed)
    }

    async fn signup(&self, activity: &str, email: &str) -> ApiResult<SignupReceipt> {
        let url = self.url(&endpoints::signup(activity, email));
        tracing::debug!(%url, "Signing up");

        let response = self.client.post(&url).send().await.map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let body = response.text().await.map_err(transport_error)?;
        serde_json::from_str(&body).map_err(ApiError::malformed)
    }

    async fn unregister(&self, activity: &str, email: &str) -> ApiResult<()> {
        let url = self.url(&endpoints::unregister(activity, email));
        tracing::debug!(%url, "Unregistering participant");

        let response = self.client.delete(&url).send().await.map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        Ok(())
    }
}
