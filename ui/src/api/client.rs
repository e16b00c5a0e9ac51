//! HTTP API Client
//!
//! `gloo-net` implementation of the activities backend contract.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};

use mergington::api::endpoints;
use mergington::{ActivitiesApi, ActivityCatalog, ApiError, ApiResult, SignupReceipt};

/// Local storage key holding an alternative backend URL
pub const API_URL_STORAGE_KEY: &str = "mergington_api_url";

/// Get the API base URL from local storage, or serve from the page's origin
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_STORAGE_KEY).ok().flatten());
    normalize_base(stored)
}

/// Trailing slashes removed; empty means same origin
fn normalize_base(stored: Option<String>) -> String {
    stored
        .map(|url| url.trim().trim_end_matches('/').to_string())
        .unwrap_or_default()
}

/// Browser client for the activities backend
#[derive(Debug, Clone)]
pub struct GlooActivitiesClient {
    base_url: String,
}

impl GlooActivitiesClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base(Some(base_url.into())),
        }
    }

    fn url(&self, path: &str) -> String {
        endpoints::join(&self.base_url, path)
    }

    /// Body of a successful response, or the error a failed one maps to
    async fn body(response: Response) -> ApiResult<String> {
        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;
        if response.ok() {
            Ok(text)
        } else {
            Err(ApiError::from_rejection(status, &text))
        }
    }
}

fn transport_error(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

#[async_trait(?Send)]
impl ActivitiesApi for GlooActivitiesClient {
    async fn list_activities(&self) -> ApiResult<ActivityCatalog> {
        let url = self.url(&endpoints::list_activities());
        tracing::debug!(%url, "Fetching activities");

        let response = Request::get(&url).send().await.map_err(transport_error)?;
        let body = Self::body(response).await?;
        serde_json::from_str(&body).map_err(ApiError::malformed)
    }

    async fn signup(&self, activity: &str, email: &str) -> ApiResult<SignupReceipt> {
        let url = self.url(&endpoints::signup(activity, email));
        tracing::debug!(%url, "Signing up");

        let response = Request::post(&url).send().await.map_err(transport_error)?;
        let body = Self::body(response).await?;
        serde_json::from_str(&body).map_err(ApiError::malformed)
    }

    async fn unregister(&self, activity: &str, email: &str) -> ApiResult<()> {
        let url = self.url(&endpoints::unregister(activity, email));
        tracing::debug!(%url, "Unregistering participant");

        let response = Request::delete(&url).send().await.map_err(transport_error)?;
        Self::body(response).await.map(|_| ())
    }
}
