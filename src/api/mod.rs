//! Activities API
//!
//! Contract with the activities backend.
//!
//! # Endpoints
//!
//! - `GET /activities` - All activities keyed by name
//! - `POST /activities/{activity}/signup?email={email}` - Sign a student up
//! - `DELETE /activities/{activity}/participants?email={email}` - Remove a participant
//!
//! [`ActivitiesApi`] abstracts over the HTTP stack: the browser build
//! implements it with `gloo-net`, native builds use [`HttpActivitiesClient`].
//! Futures are not required to be `Send`, since browser futures never are.

pub mod dto;
pub mod endpoints;
pub mod error;

#[cfg(feature = "native")]
pub mod client;

pub use dto::SignupReceipt;
pub use error::{ApiError, ApiResult};

#[cfg(feature = "native")]
pub use client::HttpActivitiesClient;

use async_trait::async_trait;

use crate::activities::ActivityCatalog;

/// The three backend calls the view controller makes
#[async_trait(?Send)]
pub trait ActivitiesApi {
    /// Fetch the full activity collection
    async fn list_activities(&self) -> ApiResult<ActivityCatalog>;

    /// Sign `email` up for `activity`
    async fn signup(&self, activity: &str, email: &str) -> ApiResult<SignupReceipt>;

    /// Remove `email` from `activity`. Success is signalled by status alone.
    async fn unregister(&self, activity: &str, email: &str) -> ApiResult<()>;
}

#[async_trait(?Send)]
impl<T: ActivitiesApi + ?Sized> ActivitiesApi for std::rc::Rc<T> {
    async fn list_activities(&self) -> ApiResult<ActivityCatalog> {
        (**self).list_activities().await
    }

    async fn signup(&self, activity: &str, email: &str) -> ApiResult<SignupReceipt> {
        (**self).signup(activity, email).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> ApiResult<()> {
        (**self).unregister(activity, email).await
    }
}
