//! View Controller
//!
//! Translates user actions into backend calls and backend answers into
//! [`ViewState`] updates. Every mutation goes through the [`ViewStore`], and
//! no state borrow is held across an await, so overlapping actions (a second
//! unregister click while a refresh is in flight) interleave safely on a
//! single-threaded executor.

use futures_util::future::join;

use super::state::{
    BannerKind, BANNER_HIDE_DELAY, SIGNUP_FAILURE_TEXT, SIGNUP_FALLBACK_DETAIL,
};
use super::{BannerTimer, ViewState, ViewStore};
use crate::api::{ActivitiesApi, ApiError};

/// Result of a refresh
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// Snapshot applied; number of activities
    Loaded(usize),
    /// Failure message shown
    Failed,
    /// A newer refresh already landed, or the store is gone
    Superseded,
}

/// Result of a signup submission, as shown in the banner
#[derive(Debug, Clone, PartialEq)]
pub enum SignupOutcome {
    /// Backend accepted; carries its confirmation message
    Registered(String),
    /// Backend refused; carries its detail or the generic fallback
    Rejected(String),
    /// Request failed or the answer was unreadable
    Failed,
    /// Form incomplete, nothing sent
    Invalid(&'static str),
}

impl SignupOutcome {
    fn banner(&self) -> (BannerKind, &str) {
        match self {
            SignupOutcome::Registered(message) => (BannerKind::Success, message.as_str()),
            SignupOutcome::Rejected(detail) => (BannerKind::Error, detail.as_str()),
            SignupOutcome::Failed => (BannerKind::Error, SIGNUP_FAILURE_TEXT),
            SignupOutcome::Invalid(reason) => (BannerKind::Error, *reason),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SignupOutcome::Registered(_))
    }
}

/// Result of an unregister click
#[derive(Debug, Clone, PartialEq)]
pub enum UnregisterOutcome {
    /// Backend removed the participant and the list was refreshed
    Removed,
    /// Backend call failed; the control is enabled again
    Retained(ApiError),
    /// A request for this participant was already in flight
    AlreadyPending,
}

/// Drives the activities page
#[derive(Debug, Clone)]
pub struct ViewController<A, S, T> {
    api: A,
    store: S,
    timer: T,
}

impl<A, S, T> ViewController<A, S, T>
where
    A: ActivitiesApi,
    S: ViewStore,
    T: BannerTimer,
{
    pub fn new(api: A, store: S, timer: T) -> Self {
        Self { api, store, timer }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mirror the email input into the form state
    pub fn set_email(&self, email: impl Into<String>) {
        let email = email.into();
        self.store.update(|state| state.set_email(email));
    }

    /// Mirror the activity selector into the form state
    pub fn select_activity(&self, activity: impl Into<String>) {
        let activity = activity.into();
        self.store.update(|state| state.select_activity(activity));
    }

    /// Fetch the activity collection and rebuild cards and options.
    ///
    /// Failures replace the panel with the load failure message and are
    /// logged; nothing is retried.
    pub async fn refresh(&self) -> RefreshOutcome {
        let Some(ticket) = self.store.update(ViewState::begin_refresh) else {
            return RefreshOutcome::Superseded;
        };

        match self.api.list_activities().await {
            Ok(catalog) => {
                let applied = self
                    .store
                    .update(|state| state.apply_catalog(ticket, &catalog))
                    .unwrap_or(false);
                if applied {
                    tracing::debug!("Rendered {} activities", catalog.len());
                    RefreshOutcome::Loaded(catalog.len())
                } else {
                    tracing::debug!("Discarding superseded activities response");
                    RefreshOutcome::Superseded
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching activities");
                let applied = self
                    .store
                    .update(|state| state.apply_load_failure(ticket))
                    .unwrap_or(false);
                if applied {
                    RefreshOutcome::Failed
                } else {
                    RefreshOutcome::Superseded
                }
            }
        }
    }

    /// Submit the signup form.
    ///
    /// Shows the outcome in the banner, resets the form and refreshes on
    /// success, then waits out [`BANNER_HIDE_DELAY`] and hides the banner
    /// unless a newer one has replaced it in the meantime.
    pub async fn submit_signup(&self) -> SignupOutcome {
        let Some(form) = self.store.read(|state| state.form().clone()) else {
            return SignupOutcome::Failed;
        };

        let outcome = match form.validate() {
            Err(reason) => SignupOutcome::Invalid(reason),
            Ok(()) => match self.api.signup(&form.activity, &form.email).await {
                Ok(receipt) => {
                    tracing::info!(activity = %form.activity, email = %form.email, "Signed up");
                    SignupOutcome::Registered(receipt.message)
                }
                Err(ApiError::Rejected { detail, status, .. }) => {
                    tracing::debug!(status, "Signup rejected");
                    SignupOutcome::Rejected(
                        detail.unwrap_or_else(|| SIGNUP_FALLBACK_DETAIL.to_string()),
                    )
                }
                Err(e) => {
                    tracing::error!(error = %e, "Error signing up");
                    SignupOutcome::Failed
                }
            },
        };

        let (kind, message) = outcome.banner();
        let success = outcome.is_success();
        let ticket = self.store.update(|state| {
            let ticket = state.show_banner(kind, message);
            if success {
                state.reset_form();
            }
            ticket
        });

        let hide = async {
            if let Some(ticket) = ticket {
                self.timer.delay(BANNER_HIDE_DELAY).await;
                self.store.update(|state| state.hide_banner(ticket));
            }
        };

        if success {
            join(self.refresh(), hide).await;
        } else {
            hide.await;
        }

        outcome
    }

    /// Unregister a participant.
    ///
    /// The participant's control is disabled before the request goes out and
    /// stays disabled until the refreshed list replaces it; on failure it is
    /// enabled again so the user can retry.
    pub async fn unregister(&self, activity: &str, email: &str) -> UnregisterOutcome {
        let started = self
            .store
            .update(|state| state.begin_unregister(activity, email))
            .unwrap_or(false);
        if !started {
            tracing::debug!(activity, email, "Unregister already in flight");
            return UnregisterOutcome::AlreadyPending;
        }

        let result = self.api.unregister(activity, email).await;

        let outcome = match result {
            Ok(()) => {
                tracing::info!(activity, email, "Unregistered participant");
                self.refresh().await;
                UnregisterOutcome::Removed
            }
            Err(e) => {
                match &e {
                    ApiError::Rejected { detail, payload, .. } => {
                        tracing::error!(
                            "Failed to unregister: {}",
                            detail.as_deref().unwrap_or(payload.as_str())
                        );
                    }
                    ApiError::Malformed(raw) => {
                        tracing::error!("Failed to unregister: {}", raw);
                    }
                    ApiError::Transport(_) => {
                        tracing::error!("Error unregistering: {}", e);
                    }
                }
                UnregisterOutcome::Retained(e)
            }
        };

        self.store
            .update(|state| state.finish_unregister(activity, email));
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activities::ActivityCatalog;
    use crate::api::{ApiResult, SignupReceipt};
    use crate::view::{local_store, ActivitiesPanel, NoDelay, ParticipantsSection, TokioTimer};
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;
    use std::time::Duration;

    type LocalStore = Rc<RefCell<ViewState>>;

    /// Scripted backend; records every call
    #[derive(Default)]
    struct FakeApi {
        lists: RefCell<VecDeque<ApiResult<ActivityCatalog>>>,
        signups: RefCell<VecDeque<ApiResult<SignupReceipt>>>,
        unregisters: RefCell<VecDeque<ApiResult<()>>>,
        calls: RefCell<Vec<String>>,
        observe: RefCell<Option<LocalStore>>,
        pending_seen: RefCell<Vec<bool>>,
    }

    impl FakeApi {
        fn with_lists(lists: Vec<ApiResult<ActivityCatalog>>) -> Rc<Self> {
            let api = Self::default();
            api.lists.borrow_mut().extend(lists);
            Rc::new(api)
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl ActivitiesApi for FakeApi {
        async fn list_activities(&self) -> ApiResult<ActivityCatalog> {
            self.calls.borrow_mut().push("GET /activities".to_string());
            self.lists
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".into())))
        }

        async fn signup(&self, activity: &str, email: &str) -> ApiResult<SignupReceipt> {
            self.calls
                .borrow_mut()
                .push(format!("POST {}", crate::api::endpoints::signup(activity, email)));
            self.signups
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".into())))
        }

        async fn unregister(&self, activity: &str, email: &str) -> ApiResult<()> {
            self.calls
                .borrow_mut()
                .push(format!("DELETE {}", crate::api::endpoints::unregister(activity, email)));
            if let Some(store) = self.observe.borrow().as_ref() {
                let pending = store.borrow().is_pending(activity, email);
                self.pending_seen.borrow_mut().push(pending);
            }
            self.unregisters
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".into())))
        }
    }

    fn catalog(json: &str) -> ActivityCatalog {
        serde_json::from_str(json).unwrap()
    }

    fn chess_with(participants: &str) -> ActivityCatalog {
        catalog(&format!(
            r#"{{"Chess Club": {{"description": "Chess", "schedule": "Fridays",
                 "max_participants": 12, "participants": {}}}}}"#,
            participants
        ))
    }

    fn controller(api: Rc<FakeApi>) -> (ViewController<Rc<FakeApi>, LocalStore, NoDelay>, LocalStore) {
        let store = local_store();
        (ViewController::new(api, store.clone(), NoDelay), store)
    }

    #[tokio::test]
    async fn test_refresh_renders_cards() {
        let api = FakeApi::with_lists(vec![Ok(catalog(
            r#"{
                "Chess Club": {"description": "Chess", "schedule": "Fridays", "max_participants": 12,
                               "participants": ["a@x.com", {"email": "b@x.com"}]},
                "Gym Class": {"description": "Gym", "schedule": "Mondays", "max_participants": 30,
                              "participants": []}
            }"#,
        ))]);
        let (controller, store) = controller(api);

        assert_eq!(controller.refresh().await, RefreshOutcome::Loaded(2));

        let state = store.borrow();
        let cards = state.cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].spots_left, 10);
        assert_eq!(
            cards[0].participants,
            ParticipantsSection::Listed(vec!["a@x.com".into(), "b@x.com".into()])
        );
        assert_eq!(cards[1].spots_left, 30);
        assert_eq!(cards[1].participants, ParticipantsSection::Empty);
        assert_eq!(state.options(), &["Chess Club".to_string(), "Gym Class".to_string()]);
    }

    #[tokio::test]
    async fn test_refresh_failure_shows_failure_panel() {
        let api = FakeApi::with_lists(vec![Err(ApiError::Malformed("expected map".into()))]);
        let (controller, store) = controller(api);

        assert_eq!(controller.refresh().await, RefreshOutcome::Failed);
        assert_eq!(store.borrow().panel(), &ActivitiesPanel::Failed);
    }

    #[tokio::test]
    async fn test_signup_success_resets_form_and_refreshes() {
        let api = FakeApi::with_lists(vec![Ok(chess_with(r#"["x@y.com"]"#))]);
        api.signups
            .borrow_mut()
            .push_back(Ok(SignupReceipt { message: "ok".into() }));
        let (controller, store) = controller(api.clone());
        store.borrow_mut().set_email("x@y.com");
        store.borrow_mut().select_activity("Chess Club");

        let outcome = controller.submit_signup().await;

        assert_eq!(outcome, SignupOutcome::Registered("ok".into()));
        assert_eq!(
            api.calls(),
            vec![
                "POST /activities/Chess%20Club/signup?email=x%40y.com".to_string(),
                "GET /activities".to_string(),
            ]
        );
        let state = store.borrow();
        assert_eq!(state.banner().message, "ok");
        assert_eq!(state.banner().kind, Some(BannerKind::Success));
        assert!(state.form().email.is_empty());
        assert!(state.form().activity.is_empty());
        assert_eq!(
            state.cards()[0].participants,
            ParticipantsSection::Listed(vec!["x@y.com".into()])
        );
    }

    #[tokio::test]
    async fn test_signup_rejection_keeps_form() {
        let api = FakeApi::with_lists(vec![]);
        api.signups.borrow_mut().push_back(Err(ApiError::from_rejection(
            400,
            r#"{"detail": "Already signed up"}"#,
        )));
        let (controller, store) = controller(api.clone());
        store.borrow_mut().set_email("x@y.com");
        store.borrow_mut().select_activity("Chess Club");

        let outcome = controller.submit_signup().await;

        assert_eq!(outcome, SignupOutcome::Rejected("Already signed up".into()));
        assert_eq!(api.calls().len(), 1);
        let state = store.borrow();
        assert_eq!(state.banner().message, "Already signed up");
        assert_eq!(state.banner().kind, Some(BannerKind::Error));
        assert_eq!(state.form().email, "x@y.com");
        assert_eq!(state.form().activity, "Chess Club");
    }

    #[tokio::test]
    async fn test_signup_rejection_without_detail_uses_fallback() {
        let api = FakeApi::with_lists(vec![]);
        api.signups
            .borrow_mut()
            .push_back(Err(ApiError::from_rejection(500, "{}")));
        let (controller, store) = controller(api);
        store.borrow_mut().set_email("x@y.com");
        store.borrow_mut().select_activity("Chess Club");

        let outcome = controller.submit_signup().await;
        assert_eq!(outcome, SignupOutcome::Rejected(SIGNUP_FALLBACK_DETAIL.into()));
        assert_eq!(store.borrow().banner().message, "An error occurred");
    }

    #[tokio::test]
    async fn test_signup_transport_failure() {
        let api = FakeApi::with_lists(vec![]);
        api.signups
            .borrow_mut()
            .push_back(Err(ApiError::Transport("connection refused".into())));
        let (controller, store) = controller(api);
        store.borrow_mut().set_email("x@y.com");
        store.borrow_mut().select_activity("Chess Club");

        assert_eq!(controller.submit_signup().await, SignupOutcome::Failed);
        let state = store.borrow();
        assert_eq!(state.banner().message, SIGNUP_FAILURE_TEXT);
        assert_eq!(state.banner().kind, Some(BannerKind::Error));
        assert_eq!(state.form().email, "x@y.com");
    }

    #[tokio::test]
    async fn test_incomplete_form_is_not_sent() {
        let api = FakeApi::with_lists(vec![]);
        let (controller, store) = controller(api.clone());
        store.borrow_mut().set_email("x@y.com");

        let outcome = controller.submit_signup().await;
        assert_eq!(outcome, SignupOutcome::Invalid("Please select an activity."));
        assert!(api.calls().is_empty());
        assert_eq!(store.borrow().banner().kind, Some(BannerKind::Error));
    }

    #[tokio::test]
    async fn test_unregister_disables_control_before_request_resolves() {
        let api = FakeApi::with_lists(vec![
            Ok(chess_with(r#"["a@x.com", "b@x.com"]"#)),
            Ok(chess_with(r#"["b@x.com"]"#)),
        ]);
        api.unregisters.borrow_mut().push_back(Ok(()));
        let (controller, store) = controller(api.clone());
        *api.observe.borrow_mut() = Some(store.clone());
        controller.refresh().await;

        let outcome = controller.unregister("Chess Club", "a@x.com").await;

        assert_eq!(outcome, UnregisterOutcome::Removed);
        assert_eq!(*api.pending_seen.borrow(), vec![true]);
        assert!(api
            .calls()
            .contains(&"DELETE /activities/Chess%20Club/participants?email=a%40x.com".to_string()));
        let state = store.borrow();
        assert!(!state.is_pending("Chess Club", "a@x.com"));
        assert_eq!(
            state.cards()[0].participants,
            ParticipantsSection::Listed(vec!["b@x.com".into()])
        );
    }

    #[tokio::test]
    async fn test_unregister_failure_reenables_control_and_keeps_row() {
        let api = FakeApi::with_lists(vec![Ok(chess_with(r#"["a@x.com"]"#))]);
        api.unregisters.borrow_mut().push_back(Err(ApiError::from_rejection(
            404,
            r#"{"detail": "Participant not found"}"#,
        )));
        let (controller, store) = controller(api.clone());
        controller.refresh().await;

        let outcome = controller.unregister("Chess Club", "a@x.com").await;

        assert!(matches!(outcome, UnregisterOutcome::Retained(ApiError::Rejected { status: 404, .. })));
        assert_eq!(api.calls().iter().filter(|c| c.starts_with("GET")).count(), 1);
        let state = store.borrow();
        assert!(!state.is_pending("Chess Club", "a@x.com"));
        assert_eq!(
            state.cards()[0].participants,
            ParticipantsSection::Listed(vec!["a@x.com".into()])
        );
    }

    async fn assert_unregister_failure_retains_row(error: ApiError) {
        let api = FakeApi::with_lists(vec![Ok(chess_with(r#"["a@x.com"]"#))]);
        api.unregisters.borrow_mut().push_back(Err(error.clone()));
        let (controller, store) = controller(api.clone());
        *api.observe.borrow_mut() = Some(store.clone());
        controller.refresh().await;

        let outcome = controller.unregister("Chess Club", "a@x.com").await;

        assert_eq!(outcome, UnregisterOutcome::Retained(error));
        assert_eq!(*api.pending_seen.borrow(), vec![true]);
        assert_eq!(api.calls().iter().filter(|c| c.starts_with("GET")).count(), 1);
        let state = store.borrow();
        assert!(!state.is_pending("Chess Club", "a@x.com"));
        assert_eq!(
            state.cards()[0].participants,
            ParticipantsSection::Listed(vec!["a@x.com".into()])
        );
    }

    #[tokio::test]
    async fn test_unregister_transport_failure_reenables_control() {
        assert_unregister_failure_retains_row(ApiError::Transport("connection refused".into()))
            .await;
    }

    #[tokio::test]
    async fn test_unregister_unreadable_body_reenables_control() {
        let error = ApiError::from_rejection(502, "<html>Bad Gateway</html>");
        assert!(matches!(error, ApiError::Malformed(_)));
        assert_unregister_failure_retains_row(error).await;
    }

    #[tokio::test]
    async fn test_unregister_ignores_duplicate_click() {
        let api = FakeApi::with_lists(vec![]);
        let (controller, store) = controller(api.clone());
        store.borrow_mut().begin_unregister("Chess Club", "a@x.com");

        let outcome = controller.unregister("Chess Club", "a@x.com").await;
        assert_eq!(outcome, UnregisterOutcome::AlreadyPending);
        assert!(api.calls().is_empty());
        assert!(store.borrow().is_pending("Chess Club", "a@x.com"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_banner_hides_after_delay() {
        let api = FakeApi::with_lists(vec![]);
        api.signups
            .borrow_mut()
            .push_back(Err(ApiError::from_rejection(400, r#"{"detail": "Full"}"#)));
        let store = local_store();
        let controller = ViewController::new(api, store.clone(), TokioTimer);
        store.borrow_mut().set_email("x@y.com");
        store.borrow_mut().select_activity("Chess Club");

        let early = tokio::time::timeout(
            BANNER_HIDE_DELAY - Duration::from_millis(1),
            controller.submit_signup(),
        )
        .await;
        assert!(early.is_err());
        assert!(store.borrow().banner().visible);

        api_push_rejection(&controller);
        let started = tokio::time::Instant::now();
        controller.submit_signup().await;
        assert!(started.elapsed() >= BANNER_HIDE_DELAY);
        assert!(!store.borrow().banner().visible);
    }

    fn api_push_rejection(controller: &ViewController<Rc<FakeApi>, LocalStore, TokioTimer>) {
        controller
            .api()
            .signups
            .borrow_mut()
            .push_back(Err(ApiError::from_rejection(400, r#"{"detail": "Full"}"#)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_timer_does_not_hide_newer_banner() {
        let api = FakeApi::with_lists(vec![]);
        let store = local_store();
        let controller = ViewController::new(api, store.clone(), TokioTimer);
        api_push_rejection(&controller);
        api_push_rejection(&controller);
        store.borrow_mut().set_email("x@y.com");
        store.borrow_mut().select_activity("Chess Club");

        let second = async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            controller.submit_signup().await
        };
        let probe = async {
            // first banner's timer has fired, second one's has not
            tokio::time::sleep(Duration::from_millis(5500)).await;
            store.borrow().banner().visible
        };

        let (_, _, visible_mid_way) = tokio::join!(controller.submit_signup(), second, probe);

        assert!(visible_mid_way);
        assert!(!store.borrow().banner().visible);
    }
}
