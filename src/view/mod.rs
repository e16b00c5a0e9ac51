//! View layer
//!
//! Front-end independent page logic:
//!
//! - [`state`]: the render model and transient UI state
//! - [`store`]: how a front end holds that state
//! - [`timer`]: how a front end waits for the banner to expire
//! - [`controller`]: load/refresh, signup and unregister

pub mod controller;
pub mod state;
pub mod store;
pub mod timer;

pub use controller::{RefreshOutcome, SignupOutcome, UnregisterOutcome, ViewController};
pub use state::{
    ActivitiesPanel, ActivityCard, Banner, BannerKind, BannerTicket, ParticipantsSection,
    RefreshTicket, SignupForm, ViewState, BANNER_HIDE_DELAY, LOADING_TEXT, LOAD_FAILURE_TEXT,
    NO_PARTICIPANTS_TEXT, SIGNUP_FAILURE_TEXT, SIGNUP_FALLBACK_DETAIL,
};
pub use store::{local_store, ViewStore};
pub use timer::{BannerTimer, NoDelay};

#[cfg(feature = "native")]
pub use timer::TokioTimer;
