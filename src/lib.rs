//! # Mergington
//!
//! Client side of the Mergington High School extracurricular activities
//! service: list activities, sign students up, unregister participants.
//!
//! ## Modules
//!
//! - [`activities`]: Snapshot data model of the activity collection
//! - [`api`]: Backend contract, error taxonomy and HTTP clients
//! - [`view`]: Page state and the view controller shared by all front ends
//! - [`config`]: TOML/environment configuration (native builds)
//!
//! The crate compiles to `wasm32` with `default-features = false`; the
//! browser front end in `ui/` builds on [`view::ViewController`] with its own
//! `gloo-net` client. The default `native` feature adds the `reqwest`
//! client, configuration loading and the `mergington` CLI.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mergington::{Config, HttpActivitiesClient, NoDelay, ViewController};
//! use mergington::view::local_store;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let client = HttpActivitiesClient::new(&config.api)?;
//!     let store = local_store();
//!     let controller = ViewController::new(client, store.clone(), NoDelay);
//!
//!     controller.refresh().await;
//!     for card in store.borrow().cards() {
//!         println!("{}: {}", card.name, card.availability_text());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod activities;
pub mod api;
pub mod view;

#[cfg(feature = "native")]
pub mod config;

// Re-export top-level types for convenience
pub use activities::{Activity, ActivityCatalog, Participant, ParticipantRecord};

pub use api::{ActivitiesApi, ApiError, ApiResult, SignupReceipt};

pub use view::{
    ActivitiesPanel, ActivityCard, Banner, BannerKind, BannerTimer, NoDelay, ParticipantsSection,
    RefreshOutcome, SignupForm, SignupOutcome, UnregisterOutcome, ViewController, ViewState,
    ViewStore,
};

#[cfg(feature = "native")]
pub use api::HttpActivitiesClient;

#[cfg(feature = "native")]
pub use view::TokioTimer;

#[cfg(feature = "native")]
pub use config::{generate_default_config, ApiConfig, Config, ConfigError, LoggingConfig};
