//! UI Components
//!
//! Leptos components for the activities page.

pub mod activity_card;
pub mod loading;
pub mod message;
pub mod signup_form;

pub use activity_card::ActivitiesList;
pub use loading::{LoadFailure, Loading};
pub use message::MessageBanner;
pub use signup_form::SignupForm;
