//! Activity data model
//!
//! Read-only snapshots of the backend's activity collection.

pub mod types;

pub use types::{Activity, ActivityCatalog, Participant, ParticipantRecord};
