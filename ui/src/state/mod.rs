//! State Management
//!
//! Signal-backed view store and the page controller context.

pub mod store;

pub use store::{provide_controller, use_controller, use_view_state};
