//! Loading Component
//!
//! Placeholders shown in the activities panel before cards arrive.

use leptos::*;

use mergington::view::{LOADING_TEXT, LOAD_FAILURE_TEXT};

/// Shown until the first response lands
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <p class="loading">{LOADING_TEXT}</p>
    }
}

/// Shown when the activity list could not be fetched
#[component]
pub fn LoadFailure() -> impl IntoView {
    view! {
        <p class="error">{LOAD_FAILURE_TEXT}</p>
    }
}
