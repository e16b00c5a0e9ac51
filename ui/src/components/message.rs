//! Message Banner Component
//!
//! Outcome of the last signup. Hidden again by the controller's timer.

use leptos::*;

use crate::state::use_view_state;

#[component]
pub fn MessageBanner() -> impl IntoView {
    let state = use_view_state();
    let banner = create_memo(move |_| state.with(|s| s.banner().clone()));

    view! {
        <div id="message" class=move || banner.with(|b| b.class_name())>
            {move || banner.with(|b| b.message.clone())}
        </div>
    }
}
