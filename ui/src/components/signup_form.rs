//! Signup Form Component
//!
//! Email input, activity selector and submit button. Field values live in
//! the shared view state so the controller can read and reset them.

use leptos::*;

use crate::state::{use_controller, use_view_state};

/// Placeholder entry of the activity selector
const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

#[component]
pub fn SignupForm() -> impl IntoView {
    let controller = use_controller();
    let state = use_view_state();

    let email = create_memo(move |_| state.with(|s| s.form().email.clone()));
    let activity = create_memo(move |_| state.with(|s| s.form().activity.clone()));
    let options = create_memo(move |_| state.with(|s| s.options().to_vec()));

    let on_submit = {
        let controller = controller.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();

            let controller = controller.clone();
            spawn_local(async move {
                controller.submit_signup().await;
            });
        }
    };

    let email_input = controller.clone();

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    placeholder="your-email@mergington.edu"
                    prop:value=move || email.get()
                    on:input=move |ev| email_input.set_email(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required
                    prop:value=move || activity.get()
                    on:change=move |ev| controller.select_activity(event_target_value(&ev))
                >
                    <option value="">{SELECT_PLACEHOLDER}</option>
                    {move || {
                        options.get().into_iter().map(|name| {
                            let selected = {
                                let name = name.clone();
                                move || activity.with(|current| *current == name)
                            };
                            view! {
                                <option value=name.clone() selected=selected>{name}</option>
                            }
                        }).collect_view()
                    }}
                </select>
            </div>

            <button type="submit">"Sign Up"</button>
        </form>
    }
}
