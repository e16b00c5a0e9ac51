//! Activity Card Component
//!
//! One card per activity with availability and a participants list. Each
//! participant row carries an unregister button that stays disabled while
//! its request is in flight.

use leptos::*;

use mergington::view::{self, ActivitiesPanel, ParticipantsSection, NO_PARTICIPANTS_TEXT};

use super::{LoadFailure, Loading};
use crate::state::{use_controller, use_view_state};

/// The `#activities-list` panel
#[component]
pub fn ActivitiesList() -> impl IntoView {
    let state = use_view_state();
    let panel = create_memo(move |_| state.with(|s| s.panel().clone()));

    view! {
        <div id="activities-list">
            {move || match panel.get() {
                ActivitiesPanel::Loading => view! { <Loading /> }.into_view(),
                ActivitiesPanel::Failed => view! { <LoadFailure /> }.into_view(),
                ActivitiesPanel::Loaded(cards) => cards
                    .into_iter()
                    .map(|card| view! { <ActivityCard card=card /> })
                    .collect_view(),
            }}
        </div>
    }
}

#[component]
pub fn ActivityCard(card: view::ActivityCard) -> impl IntoView {
    let participants = match &card.participants {
        ParticipantsSection::Empty => view! {
            <p class="no-participants">{NO_PARTICIPANTS_TEXT}</p>
        }
        .into_view(),
        ParticipantsSection::Listed(names) => {
            let rows = names
                .iter()
                .map(|name| {
                    view! {
                        <ParticipantRow
                            activity=card.name.clone()
                            email=name.clone()
                            label=card.unregister_label(name)
                        />
                    }
                })
                .collect_view();
            view! { <ul>{rows}</ul> }.into_view()
        }
    };

    view! {
        <div class="activity-card">
            <h4>{card.name.clone()}</h4>
            <p>{card.description.clone()}</p>
            <p><strong>"Schedule:"</strong>" "{card.schedule.clone()}</p>
            <p><strong>"Availability:"</strong>" "{card.availability_text()}</p>
            <div class="activity-participants">
                <h5>"Participants"</h5>
                {participants}
            </div>
        </div>
    }
}

#[component]
fn ParticipantRow(activity: String, email: String, label: String) -> impl IntoView {
    let controller = use_controller();
    let state = use_view_state();

    let pending = {
        let (activity, email) = (activity.clone(), email.clone());
        move || state.with(|s| s.is_pending(&activity, &email))
    };

    let on_click = {
        let (activity, email) = (activity, email.clone());
        move |ev: ev::MouseEvent| {
            ev.prevent_default();

            let controller = controller.clone();
            let (activity, email) = (activity.clone(), email.clone());
            spawn_local(async move {
                controller.unregister(&activity, &email).await;
            });
        }
    };

    view! {
        <li>
            <span class="participant-name">{email}</span>
            <button
                type="button"
                class="delete-btn"
                aria-label=label
                prop:disabled=pending
                on:click=on_click
            >
                "×"
            </button>
        </li>
    }
}
