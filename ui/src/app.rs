//! App Root Component
//!
//! Page layout and the controller context.

use leptos::*;

use crate::components::{ActivitiesList, MessageBanner, SignupForm};
use crate::state::{provide_controller, use_controller};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_controller();

    // Initial load
    let controller = use_controller();
    spawn_local(async move {
        controller.refresh().await;
    });

    view! {
        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivitiesList />
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm />
                <MessageBanner />
            </section>
        </main>
    }
}
