//! Reactive View Store
//!
//! Adapts the shared page logic to Leptos: the view state lives in one
//! `RwSignal`, so every controller update re-renders what depends on it.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use std::time::Duration;

use mergington::{BannerTimer, ViewController, ViewState, ViewStore};

use crate::api::{get_api_base, GlooActivitiesClient};

/// [`ViewState`] held in a signal
#[derive(Clone, Copy)]
pub struct SignalStore(pub RwSignal<ViewState>);

impl ViewStore for SignalStore {
    fn update<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R> {
        self.0.try_update(f)
    }

    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> Option<R> {
        self.0.try_with_untracked(f)
    }
}

/// Browser timer for the banner
#[derive(Clone, Copy, Default)]
pub struct GlooTimer;

impl BannerTimer for GlooTimer {
    type Delay = TimeoutFuture;

    fn delay(&self, duration: Duration) -> Self::Delay {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis)
    }
}

/// The page controller as wired in the browser
pub type Controller = ViewController<GlooActivitiesClient, SignalStore, GlooTimer>;

/// Create the view state and controller and provide both as context
pub fn provide_controller() {
    let state = create_rw_signal(ViewState::new());
    let base = get_api_base();
    tracing::info!(base = %base, "Using activities backend");

    provide_context(state);
    provide_context(ViewController::new(
        GlooActivitiesClient::new(base),
        SignalStore(state),
        GlooTimer,
    ));
}

pub fn use_controller() -> Controller {
    use_context::<Controller>().expect("Controller not found")
}

pub fn use_view_state() -> RwSignal<ViewState> {
    use_context::<RwSignal<ViewState>>().expect("ViewState not found")
}
