//! View State
//!
//! Everything the page shows, as one owned value. Front ends render from it
//! and never mutate it directly; [`super::ViewController`] is the only
//! writer, through the update functions below.

use std::collections::HashSet;
use std::time::Duration;

use crate::activities::{Activity, ActivityCatalog};

/// Shown until the first load completes
pub const LOADING_TEXT: &str = "Loading activities...";

/// Shown in place of the participant list for an empty activity
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet — be the first to sign up!";

/// Replaces the whole activities panel when a load fails
pub const LOAD_FAILURE_TEXT: &str = "Failed to load activities. Please try again later.";

/// Banner text for a rejection without `detail`
pub const SIGNUP_FALLBACK_DETAIL: &str = "An error occurred";

/// Banner text when the signup request itself fails
pub const SIGNUP_FAILURE_TEXT: &str = "Failed to sign up. Please try again.";

/// How long a banner stays up
pub const BANNER_HIDE_DELAY: Duration = Duration::from_millis(5000);

/// Contents of the activities container
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActivitiesPanel {
    #[default]
    Loading,
    Loaded(Vec<ActivityCard>),
    Failed,
}

/// Render model for one activity
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: ParticipantsSection,
}

impl ActivityCard {
    pub fn from_activity(name: &str, activity: &Activity) -> Self {
        let participants = if activity.has_participants() {
            ParticipantsSection::Listed(activity.participants.iter().map(|p| p.display()).collect())
        } else {
            ParticipantsSection::Empty
        };

        Self {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants,
        }
    }

    pub fn availability_text(&self) -> String {
        format!("{} spots left", self.spots_left)
    }

    /// Accessible label for a participant's unregister button
    pub fn unregister_label(&self, participant: &str) -> String {
        format!("Unregister {} from {}", participant, self.name)
    }
}

/// Participants block of a card
#[derive(Debug, Clone, PartialEq)]
pub enum ParticipantsSection {
    /// Placeholder instead of a list
    Empty,
    /// Display strings in server order
    Listed(Vec<String>),
}

/// Banner styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn css_class(self) -> &'static str {
        match self {
            BannerKind::Success => "success",
            BannerKind::Error => "error",
        }
    }
}

/// The message banner. Hidden banners keep their last text, as the
/// element itself only toggles a class.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Banner {
    pub message: String,
    pub kind: Option<BannerKind>,
    pub visible: bool,
}

impl Banner {
    /// Value of the element's `class` attribute
    pub fn class_name(&self) -> String {
        match (self.kind, self.visible) {
            (Some(kind), true) => kind.css_class().to_string(),
            (Some(kind), false) => format!("{} hidden", kind.css_class()),
            (None, _) => "hidden".to_string(),
        }
    }
}

/// Signup form fields
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignupForm {
    pub email: String,
    /// Selected activity name; empty means the placeholder option
    pub activity: String,
}

impl SignupForm {
    pub fn new(email: impl Into<String>, activity: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            activity: activity.into(),
        }
    }

    /// Presence check only. Address syntax is left to the browser's
    /// `type="email"` input and to the backend.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.email.trim().is_empty() {
            return Err("Please enter an email address.");
        }
        if self.activity.is_empty() {
            return Err("Please select an activity.");
        }
        Ok(())
    }
}

/// Generation of a refresh request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

/// Generation of a shown banner; hiding with a stale ticket is a no-op
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerTicket(u64);

/// Complete page state
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    panel: ActivitiesPanel,
    options: Vec<String>,
    form: SignupForm,
    banner: Banner,
    pending: HashSet<(String, String)>,
    refresh_issued: u64,
    refresh_applied: u64,
    banner_generation: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel(&self) -> &ActivitiesPanel {
        &self.panel
    }

    /// Cards of the last applied snapshot; empty while loading or failed
    pub fn cards(&self) -> &[ActivityCard] {
        match &self.panel {
            ActivitiesPanel::Loaded(cards) => cards,
            _ => &[],
        }
    }

    /// Activity select options, in card order
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    pub fn banner(&self) -> &Banner {
        &self.banner
    }

    /// Whether an unregister request for this participant is in flight.
    ///
    /// Keyed by activity and the email sent to the backend, so rows that
    /// repeat the same display string within one activity are disabled
    /// together: each of them would issue the identical request.
    pub fn is_pending(&self, activity: &str, email: &str) -> bool {
        self.pending
            .contains(&(activity.to_string(), email.to_string()))
    }

    // ---- form ----

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.email = email.into();
    }

    pub fn select_activity(&mut self, activity: impl Into<String>) {
        self.form.activity = activity.into();
    }

    pub fn reset_form(&mut self) {
        self.form = SignupForm::default();
    }

    // ---- refresh ----

    /// Start a refresh and hand out its generation
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.refresh_issued += 1;
        RefreshTicket(self.refresh_issued)
    }

    fn accepts(&self, ticket: RefreshTicket) -> bool {
        ticket.0 > self.refresh_applied
    }

    /// Replace cards and options with a fresh snapshot.
    ///
    /// Returns `false` and leaves the state untouched when a newer refresh
    /// has already been applied.
    pub fn apply_catalog(&mut self, ticket: RefreshTicket, catalog: &ActivityCatalog) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        self.refresh_applied = ticket.0;

        self.panel = ActivitiesPanel::Loaded(
            catalog
                .iter()
                .map(|(name, activity)| ActivityCard::from_activity(name, activity))
                .collect(),
        );
        self.options = catalog.names().map(str::to_string).collect();
        true
    }

    /// Show the load failure message. Options from the last good snapshot
    /// are kept.
    pub fn apply_load_failure(&mut self, ticket: RefreshTicket) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        self.refresh_applied = ticket.0;
        self.panel = ActivitiesPanel::Failed;
        true
    }

    // ---- banner ----

    /// Show a banner; any earlier ticket stops being able to hide it
    pub fn show_banner(&mut self, kind: BannerKind, message: impl Into<String>) -> BannerTicket {
        self.banner_generation += 1;
        self.banner = Banner {
            message: message.into(),
            kind: Some(kind),
            visible: true,
        };
        BannerTicket(self.banner_generation)
    }

    /// Hide the banner if `ticket` is still the latest one
    pub fn hide_banner(&mut self, ticket: BannerTicket) -> bool {
        if ticket.0 != self.banner_generation || !self.banner.visible {
            return false;
        }
        self.banner.visible = false;
        true
    }

    // ---- unregister ----

    /// Mark a participant's control as disabled. Returns `false` if a
    /// request for it is already in flight.
    pub fn begin_unregister(&mut self, activity: &str, email: &str) -> bool {
        self.pending.insert((activity.to_string(), email.to_string()))
    }

    /// Re-enable a participant's control
    pub fn finish_unregister(&mut self, activity: &str, email: &str) {
        self.pending
            .remove(&(activity.to_string(), email.to_string()));
    }
}
