//! Onboarding controller — sequential transitions, validation, and the
//! terminal redirect.
//!
//! The controller emits intents (`StepOutcome`) instead of performing side
//! effects; `OnboardingManager` turns them into toasts and navigation.

use serde::Serialize;
use tracing::{debug, info, warn};

use super::content::{self, StepContent};
use super::model::{NotificationChannel, Preferences, Scalar, SetField};
use super::state::{OnboardingState, Role, StepKind};

/// Why `next` refused to advance. The message is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Please choose a role to continue.")]
    RoleNotSelected,

    #[error("Please select at least one genre.")]
    NoGenresSelected,

    #[error("Please select at least one interest.")]
    NoInterestsSelected,

    #[error("A role is required before the {step} step.")]
    RoleRequired { step: StepKind },
}

/// Where the user lands after finishing onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    Home,
    WriterDashboard,
    Admin,
}

impl Destination {
    /// Pure mapping from the chosen role.
    pub fn for_role(role: Option<Role>) -> Self {
        match role {
            Some(Role::Writer) => Self::WriterDashboard,
            Some(Role::Publisher) => Self::Admin,
            Some(Role::Reader) | None => Self::Home,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::WriterDashboard => "/writer-dashboard",
            Self::Admin => "/admin",
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// The terminal action's result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Completion {
    pub role: Option<Role>,
    pub redirect_to: Destination,
    pub preferences: Preferences,
}

/// Result of a `next` or `back` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepOutcome {
    Moved { from: StepKind, to: StepKind },
    Blocked { error: ValidationError },
    Completed(Completion),
    /// Nothing changed: `back` on the first step, or any move after completion.
    Stayed,
}

impl StepOutcome {
    pub fn advanced(&self) -> bool {
        matches!(self, Self::Moved { from, to } if to.index() > from.index())
    }

    pub fn validation_error(&self) -> Option<ValidationError> {
        match self {
            Self::Blocked { error } => Some(*error),
            _ => None,
        }
    }

    pub fn completion(&self) -> Option<&Completion> {
        match self {
            Self::Completed(completion) => Some(completion),
            _ => None,
        }
    }
}

/// Drives one wizard session. Transitions are serialized by `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct OnboardingController {
    state: OnboardingState,
}

impl OnboardingController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from an existing state; an out-of-range index is clamped.
    pub fn from_state(mut state: OnboardingState) -> Self {
        let last = OnboardingState::step_count() - 1;
        if state.current_step_index > last {
            warn!(index = state.current_step_index, "Step index out of range, clamping");
            state.current_step_index = last;
        }
        Self { state }
    }

    pub fn state(&self) -> &OnboardingState {
        &self.state
    }

    pub fn into_state(self) -> OnboardingState {
        self.state
    }

    pub fn current_step(&self) -> StepKind {
        self.state.current_step()
    }

    pub fn is_completed(&self) -> bool {
        self.state.completed
    }

    /// Content of the current step for the current answers.
    pub fn content(&self) -> StepContent {
        content::content(self.current_step(), &self.state)
    }

    /// Validate the current step and advance, or run the terminal action on
    /// the last step.
    pub fn next(&mut self) -> StepOutcome {
        if self.state.completed {
            debug!("Onboarding already completed, ignoring next");
            return StepOutcome::Stayed;
        }

        let from = self.current_step();
        if let Err(error) = self.validate(from) {
            debug!(step = %from, %error, "Step validation failed");
            return StepOutcome::Blocked { error };
        }

        let Some(to) = StepKind::at(self.state.current_step_index + 1) else {
            return StepOutcome::Completed(self.complete());
        };

        if to.requires_role() && self.state.role().is_none() {
            let error = ValidationError::RoleRequired { step: to };
            debug!(step = %to, "Refusing to enter step without a role");
            return StepOutcome::Blocked { error };
        }

        self.state.current_step_index += 1;
        debug!(%from, %to, "Onboarding advanced");
        StepOutcome::Moved { from, to }
    }

    /// Step back one screen. Never goes below the first step.
    pub fn back(&mut self) -> StepOutcome {
        if self.state.completed || self.state.is_first_step() {
            return StepOutcome::Stayed;
        }
        let from = self.current_step();
        self.state.current_step_index -= 1;
        let to = self.current_step();
        debug!(%from, %to, "Onboarding went back");
        StepOutcome::Moved { from, to }
    }

    pub fn toggle_in_set(&mut self, field: SetField, value: impl Into<String>) -> bool {
        self.state.selections.toggle_in_set(field, value)
    }

    pub fn set_scalar(&mut self, value: Scalar) {
        self.state.selections.set_scalar(value);
    }

    pub fn set_boolean_pair(&mut self, channel: NotificationChannel, enabled: bool) {
        self.state.selections.set_boolean_pair(channel, enabled);
    }

    fn validate(&self, step: StepKind) -> Result<(), ValidationError> {
        let selections = &self.state.selections;
        match step {
            StepKind::Role if selections.role().is_none() => Err(ValidationError::RoleNotSelected),
            StepKind::Genres if selections.is_empty_set(SetField::Genres) => {
                Err(ValidationError::NoGenresSelected)
            }
            StepKind::Interests
                if content::is_required(step, selections.role())
                    && selections.is_empty_set(SetField::Interests) =>
            {
                Err(ValidationError::NoInterestsSelected)
            }
            _ => Ok(()),
        }
    }

    fn complete(&mut self) -> Completion {
        self.state.completed = true;
        let role = self.state.role();
        let redirect_to = Destination::for_role(role);
        let preferences = Preferences::from_selections(&self.state.selections);
        info!(
            role = ?role,
            redirect = %redirect_to,
            genres = preferences.favorite_genres.len(),
            "Onboarding complete"
        );
        Completion {
            role,
            redirect_to,
            preferences,
        }
    }
}
