//! OnboardingManager — runs a controller and applies its intents to the
//! injected collaborators.

use std::sync::Arc;

use tracing::warn;

use super::content::StepContent;
use super::controller::{OnboardingController, StepOutcome};
use super::model::{NotificationChannel, Scalar, SetField};
use super::ports::{Navigator, NoopPreferencesStore, Notifier, PreferencesStore, Toast};
use super::state::OnboardingState;

const COMPLETE_TITLE: &str = "Setup complete!";
const COMPLETE_DESCRIPTION: &str = "Your preferences have been saved.";
const COMPLETE_UNSAVED_DESCRIPTION: &str = "Your account is ready.";
const BLOCKED_TITLE: &str = "Missing information";
const SAVE_FAILED_TITLE: &str = "Preferences not saved";

/// Owns one wizard session and its side-effect collaborators.
pub struct OnboardingManager {
    controller: OnboardingController,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    store: Arc<dyn PreferencesStore>,
}

impl OnboardingManager {
    /// Start a fresh session that discards preferences on completion.
    pub fn new(navigator: Arc<dyn Navigator>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            controller: OnboardingController::new(),
            navigator,
            notifier,
            store: Arc::new(NoopPreferencesStore),
        }
    }

    pub fn with_store(mut self, store: Arc<dyn PreferencesStore>) -> Self {
        self.store = store;
        self
    }

    pub fn with_state(mut self, state: OnboardingState) -> Self {
        self.controller = OnboardingController::from_state(state);
        self
    }

    pub fn state(&self) -> &OnboardingState {
        self.controller.state()
    }

    pub fn content(&self) -> StepContent {
        self.controller.content()
    }

    pub fn is_completed(&self) -> bool {
        self.controller.is_completed()
    }

    /// Advance the wizard.
    ///
    /// A blocked step raises a destructive toast with the validation
    /// message. Completion saves the preferences, shows the success toast,
    /// and navigates to the role's destination. A failed save gets its own
    /// destructive toast and the success toast no longer claims a save.
    pub fn next(&mut self) -> StepOutcome {
        let outcome = self.controller.next();
        match &outcome {
            StepOutcome::Blocked { error } => {
                self.notifier.notify(Toast::destructive(BLOCKED_TITLE, error.to_string()));
            }
            StepOutcome::Completed(completion) => {
                let description = match self.store.save(&completion.preferences) {
                    Ok(()) => COMPLETE_DESCRIPTION,
                    Err(e) => {
                        warn!(error = %e, "Failed to persist onboarding preferences");
                        self.notifier.notify(Toast::destructive(SAVE_FAILED_TITLE, e.to_string()));
                        COMPLETE_UNSAVED_DESCRIPTION
                    }
                };
                self.notifier.notify(Toast::info(COMPLETE_TITLE, description));
                self.navigator.navigate(completion.redirect_to);
            }
            StepOutcome::Moved { .. } | StepOutcome::Stayed => {}
        }
        outcome
    }

    pub fn back(&mut self) -> StepOutcome {
        self.controller.back()
    }

    pub fn toggle_in_set(&mut self, field: SetField, value: impl Into<String>) -> bool {
        self.controller.toggle_in_set(field, value)
    }

    pub fn set_scalar(&mut self, value: Scalar) {
        self.controller.set_scalar(value);
    }

    pub fn set_boolean_pair(&mut self, channel: NotificationChannel, enabled: bool) {
        self.controller.set_boolean_pair(channel, enabled);
    }
}

// Full-flow tests with recording collaborators live in tests/onboarding_flow.rs.
