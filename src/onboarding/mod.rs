//! Onboarding system — the multi-step, role-aware setup wizard.
//!
//! The wizard walks a fixed sequence of steps, gates forward progress on
//! per-step validation, accumulates the user's answers, and redirects to a
//! role-specific destination once the last step is confirmed.

pub mod content;
pub mod controller;
pub mod manager;
pub mod model;
pub mod ports;
pub mod state;

pub use content::{StepContent, content};
pub use controller::{Completion, Destination, OnboardingController, StepOutcome, ValidationError};
pub use manager::OnboardingManager;
pub use model::{
    ExperienceLevel, NotificationChannel, NotificationPreferences, Preferences, PublisherSize,
    ReadingFrequency, RoleAnswers, Scalar, Selections, SetField,
};
pub use ports::{
    LogNavigator, LogNotifier, MemoryPreferencesStore, Navigator, NoopPreferencesStore, Notifier,
    PreferencesStore, Toast, ToastVariant,
};
pub use state::{OnboardingState, Role, StepKind};
