//! Collaborator ports for the onboarding flow.
//!
//! The wizard never navigates, notifies, or persists by itself; the outer
//! layer injects implementations of these traits.

use std::sync::Mutex;

use serde::Serialize;
use tracing::info;

use super::controller::Destination;
use super::model::Preferences;
use crate::error::PersistenceError;

/// Visual variant of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A transient user-visible acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }
}

/// Moves the user's view to a destination.
pub trait Navigator: Send + Sync {
    fn navigate(&self, destination: Destination);
}

/// Surfaces toasts.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Durable storage for the final preferences record.
pub trait PreferencesStore: Send + Sync {
    fn save(&self, preferences: &Preferences) -> Result<(), PersistenceError>;
}

/// Discards preferences. The default store.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPreferencesStore;

impl PreferencesStore for NoopPreferencesStore {
    fn save(&self, preferences: &Preferences) -> Result<(), PersistenceError> {
        info!(id = %preferences.id, "Preferences discarded (no store configured)");
        Ok(())
    }
}

/// Keeps every saved record in memory, most recent last.
#[derive(Debug, Default)]
pub struct MemoryPreferencesStore {
    saved: Mutex<Vec<Preferences>>,
}

impl MemoryPreferencesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> Vec<Preferences> {
        self.saved.lock().map(|saved| saved.clone()).unwrap_or_default()
    }

    pub fn latest(&self) -> Option<Preferences> {
        self.saved().pop()
    }
}

impl PreferencesStore for MemoryPreferencesStore {
    fn save(&self, preferences: &Preferences) -> Result<(), PersistenceError> {
        let mut saved = self.saved.lock().map_err(|e| PersistenceError::SaveFailed {
            reason: e.to_string(),
        })?;
        saved.push(preferences.clone());
        Ok(())
    }
}

/// Logs navigation requests instead of performing them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, destination: Destination) {
        info!(path = destination.path(), "Navigate");
    }
}

/// Logs toasts instead of rendering them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, toast: Toast) {
        info!(
            title = %toast.title,
            description = %toast.description,
            variant = ?toast.variant,
            "Toast"
        );
    }
}
