//! Onboarding answers — selection sets, single-valued answers, and the final
//! preferences record.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::state::Role;

/// Multi-select answer fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetField {
    Genres,
    Interests,
    /// Reader: preferred formats (ebook, audio, print).
    ReadingFormats,
    /// Writer: what they want out of the platform.
    WritingGoals,
    /// Publisher: kinds of catalog they publish.
    CatalogTypes,
    /// Publisher: platform features they need.
    SpecificNeeds,
}

impl SetField {
    /// The role whose questionnaire owns this field, if any.
    pub fn owner(self) -> Option<Role> {
        match self {
            Self::Genres | Self::Interests => None,
            Self::ReadingFormats => Some(Role::Reader),
            Self::WritingGoals => Some(Role::Writer),
            Self::CatalogTypes | Self::SpecificNeeds => Some(Role::Publisher),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Genres => "genres",
            Self::Interests => "interests",
            Self::ReadingFormats => "reading_formats",
            Self::WritingGoals => "writing_goals",
            Self::CatalogTypes => "catalog_types",
            Self::SpecificNeeds => "specific_needs",
        }
    }
}

impl std::fmt::Display for SetField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often a reader reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingFrequency {
    Daily,
    Weekly,
    Monthly,
    Occasionally,
}

/// A writer's self-assessed experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublisherSize {
    Small,
    Medium,
    Large,
}

/// A single-valued answer. The variant names the field it overwrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum Scalar {
    Role(Role),
    ReadingFrequency(ReadingFrequency),
    Experience(ExperienceLevel),
    PublisherSize(PublisherSize),
}

/// The two notification toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationChannel {
    Email,
    Push,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub email: bool,
    pub push: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: true,
            push: false,
        }
    }
}

impl NotificationPreferences {
    pub fn get(&self, channel: NotificationChannel) -> bool {
        match channel {
            NotificationChannel::Email => self.email,
            NotificationChannel::Push => self.push,
        }
    }
}

/// Everything collected by the wizard so far.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selections {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<Role>,
    #[serde(default)]
    sets: BTreeMap<SetField, BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reading_frequency: Option<ReadingFrequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    experience: Option<ExperienceLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    publisher_size: Option<PublisherSize>,
    #[serde(default)]
    notifications: NotificationPreferences,
}

impl Selections {
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn reading_frequency(&self) -> Option<ReadingFrequency> {
        self.reading_frequency
    }

    pub fn experience(&self) -> Option<ExperienceLevel> {
        self.experience
    }

    pub fn publisher_size(&self) -> Option<PublisherSize> {
        self.publisher_size
    }

    pub fn notifications(&self) -> NotificationPreferences {
        self.notifications
    }

    /// The values selected for `field` (empty if never touched).
    pub fn set(&self, field: SetField) -> impl Iterator<Item = &str> {
        self.sets
            .get(&field)
            .into_iter()
            .flat_map(|values| values.iter().map(String::as_str))
    }

    pub fn contains(&self, field: SetField, value: &str) -> bool {
        self.sets.get(&field).is_some_and(|values| values.contains(value))
    }

    pub fn is_empty_set(&self, field: SetField) -> bool {
        self.sets.get(&field).is_none_or(BTreeSet::is_empty)
    }

    /// Add `value` to `field` if absent, remove it if present.
    ///
    /// Returns whether the value is selected afterwards.
    pub fn toggle_in_set(&mut self, field: SetField, value: impl Into<String>) -> bool {
        let value = value.into();
        let values = self.sets.entry(field).or_default();
        let selected = if values.remove(&value) {
            false
        } else {
            values.insert(value);
            true
        };
        if values.is_empty() {
            self.sets.remove(&field);
        }
        selected
    }

    /// Overwrite a single-valued answer.
    ///
    /// Choosing a different role discards the questionnaire answers that
    /// belonged to the previous role; shared answers are kept.
    pub fn set_scalar(&mut self, value: Scalar) {
        match value {
            Scalar::Role(role) => {
                if let Some(previous) = self.role.filter(|previous| *previous != role) {
                    debug!(from = %previous, to = %role, "Role changed, clearing questionnaire answers");
                    self.clear_role_answers(previous);
                }
                self.role = Some(role);
            }
            Scalar::ReadingFrequency(frequency) => self.reading_frequency = Some(frequency),
            Scalar::Experience(level) => self.experience = Some(level),
            Scalar::PublisherSize(size) => self.publisher_size = Some(size),
        }
    }

    /// Set one notification toggle without touching the other.
    pub fn set_boolean_pair(&mut self, channel: NotificationChannel, enabled: bool) {
        match channel {
            NotificationChannel::Email => self.notifications.email = enabled,
            NotificationChannel::Push => self.notifications.push = enabled,
        }
    }

    fn clear_role_answers(&mut self, role: Role) {
        self.sets.retain(|field, _| field.owner() != Some(role));
        match role {
            Role::Reader => self.reading_frequency = None,
            Role::Writer => self.experience = None,
            Role::Publisher => self.publisher_size = None,
        }
    }
}

/// Role-specific questionnaire answers in the final record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum RoleAnswers {
    Reader {
        frequency: Option<ReadingFrequency>,
        formats: Vec<String>,
    },
    Writer {
        experience: Option<ExperienceLevel>,
        goals: Vec<String>,
    },
    Publisher {
        size: Option<PublisherSize>,
        catalog_types: Vec<String>,
        specific_needs: Vec<String>,
    },
}

/// The preferences record handed to the persistence collaborator on completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    pub favorite_genres: Vec<String>,
    pub interests: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answers: Option<RoleAnswers>,
    pub notifications: NotificationPreferences,
    pub completed_at: DateTime<Utc>,
}

impl Preferences {
    /// Merge the final selections into a preferences record.
    pub fn from_selections(selections: &Selections) -> Self {
        let collect = |field| selections.set(field).map(String::from).collect::<Vec<_>>();

        let answers = selections.role().map(|role| match role {
            Role::Reader => RoleAnswers::Reader {
                frequency: selections.reading_frequency(),
                formats: collect(SetField::ReadingFormats),
            },
            Role::Writer => RoleAnswers::Writer {
                experience: selections.experience(),
                goals: collect(SetField::WritingGoals),
            },
            Role::Publisher => RoleAnswers::Publisher {
                size: selections.publisher_size(),
                catalog_types: collect(SetField::CatalogTypes),
                specific_needs: collect(SetField::SpecificNeeds),
            },
        });

        Self {
            id: Uuid::new_v4(),
            role: selections.role(),
            favorite_genres: collect(SetField::Genres),
            interests: collect(SetField::Interests),
            answers,
            notifications: selections.notifications(),
            completed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_original() {
        let mut selections = Selections::default();
        selections.toggle_in_set(SetField::Genres, "Thriller");
        let before = selections.clone();

        assert!(selections.toggle_in_set(SetField::Genres, "Fiction"));
        assert!(selections.contains(SetField::Genres, "Fiction"));
        assert!(!selections.toggle_in_set(SetField::Genres, "Fiction"));
        assert_eq!(selections, before);
    }

    #[test]
    fn toggling_last_value_empties_set() {
        let mut selections = Selections::default();
        selections.toggle_in_set(SetField::Interests, "Art");
        selections.toggle_in_set(SetField::Interests, "Art");
        assert!(selections.is_empty_set(SetField::Interests));
        assert_eq!(selections, Selections::default());
    }

    #[test]
    fn sets_are_independent() {
        let mut selections = Selections::default();
        selections.toggle_in_set(SetField::WritingGoals, "revenue");
        assert!(selections.is_empty_set(SetField::Genres));
        assert_eq!(selections.set(SetField::WritingGoals).collect::<Vec<_>>(), vec!["revenue"]);
    }

    #[test]
    fn boolean_pair_updates_one_side() {
        let mut selections = Selections::default();
        assert!(selections.notifications().email);
        assert!(!selections.notifications().push);

        selections.set_boolean_pair(NotificationChannel::Push, true);
        assert!(selections.notifications().email);
        assert!(selections.notifications().get(NotificationChannel::Push));

        selections.set_boolean_pair(NotificationChannel::Email, false);
        assert!(!selections.notifications().email);
        assert!(selections.notifications().push);
    }

    #[test]
    fn changing_role_clears_previous_questionnaire() {
        let mut selections = Selections::default();
        selections.set_scalar(Scalar::Role(Role::Writer));
        selections.toggle_in_set(SetField::Genres, "Fantasy");
        selections.set_scalar(Scalar::Experience(ExperienceLevel::Advanced));
        selections.toggle_in_set(SetField::WritingGoals, "community");

        selections.set_scalar(Scalar::Role(Role::Publisher));

        assert_eq!(selections.role(), Some(Role::Publisher));
        assert!(selections.experience().is_none());
        assert!(selections.is_empty_set(SetField::WritingGoals));
        assert!(selections.contains(SetField::Genres, "Fantasy"));
    }

    #[test]
    fn reselecting_same_role_keeps_answers() {
        let mut selections = Selections::default();
        selections.set_scalar(Scalar::Role(Role::Reader));
        selections.set_scalar(Scalar::ReadingFrequency(ReadingFrequency::Weekly));
        selections.set_scalar(Scalar::Role(Role::Reader));
        assert_eq!(selections.reading_frequency(), Some(ReadingFrequency::Weekly));
    }

    #[test]
    fn preferences_merge_role_answers() {
        let mut selections = Selections::default();
        selections.set_scalar(Scalar::Role(Role::Publisher));
        selections.set_scalar(Scalar::PublisherSize(PublisherSize::Medium));
        selections.toggle_in_set(SetField::CatalogTypes, "academic");
        selections.toggle_in_set(SetField::SpecificNeeds, "api");
        selections.toggle_in_set(SetField::Genres, "Essay");

        let prefs = Preferences::from_selections(&selections);
        assert_eq!(prefs.role, Some(Role::Publisher));
        assert_eq!(prefs.favorite_genres, vec!["Essay".to_string()]);
        assert_eq!(
            prefs.answers,
            Some(RoleAnswers::Publisher {
                size: Some(PublisherSize::Medium),
                catalog_types: vec!["academic".to_string()],
                specific_needs: vec!["api".to_string()],
            })
        );
    }

    #[test]
    fn scalar_serde_is_tagged() {
        let json = serde_json::to_value(Scalar::Experience(ExperienceLevel::Beginner)).unwrap();
        assert_eq!(json, serde_json::json!({"field": "experience", "value": "beginner"}));
    }
}
