//! Step content — titles, prompts, and selectable options per step.
//!
//! Content is a pure function of the step kind and the state collected so
//! far, so any front end can render it without knowing the role rules.

use serde::Serialize;

use super::model::SetField;
use super::state::{OnboardingState, Role, StepKind};

pub const GENRES: &[&str] = &[
    "Fiction",
    "Science Fiction",
    "Fantasy",
    "Crime",
    "Thriller",
    "Romance",
    "Historical",
    "Biography",
    "Poetry",
    "Self-Help",
    "Business",
    "Young Adult",
    "Comics",
    "Short Stories",
    "Essay",
    "Philosophy",
    "Art",
    "Travel",
];

pub const INTERESTS: &[&str] = &[
    "Science Fiction",
    "Self-Help",
    "Travel",
    "Technology",
    "Art",
    "Cooking",
    "History",
    "Philosophy",
    "Entrepreneurship",
    "Wellness",
    "Ecology",
    "Psychology",
    "Innovation",
    "Culture",
];

pub const READING_FREQUENCIES: &[&str] = &["daily", "weekly", "monthly", "occasionally"];
pub const READING_FORMATS: &[&str] = &["ebook", "audio", "print"];
pub const EXPERIENCE_LEVELS: &[&str] = &["beginner", "intermediate", "advanced"];
pub const WRITING_GOALS: &[&str] = &["visibility", "revenue", "community", "feedback"];
pub const PUBLISHER_SIZES: &[&str] = &["small", "medium", "large"];
pub const CATALOG_TYPES: &[&str] = &["fiction", "nonfiction", "academic", "illustrated"];
pub const SPECIFIC_NEEDS: &[&str] = &["rights", "api", "bulk", "analytics"];
pub const ROLES: &[&str] = &["reader", "writer", "publisher"];
pub const NOTIFICATION_CHANNELS: &[&str] = &["email", "push"];

/// How a group of options is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    /// Pick exactly one (radio group).
    Single,
    /// Pick any number (checkbox/toggle grid).
    Multiple,
    /// Independent on/off switches.
    Toggles,
}

/// One block of selectable values on a step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionGroup {
    /// Stable key the front end reports answers under.
    pub key: &'static str,
    pub label: &'static str,
    pub choice: Choice,
    pub values: &'static [&'static str],
}

/// Everything needed to render one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepContent {
    pub step: StepKind,
    pub title: &'static str,
    pub description: &'static str,
    /// Role-dependent instruction shown above the options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<&'static str>,
    pub options: Vec<OptionGroup>,
    pub next_label: &'static str,
    /// Whether `next` can be blocked on this step for the current state.
    pub required: bool,
}

/// Resolve the content of `step` for `state`.
pub fn content(step: StepKind, state: &OnboardingState) -> StepContent {
    let role = state.role();
    let next_label = if step == StepKind::Completion { "Finish" } else { "Next" };

    let (title, description, prompt, options) = match step {
        StepKind::Welcome => (
            "Welcome to Bookly",
            "We're glad to have you in our community of readers and writers.",
            None,
            Vec::new(),
        ),
        StepKind::Role => (
            "What is your role?",
            "Tell us how you want to use the platform.",
            Some("You can change your role later in your settings."),
            vec![group(OptionKey::Role, "Role", Choice::Single, ROLES)],
        ),
        StepKind::Genres => (
            "Your favorite genres",
            "Pick the genres that interest you most.",
            Some(match role {
                Some(Role::Writer) => "Select the genres you write",
                Some(Role::Publisher) => "Select the genres you publish",
                _ => "Select the genres you like to read",
            }),
            vec![group(OptionKey::Set(SetField::Genres), "Genres", Choice::Multiple, GENRES)],
        ),
        StepKind::Interests => (
            match role {
                Some(Role::Writer) => "Topics you write about",
                Some(Role::Publisher) => "Topics your catalog covers",
                _ => "Your reading interests",
            },
            "Select your interests to personalize your experience.",
            None,
            vec![group(OptionKey::Set(SetField::Interests), "Interests", Choice::Multiple, INTERESTS)],
        ),
        StepKind::RoleQuestions => role_questions(role),
        StepKind::Notifications => (
            "Notification preferences",
            "Choose how you want to hear about new releases and updates.",
            Some("You can adjust these at any time in your account settings."),
            vec![group(
                OptionKey::Notifications,
                "Notifications",
                Choice::Toggles,
                NOTIFICATION_CHANNELS,
            )],
        ),
        StepKind::Completion => (
            "You're all set!",
            "Your profile is configured. Your personalized library is ready.",
            None,
            Vec::new(),
        ),
    };

    StepContent {
        step,
        title,
        description,
        prompt,
        options,
        next_label,
        required: is_required(step, role),
    }
}

/// Whether `next` on `step` validates a selection for `role`.
pub fn is_required(step: StepKind, role: Option<Role>) -> bool {
    match step {
        StepKind::Role | StepKind::Genres => true,
        StepKind::Interests => matches!(role, Some(Role::Reader)),
        _ => false,
    }
}

type Content = (
    &'static str,
    &'static str,
    Option<&'static str>,
    Vec<OptionGroup>,
);

fn role_questions(role: Option<Role>) -> Content {
    match role {
        Some(Role::Reader) => (
            "About your reading",
            "Help us recommend the right books.",
            Some("How often do you read, and in which formats?"),
            vec![
                group(OptionKey::ReadingFrequency, "Reading frequency", Choice::Single, READING_FREQUENCIES),
                group(OptionKey::Set(SetField::ReadingFormats), "Preferred formats", Choice::Multiple, READING_FORMATS),
            ],
        ),
        Some(Role::Writer) => (
            "About your writing",
            "Help us tailor the writer tools to you.",
            Some("What is your experience, and what are your goals?"),
            vec![
                group(OptionKey::Experience, "Experience", Choice::Single, EXPERIENCE_LEVELS),
                group(OptionKey::Set(SetField::WritingGoals), "Goals", Choice::Multiple, WRITING_GOALS),
            ],
        ),
        Some(Role::Publisher) => (
            "About your publishing house",
            "Help us configure the publisher workspace.",
            Some("Tell us about your size, catalog, and needs."),
            vec![
                group(OptionKey::PublisherSize, "Publisher size", Choice::Single, PUBLISHER_SIZES),
                group(OptionKey::Set(SetField::CatalogTypes), "Catalog types", Choice::Multiple, CATALOG_TYPES),
                group(OptionKey::Set(SetField::SpecificNeeds), "Specific needs", Choice::Multiple, SPECIFIC_NEEDS),
            ],
        ),
        None => (
            "A few more questions",
            "Choose a role first to see the questions for it.",
            None,
            Vec::new(),
        ),
    }
}

enum OptionKey {
    Role,
    Set(SetField),
    ReadingFrequency,
    Experience,
    PublisherSize,
    Notifications,
}

impl OptionKey {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Role => "role",
            Self::Set(field) => field.as_str(),
            Self::ReadingFrequency => "reading_frequency",
            Self::Experience => "experience",
            Self::PublisherSize => "publisher_size",
            Self::Notifications => "notifications",
        }
    }
}

fn group(
    key: OptionKey,
    label: &'static str,
    choice: Choice,
    values: &'static [&'static str],
) -> OptionGroup {
    OptionGroup {
        key: key.as_str(),
        label,
        choice,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::model::Scalar;

    fn state_with_role(role: Option<Role>) -> OnboardingState {
        let mut state = OnboardingState::default();
        if let Some(role) = role {
            state.selections.set_scalar(Scalar::Role(role));
        }
        state
    }

    #[test]
    fn genre_prompt_depends_on_role() {
        let reader = content(StepKind::Genres, &state_with_role(Some(Role::Reader)));
        let writer = content(StepKind::Genres, &state_with_role(Some(Role::Writer)));
        let publisher = content(StepKind::Genres, &state_with_role(Some(Role::Publisher)));
        assert_eq!(reader.prompt, Some("Select the genres you like to read"));
        assert_eq!(writer.prompt, Some("Select the genres you write"));
        assert_eq!(publisher.prompt, Some("Select the genres you publish"));
        assert_eq!(reader.options, writer.options);
    }

    #[test]
    fn questionnaire_content_follows_role() {
        let keys = |role| {
            content(StepKind::RoleQuestions, &state_with_role(role))
                .options
                .iter()
                .map(|g| g.key)
                .collect::<Vec<_>>()
        };
        assert_eq!(keys(Some(Role::Reader)), vec!["reading_frequency", "reading_formats"]);
        assert_eq!(keys(Some(Role::Writer)), vec!["experience", "writing_goals"]);
        assert_eq!(
            keys(Some(Role::Publisher)),
            vec!["publisher_size", "catalog_types", "specific_needs"]
        );
        assert!(keys(None).is_empty());
    }

    #[test]
    fn interests_are_relabeled_and_only_required_for_readers() {
        let reader = content(StepKind::Interests, &state_with_role(Some(Role::Reader)));
        let writer = content(StepKind::Interests, &state_with_role(Some(Role::Writer)));
        assert_eq!(reader.title, "Your reading interests");
        assert_eq!(writer.title, "Topics you write about");
        assert!(reader.required);
        assert!(!writer.required);
    }

    #[test]
    fn last_step_says_finish() {
        let state = OnboardingState::default();
        assert_eq!(content(StepKind::Completion, &state).next_label, "Finish");
        assert_eq!(content(StepKind::Welcome, &state).next_label, "Next");
    }

    #[test]
    fn content_serializes() {
        let json = serde_json::to_value(content(StepKind::Role, &OnboardingState::default())).unwrap();
        assert_eq!(json["step"], "role");
        assert_eq!(json["options"][0]["choice"], "single");
        assert_eq!(json["required"], true);
    }
}
