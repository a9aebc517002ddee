//! Onboarding state machine — roles, step kinds, and the accumulated wizard state.

use serde::{Deserialize, Serialize};

use super::model::Selections;

/// The closed set of platform user roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Reader,
    Writer,
    Publisher,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reader => write!(f, "reader"),
            Self::Writer => write!(f, "writer"),
            Self::Publisher => write!(f, "publisher"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reader" => Ok(Self::Reader),
            "writer" => Ok(Self::Writer),
            "publisher" => Ok(Self::Publisher),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// One screen of the wizard.
///
/// Positions are fixed; only the content of `Interests` and
/// `RoleQuestions` depends on the chosen role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Welcome,
    Role,
    Genres,
    Interests,
    RoleQuestions,
    Notifications,
    Completion,
}

impl StepKind {
    /// The wizard's step sequence, in order.
    pub const SEQUENCE: [StepKind; 7] = [
        Self::Welcome,
        Self::Role,
        Self::Genres,
        Self::Interests,
        Self::RoleQuestions,
        Self::Notifications,
        Self::Completion,
    ];

    pub fn at(index: usize) -> Option<StepKind> {
        Self::SEQUENCE.get(index).copied()
    }

    pub fn index(self) -> usize {
        Self::SEQUENCE
            .iter()
            .position(|step| *step == self)
            .unwrap_or_default()
    }

    /// Whether arriving at this step requires a role to be recorded.
    pub fn requires_role(self) -> bool {
        matches!(self, Self::RoleQuestions)
    }
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Welcome => "welcome",
            Self::Role => "role",
            Self::Genres => "genres",
            Self::Interests => "interests",
            Self::RoleQuestions => "role_questions",
            Self::Notifications => "notifications",
            Self::Completion => "completion",
        };
        write!(f, "{s}")
    }
}

/// State accumulated across the wizard's lifetime.
///
/// Created when the wizard starts and discarded on completion or when the
/// user navigates away.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnboardingState {
    /// Index into `StepKind::SEQUENCE`; always in bounds.
    pub current_step_index: usize,
    /// Answers collected so far, including the role.
    pub selections: Selections,
    /// Set once the terminal action has run.
    pub completed: bool,
}

impl OnboardingState {
    pub fn step_count() -> usize {
        StepKind::SEQUENCE.len()
    }

    pub fn current_step(&self) -> StepKind {
        StepKind::at(self.current_step_index).unwrap_or(StepKind::Completion)
    }

    pub fn role(&self) -> Option<Role> {
        self.selections.role()
    }

    pub fn is_first_step(&self) -> bool {
        self.current_step_index == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step_index + 1 == Self::step_count()
    }

    /// Progress bar value in percent, counting the current step as reached.
    pub fn progress_percent(&self) -> f32 {
        (self.current_step_index + 1) as f32 / Self::step_count() as f32 * 100.0
    }
}
