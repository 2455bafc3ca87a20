use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{FieldKey, IdeaFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum WizardStep {
    #[default]
    DefineIdea,
    TargetAudience,
    Solution,
    Results,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::DefineIdea,
        WizardStep::TargetAudience,
        WizardStep::Solution,
        WizardStep::Results,
    ];

    /// 1-based position shown in the progress indicator.
    pub fn number(self) -> u8 {
        match self {
            WizardStep::DefineIdea => 1,
            WizardStep::TargetAudience => 2,
            WizardStep::Solution => 3,
            WizardStep::Results => 4,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(WizardStep::DefineIdea),
            2 => Some(WizardStep::TargetAudience),
            3 => Some(WizardStep::Solution),
            4 => Some(WizardStep::Results),
            _ => None,
        }
    }

    /// Short label under the progress node.
    pub fn label(self) -> &'static str {
        match self {
            WizardStep::DefineIdea => "Define Idea",
            WizardStep::TargetAudience => "Target Audience",
            WizardStep::Solution => "Solution",
            WizardStep::Results => "Results",
        }
    }

    /// Heading of the panel rendered for this step.
    pub fn heading(self) -> &'static str {
        match self {
            WizardStep::DefineIdea => "Define Your Idea",
            WizardStep::TargetAudience => "Define Your Target Audience",
            WizardStep::Solution => "Define Your Solution",
            WizardStep::Results => "Your Validation Plan",
        }
    }

    /// Fields that must be non-empty before leaving this step forward.
    pub fn required_fields(self) -> &'static [FieldKey] {
        match self {
            WizardStep::DefineIdea => &[FieldKey::IdeaName, FieldKey::ProblemStatement],
            WizardStep::TargetAudience => &[FieldKey::TargetAudience],
            WizardStep::Solution => &[FieldKey::Solution, FieldKey::ValueProposition],
            WizardStep::Results => &[],
        }
    }

    /// True when the progress node for `node` should be highlighted.
    pub fn progress_reached(self, node: WizardStep) -> bool {
        self >= node
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number(), self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardAction {
    Next,
    Back,
    Submit,
    StartOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTransition {
    pub from: WizardStep,
    pub to: WizardStep,
    pub action: WizardAction,
    pub reason: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("illegal wizard transition: {action:?} from step {from}")]
    IllegalTransition {
        from: WizardStep,
        action: WizardAction,
    },
    #[error("required fields missing on step {step}: {missing:?}")]
    MissingRequired {
        step: WizardStep,
        missing: Vec<FieldKey>,
    },
}

/// Computes the transition for `action` taken at `from`.
///
/// Forward moves are guarded by the required fields of `from`; backward moves
/// and restarts are unguarded. Field values are never touched here.
pub fn wizard_transition(
    from: WizardStep,
    action: WizardAction,
    fields: &IdeaFields,
) -> Result<StateTransition, WizardError> {
    use WizardAction::*;
    use WizardStep::*;

    let (to, reason) = match (from, action) {
        (DefineIdea, Next) => (TargetAudience, "idea defined"),
        (TargetAudience, Next) => (Solution, "audience defined"),
        (TargetAudience, Back) => (DefineIdea, "back to idea"),
        (Solution, Submit) => (Results, "plan generated"),
        (Solution, Back) => (TargetAudience, "back to audience"),
        (Results, StartOver) => (DefineIdea, "start over"),
        _ => return Err(WizardError::IllegalTransition { from, action }),
    };

    if matches!(action, Next | Submit) {
        let missing = fields.missing(from.required_fields());
        if !missing.is_empty() {
            return Err(WizardError::MissingRequired {
                step: from,
                missing,
            });
        }
    }

    Ok(StateTransition {
        from,
        to,
        action,
        reason,
    })
}
