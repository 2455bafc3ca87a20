use crate::domain::{FieldKey, IdeaFields};
use crate::state_machine::{wizard_transition, StateTransition, WizardAction, WizardError, WizardStep};

/// In-memory state of one validation wizard view.
///
/// Field values survive every transition, including `StartOver`. Dropping the
/// wizard is the only way to clear them.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    step: WizardStep,
    fields: IdeaFields,
    history: Vec<StateTransition>,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn fields(&self) -> &IdeaFields {
        &self.fields
    }

    pub fn field(&self, key: FieldKey) -> &str {
        self.fields.get(key)
    }

    /// Direct binding for text inputs.
    pub fn field_mut(&mut self, key: FieldKey) -> &mut String {
        self.fields.get_mut(key)
    }

    pub fn set_field(&mut self, key: FieldKey, value: impl Into<String>) {
        self.fields.set(key, value);
    }

    /// Required fields of the current step that are still empty.
    pub fn missing_required(&self) -> Vec<FieldKey> {
        self.fields.missing(self.step.required_fields())
    }

    /// Accepted transitions, oldest first.
    pub fn history(&self) -> &[StateTransition] {
        &self.history
    }

    /// Applies `action`; on error the wizard is left exactly as it was.
    pub fn apply(&mut self, action: WizardAction) -> Result<StateTransition, WizardError> {
        let transition = wizard_transition(self.step, action, &self.fields)?;
        self.step = transition.to;
        self.history.push(transition.clone());
        Ok(transition)
    }

    pub fn next(&mut self) -> Result<StateTransition, WizardError> {
        self.apply(WizardAction::Next)
    }

    pub fn back(&mut self) -> Result<StateTransition, WizardError> {
        self.apply(WizardAction::Back)
    }

    pub fn submit(&mut self) -> Result<StateTransition, WizardError> {
        self.apply(WizardAction::Submit)
    }

    pub fn start_over(&mut self) -> Result<StateTransition, WizardError> {
        self.apply(WizardAction::StartOver)
    }
}
