pub mod domain;
pub mod plan;
pub mod ports;
pub mod state_machine;
pub mod wizard;

pub use domain::{FieldKey, IdeaFields};
pub use plan::{InterviewQuestion, ValidationPlan};
pub use ports::{PlanExportOutcome, PlanExportPort, PortError};
pub use state_machine::{
    wizard_transition, StateTransition, WizardAction, WizardError, WizardStep,
};
pub use wizard::Wizard;
