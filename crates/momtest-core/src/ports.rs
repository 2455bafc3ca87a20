use thiserror::Error;

use crate::plan::ValidationPlan;

#[derive(Debug, Error)]
pub enum PortError {
    #[error("export not available: {0}")]
    Unavailable(&'static str),
    #[error("platform error: {0}")]
    Platform(String),
}

/// Hands the finished plan to whatever the platform offers for saving it.
pub trait PlanExportPort {
    fn export_plan(&self, plan: &ValidationPlan) -> Result<PlanExportOutcome, PortError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanExportOutcome {
    /// The platform print dialog was opened.
    PrintDialogOpened,
    /// The plan text was placed on the clipboard.
    CopiedToClipboard,
}
