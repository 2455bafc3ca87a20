use momtest_core::{PlanExportOutcome, PlanExportPort, PortError, ValidationPlan};

/// "Save Plan": the browser print dialog on the web, the clipboard on native.
#[derive(Debug, Clone, Default)]
pub struct PrintAdapter;

impl PlanExportPort for PrintAdapter {
    fn export_plan(&self, plan: &ValidationPlan) -> Result<PlanExportOutcome, PortError> {
        #[cfg(target_arch = "wasm32")]
        {
            let _ = plan;
            let window = web_sys::window().ok_or(PortError::Unavailable("no browser window"))?;
            window
                .print()
                .map_err(|e| PortError::Platform(format!("print failed: {e:?}")))?;
            tracing::info!("opened browser print dialog");
            return Ok(PlanExportOutcome::PrintDialogOpened);
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| PortError::Platform(format!("clipboard unavailable: {e}")))?;
            clipboard
                .set_text(plan.to_plain_text())
                .map_err(|e| PortError::Platform(format!("clipboard write failed: {e}")))?;
            tracing::info!("copied validation plan to clipboard");
            Ok(PlanExportOutcome::CopiedToClipboard)
        }
    }
}
