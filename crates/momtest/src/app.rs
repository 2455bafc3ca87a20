//! Main application state and update loop

use eframe::egui;
use eyre::WrapErr;
use momtest_adapters::{PrintAdapter, SiteConfig};
use momtest_core::{PlanExportOutcome, PlanExportPort, ValidationPlan, Wizard};

use crate::navigation::Route;
use crate::pages::{self, ValidateAction};
use crate::state::{HeaderState, UiAction, ValidateUiState};
use crate::{footer, header};

/// The main application state
pub struct App {
    config: SiteConfig,
    /// Page shown in the central panel
    route: Route,
    header: HeaderState,
    /// Wizard data; lives as long as the window
    wizard: Wizard,
    validate_ui: ValidateUiState,
    plan: ValidationPlan,
    exporter: PrintAdapter,
}

impl App {
    /// Create a new App instance
    pub fn new(cc: &eframe::CreationContext<'_>, config: SiteConfig, route: Route) -> Self {
        cc.egui_ctx.set_visuals(if config.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        Self {
            config,
            route,
            header: HeaderState::default(),
            wizard: Wizard::new(),
            validate_ui: ValidateUiState::default(),
            plan: ValidationPlan::standard(),
            exporter: PrintAdapter,
        }
    }

    fn navigate(&mut self, route: Route) {
        if route != self.route {
            tracing::info!(
                from = self.route.path(),
                to = route.path(),
                has_page = route.has_content(),
                "navigate"
            );
            self.route = route;
        }
    }

    fn save_plan(&mut self) {
        match export_plan(&self.exporter, &self.plan) {
            Ok(PlanExportOutcome::PrintDialogOpened) => {
                self.validate_ui.set_info("Print dialog opened");
            }
            Ok(PlanExportOutcome::CopiedToClipboard) => {
                self.validate_ui.set_info("Plan copied to clipboard");
            }
            Err(err) => {
                tracing::warn!("{err:#}");
                self.validate_ui.set_error(format!("{err:#}"));
            }
        }
    }
}

fn export_plan(
    exporter: &impl PlanExportPort,
    plan: &ValidationPlan,
) -> eyre::Result<PlanExportOutcome> {
    exporter
        .export_plan(plan)
        .wrap_err("could not save the validation plan")
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut action = header::render(ctx, &mut self.header, self.route, &self.config);
        footer::render(ctx, &self.config);

        let mut validate_action = ValidateAction::None;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(16.0);
                let page_action = match self.route {
                    Route::Home => pages::home::render(ui),
                    Route::Validate => {
                        validate_action = pages::validate::render(
                            ui,
                            &mut self.wizard,
                            &mut self.validate_ui,
                            &self.plan,
                        );
                        UiAction::None
                    }
                    route => pages::unavailable::render(ui, route),
                };
                if page_action != UiAction::None {
                    action = page_action;
                }
                ui.add_space(24.0);
            });
        });

        if validate_action == ValidateAction::SavePlan {
            self.save_plan();
        }
        if let UiAction::Navigate(route) = action {
            self.header.on_navigate();
            self.navigate(route);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::export_plan;
    use momtest_core::{PlanExportOutcome, PlanExportPort, PortError, ValidationPlan};

    struct Unavailable;

    impl PlanExportPort for Unavailable {
        fn export_plan(&self, _plan: &ValidationPlan) -> Result<PlanExportOutcome, PortError> {
            Err(PortError::Unavailable("no printer"))
        }
    }

    struct Printer;

    impl PlanExportPort for Printer {
        fn export_plan(&self, plan: &ValidationPlan) -> Result<PlanExportOutcome, PortError> {
            assert_eq!(plan.interview_questions.len(), 5);
            Ok(PlanExportOutcome::PrintDialogOpened)
        }
    }

    #[test]
    fn export_failure_carries_context_and_cause() {
        let err = export_plan(&Unavailable, &ValidationPlan::standard()).expect_err("must fail");
        let message = format!("{err:#}");
        assert!(message.contains("could not save the validation plan"));
        assert!(message.contains("no printer"));
    }

    #[test]
    fn export_success_passes_the_outcome_through() {
        let outcome = export_plan(&Printer, &ValidationPlan::standard()).expect("prints");
        assert_eq!(outcome, PlanExportOutcome::PrintDialogOpened);
    }
}
