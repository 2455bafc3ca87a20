//! Validate page: progress indicator and the four wizard panels

use eframe::egui;
use momtest_core::{ValidationPlan, Wizard, WizardAction, WizardError, WizardStep};

use crate::state::ValidateUiState;
use crate::ui;

/// Work the page cannot do itself, handed back to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidateAction {
    None,
    SavePlan,
}

pub fn render(
    ui: &mut egui::Ui,
    wizard: &mut Wizard,
    state: &mut ValidateUiState,
    plan: &ValidationPlan,
) -> ValidateAction {
    ui::styled_heading(ui, "Validate Your Startup Idea");
    ui.add_space(4.0);
    ui.label(
        egui::RichText::new(
            "Follow the steps below to start validating your startup idea using principles \
             from \"The Mom Test\".",
        )
        .size(15.0),
    );
    ui.add_space(16.0);

    render_progress(ui, wizard.step());
    ui.add_space(16.0);

    let mut requested = None;
    let mut action = ValidateAction::None;

    ui::card(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(wizard.step().heading()).size(22.0).strong());
        ui.add_space(12.0);

        match wizard.step() {
            WizardStep::Results => {
                render_plan(ui, plan);
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if ui::secondary_button(ui, "Start Over").clicked() {
                        requested = Some(WizardAction::StartOver);
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui::primary_button(ui, "Save Plan").clicked() {
                            action = ValidateAction::SavePlan;
                        }
                    });
                });
            }
            step => {
                render_fields(ui, wizard, state, step);
                ui.add_space(8.0);
                requested = render_form_buttons(ui, step);
            }
        }

        if let Some(message) = &state.last_error {
            ui.add_space(8.0);
            ui::error_message(ui, message);
        }
        if let Some(message) = &state.last_info {
            ui.add_space(8.0);
            ui::success_message(ui, message);
        }
    });

    if let Some(requested) = requested {
        apply(wizard, state, requested);
    }
    action
}

fn render_progress(ui: &mut egui::Ui, current: WizardStep) {
    ui.horizontal(|ui| {
        for (i, node) in WizardStep::ALL.into_iter().enumerate() {
            if i > 0 {
                let color = if current.progress_reached(node) {
                    ui::ACCENT
                } else {
                    egui::Color32::from_gray(225)
                };
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(48.0, 36.0), egui::Sense::hover());
                ui.painter().hline(rect.x_range(), rect.center().y, egui::Stroke::new(3.0, color));
            }
            ui.vertical(|ui| {
                ui::progress_node(ui, node.number(), current.progress_reached(node));
                let text = egui::RichText::new(node.label()).small();
                ui.label(if current.progress_reached(node) {
                    text.color(ui::ACCENT)
                } else {
                    text.weak()
                });
            });
        }
    });
}

fn render_fields(
    ui: &mut egui::Ui,
    wizard: &mut Wizard,
    state: &ValidateUiState,
    step: WizardStep,
) {
    for &key in step.required_fields() {
        let value = wizard.field_mut(key);
        ui::labeled_input(ui, key.label(), value, key.placeholder(), key.is_multiline());
        if state.is_flagged(key, wizard.field(key)) {
            ui::required_hint(ui);
        }
        ui.add_space(12.0);
    }
}

fn render_form_buttons(ui: &mut egui::Ui, step: WizardStep) -> Option<WizardAction> {
    let mut requested = None;
    let (forward_label, forward) = match step {
        WizardStep::Solution => ("Generate Validation Plan", WizardAction::Submit),
        _ => ("Next", WizardAction::Next),
    };
    ui.horizontal(|ui| {
        if step != WizardStep::DefineIdea && ui::secondary_button(ui, "Back").clicked() {
            requested = Some(WizardAction::Back);
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui::primary_button(ui, forward_label).clicked() {
                requested = Some(forward);
            }
        });
    });
    requested
}

fn render_plan(ui: &mut egui::Ui, plan: &ValidationPlan) {
    ui::tinted_card(ui, ui::ACCENT_SOFT, |ui| {
        ui::section_header(ui, "Interview Questions", ui::ACCENT);
        ui.label(&plan.interview_intro);
        ui.add_space(6.0);
        for question in &plan.interview_questions {
            ui::bullet(ui, &question.question)
                .on_hover_text(format!("{}: {}", question.category, question.explanation));
        }
        ui.add_space(8.0);
        egui::Frame::none()
            .fill(egui::Color32::from_rgb(254, 252, 232))
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(250, 204, 21)))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        egui::RichText::new("Remember:")
                            .strong()
                            .color(egui::Color32::from_rgb(161, 98, 7)),
                    );
                    ui.label(
                        egui::RichText::new(&plan.reminder)
                            .color(egui::Color32::from_rgb(161, 98, 7)),
                    );
                });
            });
    });
    ui.add_space(12.0);

    ui::tinted_card(ui, egui::Color32::from_gray(245), |ui| {
        ui::section_header(ui, "Market Research Insights", egui::Color32::from_gray(30));
        ui.label(&plan.market_research_intro);
        ui.add_space(6.0);
        for platform in &plan.market_research_platforms {
            ui::bullet(ui, platform);
        }
    });
    ui.add_space(12.0);

    let green = egui::Color32::from_rgb(21, 128, 61);
    ui::tinted_card(ui, egui::Color32::from_rgb(240, 253, 244), |ui| {
        ui::section_header(ui, "Next Steps", green);
        for (i, step) in plan.next_steps.iter().enumerate() {
            ui::numbered(ui, i + 1, step);
        }
    });
}

/// Runs one wizard action and mirrors the outcome into the page state.
fn apply(wizard: &mut Wizard, state: &mut ValidateUiState, action: WizardAction) {
    match wizard.apply(action) {
        Ok(transition) => {
            tracing::info!(
                from = transition.from.number(),
                to = transition.to.number(),
                reason = transition.reason,
                "wizard step changed"
            );
            state.reset_notices();
        }
        Err(WizardError::MissingRequired { step, missing }) => {
            tracing::debug!(%step, ?missing, "advance blocked by empty required fields");
            state.flag_missing(missing);
        }
        Err(err @ WizardError::IllegalTransition { .. }) => {
            tracing::warn!("{err}");
        }
    }
}
