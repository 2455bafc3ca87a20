//! Landing page: hero, how it works, call to action

use eframe::egui;

use crate::navigation::Route;
use crate::state::UiAction;
use crate::ui;

const STEPS: [(&str, &str); 3] = [
    (
        "Define Your Idea",
        "Clearly articulate your startup idea, target market, and the problem you're solving.",
    ),
    (
        "Generate Interview Questions",
        "Get questions based on \"The Mom Test\" principles to avoid biased feedback.",
    ),
    (
        "Analyze & Iterate",
        "Record interview results and refine your idea based on real feedback.",
    ),
];

pub fn render(ui: &mut egui::Ui) -> UiAction {
    let mut action = UiAction::None;

    // Hero
    ui::tinted_card(ui, ui::ACCENT_SOFT, |ui| {
        ui.add_space(12.0);
        ui.label(
            egui::RichText::new("Validate Your Startup Idea The Right Way")
                .size(34.0)
                .strong(),
        );
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(
                "Stop wasting time on bad ideas. Use principles from \"The Mom Test\" to get \
                 honest feedback and validate your startup idea with confidence.",
            )
            .size(16.0),
        );
        ui.add_space(16.0);
        ui.horizontal(|ui| {
            if ui::primary_button(ui, "Start Validating").clicked() {
                action = UiAction::Navigate(Route::Validate);
            }
            if ui::secondary_button(ui, Route::Learn.label()).clicked() {
                action = UiAction::Navigate(Route::Learn);
            }
        });
        ui.add_space(16.0);
        ui::card(ui, |ui| {
            ui.label(egui::RichText::new("The Mom Test").strong().size(18.0));
            ui.label(
                egui::RichText::new(
                    "\"Talk about their life, not your idea. Ask about specifics in the past, \
                     not generics or opinions about the future.\"",
                )
                .italics(),
            );
        });
        ui.add_space(12.0);
    });

    ui.add_space(28.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("How It Works").size(26.0).strong());
    });
    ui.add_space(12.0);

    ui.columns(STEPS.len(), |columns| {
        for (i, (column, (title, body))) in columns.iter_mut().zip(STEPS).enumerate() {
            ui::card(column, |ui| {
                ui::progress_node(ui, (i + 1) as u8, true);
                ui.add_space(6.0);
                ui.label(egui::RichText::new(title).strong().size(16.0));
                ui.label(body);
            });
        }
    });

    ui.add_space(28.0);
    ui::tinted_card(ui, ui::ACCENT_SOFT, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("Ready to Validate Your Idea?").size(24.0).strong());
            ui.add_space(6.0);
            ui.label(
                "Join hundreds of founders who have saved time and money by validating their \
                 ideas properly.",
            );
            ui.add_space(10.0);
            if ui::primary_button(ui, "Get Started for Free").clicked() {
                action = UiAction::Navigate(Route::Signup);
            }
        });
    });

    action
}
