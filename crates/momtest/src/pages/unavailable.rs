use eframe::egui;

use crate::navigation::Route;
use crate::state::UiAction;
use crate::ui;

/// Placeholder for linked routes that have no page yet.
pub fn render(ui: &mut egui::Ui, route: Route) -> UiAction {
    let mut action = UiAction::None;
    ui::styled_heading(ui, route.label());
    ui.add_space(8.0);
    ui.label(
        egui::RichText::new(format!("{} is not available yet.", route.path())).weak(),
    );
    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui::primary_button(ui, "Validate an idea").clicked() {
            action = UiAction::Navigate(Route::Validate);
        }
        if ui::secondary_button(ui, "Back home").clicked() {
            action = UiAction::Navigate(Route::Home);
        }
    });
    action
}
