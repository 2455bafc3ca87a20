//! Header component: brand, page links, auth buttons and the narrow-screen menu

use eframe::egui;
use momtest_adapters::SiteConfig;

use crate::navigation::{Route, NAV_LINKS};
use crate::state::{HeaderState, UiAction};
use crate::ui;

/// Render the header panel
pub fn render(
    ctx: &egui::Context,
    header: &mut HeaderState,
    current: Route,
    config: &SiteConfig,
) -> UiAction {
    let mut action = UiAction::None;
    let narrow = config.is_narrow(ctx.screen_rect().width());

    // Leaving the narrow layout hides the menu for good
    if !narrow && header.mobile_menu_open {
        header.on_navigate();
    }

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(10.0);
        ui.horizontal(|ui| {
            let brand = ui.add(
                egui::Label::new(
                    egui::RichText::new(&config.brand_name)
                        .size(20.0)
                        .strong()
                        .color(ui::ACCENT),
                )
                .sense(egui::Sense::click()),
            );
            if brand.clicked() {
                action = UiAction::Navigate(Route::Home);
            }

            if narrow {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = if header.mobile_menu_open { "✖" } else { "≡" };
                    if ui
                        .button(egui::RichText::new(icon).size(18.0))
                        .on_hover_text("Open main menu")
                        .clicked()
                    {
                        header.toggle_mobile_menu();
                    }
                });
                return;
            }

            ui.add_space(30.0);
            for route in NAV_LINKS {
                if nav_link(ui, route, current).clicked() {
                    action = UiAction::Navigate(route);
                }
                ui.add_space(8.0);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui::primary_button(ui, Route::Signup.label()).clicked() {
                    action = UiAction::Navigate(Route::Signup);
                }
                if ui::secondary_button(ui, Route::Login.label()).clicked() {
                    action = UiAction::Navigate(Route::Login);
                }
            });
        });

        if narrow && header.mobile_menu_open {
            ui.add_space(6.0);
            ui.separator();
            for route in NAV_LINKS {
                if nav_link(ui, route, current).clicked() {
                    action = UiAction::Navigate(route);
                }
            }
            ui.separator();
            ui.vertical_centered_justified(|ui| {
                if ui::secondary_button(ui, Route::Login.label()).clicked() {
                    action = UiAction::Navigate(Route::Login);
                }
                ui.add_space(4.0);
                if ui::primary_button(ui, Route::Signup.label()).clicked() {
                    action = UiAction::Navigate(Route::Signup);
                }
            });
        }
        ui.add_space(8.0);
    });

    if let UiAction::Navigate(_) = action {
        header.on_navigate();
    }
    action
}

/// Page link, highlighted when it points at the current route
fn nav_link(ui: &mut egui::Ui, route: Route, current: Route) -> egui::Response {
    let text = if route == current {
        egui::RichText::new(route.label()).strong().color(ui::ACCENT)
    } else {
        egui::RichText::new(route.label())
    };
    ui.selectable_label(route == current, text)
}
