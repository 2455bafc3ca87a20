//! UI helper components

use eframe::egui;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
pub const ACCENT_SOFT: egui::Color32 = egui::Color32::from_rgb(219, 234, 254);
const ERROR: egui::Color32 = egui::Color32::from_rgb(220, 60, 60);

/// Styled heading with accent color
pub fn styled_heading(ui: &mut egui::Ui, text: &str) {
    ui.heading(egui::RichText::new(text).strong().size(26.0));
}

/// Section header with separator
pub fn section_header(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    ui.add_space(4.0);
    ui.label(egui::RichText::new(text).strong().size(18.0).color(color));
    ui.add_space(4.0);
}

/// Labeled text input; returns the text edit response
pub fn labeled_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    multiline: bool,
) -> egui::Response {
    ui.label(egui::RichText::new(label).strong());
    ui.add_space(2.0);
    let edit = if multiline {
        egui::TextEdit::multiline(value).desired_rows(4)
    } else {
        egui::TextEdit::singleline(value)
    };
    ui.add(edit.hint_text(hint).desired_width(f32::INFINITY))
}

/// Browser-style required-field hint
pub fn required_hint(ui: &mut egui::Ui) {
    ui.label(egui::RichText::new("⚠ Please fill out this field.").small().color(ERROR));
}

/// Error message display
pub fn error_message(ui: &mut egui::Ui, message: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("❌").size(16.0));
        ui.label(egui::RichText::new(message).color(ERROR));
    });
}

/// Success message display
pub fn success_message(ui: &mut egui::Ui, message: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("✅").size(16.0));
        ui.label(egui::RichText::new(message).color(egui::Color32::from_rgb(22, 163, 74)));
    });
}

// =============================================================================
// STYLED BUTTONS
// =============================================================================

/// Primary action button, filled with the accent color
pub fn primary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let btn = egui::Button::new(egui::RichText::new(text).size(14.0).color(egui::Color32::WHITE))
        .min_size(egui::vec2(110.0, 34.0))
        .fill(ACCENT);
    ui.add(btn)
}

/// Secondary action button, outline style
pub fn secondary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let btn = egui::Button::new(egui::RichText::new(text).size(14.0).color(ACCENT))
        .min_size(egui::vec2(90.0, 34.0))
        .fill(egui::Color32::TRANSPARENT)
        .stroke(egui::Stroke::new(1.0, ACCENT));
    ui.add(btn)
}

// =============================================================================
// VISUAL GROUPING
// =============================================================================

/// Render content in a subtle card/frame
pub fn card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .rounding(8.0)
        .inner_margin(16.0)
        .show(ui, add_contents);
}

/// Card with an explicit tint, used for the plan sections
pub fn tinted_card(
    ui: &mut egui::Ui,
    fill: egui::Color32,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    egui::Frame::none()
        .fill(fill)
        .rounding(8.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}

/// Bulleted list item
pub fn bullet(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.horizontal_wrapped(|ui| {
        ui.label("•");
        ui.label(text)
    })
    .inner
}

/// Numbered list item
pub fn numbered(ui: &mut egui::Ui, number: usize, text: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(format!("{number}."));
        ui.label(text);
    });
}

/// Round progress node with a number inside
pub fn progress_node(ui: &mut egui::Ui, number: u8, reached: bool) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(36.0, 36.0), egui::Sense::hover());
    let (fill, text) = if reached {
        (ACCENT, egui::Color32::WHITE)
    } else {
        (egui::Color32::from_gray(225), egui::Color32::from_gray(110))
    };
    ui.painter().circle_filled(rect.center(), 18.0, fill);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        number.to_string(),
        egui::FontId::proportional(15.0),
        text,
    );
}
