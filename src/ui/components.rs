//! Shared UI components.

use eframe::egui::{self, Color32, Response, RichText, Ui};

use crate::validate::{Field, FieldErrors};

/// Status indicator colors.
pub mod colors {
    use super::Color32;

    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    pub const WARNING: Color32 = Color32::from_rgb(255, 200, 100);
    pub const NEUTRAL: Color32 = Color32::from_rgb(150, 150, 150);
    pub const ACCENT: Color32 = Color32::from_rgb(70, 120, 190);
}

/// Render a panel header with title.
pub fn panel_header(ui: &mut Ui, title: &str) {
    ui.heading(RichText::new(title).size(24.0));
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(20.0);
}

/// Render a plain secondary button.
pub fn styled_button(ui: &mut Ui, label: &str) -> Response {
    ui.add(egui::Button::new(RichText::new(label).size(14.0)).min_size(egui::vec2(90.0, 28.0)))
}

/// Render a secondary button with a leading icon.
pub fn styled_button_with_icon(ui: &mut Ui, icon: &str, label: &str) -> Response {
    ui.add(egui::Button::new(RichText::new(format!("{icon} {label}")).size(14.0)).min_size(egui::vec2(110.0, 28.0)))
}

/// Render a filled primary button with a leading icon.
pub fn primary_button_with_icon(ui: &mut Ui, icon: &str, label: &str) -> Response {
    ui.add(
        egui::Button::new(RichText::new(format!("{icon} {label}")).size(14.0).color(Color32::WHITE))
            .fill(colors::ACCENT)
            .min_size(egui::vec2(130.0, 28.0)),
    )
}

/// Render the inline error for a field, if any.
pub fn field_error(ui: &mut Ui, errors: &FieldErrors, field: Field) {
    if let Some(message) = errors.get(&field) {
        ui.colored_label(colors::ERROR, message);
    }
}
