//! Roster panel with employee table and add dialog trigger.

use eframe::egui::{self, ScrollArea, Ui};
use egui_phosphor::regular::{ARROWS_CLOCKWISE, PLUS};

use super::app::{App, LogLevel, SubmitState};
use super::components::{colors, panel_header, primary_button_with_icon, styled_button_with_icon};

/// Show the roster panel.
pub fn show(app: &mut App, ui: &mut Ui) {
    panel_header(ui, "Employee Roster");

    // Toolbar
    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, PLUS, "Add Employee").clicked() {
            app.open_employee_form();
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, ARROWS_CLOCKWISE, "Refresh").clicked() {
            app.load_employees();
        }

        if app.submit_state == SubmitState::InFlight {
            ui.add_space(10.0);
            ui.spinner();
            ui.label("Creating employee...");
        } else if app.is_loading {
            ui.add_space(10.0);
            ui.spinner();
            ui.label("Loading...");
        }
    });

    ui.add_space(15.0);

    show_table(app, ui);

    ui.add_space(15.0);

    show_activity_log(app, ui);
}

fn show_table(app: &App, ui: &mut Ui) {
    ui.label(format!("{} employees", app.employees.len()));

    ui.add_space(10.0);

    ScrollArea::vertical().id_salt("roster_scroll").max_height(320.0).show(ui, |ui| {
        ui.add_space(4.0);
        egui::Grid::new("employees_grid")
            .num_columns(7)
            .striped(true)
            .min_col_width(60.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                // Header
                ui.strong("Name");
                ui.strong("Code");
                ui.strong("Profession");
                ui.strong("Color");
                ui.strong("City");
                ui.strong("Branch");
                ui.strong("Assigned");
                ui.end_row();

                // Data rows
                for emp in &app.employees {
                    ui.label(&emp.name);
                    ui.label(&emp.code);
                    ui.label(&emp.profession);
                    ui.label(&emp.color);
                    ui.label(&emp.city);
                    ui.label(&emp.branch);
                    ui.label(if emp.assigned { "Yes" } else { "No" });
                    ui.end_row();
                }
            });
    });
}

fn show_activity_log(app: &App, ui: &mut Ui) {
    ui.separator();
    ui.strong("Activity");
    ui.add_space(5.0);

    ScrollArea::vertical().id_salt("activity_scroll").max_height(120.0).show(ui, |ui| {
        for entry in app.log_messages.iter().rev() {
            let color = match entry.level {
                LogLevel::Info => colors::NEUTRAL,
                LogLevel::Success => colors::SUCCESS,
                LogLevel::Warning => colors::WARNING,
                LogLevel::Error => colors::ERROR,
            };
            ui.horizontal(|ui| {
                ui.weak(entry.timestamp.format("%H:%M:%S").to_string());
                ui.colored_label(color, &entry.message);
            });
        }
    });
}
