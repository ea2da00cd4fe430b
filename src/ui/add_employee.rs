//! Add-employee dialog.

use eframe::egui::{self, Align2, Context};

use super::app::{App, SubmitState};
use super::components::{colors, field_error, styled_button};
use crate::validate::Field;

/// Show the add-employee dialog.
///
/// Validation errors render inline under the offending input. The Add
/// button is disabled while a create request is outstanding.
pub fn show(app: &mut App, ctx: &Context) {
    egui::Window::new("Add Employee")
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(10.0);

            egui::Grid::new("add_employee_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Name:");
                    ui.vertical(|ui| {
                        ui.add(egui::TextEdit::singleline(&mut app.employee_form.name).desired_width(240.0));
                        field_error(ui, &app.employee_form.errors, Field::Name);
                    });
                    ui.end_row();

                    ui.label("Code:");
                    ui.vertical(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut app.employee_form.code)
                                .desired_width(100.0)
                                .hint_text("4 characters"),
                        );
                        field_error(ui, &app.employee_form.errors, Field::Code);
                    });
                    ui.end_row();

                    ui.label("Profession:");
                    ui.vertical(|ui| {
                        ui.add(egui::TextEdit::singleline(&mut app.employee_form.profession).desired_width(240.0));
                        field_error(ui, &app.employee_form.errors, Field::Profession);
                    });
                    ui.end_row();

                    ui.label("Color:");
                    ui.vertical(|ui| {
                        egui::ComboBox::from_id_salt("add_emp_color")
                            .width(160.0)
                            .selected_text(app.employee_form.color.clone())
                            .show_ui(ui, |ui| {
                                for color in &app.colors {
                                    if ui.selectable_label(app.employee_form.color == *color, color).clicked() {
                                        app.employee_form.color = color.clone();
                                    }
                                }
                            });
                        field_error(ui, &app.employee_form.errors, Field::Color);
                    });
                    ui.end_row();

                    ui.label("City:");
                    ui.vertical(|ui| {
                        ui.add(egui::TextEdit::singleline(&mut app.employee_form.city).desired_width(200.0));
                        field_error(ui, &app.employee_form.errors, Field::City);
                    });
                    ui.end_row();

                    ui.label("Branch:");
                    ui.vertical(|ui| {
                        egui::ComboBox::from_id_salt("add_emp_branch")
                            .width(160.0)
                            .selected_text(app.employee_form.branch.clone())
                            .show_ui(ui, |ui| {
                                for branch in &app.branches {
                                    if ui
                                        .selectable_label(app.employee_form.branch == *branch, branch)
                                        .clicked()
                                    {
                                        app.employee_form.branch = branch.clone();
                                    }
                                }
                            });
                        field_error(ui, &app.employee_form.errors, Field::Branch);
                    });
                    ui.end_row();

                    ui.label("Assigned:");
                    egui::ComboBox::from_id_salt("add_emp_assigned")
                        .width(100.0)
                        .selected_text(if app.employee_form.assigned { "True" } else { "False" })
                        .show_ui(ui, |ui| {
                            if ui.selectable_label(app.employee_form.assigned, "True").clicked() {
                                app.employee_form.assigned = true;
                            }
                            if ui.selectable_label(!app.employee_form.assigned, "False").clicked() {
                                app.employee_form.assigned = false;
                            }
                        });
                    ui.end_row();
                });

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if styled_button(ui, "Close").clicked() {
                    app.close_employee_form();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let in_flight = app.submit_state == SubmitState::InFlight;
                    let add = egui::Button::new(egui::RichText::new("Add").size(14.0).color(egui::Color32::WHITE))
                        .fill(colors::ACCENT)
                        .min_size(egui::vec2(90.0, 28.0));
                    if ui.add_enabled(!in_flight, add).clicked() {
                        app.submit_employee();
                    }
                    if in_flight {
                        ui.spinner();
                    }
                });
            });
        });
}
