//! Main application UI.

use std::sync::Arc;

use chrono::{DateTime, Local};
use eframe::egui;
use tokio::sync::mpsc;

use crate::client::{ApiClient, CreateOutcome};
use crate::config::AppConfig;
use crate::models::employee::{CreateEmployee, Employee};
use crate::validate;

use super::components::colors;
use super::{add_employee, roster_panel};

/// Lifecycle of the create request.
///
/// At most one create is in flight; the dialog's submit button is disabled
/// while `InFlight`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

/// Messages from async tasks to UI.
pub enum UiMessage {
    EmployeesLoaded(Vec<Employee>),
    LoadError(String),
    EmployeeCreated(CreateOutcome),
    CreateFailed(String),
}

/// Log level for UI messages.
#[derive(Clone, Copy, Debug)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Log entry for display in the UI.
#[derive(Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub level: LogLevel,
}

/// Form state for the add-employee dialog.
#[derive(Default, Clone)]
pub struct EmployeeForm {
    pub name: String,
    pub code: String,
    pub profession: String,
    pub color: String,
    pub city: String,
    pub branch: String,
    pub assigned: bool,
    pub errors: validate::FieldErrors,
    pub is_open: bool,
}

impl EmployeeForm {
    /// Create a fresh draft with default selections.
    pub fn open(colors: &[String], branches: &[String]) -> Self {
        Self {
            color: colors.first().cloned().unwrap_or_default(),
            branch: branches.first().cloned().unwrap_or_default(),
            assigned: true,
            is_open: true,
            ..Default::default()
        }
    }

    /// Discard the draft and hide the dialog.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build the create payload from current field values.
    pub fn draft(&self) -> CreateEmployee {
        CreateEmployee {
            name: self.name.clone(),
            code: self.code.clone(),
            profession: self.profession.clone(),
            color: self.color.clone(),
            city: self.city.clone(),
            branch: self.branch.clone(),
            assigned: self.assigned,
        }
    }
}

/// Main application state.
pub struct App {
    // Runtime and service client
    pub rt: tokio::runtime::Runtime,
    pub client: Arc<ApiClient>,

    // Message channel for async communication
    pub tx: mpsc::UnboundedSender<UiMessage>,
    pub rx: mpsc::UnboundedReceiver<UiMessage>,

    // Roster and selectable options
    pub employees: Vec<Employee>,
    pub colors: Vec<String>,
    pub branches: Vec<String>,

    // Loading state
    pub is_loading: bool,

    // Add-employee dialog
    pub employee_form: EmployeeForm,
    pub submit_state: SubmitState,

    // Log messages
    pub log_messages: Vec<LogEntry>,

    // Dialogs
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig, rt: tokio::runtime::Runtime) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let client = Arc::new(ApiClient::new(&config.api.url, config.api.timeout_secs));

        let mut app = Self {
            rt,
            client,
            tx,
            rx,
            employees: Vec::new(),
            colors: config.options.colors,
            branches: config.options.branches,
            is_loading: false,
            employee_form: EmployeeForm::default(),
            submit_state: SubmitState::default(),
            log_messages: Vec::new(),
            error_message: None,
            success_message: None,
        };

        // Load initial data
        app.load_employees();

        app
    }

    /// Log a message to the UI log.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.log_messages.push(LogEntry {
            timestamp: Local::now(),
            message: message.into(),
            level,
        });

        // Keep only last 100 messages
        if self.log_messages.len() > 100 {
            self.log_messages.remove(0);
        }
    }

    /// Log an info message.
    pub fn log_info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    /// Log a success message.
    pub fn log_success(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Success, message);
    }

    /// Log a warning message.
    pub fn log_warning(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    /// Log an error message.
    pub fn log_error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Load the roster from the service.
    pub fn load_employees(&mut self) {
        self.is_loading = true;

        let client = self.client.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match client.list_employees().await {
                Ok(emps) => {
                    let _ = tx.send(UiMessage::EmployeesLoaded(emps));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::LoadError(e.to_string()));
                }
            }
        });
    }

    /// Open the add-employee dialog with a fresh default draft.
    ///
    /// An outstanding create request keeps its `InFlight` state so the
    /// guard in `submit_employee` still holds.
    pub fn open_employee_form(&mut self) {
        self.employee_form = EmployeeForm::open(&self.colors, &self.branches);
        if self.submit_state != SubmitState::InFlight {
            self.submit_state = SubmitState::Idle;
        }
    }

    /// Discard the draft and hide the dialog.
    pub fn close_employee_form(&mut self) {
        self.employee_form.reset();
    }

    /// Validate the draft and dispatch the create request.
    ///
    /// On validation failure the errors are stored for inline display and
    /// nothing is sent. On success the dialog closes immediately; the
    /// request outcome arrives later as a `UiMessage`.
    pub fn submit_employee(&mut self) {
        if self.submit_state == SubmitState::InFlight {
            return;
        }

        let draft = self.employee_form.draft();
        let errors = validate::validate(&draft, &self.colors, &self.branches);
        if !errors.is_empty() {
            self.employee_form.errors = errors;
            return;
        }

        self.employee_form.reset();
        self.submit_state = SubmitState::InFlight;
        self.log_info(format!("Creating employee '{}'", draft.name));

        let client = self.client.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match client.create_employee(&draft).await {
                Ok(outcome) => {
                    let _ = tx.send(UiMessage::EmployeeCreated(outcome));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::CreateFailed(e.to_string()));
                }
            }
        });
    }

    /// Apply a message from an async task to the UI state.
    pub(crate) fn handle_message(&mut self, msg: UiMessage) {
        match msg {
            UiMessage::EmployeesLoaded(emps) => {
                self.employees = emps;
                self.is_loading = false;
            }
            UiMessage::LoadError(e) => {
                self.error_message = Some(e.clone());
                self.log_error(e);
                self.is_loading = false;
            }
            UiMessage::EmployeeCreated(outcome) => {
                self.submit_state = SubmitState::Succeeded;
                self.employees = outcome.employees;
                if outcome.confirmed {
                    self.success_message = Some("Employee added successfully.".to_string());
                    self.log_success("Employee added successfully");
                } else {
                    // Roster replaced, but the reply was not an exact 200
                    self.log_warning("Employee created with an unconfirmed reply");
                }
            }
            UiMessage::CreateFailed(e) => {
                self.submit_state = SubmitState::Failed(e.clone());
                self.error_message = Some(format!("Employee creation failed: {e}"));
                self.log_error(format!("Employee creation failed: {e}"));
            }
        }
    }

    /// Poll async operation results.
    fn poll_async_results(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Render modal dialogs (error, success).
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        // Error dialog
        if let Some(ref error) = self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, error);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }

        // Success dialog
        if let Some(ref msg) = self.success_message.clone() {
            egui::Window::new("Success")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::SUCCESS, msg);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.success_message = None;
                    }
                });
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll async results
        self.poll_async_results();

        // Request repaint during async operations
        if self.is_loading || self.submit_state == SubmitState::InFlight {
            ctx.request_repaint();
        }

        // Modal dialogs (error, success)
        self.show_dialogs(ctx);

        // Main content
        egui::CentralPanel::default().show(ctx, |ui| {
            roster_panel::show(self, ui);
        });

        // Form dialog
        if self.employee_form.is_open {
            add_employee::show(self, ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        let mut config = AppConfig::default();
        // Unroutable address so spawned requests fail fast and harmlessly
        config.api.url = "http://127.0.0.1:9".to_string();
        config.api.timeout_secs = 1;
        config
    }

    fn test_app() -> App {
        let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
        App::new(test_config(), rt)
    }

    fn fill_valid(form: &mut EmployeeForm) {
        form.name = "Alice Doe".to_string();
        form.code = "A123".to_string();
        form.profession = "Estimator".to_string();
        form.city = "Toronto".to_string();
    }

    fn sample_roster() -> Vec<Employee> {
        vec![Employee {
            id: 1,
            name: "Alice Doe".to_string(),
            code: "A123".to_string(),
            profession: "Estimator".to_string(),
            color: "blue".to_string(),
            city: "Toronto".to_string(),
            branch: "main".to_string(),
            assigned: true,
        }]
    }

    #[test]
    fn test_form_opens_with_defaults() {
        let mut app = test_app();
        app.open_employee_form();

        let form = &app.employee_form;
        assert!(form.is_open);
        assert_eq!(form.color, app.colors[0]);
        assert_eq!(form.branch, app.branches[0]);
        assert!(form.assigned);
        assert!(form.name.is_empty());
        assert!(form.errors.is_empty());
    }

    #[test]
    fn test_invalid_submit_keeps_dialog_open() {
        let mut app = test_app();
        app.open_employee_form();
        fill_valid(&mut app.employee_form);
        app.employee_form.code = "A12".to_string();

        app.submit_employee();

        assert!(app.employee_form.is_open);
        assert_eq!(app.submit_state, SubmitState::Idle);
        assert_eq!(app.employee_form.errors.len(), 1);
        assert!(app.employee_form.errors.contains_key(&crate::validate::Field::Code));
    }

    #[test]
    fn test_valid_submit_closes_dialog_before_outcome() {
        let mut app = test_app();
        app.open_employee_form();
        fill_valid(&mut app.employee_form);

        app.submit_employee();

        assert!(!app.employee_form.is_open);
        assert_eq!(app.submit_state, SubmitState::InFlight);
    }

    #[test]
    fn test_repeat_submit_ignored_while_in_flight() {
        let mut app = test_app();
        app.open_employee_form();
        fill_valid(&mut app.employee_form);
        app.submit_employee();
        assert_eq!(app.submit_state, SubmitState::InFlight);

        // Reopen and try to submit again while the first is outstanding
        app.open_employee_form();
        fill_valid(&mut app.employee_form);
        app.submit_employee();

        assert!(app.employee_form.is_open);
        assert_eq!(app.submit_state, SubmitState::InFlight);
    }

    #[test]
    fn test_close_discards_draft() {
        let mut app = test_app();
        app.open_employee_form();
        fill_valid(&mut app.employee_form);

        app.close_employee_form();

        assert!(!app.employee_form.is_open);
        assert!(app.employee_form.name.is_empty());
        assert_eq!(app.submit_state, SubmitState::Idle);
    }

    #[test]
    fn test_confirmed_create_replaces_roster_and_notifies() {
        let mut app = test_app();
        app.handle_message(UiMessage::EmployeeCreated(CreateOutcome {
            confirmed: true,
            employees: sample_roster(),
        }));

        assert_eq!(app.submit_state, SubmitState::Succeeded);
        assert_eq!(app.employees.len(), 1);
        assert_eq!(app.success_message.as_deref(), Some("Employee added successfully."));
    }

    #[test]
    fn test_unconfirmed_create_replaces_roster_without_notice() {
        let mut app = test_app();
        app.handle_message(UiMessage::EmployeeCreated(CreateOutcome {
            confirmed: false,
            employees: sample_roster(),
        }));

        assert_eq!(app.employees.len(), 1);
        assert!(app.success_message.is_none());
    }

    #[test]
    fn test_failed_create_surfaces_error() {
        let mut app = test_app();
        app.handle_message(UiMessage::CreateFailed("Server returned status 500".to_string()));

        assert!(matches!(app.submit_state, SubmitState::Failed(_)));
        assert!(app.error_message.as_deref().unwrap().contains("500"));
        assert!(app.employees.is_empty());
    }
}
