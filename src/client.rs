//! Roster service HTTP client.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::error::{AppError, Result};
use crate::models::employee::{CreateEmployee, Employee};

/// Outcome of a create request.
///
/// The service answers a create with the full updated roster. `confirmed`
/// is set only for an exact 200 reply; other 2xx replies still carry a
/// usable roster but skip the confirmation notice.
#[derive(Debug, Clone)]
pub struct CreateOutcome {
    pub confirmed: bool,
    pub employees: Vec<Employee>,
}

/// HTTP client for the roster service.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `base_url` - The service URL (e.g., "http://localhost:8080")
    /// * `timeout_secs` - Per-request timeout
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the full roster.
    pub async fn list_employees(&self) -> Result<Vec<Employee>> {
        let url = format!("{base}/employees", base = self.base_url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Api {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    /// Create an employee and return the updated roster.
    ///
    /// The request body is the draft serialized as JSON. Any 2xx reply is
    /// decoded as the authoritative roster; non-2xx replies are `Api`
    /// errors and leave the caller's roster untouched.
    pub async fn create_employee(&self, draft: &CreateEmployee) -> Result<CreateOutcome> {
        let url = format!("{base}/employees/create", base = self.base_url);

        let response = self.client.post(&url).json(draft).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Api {
                status: status.as_u16(),
            });
        }

        let employees = response.json().await?;
        Ok(CreateOutcome {
            confirmed: status == StatusCode::OK,
            employees,
        })
    }
}
