//! Employee record and create payload.

use serde::{Deserialize, Serialize};

/// Employee record as returned by the roster service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub profession: String,
    pub color: String,
    pub city: String,
    pub branch: String,
    pub assigned: bool,
}

/// Payload for creating an employee.
///
/// Serialized verbatim as the create request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEmployee {
    pub name: String,
    pub code: String,
    pub profession: String,
    pub color: String,
    pub city: String,
    pub branch: String,
    pub assigned: bool,
}
