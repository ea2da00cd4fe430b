//! Data models for employees.

pub mod employee;

pub use employee::{CreateEmployee, Employee};
