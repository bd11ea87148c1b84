//! Collection-association mapping example.
//!
//! A department owns many employees; each employee row carries a foreign key
//! back to its department. The controller persists a department together with
//! its whole employee list in one transaction.

pub mod demo;
pub mod domain;
pub mod infra;

pub use domain::controller::EmployeesController;
pub use domain::model::{NewDepartment, NewEmployee};
pub use infra::storage::migrations::Migrator;
