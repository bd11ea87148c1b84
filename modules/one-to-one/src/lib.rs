//! Direct-association mapping example.
//!
//! An employee row carries a unique foreign key to its department row; the
//! controller persists the pair in one transaction and lets the store assign
//! both identifiers. Everything else is the uniform CRUD passthrough.

pub mod demo;
pub mod domain;
pub mod infra;

pub use domain::controller::EmployeesController;
pub use domain::model::{NewDepartment, NewEmployee};
pub use infra::storage::migrations::Migrator;
