//! Table-per-class inheritance mapping example.
//!
//! Each staff subtype gets its own table carrying the full column set, and
//! both share one base identifier sequence (a single-row allocation table
//! incremented inside the creating transaction). Polymorphic reads span both
//! tables, merged in base-id order.

pub mod demo;
pub mod domain;
pub mod infra;

pub use domain::controller::StaffController;
pub use domain::model::{NewStaff, NonTeachingStaff, Staff, TeachingStaff};
pub use infra::storage::migrations::Migrator;
