//! Single-table inheritance mapping example.
//!
//! Both staff subtypes live in one `staff` table, told apart by a `kind`
//! discriminator column; subtype-specific columns are nullable. The domain
//! side is a tagged variant instead of a class hierarchy, so reads map each
//! row onto its variant and refuse rows whose discriminator disagrees with
//! their columns.

pub mod demo;
pub mod domain;
pub mod infra;

pub use domain::controller::StaffController;
pub use domain::model::{NewStaff, NonTeachingStaff, Staff, TeachingStaff};
pub use infra::storage::migrations::Migrator;
