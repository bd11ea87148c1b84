//! The error taxonomy shared by every controller operation.

use std::fmt::Display;

use sea_orm::DbErr;
use thiserror::Error;

/// There are exactly two ways an operation fails: the targeted record is
/// gone, or the store itself failed. Nothing is retried, nothing is partial.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An edit or destroy targeted an identifier that no longer resolves.
    #[error("the record with id {id} no longer exists")]
    NoLongerExists { id: String },

    /// Any other storage failure, propagated unchanged.
    #[error(transparent)]
    Db(#[from] DbErr),
}

impl StoreError {
    pub fn no_longer_exists(id: impl Display) -> Self {
        Self::NoLongerExists { id: id.to_string() }
    }

    #[must_use]
    pub fn is_no_longer_exists(&self) -> bool {
        matches!(self, Self::NoLongerExists { .. })
    }
}
