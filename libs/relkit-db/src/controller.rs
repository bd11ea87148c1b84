//! The generic transaction wrapper behind every example controller.
//!
//! Each operation is the same four lines: begin a transaction, hand the
//! records to sea-orm, commit, surface the result. The controller adds no
//! policy of its own beyond the "no longer exists" detection that edit and
//! destroy need.

use std::fmt::Display;
use std::marker::PhantomData;

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityName, EntityTrait, IntoActiveModel,
    PaginatorTrait, PrimaryKeyTrait, QuerySelect, TransactionTrait,
};
use tracing::debug;

use crate::error::StoreError;

/// The primary-key value type of an entity.
pub type PkValue<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// CRUD passthrough for a single entity type.
///
/// Every operation acquires its own transaction and releases it on every exit
/// path: commit on success, rollback on drop otherwise.
pub struct EntityController<E> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E> EntityController<E>
where
    E: EntityTrait,
    E::ActiveModel: ActiveModelTrait<Entity = E> + Send,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    PkValue<E>: Clone + Display + Send,
{
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Mark each record persistent inside one transaction.
    ///
    /// Zero records is a silent no-op; a failing commit propagates.
    ///
    /// # Errors
    /// Returns [`StoreError::Db`] if an insert or the commit fails.
    pub async fn create(&self, records: Vec<E::ActiveModel>) -> Result<(), StoreError> {
        if records.is_empty() {
            return Ok(());
        }
        debug!(
            table = E::default().table_name(),
            count = records.len(),
            "creating records"
        );
        let txn = self.db.begin().await?;
        for record in records {
            record.insert(&txn).await?;
        }
        txn.commit().await?;
        Ok(())
    }

    /// Merge a record's full detached state back into storage, returning the
    /// refreshed row.
    ///
    /// # Errors
    /// Returns [`StoreError::NoLongerExists`] when the merge reports no
    /// updated row and the id no longer resolves; every other failure is
    /// propagated as [`StoreError::Db`].
    pub async fn edit(
        &self,
        id: PkValue<E>,
        record: E::ActiveModel,
    ) -> Result<E::Model, StoreError> {
        debug!(table = E::default().table_name(), id = %id, "merging record");
        let txn = self.db.begin().await?;
        match record.update(&txn).await {
            Ok(refreshed) => {
                txn.commit().await?;
                Ok(refreshed)
            }
            Err(DbErr::RecordNotUpdated) => {
                // The update matched nothing. Decide whether the record
                // vanished or the failure was something else.
                if E::find_by_id(id.clone()).one(&txn).await?.is_none() {
                    Err(StoreError::no_longer_exists(id))
                } else {
                    Err(StoreError::Db(DbErr::RecordNotUpdated))
                }
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Resolve the record by id, remove it, commit.
    ///
    /// # Errors
    /// Returns [`StoreError::NoLongerExists`] when the id does not resolve;
    /// every other failure is propagated as [`StoreError::Db`].
    pub async fn destroy(&self, id: PkValue<E>) -> Result<(), StoreError> {
        debug!(table = E::default().table_name(), id = %id, "destroying record");
        let txn = self.db.begin().await?;
        if E::find_by_id(id.clone()).one(&txn).await?.is_none() {
            return Err(StoreError::no_longer_exists(id));
        }
        E::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(())
    }

    /// Every record, in storage order.
    ///
    /// # Errors
    /// Returns [`StoreError::Db`] if the query fails.
    pub async fn find_all(&self) -> Result<Vec<E::Model>, StoreError> {
        Ok(E::find().all(&self.db).await?)
    }

    /// A window of records, in storage order.
    ///
    /// # Errors
    /// Returns [`StoreError::Db`] if the query fails.
    pub async fn find_paged(
        &self,
        max_results: u64,
        first_result: u64,
    ) -> Result<Vec<E::Model>, StoreError> {
        Ok(E::find()
            .offset(first_result)
            .limit(max_results)
            .all(&self.db)
            .await?)
    }

    /// The record, or `None`.
    ///
    /// # Errors
    /// Returns [`StoreError::Db`] if the query fails.
    pub async fn find_by_id(&self, id: PkValue<E>) -> Result<Option<E::Model>, StoreError> {
        Ok(E::find_by_id(id).one(&self.db).await?)
    }

    /// Total row count for the entity type.
    ///
    /// # Errors
    /// Returns [`StoreError::Db`] if the query fails.
    pub async fn count(&self) -> Result<u64, StoreError> {
        Ok(E::find().count(&self.db).await?)
    }
}
