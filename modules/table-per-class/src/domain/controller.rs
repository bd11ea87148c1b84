//! CRUD controller spanning both subtype tables.

use relkit_db::{EntityController, StoreError};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, TransactionTrait,
};
use tracing::debug;

use crate::domain::model::{NewStaff, Staff};
use crate::infra::storage::entity::{non_teaching_staff, teaching_staff};
use crate::infra::storage::sequence;

pub struct StaffController {
    db: DatabaseConnection,
    teaching: EntityController<teaching_staff::Entity>,
    non_teaching: EntityController<non_teaching_staff::Entity>,
}

impl StaffController {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            teaching: EntityController::new(db.clone()),
            non_teaching: EntityController::new(db.clone()),
            db,
        }
    }

    /// Mark each record persistent inside one transaction, drawing every base
    /// id from the shared sequence before inserting into the subtype table.
    ///
    /// Zero records is a silent no-op; a failing commit propagates.
    ///
    /// # Errors
    /// Returns [`StoreError::Db`] if allocation, an insert or the commit
    /// fails.
    pub async fn create(&self, staff: Vec<NewStaff>) -> Result<(), StoreError> {
        if staff.is_empty() {
            return Ok(());
        }
        debug!(count = staff.len(), "creating staff records");
        let txn = self.db.begin().await?;
        for record in staff {
            let id = sequence::next_staff_id(&txn).await?;
            match record {
                NewStaff::Teaching {
                    name,
                    qualification,
                    subject_expertise,
                } => {
                    let row = teaching_staff::ActiveModel {
                        id: Set(id),
                        name: Set(name),
                        qualification: Set(qualification),
                        subject_expertise: Set(subject_expertise),
                    };
                    row.insert(&txn).await?;
                }
                NewStaff::NonTeaching {
                    name,
                    area_expertise,
                } => {
                    let row = non_teaching_staff::ActiveModel {
                        id: Set(id),
                        name: Set(name),
                        area_expertise: Set(area_expertise),
                    };
                    row.insert(&txn).await?;
                }
            }
        }
        txn.commit().await?;
        Ok(())
    }

    /// Merge a detached record back into the table its variant lives in,
    /// returning the refreshed variant.
    ///
    /// # Errors
    /// Returns [`StoreError::NoLongerExists`] if the record is gone,
    /// [`StoreError::Db`] otherwise.
    pub async fn edit(&self, staff: Staff) -> Result<Staff, StoreError> {
        match staff {
            Staff::Teaching(teaching) => {
                let id = teaching.id;
                let record = teaching_staff::ActiveModel {
                    id: Set(id),
                    name: Set(teaching.name),
                    qualification: Set(teaching.qualification),
                    subject_expertise: Set(teaching.subject_expertise),
                };
                Ok(self.teaching.edit(id, record).await?.into())
            }
            Staff::NonTeaching(non_teaching) => {
                let id = non_teaching.id;
                let record = non_teaching_staff::ActiveModel {
                    id: Set(id),
                    name: Set(non_teaching.name),
                    area_expertise: Set(non_teaching.area_expertise),
                };
                Ok(self.non_teaching.edit(id, record).await?.into())
            }
        }
    }

    /// Resolve the base id against either subtype table, then remove it.
    ///
    /// # Errors
    /// Returns [`StoreError::NoLongerExists`] if the id resolves against
    /// neither table, [`StoreError::Db`] otherwise.
    pub async fn destroy(&self, id: i64) -> Result<(), StoreError> {
        if self.teaching.find_by_id(id).await?.is_some() {
            self.teaching.destroy(id).await
        } else {
            self.non_teaching.destroy(id).await
        }
    }

    /// Every record of both subtypes, merged in base-id order.
    ///
    /// # Errors
    /// Returns [`StoreError::Db`] if either query fails.
    pub async fn find_all(&self) -> Result<Vec<Staff>, StoreError> {
        let teaching = teaching_staff::Entity::find()
            .order_by_asc(teaching_staff::Column::Id)
            .all(&self.db)
            .await?;
        let non_teaching = non_teaching_staff::Entity::find()
            .order_by_asc(non_teaching_staff::Column::Id)
            .all(&self.db)
            .await?;

        let mut merged: Vec<Staff> = teaching
            .into_iter()
            .map(Staff::from)
            .chain(non_teaching.into_iter().map(Staff::from))
            .collect();
        merged.sort_by_key(Staff::id);
        Ok(merged)
    }

    /// A window over the merged union, in base-id order.
    ///
    /// # Errors
    /// Returns [`StoreError::Db`] if either query fails.
    pub async fn find_paged(
        &self,
        max_results: u64,
        first_result: u64,
    ) -> Result<Vec<Staff>, StoreError> {
        let all = self.find_all().await?;
        let first = usize::try_from(first_result).unwrap_or(usize::MAX);
        let max = usize::try_from(max_results).unwrap_or(usize::MAX);
        Ok(all.into_iter().skip(first).take(max).collect())
    }

    /// Resolve a base id polymorphically against both subtype tables.
    ///
    /// # Errors
    /// Returns [`StoreError::Db`] if either query fails.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Staff>, StoreError> {
        if let Some(row) = self.teaching.find_by_id(id).await? {
            return Ok(Some(row.into()));
        }
        Ok(self.non_teaching.find_by_id(id).await?.map(Staff::from))
    }

    /// Total row count across both subtype tables.
    ///
    /// # Errors
    /// Returns [`StoreError::Db`] if either query fails.
    pub async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.teaching.count().await? + self.non_teaching.count().await?)
    }
}
