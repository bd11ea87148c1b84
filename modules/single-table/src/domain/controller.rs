//! CRUD controller for the discriminated `staff` table.

use relkit_db::{EntityController, StoreError};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use tracing::debug;

use crate::domain::model::{NewStaff, Staff};
use crate::infra::storage::entity::{self, StaffKind};
use crate::infra::storage::mapper::{row_from_new, row_from_staff, staff_from_row};

pub struct StaffController {
    db: DatabaseConnection,
    staff: EntityController<entity::Entity>,
}

impl StaffController {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            staff: EntityController::new(db.clone()),
            db,
        }
    }

    /// Mark each record persistent inside one transaction; both variants land
    /// in the shared table.
    ///
    /// # Errors
    /// Returns [`StoreError::Db`] if an insert or the commit fails.
    pub async fn create(&self, staff: Vec<NewStaff>) -> Result<(), StoreError> {
        debug!(count = staff.len(), "creating staff records");
        let records = staff.into_iter().map(row_from_new).collect();
        self.staff.create(records).await
    }

    /// Merge a detached record back into storage, returning the refreshed
    /// variant.
    ///
    /// # Errors
    /// Returns [`StoreError::NoLongerExists`] if the record is gone,
    /// [`StoreError::Db`] otherwise.
    pub async fn edit(&self, staff: Staff) -> Result<Staff, StoreError> {
        let id = staff.id();
        let refreshed = self.staff.edit(id, row_from_staff(staff)).await?;
        Ok(staff_from_row(refreshed)?)
    }

    /// # Errors
    /// Returns [`StoreError::NoLongerExists`] if the id does not resolve,
    /// [`StoreError::Db`] otherwise.
    pub async fn destroy(&self, id: i64) -> Result<(), StoreError> {
        self.staff.destroy(id).await
    }

    /// # Errors
    /// Returns [`StoreError::Db`] if the query fails or a row is corrupt.
    pub async fn find_all(&self) -> Result<Vec<Staff>, StoreError> {
        let rows = self.staff.find_all().await?;
        Ok(map_rows(rows)?)
    }

    /// # Errors
    /// Returns [`StoreError::Db`] if the query fails or a row is corrupt.
    pub async fn find_paged(
        &self,
        max_results: u64,
        first_result: u64,
    ) -> Result<Vec<Staff>, StoreError> {
        let rows = self.staff.find_paged(max_results, first_result).await?;
        Ok(map_rows(rows)?)
    }

    /// # Errors
    /// Returns [`StoreError::Db`] if the query fails or the row is corrupt.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Staff>, StoreError> {
        let row = self.staff.find_by_id(id).await?;
        Ok(row.map(staff_from_row).transpose()?)
    }

    /// # Errors
    /// Returns [`StoreError::Db`] if the query fails.
    pub async fn count(&self) -> Result<u64, StoreError> {
        self.staff.count().await
    }

    /// Every teaching record, selected through the discriminator.
    ///
    /// # Errors
    /// Returns [`StoreError::Db`] if the query fails or a row is corrupt.
    pub async fn find_teaching(&self) -> Result<Vec<Staff>, StoreError> {
        self.find_kind(StaffKind::Teaching).await
    }

    /// Every non-teaching record, selected through the discriminator.
    ///
    /// # Errors
    /// Returns [`StoreError::Db`] if the query fails or a row is corrupt.
    pub async fn find_non_teaching(&self) -> Result<Vec<Staff>, StoreError> {
        self.find_kind(StaffKind::NonTeaching).await
    }

    async fn find_kind(&self, kind: StaffKind) -> Result<Vec<Staff>, StoreError> {
        let rows = entity::Entity::find()
            .filter(entity::Column::Kind.eq(kind))
            .all(&self.db)
            .await?;
        Ok(map_rows(rows)?)
    }
}

fn map_rows(rows: Vec<entity::Model>) -> Result<Vec<Staff>, DbErr> {
    rows.into_iter().map(staff_from_row).collect()
}
