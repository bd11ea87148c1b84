//! CRUD controller for a department owning a collection of employees.

use relkit_db::{EntityController, StoreError};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set, TransactionTrait,
};
use tracing::debug;

use crate::domain::model::{NewDepartment, NewEmployee};
use crate::infra::storage::entity::{department, employee};

pub struct EmployeesController {
    db: DatabaseConnection,
    employees: EntityController<employee::Entity>,
}

impl EmployeesController {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            employees: EntityController::new(db.clone()),
            db,
        }
    }

    /// Persist a department and its whole employee list in one transaction,
    /// wiring the storage-assigned department id into every member.
    ///
    /// # Errors
    /// Returns [`StoreError::Db`] if any insert or the commit fails.
    pub async fn create(
        &self,
        department: NewDepartment,
        employees: Vec<NewEmployee>,
    ) -> Result<(), StoreError> {
        debug!(
            department = %department.name,
            members = employees.len(),
            "creating department with members"
        );
        let txn = self.db.begin().await?;
        let dept = department::ActiveModel {
            name: Set(department.name),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        for member in employees {
            let record = employee::ActiveModel {
                ename: Set(member.ename),
                salary: Set(member.salary),
                deg: Set(member.deg),
                department_id: Set(dept.id),
                ..Default::default()
            };
            record.insert(&txn).await?;
        }
        txn.commit().await?;
        Ok(())
    }

    /// Merge a detached employee back into storage, returning the refreshed
    /// row.
    ///
    /// # Errors
    /// Returns [`StoreError::NoLongerExists`] if the employee is gone,
    /// [`StoreError::Db`] otherwise.
    pub async fn edit(&self, employee: employee::Model) -> Result<employee::Model, StoreError> {
        let id = employee.id;
        let record = employee::ActiveModel {
            id: Set(id),
            ename: Set(employee.ename),
            salary: Set(employee.salary),
            deg: Set(employee.deg),
            department_id: Set(employee.department_id),
        };
        self.employees.edit(id, record).await
    }

    /// # Errors
    /// Returns [`StoreError::NoLongerExists`] if the id does not resolve,
    /// [`StoreError::Db`] otherwise.
    pub async fn destroy(&self, id: i64) -> Result<(), StoreError> {
        self.employees.destroy(id).await
    }

    /// # Errors
    /// Returns [`StoreError::Db`] if the query fails.
    pub async fn find_all(&self) -> Result<Vec<employee::Model>, StoreError> {
        self.employees.find_all().await
    }

    /// # Errors
    /// Returns [`StoreError::Db`] if the query fails.
    pub async fn find_paged(
        &self,
        max_results: u64,
        first_result: u64,
    ) -> Result<Vec<employee::Model>, StoreError> {
        self.employees.find_paged(max_results, first_result).await
    }

    /// # Errors
    /// Returns [`StoreError::Db`] if the query fails.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<employee::Model>, StoreError> {
        self.employees.find_by_id(id).await
    }

    /// # Errors
    /// Returns [`StoreError::Db`] if the query fails.
    pub async fn count(&self) -> Result<u64, StoreError> {
        self.employees.count().await
    }

    /// The collection side of the relation: every employee of a department.
    ///
    /// # Errors
    /// Returns [`StoreError::NoLongerExists`] if the department id does not
    /// resolve, [`StoreError::Db`] otherwise.
    pub async fn employees_of(
        &self,
        department_id: i64,
    ) -> Result<Vec<employee::Model>, StoreError> {
        let Some(dept) = department::Entity::find_by_id(department_id)
            .one(&self.db)
            .await?
        else {
            return Err(StoreError::no_longer_exists(department_id));
        };
        Ok(dept.find_related(employee::Entity).all(&self.db).await?)
    }
}
