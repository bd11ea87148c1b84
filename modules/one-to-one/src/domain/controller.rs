//! CRUD controller for the department/employee pair.

use relkit_db::{EntityController, StoreError};
use sea_orm::{ActiveModelTrait, DatabaseConnection, ModelTrait, Set, TransactionTrait};
use tracing::debug;

use crate::domain::model::{NewDepartment, NewEmployee};
use crate::infra::storage::entity::{department, employee};

/// Wraps the generic controller with the one piece this pattern teaches:
/// creating the pair wires the storage-assigned department id into the
/// employee's foreign key, inside a single transaction.
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

    /// Persist a department and its employee in one transaction.
    ///
    /// # Errors
    /// Returns [`StoreError::Db`] if either insert or the commit fails.
    pub async fn create(
        &self,
        department: NewDepartment,
        employee: NewEmployee,
    ) -> Result<(), StoreError> {
        debug!(department = %department.name, ename = %employee.ename, "creating pair");
        let txn = self.db.begin().await?;
        let dept = department::ActiveModel {
            name: Set(department.name),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        let member = employee::ActiveModel {
            ename: Set(employee.ename),
            salary: Set(employee.salary),
            deg: Set(employee.deg),
            department_id: Set(dept.id),
            ..Default::default()
        };
        member.insert(&txn).await?;
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

    /// Traverse the relation from an employee to its department.
    ///
    /// # Errors
    /// Returns [`StoreError::Db`] if the query fails.
    pub async fn department_of(
        &self,
        employee: &employee::Model,
    ) -> Result<Option<department::Model>, StoreError> {
        Ok(employee
            .find_related(department::Entity)
            .one(&self.db)
            .await?)
    }
}
