//! The fixed demonstration scenario for the direct-association example.

use relkit_db::{DatabaseConnection, StoreError};
use tracing::info;

use crate::domain::controller::EmployeesController;
use crate::domain::model::{NewDepartment, NewEmployee};

/// Create the Development department with its technical writer, then read the
/// pair back through the relation.
///
/// # Errors
/// Returns [`StoreError`] if any operation against the store fails.
pub async fn run(db: &DatabaseConnection) -> Result<(), StoreError> {
    let controller = EmployeesController::new(db.clone());

    controller
        .create(
            NewDepartment {
                name: "Development".to_owned(),
            },
            NewEmployee {
                ename: "Satish".to_owned(),
                salary: 45_000.0,
                deg: "Technical Writer".to_owned(),
            },
        )
        .await?;

    for employee in controller.find_all().await? {
        let department = controller.department_of(&employee).await?;
        info!(
            ename = %employee.ename,
            deg = %employee.deg,
            department = department.map(|d| d.name).as_deref().unwrap_or("-"),
            "persisted employee"
        );
    }
    info!(
        count = controller.count().await?,
        "one-to-one scenario complete"
    );
    Ok(())
}
