//! The fixed demonstration scenario for the collection-association example.

use relkit_db::{DatabaseConnection, StoreError};
use tracing::info;

use crate::domain::controller::EmployeesController;
use crate::domain::model::{NewDepartment, NewEmployee};

fn writer(ename: &str, salary: f64) -> NewEmployee {
    NewEmployee {
        ename: ename.to_owned(),
        salary,
        deg: "Technical Writer".to_owned(),
    }
}

/// Create the Development department with its three writers, then read the
/// collection back.
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
            vec![
                writer("Satish", 45_000.0),
                writer("Krishna", 45_000.0),
                writer("Masthanvali", 50_000.0),
            ],
        )
        .await?;

    for employee in controller.find_all().await? {
        info!(
            ename = %employee.ename,
            department_id = employee.department_id,
            "persisted employee"
        );
    }
    info!(
        count = controller.count().await?,
        "one-to-many scenario complete"
    );
    Ok(())
}
