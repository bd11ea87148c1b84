//! The fixed demonstration scenario for the single-table example.

use relkit_db::{DatabaseConnection, StoreError};
use tracing::info;

use crate::domain::controller::StaffController;
use crate::domain::model::NewStaff;

/// Create two teaching and two non-teaching staff records, then partition
/// them back through the discriminator.
///
/// # Errors
/// Returns [`StoreError`] if any operation against the store fails.
pub async fn run(db: &DatabaseConnection) -> Result<(), StoreError> {
    let controller = StaffController::new(db.clone());

    controller
        .create(vec![
            NewStaff::Teaching {
                name: "Gopal".to_owned(),
                qualification: "MSc MEd".to_owned(),
                subject_expertise: "Maths".to_owned(),
            },
            NewStaff::Teaching {
                name: "Manisha".to_owned(),
                qualification: "BSc BEd".to_owned(),
                subject_expertise: "English".to_owned(),
            },
            NewStaff::NonTeaching {
                name: "Satish".to_owned(),
                area_expertise: "Accounts".to_owned(),
            },
            NewStaff::NonTeaching {
                name: "Krishna".to_owned(),
                area_expertise: "Office Admin".to_owned(),
            },
        ])
        .await?;

    for staff in controller.find_teaching().await? {
        info!(name = staff.name(), "teaching staff");
    }
    for staff in controller.find_non_teaching().await? {
        info!(name = staff.name(), "non-teaching staff");
    }
    info!(
        count = controller.count().await?,
        "single-table scenario complete"
    );
    Ok(())
}
