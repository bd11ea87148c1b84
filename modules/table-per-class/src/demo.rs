//! The fixed demonstration scenario for the table-per-class example.

use relkit_db::{DatabaseConnection, StoreError};
use tracing::info;

use crate::domain::controller::StaffController;
use crate::domain::model::{NewStaff, Staff};

/// Create two teaching and two non-teaching staff records, then read the
/// union back in base-id order.
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

    for staff in controller.find_all().await? {
        let subtype = match &staff {
            Staff::Teaching(_) => "teaching",
            Staff::NonTeaching(_) => "non-teaching",
        };
        info!(
            id = staff.id(),
            name = staff.name(),
            subtype = subtype,
            "persisted staff"
        );
    }
    info!(
        count = controller.count().await?,
        "table-per-class scenario complete"
    );
    Ok(())
}
