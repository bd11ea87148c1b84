//! Conversions between `staff` rows and the tagged domain variants.

use sea_orm::{DbErr, Set};

use crate::domain::model::{NewStaff, NonTeachingStaff, Staff, TeachingStaff};

use super::entity::{self, StaffKind};

/// Map a row onto its variant.
///
/// A row whose discriminator disagrees with its columns is corrupt and
/// surfaces as a storage failure.
///
/// # Errors
/// Returns [`DbErr::Custom`] for a discriminator/column mismatch.
pub fn staff_from_row(row: entity::Model) -> Result<Staff, DbErr> {
    match row.kind {
        StaffKind::Teaching => {
            let (Some(qualification), Some(subject_expertise)) =
                (row.qualification, row.subject_expertise)
            else {
                return Err(DbErr::Custom(format!(
                    "staff row {} is marked teaching but misses its teaching columns",
                    row.id
                )));
            };
            Ok(Staff::Teaching(TeachingStaff {
                id: row.id,
                name: row.name,
                qualification,
                subject_expertise,
            }))
        }
        StaffKind::NonTeaching => {
            let Some(area_expertise) = row.area_expertise else {
                return Err(DbErr::Custom(format!(
                    "staff row {} is marked non-teaching but misses its expertise column",
                    row.id
                )));
            };
            Ok(Staff::NonTeaching(NonTeachingStaff {
                id: row.id,
                name: row.name,
                area_expertise,
            }))
        }
    }
}

/// Build the row for a new record; the id stays unset for the store to
/// assign.
#[must_use]
pub fn row_from_new(staff: NewStaff) -> entity::ActiveModel {
    match staff {
        NewStaff::Teaching {
            name,
            qualification,
            subject_expertise,
        } => entity::ActiveModel {
            name: Set(name),
            kind: Set(StaffKind::Teaching),
            qualification: Set(Some(qualification)),
            subject_expertise: Set(Some(subject_expertise)),
            area_expertise: Set(None),
            ..Default::default()
        },
        NewStaff::NonTeaching {
            name,
            area_expertise,
        } => entity::ActiveModel {
            name: Set(name),
            kind: Set(StaffKind::NonTeaching),
            qualification: Set(None),
            subject_expertise: Set(None),
            area_expertise: Set(Some(area_expertise)),
            ..Default::default()
        },
    }
}

/// Build the full detached state of an existing record for a merge.
#[must_use]
pub fn row_from_staff(staff: Staff) -> entity::ActiveModel {
    match staff {
        Staff::Teaching(teaching) => entity::ActiveModel {
            id: Set(teaching.id),
            name: Set(teaching.name),
            kind: Set(StaffKind::Teaching),
            qualification: Set(Some(teaching.qualification)),
            subject_expertise: Set(Some(teaching.subject_expertise)),
            area_expertise: Set(None),
        },
        Staff::NonTeaching(non_teaching) => entity::ActiveModel {
            id: Set(non_teaching.id),
            name: Set(non_teaching.name),
            kind: Set(StaffKind::NonTeaching),
            qualification: Set(None),
            subject_expertise: Set(None),
            area_expertise: Set(Some(non_teaching.area_expertise)),
        },
    }
}
