//! Conversions between the subtype rows and the tagged domain variants.
//!
//! Unlike the single-table example, each subtype table carries every column
//! its variant needs, so the mapping is total.

use crate::domain::model::{NonTeachingStaff, Staff, TeachingStaff};

use super::entity::{non_teaching_staff, teaching_staff};

impl From<teaching_staff::Model> for Staff {
    fn from(row: teaching_staff::Model) -> Self {
        Self::Teaching(TeachingStaff {
            id: row.id,
            name: row.name,
            qualification: row.qualification,
            subject_expertise: row.subject_expertise,
        })
    }
}

impl From<non_teaching_staff::Model> for Staff {
    fn from(row: non_teaching_staff::Model) -> Self {
        Self::NonTeaching(NonTeachingStaff {
            id: row.id,
            name: row.name,
            area_expertise: row.area_expertise,
        })
    }
}
