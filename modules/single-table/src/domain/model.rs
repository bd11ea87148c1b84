//! Tagged-variant rendition of the staff hierarchy.

/// A staff record read back from the shared table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Staff {
    Teaching(TeachingStaff),
    NonTeaching(NonTeachingStaff),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeachingStaff {
    pub id: i64,
    pub name: String,
    pub qualification: String,
    pub subject_expertise: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonTeachingStaff {
    pub id: i64,
    pub name: String,
    pub area_expertise: String,
}

/// Input variants; identifiers are assigned by storage.
#[derive(Debug, Clone)]
pub enum NewStaff {
    Teaching {
        name: String,
        qualification: String,
        subject_expertise: String,
    },
    NonTeaching {
        name: String,
        area_expertise: String,
    },
}

impl Staff {
    #[must_use]
    pub fn id(&self) -> i64 {
        match self {
            Self::Teaching(staff) => staff.id,
            Self::NonTeaching(staff) => staff.id,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Teaching(staff) => &staff.name,
            Self::NonTeaching(staff) => &staff.name,
        }
    }
}
