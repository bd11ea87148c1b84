use sea_orm::entity::prelude::*;

/// Discriminator for the shared `staff` table.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum StaffKind {
    #[sea_orm(string_value = "teaching")]
    Teaching,
    #[sea_orm(string_value = "non_teaching")]
    NonTeaching,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "staff")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub kind: StaffKind,
    pub qualification: Option<String>,
    pub subject_expertise: Option<String>,
    pub area_expertise: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
