use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeachingStaff::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeachingStaff::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TeachingStaff::Name).string().not_null())
                    .col(
                        ColumnDef::new(TeachingStaff::Qualification)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeachingStaff::SubjectExpertise)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(NonTeachingStaff::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NonTeachingStaff::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(NonTeachingStaff::Name).string().not_null())
                    .col(
                        ColumnDef::new(NonTeachingStaff::AreaExpertise)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StaffIds::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StaffIds::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StaffIds::NextId).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Seed the allocation row the sequence increments.
        let seed = Query::insert()
            .into_table(StaffIds::Table)
            .columns([StaffIds::Id, StaffIds::NextId])
            .values_panic([1.into(), 1.into()])
            .to_owned();
        manager.exec_stmt(seed).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StaffIds::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(NonTeachingStaff::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TeachingStaff::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TeachingStaff {
    Table,
    Id,
    Name,
    Qualification,
    SubjectExpertise,
}

#[derive(DeriveIden)]
enum NonTeachingStaff {
    Table,
    Id,
    Name,
    AreaExpertise,
}

#[derive(DeriveIden)]
enum StaffIds {
    Table,
    Id,
    NextId,
}
