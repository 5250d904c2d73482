use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::Index;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Questions {
    Table,
    LicenceTypeId,
    Num,
}

/// Question numbers are unique per licence type. Two concurrent authors that
/// compute the same `max(num) + 1` now collide on this index instead of
/// silently storing duplicates.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("ux_questions_licence_num")
                    .table(Questions::Table)
                    .col(Questions::LicenceTypeId)
                    .col(Questions::Num)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("ux_questions_licence_num")
                    .table(Questions::Table)
                    .to_owned(),
            )
            .await
    }
}
