use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Versions {
    Table,
    Id,
    Enable,
    Year,
}

#[derive(Iden)]
enum Types {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum LicenceTypes {
    Table,
    Id,
    Name,
    Description,
    Image,
    QuestionBank,
    Order,
    Enable,
    TypeId,
    VersionId,
}

#[derive(Iden)]
enum QuestionsType {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Questions {
    Table,
    Id,
    Text,
    Image,
    Num,
    LicenceTypeId,
    QuestionTypeId,
}

#[derive(Iden)]
enum Choices {
    Table,
    Id,
    Text,
    Image,
    IsCorrect,
    QuestionId,
}

fn id_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .integer()
        .not_null()
        .primary_key()
        .auto_increment()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // versions
        manager
            .create_table(
                Table::create()
                    .table(Versions::Table)
                    .if_not_exists()
                    .col(id_col(Versions::Id))
                    .col(
                        ColumnDef::new(Versions::Enable)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Versions::Year).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_versions_year")
                    .table(Versions::Table)
                    .col(Versions::Year)
                    .to_owned(),
            )
            .await?;

        // types (professional / non-professional)
        manager
            .create_table(
                Table::create()
                    .table(Types::Table)
                    .if_not_exists()
                    .col(id_col(Types::Id))
                    .col(ColumnDef::new(Types::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // licence_types
        manager
            .create_table(
                Table::create()
                    .table(LicenceTypes::Table)
                    .if_not_exists()
                    .col(id_col(LicenceTypes::Id))
                    .col(ColumnDef::new(LicenceTypes::Name).string().not_null())
                    .col(ColumnDef::new(LicenceTypes::Description).string().null())
                    .col(ColumnDef::new(LicenceTypes::Image).string().null())
                    .col(ColumnDef::new(LicenceTypes::QuestionBank).string().null())
                    .col(ColumnDef::new(LicenceTypes::Order).integer().null())
                    .col(
                        ColumnDef::new(LicenceTypes::Enable)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(LicenceTypes::TypeId).integer().not_null())
                    .col(ColumnDef::new(LicenceTypes::VersionId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_licence_types_type_id")
                            .from(LicenceTypes::Table, LicenceTypes::TypeId)
                            .to(Types::Table, Types::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_licence_types_version_id")
                            .from(LicenceTypes::Table, LicenceTypes::VersionId)
                            .to(Versions::Table, Versions::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_licence_types_version_id")
                    .table(LicenceTypes::Table)
                    .col(LicenceTypes::VersionId)
                    .to_owned(),
            )
            .await?;

        // questions_type
        manager
            .create_table(
                Table::create()
                    .table(QuestionsType::Table)
                    .if_not_exists()
                    .col(id_col(QuestionsType::Id))
                    .col(ColumnDef::new(QuestionsType::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // questions
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(id_col(Questions::Id))
                    .col(ColumnDef::new(Questions::Text).string().not_null())
                    .col(ColumnDef::new(Questions::Image).string().null())
                    .col(ColumnDef::new(Questions::Num).integer().not_null())
                    .col(
                        ColumnDef::new(Questions::LicenceTypeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Questions::QuestionTypeId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_questions_licence_type_id")
                            .from(Questions::Table, Questions::LicenceTypeId)
                            .to(LicenceTypes::Table, LicenceTypes::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_questions_question_type_id")
                            .from(Questions::Table, Questions::QuestionTypeId)
                            .to(QuestionsType::Table, QuestionsType::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_questions_licence_type_id")
                    .table(Questions::Table)
                    .col(Questions::LicenceTypeId)
                    .to_owned(),
            )
            .await?;

        // choices
        manager
            .create_table(
                Table::create()
                    .table(Choices::Table)
                    .if_not_exists()
                    .col(id_col(Choices::Id))
                    .col(ColumnDef::new(Choices::Text).string().not_null())
                    .col(ColumnDef::new(Choices::Image).string().null())
                    .col(
                        ColumnDef::new(Choices::IsCorrect)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Choices::QuestionId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_choices_question_id")
                            .from(Choices::Table, Choices::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_choices_question_id")
                    .table(Choices::Table)
                    .col(Choices::QuestionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Choices::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Questions::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(QuestionsType::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(LicenceTypes::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Types::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Versions::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
