//! Create `students` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(pk_auto(Students::Id))
                    .col(string_len(Students::FirstName, 128).not_null())
                    .col(string_len(Students::LastName, 128).not_null())
                    .col(string_len(Students::Email, 255).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_students_email")
                    .table(Students::Table)
                    .col(Students::Email)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Students::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Students { Table, Id, FirstName, LastName, Email }
