//! Create `employees` table.
//!
//! `email` is deliberately not a unique key: uniqueness is checked by the
//! service before insert, the same way the table was always used.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(pk_auto(Employees::Id))
                    .col(string_len(Employees::FirstName, 128).not_null())
                    .col(string_len(Employees::LastName, 128).not_null())
                    .col(string_len(Employees::Email, 255).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_employees_email")
                    .table(Employees::Table)
                    .col(Employees::Email)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Employees::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Employees { Table, Id, FirstName, LastName, Email }
