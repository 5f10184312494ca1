use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(string(User::Id).primary_key())
                    .col(string(User::UserName))
                    .col(string(User::Password))
                    .col(string(User::EmailAddress))
                    .to_owned(),
            )
            .await?;

        // Lookup index only; registration performs its own duplicate check.
        manager
            .create_index(
                Index::create()
                    .name("idx_user_user_name")
                    .table(User::Table)
                    .col(User::UserName)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    UserName,
    Password,
    EmailAddress,
}
