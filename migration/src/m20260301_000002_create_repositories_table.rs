use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Repositories::Table)
                    .if_not_exists()
                    .col(uuid(Repositories::Id).primary_key())
                    .col(string(Repositories::Name))
                    .col(string_null(Repositories::Description))
                    .col(string(Repositories::Url))
                    // Unowned reference: no foreign key constraint on purpose, a
                    // repository row may outlive or precede its user row.
                    .col(uuid(Repositories::UserId))
                    .col(timestamp(Repositories::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Repositories::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Repositories::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Repositories {
    Table,
    Id,
    Name,
    Description,
    Url,
    UserId,
    CreatedAt,
    UpdatedAt,
}
