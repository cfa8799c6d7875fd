use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .col(
                        ColumnDef::new(User::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(User::Name)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::Email)
                            .string()
                            .null()
                    )
                    .col(
                        ColumnDef::new(User::PinHash)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::AuthHash)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::Color)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::Role)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;

        // Display name is the login key for the existing-identity path.
        manager
            .create_index(
                Index::create()
                    .name("idx_user_name")
                    .table(User::Table)
                    .col(User::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(User::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    Name,
    Email,
    PinHash,
    AuthHash,
    Color,
    Role,
    CreatedAt,
    UpdatedAt,
}
