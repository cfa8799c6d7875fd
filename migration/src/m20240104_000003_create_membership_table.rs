use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Team {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Membership {
    Table,
    UserId,
    TeamId,
    Role,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Membership::Table)
                .if_not_exists()
                .col(ColumnDef::new(Membership::UserId).uuid().not_null())
                .col(ColumnDef::new(Membership::TeamId).uuid().not_null())
                .col(ColumnDef::new(Membership::Role).string().not_null())
                .col(ColumnDef::new(Membership::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .primary_key(
                    Index::create()
                        .name("pk_membership")
                        .col(Membership::UserId)
                        .col(Membership::TeamId)
                )
                .to_owned(),
        ).await?;

        m.alter_table(
            Table::alter()
                .table(Membership::Table)
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_membership_user")
                        .from_tbl(Membership::Table)
                        .from_col(Membership::UserId)
                        .to_tbl(User::Table)
                        .to_col(User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_membership_team")
                        .from_tbl(Membership::Table)
                        .from_col(Membership::TeamId)
                        .to_tbl(Team::Table)
                        .to_col(Team::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_membership_user")
                .table(Membership::Table)
                .col(Membership::UserId)
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_membership_team")
                .table(Membership::Table)
                .col(Membership::TeamId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Membership::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
