use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Team {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Invitation {
    Table,
    Id,
    Token,
    Email,
    Role,
    TeamId,
    InvitedBy,
    ExpiresAt,
    AcceptedAt,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Invitation::Table)
                .col(ColumnDef::new(Invitation::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Invitation::Token).string().not_null())
                .col(ColumnDef::new(Invitation::Email).string().not_null())
                .col(ColumnDef::new(Invitation::Role).string().not_null())
                .col(ColumnDef::new(Invitation::TeamId).uuid().not_null())
                .col(ColumnDef::new(Invitation::InvitedBy).uuid().null())
                .col(ColumnDef::new(Invitation::ExpiresAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Invitation::AcceptedAt).timestamp_with_time_zone().null())
                .col(ColumnDef::new(Invitation::CreatedAt).timestamp_with_time_zone().not_null())
                .to_owned(),
        ).await?;

        m.alter_table(
            Table::alter()
                .table(Invitation::Table)
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_invitation_team")
                        .from_tbl(Invitation::Table)
                        .from_col(Invitation::TeamId)
                        .to_tbl(Team::Table)
                        .to_col(Team::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_invitation_invited_by")
                        .from_tbl(Invitation::Table)
                        .from_col(Invitation::InvitedBy)
                        .to_tbl(User::Table)
                        .to_col(User::Id)
                        .on_delete(ForeignKeyAction::SetNull)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        // A token identifies at most one invitation.
        m.create_index(
            Index::create()
                .name("idx_invitation_token")
                .table(Invitation::Table)
                .col(Invitation::Token)
                .unique()
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_invitation_team")
                .table(Invitation::Table)
                .col(Invitation::TeamId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Invitation::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
