use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Team {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Manuscript {
    Table,
    Id,
    TeamId,
    Title,
    AuthorName,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Manuscript::Table)
                .col(ColumnDef::new(Manuscript::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Manuscript::TeamId).uuid().not_null())
                .col(ColumnDef::new(Manuscript::Title).string().not_null())
                .col(ColumnDef::new(Manuscript::AuthorName).string().not_null())
                .col(ColumnDef::new(Manuscript::Notes).text().null())
                .col(ColumnDef::new(Manuscript::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Manuscript::UpdatedAt).timestamp_with_time_zone().not_null())
                .to_owned(),
        ).await?;

        m.alter_table(
            Table::alter()
                .table(Manuscript::Table)
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_manuscript_team")
                        .from_tbl(Manuscript::Table)
                        .from_col(Manuscript::TeamId)
                        .to_tbl(Team::Table)
                        .to_col(Team::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_manuscript_team")
                .table(Manuscript::Table)
                .col(Manuscript::TeamId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Manuscript::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
