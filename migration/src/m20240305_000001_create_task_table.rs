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
enum Task {
    Table,
    Id,
    TeamId,
    Title,
    Description,
    Completed,
    Assignee,
    DueAt,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Task::Table)
                .col(ColumnDef::new(Task::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Task::TeamId).uuid().not_null())
                .col(ColumnDef::new(Task::Title).string().not_null())
                .col(ColumnDef::new(Task::Description).text().null())
                .col(ColumnDef::new(Task::Completed).boolean().not_null().default(false))
                .col(ColumnDef::new(Task::Assignee).uuid().null())
                .col(ColumnDef::new(Task::DueAt).timestamp_with_time_zone().null())
                .col(ColumnDef::new(Task::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Task::UpdatedAt).timestamp_with_time_zone().not_null())
                .to_owned(),
        ).await?;

        m.alter_table(
            Table::alter()
                .table(Task::Table)
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_task_team")
                        .from_tbl(Task::Table)
                        .from_col(Task::TeamId)
                        .to_tbl(Team::Table)
                        .to_col(Team::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_task_assignee")
                        .from_tbl(Task::Table)
                        .from_col(Task::Assignee)
                        .to_tbl(User::Table)
                        .to_col(User::Id)
                        .on_delete(ForeignKeyAction::SetNull)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_task_team")
                .table(Task::Table)
                .col(Task::TeamId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Task::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
