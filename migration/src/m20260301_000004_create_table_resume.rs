use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One row per key; the application only ever uses key = 'resume'
        manager
            .create_table(
                Table::create()
                    .table(Resume::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Resume::Key).text().not_null().primary_key())
                    .col(ColumnDef::new(Resume::Document).json_binary().not_null())
                    .col(
                        ColumnDef::new(Resume::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_resume_updated_at
                BEFORE UPDATE ON resume
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS update_resume_updated_at ON resume")
            .await?;

        manager
            .drop_table(Table::drop().table(Resume::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Resume {
    Table,
    Key,
    Document,
    UpdatedAt,
}
