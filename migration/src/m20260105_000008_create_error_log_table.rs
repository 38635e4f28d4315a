use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ErrorLog::Table)
                    .if_not_exists()
                    .col(pk_auto(ErrorLog::Id))
                    .col(integer_null(ErrorLog::UserId))
                    .col(string(ErrorLog::Action))
                    .col(text(ErrorLog::Error))
                    .col(
                        timestamp_with_time_zone(ErrorLog::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_error_log_user_id")
                            .from(ErrorLog::Table, ErrorLog::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ErrorLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ErrorLog {
    Table,
    Id,
    UserId,
    Action,
    Error,
    CreatedAt,
}
