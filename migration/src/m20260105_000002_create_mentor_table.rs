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
                    .table(Mentor::Table)
                    .if_not_exists()
                    .col(pk_auto(Mentor::Id))
                    .col(integer_uniq(Mentor::UserId))
                    .col(string(Mentor::Department))
                    .col(string_null(Mentor::Specialization))
                    .col(boolean(Mentor::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mentor_user_id")
                            .from(Mentor::Table, Mentor::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mentor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mentor {
    Table,
    Id,
    UserId,
    Department,
    Specialization,
    Active,
}
