use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User, m20260105_000002_create_mentor_table::Mentor,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mentee::Table)
                    .if_not_exists()
                    .col(pk_auto(Mentee::Id))
                    .col(integer_uniq(Mentee::UserId))
                    .col(string_uniq(Mentee::Usn))
                    .col(integer(Mentee::Semester))
                    .col(string_null(Mentee::Section))
                    .col(integer_null(Mentee::MentorId))
                    .col(boolean(Mentee::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mentee_user_id")
                            .from(Mentee::Table, Mentee::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mentee_mentor_id")
                            .from(Mentee::Table, Mentee::MentorId)
                            .to(Mentor::Table, Mentor::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_mentee_mentor_id")
                    .table(Mentee::Table)
                    .col(Mentee::MentorId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mentee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mentee {
    Table,
    Id,
    UserId,
    Usn,
    Semester,
    Section,
    MentorId,
    Active,
}
