use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000003_create_mentee_table::Mentee, m20260105_000004_create_subject_table::Subject,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AcademicRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(AcademicRecord::Id))
                    .col(integer(AcademicRecord::MenteeId))
                    .col(integer(AcademicRecord::SubjectId))
                    .col(double(AcademicRecord::CieMarks).default(0.0))
                    .col(double(AcademicRecord::AssignmentMarks).default(0.0))
                    .col(double(AcademicRecord::Attendance).default(0.0))
                    .col(
                        timestamp_with_time_zone(AcademicRecord::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_academic_record_mentee_id")
                            .from(AcademicRecord::Table, AcademicRecord::MenteeId)
                            .to(Mentee::Table, Mentee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_academic_record_subject_id")
                            .from(AcademicRecord::Table, AcademicRecord::SubjectId)
                            .to(Subject::Table, Subject::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_academic_record_mentee_subject")
                            .col(AcademicRecord::MenteeId)
                            .col(AcademicRecord::SubjectId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AcademicRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AcademicRecord {
    Table,
    Id,
    MenteeId,
    SubjectId,
    CieMarks,
    AssignmentMarks,
    Attendance,
    UpdatedAt,
}
