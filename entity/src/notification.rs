use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notification")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub sender_id: Option<i32>,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    /// JSON array of role names, e.g. `["mentor","mentee"]`.
    pub target_roles: String,
    pub target_user_id: Option<i32>,
    pub urgent: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::SenderId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Sender,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::TargetUserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TargetUser,
    #[sea_orm(has_many = "super::notification_read::Entity")]
    NotificationRead,
}

impl Related<super::notification_read::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NotificationRead.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
