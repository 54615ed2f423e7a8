//! Review database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Review;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub reviewer_user_id: Uuid,
    pub reviewed_user_id: Uuid,
    pub booking_id: Option<i32>,
    /// 1 to 5 inclusive, constrained by the schema
    pub rating: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ReviewerUserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Reviewer,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ReviewedUserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Reviewed,
    #[sea_orm(
        belongs_to = "super::booking::Entity",
        from = "Column::BookingId",
        to = "super::booking::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Booking,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Review {
    fn from(model: Model) -> Self {
        Review {
            id: model.id,
            reviewer_user_id: model.reviewer_user_id,
            reviewed_user_id: model.reviewed_user_id,
            booking_id: model.booking_id,
            rating: model.rating,
            comment: model.comment,
            created_at: model.created_at,
        }
    }
}
