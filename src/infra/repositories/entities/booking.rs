//! Booking database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Booking, BookingStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub family_user_id: Uuid,
    pub caregiver_user_id: Uuid,
    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    /// One of the fixed status strings, constrained by the schema
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::FamilyUserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    FamilyUser,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CaregiverUserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    CaregiverUser,
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Booking {
    fn from(model: Model) -> Self {
        Booking {
            id: model.id,
            family_user_id: model.family_user_id,
            caregiver_user_id: model.caregiver_user_id,
            start_time: model.start_time,
            end_time: model.end_time,
            notes: model.notes,
            status: BookingStatus::from(model.status.as_str()),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
