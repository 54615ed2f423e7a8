//! Profile database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Profile;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// One profile per user
    #[sea_orm(unique)]
    pub user_id: Uuid,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
    /// Money-like value, two fractional digits
    #[sea_orm(column_type = "Decimal(Some((18, 2)))", nullable)]
    pub hourly_rate: Option<Decimal>,
    pub years_of_experience: Option<i32>,
    pub languages: Option<String>,
    pub is_verified: bool,
    pub verified_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::service::Entity")]
    Services,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Services.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Profile {
    fn from(model: Model) -> Self {
        Profile {
            id: model.id,
            user_id: model.user_id,
            bio: model.bio,
            profile_image_url: model.profile_image_url,
            hourly_rate: model.hourly_rate,
            years_of_experience: model.years_of_experience,
            languages: model.languages,
            is_verified: model.is_verified,
            verified_at: model.verified_at,
        }
    }
}
