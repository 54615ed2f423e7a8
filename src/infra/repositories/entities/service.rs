//! Care service database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{CareService, ServiceType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub profile_id: i32,
    /// One of the fixed category strings, constrained by the schema
    pub service_type: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::ProfileId",
        to = "super::profile::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Profile,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for CareService {
    fn from(model: Model) -> Self {
        CareService {
            id: model.id,
            profile_id: model.profile_id,
            service_type: ServiceType::from(model.service_type.as_str()),
            description: model.description,
            is_active: model.is_active,
        }
    }
}
