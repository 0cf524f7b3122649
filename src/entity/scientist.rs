//! Scientist entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "scientists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub field_of_study: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::mission::Entity")]
    Mission,
}

impl Related<super::mission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mission.def()
    }
}

/// A scientist's planets: every planet one of their missions targets.
impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        super::mission::Relation::Planet.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::mission::Relation::Scientist.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
