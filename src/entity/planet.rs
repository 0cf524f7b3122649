//! Planet entity.
//!
//! Planet columns are nullable; planets enter the system through the seed
//! migration only (there is no create endpoint), so no field validation
//! applies here.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "planets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub distance_from_earth: Option<i64>,
    pub nearest_star: Option<String>,
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

/// A planet's scientists: everyone with a mission targeting it.
impl Related<super::scientist::Entity> for Entity {
    fn to() -> RelationDef {
        super::mission::Relation::Scientist.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::mission::Relation::Planet.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
