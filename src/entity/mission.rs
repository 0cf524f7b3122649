//! Mission entity: the join between a scientist and a planet.
//!
//! Both foreign keys cascade on delete, so removing a scientist or a
//! planet removes every mission referencing it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "missions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub scientist_id: i32,
    pub planet_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::scientist::Entity",
        from = "Column::ScientistId",
        to = "super::scientist::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Scientist,
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::PlanetId",
        to = "super::planet::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Planet,
}

impl Related<super::scientist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scientist.def()
    }
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
