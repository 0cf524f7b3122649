//! Read-side database operations.

use sea_orm::{ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::entity::{mission, planet, scientist};

pub struct Query;

impl Query {
    pub async fn list_scientists(db: &DbConn) -> Result<Vec<scientist::Model>, DbErr> {
        scientist::Entity::find()
            .order_by_asc(scientist::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_scientist_by_id(
        db: &DbConn,
        id: i32,
    ) -> Result<Option<scientist::Model>, DbErr> {
        scientist::Entity::find_by_id(id).one(db).await
    }

    /// A scientist's missions, each paired with its target planet.
    ///
    /// The planet side is `Option` because of the outer join, but a
    /// mission row always has a valid planet foreign key.
    pub async fn scientist_missions(
        db: &DbConn,
        scientist_id: i32,
    ) -> Result<Vec<(mission::Model, Option<planet::Model>)>, DbErr> {
        mission::Entity::find()
            .find_also_related(planet::Entity)
            .filter(mission::Column::ScientistId.eq(scientist_id))
            .order_by_asc(mission::Column::Id)
            .all(db)
            .await
    }

    /// A planet's missions, each paired with its scientist.
    pub async fn planet_missions(
        db: &DbConn,
        planet_id: i32,
    ) -> Result<Vec<(mission::Model, Option<scientist::Model>)>, DbErr> {
        mission::Entity::find()
            .find_also_related(scientist::Entity)
            .filter(mission::Column::PlanetId.eq(planet_id))
            .order_by_asc(mission::Column::Id)
            .all(db)
            .await
    }

    pub async fn list_planets(db: &DbConn) -> Result<Vec<planet::Model>, DbErr> {
        planet::Entity::find()
            .order_by_asc(planet::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_planet_by_id(db: &DbConn, id: i32) -> Result<Option<planet::Model>, DbErr> {
        planet::Entity::find_by_id(id).one(db).await
    }
}
