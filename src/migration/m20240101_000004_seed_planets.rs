//! Planets have no create endpoint; the catalog is seeded here.

use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use sea_orm_migration::prelude::*;

use crate::entity::planet;

#[derive(DeriveMigrationName)]
pub struct Migration;

const SEED_PLANETS: &[(&str, i64, &str)] = &[
    ("Mars", 225_000_000, "Sun"),
    ("Kepler-442b", 11_349_000_000_000_000, "Kepler-442"),
    ("Proxima Centauri b", 40_100_000_000_000, "Proxima Centauri"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for (name, distance, star) in SEED_PLANETS {
            let model = planet::ActiveModel {
                name: Set(Some(ToString::to_string(name))),
                distance_from_earth: Set(Some(*distance)),
                nearest_star: Set(Some(ToString::to_string(star))),
                ..Default::default()
            };
            model.insert(db).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        let names: Vec<&str> = SEED_PLANETS.iter().map(|(name, _, _)| *name).collect();
        planet::Entity::delete_many()
            .filter(planet::Column::Name.is_in(names))
            .exec(db)
            .await?;

        Ok(())
    }
}
