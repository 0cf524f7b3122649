//! # Migration Layer
//!
//! Programmatic schema migrations. Constraint names follow the
//! `fk_<table>_<column>_<referred_table>` convention; both mission
//! foreign keys cascade on delete.

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_planets_table;
mod m20240101_000002_create_scientists_table;
mod m20240101_000003_create_missions_table;
mod m20240101_000004_seed_planets;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_planets_table::Migration),
            Box::new(m20240101_000002_create_scientists_table::Migration),
            Box::new(m20240101_000003_create_missions_table::Migration),
            Box::new(m20240101_000004_seed_planets::Migration),
        ]
    }
}
