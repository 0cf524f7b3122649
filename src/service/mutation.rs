//! Write-side database operations.
//!
//! Inputs arrive pre-validated (see `crate::validation`); nothing here
//! re-checks field contents. Multi-row writes run inside a transaction
//! so a failure leaves no partial state behind.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, QueryFilter, Set,
    TransactionTrait,
};

use crate::entity::{mission, scientist};
use crate::validation::{NewMission, NewScientist, ScientistPatch};

pub struct Mutation;

impl Mutation {
    pub async fn create_scientist(
        db: &DbConn,
        input: NewScientist,
    ) -> Result<scientist::Model, DbErr> {
        scientist::ActiveModel {
            name: Set(input.name),
            field_of_study: Set(input.field_of_study),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn update_scientist(
        db: &DbConn,
        scientist: scientist::Model,
        patch: ScientistPatch,
    ) -> Result<scientist::Model, DbErr> {
        // An empty patch assigns nothing; skip the round-trip.
        if patch.name.is_none() && patch.field_of_study.is_none() {
            return Ok(scientist);
        }

        let mut active = scientist.into_active_model();
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(field_of_study) = patch.field_of_study {
            active.field_of_study = Set(field_of_study);
        }
        active.update(db).await
    }

    /// Delete a scientist and every mission referencing it.
    ///
    /// Missions go first, then the scientist, in one transaction. Returns
    /// the number of missions removed.
    pub async fn delete_scientist(db: &DbConn, id: i32) -> Result<u64, DbErr> {
        let txn = db.begin().await?;

        let missions = mission::Entity::delete_many()
            .filter(mission::Column::ScientistId.eq(id))
            .exec(&txn)
            .await?;
        scientist::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(missions.rows_affected)
    }

    pub async fn create_mission(db: &DbConn, input: NewMission) -> Result<mission::Model, DbErr> {
        mission::ActiveModel {
            name: Set(input.name),
            scientist_id: Set(input.scientist_id),
            planet_id: Set(input.planet_id),
            ..Default::default()
        }
        .insert(db)
        .await
    }
}
