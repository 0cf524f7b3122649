//! Mission endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

use crate::service::{Mutation, Query};
use crate::validation::{self, ValidationError};

use super::errors::ApiResult;
use super::views::MissionWithParties;
use super::AppState;

pub fn mission_routes() -> Router<AppState> {
    Router::new().route("/missions", post(create_mission))
}

/// POST /missions - validate fields and referential integrity, persist,
/// return the mission with both parties embedded.
///
/// Both parent rows are fetched up front: that is the existence check,
/// and the models feed the nested response.
async fn create_mission(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<MissionWithParties>)> {
    let input = validation::new_mission(&body)?;

    let scientist = Query::find_scientist_by_id(&state.db, input.scientist_id)
        .await?
        .ok_or(ValidationError::MissingReference {
            entity: "Scientist",
            id: input.scientist_id,
        })?;
    let planet = Query::find_planet_by_id(&state.db, input.planet_id)
        .await?
        .ok_or(ValidationError::MissingReference {
            entity: "Planet",
            id: input.planet_id,
        })?;

    let mission = Mutation::create_mission(&state.db, input).await?;

    tracing::info!(mission_id = mission.id, "mission created");
    Ok((
        StatusCode::CREATED,
        Json(MissionWithParties::new(mission, scientist, planet)),
    ))
}
