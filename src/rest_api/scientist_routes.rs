//! Scientist endpoints.
//!
//! Bodies arrive as raw JSON and go through the validation layer before
//! any write; malformed input is a 400 with the generic validation body,
//! never a framework-level rejection of a typed extractor.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use crate::service::{Mutation, Query};
use crate::validation;

use super::errors::{ApiError, ApiResult};
use super::views::{ScientistDetail, ScientistSummary};
use super::AppState;

pub fn scientist_routes() -> Router<AppState> {
    Router::new()
        .route("/scientists", get(list_scientists).post(create_scientist))
        .route(
            "/scientists/:id",
            get(get_scientist)
                .patch(patch_scientist)
                .delete(delete_scientist),
        )
}

/// GET /scientists - all scientists, missions omitted.
async fn list_scientists(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ScientistSummary>>> {
    let scientists = Query::list_scientists(&state.db).await?;
    Ok(Json(
        scientists.into_iter().map(ScientistSummary::from).collect(),
    ))
}

/// POST /scientists - validate, persist, return the full representation.
async fn create_scientist(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<ScientistDetail>)> {
    let input = validation::new_scientist(&body)?;
    let scientist = Mutation::create_scientist(&state.db, input).await?;
    let missions = Query::scientist_missions(&state.db, scientist.id).await?;

    tracing::info!(scientist_id = scientist.id, "scientist created");
    Ok((
        StatusCode::CREATED,
        Json(ScientistDetail::new(scientist, missions)),
    ))
}

/// GET /scientists/:id - full representation or 404.
async fn get_scientist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ScientistDetail>> {
    let scientist = Query::find_scientist_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Scientist"))?;
    let missions = Query::scientist_missions(&state.db, scientist.id).await?;

    Ok(Json(ScientistDetail::new(scientist, missions)))
}

/// PATCH /scientists/:id - allow-listed partial update, 202 on success.
async fn patch_scientist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<ScientistDetail>)> {
    let scientist = Query::find_scientist_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Scientist"))?;

    let patch = validation::scientist_patch(&body)?;
    let scientist = Mutation::update_scientist(&state.db, scientist, patch).await?;
    let missions = Query::scientist_missions(&state.db, scientist.id).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(ScientistDetail::new(scientist, missions)),
    ))
}

/// DELETE /scientists/:id - cascading delete, 204 with empty body.
async fn delete_scientist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    Query::find_scientist_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Scientist"))?;

    let missions_removed = Mutation::delete_scientist(&state.db, id).await?;
    tracing::info!(scientist_id = id, missions_removed, "scientist deleted");

    Ok(StatusCode::NO_CONTENT)
}
