//! Planet endpoints.
//!
//! Planets are read-only through the API; rows come from the seed
//! migration and leave only through cascades.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::service::Query;

use super::errors::ApiResult;
use super::views::PlanetSummary;
use super::AppState;

pub fn planet_routes() -> Router<AppState> {
    Router::new().route("/planets", get(list_planets))
}

/// GET /planets - all planets, missions omitted.
async fn list_planets(State(state): State<AppState>) -> ApiResult<Json<Vec<PlanetSummary>>> {
    let planets = Query::list_planets(&state.db).await?;
    Ok(Json(planets.into_iter().map(PlanetSummary::from).collect()))
}
