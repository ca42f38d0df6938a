use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::models::{Athlete, RaceHistoryEntry};

// Query parameters for race history
#[derive(Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    id: Option<i64>,
}

// GET /api/athletes - List all athletes
pub async fn get_athletes(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Athlete>>, ApiError> {
    let athletes = db::list_athletes(&pool).await?;

    Ok(Json(athletes))
}

// GET /api/athletes/:id - Get athlete by ID
pub async fn get_athlete_by_id(
    State(pool): State<SqlitePool>,
    Path(athlete_id): Path<i64>,
) -> Result<Json<Athlete>, ApiError> {
    let athlete = db::get_athlete_by_id(&pool, athlete_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(athlete))
}

// GET /api/athletes/fastest - Top 5 athletes by personal record
pub async fn get_fastest_athletes(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Athlete>>, ApiError> {
    let athletes = db::list_fastest_athletes(&pool).await?;

    Ok(Json(athletes))
}

// GET /api/athletes/history?id=123 - One athlete's complete race history
//
// The id check runs before any query; a missing parameter never reaches the
// database.
pub async fn get_athlete_history(
    State(pool): State<SqlitePool>,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<Vec<RaceHistoryEntry>>, ApiError> {
    let athlete_id = params
        .id
        .ok_or_else(|| ApiError::BadRequest("missing id query parameter".to_string()))?;

    let history = db::get_athlete_history(&pool, athlete_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load race history for athlete {}: {}", athlete_id, e);
            e
        })?;

    Ok(Json(history))
}
