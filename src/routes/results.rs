use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::models::{RaceResult, ResultSummary};

// GET /api/results - List all results
pub async fn get_results(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<RaceResult>>, ApiError> {
    let results = db::list_results(&pool).await?;

    Ok(Json(results))
}

// GET /api/results/meet/:id - Results for one meet, ordered by place
//
// An unknown meet id is not an error; it yields an empty array.
pub async fn get_results_by_meet(
    State(pool): State<SqlitePool>,
    Path(meet_id): Path<i64>,
) -> Result<Json<Vec<RaceResult>>, ApiError> {
    let results = db::list_results_by_meet(&pool, meet_id).await?;

    Ok(Json(results))
}

// GET /api/results/fastest - Top 10 fastest times across all meets
pub async fn get_fastest_times(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<ResultSummary>>, ApiError> {
    let times = db::list_fastest_times(&pool).await.map_err(|e| {
        tracing::error!("Failed to load fastest times: {}", e);
        e
    })?;

    Ok(Json(times))
}

// GET /api/results/latest - Results for the most recent meet by date
pub async fn get_latest_meet_results(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<ResultSummary>>, ApiError> {
    let results = db::list_latest_meet_results(&pool).await.map_err(|e| {
        tracing::error!("Failed to load latest meet results: {}", e);
        e
    })?;

    Ok(Json(results))
}
