use axum::{extract::State, response::Json};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::models::Meet;

// GET /api/meets - List all meets, oldest first
pub async fn get_meets(State(pool): State<SqlitePool>) -> Result<Json<Vec<Meet>>, ApiError> {
    let meets = db::list_meets(&pool).await?;

    Ok(Json(meets))
}
