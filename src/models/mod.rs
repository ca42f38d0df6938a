use serde::{Serialize, Deserialize};

/// Athlete roster row from the athletes table.
///
/// `personal_record` and `events` are nullable in the schema; the query layer
/// coalesces them to empty strings so the wire type stays a plain string.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Athlete {
    pub id: i64,
    pub name: String,
    pub grade: i64,
    pub personal_record: String,
    pub events: String,
}

/// Meet info from the meets table. Dates are ISO `YYYY-MM-DD` text.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Meet {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub location: String,
    pub description: Option<String>,
}

/// One athlete's outcome in one meet.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RaceResult {
    pub id: i64,
    pub athlete_id: i64,
    pub meet_id: i64,
    pub time: String,
    pub place: i64,
}

/// Result joined with athlete and meet names, for the fastest-times and
/// latest-meet views.
#[derive(Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    pub athlete_name: String,
    pub meet_name: String,
    pub time: String,
    pub place: i64,
}

/// One entry of an athlete's race history, joined with the meet it was run at.
#[derive(Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RaceHistoryEntry {
    pub meet_name: String,
    pub date: String,
    pub time: String,
    pub place: i64,
}
