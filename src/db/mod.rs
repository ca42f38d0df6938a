use sqlx::sqlite::SqlitePool;
use crate::models::*;

// Athlete queries
pub async fn list_athletes(pool: &SqlitePool) -> Result<Vec<Athlete>, sqlx::Error> {
    sqlx::query_as::<_, Athlete>(
        r#"SELECT id, name, grade,
                  COALESCE(personal_record, '') AS personal_record,
                  COALESCE(events, '') AS events
           FROM athletes ORDER BY name"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_athlete_by_id(pool: &SqlitePool, athlete_id: i64) -> Result<Option<Athlete>, sqlx::Error> {
    sqlx::query_as::<_, Athlete>(
        r#"SELECT id, name, grade,
                  COALESCE(personal_record, '') AS personal_record,
                  COALESCE(events, '') AS events
           FROM athletes WHERE id = ?"#
    )
    .bind(athlete_id)
    .fetch_optional(pool)
    .await
}

/// Top 5 athletes by personal record. Times are fixed-width "MM:SS" text, so
/// the lexicographic sort is the chronological one.
pub async fn list_fastest_athletes(pool: &SqlitePool) -> Result<Vec<Athlete>, sqlx::Error> {
    sqlx::query_as::<_, Athlete>(
        r#"SELECT id, name, grade,
                  COALESCE(personal_record, '') AS personal_record,
                  COALESCE(events, '') AS events
           FROM athletes ORDER BY personal_record LIMIT 5"#
    )
    .fetch_all(pool)
    .await
}

/// All of one athlete's results joined with the meet they were run at,
/// oldest first.
pub async fn get_athlete_history(pool: &SqlitePool, athlete_id: i64) -> Result<Vec<RaceHistoryEntry>, sqlx::Error> {
    sqlx::query_as::<_, RaceHistoryEntry>(
        r#"SELECT m.name AS meet_name, m.date, r.time, r.place
           FROM results r
           JOIN meets m ON r.meet_id = m.id
           WHERE r.athlete_id = ?
           ORDER BY m.date"#
    )
    .bind(athlete_id)
    .fetch_all(pool)
    .await
}

// Meet queries
pub async fn list_meets(pool: &SqlitePool) -> Result<Vec<Meet>, sqlx::Error> {
    sqlx::query_as::<_, Meet>(
        r#"SELECT id, name, date, location, description FROM meets ORDER BY date"#
    )
    .fetch_all(pool)
    .await
}

// Result queries
pub async fn list_results(pool: &SqlitePool) -> Result<Vec<RaceResult>, sqlx::Error> {
    sqlx::query_as::<_, RaceResult>(
        r#"SELECT id, athlete_id, meet_id, time, place FROM results"#
    )
    .fetch_all(pool)
    .await
}

pub async fn list_results_by_meet(pool: &SqlitePool, meet_id: i64) -> Result<Vec<RaceResult>, sqlx::Error> {
    sqlx::query_as::<_, RaceResult>(
        r#"SELECT id, athlete_id, meet_id, time, place
           FROM results WHERE meet_id = ? ORDER BY place"#
    )
    .bind(meet_id)
    .fetch_all(pool)
    .await
}

/// Top 10 fastest recorded times across all meets, with athlete and meet names.
pub async fn list_fastest_times(pool: &SqlitePool) -> Result<Vec<ResultSummary>, sqlx::Error> {
    sqlx::query_as::<_, ResultSummary>(
        r#"SELECT a.name AS athlete_name, m.name AS meet_name, r.time, r.place
           FROM results r
           JOIN athletes a ON r.athlete_id = a.id
           JOIN meets m ON r.meet_id = m.id
           ORDER BY r.time
           LIMIT 10"#
    )
    .fetch_all(pool)
    .await
}

/// Results for the most recent meet by date, ordered by finishing place.
/// Empty when the meets table is empty (the MAX subquery yields NULL and
/// matches nothing).
pub async fn list_latest_meet_results(pool: &SqlitePool) -> Result<Vec<ResultSummary>, sqlx::Error> {
    sqlx::query_as::<_, ResultSummary>(
        r#"SELECT a.name AS athlete_name, m.name AS meet_name, r.time, r.place
           FROM results r
           JOIN athletes a ON r.athlete_id = a.id
           JOIN meets m ON r.meet_id = m.id
           WHERE m.date = (SELECT MAX(date) FROM meets)
           ORDER BY r.place"#
    )
    .fetch_all(pool)
    .await
}
