use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::commute::{Commute, UsageEntry};
use crate::models::day_of_week::DayOfWeek;
use crate::models::traffic::TrafficLevel;
use chrono::NaiveTime;
use rusqlite::{Connection, OptionalExtension, Row, params};

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_db_time(idx: usize, s: &str) -> rusqlite::Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .map_err(|_| conversion_error(idx, AppError::InvalidTime(s.to_string())))
}

/// Map a `commutes` row; usage entries are loaded separately.
pub fn map_commute_row(row: &Row) -> rusqlite::Result<Commute> {
    let traffic_str: String = row.get("traffic")?;
    let traffic = TrafficLevel::from_db_str(&traffic_str)
        .ok_or_else(|| conversion_error(6, AppError::InvalidTraffic(traffic_str.clone())))?;

    Ok(Commute {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        name: row.get("name")?,
        is_round_trip: row.get::<_, i32>("is_round_trip")? == 1,
        usage: Vec::new(),
        approx_distance_km: row.get("approx_distance_km")?,
        approx_duration_minutes: row.get("approx_duration_minutes")?,
        traffic,
        created_at: row.get("created_at")?,
    })
}

fn map_usage_row(row: &Row) -> rusqlite::Result<UsageEntry> {
    let day_str: String = row.get("day")?;
    let day = DayOfWeek::from_db_str(&day_str)
        .ok_or_else(|| conversion_error(0, AppError::InvalidDay(day_str.clone())))?;

    let start_str: String = row.get("start_time")?;
    let start_time = parse_db_time(1, &start_str)?;

    let end_time = match row.get::<_, Option<String>>("end_time")? {
        Some(s) => Some(parse_db_time(2, &s)?),
        None => None,
    };

    Ok(UsageEntry {
        day,
        start_time,
        end_time,
    })
}

fn load_usage(conn: &Connection, commute_id: i64) -> AppResult<Vec<UsageEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT day, start_time, end_time FROM commute_usage
         WHERE commute_id = ?1
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([commute_id], map_usage_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a commute with its usage entries; returns the new id.
pub fn insert_commute(pool: &mut DbPool, c: &Commute) -> AppResult<i64> {
    let tx = pool.conn.transaction()?;

    tx.execute(
        "INSERT INTO commutes (user_id, name, is_round_trip, approx_distance_km, approx_duration_minutes, traffic, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            c.user_id,
            c.name,
            if c.is_round_trip { 1 } else { 0 },
            c.approx_distance_km,
            c.approx_duration_minutes,
            c.traffic.to_db_str(),
            c.created_at,
        ],
    )?;
    let id = tx.last_insert_rowid();

    {
        let mut stmt = tx.prepare(
            "INSERT INTO commute_usage (commute_id, day, start_time, end_time)
             VALUES (?1, ?2, ?3, ?4)",
        )?;
        for u in &c.usage {
            stmt.execute(params![
                id,
                u.day.to_db_str(),
                u.start_time.format("%H:%M:%S").to_string(),
                u.end_time.map(|t| t.format("%H:%M:%S").to_string()),
            ])?;
        }
    }

    tx.commit()?;
    Ok(id)
}

/// All commutes, optionally restricted to one user, ordered by id.
pub fn load_commutes(pool: &mut DbPool, user_id: Option<&str>) -> AppResult<Vec<Commute>> {
    let mut commutes = {
        let mut stmt = pool.conn.prepare(
            "SELECT * FROM commutes
             WHERE (?1 IS NULL OR user_id = ?1)
             ORDER BY id ASC",
        )?;
        let rows = stmt.query_map([user_id], map_commute_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        out
    };

    for c in &mut commutes {
        c.usage = load_usage(&pool.conn, c.id)?;
    }

    Ok(commutes)
}

pub fn load_commute(pool: &mut DbPool, id: i64) -> AppResult<Option<Commute>> {
    let commute = pool
        .conn
        .query_row("SELECT * FROM commutes WHERE id = ?1", [id], map_commute_row)
        .optional()?;

    match commute {
        Some(mut c) => {
            c.usage = load_usage(&pool.conn, c.id)?;
            Ok(Some(c))
        }
        None => Ok(None),
    }
}

/// Delete a commute and its usage rows; returns the number of commutes removed.
pub fn delete_commute(pool: &mut DbPool, id: i64) -> AppResult<usize> {
    let tx = pool.conn.transaction()?;
    tx.execute("DELETE FROM commute_usage WHERE commute_id = ?1", [id])?;
    let n = tx.execute("DELETE FROM commutes WHERE id = ?1", [id])?;
    tx.commit()?;
    Ok(n)
}
