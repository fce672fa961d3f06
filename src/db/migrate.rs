use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `commutes` and `commute_usage` tables.
fn create_commute_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS commutes (
            id                      INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id                 TEXT NOT NULL,
            name                    TEXT NOT NULL,
            is_round_trip           INTEGER NOT NULL DEFAULT 0,
            approx_distance_km      REAL NOT NULL DEFAULT 0,
            approx_duration_minutes REAL NOT NULL DEFAULT 0,
            traffic                 TEXT NOT NULL DEFAULT 'LOW' CHECK(traffic IN ('LOW','MEDIUM','HIGH')),
            created_at              TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS commute_usage (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            commute_id  INTEGER NOT NULL REFERENCES commutes(id) ON DELETE CASCADE,
            day         TEXT NOT NULL CHECK(day IN ('SUN','MON','TUE','WED','THU','FRI','SAT')),
            start_time  TEXT NOT NULL,
            end_time    TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_commutes_user ON commutes(user_id);
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Index usage rows by commute so listing stays cheap.
fn migrate_add_usage_index(conn: &Connection) -> Result<()> {
    let version = "20240205_0001_usage_commute_index";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_commute_usage_commute ON commute_usage(commute_id);",
    )?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Indexed commute_usage by commute')",
        [version],
    )?;

    tracing::info!(version, "migration applied");
    Ok(())
}

/// Public entry point: run all pending migrations.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;

    ensure_log_table(conn)?;

    if !table_exists(conn, "commutes")? {
        create_commute_tables(conn)?;
        tracing::info!("created commute tables");
    }

    migrate_add_usage_index(conn)?;

    Ok(())
}
