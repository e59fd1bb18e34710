//! Settings query functions.

use rusqlite::Connection;

use crate::{DbError, Result};

/// Get a setting value by key.
pub fn get(conn: &Connection, key: &str) -> Result<String> {
    conn.query_row(
        "SELECT value FROM settings WHERE key = ?1",
        [key],
        |row| row.get(0),
    )
    .map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => DbError::NotFound(format!("setting '{key}'")),
        other => DbError::Sqlite(other),
    })
}

/// Set a setting value.
pub fn set(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
        rusqlite::params![key, value],
    )?;
    Ok(())
}

/// Get a setting as a boolean, defaulting to `default` if not found.
pub fn get_bool(conn: &Connection, key: &str, default: bool) -> Result<bool> {
    match get(conn, key) {
        Ok(v) => Ok(v == "true" || v == "1"),
        Err(DbError::NotFound(_)) => Ok(default),
        Err(e) => Err(e),
    }
}
