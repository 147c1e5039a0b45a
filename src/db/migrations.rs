//! Database migrations and schema management.
use anyhow::Result;
use rusqlite::Connection;

/// Creates the key-value schema if it doesn't exist yet.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS kv_store (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL
        );
        ",
    )?;
    migrate_kv_add_updated_at(conn)?;
    Ok(())
}

fn migrate_kv_add_updated_at(conn: &Connection) -> Result<()> {
    let mut stmt = conn.prepare("PRAGMA table_info(kv_store)")?;
    let rows = stmt.query_map([], |row| {
        let name: String = row.get(1)?;
        Ok(name)
    })?;
    for row in rows {
        if row? == "updated_at" {
            return Ok(());
        }
    }

    conn.execute(
        "ALTER TABLE kv_store ADD COLUMN updated_at TEXT NOT NULL DEFAULT ''",
        [],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();
        let columns: Vec<String> = conn
            .prepare("PRAGMA table_info(kv_store)")
            .unwrap()
            .query_map([], |row| row.get(1))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(columns, ["key", "value", "updated_at"]);
    }
}
