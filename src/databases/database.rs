
use rusqlite::{params, Connection, OptionalExtension, Row};
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use std::sync::Arc;

use crate::databases::wrappers::Preban;


const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS prebans (
        server_id     TEXT    NOT NULL,
        user_id       TEXT    NOT NULL,
        created_at    TEXT    NOT NULL,
        created_by_id TEXT    NOT NULL,
        reason        TEXT,
        active        INTEGER NOT NULL,
        fulfilled_at  TEXT,
        PRIMARY KEY (server_id, user_id),
        CHECK (active = 0 OR fulfilled_at IS NULL)
    )";

const COLUMNS: &str = "server_id, user_id, created_at, created_by_id, reason, active, fulfilled_at";

fn read_preban(row: &Row) -> rusqlite::Result<Preban> {
    Ok(Preban {
        server_id: row.get(0)?,
        user_id: row.get(1)?,
        created_at: row.get(2)?,
        created_by_id: row.get(3)?,
        reason: row.get(4)?,
        active: row.get(5)?,
        fulfilled_at: row.get(6)?,
    })
}

/// SQLite connection holding the `prebans` table.
///
/// Statements borrow the connection and are not `Send`, so every query runs
/// in a plain function on the locked connection and never across an await.
#[derive(Clone)]
pub struct Database {
    connection: Arc<Mutex<Connection>>,
}

impl Database {

    pub fn open(path: &str) -> anyhow::Result<Self> {
        Database::init(Connection::open(path)?)
    }

    pub fn in_memory() -> anyhow::Result<Self> {
        Database::init(Connection::open_in_memory()?)
    }

    fn init(connection: Connection) -> anyhow::Result<Self> {
        connection.execute(SCHEMA, [])?;
        Ok(Database { connection: Arc::new(Mutex::new(connection)) })
    }

    pub async fn find(&self, server_id: &str, user_id: &str) -> anyhow::Result<Option<Preban>> {
        let connection = self.connection.lock().await;
        Ok(find(&connection, server_id, user_id)?)
    }

    pub async fn upsert(&self, preban: &Preban) -> anyhow::Result<()> {
        let connection = self.connection.lock().await;
        upsert(&connection, preban)?;
        Ok(())
    }

    pub async fn delete(&self, server_id: &str, user_id: &str) -> anyhow::Result<bool> {
        let connection = self.connection.lock().await;
        let deleted = connection.execute(
            "DELETE FROM prebans WHERE server_id = ?1 AND user_id = ?2",
            params![server_id, user_id],
        )?;
        Ok(deleted > 0)
    }

    pub async fn list_by_server(&self, server_id: &str) -> anyhow::Result<Vec<Preban>> {
        let connection = self.connection.lock().await;
        Ok(list_by_server(&connection, server_id)?)
    }

    pub async fn fulfill(&self, server_id: &str, user_id: &str, at: DateTime<Utc>) -> anyhow::Result<bool> {
        let connection = self.connection.lock().await;
        let updated = connection.execute(
            "UPDATE prebans SET active = 0, fulfilled_at = ?3 WHERE server_id = ?1 AND user_id = ?2",
            params![server_id, user_id, at],
        )?;
        Ok(updated > 0)
    }

}

fn find(connection: &Connection, server_id: &str, user_id: &str) -> rusqlite::Result<Option<Preban>> {
    connection.query_row(
        &format!("SELECT {} FROM prebans WHERE server_id = ?1 AND user_id = ?2", COLUMNS),
        params![server_id, user_id],
        read_preban,
    ).optional()
}

fn upsert(connection: &Connection, preban: &Preban) -> rusqlite::Result<usize> {
    // every mutable column is overwritten, nothing is merged
    connection.execute(
        &format!(
            "INSERT INTO prebans ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT (server_id, user_id) DO UPDATE SET
                created_at    = excluded.created_at,
                created_by_id = excluded.created_by_id,
                reason        = excluded.reason,
                active        = excluded.active,
                fulfilled_at  = excluded.fulfilled_at",
            COLUMNS),
        params![
            preban.server_id,
            preban.user_id,
            preban.created_at,
            preban.created_by_id,
            preban.reason,
            preban.active,
            preban.fulfilled_at,
        ],
    )
}

fn list_by_server(connection: &Connection, server_id: &str) -> rusqlite::Result<Vec<Preban>> {
    let mut statement = connection.prepare(&format!(
        "SELECT {} FROM prebans WHERE server_id = ?1 ORDER BY created_at ASC, user_id ASC",
        COLUMNS
    ))?;
    let rows = statement.query_map(params![server_id], read_preban)?;
    rows.collect()
}
