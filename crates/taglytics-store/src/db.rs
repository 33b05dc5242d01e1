use rusqlite::{params, Connection};
use std::path::Path;

use taglytics_types::{NamedQuery, ProjectId};

use crate::error::{Error, Result};

// Schema version (increment when changing table definitions)
const SCHEMA_VERSION: i32 = 1;

// Scope key prefix; combined with the project id it keeps saved queries
// from leaking across projects sharing one database file.
const SCOPE_PREFIX: &str = "tag-groups:";

/// Append-only store of saved queries, one ordered list per project.
///
/// List order is insertion order (rowid) and doubles as the selection
/// index in consumers. No update or delete statements exist here: a
/// saved query is immutable for the lifetime of the store.
pub struct QueryStore {
    conn: Connection,
}

impl QueryStore {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        let current_version: i32 =
            self.conn
                .query_row("PRAGMA user_version", [], |row| row.get(0))?;

        if current_version != 0 && current_version != SCHEMA_VERSION {
            self.conn
                .execute_batch("DROP TABLE IF EXISTS saved_queries;")?;
        }

        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS saved_queries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                scope_key TEXT NOT NULL,
                body TEXT NOT NULL,
                created_at TEXT NOT NULL DEFAULT (datetime('now'))
            );

            CREATE INDEX IF NOT EXISTS idx_queries_scope ON saved_queries(scope_key);
            "#,
        )?;

        self.conn
            .execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION), [])?;

        Ok(())
    }

    fn scope_key(project: &ProjectId) -> String {
        format!("{}{}", SCOPE_PREFIX, project)
    }

    /// Append a saved query to the project's list. Names are not unique;
    /// saving the same name twice stores two entries.
    pub fn save(&self, project: &ProjectId, query: &NamedQuery) -> Result<()> {
        let body = serde_json::to_string(query).map_err(Error::Serialize)?;
        self.conn.execute(
            r#"
            INSERT INTO saved_queries (scope_key, body)
            VALUES (?1, ?2)
            "#,
            params![Self::scope_key(project), body],
        )?;

        Ok(())
    }

    /// All queries saved for the project, oldest first.
    ///
    /// A row that fails to parse aborts the whole call with
    /// [`Error::Corrupt`]; stored data is never silently dropped.
    pub fn list(&self, project: &ProjectId) -> Result<Vec<NamedQuery>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, body
            FROM saved_queries
            WHERE scope_key = ?1
            ORDER BY id
            "#,
        )?;

        let rows = stmt
            .query_map([Self::scope_key(project)], |row| {
                Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(rowid, body)| {
                serde_json::from_str(&body).map_err(|source| Error::Corrupt { rowid, source })
            })
            .collect()
    }

    /// Number of queries saved for the project
    pub fn count(&self, project: &ProjectId) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            r#"
            SELECT COUNT(*)
            FROM saved_queries
            WHERE scope_key = ?1
            "#,
            [Self::scope_key(project)],
            |row| row.get(0),
        )?;

        Ok(count as usize)
    }

    /// Suggested name for the next query: "query #<n+1>" where n is the
    /// current count. The ordinal is computed numerically.
    pub fn next_query_name(&self, project: &ProjectId) -> Result<String> {
        let count = self.count(project)?;
        Ok(format!("query #{}", count + 1))
    }
}
