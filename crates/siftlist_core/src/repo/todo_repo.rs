//! Todo repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `todos` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Every statement binds values as parameters; no SQL is ever built by
//!   interpolating caller input.
//! - Write paths validate titles before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::{migrations, DbError};
use crate::model::item::{
    validate_title, ItemValidationError, NewTodoItem, Priority, TodoId, TodoItem,
};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const TODO_SELECT_SQL: &str = "SELECT id, completed, title, timestamp, priority FROM todos";

const REQUIRED_COLUMNS: &[&str] = &["id", "completed", "title", "timestamp", "priority"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for todo persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ItemValidationError),
    Db(DbError),
    NotFound(TodoId),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "todo not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid todo data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match required \
                 {expected_version}; open the store through db::open_db"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ItemValidationError> for RepoError {
    fn from(value: ItemValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Partial update for one row. `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoChanges {
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
}

impl TodoChanges {
    pub fn title(value: impl Into<String>) -> Self {
        Self {
            title: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn completed(value: bool) -> Self {
        Self {
            completed: Some(value),
            ..Self::default()
        }
    }

    pub fn priority(value: Priority) -> Self {
        Self {
            priority: Some(value),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.completed.is_none() && self.priority.is_none()
    }
}

/// Repository interface for todo CRUD operations.
pub trait TodoRepository {
    /// Inserts an active item and returns the store-assigned id.
    fn create(&self, item: &NewTodoItem) -> RepoResult<TodoId>;
    /// Fetches one item by id.
    fn get(&self, id: TodoId) -> RepoResult<Option<TodoItem>>;
    /// Lists one tier, incomplete items first, insertion order within
    /// each group.
    fn list_tier(&self, priority: Priority) -> RepoResult<Vec<TodoItem>>;
    /// Lists the whole store in deterministic order (sweep input).
    fn list_all(&self) -> RepoResult<Vec<TodoItem>>;
    /// Applies a partial update; `NotFound` when the row is absent.
    fn update(&self, id: TodoId, changes: &TodoChanges) -> RepoResult<()>;
    /// Hard-deletes one row; `NotFound` when the row is absent.
    fn delete(&self, id: TodoId) -> RepoResult<()>;
}

/// SQLite-backed todo repository.
pub struct SqliteTodoRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTodoRepository<'conn> {
    /// Constructs a repository from a migrated, ready connection.
    ///
    /// Rejects connections whose schema version or shape does not match
    /// what this binary expects, so CRUD code never runs against a
    /// half-initialized store.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl TodoRepository for SqliteTodoRepository<'_> {
    fn create(&self, item: &NewTodoItem) -> RepoResult<TodoId> {
        item.validate()?;

        self.conn.execute(
            "INSERT INTO todos (completed, title, timestamp, priority)
             VALUES (0, ?1, ?2, ?3);",
            params![item.title.as_str(), item.timestamp, item.priority.code()],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get(&self, id: TodoId) -> RepoResult<Option<TodoItem>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TODO_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_todo_row(row)?));
        }

        Ok(None)
    }

    fn list_tier(&self, priority: Priority) -> RepoResult<Vec<TodoItem>> {
        let mut stmt = self.conn.prepare(&format!(
            "{TODO_SELECT_SQL}
             WHERE priority = ?1
             ORDER BY completed ASC, id ASC;"
        ))?;

        let mut rows = stmt.query(params![priority.code()])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_todo_row(row)?);
        }

        Ok(items)
    }

    fn list_all(&self) -> RepoResult<Vec<TodoItem>> {
        let mut stmt = self.conn.prepare(&format!(
            "{TODO_SELECT_SQL}
             ORDER BY priority ASC, completed ASC, id ASC;"
        ))?;

        let mut rows = stmt.query([])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_todo_row(row)?);
        }

        Ok(items)
    }

    fn update(&self, id: TodoId, changes: &TodoChanges) -> RepoResult<()> {
        if changes.is_empty() {
            return Err(RepoError::InvalidData(
                "empty change set for todo update".to_string(),
            ));
        }

        let mut assignments: Vec<&'static str> = Vec::new();
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(title) = &changes.title {
            validate_title(title)?;
            assignments.push("title = ?");
            bind_values.push(Value::Text(title.clone()));
        }
        if let Some(completed) = changes.completed {
            assignments.push("completed = ?");
            bind_values.push(Value::Integer(bool_to_int(completed)));
        }
        if let Some(priority) = changes.priority {
            assignments.push("priority = ?");
            bind_values.push(Value::Integer(priority.code()));
        }

        let sql = format!("UPDATE todos SET {} WHERE id = ?;", assignments.join(", "));
        bind_values.push(Value::Integer(id));

        let mut stmt = self.conn.prepare(&sql)?;
        let changed = stmt.execute(params_from_iter(bind_values))?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete(&self, id: TodoId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM todos WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = migrations::latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = 'todos'
        );",
        [],
        |row| row.get(0),
    )?;
    if table_exists == 0 {
        return Err(RepoError::MissingRequiredTable("todos"));
    }

    let mut stmt = conn.prepare("PRAGMA table_info(todos);")?;
    let mut rows = stmt.query([])?;
    let mut present = Vec::new();
    while let Some(row) = rows.next()? {
        present.push(row.get::<_, String>(1)?);
    }
    for column in REQUIRED_COLUMNS.iter().copied() {
        if !present.iter().any(|name| name.as_str() == column) {
            return Err(RepoError::MissingRequiredColumn {
                table: "todos",
                column,
            });
        }
    }

    Ok(())
}

fn parse_todo_row(row: &Row<'_>) -> RepoResult<TodoItem> {
    let completed = match row.get::<_, i64>("completed")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid completed value `{other}` in todos.completed"
            )));
        }
    };

    let code: i64 = row.get("priority")?;
    let priority = Priority::from_code(code).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid tier code `{code}` in todos.priority"))
    })?;

    Ok(TodoItem {
        id: row.get("id")?,
        title: row.get("title")?,
        completed,
        timestamp: row.get("timestamp")?,
        priority,
    })
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
