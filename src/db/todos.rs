//! Todo records.
//!
//! A [`Todos`] value owns one connection and is meant to live for a single
//! operation: open it, call one method, drop it. Every read returns the
//! joined row (todo plus category name and color).

use super::db::{now_timestamp, Db};
use super::error::{StoreError, StoreResult};
use crate::libs::messages::Message;
use crate::libs::todo::{read_due_date, Todo, TodoDraft};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

const SELECT_TODOS: &str = "SELECT t.id, t.title, t.description, t.due_date, t.completed, t.category_id,
        t.created_at, t.updated_at, c.name AS category_name, c.color AS category_color
    FROM todos t
    LEFT JOIN categories c ON t.category_id = c.id";
const ORDER_NEWEST_FIRST: &str = "ORDER BY t.created_at DESC, t.id DESC";
const WHERE_ID: &str = "WHERE t.id = ?1";
const WHERE_CATEGORY: &str = "WHERE t.category_id = ?1";
const INSERT_TODO: &str = "INSERT INTO todos (title, description, due_date, category_id, completed, created_at, updated_at)
    VALUES (?1, ?2, ?3, ?4, 0, ?5, ?5)";
// updated_at never goes backwards and always moves by at least a millisecond
const UPDATE_TODO: &str = "UPDATE todos
    SET title = ?2, description = ?3, due_date = ?4, category_id = ?5,
        updated_at = MAX(?6, COALESCE(strftime('%Y-%m-%d %H:%M:%f', updated_at, '+0.001 seconds'), ?6))
    WHERE id = ?1";
const TOGGLE_TODO: &str = "UPDATE todos
    SET completed = CASE completed WHEN 1 THEN 0 ELSE 1 END,
        updated_at = MAX(?2, COALESCE(strftime('%Y-%m-%d %H:%M:%f', updated_at, '+0.001 seconds'), ?2))
    WHERE id = ?1";
const DELETE_TODO: &str = "DELETE FROM todos WHERE id = ?1";
const COUNT_BY_CATEGORY: &str = "SELECT COUNT(*) FROM todos WHERE category_id = ?1";
const CATEGORY_EXISTS: &str = "SELECT COUNT(*) > 0 FROM categories WHERE id = ?1";

pub struct Todos {
    conn: Connection,
}

impl Todos {
    pub fn new(db_path: &Path) -> StoreResult<Self> {
        let db = Db::open(db_path)?;
        Ok(Todos { conn: db.conn })
    }

    /// All todos, newest first.
    pub fn list(&mut self) -> StoreResult<Vec<Todo>> {
        self.query(&format!("{} {}", SELECT_TODOS, ORDER_NEWEST_FIRST), None)
    }

    /// Todos assigned to `category_id`, newest first.
    pub fn list_by_category(&mut self, category_id: i64) -> StoreResult<Vec<Todo>> {
        self.query(&format!("{} {} {}", SELECT_TODOS, WHERE_CATEGORY, ORDER_NEWEST_FIRST), Some(category_id))
    }

    pub fn find(&mut self, id: i64) -> StoreResult<Option<Todo>> {
        let todo = self
            .conn
            .query_row(&format!("{} {}", SELECT_TODOS, WHERE_ID), params![id], map_todo)
            .optional()?;
        Ok(todo)
    }

    pub fn get(&mut self, id: i64) -> StoreResult<Todo> {
        self.find(id)?.ok_or_else(|| StoreError::not_found(Message::TodoNotFound))
    }

    pub fn insert(&mut self, draft: &TodoDraft) -> StoreResult<Todo> {
        let draft = draft.validated()?;
        self.ensure_category(draft.category_id)?;

        self.conn.execute(
            INSERT_TODO,
            params![draft.title, draft.description, draft.due_date, draft.category_id, now_timestamp()],
        )?;
        let id = self.conn.last_insert_rowid();

        self.get(id)
    }

    /// Replaces title, description, due date and category in one statement.
    pub fn update(&mut self, id: i64, draft: &TodoDraft) -> StoreResult<Todo> {
        let draft = draft.validated()?;
        self.ensure_category(draft.category_id)?;

        let affected = self.conn.execute(
            UPDATE_TODO,
            params![id, draft.title, draft.description, draft.due_date, draft.category_id, now_timestamp()],
        )?;
        if affected == 0 {
            return Err(StoreError::not_found(Message::TodoNotFound));
        }

        self.get(id)
    }

    pub fn delete(&mut self, id: i64) -> StoreResult<()> {
        let affected = self.conn.execute(DELETE_TODO, params![id])?;
        if affected == 0 {
            return Err(StoreError::not_found(Message::TodoNotFound));
        }
        Ok(())
    }

    /// Flips the completion flag and returns the updated row.
    ///
    /// The flip itself is one conditional UPDATE, so two concurrent toggles
    /// of the same todo cannot lose each other. Reading the result back is a
    /// separate statement.
    pub fn toggle(&mut self, id: i64) -> StoreResult<Todo> {
        let affected = self.conn.execute(TOGGLE_TODO, params![id, now_timestamp()])?;
        if affected == 0 {
            return Err(StoreError::not_found(Message::TodoNotFound));
        }

        self.get(id)
    }

    pub fn count_by_category(&mut self, category_id: i64) -> StoreResult<i64> {
        let count = self.conn.query_row(COUNT_BY_CATEGORY, params![category_id], |row| row.get(0))?;
        Ok(count)
    }

    fn ensure_category(&self, category_id: Option<i64>) -> StoreResult<()> {
        let Some(category_id) = category_id else {
            return Ok(());
        };
        let exists: bool = self.conn.query_row(CATEGORY_EXISTS, params![category_id], |row| row.get(0))?;
        if !exists {
            return Err(StoreError::validation(Message::ReferencedCategoryMissing(category_id)));
        }
        Ok(())
    }

    fn query(&mut self, sql: &str, category_id: Option<i64>) -> StoreResult<Vec<Todo>> {
        let mut stmt = self.conn.prepare(sql)?;
        let todo_iter = match category_id {
            Some(category_id) => stmt.query_map(params![category_id], map_todo)?,
            None => stmt.query_map([], map_todo)?,
        };

        let mut todos = Vec::new();
        for todo in todo_iter {
            todos.push(todo?);
        }
        Ok(todos)
    }
}

fn map_todo(row: &Row) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        due_date: read_due_date(row.get(3)?),
        completed: row.get::<_, Option<bool>>(4)?.unwrap_or(false),
        category_id: row.get(5)?,
        created_at: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
        updated_at: row.get::<_, Option<String>>(7)?.unwrap_or_default(),
        category_name: row.get(8)?,
        category_color: row.get(9)?,
    })
}
