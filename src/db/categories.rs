use super::db::{now_timestamp, Db};
use super::error::{is_unique_violation, StoreError, StoreResult};
use crate::libs::messages::Message;
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};
use std::path::Path;

const INSERT_CATEGORY: &str = "INSERT INTO categories (name, color, created_at) VALUES (?1, ?2, ?3)";
const UPDATE_CATEGORY: &str = "UPDATE categories SET name = ?2, color = ?3 WHERE id = ?1";
const DELETE_CATEGORY: &str = "DELETE FROM categories WHERE id = ?1";
const SELECT_ALL_CATEGORIES: &str = "SELECT id, name, color, created_at FROM categories ORDER BY name";
const SELECT_CATEGORY_BY_ID: &str = "SELECT id, name, color, created_at FROM categories WHERE id = ?1";
const COUNT_TODOS_IN_CATEGORY: &str = "SELECT COUNT(*) FROM todos WHERE category_id = ?1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub created_at: String,
}

/// Writable fields of a category. Both are required.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDraft {
    pub name: String,
    pub color: String,
}

impl CategoryDraft {
    pub fn new(name: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
        }
    }

    pub fn validated(&self) -> StoreResult<CategoryDraft> {
        let name = self.name.trim();
        let color = self.color.trim();
        if name.is_empty() || color.is_empty() {
            return Err(StoreError::validation(Message::NameAndColorRequired));
        }
        Ok(CategoryDraft::new(name, color))
    }
}

pub struct Categories {
    conn: Connection,
}

impl Categories {
    pub fn new(db_path: &Path) -> StoreResult<Self> {
        let db = Db::open(db_path)?;
        Ok(Self { conn: db.conn })
    }

    /// All categories ordered by name.
    pub fn list(&mut self) -> StoreResult<Vec<Category>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_CATEGORIES)?;
        let category_iter = stmt.query_map([], map_category)?;

        let mut categories = Vec::new();
        for category in category_iter {
            categories.push(category?);
        }
        Ok(categories)
    }

    pub fn find(&mut self, id: i64) -> StoreResult<Option<Category>> {
        let category = self.conn.query_row(SELECT_CATEGORY_BY_ID, params![id], map_category).optional()?;
        Ok(category)
    }

    pub fn get(&mut self, id: i64) -> StoreResult<Category> {
        self.find(id)?.ok_or_else(|| StoreError::not_found(Message::CategoryNotFound))
    }

    pub fn insert(&mut self, draft: &CategoryDraft) -> StoreResult<Category> {
        let draft = draft.validated()?;

        self.conn
            .execute(INSERT_CATEGORY, params![draft.name, draft.color, now_timestamp()])
            .map_err(conflict_on_duplicate)?;
        let id = self.conn.last_insert_rowid();

        self.get(id)
    }

    pub fn update(&mut self, id: i64, draft: &CategoryDraft) -> StoreResult<Category> {
        let draft = draft.validated()?;

        let affected = self
            .conn
            .execute(UPDATE_CATEGORY, params![id, draft.name, draft.color])
            .map_err(conflict_on_duplicate)?;
        if affected == 0 {
            return Err(StoreError::not_found(Message::CategoryNotFound));
        }

        self.get(id)
    }

    /// Deletes the category unless a todo still references it.
    ///
    /// The reference check is a separate count query issued before the delete.
    pub fn delete(&mut self, id: i64) -> StoreResult<()> {
        let in_use: i64 = self.conn.query_row(COUNT_TODOS_IN_CATEGORY, params![id], |row| row.get(0))?;
        if in_use > 0 {
            return Err(StoreError::CategoryInUse(Message::CategoryInUse.to_string()));
        }

        let affected = self.conn.execute(DELETE_CATEGORY, params![id])?;
        if affected == 0 {
            return Err(StoreError::not_found(Message::CategoryNotFound));
        }
        Ok(())
    }
}

fn conflict_on_duplicate(error: rusqlite::Error) -> StoreError {
    if is_unique_violation(&error) {
        StoreError::Conflict(Message::CategoryNameExists.to_string())
    } else {
        StoreError::Database(error)
    }
}

fn map_category(row: &Row) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        color: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        created_at: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
    })
}
