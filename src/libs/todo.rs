use crate::db::error::{StoreError, StoreResult};
use crate::libs::messages::Message;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Due dates travel and are stored as plain calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A todo joined with its category's name and color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub category_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
    pub category_name: Option<String>,
    pub category_color: Option<String>,
}

/// Writable fields of a todo, as accepted by insert and update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub category_id: Option<i64>,
}

impl TodoDraft {
    pub fn new(title: &str) -> Self {
        TodoDraft {
            title: title.to_string(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }

    pub fn with_category(mut self, category_id: Option<i64>) -> Self {
        self.category_id = category_id;
        self
    }

    /// Trims title and description; the title must not end up empty.
    pub fn validated(&self) -> StoreResult<TodoDraft> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(StoreError::validation(Message::TitleRequired));
        }
        Ok(TodoDraft {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            due_date: self.due_date,
            category_id: self.category_id,
        })
    }
}

/// Parses a `YYYY-MM-DD` due date.
pub fn parse_due_date(value: &str) -> StoreResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| StoreError::validation(Message::InvalidDueDate(value.to_string())))
}

/// Lenient read of a stored due date. Values written with a time part
/// (`2024-06-14T00:00:00Z`) keep their calendar date; anything else is dropped.
pub fn read_due_date(stored: Option<String>) -> Option<NaiveDate> {
    let stored = stored?;
    let date_part = stored.get(..10)?;
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}
