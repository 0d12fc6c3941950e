//! Request and response bodies.

use crate::db::categories::CategoryDraft;
use crate::db::error::{StoreError, StoreResult};
use crate::libs::messages::Message;
use crate::libs::todo::{parse_due_date, TodoDraft};
use serde::{Deserialize, Serialize};

/// Body of `POST /todos` and `PUT /todos/{id}`.
///
/// Fields are optional at the JSON level so a missing title becomes a 400
/// with a readable message instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
}

impl TodoPayload {
    pub fn into_draft(self) -> StoreResult<TodoDraft> {
        let title = self.title.unwrap_or_default();
        if title.trim().is_empty() {
            return Err(StoreError::validation(Message::TitleRequired));
        }

        // Empty string from a cleared date field means "no due date"
        let due_date = match self.due_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(parse_due_date(value)?),
        };

        Ok(TodoDraft::new(&title)
            .with_description(&self.description.unwrap_or_default())
            .with_due_date(due_date)
            .with_category(self.category_id))
    }
}

/// Body of `POST /categories` and `PUT /categories/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl CategoryPayload {
    pub fn into_draft(self) -> StoreResult<CategoryDraft> {
        match (self.name, self.color) {
            (Some(name), Some(color)) => CategoryDraft::new(&name, &color).validated(),
            _ => Err(StoreError::validation(Message::NameAndColorRequired)),
        }
    }
}

/// `{"message": ...}` confirmation returned by deletes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl From<Message> for MessageResponse {
    fn from(msg: Message) -> Self {
        Self { message: msg.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}
