//! Display implementation for ltodo messages.
//!
//! All user-facing text lives here. The API reuses a subset of these
//! messages for its `{"error": ...}` and `{"message": ...}` bodies, so the
//! wording of those variants is part of the HTTP contract.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let text = match self {
            // === TODO MESSAGES ===
            Message::TodoCreated(title) => format!("Todo '{}' created", title),
            Message::TodoUpdated(title) => format!("Todo '{}' updated", title),
            Message::TodoDeleted(id) => format!("Todo #{} deleted", id),
            Message::TodoCompleted(title) => format!("Todo '{}' marked as completed", title),
            Message::TodoReopened(title) => format!("Todo '{}' marked as pending", title),
            Message::TodoNotFound => "Todo not found".to_string(),
            Message::TodoDeletedSuccessfully => "Todo deleted successfully".to_string(),
            Message::TodosHeader => "Todos:".to_string(),
            Message::NoTodosYet => "No todos yet. Create your first todo!".to_string(),
            Message::ConfirmDeleteTodo(title) => format!("Are you sure you want to delete todo '{}'?", title),
            Message::TitleRequired => "Title is required".to_string(),
            Message::InvalidDueDate(value) => format!("Invalid due date '{}', expected YYYY-MM-DD", value),

            // === CATEGORY MESSAGES ===
            Message::CategoryCreated(name) => format!("Category '{}' created", name),
            Message::CategoryUpdated(name) => format!("Category '{}' updated", name),
            Message::CategoryDeleted(name) => format!("Category '{}' deleted", name),
            Message::CategoryNotFound => "Category not found".to_string(),
            Message::CategoryDeletedSuccessfully => "Category deleted successfully".to_string(),
            Message::CategoryNameExists => "Category name already exists".to_string(),
            Message::CategoryInUse => "Cannot delete category that is being used by todos".to_string(),
            Message::ReferencedCategoryMissing(id) => format!("Category #{} does not exist", id),
            Message::NameAndColorRequired => "Name and color are required".to_string(),
            Message::CategoriesHeader => "Categories:".to_string(),
            Message::NoCategoriesFound => "No categories found".to_string(),
            Message::TodosInCategory(name) => format!("Todos in category '{}':", name),
            Message::NoTodosInCategory(name) => format!("No todos in category '{}'", name),
            Message::ConfirmDeleteCategory(name) => format!("Are you sure you want to delete category '{}'?", name),

            // === CALENDAR MESSAGES ===
            Message::CalendarHeader(month) => format!("📅 {}", month),
            Message::InvalidMonth(value) => format!("Invalid month '{}', expected YYYY-MM", value),

            // === SERVER MESSAGES ===
            Message::ServerStarting(address) => format!("Server running on {}", address),
            Message::ServerStopped => "Server stopped".to_string(),
            Message::DevelopmentMode(path) => format!("Development mode: using database {}", path),
            Message::ApiRunning => "Todo API is running".to_string(),
            Message::DatabaseReady(path) => format!("Database initialized successfully at {}", path),
            Message::DatabaseInitFailed(path) => format!("Cannot initialize database at {}", path),
            Message::InvalidRequestBody(error) => format!("Invalid request body: {}", error),
            Message::InvalidId(value) => format!("Invalid id '{}'", value),
            Message::InternalError => "An internal error occurred".to_string(),

            // === CLIENT MESSAGES ===
            Message::LoadTodosFailed => "Failed to load todos".to_string(),
            Message::CreateTodoFailed => "Failed to create todo".to_string(),
            Message::UpdateTodoFailed => "Failed to update todo".to_string(),
            Message::DeleteTodoFailed => "Failed to delete todo".to_string(),
            Message::LoadCategoriesFailed => "Failed to load categories".to_string(),
            Message::SaveCategoryFailed => "Failed to save category".to_string(),
            Message::DeleteCategoryFailed => "Failed to delete category".to_string(),
            Message::ApiRequestFailed(status, error) => format!("HTTP error! status: {} ({})", status, error),
            Message::ApiUnreachable(error) => format!("API request failed: {}. Is `ltodo serve` running?", error),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::DatabaseVersion(version) => format!("Database version: {}", version),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigModuleServer => "Server settings".to_string(),

            // === PROMPTS ===
            Message::PromptServerHost => "API host".to_string(),
            Message::PromptServerPort => "API port".to_string(),
            Message::PromptDatabasePath => "Database file (empty for default)".to_string(),
            Message::PromptTodoTitle => "Todo title".to_string(),
            Message::PromptTodoDescription => "Description (optional)".to_string(),
            Message::PromptTodoDueDate => "Due date YYYY-MM-DD (optional)".to_string(),
            Message::PromptCategoryName => "Category name".to_string(),
            Message::PromptCategoryColor => "Category color".to_string(),

            // === GENERAL ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", text)
    }
}
