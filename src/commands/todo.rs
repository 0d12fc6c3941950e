use super::report_failure;
use crate::{
    client::ApiClient,
    libs::{
        messages::Message,
        todo::{parse_due_date, Todo, DATE_FORMAT},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
    server::dto::TodoPayload,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Todo ID
    id: i64,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Todo title; prompted for when omitted
    title: Option<String>,
    /// Description
    #[arg(short, long)]
    description: Option<String>,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    due: Option<String>,
    /// Category ID
    #[arg(short, long)]
    category: Option<i64>,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Todo ID
    id: i64,
    /// New title
    #[arg(short, long)]
    title: Option<String>,
    /// New description
    #[arg(short, long)]
    description: Option<String>,
    /// New due date (YYYY-MM-DD)
    #[arg(long, conflicts_with = "no_due")]
    due: Option<String>,
    /// Remove the due date
    #[arg(long)]
    no_due: bool,
    /// New category ID
    #[arg(short, long, conflicts_with = "no_category")]
    category: Option<i64>,
    /// Detach the todo from its category
    #[arg(long)]
    no_category: bool,
}

impl EditArgs {
    fn has_changes(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.due.is_some()
            || self.no_due
            || self.category.is_some()
            || self.no_category
    }
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Todo ID
    id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn list(client: &ApiClient) -> Result<()> {
    let todos = match client.list_todos().await {
        Ok(todos) => todos,
        Err(e) => {
            report_failure(Message::LoadTodosFailed, &e);
            return Ok(());
        }
    };

    if todos.is_empty() {
        msg_info!(Message::NoTodosYet);
        return Ok(());
    }

    msg_print!(Message::TodosHeader, true);
    View::todos(&todos, Local::now().date_naive());
    Ok(())
}

pub async fn show(client: &ApiClient, args: ShowArgs) -> Result<()> {
    match client.get_todo(args.id).await {
        Ok(todo) => View::todo_detail(&todo, Local::now().date_naive()),
        Err(e) => report_failure(Message::LoadTodosFailed, &e),
    }
    Ok(())
}

pub async fn add(client: &ApiClient, args: AddArgs) -> Result<()> {
    let interactive = args.title.is_none();
    let title = match args.title {
        Some(title) => title,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTodoTitle.to_string())
            .interact_text()?,
    };

    let description = match args.description {
        Some(description) => Some(description),
        None if interactive => Some(
            Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTodoDescription.to_string())
                .allow_empty(true)
                .interact_text()?,
        ),
        None => None,
    };

    let due = match args.due {
        Some(due) => Some(due),
        None if interactive => Some(prompt_due_date(None)?),
        None => None,
    };
    if !due_date_is_valid(due.as_deref()) {
        return Ok(());
    }

    let payload = TodoPayload {
        title: Some(title),
        description,
        due_date: due,
        category_id: args.category,
    };

    match client.create_todo(&payload).await {
        Ok(todo) => msg_success!(Message::TodoCreated(todo.title)),
        Err(e) => report_failure(Message::CreateTodoFailed, &e),
    }
    Ok(())
}

pub async fn edit(client: &ApiClient, args: EditArgs) -> Result<()> {
    let todo = match client.get_todo(args.id).await {
        Ok(todo) => todo,
        Err(e) => {
            report_failure(Message::LoadTodosFailed, &e);
            return Ok(());
        }
    };

    let payload = if args.has_changes() {
        merge_edit(&todo, args)
    } else {
        prompt_edit(&todo)?
    };
    if !due_date_is_valid(payload.due_date.as_deref()) {
        return Ok(());
    }

    match client.update_todo(todo.id, &payload).await {
        Ok(todo) => msg_success!(Message::TodoUpdated(todo.title)),
        Err(e) => report_failure(Message::UpdateTodoFailed, &e),
    }
    Ok(())
}

pub async fn done(client: &ApiClient, args: ShowArgs) -> Result<()> {
    match client.toggle_todo(args.id).await {
        Ok(todo) if todo.completed => msg_success!(Message::TodoCompleted(todo.title)),
        Ok(todo) => msg_success!(Message::TodoReopened(todo.title)),
        Err(e) => report_failure(Message::UpdateTodoFailed, &e),
    }
    Ok(())
}

pub async fn delete(client: &ApiClient, args: DeleteArgs) -> Result<()> {
    if !args.yes {
        let title = match client.get_todo(args.id).await {
            Ok(todo) => todo.title,
            Err(e) => {
                report_failure(Message::DeleteTodoFailed, &e);
                return Ok(());
            }
        };

        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTodo(title).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    match client.delete_todo(args.id).await {
        Ok(_) => msg_success!(Message::TodoDeleted(args.id)),
        Err(e) => report_failure(Message::DeleteTodoFailed, &e),
    }
    Ok(())
}

/// PUT replaces every field, so unspecified flags keep the current values.
fn merge_edit(todo: &Todo, args: EditArgs) -> TodoPayload {
    let due_date = if args.no_due {
        None
    } else {
        args.due.or_else(|| current_due(todo))
    };
    let category_id = if args.no_category {
        None
    } else {
        args.category.or(todo.category_id)
    };

    TodoPayload {
        title: Some(args.title.unwrap_or_else(|| todo.title.clone())),
        description: Some(args.description.unwrap_or_else(|| todo.description.clone())),
        due_date,
        category_id,
    }
}

fn prompt_edit(todo: &Todo) -> Result<TodoPayload> {
    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTodoTitle.to_string())
        .default(todo.title.clone())
        .interact_text()?;
    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTodoDescription.to_string())
        .default(todo.description.clone())
        .allow_empty(true)
        .interact_text()?;
    let due = prompt_due_date(current_due(todo))?;

    Ok(TodoPayload {
        title: Some(title),
        description: Some(description),
        due_date: Some(due),
        category_id: todo.category_id,
    })
}

fn prompt_due_date(current: Option<String>) -> Result<String> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTodoDueDate.to_string())
        .default(current.unwrap_or_default())
        .allow_empty(true)
        .interact_text()?)
}

fn current_due(todo: &Todo) -> Option<String> {
    todo.due_date.map(|d| d.format(DATE_FORMAT).to_string())
}

/// Checks a due date locally before it is sent. Empty means "no due date".
fn due_date_is_valid(due: Option<&str>) -> bool {
    match due.map(str::trim) {
        None | Some("") => true,
        Some(value) => match parse_due_date(value) {
            Ok(_) => true,
            Err(e) => {
                msg_error!(e);
                false
            }
        },
    }
}
