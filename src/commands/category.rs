use super::report_failure;
use crate::{
    client::ApiClient,
    libs::{
        messages::Message,
        view::{View, CATEGORY_PALETTE, DEFAULT_CATEGORY_COLOR},
    },
    msg_info, msg_print, msg_success,
    server::dto::CategoryPayload,
};
use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct CategoryArgs {
    #[command(subcommand)]
    command: CategoryCommand,
}

#[derive(Debug, Subcommand)]
enum CategoryCommand {
    /// List all categories
    List,
    /// Create a new category
    Add {
        /// Category name; prompted for when omitted
        name: Option<String>,
        /// Category color (e.g. #e3f2fd)
        #[arg(short, long)]
        color: Option<String>,
    },
    /// Edit a category
    Edit {
        /// Category ID
        id: i64,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New color
        #[arg(short, long)]
        color: Option<String>,
    },
    /// Delete a category
    Delete {
        /// Category ID
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show todos in a category
    Todos {
        /// Category ID
        id: i64,
    },
}

pub async fn cmd(client: &ApiClient, args: CategoryArgs) -> Result<()> {
    match args.command {
        CategoryCommand::List => handle_list(client).await,
        CategoryCommand::Add { name, color } => handle_add(client, name, color).await,
        CategoryCommand::Edit { id, name, color } => handle_edit(client, id, name, color).await,
        CategoryCommand::Delete { id, yes } => handle_delete(client, id, yes).await,
        CategoryCommand::Todos { id } => handle_show_todos(client, id).await,
    }
}

async fn handle_list(client: &ApiClient) -> Result<()> {
    let categories = match client.list_categories().await {
        Ok(categories) => categories,
        Err(e) => {
            report_failure(Message::LoadCategoriesFailed, &e);
            return Ok(());
        }
    };

    if categories.is_empty() {
        msg_info!(Message::NoCategoriesFound);
        return Ok(());
    }

    msg_print!(Message::CategoriesHeader, true);
    View::categories(&categories);
    Ok(())
}

async fn handle_add(client: &ApiClient, name: Option<String>, color: Option<String>) -> Result<()> {
    let interactive = name.is_none();
    let name = match name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCategoryName.to_string())
            .interact_text()?,
    };
    let color = match color {
        Some(color) => color,
        None if interactive => select_color(DEFAULT_CATEGORY_COLOR)?,
        None => DEFAULT_CATEGORY_COLOR.to_string(),
    };

    let payload = CategoryPayload {
        name: Some(name),
        color: Some(color),
    };
    match client.create_category(&payload).await {
        Ok(category) => msg_success!(Message::CategoryCreated(category.name)),
        Err(e) => report_failure(Message::SaveCategoryFailed, &e),
    }
    Ok(())
}

async fn handle_edit(client: &ApiClient, id: i64, name: Option<String>, color: Option<String>) -> Result<()> {
    let category = match client.get_category(id).await {
        Ok(category) => category,
        Err(e) => {
            report_failure(Message::SaveCategoryFailed, &e);
            return Ok(());
        }
    };

    let payload = if name.is_none() && color.is_none() {
        CategoryPayload {
            name: Some(
                Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptCategoryName.to_string())
                    .default(category.name.clone())
                    .interact_text()?,
            ),
            color: Some(select_color(&category.color)?),
        }
    } else {
        CategoryPayload {
            name: Some(name.unwrap_or(category.name)),
            color: Some(color.unwrap_or(category.color)),
        }
    };

    match client.update_category(id, &payload).await {
        Ok(category) => msg_success!(Message::CategoryUpdated(category.name)),
        Err(e) => report_failure(Message::SaveCategoryFailed, &e),
    }
    Ok(())
}

async fn handle_delete(client: &ApiClient, id: i64, yes: bool) -> Result<()> {
    let category = match client.get_category(id).await {
        Ok(category) => category,
        Err(e) => {
            report_failure(Message::DeleteCategoryFailed, &e);
            return Ok(());
        }
    };

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteCategory(category.name.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    // The server refuses while todos still reference the category
    match client.delete_category(id).await {
        Ok(_) => msg_success!(Message::CategoryDeleted(category.name)),
        Err(e) => report_failure(Message::DeleteCategoryFailed, &e),
    }
    Ok(())
}

async fn handle_show_todos(client: &ApiClient, id: i64) -> Result<()> {
    let category = match client.get_category(id).await {
        Ok(category) => category,
        Err(e) => {
            report_failure(Message::LoadCategoriesFailed, &e);
            return Ok(());
        }
    };

    let todos = match client.list_category_todos(id).await {
        Ok(todos) => todos,
        Err(e) => {
            report_failure(Message::LoadTodosFailed, &e);
            return Ok(());
        }
    };

    if todos.is_empty() {
        msg_info!(Message::NoTodosInCategory(category.name));
        return Ok(());
    }

    msg_print!(Message::TodosInCategory(category.name), true);
    View::todos(&todos, Local::now().date_naive());
    Ok(())
}

/// Palette picker. A current color outside the palette is offered as the first item.
fn select_color(current: &str) -> Result<String> {
    let mut items: Vec<String> = CATEGORY_PALETTE.iter().map(|c| c.to_string()).collect();
    let default = match items.iter().position(|c| c.eq_ignore_ascii_case(current)) {
        Some(index) => index,
        None => {
            items.insert(0, current.to_string());
            0
        }
    };

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptCategoryColor.to_string())
        .items(&items)
        .default(default)
        .interact()?;

    Ok(items[selection].clone())
}
