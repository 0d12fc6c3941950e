pub mod calendar;
pub mod category;
pub mod init;
pub mod migrations;
pub mod serve;
pub mod todo;

use crate::{
    client::{ApiClient, ClientError},
    libs::{
        config::{AppConfig, Config, Overrides},
        data_storage::{DataStorage, RunMode},
        logging,
        messages::Message,
    },
    msg_error,
};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Connection settings shared by every command. They override `config.json`.
#[derive(Debug, Clone, Default, Args)]
pub struct ConnectionArgs {
    /// API host
    #[arg(long, global = true)]
    host: Option<String>,
    /// API port
    #[arg(long, global = true, env = "LTODO_PORT")]
    port: Option<u16>,
    /// SQLite database file
    #[arg(long = "db", global = true)]
    database: Option<PathBuf>,
}

impl ConnectionArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            host: self.host.clone(),
            port: self.port,
            database: self.database.clone(),
        }
    }

    /// Resolves the runtime configuration once for the whole invocation.
    pub fn resolve(&self) -> Result<AppConfig> {
        let storage = DataStorage::new();
        Config::read_from(&storage)?.resolve(RunMode::detect(), &storage, self.overrides())
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Run the REST API server")]
    Serve,
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "List all todos")]
    List,
    #[command(about = "Show a single todo")]
    Show(todo::ShowArgs),
    #[command(about = "Create a todo")]
    Add(todo::AddArgs),
    #[command(about = "Edit a todo")]
    Edit(todo::EditArgs),
    #[command(about = "Toggle a todo between pending and completed")]
    Done(todo::ShowArgs),
    #[command(about = "Delete a todo")]
    Delete(todo::DeleteArgs),
    #[command(about = "Show todos on a month calendar")]
    Calendar(calendar::CalendarArgs),
    #[command(about = "Manage categories")]
    Category(category::CategoryArgs),
    #[command(about = "Inspect database migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        logging::init(matches!(cli.command, Commands::Serve));

        // Resolved on demand: `init` must work even when the stored configuration is unreadable
        let config = || cli.connection.resolve();
        let client = || config().map(|config| ApiClient::from_config(&config));

        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Serve => serve::cmd(config()?).await,
            Commands::Migrations(args) => migrations::cmd(&config()?, args),
            Commands::List => todo::list(&client()?).await,
            Commands::Show(args) => todo::show(&client()?, args).await,
            Commands::Add(args) => todo::add(&client()?, args).await,
            Commands::Edit(args) => todo::edit(&client()?, args).await,
            Commands::Done(args) => todo::done(&client()?, args).await,
            Commands::Delete(args) => todo::delete(&client()?, args).await,
            Commands::Calendar(args) => calendar::cmd(&client()?, args).await,
            Commands::Category(args) => category::cmd(&client()?, args).await,
        }
    }

    pub fn connection(&self) -> &ConnectionArgs {
        &self.connection
    }
}

/// Prints a failed API call as an error line. The command itself still succeeds.
pub(crate) fn report_failure(context: Message, error: &ClientError) {
    msg_error!(format!("{}: {}", context, error));
}
