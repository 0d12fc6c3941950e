//! # ltodo - local to-do manager
//!
//! A single-user to-do list: a REST API over one SQLite file, and a
//! terminal client that talks to it.
//!
//! ## Features
//!
//! - **Tasks**: title, description, due date, completion flag, category
//! - **Categories**: named, colored labels with unique names
//! - **REST API**: axum server under `/api`, JSON in and out
//! - **Calendar**: month view of tasks by due date with overdue markers
//! - **Migrations**: versioned schema upgrades applied at server startup
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ltodo::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod client;
pub mod commands;
pub mod db;
pub mod libs;
pub mod server;
