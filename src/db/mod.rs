//! Database layer for ltodo.
//!
//! SQLite persistence for todos and categories. Every store operation opens
//! its own connection to an explicitly configured file and releases it when
//! the operation returns, so no connection is shared between requests.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ltodo::db::{db::Db, todos::Todos};
//! use ltodo::libs::todo::TodoDraft;
//! use std::path::Path;
//!
//! let path = Path::new("todo.db");
//! Db::new(path)?; // migrate once at startup
//!
//! let todo = Todos::new(path)?.insert(&TodoDraft::new("Buy milk"))?;
//! let all = Todos::new(path)?.list()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection handling and timestamp helpers.
pub mod db;

/// Store error taxonomy shared by all record modules.
pub mod error;

/// Versioned schema migrations.
pub mod migrations;

/// Category records: named, colored tags for todos.
pub mod categories;

/// Todo records and their category join.
pub mod todos;
