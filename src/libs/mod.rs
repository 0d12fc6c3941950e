//! Shared building blocks: configuration, data locations, logging, user
//! messages, the todo model and terminal rendering.

pub mod config;
pub mod data_storage;
pub mod logging;
pub mod messages;
pub mod todo;
pub mod view;
