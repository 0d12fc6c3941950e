//! Interactive setup wizard.
//!
//! Asks for the API host and port and an optional database file, then
//! writes `config.json` into the data directory. Existing values are offered
//! as defaults, so running `ltodo init` again edits the configuration.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
